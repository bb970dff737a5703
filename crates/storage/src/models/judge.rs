use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A judge identity. Recorded on every ledger row for auditing only; never
/// consulted by the scoring math.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Judge {
    pub judge_id: i64,
    pub name: String,
    pub created_at: chrono::NaiveDateTime,
}

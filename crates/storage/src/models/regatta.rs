use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A named scoring period. At most one regatta is active at a time,
/// maintained by the activation operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Regatta {
    pub regatta_id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: chrono::NaiveDateTime,
}

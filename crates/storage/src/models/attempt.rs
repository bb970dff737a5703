use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the append-only attempt ledger.
///
/// For a given (team, question) pair, `numero` runs 1..k contiguous with
/// k <= 3, at most one row has `acertou = true` and if so it is the last,
/// and `pontos > 0` only on a correct outcome. Rows are written exclusively
/// by the attempt registrar and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attempt {
    pub attempt_id: i64,
    pub team_id: i64,
    pub question_id: i64,
    pub numero: i64,
    pub acertou: bool,
    pub pontos: i64,
    pub judge_id: i64,
    pub created_at: chrono::NaiveDateTime,
}

use sqlx::SqlitePool;
use storage::{
    dto::attempt::{AttemptResult, AttemptStatusResponse, RegisterAttemptRequest},
    error::Result,
    services::scoring::{self, ScoringError},
};

/// Register a judged attempt through the scoring core
pub async fn register_attempt(
    pool: &SqlitePool,
    request: &RegisterAttemptRequest,
) -> std::result::Result<AttemptResult, ScoringError> {
    scoring::register_attempt(
        pool,
        request.team_id,
        request.question_id,
        request.acertou,
        request.judge_id,
    )
    .await
}

/// Current state of a (team, question) pair
pub async fn attempt_status(
    pool: &SqlitePool,
    team_id: i64,
    question_id: i64,
) -> Result<AttemptStatusResponse> {
    scoring::attempt_status(pool, team_id, question_id).await
}

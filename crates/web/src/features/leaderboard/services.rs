use sqlx::SqlitePool;
use storage::{
    dto::leaderboard::{LeaderboardEntry, LeaderboardScope},
    error::Result,
    services::scoring,
};

/// Ranked team totals within the requested scope
pub async fn get_leaderboard(
    pool: &SqlitePool,
    scope: LeaderboardScope,
) -> Result<Vec<LeaderboardEntry>> {
    scoring::compute_leaderboard(pool, scope).await
}

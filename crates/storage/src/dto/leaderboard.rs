use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Which ledger rows a leaderboard computation sums over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardScope {
    /// Every recorded attempt, across all regattas.
    Global,
    /// Only attempts on questions belonging to the given regatta.
    Regatta(i64),
}

/// Query parameters for the leaderboard endpoint. Absent `regatta_id` means
/// the global scope.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    pub regatta_id: Option<i64>,
}

impl LeaderboardQuery {
    pub fn scope(&self) -> LeaderboardScope {
        match self.regatta_id {
            Some(id) => LeaderboardScope::Regatta(id),
            None => LeaderboardScope::Global,
        }
    }
}

/// One ranked row: a team and its point total within the requested scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaderboardEntry {
    pub equipe: String,
    pub pontos: i64,
}

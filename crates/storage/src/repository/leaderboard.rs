use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::dto::leaderboard::{LeaderboardEntry, LeaderboardScope};
use crate::error::Result;

/// Repository for deriving rankings from the attempt ledger
pub struct LeaderboardRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LeaderboardRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Sum points per team over the scoped ledger rows.
    ///
    /// Every known team appears, including teams with no attempts (0
    /// points). Ordering is total descending, then team name ascending as
    /// the deterministic tie-break.
    pub async fn compute(&self, scope: LeaderboardScope) -> Result<Vec<LeaderboardEntry>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT t.name AS equipe, COALESCE(SUM(a.pontos), 0) AS pontos
            FROM teams t
            LEFT JOIN attempts a ON a.team_id = t.team_id
            "#,
        );

        if let LeaderboardScope::Regatta(regatta_id) = scope {
            query.push(
                " AND a.question_id IN (SELECT question_id FROM questions WHERE regatta_id = ",
            );
            query.push_bind(regatta_id);
            query.push(")");
        }

        query.push(
            r#"
            GROUP BY t.team_id
            ORDER BY pontos DESC, t.name ASC
            "#,
        );

        let entries: Vec<LeaderboardEntry> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(entries)
    }
}

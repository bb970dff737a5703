use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::Attempt;

/// All attempts for a (team, question) pair, ordered by attempt number
/// ascending. Generic over the executor so the registrar can run it inside
/// its write transaction.
pub async fn list_for_pair<'e, E>(executor: E, team_id: i64, question_id: i64) -> Result<Vec<Attempt>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let attempts = sqlx::query_as::<_, Attempt>(
        r#"
        SELECT attempt_id, team_id, question_id, numero, acertou, pontos, judge_id, created_at
        FROM attempts
        WHERE team_id = ?1 AND question_id = ?2
        ORDER BY numero ASC
        "#,
    )
    .bind(team_id)
    .bind(question_id)
    .fetch_all(executor)
    .await?;

    Ok(attempts)
}

/// Append one ledger row. The ledger is insert-only; no update or delete
/// operation exists on this table.
pub async fn insert<'e, E>(
    executor: E,
    team_id: i64,
    question_id: i64,
    numero: i64,
    acertou: bool,
    pontos: i64,
    judge_id: i64,
) -> Result<Attempt>
where
    E: Executor<'e, Database = Sqlite>,
{
    let attempt = sqlx::query_as::<_, Attempt>(
        r#"
        INSERT INTO attempts (team_id, question_id, numero, acertou, pontos, judge_id)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING attempt_id, team_id, question_id, numero, acertou, pontos, judge_id, created_at
        "#,
    )
    .bind(team_id)
    .bind(question_id)
    .bind(numero)
    .bind(acertou)
    .bind(pontos)
    .bind(judge_id)
    .fetch_one(executor)
    .await?;

    Ok(attempt)
}

/// Repository for reading the attempt ledger
pub struct AttemptRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AttemptRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_for_pair(&self, team_id: i64, question_id: i64) -> Result<Vec<Attempt>> {
        list_for_pair(self.pool, team_id, question_id).await
    }
}

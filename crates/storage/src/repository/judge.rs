use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::Judge;

/// Repository for Judge database operations
pub struct JudgeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JudgeRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Judge>> {
        let judges = sqlx::query_as::<_, Judge>(
            r#"
            SELECT judge_id, name, created_at
            FROM judges
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(judges)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            SELECT judge_id, name, created_at
            FROM judges
            WHERE judge_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(judge)
    }

    pub async fn create(&self, name: &str) -> Result<Judge> {
        let judge = sqlx::query_as::<_, Judge>(
            r#"
            INSERT INTO judges (name)
            VALUES (?1)
            RETURNING judge_id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::ConstraintViolation("A judge with this name already exists".into())
            } else {
                error
            }
        })?;

        Ok(judge)
    }

    /// Delete a judge. Rejected while the ledger references them.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM judges WHERE judge_id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let error = StorageError::from(e);
                if error.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(
                        "Judge has recorded attempts and cannot be deleted".into(),
                    )
                } else {
                    error
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

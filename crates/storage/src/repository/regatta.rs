use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::Regatta;

/// Repository for Regatta database operations
pub struct RegattaRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RegattaRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Regatta>> {
        let regattas = sqlx::query_as::<_, Regatta>(
            r#"
            SELECT regatta_id, name, active, created_at
            FROM regattas
            ORDER BY created_at DESC, regatta_id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(regattas)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Regatta> {
        let regatta = sqlx::query_as::<_, Regatta>(
            r#"
            SELECT regatta_id, name, active, created_at
            FROM regattas
            WHERE regatta_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(regatta)
    }

    /// The currently active regatta, if any
    pub async fn find_active(&self) -> Result<Option<Regatta>> {
        let regatta = sqlx::query_as::<_, Regatta>(
            r#"
            SELECT regatta_id, name, active, created_at
            FROM regattas
            WHERE active = 1
            "#,
        )
        .fetch_optional(self.pool)
        .await?;

        Ok(regatta)
    }

    /// Create a regatta. New regattas start inactive.
    pub async fn create(&self, name: &str) -> Result<Regatta> {
        let regatta = sqlx::query_as::<_, Regatta>(
            r#"
            INSERT INTO regattas (name)
            VALUES (?1)
            RETURNING regatta_id, name, active, created_at
            "#,
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(regatta)
    }

    /// Activate one regatta, deactivating every other in the same
    /// transaction so at most one is active at any time.
    pub async fn activate(&self, id: i64) -> Result<Regatta> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE regattas SET active = 0 WHERE regatta_id != ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let regatta = sqlx::query_as::<_, Regatta>(
            r#"
            UPDATE regattas
            SET active = 1
            WHERE regatta_id = ?1
            RETURNING regatta_id, name, active, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        tx.commit().await?;

        Ok(regatta)
    }

    /// Delete a regatta and (by cascade) its questions. Rejected while any
    /// of its questions has recorded attempts.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM regattas WHERE regatta_id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let error = StorageError::from(e);
                if error.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(
                        "Regatta has questions with recorded attempts and cannot be deleted".into(),
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

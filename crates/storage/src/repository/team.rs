use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::Team;

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all teams, alphabetically
    pub async fn list(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    /// Get a team by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, name, created_at
            FROM teams
            WHERE team_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Create a new team
    pub async fn create(&self, name: &str) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (name)
            VALUES (?1)
            RETURNING team_id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::ConstraintViolation("A team with this name already exists".into())
            } else {
                error
            }
        })?;

        Ok(team)
    }

    /// Rename a team
    pub async fn rename(&self, id: i64, name: &str) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = ?2
            WHERE team_id = ?1
            RETURNING team_id, name, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::ConstraintViolation("A team with this name already exists".into())
            } else {
                error
            }
        })?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Delete a team. Rejected while the ledger references it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM teams WHERE team_id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let error = StorageError::from(e);
                if error.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(
                        "Team has recorded attempts and cannot be deleted".into(),
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

use sqlx::SqlitePool;

use crate::error::{Result, StorageError};
use crate::models::{Question, QuestionImage};

/// Repository for Question database operations
pub struct QuestionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List questions, optionally restricted to one regatta
    pub async fn list(&self, regatta_id: Option<i64>) -> Result<Vec<Question>> {
        let questions = match regatta_id {
            Some(regatta_id) => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT question_id, regatta_id, difficulty, statement, image_filename, created_at
                    FROM questions
                    WHERE regatta_id = ?1
                    ORDER BY question_id ASC
                    "#,
                )
                .bind(regatta_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Question>(
                    r#"
                    SELECT question_id, regatta_id, difficulty, statement, image_filename, created_at
                    FROM questions
                    ORDER BY question_id ASC
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(questions)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT question_id, regatta_id, difficulty, statement, image_filename, created_at
            FROM questions
            WHERE question_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(question)
    }

    /// Fetch the stored image content of a question.
    pub async fn fetch_image(&self, id: i64) -> Result<QuestionImage> {
        let image = sqlx::query_as::<_, QuestionImage>(
            r#"
            SELECT image, image_filename
            FROM questions
            WHERE question_id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(image)
    }

    pub async fn create(
        &self,
        regatta_id: i64,
        difficulty: &str,
        statement: &str,
        image: &[u8],
        image_filename: &str,
    ) -> Result<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (regatta_id, difficulty, statement, image, image_filename)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING question_id, regatta_id, difficulty, statement, image_filename, created_at
            "#,
        )
        .bind(regatta_id)
        .bind(difficulty)
        .bind(statement)
        .bind(image)
        .bind(image_filename)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_foreign_key_violation() {
                StorageError::ConstraintViolation("Regatta does not exist".into())
            } else {
                error
            }
        })?;

        Ok(question)
    }

    /// Delete a question. Rejected while the ledger references it.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE question_id = ?1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                let error = StorageError::from(e);
                if error.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(
                        "Question has recorded attempts and cannot be deleted".into(),
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

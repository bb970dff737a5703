use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::Question;

/// Query parameters for listing questions
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct QuestionListQuery {
    pub regatta_id: Option<i64>,
}

/// Request payload for creating a question. The image carries the question
/// content and is required; `statement` is optional accompanying text.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    pub regatta_id: i64,

    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: String,

    #[validate(length(max = 10000))]
    #[serde(default)]
    pub statement: String,

    /// Base64-encoded image bytes (standard alphabet, padded).
    #[validate(length(min = 1))]
    pub image: String,

    #[validate(length(min = 1, max = 255))]
    pub image_filename: String,
}

/// Response containing question details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub question_id: i64,
    pub regatta_id: i64,
    pub difficulty: String,
    pub statement: String,
    pub image_filename: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            question_id: question.question_id,
            regatta_id: question.regatta_id,
            difficulty: question.difficulty,
            statement: question.statement,
            image_filename: question.image_filename,
            created_at: question.created_at,
        }
    }
}

fn validate_difficulty(difficulty: &str) -> Result<(), validator::ValidationError> {
    const VALID_DIFFICULTIES: &[&str] = &["facil", "medio", "dificil"];

    if VALID_DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_difficulty"))
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A question belongs to exactly one regatta. Difficulty is one of
/// `facil` / `medio` / `dificil` and is used only for display grouping.
///
/// The question is posed as an uploaded image; `statement` is optional
/// accompanying text. The image bytes stay out of this struct so listings
/// remain small; fetch them through the repository's `fetch_image`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Question {
    pub question_id: i64,
    pub regatta_id: i64,
    pub difficulty: String,
    pub statement: String,
    pub image_filename: String,
    pub created_at: chrono::NaiveDateTime,
}

/// The stored image content of one question.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionImage {
    pub image: Vec<u8>,
    pub image_filename: String,
}

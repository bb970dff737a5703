use sqlx::SqlitePool;
use storage::{
    dto::question::CreateQuestionRequest,
    error::Result,
    models::{Question, QuestionImage},
    repository::question::QuestionRepository,
};

/// List questions, optionally restricted to one regatta
pub async fn list_questions(pool: &SqlitePool, regatta_id: Option<i64>) -> Result<Vec<Question>> {
    let repo = QuestionRepository::new(pool);
    repo.list(regatta_id).await
}

/// Get question by ID
pub async fn get_question(pool: &SqlitePool, id: i64) -> Result<Question> {
    let repo = QuestionRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get the stored image content of a question
pub async fn get_question_image(pool: &SqlitePool, id: i64) -> Result<QuestionImage> {
    let repo = QuestionRepository::new(pool);
    repo.fetch_image(id).await
}

/// Create a question in a regatta; `image` carries the decoded upload bytes
pub async fn create_question(
    pool: &SqlitePool,
    request: &CreateQuestionRequest,
    image: &[u8],
) -> Result<Question> {
    let repo = QuestionRepository::new(pool);
    repo.create(
        request.regatta_id,
        &request.difficulty,
        &request.statement,
        image,
        &request.image_filename,
    )
    .await
}

/// Delete a question
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = QuestionRepository::new(pool);
    repo.delete(id).await
}

use sqlx::SqlitePool;
use storage::{
    dto::judge::CreateJudgeRequest, error::Result, models::Judge,
    repository::judge::JudgeRepository,
};

/// List all judges
pub async fn list_judges(pool: &SqlitePool) -> Result<Vec<Judge>> {
    let repo = JudgeRepository::new(pool);
    repo.list().await
}

/// Create a judge
pub async fn create_judge(pool: &SqlitePool, request: &CreateJudgeRequest) -> Result<Judge> {
    let repo = JudgeRepository::new(pool);
    repo.create(&request.name).await
}

/// Delete a judge
pub async fn delete_judge(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = JudgeRepository::new(pool);
    repo.delete(id).await
}

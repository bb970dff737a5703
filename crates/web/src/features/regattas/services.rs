use sqlx::SqlitePool;
use storage::{
    dto::regatta::CreateRegattaRequest, error::Result, models::Regatta,
    repository::regatta::RegattaRepository,
};

/// List all regattas, newest first
pub async fn list_regattas(pool: &SqlitePool) -> Result<Vec<Regatta>> {
    let repo = RegattaRepository::new(pool);
    repo.list().await
}

/// Get regatta by ID
pub async fn get_regatta(pool: &SqlitePool, id: i64) -> Result<Regatta> {
    let repo = RegattaRepository::new(pool);
    repo.find_by_id(id).await
}

/// The currently active regatta, if any
pub async fn get_active_regatta(pool: &SqlitePool) -> Result<Option<Regatta>> {
    let repo = RegattaRepository::new(pool);
    repo.find_active().await
}

/// Create a regatta (inactive until activated)
pub async fn create_regatta(pool: &SqlitePool, request: &CreateRegattaRequest) -> Result<Regatta> {
    let repo = RegattaRepository::new(pool);
    repo.create(&request.name).await
}

/// Make this the single active regatta
pub async fn activate_regatta(pool: &SqlitePool, id: i64) -> Result<Regatta> {
    let repo = RegattaRepository::new(pool);
    repo.activate(id).await
}

/// Delete a regatta and its questions
pub async fn delete_regatta(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = RegattaRepository::new(pool);
    repo.delete(id).await
}

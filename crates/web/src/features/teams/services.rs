use sqlx::SqlitePool;
use storage::{
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::Team,
    repository::team::TeamRepository,
};

/// List all teams
pub async fn list_teams(pool: &SqlitePool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

/// Get team by ID
pub async fn get_team(pool: &SqlitePool, id: i64) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new team
pub async fn create_team(pool: &SqlitePool, request: &CreateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.create(&request.name).await
}

/// Rename a team
pub async fn update_team(pool: &SqlitePool, id: i64, request: &UpdateTeamRequest) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.rename(id, &request.name).await
}

/// Delete a team
pub async fn delete_team(pool: &SqlitePool, id: i64) -> Result<()> {
    let repo = TeamRepository::new(pool);
    repo.delete(id).await
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::regatta::{CreateRegattaRequest, RegattaResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/regattas",
    responses(
        (status = 200, description = "List all regattas", body = Vec<RegattaResponse>)
    ),
    tag = "regattas"
)]
pub async fn list_regattas(
    State(db): State<Database>,
) -> Result<Json<Vec<RegattaResponse>>, WebError> {
    let regattas = services::list_regattas(db.pool()).await?;

    let response: Vec<RegattaResponse> =
        regattas.into_iter().map(RegattaResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/regattas/active",
    responses(
        (status = 200, description = "The active regatta", body = RegattaResponse),
        (status = 404, description = "No regatta is active")
    ),
    tag = "regattas"
)]
pub async fn get_active_regatta(State(db): State<Database>) -> Result<Response, WebError> {
    let regatta = services::get_active_regatta(db.pool())
        .await?
        .ok_or(WebError::Storage(storage::error::StorageError::NotFound))?;

    Ok(Json(RegattaResponse::from(regatta)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/regattas/{id}",
    params(
        ("id" = i64, Path, description = "Regatta ID")
    ),
    responses(
        (status = 200, description = "Regatta found", body = RegattaResponse),
        (status = 404, description = "Regatta not found")
    ),
    tag = "regattas"
)]
pub async fn get_regatta(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let regatta = services::get_regatta(db.pool(), id).await?;

    Ok(Json(RegattaResponse::from(regatta)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/regattas",
    request_body = CreateRegattaRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Regatta created", body = RegattaResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "regattas"
)]
pub async fn create_regatta(
    State(db): State<Database>,
    Json(req): Json<CreateRegattaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let regatta = services::create_regatta(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(RegattaResponse::from(regatta))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/regattas/{id}/activate",
    params(
        ("id" = i64, Path, description = "Regatta ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Regatta activated, all others deactivated", body = RegattaResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Regatta not found")
    ),
    tag = "regattas"
)]
pub async fn activate_regatta(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let regatta = services::activate_regatta(db.pool(), id).await?;

    Ok(Json(RegattaResponse::from(regatta)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/regattas/{id}",
    params(
        ("id" = i64, Path, description = "Regatta ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Regatta deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Regatta not found"),
        (status = 409, description = "Regatta questions have recorded attempts")
    ),
    tag = "regattas"
)]
pub async fn delete_regatta(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_regatta(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

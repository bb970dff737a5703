use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::attempt::{
        AttemptResult, AttemptStatusQuery, AttemptStatusResponse, RegisterAttemptRequest,
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/attempts",
    request_body = RegisterAttemptRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Attempt recorded with points awarded", body = AttemptResult),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown team, question or judge"),
        (status = 409, description = "Pair already correct or attempts exhausted")
    ),
    tag = "attempts"
)]
pub async fn register_attempt(
    State(db): State<Database>,
    Json(req): Json<RegisterAttemptRequest>,
) -> Result<Response, WebError> {
    let result = services::register_attempt(db.pool(), &req).await?;

    tracing::info!(
        team_id = req.team_id,
        question_id = req.question_id,
        numero = result.numero,
        acertou = result.acertou,
        pontos = result.pontos,
        "attempt registered"
    );

    Ok((StatusCode::CREATED, Json(result)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/attempts/status",
    params(AttemptStatusQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Attempt history and terminal state for the pair", body = AttemptStatusResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "attempts"
)]
pub async fn attempt_status(
    State(db): State<Database>,
    Query(query): Query<AttemptStatusQuery>,
) -> Result<Response, WebError> {
    let status = services::attempt_status(db.pool(), query.team_id, query.question_id).await?;

    Ok(Json(status).into_response())
}

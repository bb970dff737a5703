use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::judge::{CreateJudgeRequest, JudgeResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/judges",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all judges", body = Vec<JudgeResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "judges"
)]
pub async fn list_judges(
    State(db): State<Database>,
) -> Result<Json<Vec<JudgeResponse>>, WebError> {
    let judges = services::list_judges(db.pool()).await?;

    let response: Vec<JudgeResponse> = judges.into_iter().map(JudgeResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/judges",
    request_body = CreateJudgeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Judge created", body = JudgeResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Judge name already exists")
    ),
    tag = "judges"
)]
pub async fn create_judge(
    State(db): State<Database>,
    Json(req): Json<CreateJudgeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let judge = services::create_judge(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(JudgeResponse::from(judge))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/judges/{id}",
    params(
        ("id" = i64, Path, description = "Judge ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Judge deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Judge not found"),
        (status = 409, description = "Judge has recorded attempts")
    ),
    tag = "judges"
)]
pub async fn delete_judge(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_judge(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

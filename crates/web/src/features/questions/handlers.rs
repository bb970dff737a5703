use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use base64::Engine;
use storage::{
    Database,
    dto::question::{CreateQuestionRequest, QuestionListQuery, QuestionResponse},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/questions",
    params(QuestionListQuery),
    responses(
        (status = 200, description = "List questions, optionally filtered by regatta", body = Vec<QuestionResponse>)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(db): State<Database>,
    Query(query): Query<QuestionListQuery>,
) -> Result<Json<Vec<QuestionResponse>>, WebError> {
    let questions = services::list_questions(db.pool(), query.regatta_id).await?;

    let response: Vec<QuestionResponse> =
        questions.into_iter().map(QuestionResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
pub async fn get_question(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let question = services::get_question(db.pool(), id).await?;

    Ok(Json(QuestionResponse::from(question)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/questions/{id}/image",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Raw image bytes, content type derived from the uploaded filename"),
        (status = 404, description = "Question not found")
    ),
    tag = "questions"
)]
pub async fn get_question_image(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let image = services::get_question_image(db.pool(), id).await?;

    let content_type = image_content_type(&image.image_filename);

    Ok(([(header::CONTENT_TYPE, content_type)], image.image).into_response())
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Validation error or undecodable image"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Regatta does not exist")
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(db): State<Database>,
    Json(req): Json<CreateQuestionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let image = base64::engine::general_purpose::STANDARD
        .decode(&req.image)
        .map_err(|_| WebError::BadRequest("image must be valid base64".into()))?;

    let question = services::create_question(db.pool(), &req, &image).await?;

    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))).into_response())
}

fn image_content_type(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Question deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Question not found"),
        (status = 409, description = "Question has recorded attempts")
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_question(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

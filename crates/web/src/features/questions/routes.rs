use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{
    create_question, delete_question, get_question, get_question_image, list_questions,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_question))
        .route("/:id", delete(delete_question))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_questions))
        .route("/:id", get(get_question))
        .route("/:id/image", get(get_question_image))
        .merge(protected)
}

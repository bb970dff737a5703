use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_judge, delete_judge, list_judges};
use crate::middleware::auth::{ApiKeys, require_auth};

/// The whole judge directory is admin-only.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", get(list_judges))
        .route("/", post(create_judge))
        .route("/:id", delete(delete_judge))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}

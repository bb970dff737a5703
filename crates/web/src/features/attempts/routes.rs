use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{attempt_status, register_attempt};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Judge-facing routes: attempt registration and pair status.
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    Router::new()
        .route("/", post(register_attempt))
        .route("/status", get(attempt_status))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}

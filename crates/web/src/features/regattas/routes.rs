use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    activate_regatta, create_regatta, delete_regatta, get_active_regatta, get_regatta,
    list_regattas,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_regatta))
        .route("/:id/activate", put(activate_regatta))
        .route("/:id", delete(delete_regatta))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_regattas))
        .route("/active", get(get_active_regatta))
        .route("/:id", get(get_regatta))
        .merge(protected)
}

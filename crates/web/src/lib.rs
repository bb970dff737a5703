use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

use middleware::auth::ApiKeys;

/// Build the API router. Admin keys gate the CRUD surface; judge keys gate
/// attempt registration. Exposed so integration tests can drive the app
/// without binding a socket.
pub fn app(db: Database, admin_keys: ApiKeys, judge_keys: ApiKeys) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .nest("/api/teams", features::teams::routes(admin_keys.clone()))
        .nest("/api/regattas", features::regattas::routes(admin_keys.clone()))
        .nest(
            "/api/questions",
            features::questions::routes(admin_keys.clone()),
        )
        .nest("/api/judges", features::judges::routes(admin_keys))
        .nest("/api/attempts", features::attempts::routes(judge_keys))
        .nest("/api/leaderboard", features::leaderboard::routes())
        .layer(cors)
        .with_state(db)
}

use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use web::config::Config;
use web::features;
use web::middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::teams::handlers::list_teams,
        features::teams::handlers::get_team,
        features::teams::handlers::create_team,
        features::teams::handlers::update_team,
        features::teams::handlers::delete_team,
        features::regattas::handlers::list_regattas,
        features::regattas::handlers::get_active_regatta,
        features::regattas::handlers::get_regatta,
        features::regattas::handlers::create_regatta,
        features::regattas::handlers::activate_regatta,
        features::regattas::handlers::delete_regatta,
        features::questions::handlers::list_questions,
        features::questions::handlers::get_question,
        features::questions::handlers::get_question_image,
        features::questions::handlers::create_question,
        features::questions::handlers::delete_question,
        features::judges::handlers::list_judges,
        features::judges::handlers::create_judge,
        features::judges::handlers::delete_judge,
        features::attempts::handlers::register_attempt,
        features::attempts::handlers::attempt_status,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::UpdateTeamRequest,
            storage::dto::team::TeamResponse,
            storage::dto::regatta::CreateRegattaRequest,
            storage::dto::regatta::RegattaResponse,
            storage::dto::question::CreateQuestionRequest,
            storage::dto::question::QuestionResponse,
            storage::dto::judge::CreateJudgeRequest,
            storage::dto::judge::JudgeResponse,
            storage::dto::attempt::RegisterAttemptRequest,
            storage::dto::attempt::AttemptResult,
            storage::dto::attempt::AttemptInfo,
            storage::dto::attempt::AttemptStatusResponse,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::models::Team,
            storage::models::Regatta,
            storage::models::Question,
            storage::models::Judge,
            storage::models::Attempt,
        )
    ),
    tags(
        (name = "teams", description = "Team directory"),
        (name = "regattas", description = "Regatta administration"),
        (name = "questions", description = "Question administration"),
        (name = "judges", description = "Judge directory (admin only)"),
        (name = "attempts", description = "Judge panel: attempt registration"),
        (name = "leaderboard", description = "Public ranking"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting regatta scoreboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed");

    let admin_keys = ApiKeys::from_comma_separated(&config.admin_api_keys);
    let judge_keys =
        ApiKeys::from_comma_separated(&config.judge_api_keys).merged_with(&admin_keys);

    let app = web::app(db, admin_keys, judge_keys)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    tracing::info!("Listening on http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

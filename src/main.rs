//! Nexly backend server.
//!
//! Wires the adapters to the application handlers and serves the REST API:
//! moderated posts, the depression screening flow, the mood quiz, and the
//! companion chat.

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware as axum_middleware, routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexly::adapters::ai::{GeminiConfig, GeminiProvider};
use nexly::adapters::auth::OpaqueTokenVerifier;
use nexly::adapters::email::{ResendConfig, ResendMailer};
use nexly::adapters::http::middleware::{auth_middleware, AuthState};
use nexly::adapters::http::{
    assessment_routes, chat_routes, health, mood_routes, post_routes, AssessmentHandlers,
    ChatHandlers, MoodHandlers, PostHandlers,
};
use nexly::adapters::postgres::PostgresPostRepository;
use nexly::application::handlers::{
    CreatePostHandler, GetPostHandler, ListPostsHandler, SendChatMessageHandler,
    SubmitAssessmentHandler, SubmitMoodHandler,
};
use nexly::config::AppConfig;
use nexly::domain::moderation::ModerationFilter;
use nexly::ports::{AuthVerifier, ChatProvider, PostRepository, ReportMailer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate()?;

    tracing::info!("Nexly backend starting...");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Ports
    let repository: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool));
    let mailer: Arc<dyn ReportMailer> = Arc::new(ResendMailer::new(
        ResendConfig::new(config.email.api_key(), config.email.from_header()),
    )?);
    let provider: Arc<dyn ChatProvider> = Arc::new(GeminiProvider::new(
        GeminiConfig::new(config.ai.api_key())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.request_timeout()),
    )?);
    let verifier: AuthState = Arc::new(OpaqueTokenVerifier::new());

    // Application handlers
    let filter = ModerationFilter::new(&config.moderation.term_set());
    let post_handlers = PostHandlers::new(
        Arc::new(CreatePostHandler::new(repository.clone(), filter)),
        Arc::new(GetPostHandler::new(repository.clone())),
        Arc::new(ListPostsHandler::new(repository)),
    );
    let assessment_handlers =
        AssessmentHandlers::new(Arc::new(SubmitAssessmentHandler::new(mailer)));
    let mood_handlers = MoodHandlers::new(SubmitMoodHandler::new());
    let chat_handlers = ChatHandlers::new(Arc::new(SendChatMessageHandler::new(provider)));

    let app = create_router(
        post_handlers,
        assessment_handlers,
        mood_handlers,
        chat_handlers,
        verifier,
        Duration::from_secs(config.server.request_timeout_secs),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assembles the full API router.
#[allow(clippy::too_many_arguments)]
fn create_router(
    post_handlers: PostHandlers,
    assessment_handlers: AssessmentHandlers,
    mood_handlers: MoodHandlers,
    chat_handlers: ChatHandlers,
    verifier: Arc<dyn AuthVerifier>,
    request_timeout: Duration,
    cors_origins: &[String],
) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/posts", post_routes(post_handlers))
        .nest("/api/assessment", assessment_routes(assessment_handlers))
        .nest("/api/mood", mood_routes(mood_handlers))
        .nest("/api/chat", chat_routes(chat_handlers))
        .layer(axum_middleware::from_fn_with_state(
            verifier,
            auth_middleware,
        ))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

/// Builds the CORS layer: configured origins when present, permissive
/// otherwise (development default).
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

use axum::{
    routing::{get, post},
    Router,
};
use knowledge_quest::{
    config::{get_config, init_config},
    routes,
    services::{question_bank_service::QuestionBankService, session_store::InMemorySessionStore},
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let question_bank = QuestionBankService::open(&config.question_bank_file).await?;
    let sessions = InMemorySessionStore::with_limits(
        chrono::Duration::seconds(config.session_ttl_secs),
        config.max_sessions,
    );
    let app_state = AppState::with_sessions(question_bank, Arc::new(sessions));

    let base_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/quest", get(routes::quest::get_quest));

    let quiz_api = Router::new()
        .route("/api/sessions", post(routes::quiz::create_session))
        .route(
            "/api/sessions/:session_id/quiz",
            get(routes::quiz::get_quiz).post(routes::quiz::draw_quiz),
        )
        .route(
            "/api/sessions/:session_id/quiz/submit",
            post(routes::quiz::submit_answers),
        );

    let questions_api = Router::new()
        .route("/api/questions", post(routes::questions::submit_question))
        .route("/api/questions/stats", get(routes::questions::bank_stats));

    let app = base_routes
        .merge(quiz_api)
        .merge(questions_api)
        .fallback(routes::fallback::not_found)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

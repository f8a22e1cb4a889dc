pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ServerConfig},
    llm::{GeminiClient, GenerativeClient},
    ocr,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/chat", post(handlers::chat))
        .route("/ocr", post(handlers::ocr))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client: Arc<dyn GenerativeClient> = Arc::new(GeminiClient::new(config.llm.clone()));
    if !client.is_configured() {
        warn!("GEMINI_API_KEY is not set; model-backed routes will report an API key error");
    }

    let ocr = ocr::build_engine(&config.ocr, client.clone());
    info!("Using {} OCR engine, model {}", ocr.name(), config.llm.model);

    let app_state = AppState {
        client,
        ocr,
        search_grounding: config.llm.search_grounding,
    };

    let app = router(app_state, &config.server);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

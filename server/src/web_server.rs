use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use common::games::tictactoe::{MoveResponse, MoveService, MoveServiceError};
use common::log;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub move_service: Arc<MoveService>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<String>,
    #[serde(default)]
    pub side_a: Option<String>,
    #[serde(default)]
    pub side_b: Option<String>,
}

pub struct ApiError(MoveServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            MoveServiceError::InvalidBoard(_) => StatusCode::UNPROCESSABLE_ENTITY,
            MoveServiceError::IllegalMove(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub fn build_router(state: WebServerState, cors_allow_any: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/move", post(move_handler))
        .with_state(state);

    if cors_allow_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

pub async fn run_web_server(config: ServerConfig) -> std::io::Result<()> {
    let state = WebServerState {
        move_service: Arc::new(MoveService::new(config.move_service.clone())),
    };
    let app = build_router(state, config.cors_allow_any);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    log!("Tic-tac-toe server listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    log!("Shutdown signal received");
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn move_handler(
    State(state): State<WebServerState>,
    Json(request): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let defaults = state.move_service.config();
    let side_a = request
        .side_a
        .as_deref()
        .unwrap_or(defaults.default_side_a_label.as_str());
    let side_b = request
        .side_b
        .as_deref()
        .unwrap_or(defaults.default_side_b_label.as_str());

    state
        .move_service
        .compute_move(&request.board, side_a, side_b)
        .map(Json)
        .map_err(|e| {
            log!("Rejected move request: {}", e);
            ApiError(e)
        })
}

use crate::commands::{defects, health, settings::Settings, status};
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        AppState {
            settings: Arc::new(settings),
        }
    }
}

/// Handler failure rendered as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        ApiError {
            status,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("{}", self.detail);
        }
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::health_check))
        .route("/api/healthcheck", get(health::health_check))
        .route("/api", get(health::api_root))
        .route("/api/", get(health::api_root))
        .route("/api/defects", get(defects::get_defects))
        .route("/api/defects/analytics", get(defects::get_defect_analytics))
        .route(
            "/api/status",
            get(status::get_status_checks).post(status::create_status_check),
        )
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .with_state(state)
}

async fn cors_middleware(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let origin = req
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let allowed = origin
        .as_deref()
        .filter(|o| state.settings.allows_origin(o))
        .and_then(|o| HeaderValue::from_str(o).ok());

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin_value) = allowed {
            let headers = resp.headers_mut();
            headers.insert("access-control-allow-origin", origin_value);
            headers.insert("access-control-allow-credentials", HeaderValue::from_static("true"));
            headers.insert(
                "access-control-allow-methods",
                HeaderValue::from_static("GET,POST,OPTIONS"),
            );
            headers.insert(
                "access-control-allow-headers",
                HeaderValue::from_static("content-type,authorization"),
            );
            headers.insert("vary", HeaderValue::from_static("origin"));
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin_value) = allowed {
        let headers = resp.headers_mut();
        headers.insert("access-control-allow-origin", origin_value);
        headers.insert("access-control-allow-credentials", HeaderValue::from_static("true"));
        headers.insert("vary", HeaderValue::from_static("origin"));
    }
    resp
}

/// Bind and serve until the process is stopped.
pub async fn serve(settings: Settings) -> Result<(), String> {
    let listener = TcpListener::bind(&settings.bind_addr)
        .await
        .map_err(|e| format!("Bind error on {}: {e}", settings.bind_addr))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Listener error: {e}"))?;

    log::info!(
        "Defect analytics API listening on {addr} (sample_size={}, seeded={}, cors={:?}, db={})",
        settings.sample_size,
        settings.seed.is_some(),
        settings.cors_origins,
        settings.database_path.display()
    );

    axum::serve(listener, build_router(AppState::new(settings)))
        .await
        .map_err(|e| format!("Server error: {e}"))
}

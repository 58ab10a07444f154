use axum::Json;
use serde_json::{json, Value};

pub const API_MESSAGE: &str = "Defect Analytics API";

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn api_root() -> Json<Value> {
    Json(json!({ "message": API_MESSAGE }))
}

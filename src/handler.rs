use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::advisor::{build_analysis_prompt, GeminiClient, GeminiError};
use crate::models::{AnalysisRequest, AnalysisResponse, ErrorResponse};

// ===== APPLICATION STATE =====

#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
}

/// Build the application router. CORS is wide open since the dashboard is
/// served from a separate origin.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_grades))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ===== /analyze HANDLER =====

async fn analyze_grades(State(state): State<AppState>, body: Bytes) -> Response {
    let data = match serde_json::from_slice::<Value>(&body) {
        Ok(value) if value.is_object() => value,
        _ => {
            tracing::warn!("No data provided in request");
            return error_response(StatusCode::BAD_REQUEST, "No data provided");
        }
    };

    let request: AnalysisRequest = match serde_json::from_value(data) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Malformed analysis request");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string());
        }
    };

    tracing::info!(grades = request.grades.len(), "Processing analysis request");

    let prompt = build_analysis_prompt(&request.grades, &request.overview);

    match state.gemini.generate(&prompt).await {
        Ok(analysis) => {
            tracing::info!("Analysis generated successfully");
            (StatusCode::OK, Json(AnalysisResponse { analysis })).into_response()
        }
        Err(e) => e.into_response(),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

// ===== ERROR MAPPING =====

// Upstream failures map to 502 so the dashboard can tell them apart from
// this service's own 400/500; local parse failures stay 500.
impl IntoResponse for GeminiError {
    fn into_response(self) -> Response {
        let status = match &self {
            GeminiError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            GeminiError::MalformedResponse | GeminiError::Network(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

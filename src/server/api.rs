//! Handlers for `/api/*` routes

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, error};

use super::AppState;
use crate::core::hints;
use crate::tutor::{KnowledgeContext, TutorRequest};

const SERVICE_NAME: &str = "GeoLab Edge Function";

/// Handler failures, rendered as `{"error": ...}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("Not Found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, *msg),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::Internal(cause) => {
                error!(%cause, "edge handler error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// ============== Request / response types ==============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TutorBody {
    question: Option<String>,
    knowledge_id: Option<String>,
    context: Option<Value>,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TutorResponse {
    success: bool,
    answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    knowledge_id: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_preset: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HintsQuery {
    knowledge_id: Option<String>,
}

// ============== Handlers ==============

/// POST /api/ai/tutor
pub(super) async fn tutor(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let body: TutorBody =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    let api_key = body
        .api_key
        .filter(|k| !k.trim().is_empty())
        .ok_or(ApiError::BadRequest("API Key is required"))?;

    let question = body
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or(ApiError::BadRequest("question is required"))?;

    let knowledge_id = body.knowledge_id.unwrap_or_default();
    let mut context = state
        .catalog
        .knowledge_point(&knowledge_id)
        .map(KnowledgeContext::from)
        .unwrap_or_else(KnowledgeContext::generic);
    if let Some(extra) = body.context.filter(|c| !c.is_null()) {
        context = context.with_extra(extra.to_string());
    }

    debug!(%knowledge_id, "tutor request");

    let request =
        TutorRequest::new(knowledge_id.clone(), question, context).with_credential(Some(api_key));
    let reply = state.tutor.ask(&request).await;

    Ok(Json(TutorResponse {
        success: true,
        is_preset: reply.is_preset(),
        answer: reply.answer,
        knowledge_id: Some(knowledge_id).filter(|id| !id.is_empty()),
    })
    .into_response())
}

/// GET /api/hints?knowledgeId=...
pub(super) async fn hints(Query(query): Query<HintsQuery>) -> Result<Response, ApiError> {
    let knowledge_id = query
        .knowledge_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::BadRequest("knowledgeId is required"))?;

    let hints = hints::hints_for(&knowledge_id);
    Ok(Json(json!({ "knowledgeId": knowledge_id, "hints": hints })).into_response())
}

/// /api/health
pub(super) async fn health() -> Response {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "region": "edge",
    }))
    .into_response()
}

pub(super) async fn not_found() -> ApiError {
    ApiError::NotFound
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ApplicantProfile, SchemeId};
use super::repository::SchemeCatalog;
use super::service::{SchemeScreeningService, ScreeningError};
use crate::workflows::intake::{TranscriptChannel, TranscriptionGateway};

/// Transcript text submitted for extraction or screening, tagged with the
/// channel that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSubmission {
    pub channel: TranscriptChannel,
    pub text: String,
}

/// Router builder exposing HTTP endpoints for the catalog and the
/// transcript screening pipeline.
pub fn scheme_router<C, G>(service: Arc<SchemeScreeningService<C, G>>) -> Router
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    Router::new()
        .route("/api/v1/schemes", get(list_handler::<C, G>))
        .route("/api/v1/schemes/match", post(match_handler::<C, G>))
        .route("/api/v1/schemes/:scheme_id", get(detail_handler::<C, G>))
        .route(
            "/api/v1/transcripts/extract",
            post(extract_handler::<C, G>),
        )
        .route("/api/v1/transcripts/screen", post(screen_handler::<C, G>))
        .with_state(service)
}

pub(crate) async fn list_handler<C, G>(
    State(service): State<Arc<SchemeScreeningService<C, G>>>,
) -> Response
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    match service.list_schemes() {
        Ok(schemes) => (StatusCode::OK, axum::Json(schemes)).into_response(),
        Err(ScreeningError::Catalog(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn detail_handler<C, G>(
    State(service): State<Arc<SchemeScreeningService<C, G>>>,
    Path(scheme_id): Path<String>,
) -> Response
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    let id = SchemeId(scheme_id);
    match service.get_scheme(&id) {
        Ok(scheme) => (StatusCode::OK, axum::Json(scheme)).into_response(),
        Err(ScreeningError::UnknownScheme(id)) => {
            let payload = json!({
                "error": format!("scheme {id} not found"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(ScreeningError::Catalog(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn match_handler<C, G>(
    State(service): State<Arc<SchemeScreeningService<C, G>>>,
    axum::Json(profile): axum::Json<ApplicantProfile>,
) -> Response
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    match service.match_profile(&profile) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(ScreeningError::Catalog(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn extract_handler<C, G>(
    State(service): State<Arc<SchemeScreeningService<C, G>>>,
    axum::Json(submission): axum::Json<TranscriptSubmission>,
) -> Response
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    let profile = service.extract_profile(&submission.text, submission.channel);
    (StatusCode::OK, axum::Json(profile)).into_response()
}

pub(crate) async fn screen_handler<C, G>(
    State(service): State<Arc<SchemeScreeningService<C, G>>>,
    axum::Json(submission): axum::Json<TranscriptSubmission>,
) -> Response
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    match service.screen_text(&submission.text, submission.channel) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(ScreeningError::Transcription(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(ScreeningError::Catalog(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

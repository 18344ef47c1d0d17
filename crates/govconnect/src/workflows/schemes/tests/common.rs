use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::intake::{
    transcription, Transcript, TranscriptionError, TranscriptionGateway, TranscriptionRequest,
};
use crate::workflows::schemes::domain::{ApplicantProfile, EligibilityRule, Scheme, SchemeId};
use crate::workflows::schemes::matching::MatchingEngine;
use crate::workflows::schemes::repository::{CatalogError, SchemeCatalog};
use crate::workflows::schemes::{scheme_router, seed_catalog, SchemeScreeningService};

pub(super) fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

pub(super) fn engine() -> MatchingEngine {
    MatchingEngine::with_reference_date(reference_date())
}

pub(super) fn scheme(id: &str, eligibility: EligibilityRule) -> Scheme {
    Scheme {
        id: SchemeId(id.to_string()),
        title: format!("{id} assistance"),
        description: "Benefit scheme used by the fixtures".to_string(),
        benefits: "Direct benefit transfer".to_string(),
        department: "Department of Social Welfare".to_string(),
        application_process: "Apply at the nearest service centre".to_string(),
        required_documents: vec!["Aadhaar Card".to_string()],
        eligibility,
        is_active: true,
    }
}

pub(super) fn farmer_profile() -> ApplicantProfile {
    ApplicantProfile {
        name: Some("Ravi Kumar".to_string()),
        date_of_birth: Some("1984-03-10".to_string()),
        gender: Some("Male".to_string()),
        occupation: Some("rice farmer".to_string()),
        state: Some("Kerala".to_string()),
        ..ApplicantProfile::default()
    }
}

pub(super) fn seeded_service() -> SchemeScreeningService<MemoryCatalog, FixedTranscriber> {
    screening_service(MemoryCatalog::seeded(), FixedTranscriber::new(""))
}

pub(super) fn screening_service(
    catalog: MemoryCatalog,
    transcriber: FixedTranscriber,
) -> SchemeScreeningService<MemoryCatalog, FixedTranscriber> {
    SchemeScreeningService::with_reference_date(
        Arc::new(catalog),
        Arc::new(transcriber),
        reference_date(),
    )
}

pub(super) fn scheme_router_with_service(
    service: SchemeScreeningService<MemoryCatalog, FixedTranscriber>,
) -> axum::Router {
    scheme_router(Arc::new(service))
}

#[derive(Debug, Default, Clone)]
pub(super) struct MemoryCatalog {
    schemes: Vec<Scheme>,
}

impl MemoryCatalog {
    pub(super) fn with_schemes(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    pub(super) fn seeded() -> Self {
        Self::with_schemes(seed_catalog())
    }
}

impl SchemeCatalog for MemoryCatalog {
    fn active_schemes(&self) -> Result<Vec<Scheme>, CatalogError> {
        Ok(self
            .schemes
            .iter()
            .filter(|scheme| scheme.is_active)
            .cloned()
            .collect())
    }

    fn find(&self, id: &SchemeId) -> Result<Option<Scheme>, CatalogError> {
        Ok(self.schemes.iter().find(|scheme| &scheme.id == id).cloned())
    }
}

#[derive(Debug)]
pub(super) struct UnavailableCatalog;

impl SchemeCatalog for UnavailableCatalog {
    fn active_schemes(&self) -> Result<Vec<Scheme>, CatalogError> {
        Err(CatalogError::Unavailable("catalog store offline".to_string()))
    }

    fn find(&self, _id: &SchemeId) -> Result<Option<Scheme>, CatalogError> {
        Err(CatalogError::Unavailable("catalog store offline".to_string()))
    }
}

/// Gateway fake returning a canned transcript for any supported payload.
#[derive(Debug, Default, Clone)]
pub(super) struct FixedTranscriber {
    text: String,
}

impl FixedTranscriber {
    pub(super) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl TranscriptionGateway for FixedTranscriber {
    fn transcribe(&self, request: TranscriptionRequest) -> Result<Transcript, TranscriptionError> {
        transcription::ensure_supported(&request)?;
        Ok(Transcript {
            channel: request.channel,
            text: self.text.clone(),
        })
    }
}

#[derive(Debug)]
pub(super) struct FailingTranscriber;

impl TranscriptionGateway for FailingTranscriber {
    fn transcribe(&self, _request: TranscriptionRequest) -> Result<Transcript, TranscriptionError> {
        Err(TranscriptionError::Unintelligible(
            "no speech detected".to_string(),
        ))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 16)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

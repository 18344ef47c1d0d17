use chrono::NaiveDate;
use govconnect::config::CatalogSource;
use govconnect::error::AppError;
use govconnect::workflows::intake::{
    transcription, Transcript, TranscriptionError, TranscriptionGateway, TranscriptionRequest,
};
use govconnect::workflows::schemes::{
    seed_catalog, CatalogError, CatalogImporter, Scheme, SchemeCatalog, SchemeId,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog held in process memory, loaded once at startup from the seed
/// data or a CSV export.
#[derive(Debug, Default, Clone)]
pub(crate) struct InMemorySchemeCatalog {
    schemes: Vec<Scheme>,
}

impl InMemorySchemeCatalog {
    pub(crate) fn from_schemes(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }

    pub(crate) fn from_source(source: &CatalogSource) -> Result<Self, AppError> {
        let schemes = match source {
            CatalogSource::BuiltIn => seed_catalog(),
            CatalogSource::CsvFile(path) => CatalogImporter::from_path(path)?,
        };
        Ok(Self::from_schemes(schemes))
    }
}

impl SchemeCatalog for InMemorySchemeCatalog {
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

/// Gateway stand-in for deployments without OCR or speech engines attached.
/// The HTTP surface accepts pre-transcribed text, so media uploads only
/// reach this through library callers.
#[derive(Debug, Default, Clone)]
pub(crate) struct DisabledTranscriber;

impl TranscriptionGateway for DisabledTranscriber {
    fn transcribe(&self, request: TranscriptionRequest) -> Result<Transcript, TranscriptionError> {
        transcription::ensure_supported(&request)?;
        Err(TranscriptionError::Engine(
            "no transcription engine configured".to_string(),
        ))
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

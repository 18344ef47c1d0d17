use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{ApplicantProfile, MatchReport, Scheme, SchemeId};
use super::matching::MatchingEngine;
use super::repository::{CatalogError, SchemeCatalog};
use crate::workflows::intake::{
    ProfileExtractor, TranscriptChannel, TranscriptionError, TranscriptionGateway,
    TranscriptionRequest,
};

/// Service composing the scheme catalog, transcription gateway, attribute
/// extractor, and matching engine.
pub struct SchemeScreeningService<C, G> {
    catalog: Arc<C>,
    transcriber: Arc<G>,
    extractor: ProfileExtractor,
    engine: MatchingEngine,
}

/// Outcome of screening one transcript: the profile recovered from the text
/// and every active scheme it qualifies for.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub channel: TranscriptChannel,
    pub profile: ApplicantProfile,
    pub schemes: Vec<Scheme>,
    pub total_matches: usize,
}

impl<C, G> SchemeScreeningService<C, G>
where
    C: SchemeCatalog + 'static,
    G: TranscriptionGateway + 'static,
{
    pub fn new(catalog: Arc<C>, transcriber: Arc<G>) -> Self {
        Self {
            catalog,
            transcriber,
            extractor: ProfileExtractor::new(),
            engine: MatchingEngine::new(),
        }
    }

    /// Pins the date used for spoken-age arithmetic and age checks. The
    /// extractor and engine must agree on it or a profile synthesized from
    /// "i am 60 years old" could miss an `at least 60` scheme.
    pub fn with_reference_date(
        catalog: Arc<C>,
        transcriber: Arc<G>,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            catalog,
            transcriber,
            extractor: ProfileExtractor::with_reference_date(reference_date),
            engine: MatchingEngine::with_reference_date(reference_date),
        }
    }

    /// List every active scheme in catalog order.
    pub fn list_schemes(&self) -> Result<Vec<Scheme>, ScreeningError> {
        Ok(self.catalog.active_schemes()?)
    }

    /// Fetch one scheme by id for API responses.
    pub fn get_scheme(&self, scheme_id: &SchemeId) -> Result<Scheme, ScreeningError> {
        self.catalog
            .find(scheme_id)?
            .ok_or_else(|| ScreeningError::UnknownScheme(scheme_id.clone()))
    }

    /// Mine a transcript for applicant attributes. Extraction cannot fail;
    /// text with no recognizable attributes yields an empty profile.
    pub fn extract_profile(&self, text: &str, channel: TranscriptChannel) -> ApplicantProfile {
        self.extractor.extract(text, channel)
    }

    /// Evaluate a profile against every active scheme.
    pub fn match_profile(&self, profile: &ApplicantProfile) -> Result<MatchReport, ScreeningError> {
        let schemes = self.catalog.active_schemes()?;
        Ok(self.engine.match_schemes(profile, &schemes))
    }

    /// Run the full pipeline on transcript text: extract, then match.
    pub fn screen_text(
        &self,
        text: &str,
        channel: TranscriptChannel,
    ) -> Result<ScreeningReport, ScreeningError> {
        let profile = self.extractor.extract(text, channel);
        let report = self.match_profile(&profile)?;
        Ok(ScreeningReport {
            channel,
            profile: report.profile,
            schemes: report.schemes,
            total_matches: report.total_matches,
        })
    }

    /// Transcribe an uploaded document scan or audio payload, then screen
    /// the resulting text.
    pub fn screen_media(
        &self,
        request: TranscriptionRequest,
    ) -> Result<ScreeningReport, ScreeningError> {
        let transcript = self.transcriber.transcribe(request)?;
        self.screen_text(&transcript.text, transcript.channel)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no scheme registered under id {0}")]
    UnknownScheme(SchemeId),
}

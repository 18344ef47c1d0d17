//! Scheme catalog, eligibility matching, and the screening service joining
//! them to transcript intake.
//!
//! Matching is fail-open throughout: a rule axis only disqualifies an
//! applicant when the profile carries the attribute and it conflicts.

pub mod catalog;
pub mod domain;
pub(crate) mod matching;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{seed_catalog, CatalogImportError, CatalogImporter, StoredScheme};
pub use domain::{ApplicantProfile, EligibilityRule, MatchReport, Scheme, SchemeId};
pub use matching::MatchingEngine;
pub use repository::{CatalogError, SchemeCatalog};
pub use router::{scheme_router, TranscriptSubmission};
pub use service::{SchemeScreeningService, ScreeningError, ScreeningReport};

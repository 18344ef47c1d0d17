//! Transcript intake: turning scanned documents and speech recordings into
//! partial applicant profiles.
//!
//! Transcription and extraction are deliberately separate stages. The
//! [`TranscriptionGateway`] boundary owns media handling and can fail; the
//! [`ProfileExtractor`] runs on whatever text came out and never does.

mod normalizer;
mod vocabulary;

pub mod extractor;
pub mod transcription;

use serde::{Deserialize, Serialize};

pub use extractor::ProfileExtractor;
pub use transcription::{
    Transcript, TranscriptionError, TranscriptionGateway, TranscriptionRequest,
};

/// Origin of a transcript. The channel decides which trigger vocabulary and
/// clause boundaries the extractor applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptChannel {
    /// OCR output from a scanned form or certificate.
    Document,
    /// Speech-to-text output from a spoken interaction.
    Speech,
}

impl TranscriptChannel {
    pub const fn label(&self) -> &'static str {
        match self {
            TranscriptChannel::Document => "document",
            TranscriptChannel::Speech => "speech",
        }
    }
}

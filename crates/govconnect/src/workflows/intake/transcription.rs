use std::fmt::Debug;

use mime::Mime;

use super::TranscriptChannel;

/// A payload awaiting transcription, plus the media type the uploader
/// declared for it.
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub channel: TranscriptChannel,
    pub media_type: Mime,
    pub payload: Vec<u8>,
}

/// Raw text recovered from a document scan or a speech recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub channel: TranscriptChannel,
    pub text: String,
}

/// Transcription fails loudly. Downstream extraction cannot substitute for
/// missing source text, so these are never masked as an empty profile.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported media type {media_type} for {} transcripts", .channel.label())]
    UnsupportedMediaType {
        channel: TranscriptChannel,
        media_type: Mime,
    },
    #[error("payload produced no usable text: {0}")]
    Unintelligible(String),
    #[error("transcription engine failed: {0}")]
    Engine(String),
}

/// Boundary to the OCR and speech-to-text engines. Implementations own
/// format validation and must produce UTF-8 text.
pub trait TranscriptionGateway: Debug + Send + Sync {
    fn transcribe(&self, request: TranscriptionRequest) -> Result<Transcript, TranscriptionError>;
}

const DOCUMENT_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];
const SPEECH_MEDIA_TYPES: &[&str] = &[
    "audio/wav",
    "audio/x-wav",
    "audio/mpeg",
    "audio/mp4",
    "audio/ogg",
];

/// Whether a declared media type is acceptable for the channel: scanned
/// images and PDFs for documents, common audio containers for speech.
pub fn accepts_media_type(channel: TranscriptChannel, media_type: &Mime) -> bool {
    let accepted = match channel {
        TranscriptChannel::Document => DOCUMENT_MEDIA_TYPES,
        TranscriptChannel::Speech => SPEECH_MEDIA_TYPES,
    };
    accepted.contains(&media_type.essence_str())
}

/// Gates a request on its declared media type before any engine work.
pub fn ensure_supported(request: &TranscriptionRequest) -> Result<(), TranscriptionError> {
    if accepts_media_type(request.channel, &request.media_type) {
        Ok(())
    } else {
        Err(TranscriptionError::UnsupportedMediaType {
            channel: request.channel,
            media_type: request.media_type.clone(),
        })
    }
}

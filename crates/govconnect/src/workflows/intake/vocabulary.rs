use super::TranscriptChannel;
use regex::Regex;
use std::sync::OnceLock;

/// Trigger-phrase rules for one clause-sliced attribute.
#[derive(Debug)]
pub(crate) struct ClauseField {
    pub(crate) triggers: &'static [&'static str],
    pub(crate) min_chars: usize,
    /// Standalone words that end the captured clause early. Only the
    /// speech name field uses these today.
    pub(crate) stop_words: &'static [&'static str],
}

/// Everything channel-specific the extractor consults: clause boundaries,
/// trigger tables, and compiled pattern sets.
#[derive(Debug)]
pub(crate) struct ChannelVocabulary {
    pub(crate) boundaries: &'static [char],
    pub(crate) name: ClauseField,
    pub(crate) address: ClauseField,
    pub(crate) occupation: ClauseField,
    pub(crate) caste: ClauseField,
    pub(crate) state: ClauseField,
    /// Literal birth-date patterns; populated for document transcripts.
    pub(crate) birth_date_patterns: Vec<Regex>,
    /// Spoken-age patterns; populated for speech transcripts.
    pub(crate) spoken_age_patterns: Vec<Regex>,
    pub(crate) male_markers: Regex,
    pub(crate) female_markers: Regex,
    pub(crate) phone_pattern: Regex,
}

/// Name/occupation/caste/state candidates shorter than this are noise.
const SHORT_FIELD_MIN_CHARS: usize = 2;
/// Addresses carry more structure, so the bar is higher.
const ADDRESS_MIN_CHARS: usize = 5;

/// Tolerates an optional country code, optional parentheses, and mixed
/// separators; no digit-count plausibility check beyond the shape.
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";

pub(crate) fn for_channel(channel: TranscriptChannel) -> &'static ChannelVocabulary {
    static DOCUMENT: OnceLock<ChannelVocabulary> = OnceLock::new();
    static SPEECH: OnceLock<ChannelVocabulary> = OnceLock::new();

    match channel {
        TranscriptChannel::Document => DOCUMENT.get_or_init(document_vocabulary),
        TranscriptChannel::Speech => SPEECH.get_or_init(speech_vocabulary),
    }
}

/// Vocabulary tuned to formal document phrasing: labeled fields, one per
/// line, so the clause boundary is the newline.
fn document_vocabulary() -> ChannelVocabulary {
    const NAME: &[&str] = &["name:", "full name:", "given name:", "first name:"];
    const ADDRESS: &[&str] = &["address:", "residence:", "village:", "district:"];
    const OCCUPATION: &[&str] = &["occupation:", "profession:", "work:", "job:"];
    const CASTE: &[&str] = &["caste:", "community:"];
    const STATE: &[&str] = &["state:"];
    const BIRTH_DATE: &[&str] = &[
        r"dob[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
        r"date of birth[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
        r"birth[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})",
    ];

    ChannelVocabulary {
        boundaries: &['\n'],
        name: clause_field(NAME, SHORT_FIELD_MIN_CHARS, &[]),
        address: clause_field(ADDRESS, ADDRESS_MIN_CHARS, &[]),
        occupation: clause_field(OCCUPATION, SHORT_FIELD_MIN_CHARS, &[]),
        caste: clause_field(CASTE, SHORT_FIELD_MIN_CHARS, &[]),
        state: clause_field(STATE, SHORT_FIELD_MIN_CHARS, &[]),
        birth_date_patterns: compile_all(BIRTH_DATE),
        spoken_age_patterns: Vec::new(),
        male_markers: Regex::new(r"\bmale\b").unwrap(),
        female_markers: Regex::new(r"\bfemale\b").unwrap(),
        phone_pattern: Regex::new(PHONE_PATTERN).unwrap(),
    }
}

/// Vocabulary tuned to conversational speech: trigger phrases mid-sentence,
/// clauses bounded by sentence punctuation.
fn speech_vocabulary() -> ChannelVocabulary {
    const NAME: &[&str] = &["my name is", "i am", "call me", "this is", "i'm"];
    const NAME_STOP_WORDS: &[&str] = &["and", "also"];
    const ADDRESS: &[&str] = &[
        "live in",
        "from",
        "address",
        "residence",
        "village",
        "district",
        "state",
        "city",
        "town",
    ];
    const OCCUPATION: &[&str] = &[
        "work as",
        "job",
        "occupation",
        "profession",
        "i am a",
        "working as",
        "employed as",
    ];
    const CASTE: &[&str] = &["caste", "community", "belong to"];
    const STATE: &[&str] = &["state", "from", "belong to"];
    const SPOKEN_AGE: &[&str] = &[
        r"(\d{1,2})\s*years?\s*old",
        r"age\s*(\d{1,2})",
        r"i\s*am\s*(\d{1,2})",
        r"(\d{1,2})\s*age",
    ];

    ChannelVocabulary {
        boundaries: &['.', ','],
        name: clause_field(NAME, SHORT_FIELD_MIN_CHARS, NAME_STOP_WORDS),
        address: clause_field(ADDRESS, ADDRESS_MIN_CHARS, &[]),
        occupation: clause_field(OCCUPATION, SHORT_FIELD_MIN_CHARS, &[]),
        caste: clause_field(CASTE, SHORT_FIELD_MIN_CHARS, &[]),
        state: clause_field(STATE, SHORT_FIELD_MIN_CHARS, &[]),
        birth_date_patterns: Vec::new(),
        spoken_age_patterns: compile_all(SPOKEN_AGE),
        male_markers: Regex::new(r"\b(?:male|man|boy|he|his|him)\b").unwrap(),
        female_markers: Regex::new(r"\b(?:female|woman|girl|she|her)\b").unwrap(),
        phone_pattern: Regex::new(PHONE_PATTERN).unwrap(),
    }
}

fn clause_field(
    triggers: &'static [&'static str],
    min_chars: usize,
    stop_words: &'static [&'static str],
) -> ClauseField {
    ClauseField {
        triggers,
        min_chars,
        stop_words,
    }
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).unwrap())
        .collect()
}

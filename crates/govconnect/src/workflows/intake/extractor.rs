use chrono::{Datelike, Local, NaiveDate};

use super::normalizer;
use super::vocabulary::{self, ChannelVocabulary, ClauseField};
use super::TranscriptChannel;
use crate::workflows::schemes::ApplicantProfile;

/// Mines a transcript for applicant attributes using the channel's trigger
/// vocabulary. Extraction never fails: fields with no acceptable match stay
/// absent and a garbled transcript yields an empty profile.
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    reference_date: NaiveDate,
}

impl Default for ProfileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileExtractor {
    pub fn new() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
        }
    }

    /// Pins the date used to turn a spoken age into a birth year. One-shot
    /// runs and tests pass a fixed date; the server uses today.
    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn extract(&self, raw_text: &str, channel: TranscriptChannel) -> ApplicantProfile {
        let vocabulary = vocabulary::for_channel(channel);
        let text = normalizer::normalize(raw_text);

        ApplicantProfile {
            name: clause_value(&text, &vocabulary.name, vocabulary.boundaries),
            date_of_birth: self.birth_date(&text, vocabulary),
            gender: gender_keyword(&text, vocabulary),
            phone: vocabulary
                .phone_pattern
                .find(&text)
                .map(|found| found.as_str().to_string()),
            address: clause_value(&text, &vocabulary.address, vocabulary.boundaries),
            occupation: clause_value(&text, &vocabulary.occupation, vocabulary.boundaries),
            caste: clause_value(&text, &vocabulary.caste, vocabulary.boundaries),
            state: clause_value(&text, &vocabulary.state, vocabulary.boundaries),
            income: None,
        }
    }

    /// Literal date patterns win outright; spoken-age patterns synthesize a
    /// January 1st date from reference year minus age. Each pattern list is
    /// visited in table order and the first match is kept.
    fn birth_date(&self, text: &str, vocabulary: &ChannelVocabulary) -> Option<String> {
        for pattern in &vocabulary.birth_date_patterns {
            if let Some(date) = pattern.captures(text).and_then(|captures| captures.get(1)) {
                return Some(date.as_str().to_string());
            }
        }

        for pattern in &vocabulary.spoken_age_patterns {
            let Some(age) = pattern.captures(text).and_then(|captures| captures.get(1)) else {
                continue;
            };
            if let Ok(age) = age.as_str().parse::<i32>() {
                let birth_year = self.reference_date.year() - age;
                return Some(format!("{birth_year}-01-01"));
            }
        }

        None
    }
}

/// Resolves one clause-sliced attribute: candidate triggers are visited
/// earliest text offset first (table order breaks ties) and the first sliced
/// value clearing the length gate wins. Rejected candidates fall through to
/// the next trigger.
fn clause_value(text: &str, field: &ClauseField, boundaries: &[char]) -> Option<String> {
    let mut candidates: Vec<(usize, &str)> = field
        .triggers
        .iter()
        .filter_map(|trigger| text.find(trigger).map(|at| (at, *trigger)))
        .collect();
    candidates.sort_by_key(|(at, _)| *at);

    for (at, trigger) in candidates {
        let clause = normalizer::clause_at(text, at + trigger.len(), boundaries);
        let clause = normalizer::cut_at_stop_word(clause, field.stop_words);
        if let Some(value) = normalizer::accept_candidate(clause, field.min_chars) {
            return Some(normalizer::title_case(value));
        }
    }

    None
}

/// Keyword presence with the male table checked first. No negation
/// handling: "not male" still reads as male.
fn gender_keyword(text: &str, vocabulary: &ChannelVocabulary) -> Option<String> {
    if vocabulary.male_markers.is_match(text) {
        Some("male".to_string())
    } else if vocabulary.female_markers.is_match(text) {
        Some("female".to_string())
    } else {
        None
    }
}

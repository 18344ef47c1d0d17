mod axes;

use chrono::{Local, NaiveDate};

use super::domain::{ApplicantProfile, EligibilityRule, MatchReport, Scheme};

/// Stateless evaluator applying fail-open eligibility predicates. Holds only
/// the reference date used for age arithmetic so tests and one-shot runs can
/// pin "today".
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    reference_date: NaiveDate,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self {
            reference_date: Local::now().date_naive(),
        }
    }

    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Admit/reject one profile against one rule. Axes AND together and the
    /// first violated axis rejects; an absent rule axis or absent profile
    /// field always satisfies its axis, so missing data never rejects.
    pub fn is_eligible(&self, rule: &EligibilityRule, profile: &ApplicantProfile) -> bool {
        axes::age_within(rule, profile, self.reference_date)
            && axes::gender_admits(rule, profile)
            && axes::occupation_admits(rule, profile)
            && axes::caste_admits(rule, profile)
            && axes::state_admits(rule, profile)
            && axes::income_within(rule, profile)
    }

    /// Evaluates every scheme in catalog order and keeps the admitted
    /// subset. No ranking, no pagination; deterministic for identical
    /// inputs.
    pub fn match_schemes(&self, profile: &ApplicantProfile, schemes: &[Scheme]) -> MatchReport {
        let matched: Vec<Scheme> = schemes
            .iter()
            .filter(|scheme| self.is_eligible(&scheme.eligibility, profile))
            .cloned()
            .collect();

        MatchReport {
            total_matches: matched.len(),
            schemes: matched,
            profile: profile.clone(),
        }
    }
}

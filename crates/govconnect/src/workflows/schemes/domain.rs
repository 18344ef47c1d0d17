use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog schemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeId(pub String);

impl fmt::Display for SchemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attribute record mined from one transcript. Every field is independently
/// present or absent; absence means "unknown", never "ineligible", which is
/// what lets the evaluator fail open on missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caste: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Never populated by extraction today; direct callers may supply it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
}

impl ApplicantProfile {
    /// True when no extractor heuristic matched anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date_of_birth.is_none()
            && self.gender.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.occupation.is_none()
            && self.caste.is_none()
            && self.state.is_none()
            && self.income.is_none()
    }
}

/// Per-scheme predicate configuration. An absent axis places no restriction;
/// a rule with every axis absent accepts everyone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Vec<String>>,
    /// Accepted substrings, not exact values: "farmer" admits "rice farmer".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caste: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_limit: Option<f64>,
}

impl EligibilityRule {
    pub fn unrestricted() -> Self {
        Self::default()
    }
}

/// Catalog entry describing one welfare scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub id: SchemeId,
    pub title: String,
    pub description: String,
    pub benefits: String,
    pub department: String,
    pub application_process: String,
    pub required_documents: Vec<String>,
    pub eligibility: EligibilityRule,
    pub is_active: bool,
}

/// Matched subset for one profile, in catalog order. Recomputed per request
/// and never cached; the profile rides along so callers see what was matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub schemes: Vec<Scheme>,
    pub total_matches: usize,
    pub profile: ApplicantProfile,
}

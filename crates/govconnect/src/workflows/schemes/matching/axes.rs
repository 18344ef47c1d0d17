use chrono::NaiveDate;

use super::super::domain::{ApplicantProfile, EligibilityRule};

/// Whole years as day-count divided by 365. Floor division keeps future
/// birth dates negative instead of rounding toward zero. Returns `None`
/// when the recorded value does not parse as `%Y-%m-%d`.
pub(crate) fn age_in_years(recorded: &str, on: NaiveDate) -> Option<i64> {
    let born = NaiveDate::parse_from_str(recorded.trim(), "%Y-%m-%d").ok()?;
    Some((on - born).num_days().div_euclid(365))
}

/// Age axis: bounds are inclusive. Skipped when the rule has no bounds, the
/// profile has no birth date, or the birth date does not parse.
pub(crate) fn age_within(rule: &EligibilityRule, profile: &ApplicantProfile, on: NaiveDate) -> bool {
    if rule.min_age.is_none() && rule.max_age.is_none() {
        return true;
    }
    let Some(recorded) = profile.date_of_birth.as_deref() else {
        return true;
    };
    let Some(age) = age_in_years(recorded, on) else {
        return true;
    };

    if let Some(min_age) = rule.min_age {
        if age < min_age {
            return false;
        }
    }
    if let Some(max_age) = rule.max_age {
        if age > max_age {
            return false;
        }
    }
    true
}

pub(crate) fn gender_admits(rule: &EligibilityRule, profile: &ApplicantProfile) -> bool {
    exact_membership(rule.gender.as_deref(), profile.gender.as_deref())
}

/// Occupation is substring membership: the rule token must appear inside
/// the profile occupation, so "farmer" admits "rice farmer in punjab".
pub(crate) fn occupation_admits(rule: &EligibilityRule, profile: &ApplicantProfile) -> bool {
    let (Some(allowed), Some(value)) = (rule.occupation.as_deref(), profile.occupation.as_deref())
    else {
        return true;
    };
    if allowed.is_empty() {
        return true;
    }

    let value = value.to_lowercase();
    allowed
        .iter()
        .any(|token| value.contains(&token.to_lowercase()))
}

pub(crate) fn caste_admits(rule: &EligibilityRule, profile: &ApplicantProfile) -> bool {
    exact_membership(rule.caste.as_deref(), profile.caste.as_deref())
}

pub(crate) fn state_admits(rule: &EligibilityRule, profile: &ApplicantProfile) -> bool {
    exact_membership(rule.state.as_deref(), profile.state.as_deref())
}

/// Income ceiling. Extraction never fills income, so this only bites for
/// directly supplied profiles.
pub(crate) fn income_within(rule: &EligibilityRule, profile: &ApplicantProfile) -> bool {
    let (Some(limit), Some(income)) = (rule.income_limit, profile.income) else {
        return true;
    };
    income <= limit
}

/// Case-insensitive exact membership. An empty allowed set is decoded
/// catalog noise and places no restriction.
fn exact_membership(allowed: Option<&[String]>, value: Option<&str>) -> bool {
    let (Some(allowed), Some(value)) = (allowed, value) else {
        return true;
    };
    if allowed.is_empty() {
        return true;
    }

    let value = value.to_lowercase();
    allowed
        .iter()
        .any(|candidate| candidate.to_lowercase() == value)
}

/// Lower-cases a raw transcript for trigger scanning. Extracted values keep
/// the lower-cased spelling until [`title_case`] runs at storage time.
pub(crate) fn normalize(raw: &str) -> String {
    raw.to_lowercase()
}

/// Returns the clause starting at `value_start`, ending just before the
/// earliest boundary character (or at the end of the text when none occurs).
pub(crate) fn clause_at<'a>(text: &'a str, value_start: usize, boundaries: &[char]) -> &'a str {
    let tail = &text[value_start..];
    match tail.find(|c: char| boundaries.contains(&c)) {
        Some(end) => &tail[..end],
        None => tail,
    }
}

/// Truncates a clause at the first standalone stop word. Speech-sourced name
/// clauses use this to drop trailing connectives ("... and i am 30 years old").
pub(crate) fn cut_at_stop_word<'a>(clause: &'a str, stop_words: &[&str]) -> &'a str {
    if stop_words.is_empty() {
        return clause;
    }

    let mut end = clause.len();
    let mut cursor = 0usize;
    for token in clause.split_whitespace() {
        // Offsets advance monotonically, so this find never rescans a match.
        let at = match clause[cursor..].find(token) {
            Some(relative) => cursor + relative,
            None => break,
        };
        cursor = at + token.len();
        if stop_words.contains(&token) {
            end = at;
            break;
        }
    }

    &clause[..end]
}

/// Accepts a candidate only when its trimmed character count exceeds
/// `min_chars`, rejecting spurious short matches.
pub(crate) fn accept_candidate(value: &str, min_chars: usize) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.chars().count() > min_chars {
        Some(trimmed)
    } else {
        None
    }
}

/// Upper-cases the first letter of every word, lower-casing the rest, the way
/// stored profile values are presented ("rice farmer" -> "Rice Farmer").
pub(crate) fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                titled.extend(ch.to_uppercase());
            } else {
                titled.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            titled.push(ch);
            at_word_start = true;
        }
    }
    titled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_stops_at_earliest_boundary() {
        let text = "occupation: farmer\nstate: kerala";
        assert_eq!(clause_at(text, 11, &['\n']), " farmer");
    }

    #[test]
    fn clause_runs_to_end_without_boundary() {
        let text = "i work as a weaver";
        assert_eq!(clause_at(text, 9, &['.', ',']), " a weaver");
    }

    #[test]
    fn clause_honors_comma_and_period() {
        let text = "a potter, from pune. thanks";
        assert_eq!(clause_at(text, 1, &['.', ',']), " potter");
    }

    #[test]
    fn stop_word_truncates_only_whole_tokens() {
        assert_eq!(cut_at_stop_word(" ravi and i am 30", &["and", "also"]), " ravi ");
        // "anand" contains "and" but is a single token and must survive.
        assert_eq!(cut_at_stop_word(" anand kumar", &["and", "also"]), " anand kumar");
    }

    #[test]
    fn short_candidates_are_rejected() {
        assert_eq!(accept_candidate("  ab ", 2), None);
        assert_eq!(accept_candidate(" ravi ", 2), Some("ravi"));
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("rice farmer in punjab"), "Rice Farmer In Punjab");
        assert_eq!(title_case("asha rao"), "Asha Rao");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }
}

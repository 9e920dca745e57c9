use crate::models::{CandidateMatch, RawRecord};

/// Decides which catalog candidates match a requested title
///
/// With `exact_matches_only`, a candidate matches only when its `name` equals `title`
/// verbatim (case-sensitive). Otherwise every candidate is accepted. An empty payload, or
/// a payload where nothing survives the filter, yields `CandidateMatch::NoMatch`.
pub fn validate_candidates(
    candidates: Vec<RawRecord>,
    title: &str,
    exact_matches_only: bool,
) -> CandidateMatch {
    let is_exact = |candidate: &RawRecord| {
        candidate.get("name").and_then(|name| name.as_str()) == Some(title)
    };

    match candidates.len() {
        0 => CandidateMatch::NoMatch,
        1 => {
            let mut candidates = candidates;
            let candidate = candidates.remove(0);
            if !exact_matches_only || is_exact(&candidate) {
                CandidateMatch::Single(candidate)
            } else {
                CandidateMatch::NoMatch
            }
        }
        total => {
            let accepted: Vec<RawRecord> = if exact_matches_only {
                candidates.into_iter().filter(|c| is_exact(c)).collect()
            } else {
                candidates
            };

            tracing::debug!(
                title = %title,
                candidates = total,
                accepted = accepted.len(),
                "Validated catalog candidates"
            );

            if accepted.is_empty() {
                CandidateMatch::NoMatch
            } else {
                CandidateMatch::Multiple(accepted)
            }
        }
    }
}

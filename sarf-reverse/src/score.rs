//! Positional similarity between a queried form and a generated one.

use sarf_core::Vocalized;

/// Letter and written marks agree.
pub const EXACT: f64 = 1.0;
/// Letter agrees, a mark is written on one side only.
pub const PARTIAL: f64 = 0.75;

/// Score one position, `None` when the positions contradict each other.
fn position_score(query: &Vocalized, candidate: &Vocalized) -> Option<f64> {
    if query.letter != candidate.letter {
        return None;
    }
    match (query.written_tashkil(), candidate.written_tashkil()) {
        (Some(a), Some(b)) if a != b => None,
        (a, b) if a == b && query.shadda == candidate.shadda => Some(EXACT),
        _ => Some(PARTIAL),
    }
}

/// Mean positional score of `candidate` against `query`.
///
/// Forms of different length score 0, as does any position whose letters
/// differ or whose written vowels conflict.
pub fn compare_vocalized(query: &[Vocalized], candidate: &[Vocalized]) -> f64 {
    if query.is_empty() || query.len() != candidate.len() {
        return 0.0;
    }

    let mut total = 0.0;
    for (q, c) in query.iter().zip(candidate) {
        match position_score(q, c) {
            Some(score) => total += score,
            None => return 0.0,
        }
    }
    total / query.len() as f64
}

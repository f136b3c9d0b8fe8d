//! Reverse conjugation: from a vocalized surface form back to the roots and
//! parameter sets that produce it.
//!
//! Analysis is generate-and-test. Affix patterns suggest candidate roots, and
//! every grammatical parameter combination of every candidate is conjugated
//! and scored against the query. Candidates are independent, so they are
//! verified in parallel.

pub mod patterns;
pub mod score;

use rayon::prelude::*;
use sarf_core::{
    parse_vocalized, ConjugationError, ConjugationParams, Conjugator, Dialect, Gender, Mood,
    Numerus, Person, Tense, VerbRoot, Vocalized, Voice,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

pub use patterns::{hypothesize, Hypothesis};
pub use score::compare_vocalized;

#[derive(Debug, Error)]
pub enum ReverseError {
    #[error(transparent)]
    Input(#[from] ConjugationError),
}

pub type Result<T, E = ReverseError> = std::result::Result<T, E>;

/// One root and parameter set whose conjugation resembles the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReverseConjugationResult {
    pub root: VerbRoot,
    pub params: ConjugationParams,
    /// In (0, 1], 1 for an exact match.
    pub score: f64,
}

/// Every parameter combination worth trying for one hypothesis.
fn parameter_space(hypothesis: &Hypothesis) -> Vec<ConjugationParams> {
    let moods: &[Mood] = match hypothesis.tense {
        Tense::Perfect => &[Mood::Indicative],
        Tense::Present => &Mood::ALL,
    };
    let contexts = if hypothesis.stem.number() == 1 {
        hypothesis
            .root
            .stem1_context_choices()
            .into_iter()
            .map(Some)
            .collect()
    } else {
        vec![None]
    };

    let mut space = Vec::new();
    for &mood in moods {
        let imperative = mood == Mood::Imperative;
        let voices: &[Voice] = if imperative { &[Voice::Active] } else { &Voice::ALL };
        let persons: &[Person] = if imperative { &[Person::Second] } else { &Person::ALL };

        for &voice in voices {
            for numerus in Numerus::ALL {
                for &person in persons {
                    for gender in Gender::ALL {
                        for context in &contexts {
                            let mut params = ConjugationParams::new(hypothesis.stem, hypothesis.tense)
                                .mood(mood)
                                .voice(voice)
                                .person(person)
                                .gender(gender)
                                .numerus(numerus);
                            params.stem1_context = *context;
                            space.push(params);
                        }
                    }
                }
            }
        }
    }
    space
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseConjugator {
    conjugator: Conjugator,
}

impl ReverseConjugator {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            conjugator: Conjugator::new(dialect),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.conjugator.dialect()
    }

    /// All candidates scoring above zero, in hypothesis order.
    ///
    /// A form no pattern recognizes yields an empty list.
    pub fn analyze(&self, form: &[Vocalized]) -> Vec<ReverseConjugationResult> {
        let hypotheses = hypothesize(form);
        if hypotheses.is_empty() {
            debug!("no affix pattern recognized for {}", sarf_core::to_text(form));
            return Vec::new();
        }
        debug!("verifying {} hypotheses", hypotheses.len());

        hypotheses
            .par_iter()
            .flat_map_iter(|hypothesis| self.verify(form, hypothesis))
            .collect()
    }

    /// Parse vocalized Arabic text and analyze it.
    pub fn analyze_text(&self, text: &str) -> Result<Vec<ReverseConjugationResult>> {
        let form = parse_vocalized(text)?;
        Ok(self.analyze(&form))
    }

    fn verify(&self, form: &[Vocalized], hypothesis: &Hypothesis) -> Vec<ReverseConjugationResult> {
        parameter_space(hypothesis)
            .into_iter()
            .filter_map(|params| {
                let conjugated = match self.conjugator.conjugate(&hypothesis.root, &params) {
                    Ok(conjugated) => conjugated,
                    Err(err) => {
                        trace!("skipping {} {:?}: {}", hypothesis.root, params, err);
                        return None;
                    }
                };
                let score = compare_vocalized(form, &conjugated);
                (score > 0.0).then(|| ReverseConjugationResult {
                    root: hypothesis.root.clone(),
                    params,
                    score,
                })
            })
            .collect()
    }
}

/// Analyze with the reverse conjugator of `dialect`.
pub fn analyze_conjugation(dialect: Dialect, form: &[Vocalized]) -> Vec<ReverseConjugationResult> {
    ReverseConjugator::new(dialect).analyze(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::{Stem, Stem1Context, Vowel};

    #[test]
    fn parameter_space_respects_imperative_rules() {
        let hypothesis = Hypothesis {
            root: "كتب".parse().unwrap(),
            stem: Stem::new(2).unwrap(),
            tense: Tense::Present,
        };
        let space = parameter_space(&hypothesis);
        // 3 moods x 2 voices x 18, plus 6 imperatives
        assert_eq!(space.len(), 114);
        assert!(space.iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn stem1_space_iterates_context_choices() {
        let hypothesis = Hypothesis {
            root: "قول".parse().unwrap(),
            stem: Stem::new(1).unwrap(),
            tense: Tense::Perfect,
        };
        let space = parameter_space(&hypothesis);
        assert_eq!(space.len(), 36 * 2);
        assert!(space
            .iter()
            .any(|p| p.stem1_context == Some(Stem1Context::new(Vowel::Fatha, Vowel::Dhamma))));
    }

    #[test]
    fn malformed_text_is_rejected() {
        let err = ReverseConjugator::default().analyze_text("\u{064E}").unwrap_err();
        assert!(matches!(
            err,
            ReverseError::Input(ConjugationError::MalformedText { .. })
        ));
    }
}

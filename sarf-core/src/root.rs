//! Verb Roots
//!
//! A root is the ordered list of three or four radical consonants. Its
//! phonological class is always derived from the radicals, never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConjugationError, Result};
use crate::letters::Letter;
use crate::lexicon;
use crate::params::{Stem1Context, Vowel};

/// Phonological class of a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootType {
    Sound,
    /// Waw or ya on R1.
    Assimilated,
    /// Waw or ya on R2.
    Hollow,
    /// Waw or ya on R3.
    Defective,
    /// R2 and R3 are the same consonant.
    SecondConsonantDoubled,
    HamzaOnR1,
    Quadriliteral,
    /// Waw on R1 and waw or ya on R3.
    DoublyWeak,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerbRoot {
    radicals: Vec<Letter>,
}

impl VerbRoot {
    pub fn new(radicals: Vec<Letter>) -> Result<Self> {
        let spelled = || radicals.iter().map(|l| l.to_char()).collect::<String>();
        if !(3..=4).contains(&radicals.len()) {
            return Err(ConjugationError::InvalidRoot {
                root: spelled(),
                reason: format!("expected 3 or 4 radicals, got {}", radicals.len()),
            });
        }
        if let Some(letter) = radicals.iter().find(|l| !l.is_radical()) {
            return Err(ConjugationError::InvalidRoot {
                root: spelled(),
                reason: format!("{letter} cannot be a radical"),
            });
        }
        Ok(Self { radicals })
    }

    pub fn radicals(&self) -> &[Letter] {
        &self.radicals
    }

    /// Radical by its 1-based number.
    pub fn radical(&self, number: usize) -> Option<Letter> {
        number
            .checked_sub(1)
            .and_then(|idx| self.radicals.get(idx).copied())
    }

    pub fn r1(&self) -> Letter {
        self.radicals[0]
    }

    pub fn r2(&self) -> Letter {
        self.radicals[1]
    }

    pub fn r3(&self) -> Letter {
        self.radicals[2]
    }

    pub fn is_quadriliteral(&self) -> bool {
        self.radicals.len() == 4
    }

    /// Classify the root. More specific classes are checked first.
    pub fn root_type(&self) -> RootType {
        if self.is_quadriliteral() {
            return RootType::Quadriliteral;
        }
        let (r1, r2, r3) = (self.r1(), self.r2(), self.r3());
        if r2 == r3 {
            RootType::SecondConsonantDoubled
        } else if r1 == Letter::Waw && r3.is_weak() {
            RootType::DoublyWeak
        } else if r2.is_weak() && !r3.is_weak() {
            RootType::Hollow
        } else if r3.is_weak() {
            RootType::Defective
        } else if r1.is_weak() {
            RootType::Assimilated
        } else if r1 == Letter::Hamza {
            RootType::HamzaOnR1
        } else {
            RootType::Sound
        }
    }

    /// The stem 1 vowel patterns this root can plausibly take.
    pub fn stem1_context_choices(&self) -> Vec<Stem1Context> {
        use Vowel::{Dhamma as U, Fatha as A, Kasra as I};

        if let Some(context) = lexicon::lookup(self).and_then(|entry| entry.stem1_context) {
            return vec![context];
        }

        let pairs: &[(Vowel, Vowel)] = match self.root_type() {
            RootType::Hollow if self.r2() == Letter::Waw => &[(A, U), (I, A)],
            RootType::Hollow => &[(A, I), (I, A)],
            RootType::Defective => &[(A, U), (A, I), (I, A)],
            RootType::DoublyWeak => &[(A, I), (I, I), (I, A)],
            RootType::SecondConsonantDoubled => &[(A, U), (A, I), (I, A)],
            RootType::Quadriliteral => &[(A, I)],
            RootType::Sound | RootType::Assimilated | RootType::HamzaOnR1 => {
                &[(A, U), (A, I), (A, A), (I, A), (I, I), (U, U)]
            }
        };

        pairs
            .iter()
            .map(|&(past, present)| Stem1Context::new(past, present))
            .collect()
    }
}

impl FromStr for VerbRoot {
    type Err = ConjugationError;

    /// Parse a root such as `فعل` or `ف-ع-ل`. Seated hamza forms are mapped to
    /// the bare radical.
    fn from_str(s: &str) -> Result<Self> {
        let mut radicals = Vec::with_capacity(4);
        for ch in s.chars() {
            if ch == '-' || ch.is_whitespace() {
                continue;
            }
            let letter = Letter::from_char(ch).ok_or_else(|| ConjugationError::InvalidRoot {
                root: s.to_string(),
                reason: format!("{ch:?} is not an Arabic letter"),
            })?;
            radicals.push(letter.to_radical());
        }
        Self::new(radicals)
    }
}

impl TryFrom<String> for VerbRoot {
    type Error = ConjugationError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<VerbRoot> for String {
    fn from(root: VerbRoot) -> Self {
        root.to_string()
    }
}

impl fmt::Display for VerbRoot {
    /// Dash separated radicals, e.g. `ف-ع-ل`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, radical) in self.radicals.iter().enumerate() {
            if idx > 0 {
                f.write_str("-")?;
            }
            write!(f, "{radical}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(s: &str) -> VerbRoot {
        s.parse().unwrap()
    }

    #[test]
    fn classification_prefers_specific_classes() {
        assert_eq!(root("فعل").root_type(), RootType::Sound);
        assert_eq!(root("وعد").root_type(), RootType::Assimilated);
        assert_eq!(root("يسر").root_type(), RootType::Assimilated);
        assert_eq!(root("قول").root_type(), RootType::Hollow);
        assert_eq!(root("رمي").root_type(), RootType::Defective);
        assert_eq!(root("دعو").root_type(), RootType::Defective);
        assert_eq!(root("مدد").root_type(), RootType::SecondConsonantDoubled);
        assert_eq!(root("ودد").root_type(), RootType::SecondConsonantDoubled);
        assert_eq!(root("أخذ").root_type(), RootType::HamzaOnR1);
        assert_eq!(root("قنطر").root_type(), RootType::Quadriliteral);
        assert_eq!(root("وعي").root_type(), RootType::DoublyWeak);
        // a weak R2 before a weak R3 behaves as a consonant
        assert_eq!(root("روي").root_type(), RootType::Defective);
    }

    #[test]
    fn parse_accepts_dashes_and_maps_seated_hamza() {
        let r = root("أ-خ-ذ");
        assert_eq!(r.r1(), Letter::Hamza);
        assert_eq!(r.to_string(), "ء-خ-ذ");
        assert_eq!(r.radical(3), Some(Letter::Thal));
        assert_eq!(r.radical(4), None);
    }

    #[test]
    fn invalid_roots_are_rejected() {
        assert!(matches!(
            "فع".parse::<VerbRoot>(),
            Err(ConjugationError::InvalidRoot { .. })
        ));
        assert!(matches!(
            "فعلمن".parse::<VerbRoot>(),
            Err(ConjugationError::InvalidRoot { .. })
        ));
        assert!(matches!(
            "فال".parse::<VerbRoot>(),
            Err(ConjugationError::InvalidRoot { .. })
        ));
        assert!("fعل".parse::<VerbRoot>().is_err());
    }

    #[test]
    fn lexical_roots_pin_their_stem1_context() {
        let choices = root("رأي").stem1_context_choices();
        assert_eq!(choices, vec![Stem1Context::new(Vowel::Fatha, Vowel::Kasra)]);
        assert_eq!(root("فعل").stem1_context_choices().len(), 6);
    }
}

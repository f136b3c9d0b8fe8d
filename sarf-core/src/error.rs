use thiserror::Error;

use crate::augmented::SlotTag;
use crate::params::{Mood, Person, Stem};
use crate::root::RootType;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConjugationError {
    #[error("invalid root {root:?}: {reason}")]
    InvalidRoot { root: String, reason: String },

    #[error("stem {0} is out of range, expected 1 to 10")]
    InvalidStem(u8),

    #[error("the imperative has no passive voice")]
    PassiveImperative,

    #[error("the imperative only exists in the second person, got {0:?}")]
    ImperativePerson(Person),

    #[error("mood {0:?} only applies to the present tense")]
    MoodWithoutPresent(Mood),

    #[error("stem 1 of a triliteral root requires a stem 1 context")]
    MissingStem1Context,

    #[error("{what} is not implemented for stem {stem} of {root_type:?} roots")]
    NotImplemented {
        what: &'static str,
        stem: Stem,
        root_type: RootType,
    },

    #[error("malformed vocalized text at position {position}: {reason}")]
    MalformedText { position: usize, reason: String },

    #[error("malformed transliteration at position {position}: unexpected {found:?}")]
    MalformedTransliteration { position: usize, found: char },

    #[error("symbol {position} of the conjugated form carries no diacritic")]
    UnvocalizedSymbol { position: usize },

    #[error("slot {0:?} is not present in the augmented root")]
    MissingSlot(SlotTag),

    #[error("{0} is not a radical number")]
    NotARadical(u8),
}

impl ConjugationError {
    /// Errors caused by an illegal parameter combination rather than by data.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            ConjugationError::PassiveImperative
                | ConjugationError::ImperativePerson(_)
                | ConjugationError::MoodWithoutPresent(_)
                | ConjugationError::MissingStem1Context
                | ConjugationError::InvalidStem(_)
        )
    }
}

pub type Result<T, E = ConjugationError> = std::result::Result<T, E>;

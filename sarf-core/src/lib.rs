//! Root-and-pattern verb morphology for Modern Standard Arabic.
//!
//! Given a root and a full set of grammatical parameters, [`conjugate`]
//! produces the vocalized surface form. The pipeline instantiates a stem
//! template, stamps the vowel pattern and the person suffix, lets the
//! resolver for the root's phonological class rewrite weak radicals, adds
//! the prefix, seats hamzas and collapses geminates.

pub mod augmentation;
pub mod augmented;
pub mod conjugator;
pub mod display;
pub mod error;
pub mod hamza;
pub mod letters;
pub mod lexicon;
pub mod params;
mod participle;
mod resolvers;
pub mod root;
pub mod tashkil;
pub mod transliteration;
mod verbal_noun;

pub use augmented::{AugmentedRoot, SlotTag, Symbol};
pub use conjugator::{conjugate, Conjugator, Dialect, DialectConjugator, MsaConjugator};
pub use error::{ConjugationError, Result};
pub use letters::{parse_vocalized, to_text, Letter, Tashkil, Vocalized};
pub use params::{
    ConjugationParams, Gender, Mood, Numerus, Person, Stem, Stem1Context, Tense, Voice, Vowel,
};
pub use root::{RootType, VerbRoot};
pub use transliteration::{from_buckwalter, to_buckwalter};

//! Irregular-form resolvers.
//!
//! Each root type gets one resolver that rewrites the augmented root after
//! the regular vowel pattern has been stamped. Resolvers only see the buffer
//! and the [`Job`] describing the form being built.

mod assimilated;
mod defective;
mod doubled;
mod hamza_on_r1;
mod hollow;
pub(crate) mod stems;

use crate::augmented::AugmentedRoot;
use crate::error::Result;
use crate::lexicon::LexicalEntry;
use crate::params::{ConjugationParams, Stem1Context};
use crate::root::{RootType, VerbRoot};

/// Everything a resolver needs to know about the form under construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Job<'a> {
    pub root: &'a VerbRoot,
    pub params: &'a ConjugationParams,
    /// Effective root type, after any sound override.
    pub root_type: RootType,
    pub context: Option<Stem1Context>,
    pub lexical: Option<&'static LexicalEntry>,
}

impl Job<'_> {
    pub fn stem(&self) -> u8 {
        self.params.stem.number()
    }

    pub fn perfect_active(&self) -> bool {
        self.params.is_perfect() && self.params.is_active()
    }
}

pub(crate) fn resolve(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    match job.root_type {
        RootType::Sound | RootType::Quadriliteral => Ok(()),
        RootType::Assimilated => assimilated::resolve(buffer, job),
        RootType::Hollow => hollow::resolve(buffer, job),
        RootType::Defective => defective::resolve(buffer, job),
        RootType::SecondConsonantDoubled => doubled::resolve(buffer, job),
        RootType::HamzaOnR1 => hamza_on_r1::resolve(buffer, job),
        RootType::DoublyWeak => {
            assimilated::resolve(buffer, job)?;
            defective::resolve(buffer, job)
        }
    }
}

//! Lexically irregular verbs.
//!
//! A handful of frequent roots deviate from their phonological class in ways
//! no rule predicts. They are listed here explicitly and applied around the
//! regular root-type resolvers.

use crate::augmented::{AugmentedRoot, SlotTag};
use crate::error::Result;
use crate::letters::{Letter, Tashkil};
use crate::params::{ConjugationParams, Stem1Context, Vowel};
use crate::root::VerbRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Irregularity {
    /// The middle hamza is elided and its vowel moves onto R1
    /// (yarā, arā). Applies to stem 1 outside the perfect and to all of
    /// stem 4.
    ElidedMiddleHamza,
    /// A final alef maksura after ya is written as alef in the present
    /// tense (yaḥyā).
    AlefAfterYa,
    /// The initial hamza disappears in the stem 1 imperative (ḫuḏ, kul).
    ImperativeWithoutHamza,
    /// The initial hamza assimilates to the infixed ta of stem 8
    /// (ittaḫaḏa).
    Stem8HamzaAssimilation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalEntry {
    pub radicals: [Letter; 3],
    pub stem1_context: Option<Stem1Context>,
    pub irregularities: &'static [Irregularity],
}

impl LexicalEntry {
    pub fn has(&self, irregularity: Irregularity) -> bool {
        self.irregularities.contains(&irregularity)
    }
}

const fn context(past: Vowel, present: Vowel) -> Option<Stem1Context> {
    Some(Stem1Context {
        past,
        present,
        sound_override: false,
    })
}

static ENTRIES: &[LexicalEntry] = &[
    // raʾā, yarā
    LexicalEntry {
        radicals: [Letter::Ra, Letter::Hamza, Letter::Ya],
        stem1_context: context(Vowel::Fatha, Vowel::Kasra),
        irregularities: &[Irregularity::ElidedMiddleHamza],
    },
    // ḥayiya, yaḥyā
    LexicalEntry {
        radicals: [Letter::Hha, Letter::Ya, Letter::Waw],
        stem1_context: context(Vowel::Kasra, Vowel::Fatha),
        irregularities: &[Irregularity::AlefAfterYa],
    },
    // ʾaḫaḏa
    LexicalEntry {
        radicals: [Letter::Hamza, Letter::Kha, Letter::Thal],
        stem1_context: None,
        irregularities: &[
            Irregularity::ImperativeWithoutHamza,
            Irregularity::Stem8HamzaAssimilation,
        ],
    },
    // ʾakala
    LexicalEntry {
        radicals: [Letter::Hamza, Letter::Kaf, Letter::Lam],
        stem1_context: None,
        irregularities: &[Irregularity::ImperativeWithoutHamza],
    },
];

pub fn lookup(root: &VerbRoot) -> Option<&'static LexicalEntry> {
    ENTRIES
        .iter()
        .find(|entry| entry.radicals.as_slice() == root.radicals())
}

/// Alterations that must happen before the root-type resolver runs.
pub(crate) fn apply_before_resolver(
    entry: &LexicalEntry,
    buffer: &mut AugmentedRoot,
    params: &ConjugationParams,
) -> Result<()> {
    let stem = params.stem.number();

    if entry.has(Irregularity::ElidedMiddleHamza)
        && (stem == 4 || (stem == 1 && !params.is_perfect()))
    {
        // yarā always has fatha, stem 4 keeps the vowel of the pattern
        let vowel = match stem {
            1 => Tashkil::Fatha,
            _ => buffer
                .radical(2)
                .and_then(|r2| r2.tashkil)
                .unwrap_or(Tashkil::Fatha),
        };
        buffer.insert_short_vowel(2, vowel)?;
    }

    Ok(())
}

/// Alterations of the spelling produced by the root-type resolver.
pub(crate) fn apply_after_resolver(
    entry: &LexicalEntry,
    buffer: &mut AugmentedRoot,
    params: &ConjugationParams,
) -> Result<()> {
    if entry.has(Irregularity::AlefAfterYa) && params.stem.number() == 1 && !params.is_perfect() {
        if let Some(r3) = buffer.symbol_mut(SlotTag::R3) {
            if r3.letter == Letter::AlefMaksura {
                r3.letter = Letter::Alef;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_full_radicals() {
        let raa: VerbRoot = "رأي".parse().unwrap();
        let entry = lookup(&raa).unwrap();
        assert!(entry.has(Irregularity::ElidedMiddleHamza));
        assert!(!entry.has(Irregularity::AlefAfterYa));

        let axadha: VerbRoot = "أخذ".parse().unwrap();
        assert!(lookup(&axadha)
            .unwrap()
            .has(Irregularity::Stem8HamzaAssimilation));

        let rmy: VerbRoot = "رمي".parse().unwrap();
        assert!(lookup(&rmy).is_none());
    }
}

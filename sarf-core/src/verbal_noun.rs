//! Verbal nouns (masdar) of the derived stems.
//!
//! Patterns are written in Buckwalter with `f`, `E` and `l` standing for the
//! three radicals. Stem 1 verbal nouns are lexical and are not generated.

use crate::augmented::{AugmentedRoot, SlotTag, Symbol};
use crate::display;
use crate::error::{ConjugationError, Result};
use crate::hamza;
use crate::letters::{Letter, Tashkil, Vocalized};
use crate::lexicon;
use crate::params::{ConjugationParams, Stem, Tense};
use crate::resolvers::{stems, Job};
use crate::root::{RootType, VerbRoot};
use crate::transliteration::from_buckwalter;

fn patterns(stem: u8, root_type: RootType) -> Option<&'static [&'static str]> {
    use RootType::*;

    let found: &'static [&'static str] = match (stem, root_type) {
        (2, Sound | HamzaOnR1 | Hollow | SecondConsonantDoubled) => &["tafoEiyl"],
        (3, Sound | HamzaOnR1) => &["fiEAl", "mufAEalap"],
        (4, Sound | HamzaOnR1) => &["<ifoEAl"],
        (4, Hollow) => &["<ifAlap"],
        (4, Defective) => &["<ifoEA'"],
        (5, Sound | HamzaOnR1 | Assimilated | Hollow) => &["tafaE~ul"],
        (6, Sound | HamzaOnR1 | Assimilated) => &["tafAEul"],
        (7, Sound | HamzaOnR1) => &["AinofiEAl"],
        (8, Sound | HamzaOnR1) => &["AifotiEAl"],
        (8, Hollow) => &["AifotiyAl"],
        (9, Sound) => &["AifoEilAl"],
        (10, Sound | HamzaOnR1) => &["AisotifoEAl"],
        (10, SecondConsonantDoubled) => &["AisotifoEAE"],
        _ => return None,
    };
    Some(found)
}

pub(crate) fn verbal_nouns(root: &VerbRoot, stem: Stem) -> Result<Vec<Vec<Vocalized>>> {
    let root_type = root.root_type();
    let patterns = patterns(stem.number(), root_type).ok_or(ConjugationError::NotImplemented {
        what: "verbal noun",
        stem,
        root_type,
    })?;

    patterns
        .iter()
        .map(|pattern| {
            let mut buffer = fill(pattern, root)?;
            if stem.number() == 8 {
                let params = ConjugationParams::new(stem, Tense::Perfect);
                let job = Job {
                    root,
                    params: &params,
                    root_type,
                    context: None,
                    lexical: lexicon::lookup(root),
                };
                stems::apply(&mut buffer, &job)?;
            }
            display::finalize(hamza::resolve_seats(buffer.into_symbols()))
        })
        .collect()
}

/// Substitute the radicals into a pattern and tag every symbol with its slot.
fn fill(pattern: &str, root: &VerbRoot) -> Result<AugmentedRoot> {
    let parsed = from_buckwalter(pattern)?;
    let last = parsed.len().saturating_sub(1);
    let mut symbols: Vec<Symbol> = Vec::with_capacity(parsed.len());

    for (idx, vocalized) in parsed.into_iter().enumerate() {
        let number = match vocalized.letter {
            Letter::Fa => Some(1),
            Letter::Ain => Some(2),
            Letter::Lam => Some(3),
            _ => None,
        };
        let after_r1 = symbols.last().is_some_and(|s| s.slot == SlotTag::R1);

        let (letter, slot) = match number.and_then(|n| Some((root.radical(n)?, SlotTag::radical(n as u8)?))) {
            Some(radical) => radical,
            None if idx == 0 && vocalized.letter == Letter::Alef => (vocalized.letter, SlotTag::Prefix1),
            None if after_r1 && vocalized.letter == Letter::Ta => (vocalized.letter, SlotTag::Infix),
            None => (vocalized.letter, SlotTag::Postfix),
        };

        let mut tashkil = vocalized.tashkil;
        if tashkil.is_none() && idx != last && matches!(letter, Letter::Alef | Letter::Waw | Letter::Ya) && number.is_none() {
            tashkil = Some(Tashkil::LongVowelMarker);
        }

        let mut symbol = Symbol::new(letter, tashkil, slot);
        symbol.shadda = vocalized.shadda;
        symbols.push(symbol);
    }
    Ok(AugmentedRoot::new(symbols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::to_buckwalter;

    fn nouns(root: &str, stem: u8) -> Vec<String> {
        let root: VerbRoot = root.parse().unwrap();
        verbal_nouns(&root, Stem::new(stem).unwrap())
            .unwrap()
            .iter()
            .map(|n| to_buckwalter(n))
            .collect()
    }

    #[test]
    fn sound_patterns() {
        assert_eq!(nouns("كتب", 2), vec!["takotiyb"]);
        assert_eq!(nouns("كتب", 3), vec!["kitAb", "mukAtabap"]);
        assert_eq!(nouns("خرج", 10), vec!["AisotixorAj"]);
    }

    #[test]
    fn hamza_and_stem8_adjustments() {
        // ʾīmān
        assert_eq!(nouns("أمن", 4), vec!["<iymAn"]);
        assert_eq!(nouns("صبر", 8), vec!["AiSoTibAr"]);
        assert_eq!(nouns("أخذ", 8), vec!["Aiti~xA*"]);
    }

    #[test]
    fn weak_roots_use_their_own_patterns() {
        assert_eq!(nouns("قوم", 4), vec!["<iqAmap"]);
        assert_eq!(nouns("عطي", 4), vec!["<iEoTA'"]);
    }

    #[test]
    fn stem1_is_lexical() {
        let root: VerbRoot = "كتب".parse().unwrap();
        assert!(matches!(
            verbal_nouns(&root, Stem::new(1).unwrap()),
            Err(ConjugationError::NotImplemented { .. })
        ));
    }
}

//! Vowel patterns: radical diacritics, person suffixes and prefixes.

use crate::augmented::{AugmentedRoot, SlotTag, Symbol};
use crate::error::{ConjugationError, Result};
use crate::letters::{Letter, Tashkil};
use crate::params::{ConjugationParams, Gender, Mood, Numerus, Person, Stem1Context, Tense, Vowel};

/// Stems whose R1 is vowelless in the perfect.
const PERFECT_R1_SUKUN: &[u8] = &[4, 8, 9, 10];
/// Stems whose R1 is vowelless in the present.
const PRESENT_R1_SUKUN: &[u8] = &[1, 4, 8, 9, 10];
/// Derived stems with fatha on R2 in the active present.
const PRESENT_R2_FATHA: &[u8] = &[5, 6, 9];
/// Stems whose present prefix carries dhamma in the active voice too.
const PREFIX_DHAMMA: &[u8] = &[2, 3, 4];

/// Diacritics of every radical except the last one, which belongs to the
/// suffix.
pub fn root_tashkil(
    params: &ConjugationParams,
    quadriliteral: bool,
    context: Option<Stem1Context>,
) -> Result<Vec<Tashkil>> {
    let stem = params.stem.number();
    let active = params.is_active();

    if quadriliteral {
        let r1 = if params.is_perfect() && !active {
            Tashkil::Dhamma
        } else {
            Tashkil::Fatha
        };
        let r3 = match (active, params.tense) {
            (true, Tense::Perfect) => Tashkil::Fatha,
            (true, Tense::Present) => Tashkil::Kasra,
            (false, Tense::Perfect) => Tashkil::Kasra,
            (false, Tense::Present) => Tashkil::Fatha,
        };
        return Ok(vec![r1, Tashkil::Sukun, r3]);
    }

    let lexical = |pick: fn(Stem1Context) -> Vowel| {
        context
            .map(|c| pick(c).tashkil())
            .ok_or(ConjugationError::MissingStem1Context)
    };

    let (r1, r2) = match params.tense {
        Tense::Perfect => {
            let r1 = if PERFECT_R1_SUKUN.contains(&stem) {
                Tashkil::Sukun
            } else if active {
                Tashkil::Fatha
            } else {
                Tashkil::Dhamma
            };
            let r2 = if !active {
                Tashkil::Kasra
            } else if stem == 1 {
                lexical(|c| c.past)?
            } else {
                Tashkil::Fatha
            };
            (r1, r2)
        }
        Tense::Present => {
            let r1 = if PRESENT_R1_SUKUN.contains(&stem) {
                Tashkil::Sukun
            } else {
                Tashkil::Fatha
            };
            let r2 = if !active || PRESENT_R2_FATHA.contains(&stem) {
                Tashkil::Fatha
            } else if stem == 1 {
                lexical(|c| c.present)?
            } else {
                Tashkil::Kasra
            };
            (r1, r2)
        }
    };
    Ok(vec![r1, r2])
}

/// The inflectional ending of a form: the diacritic it forces on the last
/// radical and the letters it appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffix {
    pub pre_tashkil: Tashkil,
    pub symbols: Vec<Symbol>,
}

impl Suffix {
    fn new(pre_tashkil: Tashkil, letters: &[(Letter, Tashkil)]) -> Self {
        let symbols = letters
            .iter()
            .map(|&(letter, tashkil)| Symbol::new(letter, Some(tashkil), SlotTag::Postfix))
            .collect();
        Self { pre_tashkil, symbols }
    }

    fn bare(pre_tashkil: Tashkil) -> Self {
        Self::new(pre_tashkil, &[])
    }
}

const LONG: Tashkil = Tashkil::LongVowelMarker;

pub fn suffix(params: &ConjugationParams) -> Suffix {
    use Tashkil::{Dhamma, Fatha, Kasra, Sukun};

    let (person, numerus, gender) = (params.person, params.numerus, params.gender);

    if params.tense == Tense::Perfect {
        return match (person, numerus, gender) {
            (Person::First, Numerus::Singular, _) => Suffix::new(Sukun, &[(Letter::Ta, Dhamma)]),
            (Person::First, _, _) => Suffix::new(Sukun, &[(Letter::Nun, Fatha), (Letter::Alef, LONG)]),
            (Person::Second, Numerus::Singular, Gender::Male) => Suffix::new(Sukun, &[(Letter::Ta, Fatha)]),
            (Person::Second, Numerus::Singular, Gender::Female) => Suffix::new(Sukun, &[(Letter::Ta, Kasra)]),
            (Person::Second, Numerus::Dual, _) => Suffix::new(
                Sukun,
                &[(Letter::Ta, Dhamma), (Letter::Mim, Fatha), (Letter::Alef, LONG)],
            ),
            (Person::Second, Numerus::Plural, Gender::Male) => {
                Suffix::new(Sukun, &[(Letter::Ta, Dhamma), (Letter::Mim, Sukun)])
            }
            (Person::Second, Numerus::Plural, Gender::Female) => {
                let mut suffix = Suffix::new(Sukun, &[(Letter::Ta, Dhamma), (Letter::Nun, Fatha)]);
                if let Some(nun) = suffix.symbols.last_mut() {
                    nun.shadda = true;
                }
                suffix
            }
            (Person::Third, Numerus::Singular, Gender::Male) => Suffix::bare(Fatha),
            (Person::Third, Numerus::Singular, Gender::Female) => Suffix::new(Fatha, &[(Letter::Ta, Sukun)]),
            (Person::Third, Numerus::Dual, Gender::Male) => Suffix::new(Fatha, &[(Letter::Alef, LONG)]),
            (Person::Third, Numerus::Dual, Gender::Female) => {
                Suffix::new(Fatha, &[(Letter::Ta, Fatha), (Letter::Alef, LONG)])
            }
            (Person::Third, Numerus::Plural, Gender::Male) => {
                Suffix::new(Dhamma, &[(Letter::Waw, LONG), (Letter::Alef, LONG)])
            }
            (Person::Third, Numerus::Plural, Gender::Female) => Suffix::new(Sukun, &[(Letter::Nun, Fatha)]),
        };
    }

    let indicative = params.mood == Mood::Indicative;
    let default = match params.mood {
        Mood::Indicative => Dhamma,
        Mood::Subjunctive => Fatha,
        Mood::Jussive | Mood::Imperative => Sukun,
    };

    match (person, numerus, gender) {
        (Person::Second, Numerus::Singular, Gender::Female) if indicative => {
            Suffix::new(Kasra, &[(Letter::Ya, LONG), (Letter::Nun, Fatha)])
        }
        (Person::Second, Numerus::Singular, Gender::Female) => Suffix::new(Kasra, &[(Letter::Ya, LONG)]),
        (_, Numerus::Singular, _) | (Person::First, _, _) => Suffix::bare(default),
        (_, Numerus::Dual, _) if indicative => Suffix::new(Fatha, &[(Letter::Alef, LONG), (Letter::Nun, Kasra)]),
        (_, Numerus::Dual, _) => Suffix::new(Fatha, &[(Letter::Alef, LONG)]),
        (_, Numerus::Plural, Gender::Male) if indicative => {
            Suffix::new(Dhamma, &[(Letter::Waw, LONG), (Letter::Nun, Fatha)])
        }
        (_, Numerus::Plural, Gender::Male) => Suffix::new(Dhamma, &[(Letter::Waw, LONG), (Letter::Alef, LONG)]),
        (_, Numerus::Plural, Gender::Female) => Suffix::new(Sukun, &[(Letter::Nun, Fatha)]),
    }
}

/// Add whatever precedes the stem: the connecting alef of vowelless onsets
/// in the perfect and imperative, or the person prefix of the present.
pub fn apply_prefix(
    buffer: &mut AugmentedRoot,
    params: &ConjugationParams,
    quadriliteral: bool,
    context: Option<Stem1Context>,
) {
    let stem = params.stem.number();
    let vowelless_onset = buffer.first().and_then(|s| s.tashkil) == Some(Tashkil::Sukun);

    if params.is_perfect() {
        if vowelless_onset {
            let vowel = if params.is_active() {
                Tashkil::Kasra
            } else {
                Tashkil::Dhamma
            };
            buffer.prepend(Symbol::new(Letter::Alef, Some(vowel), SlotTag::Prefix1));
        }
        return;
    }

    if params.is_imperative() {
        if stem == 4 {
            buffer.prepend(Symbol::new(Letter::AlefHamza, Some(Tashkil::Fatha), SlotTag::Prefix1));
        } else if vowelless_onset {
            let vowel = match context {
                Some(c) if stem == 1 && c.present == Vowel::Dhamma => Tashkil::Dhamma,
                _ => Tashkil::Kasra,
            };
            buffer.prepend(Symbol::new(Letter::Alef, Some(vowel), SlotTag::Prefix1));
            merge_initial_weak_onset(buffer);
        }
        return;
    }

    let vowel = if quadriliteral || PREFIX_DHAMMA.contains(&stem) || !params.is_active() {
        Tashkil::Dhamma
    } else {
        Tashkil::Fatha
    };
    let letter = match (params.person, params.numerus, params.gender) {
        (Person::First, Numerus::Singular, _) => Letter::AlefHamza,
        (Person::First, _, _) => Letter::Nun,
        (Person::Second, _, _) => Letter::Ta,
        (Person::Third, Numerus::Plural, _) | (Person::Third, _, Gender::Male) => Letter::Ya,
        (Person::Third, _, Gender::Female) => Letter::Ta,
    };
    buffer.prepend(Symbol::new(letter, Some(vowel), SlotTag::Prefix1));
}

/// A vowelless waw or ya after the connecting alef with kasra becomes a long
/// ya (iydad, iysir). The alef keeps its kasra.
fn merge_initial_weak_onset(buffer: &mut AugmentedRoot) {
    let symbols = buffer.symbols();
    let applies = symbols.len() > 1
        && symbols[0].tashkil == Some(Tashkil::Kasra)
        && symbols[1].letter.is_weak()
        && symbols[1].tashkil == Some(Tashkil::Sukun);
    if !applies {
        return;
    }
    let second = symbols[1].slot;
    if let Some(weak) = buffer.symbol_mut(second) {
        weak.letter = Letter::Ya;
        weak.tashkil = Some(Tashkil::LongVowelMarker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Stem, Voice};

    fn params(stem: u8, tense: Tense) -> ConjugationParams {
        ConjugationParams::new(Stem::new(stem).unwrap(), tense)
    }

    #[test]
    fn stem1_requires_context() {
        let p = params(1, Tense::Perfect);
        assert_eq!(
            root_tashkil(&p, false, None),
            Err(ConjugationError::MissingStem1Context)
        );
        // the passive never reads the lexical vowels
        assert!(root_tashkil(&p.voice(Voice::Passive), false, None).is_ok());
    }

    #[test]
    fn derived_stems_use_fixed_vowels() {
        let present = params(10, Tense::Present);
        assert_eq!(
            root_tashkil(&present, false, None).unwrap(),
            vec![Tashkil::Sukun, Tashkil::Kasra]
        );
        let perfect = params(5, Tense::Perfect);
        assert_eq!(
            root_tashkil(&perfect, false, None).unwrap(),
            vec![Tashkil::Fatha, Tashkil::Fatha]
        );
    }

    #[test]
    fn second_person_feminine_plural_has_doubled_nun() {
        let p = params(1, Tense::Perfect)
            .person(Person::Second)
            .gender(Gender::Female)
            .numerus(Numerus::Plural);
        let suffix = suffix(&p);
        assert_eq!(suffix.pre_tashkil, Tashkil::Sukun);
        assert_eq!(suffix.symbols.len(), 2);
        assert!(suffix.symbols[1].shadda);
    }

    #[test]
    fn first_person_dual_uses_plural_ending() {
        let dual = params(1, Tense::Perfect)
            .person(Person::First)
            .numerus(Numerus::Dual);
        let plural = dual.numerus(Numerus::Plural);
        assert_eq!(suffix(&dual), suffix(&plural));
    }

    #[test]
    fn present_endings_follow_mood() {
        let p = params(1, Tense::Present).numerus(Numerus::Plural);
        assert_eq!(suffix(&p).symbols[1].letter, Letter::Nun);
        assert_eq!(
            suffix(&p.mood(Mood::Subjunctive)).symbols[1].letter,
            Letter::Alef
        );
        assert_eq!(
            suffix(&p.numerus(Numerus::Singular).mood(Mood::Jussive)).pre_tashkil,
            Tashkil::Sukun
        );
    }
}

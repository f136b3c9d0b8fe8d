//! Active and passive participles.
//!
//! Stem 1 participles follow fixed patterns per root type (fāʿil, mafʿūl and
//! their weak variants). Derived stems build on the present stem: the person
//! prefix is replaced by mu- and R2 carries kasra (active) or fatha
//! (passive).

use crate::augmentation;
use crate::augmented::{AugmentedRoot, SlotTag, Symbol};
use crate::display;
use crate::error::{ConjugationError, Result};
use crate::hamza;
use crate::letters::{Letter, Tashkil, Vocalized};
use crate::lexicon;
use crate::params::{ConjugationParams, Stem, Stem1Context, Tense, Voice, Vowel};
use crate::resolvers::{self, stems, Job};
use crate::root::{RootType, VerbRoot};
use crate::tashkil;

pub(crate) fn participle(
    root: &VerbRoot,
    root_type: RootType,
    stem: Stem,
    voice: Voice,
    context: Option<Stem1Context>,
) -> Result<Vec<Vocalized>> {
    let symbols = if stem.number() == 1 {
        stem1(root, root_type, voice, context)
    } else {
        derived(root, root_type, stem, voice, context)?
    };
    display::finalize(hamza::resolve_seats(symbols))
}

fn radical(root: &VerbRoot, number: u8, tashkil: Option<Tashkil>) -> Symbol {
    let letter = root.radical(usize::from(number)).unwrap_or(Letter::Hamza);
    let slot = SlotTag::radical(number).unwrap_or(SlotTag::Infix);
    Symbol::new(letter, tashkil, slot)
}

fn fixed(letter: Letter, tashkil: Option<Tashkil>) -> Symbol {
    Symbol::new(letter, tashkil, SlotTag::Postfix)
}

/// The long alef of fāʿil, which fuses with an open hamza on R1 into madda.
fn infix_alef() -> Symbol {
    Symbol::new(Letter::Alef, LONG, SlotTag::Infix)
}

const LONG: Option<Tashkil> = Some(Tashkil::LongVowelMarker);
const A: Option<Tashkil> = Some(Tashkil::Fatha);
const U: Option<Tashkil> = Some(Tashkil::Dhamma);
const I: Option<Tashkil> = Some(Tashkil::Kasra);
const O: Option<Tashkil> = Some(Tashkil::Sukun);

fn stem1(root: &VerbRoot, root_type: RootType, voice: Voice, context: Option<Stem1Context>) -> Vec<Symbol> {
    let active = voice == Voice::Active;
    match root_type {
        RootType::Quadriliteral => vec![
            fixed(Letter::Mim, U),
            radical(root, 1, A),
            radical(root, 2, O),
            radical(root, 3, if active { I } else { A }),
            radical(root, 4, None),
        ],
        // jāʾin
        RootType::Hollow if active && root.r3() == Letter::Hamza => vec![
            radical(root, 1, A),
            infix_alef(),
            radical(root, 3, Some(Tashkil::Kasratan)),
        ],
        // qāʾil / maqūl, bāʾiʿ / mabīʿ
        RootType::Hollow if active => vec![
            radical(root, 1, A),
            infix_alef(),
            fixed(Letter::Hamza, I),
            radical(root, 3, None),
        ],
        RootType::Hollow => {
            let (vowel, long) = if root.r2() == Letter::Ya {
                (I, Letter::Ya)
            } else {
                (U, Letter::Waw)
            };
            vec![
                fixed(Letter::Mim, A),
                radical(root, 1, vowel),
                fixed(long, LONG),
                radical(root, 3, None),
            ]
        }
        // rāmin / marmiyy, dāʿin / madʿuww
        RootType::Defective | RootType::DoublyWeak if active => vec![
            radical(root, 1, A),
            infix_alef(),
            radical(root, 2, Some(Tashkil::Kasratan)),
        ],
        RootType::Defective | RootType::DoublyWeak => {
            let dhamma = context.map(|c| c.present) == Some(Vowel::Dhamma);
            let (vowel, glide) = if dhamma {
                (U, Letter::Waw)
            } else {
                (I, Letter::Ya)
            };
            let mut last = fixed(glide, None);
            last.shadda = true;
            vec![
                fixed(Letter::Mim, A),
                radical(root, 1, O),
                radical(root, 2, vowel),
                last,
            ]
        }
        // mādd / mamdūd
        RootType::SecondConsonantDoubled if active => {
            let mut last = radical(root, 2, None);
            last.shadda = true;
            vec![radical(root, 1, A), infix_alef(), last]
        }
        _ if active => vec![
            radical(root, 1, A),
            infix_alef(),
            radical(root, 2, I),
            radical(root, 3, None),
        ],
        _ => vec![
            fixed(Letter::Mim, A),
            radical(root, 1, O),
            radical(root, 2, U),
            fixed(Letter::Waw, LONG),
            radical(root, 3, None),
        ],
    }
}

fn derived(
    root: &VerbRoot,
    root_type: RootType,
    stem: Stem,
    voice: Voice,
    context: Option<Stem1Context>,
) -> Result<Vec<Symbol>> {
    let not_implemented = || ConjugationError::NotImplemented {
        what: "participle",
        stem,
        root_type,
    };
    let template =
        augmentation::template(stem, root_type, Tense::Present, Voice::Active).ok_or_else(not_implemented)?;
    let mut buffer = augmentation::instantiate(root, &template);

    let params = ConjugationParams::new(stem, Tense::Present).voice(voice);
    let r1 = tashkil::root_tashkil(&params, false, context)?
        .first()
        .copied()
        .ok_or_else(not_implemented)?;
    let r2 = match voice {
        Voice::Active => Tashkil::Kasra,
        Voice::Passive => Tashkil::Fatha,
    };
    buffer.apply_radical_tashkil(1, Some(r1))?;
    buffer.apply_radical_tashkil(2, Some(r2))?;

    let job = Job {
        root,
        params: &params,
        root_type,
        context,
        lexical: lexicon::lookup(root),
    };
    stems::apply(&mut buffer, &job)?;

    match root_type {
        RootType::Defective | RootType::DoublyWeak => defective_ending(&mut buffer, voice)?,
        RootType::Hollow => hollow_middle(&mut buffer, stem, voice)?,
        RootType::SecondConsonantDoubled => resolvers::resolve(&mut buffer, &job)?,
        _ => {}
    }

    buffer.prepend(Symbol::new(Letter::Mim, U, SlotTag::Prefix1));
    Ok(buffer.into_symbols())
}

/// murmin / murman.
fn defective_ending(buffer: &mut AugmentedRoot, voice: Voice) -> Result<()> {
    match voice {
        Voice::Active => {
            buffer.drop_radical(3)?;
            buffer.apply_radical_tashkil(2, Some(Tashkil::Kasratan))
        }
        Voice::Passive => {
            buffer.apply_radical_tashkil(2, Some(Tashkil::Fathatan))?;
            buffer.replace_radical(3, Letter::AlefMaksura, Some(Tashkil::EndOfWordMarker))
        }
    }
}

/// The weak middle radical surfaces as a long vowel in the stems that do not
/// keep it consonantal (muqīm, mustaqām, munqād).
fn hollow_middle(buffer: &mut AugmentedRoot, stem: Stem, voice: Voice) -> Result<()> {
    match stem.number() {
        4 | 10 if voice == Voice::Active => buffer.insert_long_vowel(2, Letter::Ya),
        4 | 7 | 8 | 10 => buffer.insert_long_vowel(2, Letter::Alef),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transliteration::to_buckwalter;

    fn bw(root: &str, stem: u8, voice: Voice, context: Option<Stem1Context>) -> String {
        let root: VerbRoot = root.parse().unwrap();
        let root_type = root.root_type();
        to_buckwalter(&participle(&root, root_type, Stem::new(stem).unwrap(), voice, context).unwrap())
    }

    fn ctx(past: Vowel, present: Vowel) -> Option<Stem1Context> {
        Some(Stem1Context::new(past, present))
    }

    #[test]
    fn stem1_patterns() {
        let au = ctx(Vowel::Fatha, Vowel::Dhamma);
        assert_eq!(bw("كتب", 1, Voice::Active, au), "kAtib");
        assert_eq!(bw("كتب", 1, Voice::Passive, au), "makotuwb");
        assert_eq!(bw("قول", 1, Voice::Active, au), "qA}il");
        assert_eq!(bw("قول", 1, Voice::Passive, au), "maquwl");
        assert_eq!(bw("رمي", 1, Voice::Active, ctx(Vowel::Fatha, Vowel::Kasra)), "rAmK");
        assert_eq!(bw("رمي", 1, Voice::Passive, ctx(Vowel::Fatha, Vowel::Kasra)), "maromiy~");
        assert_eq!(bw("مدد", 1, Voice::Active, au), "mAd~");
    }

    #[test]
    fn hamza_on_r1_fuses_with_long_alef() {
        let au = ctx(Vowel::Fatha, Vowel::Dhamma);
        assert_eq!(bw("أخذ", 1, Voice::Active, au), "|xi*");
        assert_eq!(bw("أتي", 1, Voice::Active, ctx(Vowel::Fatha, Vowel::Kasra)), "|tK");
        assert_eq!(bw("أمر", 1, Voice::Passive, au), "ma>omuwr");
    }

    #[test]
    fn hollow_root_with_final_hamza() {
        let ai = ctx(Vowel::Fatha, Vowel::Kasra);
        assert_eq!(bw("جيء", 1, Voice::Active, ai), "jA'K");
        assert_eq!(bw("جيء", 1, Voice::Passive, ai), "majiy'");
    }

    #[test]
    fn derived_stems_use_mu_prefix() {
        assert_eq!(bw("كتب", 2, Voice::Active, None), "mukati~b");
        assert_eq!(bw("كتب", 10, Voice::Passive, None), "musotakotab");
        assert_eq!(bw("قوم", 4, Voice::Active, None), "muqiym");
        assert_eq!(bw("لقي", 3, Voice::Active, None), "mulAqK");
        assert_eq!(bw("حبب", 4, Voice::Active, None), "muHib~");
    }

    #[test]
    fn doubled_stem3_geminates_in_both_voices() {
        assert_eq!(bw("ضدد", 3, Voice::Active, None), "muDAd~");
        assert_eq!(bw("ضدد", 3, Voice::Passive, None), "muDAd~");
    }

    #[test]
    fn quadriliteral_only_has_stem1() {
        let root: VerbRoot = "ترجم".parse().unwrap();
        let result = participle(&root, RootType::Quadriliteral, Stem::new(2).unwrap(), Voice::Active, None);
        assert!(matches!(result, Err(ConjugationError::NotImplemented { .. })));
    }
}

//! Stem templates.
//!
//! A template lays out where the radicals go and which fixed letters the
//! derived stem adds around them. Templates only exist for the supported
//! (stem, root type) pairs; everything else is reported as not implemented.

use crate::augmented::{AugmentedRoot, SlotTag, Symbol};
use crate::letters::{Letter, Tashkil};
use crate::params::{Stem, Tense, Voice};
use crate::root::{RootType, VerbRoot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSlot {
    Radical { number: u8, shadda: bool },
    Fixed { letter: Letter, slot: SlotTag, tashkil: Tashkil },
}

const fn radical(number: u8) -> TemplateSlot {
    TemplateSlot::Radical { number, shadda: false }
}

const fn doubled(number: u8) -> TemplateSlot {
    TemplateSlot::Radical { number, shadda: true }
}

const fn fixed(letter: Letter, slot: SlotTag, tashkil: Tashkil) -> TemplateSlot {
    TemplateSlot::Fixed { letter, slot, tashkil }
}

/// Look up the template of a stem. `None` means no template exists for the
/// combination.
pub fn template(stem: Stem, root_type: RootType, tense: Tense, voice: Voice) -> Option<Vec<TemplateSlot>> {
    let perfect_passive = tense == Tense::Perfect && voice == Voice::Passive;
    // the vowel of the fixed ta in stems 5, 6, 8 and 10
    let ta_vowel = if perfect_passive {
        Tashkil::Dhamma
    } else {
        Tashkil::Fatha
    };
    // the long vowel of stems 3 and 6
    let infix_vowel = if perfect_passive { Letter::Waw } else { Letter::Alef };

    if root_type == RootType::Quadriliteral {
        return match stem.number() {
            1 => Some(vec![radical(1), radical(2), radical(3), radical(4)]),
            _ => None,
        };
    }

    let slots = match stem.number() {
        1 => vec![radical(1), radical(2), radical(3)],
        2 => vec![radical(1), doubled(2), radical(3)],
        3 => vec![
            radical(1),
            fixed(infix_vowel, SlotTag::Infix, Tashkil::LongVowelMarker),
            radical(2),
            radical(3),
        ],
        4 => {
            let mut slots = Vec::with_capacity(4);
            if tense == Tense::Perfect {
                let vowel = match voice {
                    Voice::Active => Tashkil::Fatha,
                    Voice::Passive => Tashkil::Dhamma,
                };
                slots.push(fixed(Letter::AlefHamza, SlotTag::Prefix1, vowel));
            }
            slots.extend([radical(1), radical(2), radical(3)]);
            slots
        }
        5 => vec![
            fixed(Letter::Ta, SlotTag::Prefix1, ta_vowel),
            radical(1),
            doubled(2),
            radical(3),
        ],
        6 => vec![
            fixed(Letter::Ta, SlotTag::Prefix1, ta_vowel),
            radical(1),
            fixed(infix_vowel, SlotTag::Infix, Tashkil::LongVowelMarker),
            radical(2),
            radical(3),
        ],
        7 => vec![
            fixed(Letter::Nun, SlotTag::Prefix1, Tashkil::Sukun),
            radical(1),
            radical(2),
            radical(3),
        ],
        8 => vec![
            radical(1),
            fixed(Letter::Ta, SlotTag::Infix, ta_vowel),
            radical(2),
            radical(3),
        ],
        9 if root_type == RootType::Sound => vec![radical(1), radical(2), radical(3)],
        10 => vec![
            fixed(Letter::Siin, SlotTag::Prefix1, Tashkil::Sukun),
            fixed(Letter::Ta, SlotTag::Prefix2, ta_vowel),
            radical(1),
            radical(2),
            radical(3),
        ],
        _ => return None,
    };
    Some(slots)
}

/// Fill a template with the radicals of a root. Radicals start without a
/// diacritic.
pub fn instantiate(root: &VerbRoot, template: &[TemplateSlot]) -> AugmentedRoot {
    let symbols = template
        .iter()
        .filter_map(|slot| match *slot {
            TemplateSlot::Radical { number, shadda } => {
                let letter = root.radical(usize::from(number))?;
                let tag = SlotTag::radical(number)?;
                let mut symbol = Symbol::new(letter, None, tag);
                symbol.shadda = shadda;
                Some(symbol)
            }
            TemplateSlot::Fixed { letter, slot, tashkil } => Some(Symbol::new(letter, Some(tashkil), slot)),
        })
        .collect();
    AugmentedRoot::new(symbols)
}

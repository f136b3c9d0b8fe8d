//! Defective roots: the weak final radical merges with the surrounding
//! vowels depending on what follows it.

use crate::augmented::{AugmentedRoot, SlotTag, Symbol};
use crate::error::Result;
use crate::letters::{Letter, Tashkil};
use crate::params::Vowel;

use super::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Following {
    Nothing,
    /// A suffix starting with long waw or ya.
    LongVowel,
    /// The dual alef.
    Alef,
    Consonant,
}

impl Following {
    fn classify(symbol: Option<&Symbol>) -> Self {
        match symbol {
            None => Following::Nothing,
            Some(s) if s.letter.is_weak() && s.tashkil == Some(Tashkil::LongVowelMarker) => {
                Following::LongVowel
            }
            Some(s) if s.letter == Letter::Alef => Following::Alef,
            Some(_) => Following::Consonant,
        }
    }
}

pub(super) fn resolve(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    if !buffer.has_radical(3) {
        return Ok(());
    }

    let before = buffer.predecessor(SlotTag::R3).and_then(|s| s.tashkil);
    let own = buffer.radical(3).and_then(|s| s.tashkil);
    let following = Following::classify(buffer.successor(SlotTag::R3));

    // daʿā keeps its waw where other roots show ya
    let keeps_waw = job.stem() == 1
        && job.root.r3() == Letter::Waw
        && job.perfect_active()
        && job.context.map(|c| c.past) == Some(Vowel::Fatha);

    if before == Some(Tashkil::Fatha) {
        after_fatha(buffer, own, following, keeps_waw)?;
    } else {
        let long = if before == Some(Tashkil::Dhamma) {
            Letter::Waw
        } else {
            Letter::Ya
        };
        after_other(buffer, own, following, long)?;
    }

    let dhamma_present = job.context.map(|c| c.present) == Some(Vowel::Dhamma);
    if job.stem() == 1 && job.perfect_active() && dhamma_present {
        if let Some(r3) = buffer.radical_mut(3) {
            if r3.letter == Letter::AlefMaksura {
                r3.letter = Letter::Alef;
            }
        }
    }
    Ok(())
}

fn after_fatha(
    buffer: &mut AugmentedRoot,
    own: Option<Tashkil>,
    following: Following,
    keeps_waw: bool,
) -> Result<()> {
    let glide = if keeps_waw { Letter::Waw } else { Letter::Ya };
    match following {
        Following::Nothing if own == Some(Tashkil::Sukun) => buffer.drop_radical(3),
        Following::Nothing => {
            let alef = if keeps_waw {
                Letter::Alef
            } else {
                Letter::AlefMaksura
            };
            buffer.replace_radical(3, alef, Some(Tashkil::LongVowelMarker))
        }
        Following::LongVowel => {
            buffer.drop_radical(3)?;
            // ramaw, yarmawna: the suffix vowel closes into a diphthong
            close_suffix(buffer);
            Ok(())
        }
        Following::Alef => buffer.replace_radical_letter(3, glide),
        Following::Consonant if own == Some(Tashkil::Sukun) => buffer.replace_radical_letter(3, glide),
        Following::Consonant => buffer.drop_radical(3),
    }
}

fn after_other(
    buffer: &mut AugmentedRoot,
    own: Option<Tashkil>,
    following: Following,
    long: Letter,
) -> Result<()> {
    match following {
        Following::Nothing => match own {
            Some(Tashkil::Sukun) => buffer.drop_radical(3),
            Some(Tashkil::Fatha) => buffer.replace_radical_letter(3, long),
            _ => buffer.replace_radical(3, long, Some(Tashkil::LongVowelMarker)),
        },
        Following::LongVowel => buffer.assimilate_radical(3),
        Following::Alef => buffer.replace_radical_letter(3, long),
        Following::Consonant if own == Some(Tashkil::Sukun) => {
            buffer.replace_radical(3, long, Some(Tashkil::LongVowelMarker))
        }
        Following::Consonant => buffer.replace_radical_letter(3, long),
    }
}

/// Give the first suffix symbol a sukun.
fn close_suffix(buffer: &mut AugmentedRoot) {
    if let Some(first) = buffer.symbol_mut(SlotTag::Postfix) {
        first.tashkil = Some(Tashkil::Sukun);
    }
}

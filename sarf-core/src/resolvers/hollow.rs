//! Hollow roots: the weak middle radical becomes a long vowel, or vanishes
//! when the syllable is closed.

use crate::augmented::AugmentedRoot;
use crate::error::Result;
use crate::letters::{Letter, Tashkil};
use crate::params::Vowel;

use super::Job;

/// Stems that keep the weak radical as a consonant.
const CONSONANTAL_STEMS: &[u8] = &[2, 3, 5, 6, 9];

pub(super) fn resolve(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    if CONSONANTAL_STEMS.contains(&job.stem()) {
        return Ok(());
    }

    let closed = buffer.radical(3).and_then(|r3| r3.tashkil) == Some(Tashkil::Sukun);
    let vowel = stem_vowel(job, closed);

    if closed {
        buffer.insert_short_vowel(2, vowel)
    } else {
        let letter = vowel.long_vowel().unwrap_or(Letter::Alef);
        buffer.insert_long_vowel(2, letter)
    }
}

fn stem_vowel(job: &Job<'_>, closed: bool) -> Tashkil {
    let params = job.params;
    let stem = job.stem();

    if params.is_perfect() {
        if !params.is_active() {
            return Tashkil::Kasra;
        }
        if stem != 1 || !closed {
            return Tashkil::Fatha;
        }
        // qultu, bi'tu, xiftu
        return match job.context.map(|c| c.past) {
            Some(Vowel::Fatha) | None if job.root.r2() == Letter::Waw => Tashkil::Dhamma,
            Some(Vowel::Fatha) | None => Tashkil::Kasra,
            Some(past) => past.tashkil(),
        };
    }

    if !params.is_active() {
        return Tashkil::Fatha;
    }
    match stem {
        1 => job
            .context
            .map(|c| c.present.tashkil())
            .unwrap_or(Tashkil::Fatha),
        4 | 10 => Tashkil::Kasra,
        _ => Tashkil::Fatha,
    }
}

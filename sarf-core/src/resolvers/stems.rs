//! Sound changes tied to a stem rather than to a root type.

use crate::augmented::{AugmentedRoot, SlotTag, Symbol};
use crate::error::Result;
use crate::letters::{Letter, Tashkil};
use crate::lexicon::Irregularity;

use super::Job;

pub(crate) fn apply(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    match job.stem() {
        8 => assimilate_infix_ta(buffer, job),
        9 => double_final_radical(buffer, job),
        _ => Ok(()),
    }
}

/// The infixed ta of stem 8 assimilates to certain first radicals
/// (izdahara, iddaxara, iṣṭabara, ittaṣala).
fn assimilate_infix_ta(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    let Some(r1) = buffer.radical(1).map(|s| s.letter) else {
        return Ok(());
    };
    let hamza_assimilates = job
        .lexical
        .is_some_and(|entry| entry.has(Irregularity::Stem8HamzaAssimilation));

    let set_infix = |buffer: &mut AugmentedRoot, letter: Letter| {
        if let Some(ta) = buffer.symbol_mut(SlotTag::Infix) {
            ta.letter = letter;
        }
    };

    match r1 {
        Letter::Zay | Letter::Dal => set_infix(buffer, Letter::Dal),
        Letter::Thal => {
            set_infix(buffer, Letter::Dal);
            buffer.replace_radical_letter(1, Letter::Dal)?;
        }
        Letter::Saad | Letter::Daad | Letter::Tta | Letter::Zaa => set_infix(buffer, Letter::Tta),
        Letter::Waw | Letter::Ya => buffer.replace_radical_letter(1, Letter::Ta)?,
        Letter::Hamza if hamza_assimilates => buffer.replace_radical_letter(1, Letter::Ta)?,
        _ => {}
    }
    Ok(())
}

/// Stem 9 doubles its last radical: split in two when the ending is
/// vowelless (iḥmarartu), geminated otherwise (iḥmarra).
fn double_final_radical(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    let Some(r3) = buffer.radical(3).copied() else {
        return Ok(());
    };
    if r3.tashkil == Some(Tashkil::Sukun) {
        let vowel = if job.params.is_perfect() {
            Tashkil::Fatha
        } else {
            Tashkil::Kasra
        };
        buffer.insert_before(SlotTag::R3, Symbol::new(r3.letter, Some(vowel), SlotTag::Infix))
    } else {
        if let Some(r3) = buffer.radical_mut(3) {
            r3.shadda = true;
        }
        Ok(())
    }
}

use crate::augmented::{AugmentedRoot, SlotTag};
use crate::error::Result;
use crate::letters::Tashkil;

use super::Job;

/// Silence R2 so the gemination pass fuses it with R3 (madda, yamuddu).
/// Nothing happens when R3 is vowelless (madadtu), when R2 is already
/// geminated by the stem, or in the stem 3 passive perfect (mūdida).
pub(super) fn resolve(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    let r3_closed = buffer.radical(3).and_then(|r3| r3.tashkil) == Some(Tashkil::Sukun);
    let stem3_passive = job.stem() == 3 && job.params.is_perfect() && !job.params.is_active();
    let r2_doubled = buffer.radical(2).is_some_and(|r2| r2.shadda);
    if r3_closed || stem3_passive || r2_doubled {
        return Ok(());
    }

    let r2_vowel = buffer.radical(2).and_then(|r2| r2.tashkil);
    if let Some(before) = buffer.predecessor_mut(SlotTag::R2) {
        // two vowelless consonants may not meet
        if before.tashkil == Some(Tashkil::Sukun) {
            before.tashkil = r2_vowel;
        }
    }
    buffer.apply_radical_tashkil(2, Some(Tashkil::Sukun))
}

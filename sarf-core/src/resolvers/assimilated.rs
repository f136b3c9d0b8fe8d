use crate::augmented::AugmentedRoot;
use crate::error::Result;
use crate::letters::Letter;

use super::Job;

/// An initial waw falls out of the stem 1 active present (waʿada, yaʿidu).
pub(super) fn resolve(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    let drops_waw = job.stem() == 1
        && !job.params.is_perfect()
        && job.params.is_active()
        && buffer.radical(1).map(|r1| r1.letter) == Some(Letter::Waw);
    if drops_waw {
        buffer.drop_radical(1)?;
    }
    Ok(())
}

use crate::augmented::AugmentedRoot;
use crate::error::Result;
use crate::lexicon::Irregularity;

use super::Job;

pub(super) fn resolve(buffer: &mut AugmentedRoot, job: &Job<'_>) -> Result<()> {
    let short_imperative = job
        .lexical
        .is_some_and(|entry| entry.has(Irregularity::ImperativeWithoutHamza));
    if short_imperative && job.stem() == 1 && job.params.is_imperative() {
        buffer.drop_radical(1)?;
    }
    Ok(())
}

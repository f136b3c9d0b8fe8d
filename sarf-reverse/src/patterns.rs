//! Affix patterns and root hypotheses for Modern Standard Arabic.
//!
//! The query's head and tail are matched against a small set of tense
//! markers. Whatever remains is read as a stem, which yields one or more
//! candidate roots together with the stem number that would explain the
//! extra letters. Shapes outside this table are reported as not recognized.

use ahash::AHashSet;
use sarf_core::{Letter, Stem, Tense, VerbRoot, Vocalized};
use serde::Serialize;
use tracing::trace;

/// A root and stem worth verifying against the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Hypothesis {
    pub root: VerbRoot,
    pub stem: Stem,
    pub tense: Tense,
}

struct AffixPattern {
    prefix: &'static [Letter],
    suffix: &'static [Letter],
    tense: Tense,
}

const PATTERNS: &[AffixPattern] = &[
    AffixPattern {
        prefix: &[Letter::Ya],
        suffix: &[],
        tense: Tense::Present,
    },
    AffixPattern {
        prefix: &[Letter::Ta],
        suffix: &[],
        tense: Tense::Present,
    },
    AffixPattern {
        prefix: &[],
        suffix: &[Letter::Ta],
        tense: Tense::Perfect,
    },
    // hamzat al-wasl
    AffixPattern {
        prefix: &[Letter::Alef],
        suffix: &[],
        tense: Tense::Perfect,
    },
    AffixPattern {
        prefix: &[Letter::Alef],
        suffix: &[Letter::Ta],
        tense: Tense::Perfect,
    },
    AffixPattern {
        prefix: &[],
        suffix: &[],
        tense: Tense::Perfect,
    },
];

fn matches(expected: &[Letter], found: &[Vocalized]) -> bool {
    expected.len() == found.len()
        && expected
            .iter()
            .zip(found)
            .all(|(letter, symbol)| *letter == symbol.letter)
}

/// All root hypotheses for `form`, deduplicated.
pub fn hypothesize(form: &[Vocalized]) -> Vec<Hypothesis> {
    let mut seen = AHashSet::new();
    let mut hypotheses = Vec::new();

    for pattern in PATTERNS {
        let affixes = pattern.prefix.len() + pattern.suffix.len();
        if form.len() <= affixes {
            continue;
        }
        let (head, rest) = form.split_at(pattern.prefix.len());
        let (span, tail) = rest.split_at(rest.len() - pattern.suffix.len());
        if !matches(pattern.prefix, head) || !matches(pattern.suffix, tail) {
            continue;
        }

        let letters: Vec<Letter> = span.iter().map(|s| s.letter.to_radical()).collect();
        for (radicals, stem) in match_root(&letters) {
            let Ok(root) = VerbRoot::new(radicals) else {
                continue;
            };
            let Ok(stem) = Stem::new(stem) else {
                continue;
            };
            let hypothesis = Hypothesis {
                root,
                stem,
                tense: pattern.tense,
            };
            if seen.insert(hypothesis.clone()) {
                trace!(
                    "hypothesis {} stem {} {:?}",
                    hypothesis.root,
                    hypothesis.stem,
                    hypothesis.tense
                );
                hypotheses.push(hypothesis);
            }
        }
    }

    hypotheses
}

fn with_stems(radicals: Vec<Letter>, stems: &[u8]) -> Vec<(Vec<Letter>, u8)> {
    stems.iter().map(|&stem| (radicals.clone(), stem)).collect()
}

/// The triliteral roots of `found`, each once, under a new stem number.
fn restem(found: Vec<(Vec<Letter>, u8)>, stem: u8) -> Vec<(Vec<Letter>, u8)> {
    let mut roots: Vec<Vec<Letter>> = Vec::new();
    for (radicals, _) in found {
        if radicals.len() == 3 && !roots.contains(&radicals) {
            roots.push(radicals);
        }
    }
    roots.into_iter().map(|radicals| (radicals, stem)).collect()
}

fn joined(first: Letter, rest: &[Letter]) -> Vec<Letter> {
    let mut radicals = Vec::with_capacity(rest.len() + 1);
    radicals.push(first);
    radicals.extend_from_slice(rest);
    radicals
}

/// First radicals that merge with the stem 8 infix into the given geminate.
fn stem8_merged(geminate: Letter) -> &'static [Letter] {
    match geminate {
        Letter::Ta => &[Letter::Waw, Letter::Ya, Letter::Hamza, Letter::Ta],
        Letter::Dal => &[Letter::Dal, Letter::Thal],
        Letter::Tta => &[Letter::Tta],
        _ => &[],
    }
}

/// Roots spelled by a stem without derivational affixes, with the stems that
/// add no letters in the given tense marker position.
fn bare_root(span: &[Letter]) -> Vec<(Vec<Letter>, u8)> {
    use Letter::{Alef, AlefMaksura, Waw, Ya};

    match *span {
        // a weak or doubled radical vanished: waʿada, ʿāda, bīʿa, ʿadda
        [a, b] => [vec![Waw, a, b], vec![a, Waw, b], vec![a, Ya, b], vec![a, b, b]]
            .into_iter()
            .flat_map(|radicals| with_stems(radicals, &[1, 4]))
            .collect(),
        [a, Alef, c] => {
            let mut found = with_stems(vec![a, Waw, c], &[1, 4]);
            found.extend(with_stems(vec![a, Ya, c], &[1, 4]));
            found
        }
        [a, Ya, c] => {
            let mut found = with_stems(vec![a, Waw, c], &[1, 4]);
            found.extend(with_stems(vec![a, Ya, c], &[1, 2, 4]));
            found
        }
        [a, b, Alef | AlefMaksura] => {
            let mut found = with_stems(vec![a, b, Waw], &[1, 2, 4]);
            found.extend(with_stems(vec![a, b, Ya], &[1, 2, 4]));
            found
        }
        [a, b, c] => {
            let mut found = with_stems(vec![a, b, c], &[1, 2, 4, 9]);
            // daʿiya, udʿiya
            if c == Ya {
                found.extend(with_stems(vec![a, b, Waw], &[1, 2, 4]));
            }
            found
        }
        [a, b, c, d] => with_stems(vec![a, b, c, d], &[1]),
        _ => Vec::new(),
    }
}

/// Candidate radicals and stem numbers for the letters left after the tense
/// affixes have been removed.
fn match_root(span: &[Letter]) -> Vec<(Vec<Letter>, u8)> {
    use Letter::{Alef, Dal, Hamza, Nun, Siin, Ta, Tta, Waw};

    let mut found = bare_root(span);
    if span.len() < 3 {
        return found;
    }

    match *span {
        [Hamza, ref rest @ ..] => {
            found.extend(restem(bare_root(rest), 4));
            match *rest {
                // ʾāmara, the hamza fused with the long alef
                [b, c] => found.extend(with_stems(vec![Hamza, b, c], &[3])),
                // ʾūmira
                [Waw, b, c] => found.extend(with_stems(vec![Hamza, b, c], &[4])),
                _ => {}
            }
        }
        [Ta, ref rest @ ..] => {
            found.extend(restem(bare_root(rest), 5));
            match *rest {
                [Hamza, b, c] => found.extend(with_stems(vec![Hamza, b, c], &[6])),
                // tamādda, tumūdda
                [a, Alef | Waw, c] => found.extend(with_stems(vec![a, c, c], &[6])),
                [a, Alef | Waw, c, d] => found.extend(restem(bare_root(&[a, c, d]), 6)),
                _ => {}
            }
        }
        [Nun, ref rest @ ..] => found.extend(restem(bare_root(rest), 7)),
        [Siin, Ta, ref rest @ ..] => found.extend(restem(bare_root(rest), 10)),
        _ => {}
    }

    match *span {
        // māadda, mūdda
        [a, Alef | Waw, c] => found.extend(with_stems(vec![a, c, c], &[3])),
        [a, Alef | Waw, c, d] => found.extend(restem(bare_root(&[a, c, d]), 3)),
        // iḥmarartu
        [a, b, c, d] if c == d => found.extend(with_stems(vec![a, b, c], &[9])),
        _ => {}
    }

    // the stem 8 infix, plain or assimilated to R1 (iktataba, izdahara, iṣṭabara)
    if let [a, Ta | Dal | Tta, ref rest @ ..] = *span {
        found.extend(restem(bare_root(&joined(a, rest)), 8));
    }
    // R1 merged with the infix into one geminate (ittaṣala, iddaʿā, iṭṭalaba)
    if let [first, ref rest @ ..] = *span {
        for &r1 in stem8_merged(first) {
            found.extend(restem(bare_root(&joined(r1, rest)), 8));
        }
    }

    found
}

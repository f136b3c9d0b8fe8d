//! Final spelling of a conjugated form.

use crate::augmented::Symbol;
use crate::error::{ConjugationError, Result};
use crate::letters::{Letter, Tashkil, Vocalized};

/// Collapse geminates, mark implied long vowels and check that every symbol
/// ends up with a diacritic.
pub fn finalize(symbols: Vec<Symbol>) -> Result<Vec<Vocalized>> {
    let symbols = mark_long_vowels(geminate(symbols));
    let last = symbols.len().saturating_sub(1);

    symbols
        .into_iter()
        .enumerate()
        .map(|(position, symbol)| {
            let mut vocalized = symbol.to_vocalized();
            if vocalized.tashkil.is_none() {
                if position != last {
                    return Err(ConjugationError::UnvocalizedSymbol { position });
                }
                vocalized.tashkil = Some(Tashkil::EndOfWordMarker);
            }
            Ok(vocalized)
        })
        .collect()
}

/// Two identical letters, the first vowelless, are written once with shadda.
/// The merged letter keeps the vowel of the second one.
pub fn geminate(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        if let Some(prev) = out.last_mut() {
            if prev.letter == symbol.letter && prev.tashkil == Some(Tashkil::Sukun) && !prev.shadda {
                prev.tashkil = symbol.tashkil;
                prev.emphasis = symbol.emphasis;
                prev.shadda = true;
                continue;
            }
        }
        out.push(symbol);
    }
    out
}

/// Vowelless waw after dhamma and ya after kasra are long vowels.
fn mark_long_vowels(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
    for idx in 1..symbols.len() {
        let before = symbols[idx - 1].tashkil;
        let symbol = &mut symbols[idx];
        if symbol.tashkil != Some(Tashkil::Sukun) || symbol.shadda {
            continue;
        }
        let lengthens = matches!(
            (symbol.letter, before),
            (Letter::Waw, Some(Tashkil::Dhamma)) | (Letter::Ya, Some(Tashkil::Kasra))
        );
        if lengthens {
            symbol.tashkil = Some(Tashkil::LongVowelMarker);
        }
    }
    symbols
}

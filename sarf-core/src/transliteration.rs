//! Buckwalter transliteration, an ASCII rendering of vocalized text used for
//! debugging and for writing readable test expectations.

use crate::error::{ConjugationError, Result};
use crate::letters::{Letter, Tashkil, Vocalized};

const SHADDA: char = '~';

const LETTERS: &[(Letter, char)] = &[
    (Letter::Hamza, '\''),
    (Letter::AlefMadda, '|'),
    (Letter::AlefHamza, '>'),
    (Letter::WawHamza, '&'),
    (Letter::AlefHamzaBelow, '<'),
    (Letter::YaHamza, '}'),
    (Letter::Alef, 'A'),
    (Letter::Ba, 'b'),
    (Letter::TaMarbuta, 'p'),
    (Letter::Ta, 't'),
    (Letter::Tha, 'v'),
    (Letter::Jiim, 'j'),
    (Letter::Hha, 'H'),
    (Letter::Kha, 'x'),
    (Letter::Dal, 'd'),
    (Letter::Thal, '*'),
    (Letter::Ra, 'r'),
    (Letter::Zay, 'z'),
    (Letter::Siin, 's'),
    (Letter::Shiin, '$'),
    (Letter::Saad, 'S'),
    (Letter::Daad, 'D'),
    (Letter::Tta, 'T'),
    (Letter::Zaa, 'Z'),
    (Letter::Ain, 'E'),
    (Letter::Ghain, 'g'),
    (Letter::Fa, 'f'),
    (Letter::Qaf, 'q'),
    (Letter::Kaf, 'k'),
    (Letter::Lam, 'l'),
    (Letter::Mim, 'm'),
    (Letter::Nun, 'n'),
    (Letter::Ha, 'h'),
    (Letter::Waw, 'w'),
    (Letter::AlefMaksura, 'Y'),
    (Letter::Ya, 'y'),
];

const MARKS: &[(Tashkil, char)] = &[
    (Tashkil::Fatha, 'a'),
    (Tashkil::Dhamma, 'u'),
    (Tashkil::Kasra, 'i'),
    (Tashkil::Sukun, 'o'),
    (Tashkil::Fathatan, 'F'),
    (Tashkil::Dhammatan, 'N'),
    (Tashkil::Kasratan, 'K'),
];

fn letter_code(letter: Letter) -> char {
    LETTERS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, c)| *c)
        .unwrap_or('?')
}

fn mark_code(tashkil: Tashkil) -> Option<char> {
    MARKS.iter().find(|(t, _)| *t == tashkil).map(|(_, c)| *c)
}

pub fn to_buckwalter(symbols: &[Vocalized]) -> String {
    let mut out = String::with_capacity(symbols.len() * 3);
    for symbol in symbols {
        out.push(letter_code(symbol.letter));
        if let Some(code) = symbol.tashkil.and_then(mark_code) {
            out.push(code);
        }
        if symbol.shadda {
            out.push(SHADDA);
        }
    }
    out
}

/// Parse a Buckwalter string. Like Arabic text parsing, every letter takes at
/// most one vowel mark and one shadda.
pub fn from_buckwalter(text: &str) -> Result<Vec<Vocalized>> {
    let mut result: Vec<Vocalized> = Vec::new();

    for (position, ch) in text.chars().enumerate() {
        if let Some((letter, _)) = LETTERS.iter().find(|(_, c)| *c == ch) {
            result.push(Vocalized::new(*letter, None));
            continue;
        }

        let malformed = move || ConjugationError::MalformedTransliteration { position, found: ch };
        let current = result.last_mut().ok_or_else(malformed)?;

        if ch == SHADDA {
            if current.shadda {
                return Err(malformed());
            }
            current.shadda = true;
        } else if let Some((tashkil, _)) = MARKS.iter().find(|(_, c)| *c == ch) {
            if current.tashkil.is_some() {
                return Err(malformed());
            }
            current.tashkil = Some(*tashkil);
        } else {
            return Err(malformed());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::{parse_vocalized, to_text};

    #[test]
    fn every_letter_has_a_code() {
        for (letter, _) in crate::letters::LETTER_CHARS {
            assert_ne!(letter_code(*letter), '?', "{letter:?}");
        }
    }

    #[test]
    fn arabic_and_buckwalter_agree() {
        let text = "\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}";
        let symbols = parse_vocalized(text).unwrap();
        assert_eq!(to_buckwalter(&symbols), "kataba");
        assert_eq!(to_text(&from_buckwalter("kataba").unwrap()), text);
    }

    #[test]
    fn shadda_follows_the_vowel() {
        let symbols = from_buckwalter("kat~aba").unwrap();
        assert!(symbols[1].shadda);
        assert_eq!(to_buckwalter(&symbols), "kata~ba");
    }

    #[test]
    fn doubled_marks_are_rejected() {
        assert_eq!(
            from_buckwalter("kaab"),
            Err(ConjugationError::MalformedTransliteration { position: 2, found: 'a' })
        );
        assert!(from_buckwalter("k~~").is_err());
        assert!(from_buckwalter("a").is_err());
        assert!(from_buckwalter("k#").is_err());
    }
}

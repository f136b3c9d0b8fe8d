//! Letters and Diacritics
//!
//! Closed alphabets for the consonants, long-vowel carriers and short-vowel
//! marks (tashkil) used by the conjugation engine, together with the
//! vocalized symbol type exchanged with callers and its text form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConjugationError, Result};

const SHADDA_MARK: char = '\u{0651}';

/// Arabic letters known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    Hamza,
    AlefMadda,
    AlefHamza,
    WawHamza,
    AlefHamzaBelow,
    YaHamza,
    Alef,
    Ba,
    TaMarbuta,
    Ta,
    Tha,
    Jiim,
    Hha,
    Kha,
    Dal,
    Thal,
    Ra,
    Zay,
    Siin,
    Shiin,
    Saad,
    Daad,
    Tta,
    Zaa,
    Ain,
    Ghain,
    Fa,
    Qaf,
    Kaf,
    Lam,
    Mim,
    Nun,
    Ha,
    Waw,
    AlefMaksura,
    Ya,
}

/// Every letter paired with its Unicode code point, in alphabetical order.
pub(crate) const LETTER_CHARS: &[(Letter, char)] = &[
    (Letter::Hamza, '\u{0621}'),
    (Letter::AlefMadda, '\u{0622}'),
    (Letter::AlefHamza, '\u{0623}'),
    (Letter::WawHamza, '\u{0624}'),
    (Letter::AlefHamzaBelow, '\u{0625}'),
    (Letter::YaHamza, '\u{0626}'),
    (Letter::Alef, '\u{0627}'),
    (Letter::Ba, '\u{0628}'),
    (Letter::TaMarbuta, '\u{0629}'),
    (Letter::Ta, '\u{062A}'),
    (Letter::Tha, '\u{062B}'),
    (Letter::Jiim, '\u{062C}'),
    (Letter::Hha, '\u{062D}'),
    (Letter::Kha, '\u{062E}'),
    (Letter::Dal, '\u{062F}'),
    (Letter::Thal, '\u{0630}'),
    (Letter::Ra, '\u{0631}'),
    (Letter::Zay, '\u{0632}'),
    (Letter::Siin, '\u{0633}'),
    (Letter::Shiin, '\u{0634}'),
    (Letter::Saad, '\u{0635}'),
    (Letter::Daad, '\u{0636}'),
    (Letter::Tta, '\u{0637}'),
    (Letter::Zaa, '\u{0638}'),
    (Letter::Ain, '\u{0639}'),
    (Letter::Ghain, '\u{063A}'),
    (Letter::Fa, '\u{0641}'),
    (Letter::Qaf, '\u{0642}'),
    (Letter::Kaf, '\u{0643}'),
    (Letter::Lam, '\u{0644}'),
    (Letter::Mim, '\u{0645}'),
    (Letter::Nun, '\u{0646}'),
    (Letter::Ha, '\u{0647}'),
    (Letter::Waw, '\u{0648}'),
    (Letter::AlefMaksura, '\u{0649}'),
    (Letter::Ya, '\u{064A}'),
];

impl Letter {
    /// Look up the letter for an Arabic code point.
    pub fn from_char(ch: char) -> Option<Self> {
        LETTER_CHARS
            .iter()
            .find(|(_, c)| *c == ch)
            .map(|(letter, _)| *letter)
    }

    pub fn to_char(self) -> char {
        LETTER_CHARS
            .iter()
            .find(|(letter, _)| *letter == self)
            .map(|(_, c)| *c)
            .unwrap_or('\u{FFFD}')
    }

    /// Whether the letter may appear as a root radical.
    ///
    /// Roots are spelled with the bare hamza; seated hamza forms, alef and the
    /// purely orthographic letters only arise during conjugation.
    pub fn is_radical(self) -> bool {
        !matches!(
            self,
            Letter::AlefMadda
                | Letter::AlefHamza
                | Letter::WawHamza
                | Letter::AlefHamzaBelow
                | Letter::YaHamza
                | Letter::Alef
                | Letter::TaMarbuta
                | Letter::AlefMaksura
        )
    }

    /// Waw or ya, the two weak radicals.
    pub fn is_weak(self) -> bool {
        matches!(self, Letter::Waw | Letter::Ya)
    }

    /// Bare hamza or any of its seated forms.
    pub fn is_hamza(self) -> bool {
        matches!(
            self,
            Letter::Hamza
                | Letter::AlefHamza
                | Letter::WawHamza
                | Letter::AlefHamzaBelow
                | Letter::YaHamza
                | Letter::AlefMadda
        )
    }

    /// Map a seated hamza back to the bare radical form.
    pub fn to_radical(self) -> Self {
        match self {
            Letter::AlefHamza
            | Letter::WawHamza
            | Letter::AlefHamzaBelow
            | Letter::YaHamza
            | Letter::AlefMadda => Letter::Hamza,
            other => other,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Short-vowel diacritics and the two "nothing written" conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tashkil {
    Fatha,
    Dhamma,
    Kasra,
    Sukun,
    Fathatan,
    Dhammatan,
    Kasratan,
    /// The vowel is implied by a following long-vowel letter.
    LongVowelMarker,
    /// No diacritic is written on the final letter.
    EndOfWordMarker,
}

impl Tashkil {
    pub fn mark(self) -> Option<char> {
        match self {
            Tashkil::Fathatan => Some('\u{064B}'),
            Tashkil::Dhammatan => Some('\u{064C}'),
            Tashkil::Kasratan => Some('\u{064D}'),
            Tashkil::Fatha => Some('\u{064E}'),
            Tashkil::Dhamma => Some('\u{064F}'),
            Tashkil::Kasra => Some('\u{0650}'),
            Tashkil::Sukun => Some('\u{0652}'),
            Tashkil::LongVowelMarker | Tashkil::EndOfWordMarker => None,
        }
    }

    pub fn from_mark(ch: char) -> Option<Self> {
        match ch {
            '\u{064B}' => Some(Tashkil::Fathatan),
            '\u{064C}' => Some(Tashkil::Dhammatan),
            '\u{064D}' => Some(Tashkil::Kasratan),
            '\u{064E}' => Some(Tashkil::Fatha),
            '\u{064F}' => Some(Tashkil::Dhamma),
            '\u{0650}' => Some(Tashkil::Kasra),
            '\u{0652}' => Some(Tashkil::Sukun),
            _ => None,
        }
    }

    /// Fatha, dhamma or kasra.
    pub fn is_short_vowel(self) -> bool {
        matches!(self, Tashkil::Fatha | Tashkil::Dhamma | Tashkil::Kasra)
    }

    /// Whether the diacritic is actually written.
    pub fn is_written(self) -> bool {
        self.mark().is_some()
    }

    /// The long-vowel letter that lengthens this short vowel.
    pub fn long_vowel(self) -> Option<Letter> {
        match self {
            Tashkil::Fatha => Some(Letter::Alef),
            Tashkil::Dhamma => Some(Letter::Waw),
            Tashkil::Kasra => Some(Letter::Ya),
            _ => None,
        }
    }

    /// The short vowel implied by a long-vowel letter.
    pub fn for_long_vowel(letter: Letter) -> Option<Self> {
        match letter {
            Letter::Alef | Letter::AlefMaksura => Some(Tashkil::Fatha),
            Letter::Waw => Some(Tashkil::Dhamma),
            Letter::Ya => Some(Tashkil::Kasra),
            _ => None,
        }
    }
}

/// A single letter with its diacritics, as produced by `conjugate` and
/// consumed by reverse analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vocalized {
    pub letter: Letter,
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
    #[serde(default)]
    pub emphasis: bool,
}

impl Vocalized {
    pub fn new(letter: Letter, tashkil: Option<Tashkil>) -> Self {
        Self {
            letter,
            tashkil,
            shadda: false,
            emphasis: false,
        }
    }

    pub fn with_shadda(mut self) -> Self {
        self.shadda = true;
        self
    }

    /// The diacritic only if it is actually written.
    pub fn written_tashkil(&self) -> Option<Tashkil> {
        self.tashkil.filter(|t| t.is_written())
    }
}

/// Render a vocalized sequence as Arabic text.
///
/// Each letter is followed by its written vowel mark and then the shadda.
pub fn to_text(symbols: &[Vocalized]) -> String {
    let mut result = String::with_capacity(symbols.len() * 6);
    for symbol in symbols {
        result.push(symbol.letter.to_char());
        if let Some(mark) = symbol.tashkil.and_then(Tashkil::mark) {
            result.push(mark);
        }
        if symbol.shadda {
            result.push(SHADDA_MARK);
        }
    }
    result
}

/// Parse vocalized Arabic text: each letter optionally followed by one vowel
/// mark and one shadda, in either order.
pub fn parse_vocalized(text: &str) -> Result<Vec<Vocalized>> {
    let mut result: Vec<Vocalized> = Vec::new();

    for (position, ch) in text.chars().enumerate() {
        if let Some(letter) = Letter::from_char(ch) {
            result.push(Vocalized::new(letter, None));
            continue;
        }

        let Some(current) = result.last_mut() else {
            return Err(ConjugationError::MalformedText {
                position,
                reason: format!("mark {ch:?} is not attached to a letter"),
            });
        };

        if ch == SHADDA_MARK {
            if current.shadda {
                return Err(ConjugationError::MalformedText {
                    position,
                    reason: "doubled shadda".into(),
                });
            }
            current.shadda = true;
        } else if let Some(tashkil) = Tashkil::from_mark(ch) {
            if current.tashkil.is_some() {
                return Err(ConjugationError::MalformedText {
                    position,
                    reason: "doubled tashkil".into(),
                });
            }
            current.tashkil = Some(tashkil);
        } else {
            return Err(ConjugationError::MalformedText {
                position,
                reason: format!("unknown character {ch:?}"),
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_through_chars() {
        for (letter, ch) in LETTER_CHARS {
            assert_eq!(Letter::from_char(*ch), Some(*letter));
            assert_eq!(letter.to_char(), *ch);
        }
        assert_eq!(Letter::from_char('x'), None);
    }

    #[test]
    fn parse_accepts_shadda_before_or_after_vowel() {
        let a = parse_vocalized("\u{0643}\u{064E}\u{062A}\u{064E}\u{0651}\u{0628}\u{064E}").unwrap();
        let b = parse_vocalized("\u{0643}\u{064E}\u{062A}\u{0651}\u{064E}\u{0628}\u{064E}").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert!(a[1].shadda);
        assert_eq!(a[1].tashkil, Some(Tashkil::Fatha));
    }

    #[test]
    fn parse_rejects_doubled_marks() {
        let err = parse_vocalized("كَُ").unwrap_err();
        assert!(matches!(err, ConjugationError::MalformedText { position: 2, .. }));

        let err = parse_vocalized("كّّ").unwrap_err();
        assert!(matches!(err, ConjugationError::MalformedText { .. }));
    }

    #[test]
    fn parse_rejects_leading_mark_and_foreign_text() {
        assert!(parse_vocalized("\u{064E}ك").is_err());
        assert!(parse_vocalized("كتب1").is_err());
    }

    #[test]
    fn unwritten_markers_render_nothing() {
        let symbols = vec![
            Vocalized::new(Letter::Qaf, Some(Tashkil::Fatha)),
            Vocalized::new(Letter::Alef, Some(Tashkil::LongVowelMarker)),
            Vocalized::new(Letter::Lam, Some(Tashkil::Fatha)),
        ];
        assert_eq!(to_text(&symbols), "قَالَ");
    }
}

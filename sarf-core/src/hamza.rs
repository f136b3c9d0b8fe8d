//! Hamza seat resolution.
//!
//! Radicals carry the bare hamza. Once the word is fully vocalized each hamza
//! is given its written seat (alef, waw, ya or none) from its own vowel and
//! the vowels around it. Two hamzas meeting, or a hamza followed by a long
//! alef, fuse into a long vowel or an alef madda.

use crate::augmented::{SlotTag, Symbol};
use crate::letters::{Letter, Tashkil};

pub fn resolve_seats(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let symbols = lengthen_after_connecting_alef(symbols);
    let symbols = lengthen_after_hamza(symbols);
    let symbols = seat_all(symbols);
    merge_long_alef(symbols)
}

/// Short vowel ranking used to pick a seat: kasra beats dhamma beats fatha.
fn stronger(a: Tashkil, b: Tashkil) -> Tashkil {
    if a == Tashkil::Kasra || b == Tashkil::Kasra {
        Tashkil::Kasra
    } else if a == Tashkil::Dhamma || b == Tashkil::Dhamma {
        Tashkil::Dhamma
    } else {
        Tashkil::Fatha
    }
}

fn short_vowel(tashkil: Option<Tashkil>) -> Option<Tashkil> {
    tashkil.filter(|t| t.is_short_vowel())
}

fn vowel_or_sukun(tashkil: Option<Tashkil>) -> Option<Tashkil> {
    tashkil.filter(|t| t.is_short_vowel() || *t == Tashkil::Sukun)
}

fn implied_vowel(letter: Letter) -> Tashkil {
    match letter {
        Letter::Waw => Tashkil::Dhamma,
        Letter::Ya => Tashkil::Kasra,
        _ => Tashkil::Fatha,
    }
}

fn is_vowelless_hamza(symbol: &Symbol) -> bool {
    symbol.letter == Letter::Hamza && symbol.tashkil == Some(Tashkil::Sukun)
}

fn long_vowel_for(tashkil: Option<Tashkil>) -> Option<Letter> {
    match tashkil {
        Some(Tashkil::Dhamma) => Some(Letter::Waw),
        Some(Tashkil::Kasra) => Some(Letter::Ya),
        _ => None,
    }
}

/// iʾtamana is written ītamana.
fn lengthen_after_connecting_alef(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
    for idx in 1..symbols.len() {
        let prev = symbols[idx - 1];
        if prev.letter != Letter::Alef || prev.slot != SlotTag::Prefix1 || !is_vowelless_hamza(&symbols[idx]) {
            continue;
        }
        if let Some(long) = long_vowel_for(prev.tashkil) {
            symbols[idx].letter = long;
            symbols[idx].tashkil = Some(Tashkil::LongVowelMarker);
        }
    }
    symbols
}

/// A vowelless hamza after a hamza with dhamma or kasra becomes the matching
/// long vowel (ʾuʾmin to ʾūmin).
fn lengthen_after_hamza(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
    for idx in 1..symbols.len() {
        let prev = symbols[idx - 1];
        let prev_is_hamza = matches!(
            prev.letter,
            Letter::Hamza | Letter::AlefHamza | Letter::AlefHamzaBelow
        );
        if !prev_is_hamza || !is_vowelless_hamza(&symbols[idx]) {
            continue;
        }
        if let Some(long) = long_vowel_for(prev.tashkil) {
            symbols[idx].letter = long;
            symbols[idx].tashkil = Some(Tashkil::LongVowelMarker);
        }
    }
    symbols
}

fn seat_all(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let last = symbols.len().saturating_sub(1);
    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());

    for (idx, symbol) in symbols.into_iter().enumerate() {
        if symbol.letter != Letter::Hamza {
            out.push(symbol);
            continue;
        }

        let seat = seat(&out, &symbol, idx == last);

        // ʾaʾ becomes ā
        if let Some(prev) = out.last_mut() {
            let opens_madda = prev.letter == Letter::AlefHamza
                && prev.tashkil == Some(Tashkil::Fatha)
                && symbol.tashkil == Some(Tashkil::Sukun)
                && matches!(seat, Letter::AlefHamza | Letter::Hamza);
            if opens_madda {
                *prev = madda(prev.slot);
                continue;
            }
        }

        out.push(Symbol {
            letter: seat,
            ..symbol
        });
    }
    out
}

fn seat(out: &[Symbol], hamza: &Symbol, is_final: bool) -> Letter {
    let Some(prev) = out.last() else {
        return if hamza.tashkil == Some(Tashkil::Kasra) {
            Letter::AlefHamzaBelow
        } else {
            Letter::AlefHamza
        };
    };

    let prev_long = prev.is_long_vowel();
    let diphthong = prev.letter.is_weak()
        && prev.tashkil == Some(Tashkil::Sukun)
        && out.len() > 1
        && out[out.len() - 2].tashkil == Some(Tashkil::Fatha);

    if is_final {
        if prev_long || prev.tashkil == Some(Tashkil::Sukun) {
            return Letter::Hamza;
        }
        return match prev.tashkil {
            Some(Tashkil::Fatha) => Letter::AlefHamza,
            Some(Tashkil::Dhamma) => Letter::WawHamza,
            Some(Tashkil::Kasra) => Letter::YaHamza,
            _ => Letter::Hamza,
        };
    }

    if prev_long {
        let implied = implied_vowel(prev.letter);
        let decisive = match short_vowel(hamza.tashkil) {
            Some(own) => stronger(own, implied),
            None => implied,
        };
        return match decisive {
            Tashkil::Fatha if prev.letter == Letter::Ya => Letter::YaHamza,
            Tashkil::Fatha => Letter::Hamza,
            Tashkil::Dhamma => Letter::WawHamza,
            _ => Letter::YaHamza,
        };
    }

    if diphthong {
        if prev.letter == Letter::Ya {
            return Letter::YaHamza;
        }
        return match short_vowel(hamza.tashkil) {
            Some(Tashkil::Dhamma) => Letter::WawHamza,
            Some(Tashkil::Kasra) => Letter::YaHamza,
            Some(_) => Letter::AlefHamza,
            None => Letter::Hamza,
        };
    }

    let before = vowel_or_sukun(prev.tashkil);
    let own = vowel_or_sukun(hamza.tashkil);
    let as_vowel = |t: Tashkil| if t == Tashkil::Sukun { Tashkil::Fatha } else { t };
    let decisive = match (before, own) {
        (None, own) => own.unwrap_or(Tashkil::Fatha),
        (Some(before), None) => before,
        (Some(Tashkil::Sukun), Some(Tashkil::Sukun)) => Tashkil::Sukun,
        (Some(before), Some(own)) => stronger(as_vowel(before), as_vowel(own)),
    };
    match decisive {
        Tashkil::Dhamma => Letter::WawHamza,
        Tashkil::Kasra => Letter::YaHamza,
        _ => Letter::AlefHamza,
    }
}

fn madda(slot: SlotTag) -> Symbol {
    Symbol::new(Letter::AlefMadda, Some(Tashkil::LongVowelMarker), slot)
}

/// A hamza with fatha before the long alef of stems 3 and 6 is written as
/// alef madda (ʾāmara, taʾāmara).
fn merge_long_alef(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        let long_infix_alef = symbol.letter == Letter::Alef
            && symbol.slot == SlotTag::Infix
            && matches!(symbol.tashkil, None | Some(Tashkil::LongVowelMarker));
        if long_infix_alef {
            if let Some(prev) = out.last_mut() {
                let open_hamza = matches!(prev.letter, Letter::AlefHamza | Letter::Hamza)
                    && prev.tashkil == Some(Tashkil::Fatha)
                    && !prev.shadda;
                if open_hamza {
                    *prev = madda(prev.slot);
                    continue;
                }
            }
        }
        out.push(symbol);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(letter: Letter, tashkil: Tashkil) -> Symbol {
        Symbol::new(letter, Some(tashkil), SlotTag::Postfix)
    }

    fn letters(symbols: &[Symbol]) -> Vec<Letter> {
        symbols.iter().map(|s| s.letter).collect()
    }

    #[test]
    fn initial_hamza_sits_on_alef() {
        let word = vec![
            sym(Letter::Hamza, Tashkil::Kasra),
            sym(Letter::Siin, Tashkil::Fatha),
        ];
        assert_eq!(resolve_seats(word)[0].letter, Letter::AlefHamzaBelow);
        let word = vec![
            sym(Letter::Hamza, Tashkil::Fatha),
            sym(Letter::Kha, Tashkil::Fatha),
        ];
        assert_eq!(resolve_seats(word)[0].letter, Letter::AlefHamza);
    }

    #[test]
    fn medial_hamza_follows_strongest_vowel() {
        // raʾufa
        let word = vec![
            sym(Letter::Ra, Tashkil::Fatha),
            sym(Letter::Hamza, Tashkil::Dhamma),
            sym(Letter::Fa, Tashkil::Fatha),
        ];
        assert_eq!(resolve_seats(word)[1].letter, Letter::WawHamza);
        // suʾila
        let word = vec![
            sym(Letter::Siin, Tashkil::Dhamma),
            sym(Letter::Hamza, Tashkil::Kasra),
            sym(Letter::Lam, Tashkil::Fatha),
        ];
        assert_eq!(resolve_seats(word)[1].letter, Letter::YaHamza);
        // yasʾalu
        let word = vec![
            sym(Letter::Ya, Tashkil::Fatha),
            sym(Letter::Siin, Tashkil::Sukun),
            sym(Letter::Hamza, Tashkil::Fatha),
            sym(Letter::Lam, Tashkil::Dhamma),
        ];
        assert_eq!(resolve_seats(word)[2].letter, Letter::AlefHamza);
    }

    #[test]
    fn final_hamza_after_long_vowel_is_bare() {
        let word = vec![
            sym(Letter::Jiim, Tashkil::Fatha),
            Symbol::new(Letter::Alef, Some(Tashkil::LongVowelMarker), SlotTag::R2),
            sym(Letter::Hamza, Tashkil::Fatha),
        ];
        assert_eq!(letters(&resolve_seats(word))[2], Letter::Hamza);
    }

    #[test]
    fn hamza_pairs_fuse_into_madda() {
        // ʾaʾkulu
        let word = vec![
            Symbol::new(Letter::AlefHamza, Some(Tashkil::Fatha), SlotTag::Prefix1),
            Symbol::new(Letter::Hamza, Some(Tashkil::Sukun), SlotTag::R1),
            sym(Letter::Kaf, Tashkil::Dhamma),
            sym(Letter::Lam, Tashkil::Dhamma),
        ];
        let seated = resolve_seats(word);
        assert_eq!(
            letters(&seated),
            vec![Letter::AlefMadda, Letter::Kaf, Letter::Lam]
        );

        // ʾuʾmira
        let word = vec![
            Symbol::new(Letter::AlefHamza, Some(Tashkil::Dhamma), SlotTag::Prefix1),
            Symbol::new(Letter::Hamza, Some(Tashkil::Sukun), SlotTag::R1),
            sym(Letter::Mim, Tashkil::Kasra),
        ];
        assert_eq!(resolve_seats(word)[1].letter, Letter::Waw);
    }

    #[test]
    fn hamza_before_infix_alef_becomes_madda() {
        let word = vec![
            Symbol::new(Letter::Hamza, Some(Tashkil::Fatha), SlotTag::R1),
            Symbol::new(Letter::Alef, Some(Tashkil::LongVowelMarker), SlotTag::Infix),
            sym(Letter::Mim, Tashkil::Fatha),
            sym(Letter::Ra, Tashkil::Fatha),
        ];
        assert_eq!(
            letters(&resolve_seats(word)),
            vec![Letter::AlefMadda, Letter::Mim, Letter::Ra]
        );
    }
}

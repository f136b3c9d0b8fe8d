//! Augmented Root Buffer
//!
//! The mutable working structure of one conjugation: the radicals of the root
//! interleaved with the fixed letters of the stem pattern, each tagged with
//! the slot it occupies. Symbols are addressed by slot tag, never by index,
//! so removals and insertions cannot shift the meaning of later operations.

use serde::{Deserialize, Serialize};

use crate::error::{ConjugationError, Result};
use crate::letters::{Letter, Tashkil, Vocalized};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotTag {
    R1,
    R2,
    R3,
    R4,
    Prefix1,
    Prefix2,
    Infix,
    Postfix,
}

impl SlotTag {
    /// Slot of the radical with the given 1-based number.
    pub fn radical(number: u8) -> Option<Self> {
        match number {
            1 => Some(SlotTag::R1),
            2 => Some(SlotTag::R2),
            3 => Some(SlotTag::R3),
            4 => Some(SlotTag::R4),
            _ => None,
        }
    }

    pub fn is_radical(self) -> bool {
        matches!(self, SlotTag::R1 | SlotTag::R2 | SlotTag::R3 | SlotTag::R4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub letter: Letter,
    /// `None` until the pipeline stamps a diacritic.
    pub tashkil: Option<Tashkil>,
    pub shadda: bool,
    pub emphasis: bool,
    pub slot: SlotTag,
}

impl Symbol {
    pub fn new(letter: Letter, tashkil: Option<Tashkil>, slot: SlotTag) -> Self {
        Self {
            letter,
            tashkil,
            shadda: false,
            emphasis: false,
            slot,
        }
    }

    /// A long-vowel letter whose diacritic is implied.
    pub fn is_long_vowel(&self) -> bool {
        matches!(self.letter, Letter::Alef | Letter::Waw | Letter::Ya)
            && matches!(
                self.tashkil,
                None | Some(Tashkil::LongVowelMarker) | Some(Tashkil::EndOfWordMarker)
            )
    }

    pub fn to_vocalized(self) -> Vocalized {
        Vocalized {
            letter: self.letter,
            tashkil: self.tashkil,
            shadda: self.shadda,
            emphasis: self.emphasis,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AugmentedRoot {
    symbols: Vec<Symbol>,
}

impl AugmentedRoot {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    fn position(&self, slot: SlotTag) -> Option<usize> {
        self.symbols.iter().position(|s| s.slot == slot)
    }

    fn require(&self, slot: SlotTag) -> Result<usize> {
        self.position(slot)
            .ok_or(ConjugationError::MissingSlot(slot))
    }

    fn radical_slot(number: u8) -> Result<SlotTag> {
        SlotTag::radical(number).ok_or(ConjugationError::NotARadical(number))
    }

    pub fn has_radical(&self, number: u8) -> bool {
        SlotTag::radical(number)
            .and_then(|slot| self.position(slot))
            .is_some()
    }

    pub fn symbol(&self, slot: SlotTag) -> Option<&Symbol> {
        self.position(slot).map(|idx| &self.symbols[idx])
    }

    pub fn symbol_mut(&mut self, slot: SlotTag) -> Option<&mut Symbol> {
        self.position(slot).map(move |idx| &mut self.symbols[idx])
    }

    pub fn radical(&self, number: u8) -> Option<&Symbol> {
        SlotTag::radical(number).and_then(|slot| self.symbol(slot))
    }

    pub fn radical_mut(&mut self, number: u8) -> Option<&mut Symbol> {
        SlotTag::radical(number).and_then(move |slot| self.symbol_mut(slot))
    }

    /// Symbol directly before the given slot.
    pub fn predecessor_mut(&mut self, slot: SlotTag) -> Option<&mut Symbol> {
        match self.position(slot) {
            Some(idx) if idx > 0 => Some(&mut self.symbols[idx - 1]),
            _ => None,
        }
    }

    pub fn predecessor(&self, slot: SlotTag) -> Option<&Symbol> {
        match self.position(slot) {
            Some(idx) if idx > 0 => Some(&self.symbols[idx - 1]),
            _ => None,
        }
    }

    /// Symbol directly after the given slot.
    pub fn successor_mut(&mut self, slot: SlotTag) -> Option<&mut Symbol> {
        let idx = self.position(slot)?;
        self.symbols.get_mut(idx + 1)
    }

    pub fn successor(&self, slot: SlotTag) -> Option<&Symbol> {
        let idx = self.position(slot)?;
        self.symbols.get(idx + 1)
    }

    pub fn first(&self) -> Option<&Symbol> {
        self.symbols.first()
    }

    pub fn prepend(&mut self, symbol: Symbol) {
        self.symbols.insert(0, symbol);
    }

    pub fn append(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.symbols.extend(symbols);
    }

    /// Insert a symbol directly before the given slot.
    pub fn insert_before(&mut self, slot: SlotTag, symbol: Symbol) -> Result<()> {
        let idx = self.require(slot)?;
        self.symbols.insert(idx, symbol);
        Ok(())
    }

    pub fn apply_tashkil(&mut self, slot: SlotTag, tashkil: Option<Tashkil>) -> Result<()> {
        let idx = self.require(slot)?;
        self.symbols[idx].tashkil = tashkil;
        Ok(())
    }

    pub fn apply_radical_tashkil(&mut self, number: u8, tashkil: Option<Tashkil>) -> Result<()> {
        self.apply_tashkil(Self::radical_slot(number)?, tashkil)
    }

    /// Swap the letter and diacritic of a radical.
    pub fn replace_radical(&mut self, number: u8, letter: Letter, tashkil: Option<Tashkil>) -> Result<()> {
        let idx = self.require(Self::radical_slot(number)?)?;
        let symbol = &mut self.symbols[idx];
        symbol.letter = letter;
        symbol.tashkil = tashkil;
        Ok(())
    }

    /// Change only the letter of a radical, keeping its diacritic.
    pub fn replace_radical_letter(&mut self, number: u8, letter: Letter) -> Result<()> {
        let idx = self.require(Self::radical_slot(number)?)?;
        self.symbols[idx].letter = letter;
        Ok(())
    }

    /// Merge a radical into its predecessor: the predecessor takes over the
    /// radical's diacritic and the radical disappears.
    pub fn assimilate_radical(&mut self, number: u8) -> Result<()> {
        let idx = self.require(Self::radical_slot(number)?)?;
        let removed = self.symbols.remove(idx);
        if idx > 0 {
            self.symbols[idx - 1].tashkil = removed.tashkil;
        }
        Ok(())
    }

    /// Remove a radical without any compensation.
    pub fn drop_radical(&mut self, number: u8) -> Result<()> {
        let idx = self.require(Self::radical_slot(number)?)?;
        self.symbols.remove(idx);
        Ok(())
    }

    /// Replace a radical by a long-vowel letter and give the preceding symbol
    /// the matching short vowel.
    pub fn insert_long_vowel(&mut self, number: u8, vowel: Letter) -> Result<()> {
        let idx = self.require(Self::radical_slot(number)?)?;
        let symbol = &mut self.symbols[idx];
        symbol.letter = vowel;
        symbol.tashkil = Some(Tashkil::LongVowelMarker);
        symbol.shadda = false;
        if idx > 0 {
            self.symbols[idx - 1].tashkil = Tashkil::for_long_vowel(vowel);
        }
        Ok(())
    }

    /// Remove a radical and leave only a short vowel on the preceding symbol.
    pub fn insert_short_vowel(&mut self, number: u8, vowel: Tashkil) -> Result<()> {
        let idx = self.require(Self::radical_slot(number)?)?;
        self.symbols.remove(idx);
        if idx > 0 {
            self.symbols[idx - 1].tashkil = Some(vowel);
        }
        Ok(())
    }

    pub fn to_vocalized(&self) -> Vec<Vocalized> {
        self.symbols.iter().map(|s| s.to_vocalized()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radicals(letters: &[Letter], tashkil: &[Tashkil]) -> AugmentedRoot {
        let symbols = letters
            .iter()
            .zip(tashkil)
            .enumerate()
            .map(|(idx, (letter, t))| {
                Symbol::new(*letter, Some(*t), SlotTag::radical(idx as u8 + 1).unwrap())
            })
            .collect();
        AugmentedRoot::new(symbols)
    }

    fn qwl() -> AugmentedRoot {
        radicals(
            &[Letter::Qaf, Letter::Waw, Letter::Lam],
            &[Tashkil::Fatha, Tashkil::Fatha, Tashkil::Sukun],
        )
    }

    #[test]
    fn assimilate_moves_diacritic_to_predecessor() {
        let mut buffer = qwl();
        buffer.apply_radical_tashkil(2, Some(Tashkil::Dhamma)).unwrap();
        buffer.assimilate_radical(2).unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.radical(1).unwrap().tashkil, Some(Tashkil::Dhamma));
        assert!(buffer.radical(2).is_none());
        // R3 is still addressable after the removal
        assert_eq!(buffer.radical(3).unwrap().letter, Letter::Lam);
    }

    #[test]
    fn long_and_short_vowel_insertion() {
        let mut buffer = qwl();
        buffer.insert_long_vowel(2, Letter::Alef).unwrap();
        let symbols = buffer.symbols();
        assert_eq!(symbols[0].tashkil, Some(Tashkil::Fatha));
        assert_eq!(symbols[1].letter, Letter::Alef);
        assert_eq!(symbols[1].tashkil, Some(Tashkil::LongVowelMarker));

        let mut buffer = qwl();
        buffer.insert_short_vowel(2, Tashkil::Dhamma).unwrap();
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.radical(1).unwrap().tashkil, Some(Tashkil::Dhamma));
    }

    #[test]
    fn missing_slots_are_reported() {
        let mut buffer = qwl();
        buffer.drop_radical(3).unwrap();
        assert!(matches!(
            buffer.drop_radical(3),
            Err(ConjugationError::MissingSlot(SlotTag::R3))
        ));
        assert!(buffer.apply_tashkil(SlotTag::Infix, None).is_err());
        assert!(buffer.replace_radical(5, Letter::Ya, None).is_err());
    }
}

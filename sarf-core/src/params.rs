//! Grammatical parameters of a single conjugated form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConjugationError, Result};
use crate::letters::Tashkil;

/// Derived verb stem (form I to X).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stem(u8);

impl Stem {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ConjugationError::InvalidStem(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Stem> {
        (Self::MIN..=Self::MAX).map(Stem)
    }
}

impl TryFrom<u8> for Stem {
    type Error = ConjugationError;

    fn try_from(value: u8) -> Result<Self> {
        Stem::new(value)
    }
}

impl From<Stem> for u8 {
    fn from(stem: Stem) -> Self {
        stem.0
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Perfect,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Jussive,
    Imperative,
}

impl Mood {
    pub const ALL: [Mood; 4] = [
        Mood::Indicative,
        Mood::Subjunctive,
        Mood::Jussive,
        Mood::Imperative,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numerus {
    Singular,
    Dual,
    Plural,
}

impl Numerus {
    pub const ALL: [Numerus; 3] = [Numerus::Singular, Numerus::Dual, Numerus::Plural];
}

/// One of the three short vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vowel {
    Fatha,
    Dhamma,
    Kasra,
}

impl Vowel {
    pub fn tashkil(self) -> Tashkil {
        match self {
            Vowel::Fatha => Tashkil::Fatha,
            Vowel::Dhamma => Tashkil::Dhamma,
            Vowel::Kasra => Tashkil::Kasra,
        }
    }
}

/// The middle-radical vowels of a stem 1 verb, which are lexical and cannot
/// be predicted from the root alone (faʿala/yafʿulu vs. faʿila/yafʿalu ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stem1Context {
    pub past: Vowel,
    pub present: Vowel,
    /// Conjugate a weak root as if it were sound (e.g. wajila/yawjalu).
    #[serde(default)]
    pub sound_override: bool,
}

impl Stem1Context {
    pub fn new(past: Vowel, present: Vowel) -> Self {
        Self {
            past,
            present,
            sound_override: false,
        }
    }

    pub fn sound(mut self) -> Self {
        self.sound_override = true;
        self
    }
}

/// Full parameter set for one conjugated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConjugationParams {
    pub stem: Stem,
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    pub person: Person,
    pub gender: Gender,
    pub numerus: Numerus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem1_context: Option<Stem1Context>,
}

impl ConjugationParams {
    /// Third person masculine singular active indicative, the citation form's
    /// neighbourhood; adjust the fields from here.
    pub fn new(stem: Stem, tense: Tense) -> Self {
        Self {
            stem,
            tense,
            mood: Mood::Indicative,
            voice: Voice::Active,
            person: Person::Third,
            gender: Gender::Male,
            numerus: Numerus::Singular,
            stem1_context: None,
        }
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn voice(mut self, voice: Voice) -> Self {
        self.voice = voice;
        self
    }

    pub fn person(mut self, person: Person) -> Self {
        self.person = person;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn numerus(mut self, numerus: Numerus) -> Self {
        self.numerus = numerus;
        self
    }

    pub fn stem1_context(mut self, context: Stem1Context) -> Self {
        self.stem1_context = Some(context);
        self
    }

    pub fn is_active(&self) -> bool {
        self.voice == Voice::Active
    }

    pub fn is_perfect(&self) -> bool {
        self.tense == Tense::Perfect
    }

    pub fn is_imperative(&self) -> bool {
        self.mood == Mood::Imperative
    }

    /// Reject combinations that do not exist in the language.
    pub fn validate(&self) -> Result<()> {
        if self.tense == Tense::Perfect && self.mood != Mood::Indicative {
            return Err(ConjugationError::MoodWithoutPresent(self.mood));
        }
        if self.mood == Mood::Imperative {
            if self.voice == Voice::Passive {
                return Err(ConjugationError::PassiveImperative);
            }
            if self.person != Person::Second {
                return Err(ConjugationError::ImperativePerson(self.person));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem(n: u8) -> Stem {
        Stem::new(n).unwrap()
    }

    #[test]
    fn stem_bounds() {
        assert!(Stem::new(0).is_err());
        assert!(Stem::new(11).is_err());
        assert_eq!(Stem::all().count(), 10);
        assert_eq!(stem(7).number(), 7);
    }

    #[test]
    fn imperative_rejects_passive_and_other_persons() {
        let base = ConjugationParams::new(stem(1), Tense::Present)
            .mood(Mood::Imperative)
            .person(Person::Second);
        assert!(base.validate().is_ok());
        assert_eq!(
            base.voice(Voice::Passive).validate(),
            Err(ConjugationError::PassiveImperative)
        );
        assert_eq!(
            base.person(Person::Third).validate(),
            Err(ConjugationError::ImperativePerson(Person::Third))
        );
    }

    #[test]
    fn perfect_tense_has_no_mood() {
        let params = ConjugationParams::new(stem(2), Tense::Perfect).mood(Mood::Jussive);
        assert_eq!(
            params.validate(),
            Err(ConjugationError::MoodWithoutPresent(Mood::Jussive))
        );
    }

    #[test]
    fn params_serialize_with_numeric_stem() {
        let params = ConjugationParams::new(stem(10), Tense::Present)
            .stem1_context(Stem1Context::new(Vowel::Fatha, Vowel::Kasra));
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(json["stem"], 10);
        assert_eq!(json["tense"], "present");
        assert_eq!(json["stem1_context"]["present"], "kasra");

        let back: ConjugationParams = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);

        let bad = serde_json::json!({
            "stem": 12, "tense": "present", "mood": "indicative", "voice": "active",
            "person": "third", "gender": "male", "numerus": "singular"
        });
        assert!(serde_json::from_value::<ConjugationParams>(bad).is_err());
    }
}

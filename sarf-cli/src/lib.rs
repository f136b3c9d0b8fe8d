//! Configuration and rendering shared by the `sarf` command line tool.

use std::fs;
use std::path::Path;

use sarf_core::{
    from_buckwalter, parse_vocalized, to_buckwalter, to_text, ConjugationError,
    ConjugationParams, Conjugator, Dialect, Gender, Mood, Numerus, Person, Stem, Stem1Context,
    Tense, VerbRoot, Vocalized, Voice,
};
use sarf_reverse::{ReverseConjugationResult, ReverseError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Conjugation(#[from] ConjugationError),

    #[error(transparent)]
    Reverse(#[from] ReverseError),

    #[error("unknown value {value:?}")]
    UnknownKeyword { value: String },
}

/// How forms are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Arabic,
    Buckwalter,
    Json,
}

/// How log lines are written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub dialect: Dialect,
    #[serde(default)]
    pub format: OutputFormat,
    /// Used for stem 1 when the command line gives no vowels.
    #[serde(default)]
    pub stem1_context: Option<Stem1Context>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_filter() -> String {
    "warn".into()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            format: OutputFormat::default(),
            stem1_context: None,
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(CliError::from)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), CliError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_env_or_default() -> Result<Self, CliError> {
        match std::env::var("SARF_CONFIG") {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn conjugator(&self) -> Conjugator {
        Conjugator::new(self.dialect)
    }
}

/// Parse a lowercase keyword such as `perfect` or `kasra` into any of the
/// engine's parameter enums.
pub fn parse_keyword<T: DeserializeOwned>(value: &str) -> Result<T, CliError> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_lowercase())).map_err(|_| {
        CliError::UnknownKeyword {
            value: value.to_string(),
        }
    })
}

/// Accept a form either as vocalized Arabic or as Buckwalter.
pub fn parse_form(text: &str) -> Result<Vec<Vocalized>, CliError> {
    let arabic = text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c));
    let form = if arabic {
        parse_vocalized(text)?
    } else {
        from_buckwalter(text)?
    };
    Ok(form)
}

pub fn render(form: &[Vocalized], format: OutputFormat) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Arabic => to_text(form),
        OutputFormat::Buckwalter => to_buckwalter(form),
        OutputFormat::Json => serde_json::to_string(form)?,
    })
}

/// One cell of a conjugation table.
#[derive(Clone, Debug, Serialize)]
pub struct TableRow {
    pub params: ConjugationParams,
    /// `None` when the combination cannot be conjugated.
    pub form: Option<Vec<Vocalized>>,
}

/// Every person, gender and number for the given tense, mood and voice.
///
/// Combinations the language does not have are skipped. Unimplemented ones
/// are kept with an empty form, other errors are returned.
pub fn conjugation_table(
    conjugator: &Conjugator,
    root: &VerbRoot,
    stem: Stem,
    tense: Tense,
    mood: Mood,
    voice: Voice,
    context: Option<Stem1Context>,
) -> Result<Vec<TableRow>, CliError> {
    let mut rows = Vec::new();
    for numerus in Numerus::ALL {
        for person in Person::ALL {
            for gender in Gender::ALL {
                let mut params = ConjugationParams::new(stem, tense)
                    .mood(mood)
                    .voice(voice)
                    .person(person)
                    .gender(gender)
                    .numerus(numerus);
                params.stem1_context = context;
                if params.validate().is_err() {
                    continue;
                }
                let form = match conjugator.conjugate(root, &params) {
                    Ok(form) => Some(form),
                    Err(ConjugationError::NotImplemented { .. }) => None,
                    Err(err) => return Err(err.into()),
                };
                rows.push(TableRow { params, form });
            }
        }
    }
    Ok(rows)
}

/// One line per analysis result, best scores first.
pub fn render_analysis(
    results: &[ReverseConjugationResult],
    format: OutputFormat,
) -> Result<Vec<String>, CliError> {
    let mut sorted: Vec<&ReverseConjugationResult> = results.iter().collect();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    sorted
        .into_iter()
        .map(|result| {
            Ok(match format {
                OutputFormat::Json => serde_json::to_string(result)?,
                _ => {
                    let p = &result.params;
                    format!(
                        "{:.2}  {}  stem {} {:?} {:?} {:?} {:?} {:?} {:?}",
                        result.score,
                        result.root,
                        p.stem,
                        p.tense,
                        p.mood,
                        p.voice,
                        p.person,
                        p.gender,
                        p.numerus
                    )
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::Vowel;

    #[test]
    fn keywords_map_onto_engine_enums() {
        assert_eq!(parse_keyword::<Tense>("Perfect").unwrap(), Tense::Perfect);
        assert_eq!(parse_keyword::<Vowel>("kasra").unwrap(), Vowel::Kasra);
        assert_eq!(parse_keyword::<Numerus>(" dual ").unwrap(), Numerus::Dual);
        assert!(matches!(
            parse_keyword::<Mood>("energetic"),
            Err(CliError::UnknownKeyword { .. })
        ));
    }

    #[test]
    fn forms_parse_from_either_script() {
        let arabic = parse_form("كَتَبَ").unwrap();
        let latin = parse_form("kataba").unwrap();
        assert_eq!(arabic, latin);
        assert_eq!(render(&latin, OutputFormat::Buckwalter).unwrap(), "kataba");
        assert_eq!(render(&latin, OutputFormat::Arabic).unwrap(), "كَتَبَ");
    }

    #[test]
    fn imperative_table_only_has_second_person() {
        let root: VerbRoot = "كتب".parse().unwrap();
        let rows = conjugation_table(
            &Conjugator::default(),
            &root,
            Stem::new(2).unwrap(),
            Tense::Present,
            Mood::Imperative,
            Voice::Active,
            None,
        )
        .unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.params.person == Person::Second));
        assert!(rows.iter().all(|row| row.form.is_some()));
    }

    #[test]
    fn unimplemented_cells_stay_empty() {
        let root: VerbRoot = "قول".parse().unwrap();
        let rows = conjugation_table(
            &Conjugator::default(),
            &root,
            Stem::new(9).unwrap(),
            Tense::Perfect,
            Mood::Indicative,
            Voice::Active,
            None,
        )
        .unwrap();
        assert_eq!(rows.len(), 18);
        assert!(rows.iter().all(|row| row.form.is_none()));
    }
}

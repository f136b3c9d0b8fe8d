//! Conjugation pipeline and dialect dispatch.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::augmentation;
use crate::display;
use crate::error::{ConjugationError, Result};
use crate::hamza;
use crate::letters::Vocalized;
use crate::lexicon;
use crate::params::{ConjugationParams, Stem, Stem1Context, Voice};
use crate::participle;
use crate::resolvers::{self, stems, Job};
use crate::root::{RootType, VerbRoot};
use crate::tashkil;
use crate::verbal_noun;

/// Dialects the engine can conjugate for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    #[default]
    ModernStandardArabic,
}

impl Dialect {
    pub fn conjugator(self) -> &'static dyn DialectConjugator {
        match self {
            Dialect::ModernStandardArabic => &MsaConjugator,
        }
    }
}

/// The generation side of one dialect.
pub trait DialectConjugator: Send + Sync {
    fn conjugate(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<Vec<Vocalized>>;

    fn conjugate_participle(
        &self,
        root: &VerbRoot,
        stem: Stem,
        voice: Voice,
        context: Option<Stem1Context>,
    ) -> Result<Vec<Vocalized>>;

    fn verbal_nouns(&self, root: &VerbRoot, stem: Stem) -> Result<Vec<Vec<Vocalized>>>;
}

/// Modern Standard Arabic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsaConjugator;

impl DialectConjugator for MsaConjugator {
    fn conjugate(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<Vec<Vocalized>> {
        params.validate()?;

        let lexical = lexicon::lookup(root);
        let context = effective_context(root, params.stem, params.stem1_context)?;
        let root_type = effective_root_type(root, params.stem, context);
        let quadriliteral = root.is_quadriliteral();
        trace!("conjugating {} as {:?} stem {}", root, root_type, params.stem);

        let template = augmentation::template(params.stem, root_type, params.tense, params.voice)
            .ok_or_else(|| {
                debug!("no template for stem {} of {:?} root {}", params.stem, root_type, root);
                ConjugationError::NotImplemented {
                    what: "conjugation",
                    stem: params.stem,
                    root_type,
                }
            })?;
        let mut buffer = augmentation::instantiate(root, &template);

        for (number, vowel) in (1u8..).zip(tashkil::root_tashkil(params, quadriliteral, context)?) {
            buffer.apply_radical_tashkil(number, Some(vowel))?;
        }
        let suffix = tashkil::suffix(params);
        let last_radical = if quadriliteral { 4 } else { 3 };
        buffer.apply_radical_tashkil(last_radical, Some(suffix.pre_tashkil))?;
        buffer.append(suffix.symbols);

        let job = Job {
            root,
            params,
            root_type,
            context,
            lexical,
        };
        stems::apply(&mut buffer, &job)?;
        if let Some(entry) = lexical {
            lexicon::apply_before_resolver(entry, &mut buffer, params)?;
        }
        resolvers::resolve(&mut buffer, &job)?;
        if let Some(entry) = lexical {
            lexicon::apply_after_resolver(entry, &mut buffer, params)?;
        }
        tashkil::apply_prefix(&mut buffer, params, quadriliteral, context);

        display::finalize(hamza::resolve_seats(buffer.into_symbols()))
    }

    fn conjugate_participle(
        &self,
        root: &VerbRoot,
        stem: Stem,
        voice: Voice,
        context: Option<Stem1Context>,
    ) -> Result<Vec<Vocalized>> {
        let context = effective_context(root, stem, context)?;
        let root_type = effective_root_type(root, stem, context);
        participle::participle(root, root_type, stem, voice, context)
    }

    fn verbal_nouns(&self, root: &VerbRoot, stem: Stem) -> Result<Vec<Vec<Vocalized>>> {
        verbal_noun::verbal_nouns(root, stem)
    }
}

/// The stem 1 context to conjugate with: the caller's, or the one pinned by
/// the lexicon. Only triliteral stem 1 needs one.
pub(crate) fn effective_context(
    root: &VerbRoot,
    stem: Stem,
    requested: Option<Stem1Context>,
) -> Result<Option<Stem1Context>> {
    if stem.number() != 1 || root.is_quadriliteral() {
        return Ok(requested);
    }
    requested
        .or_else(|| lexicon::lookup(root).and_then(|entry| entry.stem1_context))
        .map(Some)
        .ok_or(ConjugationError::MissingStem1Context)
}

pub(crate) fn effective_root_type(root: &VerbRoot, stem: Stem, context: Option<Stem1Context>) -> RootType {
    let sound_override = stem.number() == 1 && context.is_some_and(|c| c.sound_override);
    if sound_override {
        RootType::Sound
    } else {
        root.root_type()
    }
}

/// Dialect-aware entry point used by callers that do not hold a
/// [`DialectConjugator`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Conjugator {
    dialect: Dialect,
}

impl Conjugator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn conjugate(&self, root: &VerbRoot, params: &ConjugationParams) -> Result<Vec<Vocalized>> {
        self.dialect.conjugator().conjugate(root, params)
    }

    pub fn conjugate_participle(
        &self,
        root: &VerbRoot,
        stem: Stem,
        voice: Voice,
        context: Option<Stem1Context>,
    ) -> Result<Vec<Vocalized>> {
        self.dialect
            .conjugator()
            .conjugate_participle(root, stem, voice, context)
    }

    pub fn verbal_nouns(&self, root: &VerbRoot, stem: Stem) -> Result<Vec<Vec<Vocalized>>> {
        self.dialect.conjugator().verbal_nouns(root, stem)
    }
}

/// Conjugate with the default dialect.
pub fn conjugate(root: &VerbRoot, params: &ConjugationParams) -> Result<Vec<Vocalized>> {
    Conjugator::default().conjugate(root, params)
}

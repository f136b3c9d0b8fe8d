use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use sarf_cli::{
    conjugation_table, parse_form, parse_keyword, render, render_analysis, EngineConfig, LogFormat,
};
use sarf_core::{
    from_buckwalter, parse_vocalized, to_buckwalter, to_text, ConjugationParams, Mood, Stem,
    Stem1Context, Tense, VerbRoot, Voice,
};
use sarf_reverse::ReverseConjugator;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sarf", about = "Arabic verb conjugation and analysis")]
struct Cli {
    /// Engine config file (JSON), defaults to $SARF_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: arabic, buckwalter or json
    #[arg(long, global = true, env = "SARF_FORMAT")]
    format: Option<String>,

    /// Log format: text or json
    #[arg(long, global = true, env = "SARF_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RootArgs {
    /// Root radicals, e.g. كتب or ك-ت-ب
    #[arg(long)]
    root: String,

    #[arg(long, default_value_t = 1)]
    stem: u8,
}

#[derive(Args, Debug)]
struct ContextArgs {
    /// Stem 1 middle radical vowel in the perfect
    #[arg(long)]
    past: Option<String>,

    /// Stem 1 middle radical vowel in the present
    #[arg(long)]
    present: Option<String>,

    /// Conjugate a weak root as sound
    #[arg(long)]
    sound: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Conjugate a single form
    Conjugate {
        #[command(flatten)]
        root: RootArgs,
        #[command(flatten)]
        context: ContextArgs,
        #[arg(long, default_value = "perfect")]
        tense: String,
        #[arg(long, default_value = "indicative")]
        mood: String,
        #[arg(long, default_value = "active")]
        voice: String,
        #[arg(long, default_value = "third")]
        person: String,
        #[arg(long, default_value = "male")]
        gender: String,
        #[arg(long, default_value = "singular")]
        numerus: String,
    },
    /// Print every form of one tense, mood and voice
    Table {
        #[command(flatten)]
        root: RootArgs,
        #[command(flatten)]
        context: ContextArgs,
        #[arg(long, default_value = "perfect")]
        tense: String,
        #[arg(long, default_value = "indicative")]
        mood: String,
        #[arg(long, default_value = "active")]
        voice: String,
    },
    /// Find roots and parameters that produce a vocalized form
    Analyze {
        /// Vocalized Arabic or Buckwalter
        form: String,
    },
    /// Convert between Arabic script and Buckwalter
    Transliterate {
        text: String,
        /// Convert Buckwalter back to Arabic
        #[arg(long)]
        reverse: bool,
    },
    /// Active or passive participle
    Participle {
        #[command(flatten)]
        root: RootArgs,
        #[command(flatten)]
        context: ContextArgs,
        #[arg(long, default_value = "active")]
        voice: String,
    },
    /// Verbal nouns of a derived stem
    VerbalNouns {
        #[command(flatten)]
        root: RootArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::from_env_or_default()?,
    };
    if let Some(format) = &cli.format {
        config.format = parse_keyword(format)?;
    }
    if let Some(log_format) = &cli.log_format {
        config.log_format = parse_keyword(log_format)?;
    }
    init_logging(&config);
    debug!("config: {:?}", config);

    let conjugator = config.conjugator();
    match cli.command {
        Commands::Conjugate {
            root,
            context,
            tense,
            mood,
            voice,
            person,
            gender,
            numerus,
        } => {
            let (verb, stem) = parse_root(&root)?;
            let mut params = ConjugationParams::new(stem, parse_keyword(&tense)?)
                .mood(parse_keyword(&mood)?)
                .voice(parse_keyword(&voice)?)
                .person(parse_keyword(&person)?)
                .gender(parse_keyword(&gender)?)
                .numerus(parse_keyword(&numerus)?);
            params.stem1_context = stem1_context(&context, &config)?;

            let form = conjugator.conjugate(&verb, &params)?;
            println!("{}", render(&form, config.format)?);
        }
        Commands::Table {
            root,
            context,
            tense,
            mood,
            voice,
        } => {
            let (verb, stem) = parse_root(&root)?;
            let tense: Tense = parse_keyword(&tense)?;
            let mood: Mood = parse_keyword(&mood)?;
            let voice: Voice = parse_keyword(&voice)?;
            let rows = conjugation_table(
                &conjugator,
                &verb,
                stem,
                tense,
                mood,
                voice,
                stem1_context(&context, &config)?,
            )?;

            for row in rows {
                let p = &row.params;
                let rendered = match &row.form {
                    Some(form) => render(form, config.format)?,
                    None => "-".to_string(),
                };
                println!("{:?} {:?} {:?}\t{}", p.person, p.gender, p.numerus, rendered);
            }
        }
        Commands::Analyze { form } => {
            let form = parse_form(&form)?;
            let results = ReverseConjugator::new(config.dialect).analyze(&form);
            info!("{} candidates", results.len());
            for line in render_analysis(&results, config.format)? {
                println!("{line}");
            }
        }
        Commands::Transliterate { text, reverse } => {
            let converted = if reverse {
                to_text(&from_buckwalter(&text)?)
            } else {
                to_buckwalter(&parse_vocalized(&text)?)
            };
            println!("{converted}");
        }
        Commands::Participle {
            root,
            context,
            voice,
        } => {
            let (verb, stem) = parse_root(&root)?;
            let form = conjugator.conjugate_participle(
                &verb,
                stem,
                parse_keyword(&voice)?,
                stem1_context(&context, &config)?,
            )?;
            println!("{}", render(&form, config.format)?);
        }
        Commands::VerbalNouns { root } => {
            let (verb, stem) = parse_root(&root)?;
            for noun in conjugator.verbal_nouns(&verb, stem)? {
                println!("{}", render(&noun, config.format)?);
            }
        }
    }

    Ok(())
}

fn parse_root(args: &RootArgs) -> anyhow::Result<(VerbRoot, Stem)> {
    let root: VerbRoot = args.root.parse()?;
    let stem = Stem::new(args.stem)?;
    Ok((root, stem))
}

/// Vowels from the command line win over the configured default.
fn stem1_context(args: &ContextArgs, config: &EngineConfig) -> anyhow::Result<Option<Stem1Context>> {
    let context = match (&args.past, &args.present) {
        (Some(past), Some(present)) => Some(Stem1Context::new(parse_keyword(past)?, parse_keyword(present)?)),
        (None, None) => config.stem1_context,
        _ => anyhow::bail!("--past and --present must be given together"),
    };
    Ok(context.map(|c| if args.sound { c.sound() } else { c }))
}

fn init_logging(config: &EngineConfig) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Text => registry.with(fmt_layer).init(),
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
    }
}

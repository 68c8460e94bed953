use burrow_generator::random::DEFAULT_LENGTH;
use burrow_shortener::service::DEFAULT_MAX_ATTEMPTS;
use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

pub const EXTENSION_LENGTH_ENV: &str = "BURROW_EXTENSION_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "BURROW_MAX_ATTEMPTS";
pub const GENERATOR_ENV: &str = "BURROW_GENERATOR";
pub const SEQ_PREFIX_ENV: &str = "BURROW_SEQ_PREFIX";
pub const BASE_URL_ENV: &str = "BURROW_BASE_URL";
pub const LOG_FORMAT_ENV: &str = "BURROW_LOG_FORMAT";

pub const DEFAULT_SEQ_PREFIX: &str = "bw";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

/// Interactive URL shortener shell over an in-memory store.
///
/// Reads one command per line from stdin. State is lost on exit.
#[derive(Debug, Parser)]
#[command(name = "burrow")]
pub struct CLI {
    /// Length of generated extensions. Must be at least 1.
    #[arg(long, env = EXTENSION_LENGTH_ENV, default_value_t = DEFAULT_LENGTH)]
    pub extension_length: NonZeroUsize,

    /// Generated candidates tried before giving up.
    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Prefix for the sequential generator.
    #[arg(long, env = SEQ_PREFIX_ENV, default_value = DEFAULT_SEQ_PREFIX)]
    pub seq_prefix: String,

    /// When set, created extensions are printed as full URLs under this base.
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

//! # soundalike-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and configuration file structures,
//! and resolves the effective settings for each command.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * `soundalike.toml` profile definitions (Serde)
//! * Resolution of CLI flag -> profile -> built-in default
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O beyond reading the config file

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use soundalike_types::ReportFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "soundalike.toml";

/// Profile used when `--profile` is absent.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown profile '{0}'")]
    UnknownProfile(String),

    #[error("Invalid delimiter '{0}': expected a single character, `tab`, or `\\t`")]
    InvalidDelimiter(String),

    #[error("No input file given")]
    MissingInput,
}

/// Find names that sound alike and rank how confusable they are.
///
/// Default mode (no subcommand) analyzes a name list.
#[derive(Parser, Debug)]
#[command(name = "soundalike", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Options for the implicit `analyze` mode (when no subcommand is provided).
    #[command(flatten)]
    pub analyze: CliAnalyzeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose logging to stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (defaults to `./soundalike.toml` when present).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Configuration profile to use.
    #[arg(long, global = true)]
    pub profile: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Find and rank clusters of sound-alike names (default).
    Analyze(CliAnalyzeArgs),

    /// Show the complexity breakdown and phonetic code for individual names.
    Explain(ExplainArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliAnalyzeArgs {
    /// Name list with one `name,value` pair per line.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Show only the top N clusters (0 = all).
    #[arg(long)]
    pub top: Option<usize>,

    /// Write the report to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Field delimiter between name and value [default: ,]. Accepts `tab`.
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Score clusters on a single thread.
    #[arg(long)]
    pub serial: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Names to explain.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    /// Output format [default: md].
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UserConfig {
    pub profiles: BTreeMap<String, Profile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Profile {
    pub format: Option<ReportFormat>,
    pub top: Option<usize>,
    pub parallel: Option<bool>,
    pub delimiter: Option<String>,
}

impl UserConfig {
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }
}

/// Load the user config.
///
/// An explicit path must exist. Without one, `./soundalike.toml` is read if
/// present and ignored otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<UserConfig>, ConfigError> {
    match explicit {
        Some(path) => UserConfig::from_file(path).map(Some),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                UserConfig::from_file(path).map(Some)
            } else {
                Ok(None)
            }
        }
    }
}

/// Pick the active profile.
///
/// A profile requested by name must exist; the implicit `default` profile may
/// be absent.
pub fn resolve_profile<'a>(
    config: Option<&'a UserConfig>,
    name: Option<&str>,
) -> Result<Option<&'a Profile>, ConfigError> {
    let key = name.unwrap_or(DEFAULT_PROFILE);
    let found = config.and_then(|c| c.profiles.get(key));
    match (found, name) {
        (None, Some(requested)) => Err(ConfigError::UnknownProfile(requested.to_string())),
        (found, _) => Ok(found),
    }
}

/// Interpret a delimiter spelling.
pub fn parse_delimiter(raw: &str) -> Result<char, ConfigError> {
    if matches!(raw, "tab" | "\\t") {
        return Ok('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
    }
}

/// Fully resolved settings for the analyze command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeSettings {
    pub input: PathBuf,
    pub format: ReportFormat,
    pub top: usize,
    pub output: Option<PathBuf>,
    pub delimiter: char,
    pub parallel: bool,
}

pub fn resolve_analyze(
    cli: &CliAnalyzeArgs,
    profile: Option<&Profile>,
) -> Result<AnalyzeSettings, ConfigError> {
    let input = cli.input.clone().ok_or(ConfigError::MissingInput)?;
    let delimiter = match cli
        .delimiter
        .as_deref()
        .or_else(|| profile.and_then(|p| p.delimiter.as_deref()))
    {
        Some(raw) => parse_delimiter(raw)?,
        None => soundalike_input::DEFAULT_DELIMITER,
    };
    Ok(AnalyzeSettings {
        input,
        format: cli
            .format
            .or_else(|| profile.and_then(|p| p.format))
            .unwrap_or_default(),
        top: cli.top.or_else(|| profile.and_then(|p| p.top)).unwrap_or(0),
        output: cli.output.clone(),
        delimiter,
        parallel: !cli.serial && profile.and_then(|p| p.parallel).unwrap_or(true),
    })
}

/// Output format for `explain`: flag, then profile, then Markdown.
pub fn resolve_explain_format(args: &ExplainArgs, profile: Option<&Profile>) -> ReportFormat {
    args.format
        .or_else(|| profile.and_then(|p| p.format))
        .unwrap_or_default()
}

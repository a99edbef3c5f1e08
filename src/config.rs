//! Configuration management for the TOPSIS ranker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Settings file discovery and loading

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the per-project settings file looked up in the working directory
pub const PROJECT_SETTINGS_FILE: &str = ".topsis.toml";

/// Command-line arguments for the ranker
#[derive(Debug, Parser)]
#[command(name = "topsis")]
#[command(about = "Rank alternatives across weighted criteria with TOPSIS")]
#[command(version)]
pub struct Args {
    /// Delimited table: identifier column followed by numeric criteria
    pub input_file: PathBuf,

    /// Weights, one per criterion (e.g. "1,1,2,1,1")
    #[arg(allow_hyphen_values = true)]
    pub weights: String,

    /// Impacts, one per criterion (e.g. "+,+,-,+,-")
    #[arg(allow_hyphen_values = true)]
    pub impacts: String,

    /// Destination for the ranked table, overwritten if present
    pub result_file: PathBuf,

    /// Settings file to use instead of the discovered one
    #[arg(long, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Field delimiter of the input table
    #[arg(long, help = "Table field delimiter (overrides the settings file)")]
    pub delimiter: Option<char>,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Direction in which distances map to ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankOrder {
    /// Largest distance from the ideal vector gets rank 1
    #[default]
    FarthestFirst,
    /// Smallest distance from the ideal vector gets rank 1
    ClosestFirst,
}

/// Tunables read from a settings file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub delimiter: char,
    pub list_separator: char,
    pub benefit_token: String,
    pub cost_token: String,
    pub identifier_label: String,
    pub score_label: String,
    pub rank_label: String,
    pub rank_order: RankOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            list_separator: ',',
            benefit_token: "+".to_string(),
            cost_token: "-".to_string(),
            identifier_label: "Alternative".to_string(),
            score_label: "Topsis Score".to_string(),
            rank_label: "Rank".to_string(),
            rank_order: RankOrder::FarthestFirst,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("invalid settings file")?;
        settings.check()?;
        Ok(settings)
    }

    /// Load settings from a file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read settings file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }

    fn check(&self) -> Result<()> {
        if self.benefit_token.is_empty() || self.cost_token.is_empty() {
            bail!("benefit_token and cost_token must not be empty");
        }
        if self.benefit_token == self.cost_token {
            bail!(
                "benefit_token and cost_token must differ (both are '{}')",
                self.benefit_token
            );
        }
        for (name, c) in [
            ("delimiter", self.delimiter),
            ("list_separator", self.list_separator),
        ] {
            if c == '\n' || c == '\r' {
                bail!("{} must not be a line break", name);
            }
        }
        Ok(())
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub weights: String,
    pub impacts: String,
    pub result_file: PathBuf,
    pub settings: Settings,
    /// File the settings came from, if any
    pub settings_source: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let settings_source = match args.config {
            Some(path) => {
                if !path.is_file() {
                    bail!("settings file {} does not exist", path.display());
                }
                Some(path)
            }
            None => discover_settings_file(),
        };

        let mut settings = match &settings_source {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(delimiter) = args.delimiter {
            settings.delimiter = delimiter;
            settings.check()?;
        }

        Ok(Config {
            input_file: args.input_file,
            weights: args.weights,
            impacts: args.impacts,
            result_file: args.result_file,
            settings,
            settings_source,
            log_level: args.log_level,
        })
    }

    /// Configuration with default settings and no settings file
    pub fn new(
        input_file: impl Into<PathBuf>,
        weights: impl Into<String>,
        impacts: impl Into<String>,
        result_file: impl Into<PathBuf>,
    ) -> Self {
        Config {
            input_file: input_file.into(),
            weights: weights.into(),
            impacts: impacts.into(),
            result_file: result_file.into(),
            settings: Settings::default(),
            settings_source: None,
            log_level: "warn".to_string(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}

/// Project file first, then the user config directory
fn discover_settings_file() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_SETTINGS_FILE);
    if project.is_file() {
        return Some(project);
    }

    let user = dirs::config_dir()?.join("topsis").join("config.toml");
    if user.is_file() {
        log::debug!("using user settings file {}", user.display());
        return Some(user);
    }
    None
}

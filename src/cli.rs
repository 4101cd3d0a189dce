//! Command-line interface for hscale.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hscale_core::config::ScaleConfig;
use hscale_core::model::presets;
use hscale_core::Formatter;

/// Built-in scale lists selectable with `--preset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// billion, million, thousand
    Western,
    /// billion, crore, million, lakh, thousand
    Indian,
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name = "hscale",
    version,
    about = "Abbreviate large round numbers, e.g. 1230000 => 1.23 million"
)]
pub struct Args {
    /// Numbers to format.
    #[arg(required = true)]
    pub numbers: Vec<String>,

    /// Numbers below this value are never abbreviated. Overrides the
    /// config file's `min`.
    #[arg(short, long)]
    pub min: Option<String>,

    /// Built-in scale list, ignored when `--config` is given.
    #[arg(short, long, value_enum, default_value_t = Preset::Western)]
    pub preset: Preset,

    /// JSON file with `min` and `scales`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print one JSON object per number instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Log every formatting decision to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Build the formatter from the config file, or from the preset.
    pub fn formatter(&self) -> anyhow::Result<Formatter> {
        let config = match &self.config {
            Some(path) => ScaleConfig::load(path)
                .with_context(|| format!("loading scales from {}", path.display()))?,
            None => ScaleConfig {
                min: presets::DEFAULT_MIN.to_string(),
                scales: match self.preset {
                    Preset::Western => presets::western(),
                    Preset::Indian => presets::indian(),
                },
            },
        };
        let min = self.min.clone().unwrap_or(config.min);
        Ok(Formatter::new(min, config.scales))
    }
}

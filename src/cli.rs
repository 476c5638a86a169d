//! Command-line interface of the terminal demo.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{CardConfig, Config, ConfigError};

/// Page through cards with mouse drags, snapping to the nearest card on release.
#[derive(Parser, Debug, Default)]
#[command(name = "snap-carousel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Card titles; replaces the configured deck
    pub cards: Vec<String>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Gap between cards in columns
    #[arg(long, allow_negative_numbers = true)]
    pub spacing: Option<f32>,

    /// Visible width of neighbouring cards in columns
    #[arg(long, allow_negative_numbers = true)]
    pub peek_width: Option<f32>,

    /// Card shown first
    #[arg(long)]
    pub selection: Option<usize>,

    /// Release distance needed to commit a page step
    #[arg(long)]
    pub drag_threshold: Option<f32>,

    /// Disable the terminal bell on committed steps
    #[arg(long)]
    pub no_haptics: bool,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and layers command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if self.spacing.is_some() {
            config.carousel.spacing = self.spacing;
        }
        if self.peek_width.is_some() {
            config.carousel.peek_width = self.peek_width;
        }
        if let Some(threshold) = self.drag_threshold {
            config.carousel.drag_threshold = threshold;
        }
        if self.no_haptics {
            config.carousel.haptics = false;
        }
        if !self.cards.is_empty() {
            config.cards = self
                .cards
                .iter()
                .map(|title| CardConfig::new(title.as_str(), ""))
                .collect();
        }
    }
}

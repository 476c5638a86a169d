use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::metrics::{ClampRatios, DEFAULT_PEEK_RATIO, DEFAULT_SPACING_RATIO};
use crate::carousel::settle::DEFAULT_SETTLE;
use crate::carousel::state::DEFAULT_DRAG_THRESHOLD;
use crate::carousel::CarouselOptions;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Cards shown by the terminal demo. Empty means the built-in deck.
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

/// Carousel layout and gesture settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Gap between cards in columns. Clamped per frame, never rejected.
    #[serde(default)]
    pub spacing: Option<f32>,
    /// Visible width of the neighbouring cards in columns.
    #[serde(default)]
    pub peek_width: Option<f32>,
    /// Spacing is clamped to this fraction of the track width (default: 0.1).
    #[serde(default = "default_spacing_ratio")]
    pub spacing_ratio: f32,
    /// Peek width is clamped to this fraction of the track width (default: 0.15).
    #[serde(default = "default_peek_ratio")]
    pub peek_ratio: f32,
    /// Release distance needed to commit a page step (default: 50).
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,
    /// Duration of the settle tween in milliseconds (default: 250).
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Ring the terminal bell on every committed step (default: true).
    #[serde(default = "default_haptics")]
    pub haptics: bool,
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Card height in rows, centred in the body. Unset fills the body.
    #[serde(default)]
    pub card_height: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

fn default_spacing_ratio() -> f32 {
    DEFAULT_SPACING_RATIO
}

fn default_peek_ratio() -> f32 {
    DEFAULT_PEEK_RATIO
}

fn default_drag_threshold() -> f32 {
    DEFAULT_DRAG_THRESHOLD
}

fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE.as_millis() as u64
}

fn default_haptics() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: None,
            peek_width: None,
            spacing_ratio: default_spacing_ratio(),
            peek_ratio: default_peek_ratio(),
            drag_threshold: default_drag_threshold(),
            settle_ms: default_settle_ms(),
            haptics: default_haptics(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            card_height: None,
        }
    }
}

impl CarouselConfig {
    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            spacing: self.spacing,
            peek_width: self.peek_width,
            ratios: ClampRatios {
                spacing: self.spacing_ratio,
                peek: self.peek_ratio,
            },
            drag_threshold: self.drag_threshold,
            settle: Duration::from_millis(self.settle_ms),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl CardConfig {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

impl Config {
    /// Configured cards, or the built-in deck when none are configured.
    pub fn deck(&self) -> Vec<CardConfig> {
        if self.cards.is_empty() {
            default_deck()
        } else {
            self.cards.clone()
        }
    }
}

fn default_deck() -> Vec<CardConfig> {
    vec![
        CardConfig::new("Welcome", "Drag a card sideways and let go."),
        CardConfig::new("Snap", "Releases past the threshold move one card."),
        CardConfig::new("Peek", "Set peek_width to see the neighbours."),
        CardConfig::new("Keys", "Left/Right step, digits jump, q quits."),
        CardConfig::new("Done", "The last card blocks further steps."),
    ]
}

//! Per-render geometry of the card track.
//!
//! Everything here is derived from the measured container width and the
//! configured spacing / peek width. Nothing is persisted between frames.

/// Largest spacing, as a fraction of the container width.
pub const DEFAULT_SPACING_RATIO: f32 = 0.1;
/// Largest peek width, as a fraction of the container width.
pub const DEFAULT_PEEK_RATIO: f32 = 0.15;

/// Symmetric clamp bounds applied to the configured spacing and peek width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampRatios {
    pub spacing: f32,
    pub peek: f32,
}

impl ClampRatios {
    /// True when saturated spacing and peek still leave every card, and the
    /// stride, with a positive width at any container width.
    pub fn keeps_cards_visible(&self) -> bool {
        2.0 * (self.spacing.max(0.0) + self.peek.max(0.0)) < 1.0
    }
}

impl Default for ClampRatios {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING_RATIO,
            peek: DEFAULT_PEEK_RATIO,
        }
    }
}

/// Where the track sits, independent of the container width.
///
/// `pages` is a fractional card index and `drag` a pointer translation in
/// columns. Only [`LayoutMetrics::position_offset`] turns it into columns,
/// so the same position can be drawn at any width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackPosition {
    pub pages: f32,
    pub drag: f32,
}

impl TrackPosition {
    /// The committed card at rest.
    pub fn at(index: usize) -> Self {
        Self {
            pages: index as f32,
            drag: 0.0,
        }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            pages: self.pages + (to.pages - self.pages) * t,
            drag: self.drag + (to.drag - self.drag) * t,
        }
    }
}

/// Effective layout values for one container width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutMetrics {
    pub track_width: f32,
    pub spacing: f32,
    pub peek_width: f32,
}

impl LayoutMetrics {
    /// Clamps the configured values into `[-ratio·W, ratio·W]`.
    ///
    /// Missing values count as 0. Out-of-range values are saturated,
    /// never rejected.
    pub fn measure(
        track_width: f32,
        spacing: Option<f32>,
        peek_width: Option<f32>,
        ratios: ClampRatios,
    ) -> Self {
        let track_width = track_width.max(0.0);
        Self {
            track_width,
            spacing: clamp_to_ratio(spacing, track_width, ratios.spacing),
            peek_width: clamp_to_ratio(peek_width, track_width, ratios.peek),
        }
    }

    /// Distance the track travels for one committed page.
    pub fn stride(&self) -> f32 {
        self.track_width - 2.0 * self.peek_width - self.spacing
    }

    /// Edge cards peek on one side only, so they are one peek wider.
    pub fn card_width(&self, index: usize, count: usize) -> f32 {
        let base = self.track_width - 2.0 * self.spacing;
        if is_edge(index, count) {
            base - self.peek_width
        } else {
            base - 2.0 * self.peek_width
        }
    }

    /// Leading and trailing padding around a card.
    pub fn card_padding(&self, index: usize, count: usize) -> (f32, f32) {
        let half = self.spacing / 2.0;
        let leading = if index == 0 { half * 2.0 } else { half };
        let trailing = if index + 1 == count { half * 2.0 } else { half };
        (leading, trailing)
    }

    /// Width of the slot a card occupies, padding included.
    pub fn slot_width(&self, index: usize, count: usize) -> f32 {
        let (leading, trailing) = self.card_padding(index, count);
        leading + self.card_width(index, count) + trailing
    }

    /// Left edge of a card's content, in track coordinates.
    pub fn card_origin(&self, index: usize, count: usize) -> f32 {
        let preceding: f32 = (0..index).map(|i| self.slot_width(i, count)).sum();
        preceding + self.card_padding(index, count).0
    }

    /// Horizontal translation of the whole track.
    pub fn track_offset(&self, index: usize, drag_delta: f32) -> f32 {
        self.position_offset(TrackPosition {
            pages: index as f32,
            drag: drag_delta,
        })
    }

    pub fn position_offset(&self, position: TrackPosition) -> f32 {
        -position.pages * self.stride() + position.drag
    }
}

fn is_edge(index: usize, count: usize) -> bool {
    index == 0 || index + 1 == count
}

fn clamp_to_ratio(value: Option<f32>, width: f32, ratio: f32) -> f32 {
    let value = value.filter(|v| !v.is_nan()).unwrap_or(0.0);
    let limit = width * ratio.max(0.0);
    let limit = if limit.is_nan() { 0.0 } else { limit };
    value.clamp(-limit, limit)
}

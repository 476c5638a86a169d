//! Ratatui widget that draws the card track.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::carousel::controller::Carousel;
use crate::carousel::metrics::{ClampRatios, LayoutMetrics, TrackPosition};

/// What a card renderer knows about the slot it is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardContext {
    pub index: usize,
    pub count: usize,
    /// True for the committed card.
    pub selected: bool,
    /// Full card width in cells, including any part scrolled off screen.
    pub width: u16,
    pub metrics: LayoutMetrics,
}

type RenderItem<'a, W> = Box<dyn Fn(usize, &CardContext) -> W + 'a>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    Rest,
    Position(TrackPosition),
    Offset(f32),
}

/// A horizontal row of cards translated by the carousel offset.
///
/// Each card is rendered at its full width into a scratch buffer and only
/// the columns inside the target area are copied, so cards sliding past
/// an edge are clipped instead of squeezed.
pub struct SnapCarousel<'a, W> {
    count: usize,
    render_item: RenderItem<'a, W>,
    spacing: Option<f32>,
    peek_width: Option<f32>,
    ratios: ClampRatios,
    selected: usize,
    placement: Placement,
}

impl<'a, W: Widget> SnapCarousel<'a, W> {
    pub fn new<T>(items: &'a [T], render_item: impl Fn(&T, &CardContext) -> W + 'a) -> Self {
        Self::indexed(items.len(), move |index, ctx| render_item(&items[index], ctx))
    }

    /// Index-only variant: the renderer receives the card position.
    pub fn indexed(count: usize, render_item: impl Fn(usize, &CardContext) -> W + 'a) -> Self {
        Self {
            count,
            render_item: Box::new(render_item),
            spacing: None,
            peek_width: None,
            ratios: ClampRatios::default(),
            selected: 0,
            placement: Placement::Rest,
        }
    }

    pub fn spacing(mut self, spacing: Option<f32>) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn peek_width(mut self, peek_width: Option<f32>) -> Self {
        self.peek_width = peek_width;
        self
    }

    pub fn ratios(mut self, ratios: ClampRatios) -> Self {
        self.ratios = ratios;
        self
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Overrides the track translation in columns. Without it the selected
    /// card is drawn at rest.
    pub fn offset(mut self, offset: f32) -> Self {
        self.placement = Placement::Offset(offset);
        self
    }

    /// Draws the track at `position`, measured against the render area.
    pub fn position(mut self, position: TrackPosition) -> Self {
        self.placement = Placement::Position(position);
        self
    }

    /// Takes layout options, selection and the live position from a
    /// controller. The width comes from the render area, not from the
    /// controller's last `resize`.
    pub fn state(self, carousel: &Carousel, now: Instant) -> Self {
        let options = carousel.options();
        self.spacing(options.spacing)
            .peek_width(options.peek_width)
            .ratios(options.ratios)
            .selected(carousel.index())
            .position(carousel.visual_position(now))
    }
}

impl<W: Widget> Widget for SnapCarousel<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.count == 0 {
            return;
        }
        let count = self.count;
        let selected = self.selected.min(count - 1);
        let metrics =
            LayoutMetrics::measure(area.width as f32, self.spacing, self.peek_width, self.ratios);
        let offset = match self.placement {
            Placement::Rest => metrics.track_offset(selected, 0.0),
            Placement::Position(position) => metrics.position_offset(position),
            Placement::Offset(offset) => offset,
        };
        let area_width = area.width as f32;

        let mut cursor = 0.0;
        for index in 0..count {
            let (leading, _) = metrics.card_padding(index, count);
            let left = (cursor + leading + offset).round();
            let right = (cursor + leading + metrics.card_width(index, count) + offset).round();
            cursor += metrics.slot_width(index, count);

            if left >= area_width {
                break;
            }
            if right <= 0.0 || right <= left {
                continue;
            }

            let ctx = CardContext {
                index,
                count,
                selected: index == selected,
                width: (right - left) as u16,
                metrics,
            };
            let mut scratch = Buffer::empty(Rect::new(0, 0, ctx.width, area.height));
            (self.render_item)(index, &ctx).render(scratch.area, &mut scratch);

            let first = left.max(0.0) as u16;
            let last = right.min(area_width) as u16;
            for col in first..last {
                let src_x = (col as f32 - left) as u16;
                for row in 0..area.height {
                    let src = scratch.cell((src_x, row));
                    let dst = buf.cell_mut((area.x + col, area.y + row));
                    if let (Some(src), Some(dst)) = (src, dst) {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

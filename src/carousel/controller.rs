//! Owner of the carousel state and its side effects.
//!
//! The reducer decides transitions; this type performs what follows from
//! them: the feedback pulse, the outward selection write, and the settle
//! tween between the position drawn before a change and the one after it.

use std::time::{Duration, Instant};

use crate::carousel::feedback::{Feedback, NoFeedback};
use crate::carousel::intent::CarouselIntent;
use crate::carousel::metrics::{ClampRatios, LayoutMetrics, TrackPosition};
use crate::carousel::reducer::CarouselReducer;
use crate::carousel::settle::{SettleAnimation, DEFAULT_SETTLE};
use crate::carousel::state::{CarouselState, DEFAULT_DRAG_THRESHOLD};
use crate::ui::mvi::Reducer;

/// Outward half of the two-way selection binding.
pub type SelectionCallback = Box<dyn FnMut(usize)>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub spacing: Option<f32>,
    pub peek_width: Option<f32>,
    pub ratios: ClampRatios,
    pub drag_threshold: f32,
    pub settle: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            spacing: None,
            peek_width: None,
            ratios: ClampRatios::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            settle: DEFAULT_SETTLE,
        }
    }
}

/// A committed page change caused by a gesture or a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub from: usize,
    pub to: usize,
}

pub struct Carousel {
    state: CarouselState,
    options: CarouselOptions,
    metrics: LayoutMetrics,
    settle: SettleAnimation,
    feedback: Box<dyn Feedback>,
    on_commit: Option<SelectionCallback>,
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("state", &self.state)
            .field("metrics", &self.metrics)
            .field("settle", &self.settle)
            .field("bound", &self.on_commit.is_some())
            .finish()
    }
}

impl Carousel {
    pub fn new(count: usize, options: CarouselOptions) -> Self {
        Self {
            state: CarouselState::new(count).with_drag_threshold(options.drag_threshold),
            options,
            metrics: LayoutMetrics::default(),
            settle: SettleAnimation::new(options.settle),
            feedback: Box::new(NoFeedback),
            on_commit: None,
        }
    }

    pub fn with_feedback(mut self, feedback: impl Feedback + 'static) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Binds the selection: adopts `initial` silently, then reports every
    /// later change of the committed index through `on_commit`.
    pub fn with_selection(
        mut self,
        initial: usize,
        on_commit: impl FnMut(usize) + 'static,
    ) -> Self {
        self.mount(initial);
        self.on_commit = Some(Box::new(on_commit));
        self
    }

    /// Seeds the committed index before the first render.
    ///
    /// Neither the selection callback nor the feedback pulse fire. An
    /// out-of-range value is clamped with a warning.
    pub fn mount(&mut self, initial: usize) {
        let last = self.state.offset.last_index();
        if initial > last {
            tracing::warn!(initial, last, "initial selection out of range, clamping");
        }
        self.state = CarouselReducer::reduce(
            std::mem::take(&mut self.state),
            CarouselIntent::SetIndex { index: initial },
        );
        self.settle.cancel();
        tracing::info!(index = self.state.index(), "carousel mounted");
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn count(&self) -> usize {
        self.state.count()
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Re-measures the track for a new container width.
    ///
    /// A running settle keeps going: its endpoints are card positions, so
    /// it lands on the committed card at the new width.
    pub fn resize(&mut self, track_width: f32) -> LayoutMetrics {
        self.metrics = LayoutMetrics::measure(
            track_width,
            self.options.spacing,
            self.options.peek_width,
            self.options.ratios,
        );
        self.metrics
    }

    pub fn dispatch(&mut self, intent: CarouselIntent) -> Option<Commit> {
        self.dispatch_at(intent, Instant::now())
    }

    /// Runs one intent through the reducer as of `now`.
    ///
    /// Returns the commit when the index moved because of a gesture or a
    /// step. Inward writes are not echoed; they are only reported back when
    /// the carousel had to clamp them.
    pub fn dispatch_at(&mut self, intent: CarouselIntent, now: Instant) -> Option<Commit> {
        let before = self.visual_position(now);
        let before_index = self.state.index();
        let was_dragging = self.state.is_dragging();

        self.state = CarouselReducer::reduce(std::mem::take(&mut self.state), intent);

        let after_index = self.state.index();
        if self.state.is_dragging() {
            if !was_dragging {
                tracing::debug!(index = after_index, "drag started");
            }
            self.settle.cancel();
        } else if was_dragging || before_index != after_index {
            self.settle.start(before, TrackPosition::at(after_index), now);
        }

        if !intent.propagates_outward() {
            let owner_value = match intent {
                CarouselIntent::SetIndex { index } => index,
                _ => before_index,
            };
            if after_index != owner_value {
                tracing::debug!(owner_value, index = after_index, "selection clamped");
                self.write_selection(after_index);
            } else if before_index != after_index {
                tracing::debug!(from = before_index, to = after_index, "index set externally");
            }
            return None;
        }
        if before_index == after_index {
            if was_dragging && !self.state.is_dragging() {
                tracing::debug!(index = after_index, "drag released without commit");
            }
            return None;
        }

        tracing::info!(from = before_index, to = after_index, "page committed");
        self.feedback.pulse();
        self.write_selection(after_index);
        Some(Commit {
            from: before_index,
            to: after_index,
        })
    }

    fn write_selection(&mut self, index: usize) {
        if let Some(on_commit) = self.on_commit.as_mut() {
            on_commit(index);
        }
    }

    /// Inward half of the selection binding.
    pub fn set_index(&mut self, index: usize) {
        self.dispatch(CarouselIntent::SetIndex { index });
    }

    pub fn set_item_count(&mut self, count: usize) {
        self.dispatch(CarouselIntent::SetItemCount { count });
    }

    /// Track position at `now`: live while dragging, eased while settling.
    pub fn visual_position(&self, now: Instant) -> TrackPosition {
        if self.state.is_dragging() {
            return TrackPosition {
                pages: self.state.index() as f32,
                drag: self.state.drag_delta(),
            };
        }
        self.settle
            .sample(now)
            .unwrap_or_else(|| TrackPosition::at(self.state.index()))
    }

    /// [`Self::visual_position`] in columns, against the last measured width.
    pub fn visual_offset(&self, now: Instant) -> f32 {
        self.metrics.position_offset(self.visual_position(now))
    }

    pub fn is_settling(&self, now: Instant) -> bool {
        self.settle.is_active(now)
    }
}

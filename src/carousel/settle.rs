//! Time-based tween that eases the track onto its committed card.
//!
//! Endpoints are [`TrackPosition`]s rather than column offsets, so a
//! resize mid-tween keeps easing towards the right place.

use std::time::{Duration, Instant};

use crate::carousel::metrics::TrackPosition;

pub const DEFAULT_SETTLE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: TrackPosition,
    to: TrackPosition,
    started_at: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettleAnimation {
    tween: Option<Tween>,
    duration: Duration,
}

impl Default for SettleAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE)
    }
}

impl SettleAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            tween: None,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts easing from `from` towards `to`.
    ///
    /// A zero duration, or equal endpoints, settles immediately.
    pub fn start(&mut self, from: TrackPosition, to: TrackPosition, now: Instant) {
        self.tween = if self.duration.is_zero() || from == to {
            None
        } else {
            Some(Tween {
                from,
                to,
                started_at: now,
            })
        };
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.tween
            .is_some_and(|tween| now.saturating_duration_since(tween.started_at) < self.duration)
    }

    /// Position to draw at `now`, or `None` when no tween is running.
    ///
    /// Once the duration has elapsed this returns the target exactly, so a
    /// settled frame is indistinguishable from one that never animated.
    pub fn sample(&self, now: Instant) -> Option<TrackPosition> {
        let tween = self.tween?;
        let elapsed = now.saturating_duration_since(tween.started_at);
        if elapsed >= self.duration {
            return None;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(tween.from.lerp(tween.to, ease_out_cubic(t)))
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

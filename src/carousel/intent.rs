use crate::ui::mvi::Intent;

/// Inputs to the carousel state machine.
///
/// Pointer coordinates are horizontal positions in layout units; only the
/// difference from the pointer-down position matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselIntent {
    PointerDown { x: f32 },
    /// Ignored unless a drag is in progress.
    PointerMoved { x: f32 },
    /// Ends the drag and applies the commit rule.
    PointerReleased { x: f32 },
    /// Ends the drag without committing, e.g. when the pointer leaves the track.
    PointerCancelled,
    StepNext,
    StepPrevious,
    /// Inward write from the owner of the selection binding.
    SetIndex { index: usize },
    SetItemCount { count: usize },
}

impl Intent for CarouselIntent {}

impl CarouselIntent {
    /// Intents whose index changes are reported back through the binding.
    pub fn propagates_outward(&self) -> bool {
        !matches!(self, Self::SetIndex { .. } | Self::SetItemCount { .. })
    }
}

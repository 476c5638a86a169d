use crate::carousel::offset::PageOffset;
use crate::ui::mvi::UiState;

/// Release distance past which a drag commits a page step.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position at pointer-down.
        origin: f32,
        /// Live translation, overwritten by every pointer move.
        delta: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub offset: PageOffset,
    pub gesture: GestureState,
    pub drag_threshold: f32,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            offset: PageOffset::default(),
            gesture: GestureState::Idle,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self {
            offset: PageOffset::new(count),
            ..Self::default()
        }
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn index(&self) -> usize {
        self.offset.index()
    }

    pub fn count(&self) -> usize {
        self.offset.count()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, GestureState::Dragging { .. })
    }

    /// Live drag delta; 0 whenever no gesture is active.
    pub fn drag_delta(&self) -> f32 {
        match self.gesture {
            GestureState::Dragging { delta, .. } => delta,
            GestureState::Idle => 0.0,
        }
    }
}

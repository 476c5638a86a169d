use crate::carousel::intent::CarouselIntent;
use crate::carousel::state::{CarouselState, GestureState};
use crate::ui::mvi::Reducer;

pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::PointerDown { x } => {
                state.gesture = GestureState::Dragging {
                    origin: x,
                    delta: 0.0,
                };
            }
            CarouselIntent::PointerMoved { x } => {
                if let GestureState::Dragging { origin, .. } = state.gesture {
                    state.gesture = GestureState::Dragging {
                        origin,
                        delta: x - origin,
                    };
                }
            }
            CarouselIntent::PointerReleased { x } => {
                if let GestureState::Dragging { origin, .. } = state.gesture {
                    let translation = x - origin;
                    let threshold = state.drag_threshold;
                    if translation > threshold && !state.offset.is_first() {
                        state.offset.step_previous();
                    } else if translation < -threshold && !state.offset.is_last() {
                        state.offset.step_next();
                    }
                    // Whatever the outcome the live delta is discarded;
                    // the committed index alone drives the next frame.
                    state.gesture = GestureState::Idle;
                }
            }
            CarouselIntent::PointerCancelled => {
                state.gesture = GestureState::Idle;
            }
            CarouselIntent::StepNext => {
                state.offset.step_next();
            }
            CarouselIntent::StepPrevious => {
                state.offset.step_previous();
            }
            CarouselIntent::SetIndex { index } => {
                state.offset.sync_from_external(index);
            }
            CarouselIntent::SetItemCount { count } => {
                state.offset.set_count(count);
            }
        }
        state
    }
}

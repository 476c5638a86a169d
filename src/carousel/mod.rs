//! The snap carousel: a committed page index, a drag gesture that commits
//! at most one step per release, and a widget that draws the card track.

pub mod controller;
pub mod feedback;
pub mod intent;
pub mod metrics;
pub mod offset;
pub mod reducer;
pub mod settle;
pub mod state;
pub mod widget;

pub use controller::{Carousel, CarouselOptions, Commit, SelectionCallback};
pub use feedback::{Feedback, NoFeedback, PulseCounter, TerminalBell};
pub use intent::CarouselIntent;
pub use metrics::{ClampRatios, LayoutMetrics, TrackPosition};
pub use offset::PageOffset;
pub use reducer::CarouselReducer;
pub use settle::SettleAnimation;
pub use state::{CarouselState, GestureState};
pub use widget::{CardContext, SnapCarousel};

//! Marker trait for intents fed into a reducer.

/// An input to a [`Reducer`](super::Reducer).
///
/// Carousel intents cover pointer gestures, keyboard steps and writes
/// coming from whoever owns the selection binding.
pub trait Intent: Send + 'static {}

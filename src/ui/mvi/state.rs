//! Marker trait for reducer-owned state.

/// State values are cheap to clone, comparable so callers can detect
/// changes, and have a sensible empty default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

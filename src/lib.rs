//! A paginated, drag-driven snap carousel for terminal UIs.
//!
//! The [`carousel`] module holds the widget and its state machine; [`ui`]
//! hosts it in a full-screen terminal demo.

pub mod carousel;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;

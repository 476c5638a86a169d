pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{CardConfig, CarouselConfig, Config, UiConfig};

//! Decoration state and rules, independent of the browser

pub mod config;
pub mod dom;
pub mod drawer;
pub mod error;
pub mod rain;
pub mod reveal;
pub mod scroll;
pub mod sprinkles;
pub mod task;
pub mod theme;
pub mod typewriter;

pub use config::{DecorConfig, TypewriterMode};
pub use error::{DecorError, Result};
pub use task::StopSignal;
pub use theme::ThemeMode;

//! Shared building blocks for `dotquad`: run configuration, the presenter
//! port the session talks to, and the status logging macros.

pub mod config;
pub mod log;
pub mod ui;

#[doc(hidden)]
pub use tracing;

//! Observability for the page models
//!
//! Structured logging setup shared by the CLI and embedders.

pub mod logging;

// Re-export for convenience
pub use logging::{init_default_logging, init_logging, LogFormat};

//! Testing utilities
//!
//! Recording mock implementations of the browser collaborator traits.

pub mod mocks;

pub use mocks::{MockDownloadsProxy, MockLocalDataProxy, MockSiteSettingsProxy};

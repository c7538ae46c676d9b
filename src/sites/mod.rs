//! Site-settings site-entry component model
//!
//! Ordering and representative-origin selection for origin lists, plus
//! the entry state machine that replaces the component's DOM-coupled
//! state with explicit events and effects.

pub mod entry;
pub mod representative;
pub mod sort;

pub use entry::{Route, SiteAction, SiteEntryEffect, SiteEntryEvent, SiteEntryModel};
pub use representative::representative_origin;
pub use sort::{sorted_origins, SortMethod};

//! Headless WebUI page models
//!
//! Models two browser WebUI surfaces without a DOM: the site-settings
//! site-entry component (origins grouped under a registrable domain) and
//! the downloads manager page.
//!
//! # Overview
//!
//! This crate provides:
//! - Snapshot data types for site groups, origins, and download items
//! - Stable origin ordering and representative-origin selection
//! - Explicit page state machines driven by tagged events and commands
//! - Async proxy traits for the browser collaborators, with recording
//!   mocks for tests
//!
//! # Quick Start
//!
//! ```rust
//! use webui_pages::model::{OriginRecord, SiteGroup};
//! use webui_pages::sites::{representative_origin, sorted_origins, SortMethod};
//!
//! let group = SiteGroup::new(
//!     "example.com",
//!     vec![
//!         OriginRecord::new("http://example.com"),
//!         OriginRecord::new("https://www.example.com"),
//!         OriginRecord::new("https://login.example.com"),
//!     ],
//! );
//!
//! let by_name = sorted_origins(&group.origins, SortMethod::Name);
//! assert_eq!(by_name[0].site_representation(), "example.com");
//!
//! // The www. variant of the registrable domain fronts the group.
//! let favicon = representative_origin(&group).unwrap();
//! assert_eq!(favicon.origin, "https://www.example.com");
//! ```

pub mod config;
pub mod downloads;
pub mod error;
pub mod model;
pub mod observability;
pub mod proxy;
pub mod sites;
pub mod strings;
pub mod testing;

pub use config::{ConfigError, PageConfig};
pub use downloads::{Command, DownloadsPage};
pub use error::{PageError, PageResult};
pub use model::{DownloadItem, OriginRecord, SiteGroup};
pub use proxy::{DownloadsProxy, LocalDataProxy, PageCallback, SiteSettingsProxy};
pub use sites::{representative_origin, sorted_origins, SiteEntryModel, SortMethod};
pub use strings::LoadTimeData;

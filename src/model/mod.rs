//! Snapshot data model shared by the page models
//!
//! These types mirror what the browser backend hands the pages: site
//! groups with their member origins, and download items. Snapshots are
//! held immutably for one display cycle and replaced wholesale on update.

pub mod download;
pub mod origin;
pub mod site_group;

pub use download::{DangerType, DownloadItem, DownloadState};
pub use origin::OriginRecord;
pub use site_group::SiteGroup;

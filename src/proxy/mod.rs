//! Browser collaborator seams
//!
//! The page models talk to the browser process through these traits so
//! the real backend can be swapped for recording mocks in tests. The
//! backend pushes list changes to the downloads page as [`PageCallback`]
//! values, typically over a `tokio::sync::mpsc` channel.

use async_trait::async_trait;

use crate::error::PageResult;
use crate::model::DownloadItem;

pub mod local;

pub use local::LocalBackend;

/// Site-settings backend surface consumed by the site entry
#[async_trait]
pub trait SiteSettingsProxy: Send + Sync {
    /// Formats a byte count for display. The formatting contract belongs
    /// to the browser; implementations in this crate render "<n> B"
    /// without unit conversion.
    async fn get_formatted_bytes(&self, num_bytes: u64) -> PageResult<String>;
}

/// Local-data backend surface for cookie counts
#[async_trait]
pub trait LocalDataProxy: Send + Sync {
    /// Plural-aware "<n> cookies" string for the entry's cookie label
    async fn get_num_cookies_string(&self, num_cookies: u32) -> PageResult<String>;
}

/// Downloads backend surface consumed by the downloads page
#[async_trait]
pub trait DownloadsProxy: Send + Sync {
    /// Removes one download from the list; restorable via [`undo`](Self::undo)
    /// unless the item was dangerous or insecure
    async fn remove(&self, id: u32) -> PageResult<()>;

    /// Restores the most recent removal
    async fn undo(&self) -> PageResult<()>;

    /// Removes every clearable download
    async fn clear_all(&self) -> PageResult<()>;
}

/// Backend-to-page notifications for the downloads list
///
/// Splice semantics match the list they drive: `index` addresses the
/// current list content at delivery time.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCallback {
    InsertItems {
        index: usize,
        items: Vec<DownloadItem>,
    },
    UpdateItem {
        index: usize,
        item: DownloadItem,
    },
    RemoveItem {
        index: usize,
    },
}

//! In-process backend used by the CLI and demos
//!
//! Serves download data from memory and keeps an undo stack so removals
//! can be restored, mirroring the backend contract the pages expect
//! from the browser process.

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

use crate::error::{PageError, PageResult};
use crate::model::DownloadItem;
use crate::proxy::{DownloadsProxy, LocalDataProxy, PageCallback, SiteSettingsProxy};

/// Snapshot-backed stand-in for the browser process
#[derive(Debug, Default)]
pub struct LocalBackend {
    items: Mutex<Vec<DownloadItem>>,
    undo_stack: Mutex<Vec<UndoEntry>>,
    page_sender: Mutex<Option<mpsc::Sender<PageCallback>>>,
}

#[derive(Debug, Clone)]
enum UndoEntry {
    Removed {
        index: usize,
        item: DownloadItem,
    },
    Cleared {
        /// Original positions paired with the removed items, ascending
        items: Vec<(usize, DownloadItem)>,
    },
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend preloaded with download items
    pub fn with_downloads(items: Vec<DownloadItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Default::default()
        }
    }

    /// Registers the channel backend notifications are delivered on
    pub async fn set_page_sender(&self, sender: mpsc::Sender<PageCallback>) {
        *self.page_sender.lock().await = Some(sender);
    }

    /// Current download list, in backend order
    pub async fn downloads(&self) -> Vec<DownloadItem> {
        self.items.lock().await.clone()
    }

    async fn notify(&self, callback: PageCallback) {
        if let Some(sender) = self.page_sender.lock().await.as_ref() {
            // A closed page just stops listening; the backend keeps going.
            let _ = sender.send(callback).await;
        }
    }
}

#[async_trait]
impl SiteSettingsProxy for LocalBackend {
    async fn get_formatted_bytes(&self, num_bytes: u64) -> PageResult<String> {
        Ok(format!("{num_bytes} B"))
    }
}

#[async_trait]
impl LocalDataProxy for LocalBackend {
    async fn get_num_cookies_string(&self, num_cookies: u32) -> PageResult<String> {
        if num_cookies == 1 {
            Ok("1 cookie".to_owned())
        } else {
            Ok(format!("{num_cookies} cookies"))
        }
    }
}

#[async_trait]
impl DownloadsProxy for LocalBackend {
    async fn remove(&self, id: u32) -> PageResult<()> {
        let removed = {
            let mut items = self.items.lock().await;
            let index = items
                .iter()
                .position(|item| item.id == id)
                .ok_or_else(|| PageError::proxy(format!("no download with id {id}")))?;
            (index, items.remove(index))
        };
        debug!(id, index = removed.0, "download removed");
        self.undo_stack.lock().await.push(UndoEntry::Removed {
            index: removed.0,
            item: removed.1,
        });
        self.notify(PageCallback::RemoveItem { index: removed.0 }).await;
        Ok(())
    }

    async fn undo(&self) -> PageResult<()> {
        let entry = self.undo_stack.lock().await.pop();
        match entry {
            Some(UndoEntry::Removed { index, item }) => {
                let index = {
                    let mut items = self.items.lock().await;
                    let index = index.min(items.len());
                    items.insert(index, item.clone());
                    index
                };
                self.notify(PageCallback::InsertItems {
                    index,
                    items: vec![item],
                })
                .await;
                Ok(())
            }
            Some(UndoEntry::Cleared { items: cleared }) => {
                for (index, item) in cleared {
                    let index = {
                        let mut items = self.items.lock().await;
                        let index = index.min(items.len());
                        items.insert(index, item.clone());
                        index
                    };
                    self.notify(PageCallback::InsertItems {
                        index,
                        items: vec![item],
                    })
                    .await;
                }
                Ok(())
            }
            None => Ok(()),
        }
    }

    async fn clear_all(&self) -> PageResult<()> {
        let mut cleared = Vec::new();
        let mut notifications = Vec::new();
        {
            let mut items = self.items.lock().await;
            let mut original_index = 0;
            let mut current_index = 0;
            while current_index < items.len() {
                if items[current_index].is_clearable() {
                    cleared.push((original_index, items.remove(current_index)));
                    notifications.push(PageCallback::RemoveItem {
                        index: current_index,
                    });
                } else {
                    current_index += 1;
                }
                original_index += 1;
            }
        }
        if cleared.is_empty() {
            return Ok(());
        }
        debug!(count = cleared.len(), "downloads cleared");
        self.undo_stack
            .lock()
            .await
            .push(UndoEntry::Cleared { items: cleared });
        for notification in notifications {
            self.notify(notification).await;
        }
        Ok(())
    }
}

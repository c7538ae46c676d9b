//! Mock implementations for testing
//!
//! Recording stand-ins for the browser collaborators, so page behavior
//! can be asserted without a browser process. Each mock records the
//! arguments of every call and can be constructed failing to exercise
//! error paths.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{PageError, PageResult};
use crate::proxy::{DownloadsProxy, LocalDataProxy, SiteSettingsProxy};

/// Mock site-settings proxy recording byte-format requests
#[derive(Debug, Default)]
pub struct MockSiteSettingsProxy {
    pub formatted_bytes_calls: Arc<Mutex<Vec<u64>>>,
    pub should_fail: bool,
}

impl MockSiteSettingsProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Byte counts passed to `get_formatted_bytes`, in call order
    pub async fn get_formatted_bytes_calls(&self) -> Vec<u64> {
        self.formatted_bytes_calls.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.formatted_bytes_calls.lock().await.clear();
    }
}

#[async_trait]
impl SiteSettingsProxy for MockSiteSettingsProxy {
    async fn get_formatted_bytes(&self, num_bytes: u64) -> PageResult<String> {
        if self.should_fail {
            return Err(PageError::proxy("mock formatted-bytes failure"));
        }
        self.formatted_bytes_calls.lock().await.push(num_bytes);
        Ok(format!("{num_bytes} B"))
    }
}

/// Mock local-data proxy recording cookie-string requests
#[derive(Debug, Default)]
pub struct MockLocalDataProxy {
    pub num_cookies_calls: Arc<Mutex<Vec<u32>>>,
    pub should_fail: bool,
}

impl MockLocalDataProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Cookie counts passed to `get_num_cookies_string`, in call order
    pub async fn get_num_cookies_calls(&self) -> Vec<u32> {
        self.num_cookies_calls.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.num_cookies_calls.lock().await.clear();
    }
}

#[async_trait]
impl LocalDataProxy for MockLocalDataProxy {
    async fn get_num_cookies_string(&self, num_cookies: u32) -> PageResult<String> {
        if self.should_fail {
            return Err(PageError::proxy("mock cookie-string failure"));
        }
        self.num_cookies_calls.lock().await.push(num_cookies);
        if num_cookies == 1 {
            Ok("1 cookie".to_owned())
        } else {
            Ok(format!("{num_cookies} cookies"))
        }
    }
}

/// Mock downloads proxy recording remove/undo/clear-all calls
#[derive(Debug, Default)]
pub struct MockDownloadsProxy {
    pub removed_ids: Arc<Mutex<Vec<u32>>>,
    pub undo_calls: Arc<Mutex<usize>>,
    pub clear_all_calls: Arc<Mutex<usize>>,
    pub should_fail: bool,
}

impl MockDownloadsProxy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Download ids passed to `remove`, in call order
    pub async fn get_removed_ids(&self) -> Vec<u32> {
        self.removed_ids.lock().await.clone()
    }

    pub async fn undo_call_count(&self) -> usize {
        *self.undo_calls.lock().await
    }

    pub async fn clear_all_call_count(&self) -> usize {
        *self.clear_all_calls.lock().await
    }

    pub async fn clear_history(&self) {
        self.removed_ids.lock().await.clear();
        *self.undo_calls.lock().await = 0;
        *self.clear_all_calls.lock().await = 0;
    }
}

#[async_trait]
impl DownloadsProxy for MockDownloadsProxy {
    async fn remove(&self, id: u32) -> PageResult<()> {
        if self.should_fail {
            return Err(PageError::proxy("mock remove failure"));
        }
        self.removed_ids.lock().await.push(id);
        Ok(())
    }

    async fn undo(&self) -> PageResult<()> {
        if self.should_fail {
            return Err(PageError::proxy("mock undo failure"));
        }
        *self.undo_calls.lock().await += 1;
        Ok(())
    }

    async fn clear_all(&self) -> PageResult<()> {
        if self.should_fail {
            return Err(PageError::proxy("mock clear-all failure"));
        }
        *self.clear_all_calls.lock().await += 1;
        Ok(())
    }
}

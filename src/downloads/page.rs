//! Downloads page model
//!
//! One dispatcher for user commands, one entry point for backend
//! callbacks. The page owns the list and the toast; download actions go
//! out through the [`DownloadsProxy`] seam.

use std::sync::Arc;

use tracing::{debug, info};

use crate::downloads::list::DownloadsList;
use crate::downloads::toast::ToastManager;
use crate::error::{PageError, PageResult};
use crate::model::DownloadItem;
use crate::proxy::{DownloadsProxy, PageCallback};
use crate::strings::LoadTimeData;

/// User commands dispatched through [`DownloadsPage::handle_command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ClearAll,
    Undo,
    RemoveItem { index: usize },
    PageClick { inside_toast: bool },
}

/// Headless model of the downloads manager page
pub struct DownloadsPage {
    list: DownloadsList,
    toast: ToastManager,
    strings: LoadTimeData,
    proxy: Arc<dyn DownloadsProxy>,
}

impl DownloadsPage {
    /// Create a page with the default load-time string table
    pub fn new(proxy: Arc<dyn DownloadsProxy>) -> Self {
        Self::with_strings(proxy, LoadTimeData::downloads_defaults())
    }

    /// Create a page with a caller-supplied string table
    pub fn with_strings(proxy: Arc<dyn DownloadsProxy>, strings: LoadTimeData) -> Self {
        Self {
            list: DownloadsList::new(),
            toast: ToastManager::new(),
            strings,
            proxy,
        }
    }

    pub fn list(&self) -> &DownloadsList {
        &self.list
    }

    pub fn toast(&self) -> &ToastManager {
        &self.toast
    }

    /// Test hook: direct access to the toast, mirroring toast-level
    /// interactions the page does not mediate
    pub fn toast_mut(&mut self) -> &mut ToastManager {
        &mut self.toast
    }

    pub fn strings(&self) -> &LoadTimeData {
        &self.strings
    }

    /// The list is hidden whenever it has no items
    pub fn is_list_hidden(&self) -> bool {
        self.list.is_empty()
    }

    pub fn has_clearable_downloads(&self) -> bool {
        self.list.has_clearable_downloads()
    }

    /// Applies a backend notification to the list
    pub fn apply(&mut self, callback: PageCallback) -> PageResult<()> {
        match callback {
            PageCallback::InsertItems { index, items } => {
                debug!(index, count = items.len(), "inserting downloads");
                self.list.insert_items(index, items)
            }
            PageCallback::UpdateItem { index, item } => self.list.update_item(index, item),
            PageCallback::RemoveItem { index } => self.list.remove_item(index).map(|_| ()),
        }
    }

    /// Single dispatch point for user interaction
    pub async fn handle_command(&mut self, command: Command) -> PageResult<()> {
        match command {
            Command::ClearAll => self.clear_all().await,
            Command::Undo => self.undo().await,
            Command::RemoveItem { index } => self.remove_item(index).await,
            Command::PageClick { inside_toast } => {
                self.toast.on_page_click(inside_toast);
                Ok(())
            }
        }
    }

    async fn clear_all(&mut self) -> PageResult<()> {
        if !self.list.has_clearable_downloads() {
            return Ok(());
        }
        // Undo stays available only if something restorable is leaving.
        let undoable = self.list.items().iter().any(DownloadItem::is_undoable);
        self.proxy.clear_all().await?;
        info!(count = self.list.len(), "clear all requested");
        let text = self.strings.get_string("toastClearedAll")?;
        self.toast.show(text, !undoable);
        Ok(())
    }

    async fn undo(&mut self) -> PageResult<()> {
        if !self.toast.is_open() || self.toast.is_undo_hidden() {
            return Ok(());
        }
        self.toast.hide();
        self.proxy.undo().await
    }

    async fn remove_item(&mut self, index: usize) -> PageResult<()> {
        let item = self
            .list
            .get(index)
            .ok_or_else(|| PageError::index_out_of_bounds(index, self.list.len()))?;
        let id = item.id;
        let undo_hidden = !item.is_undoable();
        self.proxy.remove(id).await?;
        let text = self.strings.get_string("toastRemovedFromList")?;
        self.toast.show(text, undo_hidden);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DownloadState;
    use crate::testing::mocks::MockDownloadsProxy;

    fn page_with_mock() -> (DownloadsPage, Arc<MockDownloadsProxy>) {
        let proxy = Arc::new(MockDownloadsProxy::new());
        let page = DownloadsPage::new(Arc::clone(&proxy) as Arc<dyn DownloadsProxy>);
        (page, proxy)
    }

    fn item(id: u32) -> DownloadItem {
        DownloadItem {
            id,
            ..DownloadItem::default()
        }
    }

    #[tokio::test]
    async fn test_remove_item_calls_proxy_and_opens_toast() {
        let (mut page, proxy) = page_with_mock();
        page.apply(PageCallback::InsertItems {
            index: 0,
            items: vec![item(11)],
        })
        .unwrap();

        page.handle_command(Command::RemoveItem { index: 0 })
            .await
            .unwrap();

        assert_eq!(proxy.get_removed_ids().await, vec![11]);
        assert!(page.toast().is_open());
        assert!(!page.toast().is_undo_hidden());
    }

    #[tokio::test]
    async fn test_clear_all_without_clearable_items_is_a_no_op() {
        let (mut page, proxy) = page_with_mock();
        let in_progress = DownloadItem {
            state: DownloadState::InProgress,
            ..item(1)
        };
        page.apply(PageCallback::InsertItems {
            index: 0,
            items: vec![in_progress],
        })
        .unwrap();

        page.handle_command(Command::ClearAll).await.unwrap();
        assert_eq!(proxy.clear_all_call_count().await, 0);
        assert!(!page.toast().is_open());
    }

    #[tokio::test]
    async fn test_undo_ignored_while_toast_is_closed() {
        let (mut page, proxy) = page_with_mock();
        page.handle_command(Command::Undo).await.unwrap();
        assert_eq!(proxy.undo_call_count().await, 0);
    }

    #[tokio::test]
    async fn test_undo_ignored_while_affordance_is_hidden() {
        let (mut page, proxy) = page_with_mock();
        page.toast_mut().show("", true);
        page.handle_command(Command::Undo).await.unwrap();
        assert_eq!(proxy.undo_call_count().await, 0);
        assert!(page.toast().is_open());
    }

    #[tokio::test]
    async fn test_remove_out_of_range_is_an_error() {
        let (mut page, _proxy) = page_with_mock();
        assert!(matches!(
            page.handle_command(Command::RemoveItem { index: 0 }).await,
            Err(PageError::IndexOutOfBounds { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_hidden_once_empty() {
        let (mut page, _proxy) = page_with_mock();
        assert!(page.is_list_hidden());
        page.apply(PageCallback::InsertItems {
            index: 0,
            items: vec![item(1)],
        })
        .unwrap();
        assert!(!page.is_list_hidden());
        page.apply(PageCallback::RemoveItem { index: 0 }).unwrap();
        assert!(page.is_list_hidden());
    }
}

//! Download list maintenance driven by backend callbacks

use crate::error::{PageError, PageResult};
use crate::model::DownloadItem;

/// Ordered download list with per-item date visibility
///
/// The backend owns ordering; this model applies its splice
/// notifications and recomputes which items start a new date run. An
/// item renders its date header only when its `date_string` differs
/// from its predecessor's.
#[derive(Debug, Clone, Default)]
pub struct DownloadsList {
    items: Vec<DownloadItem>,
    hide_dates: Vec<bool>,
}

impl DownloadsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[DownloadItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&DownloadItem> {
        self.items.get(index)
    }

    /// True when the item at `index` should render its date header
    pub fn shows_date(&self, index: usize) -> bool {
        match self.hide_dates.get(index) {
            Some(hidden) => !hidden,
            None => false,
        }
    }

    /// Number of rendered date headers, one per date run
    pub fn visible_date_count(&self) -> usize {
        self.hide_dates.iter().filter(|hidden| !**hidden).count()
    }

    /// Whether the Clear All action has anything to remove
    pub fn has_clearable_downloads(&self) -> bool {
        self.items.iter().any(DownloadItem::is_clearable)
    }

    /// Splices `items` into the list at `index`
    pub fn insert_items(&mut self, index: usize, items: Vec<DownloadItem>) -> PageResult<()> {
        if index > self.items.len() {
            return Err(PageError::index_out_of_bounds(index, self.items.len()));
        }
        self.items.splice(index..index, items);
        self.update_hide_dates();
        Ok(())
    }

    /// Replaces the item at `index`
    pub fn update_item(&mut self, index: usize, item: DownloadItem) -> PageResult<()> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                self.update_hide_dates();
                Ok(())
            }
            None => Err(PageError::index_out_of_bounds(index, len)),
        }
    }

    /// Removes and returns the item at `index`
    pub fn remove_item(&mut self, index: usize) -> PageResult<DownloadItem> {
        if index >= self.items.len() {
            return Err(PageError::index_out_of_bounds(index, self.items.len()));
        }
        let removed = self.items.remove(index);
        self.update_hide_dates();
        Ok(removed)
    }

    fn update_hide_dates(&mut self) {
        let hide: Vec<bool> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| i > 0 && self.items[i - 1].date_string == item.date_string)
            .collect();
        self.hide_dates = hide;
    }
}

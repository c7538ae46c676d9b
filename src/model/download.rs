//! Download items reported by the downloads backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a download
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DownloadState {
    InProgress,
    Complete,
    Paused,
    Dangerous,
    Cancelled,
    Interrupted,
}

impl DownloadState {
    /// Whether the Clear All action may remove an item in this state.
    /// Active and dangerous downloads stay in the list.
    pub fn is_clearable(self) -> bool {
        !matches!(
            self,
            DownloadState::InProgress | DownloadState::Paused | DownloadState::Dangerous
        )
    }
}

/// Danger classification reported alongside the state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DangerType {
    NotDangerous,
    DangerousFile,
    DangerousUrl,
    UncommonContent,
}

/// One download row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadItem {
    /// Backend-assigned numeric id, the handle for remove/undo calls
    pub id: u32,
    /// Stable identifier that survives list reindexing
    pub guid: Uuid,
    pub file_name: String,
    pub url: String,
    pub state: DownloadState,
    #[serde(default = "DangerType::not_dangerous")]
    pub danger_type: DangerType,
    #[serde(default)]
    pub is_dangerous: bool,
    /// Delivered over an insecure connection (mixed content)
    #[serde(default)]
    pub is_insecure: bool,
    /// Localized "how long ago" string from the backend, e.g. "Today"
    pub since_string: String,
    /// Localized calendar date string used for date-run headers
    pub date_string: String,
    pub started: DateTime<Utc>,
}

impl DangerType {
    fn not_dangerous() -> Self {
        DangerType::NotDangerous
    }
}

impl DownloadItem {
    /// Whether the Clear All action may remove this item
    pub fn is_clearable(&self) -> bool {
        self.state.is_clearable()
    }

    /// Whether removing this item can be undone from the toast.
    /// Dangerous and insecure removals are final.
    pub fn is_undoable(&self) -> bool {
        !(self.is_dangerous || self.is_insecure)
    }

    /// URL elided to at most `limit` characters for display
    pub fn display_url(&self, limit: usize) -> String {
        self.url.chars().take(limit).collect()
    }
}

impl Default for DownloadItem {
    fn default() -> Self {
        Self {
            id: 0,
            guid: Uuid::nil(),
            file_name: "download.txt".to_owned(),
            url: "http://example.com/download.txt".to_owned(),
            state: DownloadState::Complete,
            danger_type: DangerType::NotDangerous,
            is_dangerous: false,
            is_insecure: false,
            since_string: "Today".to_owned(),
            date_string: String::new(),
            started: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

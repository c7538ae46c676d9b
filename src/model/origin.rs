//! Origin records supplied by the site-settings backend

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PageError, PageResult};

/// One origin within a site group
///
/// The backend reports storage usage, cookie count, and the site
/// engagement score per origin; partitioned entries represent storage
/// keyed under another top-level site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OriginRecord {
    /// Full origin including scheme, e.g. "https://www.example.com"
    pub origin: String,
    /// Storage usage in bytes
    #[serde(default)]
    pub usage: u64,
    /// Cookies set by this origin
    #[serde(default)]
    pub num_cookies: u32,
    /// Site engagement score
    #[serde(default)]
    pub engagement: f64,
    /// Whether this entry is storage partitioned under another site
    #[serde(default)]
    pub is_partitioned: bool,
}

impl OriginRecord {
    /// Create a record with zeroed usage, cookies, and engagement
    pub fn new<S: Into<String>>(origin: S) -> Self {
        Self {
            origin: origin.into(),
            usage: 0,
            num_cookies: 0,
            engagement: 0.0,
            is_partitioned: false,
        }
    }

    /// Host component of the origin URL
    pub fn host(&self) -> PageResult<String> {
        let parsed = Url::parse(&self.origin)
            .map_err(|e| PageError::invalid_origin(&self.origin, e.to_string()))?;
        parsed
            .host_str()
            .map(str::to_owned)
            .ok_or_else(|| PageError::invalid_origin(&self.origin, "origin has no host"))
    }

    /// Display label for origin rows: the origin without its scheme
    ///
    /// Non-default ports stay visible. Unparseable origins fall back to
    /// the raw string so display never fails.
    pub fn site_representation(&self) -> String {
        match Url::parse(&self.origin) {
            Ok(parsed) => match (parsed.host_str(), parsed.port()) {
                (Some(host), Some(port)) => format!("{host}:{port}"),
                (Some(host), None) => host.to_owned(),
                (None, _) => self.origin.clone(),
            },
            Err(_) => self.origin.clone(),
        }
    }
}

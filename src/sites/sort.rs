//! Origin ordering within a site entry

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::OriginRecord;

/// Sort method selected by the all-sites page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    /// Descending site engagement
    MostVisited,
    /// Descending storage usage
    Storage,
    /// Ascending display label
    Name,
}

impl FromStr for SortMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "most-visited" => Ok(SortMethod::MostVisited),
            "storage" => Ok(SortMethod::Storage),
            "name" => Ok(SortMethod::Name),
            other => Err(format!(
                "unknown sort method '{other}' (expected most-visited, storage, or name)"
            )),
        }
    }
}

/// Returns a sorted view of `origins` under `method`.
///
/// The sort is stable: entries with equal keys keep their original
/// relative order, so refreshes never shuffle tied rows. The input is
/// left untouched.
pub fn sorted_origins(origins: &[OriginRecord], method: SortMethod) -> Vec<OriginRecord> {
    let mut sorted = origins.to_vec();
    match method {
        SortMethod::MostVisited => {
            sorted.sort_by(|a, b| b.engagement.total_cmp(&a.engagement));
        }
        SortMethod::Storage => {
            sorted.sort_by(|a, b| b.usage.cmp(&a.usage));
        }
        SortMethod::Name => {
            sorted.sort_by_cached_key(|origin| origin.site_representation());
        }
    }
    sorted
}

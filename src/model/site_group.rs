//! eTLD+1 site groups

use serde::{Deserialize, Serialize};

use crate::model::OriginRecord;

/// A registrable domain and the origins grouped under it
///
/// Origins keep the backend's insertion order; views that need a
/// different order go through [`crate::sites::sorted_origins`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteGroup {
    /// Registrable domain, also the entry's display name
    pub etld_plus_one: String,
    /// Member origins in backend order
    #[serde(default)]
    pub origins: Vec<OriginRecord>,
    /// Aggregate cookie count for the group, supplied by the backend
    #[serde(default)]
    pub num_cookies: u32,
}

impl SiteGroup {
    /// Create a group with a zero aggregate cookie count
    pub fn new<S: Into<String>>(etld_plus_one: S, origins: Vec<OriginRecord>) -> Self {
        Self {
            etld_plus_one: etld_plus_one.into(),
            origins,
            num_cookies: 0,
        }
    }

    /// Sum of member origin usage. The displayed aggregate usage must
    /// equal this value.
    pub fn total_usage(&self) -> u64 {
        self.origins.iter().map(|origin| origin.usage).sum()
    }

    /// Whether the entry renders as an expandable group: more than one
    /// origin, or any partitioned origin
    pub fn is_grouped(&self) -> bool {
        self.origins.len() > 1 || self.origins.iter().any(|origin| origin.is_partitioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_with_usages(usages: &[u64]) -> SiteGroup {
        let origins = usages
            .iter()
            .enumerate()
            .map(|(i, &usage)| {
                let mut origin = OriginRecord::new(format!("https://site{i}.example.com"));
                origin.usage = usage;
                origin
            })
            .collect();
        SiteGroup::new("example.com", origins)
    }

    #[test]
    fn test_total_usage_is_sum_of_members() {
        let group = group_with_usages(&[74622, 1274, 0]);
        assert_eq!(group.total_usage(), 75896);
    }

    #[test]
    fn test_total_usage_of_empty_group_is_zero() {
        let group = SiteGroup::new("example.com", vec![]);
        assert_eq!(group.total_usage(), 0);
    }

    #[test]
    fn test_multiple_origins_are_grouped() {
        assert!(group_with_usages(&[0, 0]).is_grouped());
        assert!(!group_with_usages(&[0]).is_grouped());
    }

    #[test]
    fn test_single_partitioned_origin_is_grouped() {
        let mut origin = OriginRecord::new("https://example.com");
        origin.is_partitioned = true;
        let group = SiteGroup::new("example.com", vec![origin]);
        assert!(group.is_grouped());
    }

    #[test]
    fn test_snapshot_defaults() {
        let json = r#"{"etld_plus_one": "example.com"}"#;
        let group: SiteGroup = serde_json::from_str(json).unwrap();
        assert!(group.origins.is_empty());
        assert_eq!(group.num_cookies, 0);
    }
}

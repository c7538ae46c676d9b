//! Site-entry state machine
//!
//! Models the expandable eTLD+1 row from the all-sites list. Grouped
//! entries (more than one origin, or any partitioned origin) expand to
//! show their member origins; an ungrouped entry is a direct link to
//! site details. All interaction flows through [`SiteEntryModel::handle`],
//! which returns the effects the presentation layer must carry out.

use tracing::debug;

use crate::error::PageResult;
use crate::model::{OriginRecord, SiteGroup};
use crate::proxy::{LocalDataProxy, SiteSettingsProxy};
use crate::sites::sort::{sorted_origins, SortMethod};

/// Target of a menu or removal request
///
/// Site groups are removed exclusively by their list position; origin
/// removals also carry the origin and its partitioned flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteAction {
    Origin {
        /// Position of the entry in the all-sites list
        index: usize,
        origin: String,
        is_partitioned: bool,
    },
    Group {
        /// Position of the entry in the all-sites list
        index: usize,
    },
}

/// Navigation targets reachable from a site entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SiteDetails { site: String },
}

/// Events the presentation layer feeds into the entry
///
/// Origin indices refer to the current display order, i.e. the rows of
/// [`SiteEntryModel::sorted_view`].
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEntryEvent {
    SetGroup(SiteGroup),
    ToggleExpand,
    OriginActivated(usize),
    OpenOriginMenu(usize),
    RemoveOrigin(usize),
    RemoveGroup,
    SetSortMethod(SortMethod),
}

/// Effects the entry asks the presentation layer to carry out
#[derive(Debug, Clone, PartialEq)]
pub enum SiteEntryEffect {
    Navigate(Route),
    OpenMenu(SiteAction),
    RemoveSite(SiteAction),
}

/// Headless model of one site-entry row
#[derive(Debug, Clone, Default)]
pub struct SiteEntryModel {
    site_group: Option<SiteGroup>,
    list_index: usize,
    sort_method: Option<SortMethod>,
    expanded: bool,
    usage_label: Option<String>,
    cookie_label: Option<String>,
}

impl SiteEntryModel {
    /// Create an entry at the given position in the all-sites list
    pub fn new(list_index: usize) -> Self {
        Self {
            list_index,
            ..Default::default()
        }
    }

    pub fn list_index(&self) -> usize {
        self.list_index
    }

    pub fn site_group(&self) -> Option<&SiteGroup> {
        self.site_group.as_ref()
    }

    pub fn sort_method(&self) -> Option<SortMethod> {
        self.sort_method
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether this entry renders as an expandable group
    pub fn is_grouped(&self) -> bool {
        self.site_group
            .as_ref()
            .map(SiteGroup::is_grouped)
            .unwrap_or(false)
    }

    /// Aggregate usage label, e.g. "75896 B". Refreshed by
    /// [`refresh_labels`](Self::refresh_labels); `None` while the group
    /// has no reported usage.
    pub fn usage_label(&self) -> Option<&str> {
        self.usage_label.as_deref()
    }

    /// Cookie label, e.g. "· 3 cookies". `None` while the aggregate
    /// cookie count is zero.
    pub fn cookie_label(&self) -> Option<&str> {
        self.cookie_label.as_deref()
    }

    /// Origins in display order under the active sort method, backend
    /// order when none is set
    pub fn sorted_view(&self) -> Vec<OriginRecord> {
        let origins = match &self.site_group {
            Some(group) => &group.origins,
            None => return Vec::new(),
        };
        match self.sort_method {
            Some(method) => sorted_origins(origins, method),
            None => origins.clone(),
        }
    }

    /// Single dispatch point for entry interaction
    pub fn handle(&mut self, event: SiteEntryEvent) -> Vec<SiteEntryEffect> {
        match event {
            SiteEntryEvent::SetGroup(group) => {
                self.set_group(group);
                Vec::new()
            }
            SiteEntryEvent::ToggleExpand => self.toggle_expand(),
            SiteEntryEvent::OriginActivated(index) => self.origin_activated(index),
            SiteEntryEvent::OpenOriginMenu(index) => self
                .origin_action(index)
                .map(SiteEntryEffect::OpenMenu)
                .into_iter()
                .collect(),
            SiteEntryEvent::RemoveOrigin(index) => self
                .origin_action(index)
                .map(SiteEntryEffect::RemoveSite)
                .into_iter()
                .collect(),
            SiteEntryEvent::RemoveGroup => vec![SiteEntryEffect::RemoveSite(SiteAction::Group {
                index: self.list_index,
            })],
            SiteEntryEvent::SetSortMethod(method) => {
                self.sort_method = Some(method);
                Vec::new()
            }
        }
    }

    /// Refreshes the usage and cookie labels from the browser
    /// collaborators. Called after the group changes.
    pub async fn refresh_labels(
        &mut self,
        site_settings: &dyn SiteSettingsProxy,
        local_data: &dyn LocalDataProxy,
    ) -> PageResult<()> {
        let (total, num_cookies) = match &self.site_group {
            Some(group) => (group.total_usage(), group.num_cookies),
            None => return Ok(()),
        };

        self.usage_label = if total > 0 {
            Some(site_settings.get_formatted_bytes(total).await?)
        } else {
            None
        };

        self.cookie_label = if num_cookies > 0 {
            let cookies = local_data.get_num_cookies_string(num_cookies).await?;
            Some(format!("· {cookies}"))
        } else {
            None
        };
        Ok(())
    }

    fn set_group(&mut self, group: SiteGroup) {
        // A grouped entry that becomes ungrouped must not stay expanded.
        if !group.is_grouped() {
            self.expanded = false;
        }
        debug!(
            etld_plus_one = %group.etld_plus_one,
            origins = group.origins.len(),
            "site entry group replaced"
        );
        self.site_group = Some(group);
        self.usage_label = None;
        self.cookie_label = None;
    }

    fn toggle_expand(&mut self) -> Vec<SiteEntryEffect> {
        let group = match &self.site_group {
            Some(group) => group,
            None => return Vec::new(),
        };
        if group.is_grouped() {
            self.expanded = !self.expanded;
            return Vec::new();
        }
        // An ungrouped row is a direct link to site details.
        match group.origins.first() {
            Some(origin) => vec![SiteEntryEffect::Navigate(Route::SiteDetails {
                site: origin.origin.clone(),
            })],
            None => Vec::new(),
        }
    }

    fn origin_activated(&self, index: usize) -> Vec<SiteEntryEffect> {
        match self.sorted_view().get(index) {
            // Partitioned rows carry no link.
            Some(origin) if !origin.is_partitioned => {
                vec![SiteEntryEffect::Navigate(Route::SiteDetails {
                    site: origin.origin.clone(),
                })]
            }
            _ => Vec::new(),
        }
    }

    fn origin_action(&self, index: usize) -> Option<SiteAction> {
        self.sorted_view().get(index).map(|origin| SiteAction::Origin {
            index: self.list_index,
            origin: origin.origin.clone(),
            is_partitioned: origin.is_partitioned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multi_origin_group() -> SiteGroup {
        SiteGroup::new(
            "example.com",
            vec![
                OriginRecord::new("http://example.com"),
                OriginRecord::new("https://www.example.com"),
                OriginRecord::new("https://login.example.com"),
            ],
        )
    }

    fn single_origin_group() -> SiteGroup {
        SiteGroup::new("foo.com", vec![OriginRecord::new("https://login.foo.com")])
    }

    #[test]
    fn test_grouped_entry_toggles_expansion() {
        let mut entry = SiteEntryModel::new(0);
        entry.handle(SiteEntryEvent::SetGroup(multi_origin_group()));
        assert!(!entry.is_expanded());

        let effects = entry.handle(SiteEntryEvent::ToggleExpand);
        assert!(effects.is_empty());
        assert!(entry.is_expanded());

        entry.handle(SiteEntryEvent::ToggleExpand);
        assert!(!entry.is_expanded());
    }

    #[test]
    fn test_ungrouped_entry_navigates_instead_of_expanding() {
        let mut entry = SiteEntryModel::new(0);
        entry.handle(SiteEntryEvent::SetGroup(single_origin_group()));

        let effects = entry.handle(SiteEntryEvent::ToggleExpand);
        assert!(!entry.is_expanded());
        assert_eq!(
            effects,
            vec![SiteEntryEffect::Navigate(Route::SiteDetails {
                site: "https://login.foo.com".to_owned(),
            })]
        );
    }

    #[test]
    fn test_replacing_grouped_with_ungrouped_resets_expansion() {
        let mut entry = SiteEntryModel::new(0);
        entry.handle(SiteEntryEvent::SetGroup(multi_origin_group()));
        entry.handle(SiteEntryEvent::ToggleExpand);
        assert!(entry.is_expanded());

        let mut shrunk = multi_origin_group();
        shrunk.origins.truncate(1);
        entry.handle(SiteEntryEvent::SetGroup(shrunk));
        assert!(!entry.is_expanded());
    }

    #[test]
    fn test_remove_group_carries_list_index_only() {
        let mut entry = SiteEntryModel::new(7);
        entry.handle(SiteEntryEvent::SetGroup(multi_origin_group()));

        let effects = entry.handle(SiteEntryEvent::RemoveGroup);
        assert_eq!(
            effects,
            vec![SiteEntryEffect::RemoveSite(SiteAction::Group { index: 7 })]
        );
    }

    #[test]
    fn test_sorted_view_without_method_keeps_backend_order() {
        let mut entry = SiteEntryModel::new(0);
        entry.handle(SiteEntryEvent::SetGroup(multi_origin_group()));
        let view = entry.sorted_view();
        assert_eq!(view[0].origin, "http://example.com");
        assert_eq!(view[2].origin, "https://login.example.com");
    }

    #[test]
    fn test_origin_events_out_of_range_are_ignored() {
        let mut entry = SiteEntryModel::new(0);
        entry.handle(SiteEntryEvent::SetGroup(single_origin_group()));
        assert!(entry.handle(SiteEntryEvent::OriginActivated(5)).is_empty());
        assert!(entry.handle(SiteEntryEvent::OpenOriginMenu(5)).is_empty());
        assert!(entry.handle(SiteEntryEvent::RemoveOrigin(5)).is_empty());
    }

    #[test]
    fn test_events_without_group_are_ignored() {
        let mut entry = SiteEntryModel::new(0);
        assert!(entry.handle(SiteEntryEvent::ToggleExpand).is_empty());
        assert!(entry.handle(SiteEntryEvent::OriginActivated(0)).is_empty());
        assert!(entry.sorted_view().is_empty());
    }
}

//! Representative-origin selection for the site-entry favicon

use crate::error::{PageError, PageResult};
use crate::model::{OriginRecord, SiteGroup};

/// Picks the origin whose favicon stands in for the whole group.
///
/// Preference order: the literal `www.` variant of the group's
/// registrable domain when present, then greatest storage usage, then
/// greatest cookie count, then first occurrence in backend order. The
/// result is deterministic for a given group.
///
/// An empty origin list is a caller contract violation and returns
/// [`PageError::EmptySiteGroup`].
pub fn representative_origin(group: &SiteGroup) -> PageResult<&OriginRecord> {
    let mut best = match group.origins.first() {
        Some(first) => first,
        None => return Err(PageError::empty_site_group(&group.etld_plus_one)),
    };

    let www_host = format!("www.{}", group.etld_plus_one);
    if let Some(www) = group
        .origins
        .iter()
        .find(|origin| origin.host().map(|host| host == www_host).unwrap_or(false))
    {
        return Ok(www);
    }

    for candidate in &group.origins[1..] {
        if (candidate.usage, candidate.num_cookies) > (best.usage, best.num_cookies) {
            best = candidate;
        }
    }
    Ok(best)
}

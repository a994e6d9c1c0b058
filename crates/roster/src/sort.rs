//! Stable orderings of roster entries.

use crate::collate::collation_key;
use crate::entry::Entry;

/// Ordering applied to a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Soonest birthday first.
    #[default]
    Proximity,
    /// Name, A to Z.
    Name,
    /// Name, Z to A.
    NameDesc,
}

/// Sorts by ascending days until the next birthday.
///
/// Entries with equal day counts keep their input order.
pub fn sort_by_proximity<'a>(entries: &[Entry<'a>]) -> Vec<Entry<'a>> {
    let mut sorted = entries.to_vec();
    // `sort_by_key` is stable.
    sorted.sort_by_key(|e| e.days_until());
    sorted
}

/// Sorts by name, ignoring case and accents. Equal names keep input order.
pub fn sort_by_name<'a>(entries: &[Entry<'a>]) -> Vec<Entry<'a>> {
    let mut keyed = keyed(entries);
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Sorts by name in reverse, ignoring case and accents. Equal names keep
/// input order.
pub fn sort_by_name_desc<'a>(entries: &[Entry<'a>]) -> Vec<Entry<'a>> {
    let mut keyed = keyed(entries);
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, e)| e).collect()
}

/// Dispatches on `order`.
pub fn sort<'a>(entries: &[Entry<'a>], order: SortOrder) -> Vec<Entry<'a>> {
    match order {
        SortOrder::Proximity => sort_by_proximity(entries),
        SortOrder::Name => sort_by_name(entries),
        SortOrder::NameDesc => sort_by_name_desc(entries),
    }
}

fn keyed<'a>(entries: &[Entry<'a>]) -> Vec<(String, Entry<'a>)> {
    entries
        .iter()
        .map(|e| (collation_key(e.name()), *e))
        .collect()
}

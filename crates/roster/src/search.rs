//! Free-text search over names and descriptions.

use crate::entry::Entry;

/// Keeps entries whose name or description contains `query`, ignoring case.
///
/// A blank query keeps every entry.
pub fn search<'a>(entries: &[Entry<'a>], query: &str) -> Vec<Entry<'a>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|e| {
            let record = e.record();
            record.name().to_lowercase().contains(&needle)
                || record
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .copied()
        .collect()
}

//! Urgency-tier filtering.

use cake_projection::UrgencyTier;

use crate::entry::Entry;

/// Which tier a listing keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TierFilter {
    /// Keep everything.
    #[default]
    All,
    /// Keep one tier.
    Only(UrgencyTier),
}

impl TierFilter {
    /// Returns `true` if an entry `days_until` away passes the filter.
    pub fn admits(self, days_until: u32) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(tier) => tier.contains(days_until),
        }
    }
}

impl From<UrgencyTier> for TierFilter {
    fn from(tier: UrgencyTier) -> Self {
        TierFilter::Only(tier)
    }
}

/// Keeps the entries whose day count falls in `filter`, preserving order.
///
/// [`TierFilter::All`] returns the input unchanged.
pub fn filter_by_tier<'a>(entries: &[Entry<'a>], filter: TierFilter) -> Vec<Entry<'a>> {
    entries
        .iter()
        .filter(|e| filter.admits(e.days_until()))
        .copied()
        .collect()
}

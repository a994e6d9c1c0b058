//! Projected roster and composed queries.

use cake_calendar::CalendarDate;
use cake_projection::{
    ProjectionConfig, ProjectionError, Reminder, ReminderSchedule, UrgencyTier, project_with,
};
use tracing::debug;

use crate::entry::Entry;
use crate::error::RosterError;
use crate::filter::{TierFilter, filter_by_tier};
use crate::record::BirthRecord;
use crate::search::search;
use crate::sort::{SortOrder, sort};
use crate::stats::Statistics;

/// Parameters of a listing: search, then tier filter, then ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
    search: Option<String>,
    tier: TierFilter,
    order: SortOrder,
}

impl RosterQuery {
    /// Everything, soonest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to entries matching `query` (blank means no restriction).
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Restricts to one tier.
    pub fn with_tier(mut self, tier: TierFilter) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the ordering.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Search text, if set.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Tier filter.
    pub fn tier(&self) -> TierFilter {
        self.tier
    }

    /// Ordering.
    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// Records projected against one reference date, in input order.
#[derive(Debug, Clone)]
pub struct Roster<'a> {
    today: CalendarDate,
    entries: Vec<Entry<'a>>,
}

impl<'a> Roster<'a> {
    /// Projects every record against `today`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Record`] for the first record whose birth date
    /// is malformed or rejected by `config`.
    #[tracing::instrument(skip_all, fields(n_records = records.len(), today = %today))]
    pub fn new(
        records: &'a [BirthRecord],
        today: CalendarDate,
        config: &ProjectionConfig,
    ) -> Result<Self, RosterError> {
        let entries = records
            .iter()
            .map(|record| {
                let wrap = |source: ProjectionError| RosterError::Record {
                    id: record.id().to_string(),
                    source,
                };
                let birth = record.birth_date().map_err(|e| wrap(e.into()))?;
                let projection = project_with(birth, today, config).map_err(wrap)?;
                Ok(Entry::new(record, birth, projection))
            })
            .collect::<Result<Vec<_>, RosterError>>()?;
        debug!(n_entries = entries.len(), "roster projected");
        Ok(Self { today, entries })
    }

    /// Reference date of every projection.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// Entries in input order.
    pub fn entries(&self) -> &[Entry<'a>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs `query`: search, then tier filter, then sort.
    pub fn query(&self, query: &RosterQuery) -> Vec<Entry<'a>> {
        let found = match query.search() {
            Some(q) => search(&self.entries, q),
            None => self.entries.clone(),
        };
        let kept = filter_by_tier(&found, query.tier());
        debug!(
            n_found = found.len(),
            n_kept = kept.len(),
            order = ?query.order(),
            "roster query"
        );
        sort(&kept, query.order())
    }

    /// Entry count per tier, nearest tier first.
    pub fn tier_counts(&self) -> [(UrgencyTier, usize); 4] {
        UrgencyTier::ALL.map(|tier| {
            let n = self.entries.iter().filter(|e| e.urgency() == tier).count();
            (tier, n)
        })
    }

    /// Entries with a reminder due today under `schedule`, soonest first.
    pub fn due_reminders(&self, schedule: &ReminderSchedule) -> Vec<(Entry<'a>, Reminder)> {
        let mut due: Vec<_> = self
            .entries
            .iter()
            .filter_map(|e| schedule.due(e.days_until()).map(|r| (*e, r)))
            .collect();
        due.sort_by_key(|(e, _)| e.days_until());
        due
    }

    /// Dashboard statistics; `None` for an empty roster.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::from_entries(&self.entries)
    }
}

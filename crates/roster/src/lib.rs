//! Birthday roster queries.
//!
//! A [`Roster`] projects a slice of [`BirthRecord`]s against one reference
//! date. Listings are built from its entries with three composable steps,
//! each also available as a free function over entry slices:
//!
//! | Step | Function | Notes |
//! |------|----------|-------|
//! | Search | [`search`] | case-insensitive, name and description; blank keeps all |
//! | Filter | [`filter_by_tier`] | [`TierFilter::All`] is the identity |
//! | Sort | [`sort_by_proximity`], [`sort_by_name`], [`sort_by_name_desc`] | all stable |
//!
//! # Quick start
//!
//! ```
//! use cake_calendar::CalendarDate;
//! use cake_projection::{ProjectionConfig, UrgencyTier};
//! use cake_roster::{BirthRecord, Roster, RosterQuery, TierFilter};
//!
//! let records = vec![
//!     BirthRecord::new("1", "Bruna", "1992-08-01"),
//!     BirthRecord::new("2", "Ana", "1990-03-15"),
//! ];
//! let today = CalendarDate::parse("2025-03-10").unwrap();
//! let roster = Roster::new(&records, today, &ProjectionConfig::default()).unwrap();
//!
//! let urgent = roster.query(&RosterQuery::new().with_tier(TierFilter::Only(UrgencyTier::Urgent)));
//! assert_eq!(urgent.len(), 1);
//! assert_eq!(urgent[0].name(), "Ana");
//! ```

mod collate;
mod entry;
mod error;
mod filter;
mod record;
mod roster;
mod search;
mod sort;
mod stats;

pub use entry::Entry;
pub use error::RosterError;
pub use filter::{TierFilter, filter_by_tier};
pub use record::BirthRecord;
pub use roster::{Roster, RosterQuery};
pub use search::search;
pub use sort::{SortOrder, sort, sort_by_name, sort_by_name_desc, sort_by_proximity};
pub use stats::Statistics;

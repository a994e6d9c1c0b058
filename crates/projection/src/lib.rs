//! Birthday projection: next occurrence, ages, and urgency.
//!
//! Every function here is a pure function of its inputs. The reference date
//! is always passed in; nothing reads a clock.
//!
//! # Quick start
//!
//! ```
//! use cake_calendar::CalendarDate;
//! use cake_projection::{Countdown, UrgencyTier, project};
//!
//! let birth = CalendarDate::parse("1990-03-15").unwrap();
//! let today = CalendarDate::parse("2025-03-20").unwrap();
//! let p = project(birth, today).unwrap();
//!
//! assert_eq!(p.next_occurrence().year(), 2026);
//! assert_eq!(p.urgency(), UrgencyTier::Distant);
//! assert_eq!(
//!     Countdown::from_days(p.days_until()),
//!     Countdown::Months { months: 12, days: 0 }
//! );
//! ```
//!
//! # Architecture
//!
//! ```text
//! project_with()
//!   ├─ future-birth check        (config.rs)
//!   ├─ occurrence_in()           leap-day policy
//!   ├─ day_difference()          (cake-calendar)
//!   └─ Projection                (result.rs)
//!        ├─ urgency() -> classify()   (tier.rs)
//!        └─ days_until() -> Countdown / ReminderSchedule::due()
//! ```

mod config;
mod countdown;
mod error;
mod project;
mod reminder;
mod result;
mod tier;
mod zodiac;

pub use config::{FutureBirthPolicy, LeapDayPolicy, ProjectionConfig};
pub use countdown::Countdown;
pub use error::ProjectionError;
pub use project::{occurrence_in, project, project_with};
pub use reminder::{Priority, Reminder, ReminderKind, ReminderSchedule};
pub use result::Projection;
pub use tier::{UrgencyTier, classify};
pub use zodiac::ZodiacSign;

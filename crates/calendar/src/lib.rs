//! # cake-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, with no
//! dependence on platform date/time types or time zones.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["text"] -->|"CalendarDate::parse()"| B["CalendarDate"]
//!     B -->|"DateStyle::format()"| A
//!     B -->|"to_ordinal_day()"| C["i64 day number"]
//!     C -->|"day_difference()"| D["signed day count"]
//!     E["is_leap_year()"] --> F["days_in_month()"]
//!     F --> B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use cake_calendar::{CalendarDate, DateStyle, day_difference, days_in_month};
//!
//! assert_eq!(days_in_month(2024, 2).unwrap(), 29);
//!
//! let a = CalendarDate::parse("2025-03-10").unwrap();
//! let b = CalendarDate::parse("15/03/2025").unwrap();
//! assert_eq!(day_difference(a, b), 5);
//! assert_eq!(b.format(DateStyle::Mdy), "03/15/2025");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap-year rule and month lengths |
//! | `date` | Validated calendar date |
//! | `ordinal` | Epoch-relative day numbers |
//! | `format` | Text layouts for parsing and formatting |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod month;
mod ordinal;

pub use date::{CalendarDate, MAX_YEAR, MIN_YEAR};
pub use error::CalendarError;
pub use format::DateStyle;
pub use month::{days_in_month, days_in_year, is_leap_year};
pub use ordinal::{EPOCH_YEAR, day_difference, to_ordinal_day};

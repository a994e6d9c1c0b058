//! Text layouts for reading and writing dates.

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Layout used to format and parse a [`CalendarDate`].
///
/// The caller picks the layout; nothing here consults a locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateStyle {
    /// `YYYY-MM-DD`.
    Iso,
    /// `DD/MM/YYYY`.
    #[default]
    Dmy,
    /// `MM/DD/YYYY`.
    Mdy,
    /// `YYYYMMDD`, as in vCard `BDAY` and iCalendar `DTSTART;VALUE=DATE`.
    Compact,
}

impl DateStyle {
    /// Every style, in declaration order.
    pub const ALL: [DateStyle; 4] = [
        DateStyle::Iso,
        DateStyle::Dmy,
        DateStyle::Mdy,
        DateStyle::Compact,
    ];

    /// Returns the lowercase configuration name of the style.
    pub fn as_str(self) -> &'static str {
        match self {
            DateStyle::Iso => "iso",
            DateStyle::Dmy => "dmy",
            DateStyle::Mdy => "mdy",
            DateStyle::Compact => "compact",
        }
    }

    /// Formats `date` in this style with zero padding.
    pub fn format(self, date: CalendarDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            DateStyle::Iso => format!("{y:04}-{m:02}-{d:02}"),
            DateStyle::Dmy => format!("{d:02}/{m:02}/{y:04}"),
            DateStyle::Mdy => format!("{m:02}/{d:02}/{y:04}"),
            DateStyle::Compact => format!("{y:04}{m:02}{d:02}"),
        }
    }

    /// Parses `text` laid out in this style.
    ///
    /// ISO and compact text must be fully zero padded. The slash styles
    /// accept one- or two-digit day and month fields.
    pub(crate) fn parse(self, text: &str) -> Result<CalendarDate, CalendarError> {
        let (year, month, day) = match self {
            DateStyle::Iso => {
                let [y, m, d] = split3(text, '-')?;
                (
                    field(text, y, "year", 4, 4)?,
                    field(text, m, "month", 2, 2)?,
                    field(text, d, "day", 2, 2)?,
                )
            }
            DateStyle::Dmy => {
                let [d, m, y] = split3(text, '/')?;
                (
                    field(text, y, "year", 4, 4)?,
                    field(text, m, "month", 1, 2)?,
                    field(text, d, "day", 1, 2)?,
                )
            }
            DateStyle::Mdy => {
                let [m, d, y] = split3(text, '/')?;
                (
                    field(text, y, "year", 4, 4)?,
                    field(text, m, "month", 1, 2)?,
                    field(text, d, "day", 1, 2)?,
                )
            }
            DateStyle::Compact => {
                if text.len() != 8 || !text.is_ascii() {
                    return Err(CalendarError::format(text, "expected 8 digits YYYYMMDD"));
                }
                (
                    field(text, &text[0..4], "year", 4, 4)?,
                    field(text, &text[4..6], "month", 2, 2)?,
                    field(text, &text[6..8], "day", 2, 2)?,
                )
            }
        };
        // Fields are at most four digits, so the narrowing casts are lossless.
        CalendarDate::new(year as i32, month as u8, day as u8)
            .map_err(|e| CalendarError::format(text, e.to_string()))
    }
}

fn split3<'a>(text: &'a str, sep: char) -> Result<[&'a str; 3], CalendarError> {
    let mut parts = text.split(sep);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(CalendarError::format(
            text,
            format!("expected three fields separated by '{sep}'"),
        )),
    }
}

fn field(
    text: &str,
    raw: &str,
    name: &str,
    min_len: usize,
    max_len: usize,
) -> Result<u32, CalendarError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::format(text, format!("{name} is not a number")));
    }
    if !(min_len..=max_len).contains(&raw.len()) {
        let width = if min_len == max_len {
            format!("{max_len}")
        } else {
            format!("{min_len}-{max_len}")
        };
        return Err(CalendarError::format(
            text,
            format!("{name} must have {width} digits"),
        ));
    }
    raw.parse::<u32>()
        .map_err(|e| CalendarError::format(text, format!("{name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn format_all_styles() {
        let d = date(2025, 3, 7);
        assert_eq!(DateStyle::Iso.format(d), "2025-03-07");
        assert_eq!(DateStyle::Dmy.format(d), "07/03/2025");
        assert_eq!(DateStyle::Mdy.format(d), "03/07/2025");
        assert_eq!(DateStyle::Compact.format(d), "20250307");
    }

    #[test]
    fn format_pads_short_years() {
        assert_eq!(DateStyle::Dmy.format(date(45, 1, 2)), "02/01/0045");
    }

    #[test]
    fn parse_each_style() {
        let d = date(1990, 3, 15);
        assert_eq!(DateStyle::Iso.parse("1990-03-15").unwrap(), d);
        assert_eq!(DateStyle::Dmy.parse("15/03/1990").unwrap(), d);
        assert_eq!(DateStyle::Mdy.parse("03/15/1990").unwrap(), d);
        assert_eq!(DateStyle::Compact.parse("19900315").unwrap(), d);
    }

    #[test]
    fn slash_styles_accept_unpadded_fields() {
        assert_eq!(DateStyle::Dmy.parse("5/3/1990").unwrap(), date(1990, 3, 5));
        assert_eq!(DateStyle::Mdy.parse("3/5/1990").unwrap(), date(1990, 3, 5));
    }

    #[test]
    fn iso_requires_padding() {
        let err = DateStyle::Iso.parse("1990-3-15").unwrap_err();
        assert_eq!(
            err,
            CalendarError::Format {
                input: "1990-3-15".to_string(),
                reason: "month must have 2 digits".to_string(),
            }
        );
    }

    #[test]
    fn nonexistent_date_is_format_error() {
        let err = DateStyle::Iso.parse("2023-04-31").unwrap_err();
        assert!(matches!(err, CalendarError::Format { ref reason, .. } if reason.contains("invalid day")));
    }

    #[test]
    fn rejects_extra_fields_and_signs() {
        assert!(DateStyle::Iso.parse("2023-01-01-01").is_err());
        assert!(DateStyle::Iso.parse("+023-01-01").is_err());
        assert!(DateStyle::Dmy.parse("01/01").is_err());
        assert!(DateStyle::Compact.parse("2023011").is_err());
        assert!(DateStyle::Compact.parse("2023011x").is_err());
    }

    #[test]
    fn rejects_year_zero() {
        assert!(matches!(
            DateStyle::Iso.parse("0000-01-01"),
            Err(CalendarError::Format { .. })
        ));
    }

    #[test]
    fn default_is_day_first() {
        assert_eq!(DateStyle::default(), DateStyle::Dmy);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = DateStyle::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DateStyle::ALL.len());
    }
}

//! Summary statistics over a roster.

use cake_projection::ZodiacSign;

use crate::entry::Entry;

/// Ages outside this open interval are treated as placeholder birth years
/// and left out of the average.
const PLAUSIBLE_AGE: (u32, u32) = (0, 120);

/// Day count within which a birthday counts as upcoming.
const UPCOMING_DAYS: u32 = 7;

/// Dashboard figures for a non-empty roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    total: usize,
    month_counts: [usize; 12],
    busiest_month: u8,
    average_age: u32,
    top_sign: ZodiacSign,
    top_sign_count: usize,
    upcoming_count: usize,
}

impl Statistics {
    /// Computes statistics over `entries`; `None` when empty.
    ///
    /// Ties for the busiest month go to the earliest month; ties for the
    /// most common sign go to the sign seen first in `entries`.
    pub fn from_entries(entries: &[Entry<'_>]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let mut month_counts = [0usize; 12];
        let mut sign_counts: Vec<(ZodiacSign, usize)> = Vec::new();
        let mut age_sum = 0u64;
        let mut age_n = 0u64;
        let mut upcoming_count = 0usize;

        for e in entries {
            let birth = e.birth_date();
            month_counts[usize::from(birth.month()) - 1] += 1;

            let age = e.projection().current_age();
            if age > PLAUSIBLE_AGE.0 && age < PLAUSIBLE_AGE.1 {
                age_sum += u64::from(age);
                age_n += 1;
            }

            let sign = ZodiacSign::of(birth);
            match sign_counts.iter_mut().find(|(s, _)| *s == sign) {
                Some((_, n)) => *n += 1,
                None => sign_counts.push((sign, 1)),
            }

            if e.days_until() <= UPCOMING_DAYS {
                upcoming_count += 1;
            }
        }

        let mut busiest = 0usize;
        for (i, &n) in month_counts.iter().enumerate() {
            if n > month_counts[busiest] {
                busiest = i;
            }
        }

        let mut top = sign_counts[0];
        for &(sign, n) in &sign_counts[1..] {
            if n > top.1 {
                top = (sign, n);
            }
        }

        let average_age = if age_n == 0 {
            0
        } else {
            (age_sum as f64 / age_n as f64).round() as u32
        };

        Some(Self {
            total: entries.len(),
            month_counts,
            busiest_month: busiest as u8 + 1,
            average_age,
            top_sign: top.0,
            top_sign_count: top.1,
            upcoming_count,
        })
    }

    /// Number of entries.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Birthdays per month, January first.
    pub fn month_counts(&self) -> &[usize; 12] {
        &self.month_counts
    }

    /// Month (1..=12) with the most birthdays.
    pub fn busiest_month(&self) -> u8 {
        self.busiest_month
    }

    /// Birthdays in the busiest month.
    pub fn busiest_month_count(&self) -> usize {
        self.month_counts[usize::from(self.busiest_month) - 1]
    }

    /// Rounded mean of plausible current ages; 0 when none are plausible.
    pub fn average_age(&self) -> u32 {
        self.average_age
    }

    /// Most common zodiac sign.
    pub fn top_sign(&self) -> ZodiacSign {
        self.top_sign
    }

    /// Entries with the most common sign.
    pub fn top_sign_count(&self) -> usize {
        self.top_sign_count
    }

    /// Entries whose birthday is within a week.
    pub fn upcoming_count(&self) -> usize {
        self.upcoming_count
    }
}

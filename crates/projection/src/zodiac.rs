//! Tropical zodiac signs by birth month and day.

use std::fmt;

use cake_calendar::CalendarDate;

/// Western tropical zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZodiacSign {
    /// December 22 to January 19.
    Capricorn,
    /// January 20 to February 18.
    Aquarius,
    /// February 19 to March 20.
    Pisces,
    /// March 21 to April 19.
    Aries,
    /// April 20 to May 20.
    Taurus,
    /// May 21 to June 20.
    Gemini,
    /// June 21 to July 22.
    Cancer,
    /// July 23 to August 22.
    Leo,
    /// August 23 to September 22.
    Virgo,
    /// September 23 to October 22.
    Libra,
    /// October 23 to November 21.
    Scorpio,
    /// November 22 to December 21.
    Sagittarius,
}

/// First `(month, day)` of each sign, in calendar order from January 20.
const SIGN_STARTS: [((u8, u8), ZodiacSign); 12] = [
    ((1, 20), ZodiacSign::Aquarius),
    ((2, 19), ZodiacSign::Pisces),
    ((3, 21), ZodiacSign::Aries),
    ((4, 20), ZodiacSign::Taurus),
    ((5, 21), ZodiacSign::Gemini),
    ((6, 21), ZodiacSign::Cancer),
    ((7, 23), ZodiacSign::Leo),
    ((8, 23), ZodiacSign::Virgo),
    ((9, 23), ZodiacSign::Libra),
    ((10, 23), ZodiacSign::Scorpio),
    ((11, 22), ZodiacSign::Sagittarius),
    ((12, 22), ZodiacSign::Capricorn),
];

impl ZodiacSign {
    /// Returns the sign for a date's month and day.
    pub fn of(date: CalendarDate) -> Self {
        let md = date.month_day();
        SIGN_STARTS
            .iter()
            .rev()
            .find(|(start, _)| md >= *start)
            .map_or(ZodiacSign::Capricorn, |&(_, sign)| sign)
    }

    /// English name of the sign.
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
        }
    }

    /// Unicode symbol of the sign.
    pub fn symbol(self) -> char {
        match self {
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(m: u8, d: u8) -> ZodiacSign {
        ZodiacSign::of(CalendarDate::new(2000, m, d).unwrap())
    }

    #[test]
    fn capricorn_wraps_year_end() {
        assert_eq!(sign(1, 1), ZodiacSign::Capricorn);
        assert_eq!(sign(1, 19), ZodiacSign::Capricorn);
        assert_eq!(sign(12, 22), ZodiacSign::Capricorn);
        assert_eq!(sign(12, 31), ZodiacSign::Capricorn);
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(sign(1, 20), ZodiacSign::Aquarius);
        assert_eq!(sign(2, 18), ZodiacSign::Aquarius);
        assert_eq!(sign(2, 19), ZodiacSign::Pisces);
        assert_eq!(sign(2, 29), ZodiacSign::Pisces);
        assert_eq!(sign(3, 20), ZodiacSign::Pisces);
        assert_eq!(sign(3, 21), ZodiacSign::Aries);
        assert_eq!(sign(7, 22), ZodiacSign::Cancer);
        assert_eq!(sign(7, 23), ZodiacSign::Leo);
        assert_eq!(sign(11, 21), ZodiacSign::Scorpio);
        assert_eq!(sign(11, 22), ZodiacSign::Sagittarius);
        assert_eq!(sign(12, 21), ZodiacSign::Sagittarius);
    }

    #[test]
    fn every_sign_covers_its_documented_range() {
        let ranges = [
            (ZodiacSign::Aquarius, (1, 20), (2, 18)),
            (ZodiacSign::Pisces, (2, 19), (3, 20)),
            (ZodiacSign::Aries, (3, 21), (4, 19)),
            (ZodiacSign::Taurus, (4, 20), (5, 20)),
            (ZodiacSign::Gemini, (5, 21), (6, 20)),
            (ZodiacSign::Cancer, (6, 21), (7, 22)),
            (ZodiacSign::Leo, (7, 23), (8, 22)),
            (ZodiacSign::Virgo, (8, 23), (9, 22)),
            (ZodiacSign::Libra, (9, 23), (10, 22)),
            (ZodiacSign::Scorpio, (10, 23), (11, 21)),
            (ZodiacSign::Sagittarius, (11, 22), (12, 21)),
            (ZodiacSign::Capricorn, (12, 22), (1, 19)),
        ];
        for (expected, (m0, d0), (m1, d1)) in ranges {
            assert_eq!(sign(m0, d0), expected, "first day of {expected:?}");
            assert_eq!(sign(m1, d1), expected, "last day of {expected:?}");
        }
    }

    #[test]
    fn display_has_symbol_and_name() {
        assert_eq!(ZodiacSign::Leo.to_string(), "♌ Leo");
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar systems.
//!
//! A [`Calendar`] describes how a particular year is divided into months and
//! days: how long the year is, how many months it has, and where the Unix
//! epoch falls when expressed in that system.  Three systems are provided:
//!
//! | Variant | Identifier | Leap rule |
//! |---------|------------|-----------|
//! | [`Gregorian`] | `gregorian` | divisible by 4, and not by 100 unless by 400 |
//! | [`Islamic`] | `islamic` | tabular 30-year cycle |
//! | [`Hebrew`] | `hebrew` / `hebrew-leap` | 19-year Metonic cycle |
//!
//! Calendars are immutable values: "the same calendar in a different year"
//! is produced by [`Calendar::in_year`], which preserves the variant.  The
//! month/day structure of a year depends on the year itself (leap years), so
//! most operations are only meaningful on a calendar instantiated for the
//! year in question.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the Unix epoch (1970-01-01T00:00:00 UTC) falls in a calendar.
///
/// The anchor is constant across all instances of a given calendar variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochAnchor {
    /// The year of the calendar containing the Unix epoch.
    pub year: i64,
    /// Seconds from the start of that year to the Unix epoch.
    pub offset_seconds: f64,
    /// The weekday of the first day of that year (1 = Sunday).
    pub weekday_of_day1: i64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar — the tagged variant
// ═══════════════════════════════════════════════════════════════════════════

/// A year in one of the supported calendar systems.
///
/// Two calendars are equal iff they are the same variant and the same year,
/// which matches the "same year and same identifier" rule: a variant's
/// identifier is a function of its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Calendar {
    Gregorian(Gregorian),
    Islamic(Islamic),
    Hebrew(Hebrew),
}

impl Calendar {
    /// The Gregorian calendar in year 0.
    ///
    /// Useful as an input to operations that supply their own year via
    /// [`Calendar::in_year`].
    pub const fn gregorian() -> Calendar {
        Calendar::Gregorian(Gregorian { year: 0 })
    }

    /// The tabular Islamic calendar in year 0.
    pub const fn islamic() -> Calendar {
        Calendar::Islamic(Islamic { year: 0 })
    }

    /// The Hebrew calendar in year 0.
    pub const fn hebrew() -> Calendar {
        Calendar::Hebrew(Hebrew { year: 0 })
    }

    /// The same calendar variant, instantiated for a different year.
    pub fn in_year(&self, year: i64) -> Calendar {
        match self {
            Calendar::Gregorian(_) => Calendar::Gregorian(Gregorian { year }),
            Calendar::Islamic(_) => Calendar::Islamic(Islamic { year }),
            Calendar::Hebrew(_) => Calendar::Hebrew(Hebrew { year }),
        }
    }

    /// The year this calendar instance describes.
    pub fn year(&self) -> i64 {
        match self {
            Calendar::Gregorian(c) => c.year,
            Calendar::Islamic(c) => c.year,
            Calendar::Hebrew(c) => c.year,
        }
    }

    /// A stable identifier used for equality and localization keys.
    pub fn identifier(&self) -> &'static str {
        match self {
            Calendar::Gregorian(_) => "gregorian",
            Calendar::Islamic(_) => "islamic",
            Calendar::Hebrew(c) => {
                if Hebrew::is_leap_year(c.year) {
                    "hebrew-leap"
                } else {
                    "hebrew"
                }
            }
        }
    }

    /// The total number of days in this year.
    pub fn days(&self) -> i64 {
        match self {
            Calendar::Gregorian(c) => c.days(),
            Calendar::Islamic(c) => c.days(),
            Calendar::Hebrew(c) => c.days(),
        }
    }

    /// The number of months in this year.
    pub fn months(&self) -> i64 {
        match self {
            Calendar::Gregorian(_) | Calendar::Islamic(_) => 12,
            Calendar::Hebrew(c) => {
                if Hebrew::is_leap_year(c.year) {
                    13
                } else {
                    12
                }
            }
        }
    }

    /// The number of days in a month of this year.
    ///
    /// Returns 0 for a month outside `1..=months()`.
    pub fn days_in_month(&self, month: i64) -> i64 {
        match self {
            Calendar::Gregorian(c) => c.days_in_month(month),
            Calendar::Islamic(c) => c.days_in_month(month),
            Calendar::Hebrew(c) => c.days_in_month(month),
        }
    }

    /// The number of days in a week.
    pub fn days_in_week(&self) -> i64 {
        7
    }

    /// The number of hours in a day.
    pub fn hours_per_day(&self) -> i64 {
        24
    }

    /// The number of minutes in an hour.
    pub fn minutes_per_hour(&self) -> i64 {
        60
    }

    /// The number of seconds in a minute.
    pub fn seconds_per_minute(&self) -> i64 {
        60
    }

    /// Where the Unix epoch falls on this calendar.
    pub fn unix_epoch_anchor(&self) -> EpochAnchor {
        match self {
            // 1970 begins on a Thursday; the epoch is 0 seconds into it.
            Calendar::Gregorian(_) => EpochAnchor {
                year: 1970,
                offset_seconds: 0.0,
                weekday_of_day1: 5,
            },
            // The epoch is 24 883 200 seconds into 1389 AH.
            Calendar::Islamic(_) => EpochAnchor {
                year: 1389,
                offset_seconds: 24_883_200.0,
                weekday_of_day1: 4,
            },
            // 1 Tishrei 5730 is Saturday, 13 September 1969; the epoch is
            // 110 days into that year, on 23 Tevet.
            Calendar::Hebrew(_) => EpochAnchor {
                year: 5730,
                offset_seconds: 9_504_000.0,
                weekday_of_day1: 7,
            },
        }
    }
}

impl Default for Calendar {
    fn default() -> Calendar {
        Calendar::gregorian()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.identifier(), self.year())
    }
}

impl From<Gregorian> for Calendar {
    fn from(c: Gregorian) -> Calendar {
        Calendar::Gregorian(c)
    }
}

impl From<Islamic> for Calendar {
    fn from(c: Islamic) -> Calendar {
        Calendar::Islamic(c)
    }
}

impl From<Hebrew> for Calendar {
    fn from(c: Hebrew) -> Calendar {
        Calendar::Hebrew(c)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Gregorian
// ═══════════════════════════════════════════════════════════════════════════

/// A year on the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gregorian {
    pub year: i64,
}

impl Gregorian {
    pub const fn new(year: i64) -> Gregorian {
        Gregorian { year }
    }

    /// Whether a year is a leap year.
    ///
    /// A year is a leap year when it is divisible by 4 and either not
    /// divisible by 100 or divisible by 400.
    pub fn is_leap_year(year: i64) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    fn days(&self) -> i64 {
        if Gregorian::is_leap_year(self.year) {
            366
        } else {
            365
        }
    }

    fn days_in_month(&self, month: i64) -> i64 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if Gregorian::is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
            _ => 0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Islamic (tabular)
// ═══════════════════════════════════════════════════════════════════════════

/// A year on the tabular Islamic calendar.
///
/// The tabular form uses a fixed 30-year leap cycle rather than lunar
/// observation, giving simple arithmetic conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Islamic {
    pub year: i64,
}

impl Islamic {
    pub const fn new(year: i64) -> Islamic {
        Islamic { year }
    }

    /// Whether a year is a leap year.
    ///
    /// Years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, and 29 of each 30-year
    /// cycle are leap years.
    pub fn is_leap_year(year: i64) -> bool {
        matches!(
            year.rem_euclid(30),
            2 | 5 | 7 | 10 | 13 | 16 | 18 | 21 | 24 | 26 | 29
        )
    }

    fn days(&self) -> i64 {
        if Islamic::is_leap_year(self.year) {
            355
        } else {
            354
        }
    }

    /// Odd months have 30 days and even months 29, except that month 12 has
    /// 30 days in a leap year.
    fn days_in_month(&self, month: i64) -> i64 {
        if !(1..=12).contains(&month) {
            0
        } else if month % 2 == 1 {
            30
        } else if month == 12 && Islamic::is_leap_year(self.year) {
            30
        } else {
            29
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Hebrew
// ═══════════════════════════════════════════════════════════════════════════

/// A year on the Hebrew calendar, with Tishrei as month 1.
///
/// Year lengths follow the classical molad reckoning: the mean lunar
/// conjunction is tracked in chalakim (1/1080 of an hour), and the start of
/// each year is postponed by the traditional rules so that certain holidays
/// avoid certain weekdays.  The resulting year is 353–355 days long (383–385
/// in a leap year); the deviation from the regular 354/384 shifts the length
/// of month 2 or month 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hebrew {
    pub year: i64,
}

/// Parts (chalakim) per hour.
const PARTS_PER_HOUR: i64 = 1080;

/// Molad threshold for the "molad zaken" postponement: noon, counted from
/// the 6 p.m. start of the Hebrew day.
const NOON_PARTS: i64 = 18 * PARTS_PER_HOUR;

impl Hebrew {
    pub const fn new(year: i64) -> Hebrew {
        Hebrew { year }
    }

    /// Whether a year is a leap year.
    ///
    /// Years 3, 6, 8, 11, 14, 17, and 19 of each 19-year cycle are leap
    /// years (the rule below uses 0 in place of 19).
    pub fn is_leap_year(year: i64) -> bool {
        matches!(year.rem_euclid(19), 0 | 3 | 6 | 8 | 11 | 14 | 17)
    }

    /// Days from the Hebrew epoch to 1 Tishrei of `year`.
    ///
    /// The count starts from the first molad (BeHaRaD: Monday, 5 hours and
    /// 204 parts into the day), advances one lunation of 29d 12h 793p per
    /// elapsed month, and then applies the four classical postponements.
    /// Weekdays here satisfy `(day + 1) mod 7`, with 0 = Sunday.
    fn elapsed_days(year: i64) -> i64 {
        let cycles = (year - 1).div_euclid(19);
        let remainder = (year - 1).rem_euclid(19);
        // 235 months per 19-year cycle; (7r + 1) / 19 counts the leap
        // months among the first r years of the current cycle.
        let months = 235 * cycles + 12 * remainder + (7 * remainder + 1) / 19;

        let parts_total = 204 + 793 * months;
        let hours_total = 5 + 12 * months + parts_total.div_euclid(PARTS_PER_HOUR);
        let mut day = 29 * months + hours_total.div_euclid(24);
        let parts =
            hours_total.rem_euclid(24) * PARTS_PER_HOUR + parts_total.rem_euclid(PARTS_PER_HOUR);

        let weekday = |day: i64| (day + 1).rem_euclid(7);
        if parts >= NOON_PARTS {
            // Molad at or after noon: postpone to the next day.
            day += 1;
        } else if weekday(day) == 2 && parts >= 9924 && !Hebrew::is_leap_year(year) {
            // Tuesday molad late in a common year.
            day += 1;
        } else if weekday(day) == 1 && parts >= 16789 && Hebrew::is_leap_year(year - 1) {
            // Monday molad following a leap year.
            day += 1;
        }
        // The year may not begin on Sunday, Wednesday, or Friday.
        if matches!(weekday(day), 0 | 3 | 5) {
            day += 1;
        }
        day
    }

    fn days(&self) -> i64 {
        Hebrew::elapsed_days(self.year + 1) - Hebrew::elapsed_days(self.year)
    }

    /// The year's deviation from a regular year: +1 when month 2 gains a
    /// day, -1 when month 3 loses one, 0 otherwise.
    fn leap_day_correction(&self) -> i64 {
        let regular = if Hebrew::is_leap_year(self.year) {
            384
        } else {
            354
        };
        self.days() - regular
    }

    /// Months alternate 30/29 starting from 30 in month 1.  The per-year
    /// correction lengthens month 2 or shortens month 3.  In a leap year
    /// month 6 doubles into a 13th month and the alternation is inverted
    /// from month 6 onward.
    fn days_in_month(&self, month: i64) -> i64 {
        let leap = Hebrew::is_leap_year(self.year);
        let months = if leap { 13 } else { 12 };
        if !(1..=months).contains(&month) {
            return 0;
        }
        if month == 2 && self.leap_day_correction() == 1 {
            return 30;
        }
        if month == 3 && self.leap_day_correction() == -1 {
            return 29;
        }
        if leap && month >= 6 {
            if month % 2 == 0 {
                30
            } else {
                29
            }
        } else if month % 2 == 1 {
            30
        } else {
            29
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

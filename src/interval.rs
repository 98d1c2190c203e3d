// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-aware time intervals.
//!
//! A [`TimeInterval`] is a gap between two times stored as local components
//! ("3 months", "1 hour and -10 minutes") rather than as a scalar duration,
//! because months and days have varying lengths.  Every component is
//! independently signed.
//!
//! Intervals add component-wise; applying an interval to a
//! [`Timestamp`](crate::Timestamp) carries out-of-range components into the
//! next larger unit (see [`Timestamp::by_adding_interval`]).
//!
//! [`Timestamp::by_adding_interval`]: crate::Timestamp::by_adding_interval

use std::fmt;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed, multi-unit gap between two times.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeInterval {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: f64,
}

impl TimeInterval {
    /// An interval with every component zero.
    pub const fn zero() -> TimeInterval {
        TimeInterval {
            years: 0,
            months: 0,
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            nanoseconds: 0.0,
        }
    }
}

/// Intervals are equal when all components match, with a ±0.01 tolerance on
/// the fractional nanoseconds.
impl PartialEq for TimeInterval {
    fn eq(&self, other: &TimeInterval) -> bool {
        let gap = self.nanoseconds - other.nanoseconds;
        self.years == other.years
            && self.months == other.months
            && self.days == other.days
            && self.hours == other.hours
            && self.minutes == other.minutes
            && self.seconds == other.seconds
            && gap < 0.01
            && gap > -0.01
    }
}

impl Add for TimeInterval {
    type Output = TimeInterval;

    fn add(self, rhs: TimeInterval) -> TimeInterval {
        TimeInterval {
            years: self.years + rhs.years,
            months: self.months + rhs.months,
            days: self.days + rhs.days,
            hours: self.hours + rhs.hours,
            minutes: self.minutes + rhs.minutes,
            seconds: self.seconds + rhs.seconds,
            nanoseconds: self.nanoseconds + rhs.nanoseconds,
        }
    }
}

impl Sub for TimeInterval {
    type Output = TimeInterval;

    fn sub(self, rhs: TimeInterval) -> TimeInterval {
        self + (-rhs)
    }
}

impl Neg for TimeInterval {
    type Output = TimeInterval;

    fn neg(self) -> TimeInterval {
        TimeInterval {
            years: -self.years,
            months: -self.months,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            nanoseconds: -self.nanoseconds,
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hour"),
            (self.minutes, "minute"),
            (self.seconds, "second"),
        ];
        let mut parts: Vec<String> = components
            .iter()
            .filter(|(value, _)| *value != 0)
            .map(|(value, unit)| {
                if *value == 1 {
                    format!("{} {}", value, unit)
                } else {
                    format!("{} {}s", value, unit)
                }
            })
            .collect();
        if self.nanoseconds != 0.0 {
            parts.push(format!("{:.5} nanoseconds", self.nanoseconds));
        }
        write!(f, "{}", parts.join(", "))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Shorthand constructors
// ═══════════════════════════════════════════════════════════════════════════

/// Shorthand for building intervals from integers: `1.hour()`,
/// `30.minutes()`, `2.days() + 12.hours()`.
pub trait IntervalShorthand {
    fn years(&self) -> TimeInterval;
    fn months(&self) -> TimeInterval;
    fn days(&self) -> TimeInterval;
    fn hours(&self) -> TimeInterval;
    fn minutes(&self) -> TimeInterval;
    fn seconds(&self) -> TimeInterval;
    fn nanoseconds(&self) -> TimeInterval;

    fn year(&self) -> TimeInterval {
        self.years()
    }
    fn month(&self) -> TimeInterval {
        self.months()
    }
    fn day(&self) -> TimeInterval {
        self.days()
    }
    fn hour(&self) -> TimeInterval {
        self.hours()
    }
    fn minute(&self) -> TimeInterval {
        self.minutes()
    }
    fn second(&self) -> TimeInterval {
        self.seconds()
    }
    fn nanosecond(&self) -> TimeInterval {
        self.nanoseconds()
    }
}

impl IntervalShorthand for i64 {
    fn years(&self) -> TimeInterval {
        TimeInterval {
            years: *self,
            ..TimeInterval::zero()
        }
    }

    fn months(&self) -> TimeInterval {
        TimeInterval {
            months: *self,
            ..TimeInterval::zero()
        }
    }

    fn days(&self) -> TimeInterval {
        TimeInterval {
            days: *self,
            ..TimeInterval::zero()
        }
    }

    fn hours(&self) -> TimeInterval {
        TimeInterval {
            hours: *self,
            ..TimeInterval::zero()
        }
    }

    fn minutes(&self) -> TimeInterval {
        TimeInterval {
            minutes: *self,
            ..TimeInterval::zero()
        }
    }

    fn seconds(&self) -> TimeInterval {
        TimeInterval {
            seconds: *self,
            ..TimeInterval::zero()
        }
    }

    fn nanoseconds(&self) -> TimeInterval {
        TimeInterval {
            nanoseconds: *self as f64,
            ..TimeInterval::zero()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_component_wise() {
        let sum = 1.hour() + 30.minutes();
        assert_eq!(
            sum,
            TimeInterval {
                hours: 1,
                minutes: 30,
                ..TimeInterval::zero()
            }
        );
        // No carrying between intervals themselves.
        let large = 90.minutes() + 90.minutes();
        assert_eq!(large.minutes, 180);
        assert_eq!(large.hours, 0);
    }

    #[test]
    fn subtraction_and_negation() {
        let interval = 2.days() - 3.hours();
        assert_eq!(interval.days, 2);
        assert_eq!(interval.hours, -3);
        let negated = -interval;
        assert_eq!(negated.days, -2);
        assert_eq!(negated.hours, 3);
    }

    #[test]
    fn equality_tolerates_small_nanosecond_gaps() {
        let left = TimeInterval {
            nanoseconds: 100.0,
            ..TimeInterval::zero()
        };
        let right = TimeInterval {
            nanoseconds: 100.005,
            ..TimeInterval::zero()
        };
        assert_eq!(left, right);
        let far = TimeInterval {
            nanoseconds: 100.5,
            ..TimeInterval::zero()
        };
        assert_ne!(left, far);
    }

    #[test]
    fn display_lists_nonzero_components() {
        assert_eq!((1.hour() + 30.minutes()).to_string(), "1 hour, 30 minutes");
        assert_eq!((2.years() + 1.day()).to_string(), "2 years, 1 day");
        assert_eq!(TimeInterval::zero().to_string(), "");
    }

    #[test]
    fn singular_and_plural_shorthands_agree() {
        assert_eq!(1.year(), 1.years());
        assert_eq!(5.minute(), 5.minutes());
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Instants and their localized components.
//!
//! A [`Timestamp`] is a moment in time: a fractional count of seconds since
//! the Unix epoch, together with the [`TimeZone`] and [`Calendar`] used to
//! express it and the derived local components (year, month, day, hour,
//! minute, second, nanosecond, weekday).  Constructing from an epoch count
//! and constructing from local components are mutual inverses to within
//! 0.01 s.
//!
//! [`Date`] and [`Time`] carry just the date half or the time half of a
//! timestamp, for values where the other half is meaningless.
//!
//! All types here are immutable values; transformations like
//! [`Timestamp::in_time_zone`] or [`Timestamp::by_adding_interval`] return
//! new instances.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::calendar::Calendar;
use crate::format::TimeFormat;
use crate::interval::TimeInterval;
use crate::timezone::TimeZone;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The localized components of an instant, produced by [`localize`].
pub(crate) struct LocalTime {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: f64,
    pub weekday: i64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversion engine
// ═══════════════════════════════════════════════════════════════════════════

/// Converts an absolute instant into localized components.
///
/// The zone offset applied is the one in effect at the UTC instant, not the
/// local instant; exactly at a DST boundary this can be off by one policy
/// period, which is accepted so that results match the inverse conversion.
///
/// The walk starts at the calendar's epoch anchor and moves whole years,
/// then whole months, keeping a running weekday offset.  A remaining count
/// equal to a year's or month's length belongs to the next unit, so the
/// conversion is total: every instant resolves to in-range components.
pub(crate) fn localize(epoch_seconds: f64, time_zone: &TimeZone, calendar: &Calendar) -> LocalTime {
    let anchor = calendar.unix_epoch_anchor();
    let offset_timestamp =
        epoch_seconds + anchor.offset_seconds + time_zone.policy(epoch_seconds).offset as f64;
    let mut seconds_remaining = offset_timestamp.floor() as i64;
    let nanosecond = (offset_timestamp - offset_timestamp.floor()) * 1e9;

    let mut year = anchor.year;
    let mut weekday = anchor.weekday_of_day1;

    while seconds_remaining < 0 {
        year -= 1;
        let current = calendar.in_year(year);
        seconds_remaining += seconds_in_year(&current);
        weekday -= current.days();
    }

    let mut current = calendar.in_year(year);
    while seconds_in_year(&current) <= seconds_remaining {
        seconds_remaining -= seconds_in_year(&current);
        weekday += current.days();
        year += 1;
        current = calendar.in_year(year);
    }

    let seconds_per_minute = current.seconds_per_minute();
    let seconds_per_hour = seconds_per_minute * current.minutes_per_hour();
    let seconds_per_day = seconds_per_hour * current.hours_per_day();

    let mut month = 1;
    while month < current.months() {
        let seconds_in_month = seconds_per_day * current.days_in_month(month);
        if seconds_in_month > seconds_remaining {
            break;
        }
        seconds_remaining -= seconds_in_month;
        weekday += current.days_in_month(month);
        month += 1;
    }

    let day = seconds_remaining / seconds_per_day + 1;
    seconds_remaining %= seconds_per_day;
    let hour = seconds_remaining / seconds_per_hour;
    seconds_remaining %= seconds_per_hour;
    let minute = seconds_remaining / seconds_per_minute;
    let second = seconds_remaining % seconds_per_minute;

    weekday += day - 1;
    weekday = 1 + (weekday - 1).rem_euclid(current.days_in_week());

    LocalTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanosecond,
        weekday,
    }
}

/// Converts localized components into an absolute instant and a weekday.
///
/// Whole-year and whole-month second counts are accumulated from the epoch
/// anchor, then the zone offset is resolved in two passes: the policy at the
/// provisional (local-seconds) instant is applied first, and if the policy
/// at the corrected instant differs, the corrected offset is applied as well
/// unless that would push the instant before the policy's own start, which
/// indicates a local time inside a transition gap.
#[allow(clippy::too_many_arguments)]
pub(crate) fn epoch_for_local(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: f64,
    time_zone: &TimeZone,
    calendar: &Calendar,
) -> (f64, i64) {
    let anchor = calendar.unix_epoch_anchor();
    let mut timestamp = -anchor.offset_seconds;
    let mut weekday = anchor.weekday_of_day1;

    if year < anchor.year {
        for current_year in year..anchor.year {
            let current = calendar.in_year(current_year);
            timestamp -= seconds_in_year(&current) as f64;
            weekday -= current.days();
        }
    } else {
        for current_year in anchor.year..year {
            let current = calendar.in_year(current_year);
            timestamp += seconds_in_year(&current) as f64;
            weekday += current.days();
        }
    }

    let current = calendar.in_year(year);
    let seconds_per_minute = current.seconds_per_minute();
    let seconds_per_hour = seconds_per_minute * current.minutes_per_hour();
    let seconds_per_day = seconds_per_hour * current.hours_per_day();

    for current_month in 1..month {
        let days = current.days_in_month(current_month);
        timestamp += (days * seconds_per_day) as f64;
        weekday += days;
    }

    timestamp += (seconds_per_day * (day - 1)) as f64;
    timestamp += (seconds_per_hour * hour) as f64;
    timestamp += (seconds_per_minute * minute) as f64;
    timestamp += second as f64;
    timestamp += nanosecond / 1e9;
    weekday += day - 1;
    weekday = 1 + (weekday - 1).rem_euclid(current.days_in_week());

    let original_offset = time_zone.policy(timestamp).offset;
    timestamp -= original_offset as f64;

    let corrected_policy = time_zone.policy(timestamp);
    let corrected_offset = (corrected_policy.offset - original_offset) as f64;
    if corrected_offset != 0.0 && corrected_policy.beginning_timestamp < timestamp - corrected_offset
    {
        timestamp -= corrected_offset;
    }

    (timestamp, weekday)
}

fn seconds_in_year(calendar: &Calendar) -> i64 {
    calendar.days() * calendar.hours_per_day() * calendar.minutes_per_hour()
        * calendar.seconds_per_minute()
}

/// Moves an out-of-range month into the matching year: month 0 wraps to the
/// last month of the previous year, and a month past the end of the year
/// overflows into the next year.
pub(crate) fn carry_months(month: &mut i64, year: &mut i64, calendar: &Calendar) -> bool {
    if *month < 1 {
        *year -= 1;
        *month += calendar.in_year(*year).months();
        true
    } else if *month > calendar.in_year(*year).months() {
        *month -= calendar.in_year(*year).months();
        *year += 1;
        true
    } else {
        false
    }
}

/// Carries an out-of-range day into the month fields, borrowing from the
/// previous month's length or overflowing by the current month's length.
/// The month/year carry re-runs after every step, since a month carry can
/// itself overflow the year.  Returns once the day is in range for the
/// resolved year and month.
pub(crate) fn carry_days(day: &mut i64, month: &mut i64, year: &mut i64, calendar: &Calendar) {
    loop {
        let current = calendar.in_year(*year);
        if *day < 1 {
            let length = if *month == 1 {
                let previous = calendar.in_year(*year - 1);
                previous.days_in_month(previous.months())
            } else {
                current.days_in_month(*month - 1)
            };
            *day += length;
            *month -= 1;
        } else if *day > current.days_in_month(*month) {
            *day -= current.days_in_month(*month);
            *month += 1;
        } else {
            break;
        }
        while carry_months(month, year, calendar) {}
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Timestamp
// ═══════════════════════════════════════════════════════════════════════════

/// A moment in time, localized to a time zone and calendar system.
#[derive(Debug, Clone)]
pub struct Timestamp {
    epoch_seconds: f64,
    time_zone: TimeZone,
    calendar: Calendar,
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: f64,
    weekday: i64,
}

impl Timestamp {
    /// Creates a timestamp from a count of seconds since the Unix epoch.
    ///
    /// The year carried by `calendar` does not matter; the stored calendar
    /// is re-instantiated for the localized year.
    pub fn new(epoch_seconds: f64, time_zone: TimeZone, calendar: Calendar) -> Timestamp {
        let local = localize(epoch_seconds, &time_zone, &calendar);
        Timestamp {
            epoch_seconds,
            calendar: calendar.in_year(local.year),
            time_zone,
            year: local.year,
            month: local.month,
            day: local.day,
            hour: local.hour,
            minute: local.minute,
            second: local.second,
            nanosecond: local.nanosecond,
            weekday: local.weekday,
        }
    }

    /// Creates a timestamp from localized components.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: f64,
        time_zone: TimeZone,
        calendar: Calendar,
    ) -> Timestamp {
        let (epoch_seconds, weekday) = epoch_for_local(
            year, month, day, hour, minute, second, nanosecond, &time_zone, &calendar,
        );
        Timestamp {
            epoch_seconds,
            calendar: calendar.in_year(year),
            time_zone,
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            weekday,
        }
    }

    /// The current moment, from the system clock.
    pub fn now(time_zone: TimeZone, calendar: Calendar) -> Timestamp {
        Timestamp::from_utc(Utc::now(), time_zone, calendar)
    }

    /// Creates a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_utc(datetime: DateTime<Utc>, time_zone: TimeZone, calendar: Calendar) -> Timestamp {
        let epoch_seconds =
            datetime.timestamp() as f64 + datetime.timestamp_subsec_nanos() as f64 / 1e9;
        Timestamp::new(epoch_seconds, time_zone, calendar)
    }

    /// Converts to a `chrono::DateTime<Utc>`.
    ///
    /// Returns `None` if the value falls outside chrono's representable
    /// range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = self.epoch_seconds.floor() as i64;
        let nanos = ((self.epoch_seconds - seconds as f64) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(seconds, nanos)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Seconds between this moment and the Unix epoch.
    pub fn epoch_seconds(&self) -> f64 {
        self.epoch_seconds
    }

    /// The time zone this timestamp is localized in.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// The calendar this timestamp is localized in, instantiated for the
    /// local year.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn hour(&self) -> i64 {
        self.hour
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn second(&self) -> i64 {
        self.second
    }

    pub fn nanosecond(&self) -> f64 {
        self.nanosecond
    }

    /// The day of the week, 1-based with 1 = Sunday.
    pub fn weekday(&self) -> i64 {
        self.weekday
    }

    /// The date components of this timestamp.
    pub fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day, self.calendar)
    }

    /// The time components of this timestamp.
    pub fn time(&self) -> Time {
        Time::new(
            self.hour,
            self.minute,
            self.second,
            self.nanosecond,
            self.time_zone.clone(),
        )
    }

    // ── transformations ───────────────────────────────────────────────

    /// The same moment localized in a different time zone.
    pub fn in_time_zone(&self, time_zone: TimeZone) -> Timestamp {
        Timestamp::new(self.epoch_seconds, time_zone, self.calendar)
    }

    /// The same moment localized in the named time zone.
    pub fn in_time_zone_named(&self, name: &str) -> Timestamp {
        self.in_time_zone(TimeZone::named(name))
    }

    /// The same moment expressed in a different calendar system.
    pub fn in_calendar(&self, calendar: Calendar) -> Timestamp {
        Timestamp::new(self.epoch_seconds, self.time_zone.clone(), calendar)
    }

    /// Adds an interval to this timestamp's local components and carries
    /// out-of-range values into the next larger unit.
    ///
    /// Carry order: nanoseconds, seconds, minutes, hours, then months into
    /// years (month counts can depend on the year), then days into months.
    pub fn by_adding_interval(&self, interval: TimeInterval) -> Timestamp {
        let mut year = self.year + interval.years;
        let mut month = self.month + interval.months;
        let mut day = self.day + interval.days;
        let mut hour = self.hour + interval.hours;
        let mut minute = self.minute + interval.minutes;
        let mut second = self.second + interval.seconds;
        let mut nanosecond = self.nanosecond + interval.nanoseconds;

        let excess = (nanosecond / 1e9).floor() as i64;
        nanosecond -= excess as f64 * 1e9;
        second += excess;

        fn limit(value: &mut i64, low: i64, high: i64, next: &mut i64) -> bool {
            if *value < low {
                *value += high - low + 1;
                *next -= 1;
                true
            } else if *value > high {
                *value -= high - low + 1;
                *next += 1;
                true
            } else {
                false
            }
        }

        let calendar = self.calendar;
        while limit(&mut second, 0, calendar.seconds_per_minute() - 1, &mut minute) {}
        while limit(&mut minute, 0, calendar.minutes_per_hour() - 1, &mut hour) {}
        while limit(&mut hour, 0, calendar.hours_per_day() - 1, &mut day) {}
        while carry_months(&mut month, &mut year, &calendar) {}
        carry_days(&mut day, &mut month, &mut year, &calendar);

        Timestamp::from_components(
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
            self.time_zone.clone(),
            self.calendar,
        )
    }

    /// Formats this timestamp with a format.
    pub fn format(&self, format: &TimeFormat) -> String {
        format.format(self)
    }
}

/// Timestamps are equal when they have the same epoch, time zone, and
/// calendar.
impl PartialEq for Timestamp {
    fn eq(&self, other: &Timestamp) -> bool {
        self.epoch_seconds == other.epoch_seconds
            && self.time_zone == other.time_zone
            && self.calendar == other.calendar
    }
}

/// Ordering considers only the interval since the epoch, so two renderings
/// of the same moment in different zones compare as equivalent.
impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Timestamp) -> Option<Ordering> {
        self.epoch_seconds.partial_cmp(&other.epoch_seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(&TimeFormat::database()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Timestamp {
        Timestamp::from_utc(datetime, TimeZone::utc(), Calendar::gregorian())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.epoch_seconds)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let epoch_seconds = f64::deserialize(deserializer)?;
        Ok(Timestamp::new(
            epoch_seconds,
            TimeZone::utc(),
            Calendar::gregorian(),
        ))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Date
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar date without time-of-day information.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Date {
    year: i64,
    month: i64,
    day: i64,
    calendar: Calendar,
}

impl Date {
    pub fn new(year: i64, month: i64, day: i64, calendar: Calendar) -> Date {
        Date {
            year,
            month,
            day,
            calendar: calendar.in_year(year),
        }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// A timestamp at the first instant of this day.
    pub fn beginning_of_day(&self, time_zone: TimeZone) -> Timestamp {
        Timestamp::from_components(
            self.year,
            self.month,
            self.day,
            0,
            0,
            0,
            0.0,
            time_zone,
            self.calendar,
        )
    }

    /// A timestamp at the last whole second of this day.
    pub fn end_of_day(&self, time_zone: TimeZone) -> Timestamp {
        Timestamp::from_components(
            self.year,
            self.month,
            self.day,
            self.calendar.hours_per_day() - 1,
            self.calendar.minutes_per_hour() - 1,
            self.calendar.seconds_per_minute() - 1,
            0.0,
            time_zone,
            self.calendar,
        )
    }

    /// Adds the date components of an interval to this date, carrying
    /// out-of-range values; the interval's time components are ignored.
    pub fn by_adding_interval(&self, interval: TimeInterval) -> Date {
        let mut year = self.year + interval.years;
        let mut month = self.month + interval.months;
        let mut day = self.day + interval.days;
        while carry_months(&mut month, &mut year, &self.calendar) {}
        carry_days(&mut day, &mut month, &mut year, &self.calendar);
        Date::new(year, month, day, self.calendar)
    }
}

/// Dates are equal when their components and calendar system match.
impl PartialEq for Date {
    fn eq(&self, other: &Date) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.calendar.identifier() == other.calendar.identifier()
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Date) -> Option<Ordering> {
        Some(
            (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day)),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Time
// ═══════════════════════════════════════════════════════════════════════════

/// A time of day, independent of the day it occurs on.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: f64,
    time_zone: TimeZone,
}

impl Time {
    pub fn new(hour: i64, minute: i64, second: i64, nanosecond: f64, time_zone: TimeZone) -> Time {
        Time {
            hour,
            minute,
            second,
            nanosecond,
            time_zone,
        }
    }

    pub fn hour(&self) -> i64 {
        self.hour
    }

    pub fn minute(&self) -> i64 {
        self.minute
    }

    pub fn second(&self) -> i64 {
        self.second
    }

    pub fn nanosecond(&self) -> f64 {
        self.nanosecond
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Time) -> bool {
        self.hour == other.hour
            && self.minute == other.minute
            && self.second == other.second
            && self.nanosecond == other.nanosecond
            && self.time_zone == other.time_zone
    }
}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Time) -> Option<Ordering> {
        (self.hour, self.minute, self.second, self.nanosecond).partial_cmp(&(
            other.hour,
            other.minute,
            other.second,
            other.nanosecond,
        ))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02} {}",
            self.hour,
            self.minute,
            self.second,
            self.time_zone.name()
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalShorthand;
    use crate::timezone::Policy;

    fn utc_timestamp(epoch_seconds: f64) -> Timestamp {
        Timestamp::new(epoch_seconds, TimeZone::utc(), Calendar::gregorian())
    }

    #[test]
    fn localizes_known_instant() {
        let timestamp = utc_timestamp(1_431_788_231.0);
        assert_eq!(timestamp.year(), 2015);
        assert_eq!(timestamp.month(), 5);
        assert_eq!(timestamp.day(), 16);
        assert_eq!(timestamp.hour(), 14);
        assert_eq!(timestamp.minute(), 57);
        assert_eq!(timestamp.second(), 11);
        assert_eq!(timestamp.weekday(), 7);
        assert_eq!(timestamp.calendar().year(), 2015);
    }

    #[test]
    fn local_components_round_trip_to_epoch() {
        let timestamp = Timestamp::from_components(
            2015,
            5,
            16,
            14,
            57,
            11,
            0.0,
            TimeZone::utc(),
            Calendar::gregorian(),
        );
        assert!((timestamp.epoch_seconds() - 1_431_788_231.0).abs() < 0.01);
        assert_eq!(timestamp.weekday(), 7);
    }

    #[test]
    fn epoch_zero_in_each_calendar() {
        let gregorian = utc_timestamp(0.0);
        assert_eq!(
            (gregorian.year(), gregorian.month(), gregorian.day()),
            (1970, 1, 1)
        );
        assert_eq!(gregorian.hour(), 0);
        assert_eq!(gregorian.weekday(), 5);

        let islamic = Timestamp::new(0.0, TimeZone::utc(), Calendar::islamic());
        assert_eq!((islamic.year(), islamic.month(), islamic.day()), (1389, 10, 23));
        assert_eq!(islamic.weekday(), 5);

        let hebrew = Timestamp::new(0.0, TimeZone::utc(), Calendar::hebrew());
        assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5730, 4, 23));
        assert_eq!(hebrew.weekday(), 5);
    }

    #[test]
    fn negative_instants_localize() {
        let timestamp = utc_timestamp(-86_400.0);
        assert_eq!(
            (timestamp.year(), timestamp.month(), timestamp.day()),
            (1969, 12, 31)
        );
        assert_eq!(timestamp.hour(), 0);
        assert_eq!(timestamp.weekday(), 4);

        let with_time = utc_timestamp(-86_400.0 + 3_671.0);
        assert_eq!(with_time.hour(), 1);
        assert_eq!(with_time.minute(), 1);
        assert_eq!(with_time.second(), 11);
    }

    #[test]
    fn round_trips_across_calendars_and_signs() {
        let samples = [
            0.0,
            1.0,
            -1.0,
            1_431_788_231.0,
            -123_456_789.0,
            2_000_000_000.5,
        ];
        for calendar in [Calendar::gregorian(), Calendar::islamic(), Calendar::hebrew()] {
            for &epoch in &samples {
                let timestamp = Timestamp::new(epoch, TimeZone::utc(), calendar);
                let back = Timestamp::from_components(
                    timestamp.year(),
                    timestamp.month(),
                    timestamp.day(),
                    timestamp.hour(),
                    timestamp.minute(),
                    timestamp.second(),
                    timestamp.nanosecond(),
                    TimeZone::utc(),
                    calendar,
                );
                assert!(
                    (back.epoch_seconds() - epoch).abs() < 0.01,
                    "{} in {}: {} != {}",
                    epoch,
                    calendar.identifier(),
                    back.epoch_seconds(),
                    epoch
                );
            }
        }
    }

    #[test]
    fn month_boundary_resolves_to_first_of_next_month() {
        // 1970-02-01T00:00:00 exactly.
        let timestamp = utc_timestamp(2_678_400.0);
        assert_eq!(
            (timestamp.year(), timestamp.month(), timestamp.day()),
            (1970, 2, 1)
        );
        assert_eq!(timestamp.hour(), 0);

        // 1971-01-01T00:00:00 exactly.
        let year_boundary = utc_timestamp(31_536_000.0);
        assert_eq!(
            (year_boundary.year(), year_boundary.month(), year_boundary.day()),
            (1971, 1, 1)
        );
    }

    #[test]
    fn fractional_seconds_become_nanoseconds() {
        let timestamp = utc_timestamp(0.25);
        assert_eq!(timestamp.second(), 0);
        assert!((timestamp.nanosecond() - 2.5e8).abs() < 1.0);

        // Fractions of negative instants still land in [0, 1e9).
        let negative = utc_timestamp(-0.25);
        assert_eq!(negative.second(), 59);
        assert!((negative.nanosecond() - 7.5e8).abs() < 1.0);
    }

    #[test]
    fn zone_offset_shifts_local_components() {
        let zone = TimeZone::fixed(3_600);
        let timestamp = Timestamp::new(0.0, zone.clone(), Calendar::gregorian());
        assert_eq!(timestamp.hour(), 1);
        assert_eq!(timestamp.day(), 1);

        let back =
            Timestamp::from_components(1970, 1, 1, 1, 0, 0, 0.0, zone, Calendar::gregorian());
        assert!((back.epoch_seconds()).abs() < 0.01);
    }

    #[test]
    fn dst_transition_resolves_with_second_pass() {
        let zone = TimeZone::with_policies(
            "Test/Springs",
            vec![
                Policy::new(f64::MIN, "STD", 0, false),
                Policy::new(1_000.0, "DST", 3_600, true),
            ],
        );

        // Before the transition the standard offset applies.
        let before =
            Timestamp::from_components(1970, 1, 1, 0, 10, 0, 0.0, zone.clone(), Calendar::gregorian());
        assert!((before.epoch_seconds() - 600.0).abs() < 0.01);

        // Well after the transition the daylight offset applies.
        let after = Timestamp::from_components(
            1970,
            1,
            1,
            2,
            23,
            20,
            0.0,
            zone.clone(),
            Calendar::gregorian(),
        );
        assert!((after.epoch_seconds() - 5_000.0).abs() < 0.01);

        // Just after the transition the first-pass policy is wrong and the
        // second pass corrects it.
        let corrected =
            Timestamp::from_components(1970, 1, 1, 0, 20, 0, 0.0, zone, Calendar::gregorian());
        assert!((corrected.epoch_seconds() - 1_200.0).abs() < 0.01);
    }

    #[test]
    fn interval_borrow_across_month_boundary() {
        let timestamp = Timestamp::from_components(
            2015,
            3,
            16,
            0,
            0,
            0,
            0.0,
            TimeZone::utc(),
            Calendar::gregorian(),
        );
        let shifted = timestamp.by_adding_interval(1.month() + (-20).days());
        assert_eq!(
            (shifted.year(), shifted.month(), shifted.day()),
            (2015, 3, 27)
        );
    }

    #[test]
    fn interval_year_addition_preserves_month_and_day() {
        let timestamp = Timestamp::from_components(
            2015,
            3,
            16,
            0,
            0,
            0,
            0.0,
            TimeZone::utc(),
            Calendar::gregorian(),
        );
        let shifted = timestamp.by_adding_interval(1.year());
        assert_eq!(
            (shifted.year(), shifted.month(), shifted.day()),
            (2016, 3, 16)
        );
    }

    #[test]
    fn interval_overflow_into_short_month() {
        let timestamp = Timestamp::from_components(
            2015,
            1,
            31,
            0,
            0,
            0,
            0.0,
            TimeZone::utc(),
            Calendar::gregorian(),
        );
        let shifted = timestamp.by_adding_interval(1.month());
        assert_eq!(
            (shifted.year(), shifted.month(), shifted.day()),
            (2015, 3, 3)
        );
    }

    #[test]
    fn interval_time_carries() {
        let timestamp = Timestamp::from_components(
            2015,
            12,
            31,
            23,
            59,
            30,
            0.0,
            TimeZone::utc(),
            Calendar::gregorian(),
        );
        let shifted = timestamp.by_adding_interval(45.seconds());
        assert_eq!(
            (shifted.year(), shifted.month(), shifted.day()),
            (2016, 1, 1)
        );
        assert_eq!((shifted.hour(), shifted.minute(), shifted.second()), (0, 0, 15));
    }

    #[test]
    fn interval_subtraction_operator() {
        let timestamp = utc_timestamp(3_600.0);
        let back = timestamp.by_adding_interval(-(1.hour()));
        assert!((back.epoch_seconds()).abs() < 0.01);
    }

    #[test]
    fn hebrew_interval_addition_respects_leap_months() {
        // 5730 is a leap year with 13 months; adding a month near the end of
        // the year must roll into 5731 only past month 13.
        let timestamp = Timestamp::from_components(
            5730,
            12,
            10,
            0,
            0,
            0,
            0.0,
            TimeZone::utc(),
            Calendar::hebrew(),
        );
        let shifted = timestamp.by_adding_interval(1.month());
        assert_eq!((shifted.year(), shifted.month()), (5730, 13));
        let rolled = shifted.by_adding_interval(1.month());
        assert_eq!((rolled.year(), rolled.month()), (5731, 1));
    }

    #[test]
    fn ordering_compares_epoch_only() {
        let early = utc_timestamp(100.0);
        let late = Timestamp::new(200.0, TimeZone::fixed(3_600), Calendar::islamic());
        assert!(early < late);
        assert!(late > early);
    }

    #[test]
    fn equality_requires_zone_and_calendar() {
        let utc = utc_timestamp(100.0);
        let shifted = Timestamp::new(100.0, TimeZone::fixed(0), Calendar::gregorian());
        assert_ne!(utc, shifted);
        assert_eq!(utc, utc_timestamp(100.0));
    }

    #[test]
    fn in_calendar_preserves_instant() {
        let timestamp = utc_timestamp(1_431_788_231.0);
        let islamic = timestamp.in_calendar(Calendar::islamic());
        assert_eq!(islamic.epoch_seconds(), timestamp.epoch_seconds());
        assert_eq!(islamic.calendar().identifier(), "islamic");
        let back = islamic.in_calendar(Calendar::gregorian());
        assert_eq!(back.year(), 2015);
    }

    #[test]
    fn date_and_time_views() {
        let timestamp = utc_timestamp(1_431_788_231.0);
        let date = timestamp.date();
        assert_eq!(date.to_string(), "2015-05-16");
        let time = timestamp.time();
        assert_eq!(time.to_string(), "14:57:11 UTC");
    }

    #[test]
    fn date_ordering_and_arithmetic() {
        let date = Date::new(2015, 3, 16, Calendar::gregorian());
        let later = Date::new(2015, 4, 1, Calendar::gregorian());
        assert!(date < later);
        assert_eq!(
            date.by_adding_interval(1.month() + (-20).days()),
            Date::new(2015, 3, 27, Calendar::gregorian())
        );
        assert_eq!(
            date.beginning_of_day(TimeZone::utc()).epoch_seconds(),
            Timestamp::from_components(
                2015,
                3,
                16,
                0,
                0,
                0,
                0.0,
                TimeZone::utc(),
                Calendar::gregorian()
            )
            .epoch_seconds()
        );
        assert_eq!(date.end_of_day(TimeZone::utc()).hour(), 23);
    }

    #[test]
    fn chrono_round_trip() {
        let datetime = DateTime::from_timestamp(1_431_788_231, 0).expect("timestamp");
        let timestamp = Timestamp::from(datetime);
        assert_eq!(timestamp.year(), 2015);
        assert_eq!(timestamp.to_utc(), Some(datetime));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let timestamp = utc_timestamp(1_431_788_231.0);
        let json = serde_json::to_string(&timestamp).expect("serialize");
        assert_eq!(json, "1431788231.0");
        let back: Timestamp = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, timestamp);
    }
}

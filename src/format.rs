// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Formatting and parsing of timestamps.
//!
//! A [`TimeFormat`] is an ordered list of [`FormatComponent`] atoms.  Each
//! atom formats one field of a timestamp (formatting is total) and parses
//! the matching text back into a [`TimeComponents`] container (parsing
//! reports no-match by returning `None`).  Formats can be built from
//! component lists, from the named standard formats ([`TimeFormat::database`],
//! [`TimeFormat::cookie`], ...), or compiled from a `strftime`-style
//! directive string.
//!
//! Month and weekday names resolve through a [`NameLookup`] hook, falling
//! back to a built-in English table for the Gregorian calendar and finally
//! to the bare numeric value.

use crate::calendar::Calendar;
use crate::timestamp::{Date, Time, Timestamp};
use crate::timezone::TimeZone;

// ═══════════════════════════════════════════════════════════════════════════
// Name lookup
// ═══════════════════════════════════════════════════════════════════════════

/// Resolves month and weekday names, keyed by calendar identifier.
///
/// Returning `None` falls through to the built-in English table (Gregorian
/// only) and then to the numeric value.
pub trait NameLookup {
    fn month_name(&self, calendar: &str, month: i64, abbreviated: bool) -> Option<String>;
    fn weekday_name(&self, calendar: &str, weekday: i64, abbreviated: bool) -> Option<String>;
}

/// The empty lookup: every name falls through.
impl NameLookup for () {
    fn month_name(&self, _calendar: &str, _month: i64, _abbreviated: bool) -> Option<String> {
        None
    }

    fn weekday_name(&self, _calendar: &str, _weekday: i64, _abbreviated: bool) -> Option<String> {
        None
    }
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn abbreviated(name: &str) -> String {
    name.chars().take(3).collect()
}

fn builtin_month_name(calendar: &str, month: i64, abbreviate: bool) -> Option<String> {
    if calendar != "gregorian" || !(1..=12).contains(&month) {
        return None;
    }
    let name = ENGLISH_MONTHS[(month - 1) as usize];
    Some(if abbreviate {
        abbreviated(name)
    } else {
        name.to_owned()
    })
}

fn builtin_weekday_name(calendar: &str, weekday: i64, abbreviate: bool) -> Option<String> {
    if calendar != "gregorian" || !(1..=7).contains(&weekday) {
        return None;
    }
    let name = ENGLISH_WEEKDAYS[(weekday - 1) as usize];
    Some(if abbreviate {
        abbreviated(name)
    } else {
        name.to_owned()
    })
}

fn month_name(names: &dyn NameLookup, calendar: &str, month: i64, abbreviate: bool) -> String {
    names
        .month_name(calendar, month, abbreviate)
        .or_else(|| builtin_month_name(calendar, month, abbreviate))
        .unwrap_or_else(|| month.to_string())
}

fn weekday_name(names: &dyn NameLookup, calendar: &str, weekday: i64, abbreviate: bool) -> String {
    names
        .weekday_name(calendar, weekday, abbreviate)
        .or_else(|| builtin_weekday_name(calendar, weekday, abbreviate))
        .unwrap_or_else(|| weekday.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════
// Parsed components
// ═══════════════════════════════════════════════════════════════════════════

/// The partial time information accumulated while parsing.
///
/// Fields stay `None` until some atom writes them.  A zone abbreviation
/// found in the text is recorded as an override name without touching the
/// numeric fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeComponents {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub second: Option<i64>,
    pub nanosecond: f64,
    pub zone_name: Option<String>,
}

impl TimeComponents {
    pub fn new() -> TimeComponents {
        TimeComponents::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Format components
// ═══════════════════════════════════════════════════════════════════════════

/// One atom of a time format: literal text or a single semantic field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatComponent {
    /// Text reproduced verbatim when formatting, matched exactly when
    /// parsing.
    Literal(String),
    /// The calendar year, padded to `length` with `padding` and optionally
    /// truncated to its least-significant `length` digits.
    Year {
        padding: Option<char>,
        length: usize,
        truncate: bool,
    },
    /// The month number, padded to two digits.
    Month { padding: Option<char> },
    /// The month name, resolved through the name lookup.
    MonthName { abbreviate: bool },
    /// The day of the month, padded to two digits.
    Day { padding: Option<char> },
    /// The hour, on a twelve or twenty-four hour clock, padded to two
    /// digits.
    Hour {
        twelve_hour: bool,
        padding: Option<char>,
    },
    /// The minute, two digits and zero-padded.
    Minute,
    /// The second, two digits and zero-padded.
    Second,
    /// The day of the week as a number, 1 = Sunday.
    Weekday,
    /// The weekday name, resolved through the name lookup.
    WeekdayName { abbreviate: bool },
    /// The whole seconds since the Unix epoch.  Formats only; parsing
    /// always reports no-match.
    EpochSeconds,
    /// The abbreviation of the zone policy active at the instant.
    ZoneAbbreviation,
    /// The zone offset as `±HHMM`.
    ZoneOffset,
    /// `AM` or `PM`.
    Meridian,
}

impl FormatComponent {
    /// The year, four digits and zero-padded.
    pub const YEAR: FormatComponent = FormatComponent::Year {
        padding: Some('0'),
        length: 4,
        truncate: false,
    };

    /// The year, truncated to its last two digits.
    pub const SHORT_YEAR: FormatComponent = FormatComponent::Year {
        padding: Some('0'),
        length: 2,
        truncate: true,
    };

    /// The month number, two digits and zero-padded.
    pub const MONTH: FormatComponent = FormatComponent::Month { padding: Some('0') };

    /// The day of the month, two digits and zero-padded.
    pub const DAY: FormatComponent = FormatComponent::Day { padding: Some('0') };

    /// The hour on a 24-hour clock, two digits and zero-padded.
    pub const HOUR: FormatComponent = FormatComponent::Hour {
        twelve_hour: false,
        padding: Some('0'),
    };

    pub fn literal(text: &str) -> FormatComponent {
        FormatComponent::Literal(text.to_owned())
    }

    /// Formats one field of a timestamp.  Always succeeds.
    pub fn format(&self, timestamp: &Timestamp, names: &dyn NameLookup) -> String {
        match self {
            FormatComponent::Literal(text) => text.clone(),
            FormatComponent::Year {
                padding,
                length,
                truncate,
            } => {
                let mut year = timestamp.year().to_string();
                if let Some(padding) = padding {
                    year = pad(&year, *padding, *length);
                }
                if *truncate && year.chars().count() > *length {
                    let skip = year.chars().count() - length;
                    year = year.chars().skip(skip).collect();
                }
                year
            }
            FormatComponent::Month { padding } => {
                pad_optional(&timestamp.month().to_string(), *padding)
            }
            FormatComponent::MonthName { abbreviate } => month_name(
                names,
                timestamp.calendar().identifier(),
                timestamp.month(),
                *abbreviate,
            ),
            FormatComponent::Day { padding } => {
                pad_optional(&timestamp.day().to_string(), *padding)
            }
            FormatComponent::Hour {
                twelve_hour,
                padding,
            } => {
                let hour = if *twelve_hour && timestamp.hour() > 12 {
                    timestamp.hour() - 12
                } else if *twelve_hour && timestamp.hour() == 0 {
                    12
                } else {
                    timestamp.hour()
                };
                pad_optional(&hour.to_string(), *padding)
            }
            FormatComponent::Minute => pad(&timestamp.minute().to_string(), '0', 2),
            FormatComponent::Second => pad(&timestamp.second().to_string(), '0', 2),
            FormatComponent::Weekday => timestamp.weekday().to_string(),
            FormatComponent::WeekdayName { abbreviate } => weekday_name(
                names,
                timestamp.calendar().identifier(),
                timestamp.weekday(),
                *abbreviate,
            ),
            FormatComponent::EpochSeconds => (timestamp.epoch_seconds() as i64).to_string(),
            FormatComponent::ZoneAbbreviation => timestamp
                .time_zone()
                .policy(timestamp.epoch_seconds())
                .abbreviation,
            FormatComponent::ZoneOffset => {
                let seconds = timestamp.time_zone().policy(timestamp.epoch_seconds()).offset;
                let hour = (seconds.abs() / 3_600) % 24;
                let minute = (seconds.abs() / 60) % 60;
                let sign = if seconds < 0 { '-' } else { '+' };
                format!("{}{:02}{:02}", sign, hour, minute)
            }
            FormatComponent::Meridian => {
                if timestamp.hour() > 12 {
                    "PM".to_owned()
                } else {
                    "AM".to_owned()
                }
            }
        }
    }

    /// Parses this atom from the start of `input`, writing into
    /// `components`, and returns the unconsumed suffix.  `None` means the
    /// text does not match.
    pub fn parse<'a>(
        &self,
        input: &'a str,
        components: &mut TimeComponents,
        calendar: &Calendar,
        names: &dyn NameLookup,
    ) -> Option<&'a str> {
        match self {
            FormatComponent::Literal(text) => input.strip_prefix(text.as_str()),
            FormatComponent::Year {
                padding, length, ..
            } => {
                let (mut year, rest) = parse_number(input, *length, *padding)?;
                if *length == 2 {
                    year += 1900;
                }
                components.year = Some(year);
                Some(rest)
            }
            FormatComponent::Month { padding } => {
                let (month, rest) = parse_number(input, 2, *padding)?;
                components.month = Some(month);
                Some(rest)
            }
            FormatComponent::MonthName { abbreviate } => {
                let (month, rest) = parse_name(input, 1..=calendar.months(), |value| {
                    names
                        .month_name(calendar.identifier(), value, *abbreviate)
                        .or_else(|| builtin_month_name(calendar.identifier(), value, *abbreviate))
                })?;
                components.month = Some(month);
                Some(rest)
            }
            FormatComponent::Day { padding } => {
                let (day, rest) = parse_number(input, 2, *padding)?;
                components.day = Some(day);
                Some(rest)
            }
            FormatComponent::Hour { padding, .. } => {
                let (hour, rest) = parse_number(input, 2, *padding)?;
                components.hour = Some(hour);
                Some(rest)
            }
            FormatComponent::Minute => {
                let (minute, rest) = parse_number(input, 2, Some('0'))?;
                components.minute = Some(minute);
                Some(rest)
            }
            FormatComponent::Second => {
                let (second, rest) = parse_number(input, 2, Some('0'))?;
                components.second = Some(second);
                Some(rest)
            }
            FormatComponent::Weekday => {
                let (_, rest) = parse_number(input, 1, None)?;
                Some(rest)
            }
            FormatComponent::WeekdayName { abbreviate } => {
                let (_, rest) = parse_name(input, 1..=calendar.days_in_week(), |value| {
                    names
                        .weekday_name(calendar.identifier(), value, *abbreviate)
                        .or_else(|| builtin_weekday_name(calendar.identifier(), value, *abbreviate))
                })?;
                Some(rest)
            }
            FormatComponent::EpochSeconds => None,
            FormatComponent::ZoneAbbreviation => {
                let end = input
                    .find(|c: char| !c.is_ascii_alphabetic())
                    .unwrap_or(input.len());
                if end < 3 {
                    return None;
                }
                components.zone_name = Some(input[..end].to_owned());
                Some(&input[end..])
            }
            FormatComponent::ZoneOffset => {
                let bytes = input.as_bytes();
                if bytes.len() < 6 {
                    return None;
                }
                if (bytes[0] != b'+' && bytes[0] != b'-') || bytes[3] != b':' {
                    return None;
                }
                let digits = [bytes[1], bytes[2], bytes[4], bytes[5]];
                if digits.iter().any(|byte| !byte.is_ascii_digit()) {
                    return None;
                }
                Some(&input[6..])
            }
            FormatComponent::Meridian => {
                let rest = input
                    .strip_prefix("AM")
                    .or_else(|| input.strip_prefix("PM").map(|rest| {
                        components.hour = Some(components.hour.unwrap_or(0) + 12);
                        rest
                    }))?;
                Some(rest)
            }
        }
    }
}

fn pad(text: &str, padding: char, length: usize) -> String {
    let current = text.chars().count();
    if current < length {
        let mut padded: String = std::iter::repeat(padding).take(length - current).collect();
        padded.push_str(text);
        padded
    } else {
        text.to_owned()
    }
}

fn pad_optional(text: &str, padding: Option<char>) -> String {
    match padding {
        Some(padding) => pad(text, padding, 2),
        None => text.to_owned(),
    }
}

/// Splits a fixed number of characters off the front of `input`.
fn take_chars(input: &str, count: usize) -> Option<(&str, &str)> {
    let mut indices = input.char_indices();
    for _ in 0..count {
        indices.next()?;
    }
    let end = indices.next().map(|(index, _)| index).unwrap_or(input.len());
    Some(input.split_at(end))
}

/// Parses a number from the front of `input`.
///
/// With a padding character the field is fixed-width: exactly `length`
/// characters are consumed, with leading non-zero padding stripped before
/// conversion.  Without padding the longest run of digits is consumed.
fn parse_number(input: &str, length: usize, padding: Option<char>) -> Option<(i64, &str)> {
    match padding {
        Some(padding) => {
            let (head, rest) = take_chars(input, length)?;
            let digits = if padding != '0' {
                head.trim_start_matches(padding)
            } else {
                head
            };
            let value = digits.parse::<i64>().ok()?;
            Some((value, rest))
        }
        None => {
            let end = input
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(input.len());
            if end == 0 {
                return None;
            }
            let value = input[..end].parse::<i64>().ok()?;
            Some((value, &input[end..]))
        }
    }
}

/// Parses a name from the front of `input` by trying each value in `range`
/// and matching its resolved name as a prefix.
fn parse_name<'a>(
    input: &'a str,
    range: std::ops::RangeInclusive<i64>,
    resolve: impl Fn(i64) -> Option<String>,
) -> Option<(i64, &'a str)> {
    for value in range {
        if let Some(name) = resolve(value) {
            if let Some(rest) = input.strip_prefix(name.as_str()) {
                return Some((value, rest));
            }
        }
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeFormat
// ═══════════════════════════════════════════════════════════════════════════

/// An ordered sequence of format atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormat {
    components: Vec<FormatComponent>,
}

impl TimeFormat {
    pub fn new(components: Vec<FormatComponent>) -> TimeFormat {
        TimeFormat { components }
    }

    pub fn components(&self) -> &[FormatComponent] {
        &self.components
    }

    /// Compiles a `strftime`-style directive string.
    ///
    /// Unsupported directives pass through literally, percent sign
    /// included, so a format made only of unsupported directives formats
    /// as itself.
    pub fn strftime(format_string: &str) -> TimeFormat {
        use FormatComponent as C;

        let mut components = Vec::new();
        let mut working = String::new();
        let mut in_escape = false;

        for character in format_string.chars() {
            if !in_escape {
                if character == '%' {
                    in_escape = true;
                } else {
                    working.push(character);
                }
                continue;
            }
            in_escape = false;
            let expansion: Vec<FormatComponent> = match character {
                'A' => vec![C::WeekdayName { abbreviate: false }],
                'a' => vec![C::WeekdayName { abbreviate: true }],
                'B' => vec![C::MonthName { abbreviate: false }],
                'b' | 'h' => vec![C::MonthName { abbreviate: true }],
                'D' => vec![
                    C::MONTH,
                    C::literal("/"),
                    C::DAY,
                    C::literal("/"),
                    C::SHORT_YEAR,
                ],
                'd' => vec![C::DAY],
                'e' => vec![C::Day { padding: Some(' ') }],
                'F' => vec![C::YEAR, C::literal("-"), C::MONTH, C::literal("-"), C::DAY],
                'G' | 'Y' => vec![C::YEAR],
                'g' | 'y' => vec![C::SHORT_YEAR],
                'H' => vec![C::HOUR],
                'I' => vec![C::Hour {
                    twelve_hour: true,
                    padding: Some('0'),
                }],
                'k' => vec![C::Hour {
                    twelve_hour: false,
                    padding: Some(' '),
                }],
                'l' => vec![C::Hour {
                    twelve_hour: true,
                    padding: Some(' '),
                }],
                'M' => vec![C::Minute],
                'm' => vec![C::MONTH],
                'n' => vec![C::literal("\n")],
                'p' => vec![C::Meridian],
                'R' => vec![C::HOUR, C::literal(":"), C::Minute],
                'r' => vec![
                    C::Hour {
                        twelve_hour: true,
                        padding: Some('0'),
                    },
                    C::literal(":"),
                    C::Minute,
                    C::literal(":"),
                    C::Second,
                    C::literal(" "),
                    C::Meridian,
                ],
                'S' => vec![C::Second],
                's' => vec![C::EpochSeconds],
                'T' => vec![
                    C::HOUR,
                    C::literal(":"),
                    C::Minute,
                    C::literal(":"),
                    C::Second,
                ],
                't' => vec![C::literal("\t")],
                'v' => vec![
                    C::Day { padding: Some(' ') },
                    C::literal("-"),
                    C::MonthName { abbreviate: true },
                    C::literal("-"),
                    C::YEAR,
                ],
                'Z' => vec![C::ZoneAbbreviation],
                'z' => vec![C::ZoneOffset],
                '%' => vec![C::literal("%")],
                _ => Vec::new(),
            };
            if expansion.is_empty() {
                working.push('%');
                working.push(character);
            } else {
                if !working.is_empty() {
                    components.push(C::Literal(std::mem::take(&mut working)));
                }
                components.extend(expansion);
            }
        }
        if !working.is_empty() {
            components.push(C::Literal(working));
        }
        TimeFormat::new(components)
    }

    // ── formatting ────────────────────────────────────────────────────

    /// Formats a timestamp, using the built-in English names.
    pub fn format(&self, timestamp: &Timestamp) -> String {
        self.format_with(timestamp, &())
    }

    /// Formats a timestamp with an explicit name lookup.
    pub fn format_with(&self, timestamp: &Timestamp, names: &dyn NameLookup) -> String {
        self.components
            .iter()
            .map(|component| component.format(timestamp, names))
            .collect()
    }

    // ── parsing ───────────────────────────────────────────────────────

    /// Parses the atoms in order, threading the remaining input through
    /// each, and returns the unconsumed suffix.  The first atom that fails
    /// aborts the whole parse.
    pub fn parse_components<'a>(
        &self,
        input: &'a str,
        components: &mut TimeComponents,
        calendar: &Calendar,
        names: &dyn NameLookup,
    ) -> Option<&'a str> {
        let mut remaining = input;
        for component in &self.components {
            remaining = component.parse(remaining, components, calendar, names)?;
        }
        Some(remaining)
    }

    /// Parses a full timestamp.  All six of year, month, day, hour,
    /// minute, and second must be present in the text; a zone
    /// abbreviation in the text overrides the supplied zone by name.
    pub fn parse_timestamp(
        &self,
        input: &str,
        time_zone: TimeZone,
        calendar: Calendar,
    ) -> Option<Timestamp> {
        let mut components = TimeComponents::new();
        self.parse_components(input, &mut components, &calendar, &())?;
        let time_zone = match components.zone_name {
            Some(ref name) => TimeZone::named(name),
            None => time_zone,
        };
        Some(Timestamp::from_components(
            components.year?,
            components.month?,
            components.day?,
            components.hour?,
            components.minute?,
            components.second?,
            components.nanosecond,
            time_zone,
            calendar,
        ))
    }

    /// Parses a date.  Year, month, and day must be present.
    pub fn parse_date(&self, input: &str, calendar: Calendar) -> Option<Date> {
        let mut components = TimeComponents::new();
        self.parse_components(input, &mut components, &calendar, &())?;
        Some(Date::new(
            components.year?,
            components.month?,
            components.day?,
            calendar,
        ))
    }

    /// Parses a time of day.  Hour, minute, and second must be present.
    pub fn parse_time(&self, input: &str, time_zone: TimeZone) -> Option<Time> {
        let mut components = TimeComponents::new();
        self.parse_components(input, &mut components, &Calendar::gregorian(), &())?;
        Some(Time::new(
            components.hour?,
            components.minute?,
            components.second?,
            components.nanosecond,
            time_zone,
        ))
    }

    // ── standard formats ──────────────────────────────────────────────

    /// `YYYY-MM-DD HH:MM:SS`, as stored in SQL timestamp columns.
    pub fn database() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::YEAR,
            C::literal("-"),
            C::MONTH,
            C::literal("-"),
            C::DAY,
            C::literal(" "),
            C::HOUR,
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
        ])
    }

    /// `YYYY-MM-DD`, as stored in SQL date columns.
    pub fn database_date() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::YEAR,
            C::literal("-"),
            C::MONTH,
            C::literal("-"),
            C::DAY,
        ])
    }

    /// `HH:MM:SS`, as stored in SQL time columns.
    pub fn database_time() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::HOUR,
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
        ])
    }

    /// The RFC 822 date format used in HTTP headers.
    pub fn rfc822() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::WeekdayName { abbreviate: true },
            C::literal(", "),
            C::DAY,
            C::literal(" "),
            C::MonthName { abbreviate: true },
            C::literal(" "),
            C::YEAR,
            C::literal(" "),
            C::HOUR,
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::ZoneAbbreviation,
        ])
    }

    /// The RFC 850 date format, with full weekday names and two-digit
    /// years.
    pub fn rfc850() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::WeekdayName { abbreviate: false },
            C::literal(", "),
            C::DAY,
            C::literal("-"),
            C::MonthName { abbreviate: true },
            C::literal("-"),
            C::SHORT_YEAR,
            C::literal(" "),
            C::HOUR,
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::ZoneAbbreviation,
        ])
    }

    /// The RFC 2822 date format used in email headers.
    pub fn rfc2822() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::Day { padding: None },
            C::literal(" "),
            C::MonthName { abbreviate: true },
            C::literal(" "),
            C::YEAR,
            C::literal(" "),
            C::HOUR,
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::ZoneOffset,
        ])
    }

    /// The asctime-style format.
    pub fn posix() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::WeekdayName { abbreviate: true },
            C::literal(" "),
            C::MonthName { abbreviate: true },
            C::literal(" "),
            C::Day { padding: Some(' ') },
            C::literal(" "),
            C::HOUR,
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::YEAR,
        ])
    }

    /// The format used for cookie expiration dates.
    pub fn cookie() -> TimeFormat {
        TimeFormat::rfc822()
    }

    /// A human-readable long form with all date and time components.
    pub fn full() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::Day { padding: None },
            C::literal(" "),
            C::MonthName { abbreviate: false },
            C::literal(", "),
            C::YEAR,
            C::literal(", "),
            C::Hour {
                twelve_hour: false,
                padding: None,
            },
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::ZoneAbbreviation,
        ])
    }

    /// The long form in US field order, with a twelve-hour clock.
    pub fn full_us() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::MonthName { abbreviate: false },
            C::literal(" "),
            C::Day { padding: None },
            C::literal(", "),
            C::YEAR,
            C::literal(", "),
            C::Hour {
                twelve_hour: true,
                padding: None,
            },
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::Meridian,
            C::literal(" "),
            C::ZoneAbbreviation,
        ])
    }

    /// A human-readable date.
    pub fn full_date() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::Day { padding: None },
            C::literal(" "),
            C::MonthName { abbreviate: false },
            C::literal(", "),
            C::YEAR,
        ])
    }

    /// A human-readable date in US field order.
    pub fn full_date_us() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::MonthName { abbreviate: false },
            C::literal(" "),
            C::Day { padding: None },
            C::literal(", "),
            C::YEAR,
        ])
    }

    /// A human-readable time of day.
    pub fn full_time() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::Hour {
                twelve_hour: false,
                padding: None,
            },
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::ZoneAbbreviation,
        ])
    }

    /// A human-readable time of day on a twelve-hour clock.
    pub fn full_time_us() -> TimeFormat {
        use FormatComponent as C;
        TimeFormat::new(vec![
            C::Hour {
                twelve_hour: true,
                padding: None,
            },
            C::literal(":"),
            C::Minute,
            C::literal(":"),
            C::Second,
            C::literal(" "),
            C::Meridian,
            C::literal(" "),
            C::ZoneAbbreviation,
        ])
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

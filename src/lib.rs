// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Tempora
//!
//! Civil time primitives: pluggable calendar systems, time-zone policy
//! lookup backed by the platform's zone database, localized timestamps,
//! calendar-aware intervals, and strftime-style formatting and parsing.
//!
//! # Core types
//!
//! - [`Timestamp`] — an instant localized to a time zone and calendar.
//! - [`Date`] / [`Time`] — just the date half or the time half.
//! - [`Calendar`] — Gregorian, (tabular) Islamic, or Hebrew year structure.
//! - [`TimeZone`] — a name plus an ordered list of offset [`Policy`] records.
//! - [`TimeInterval`] — a signed multi-unit gap ("1 month and -20 days").
//! - [`TimeFormat`] — an atom sequence that formats and parses timestamps.
//!
//! # Example
//!
//! ```
//! use tempora::{Calendar, TimeFormat, TimeZone, Timestamp};
//! use tempora::IntervalShorthand;
//!
//! let timestamp = Timestamp::new(1431788231.0, TimeZone::utc(), Calendar::gregorian());
//! assert_eq!(timestamp.format(&TimeFormat::database()), "2015-05-16 14:57:11");
//!
//! let later = timestamp.by_adding_interval(1.month() + 2.days());
//! assert_eq!((later.month(), later.day()), (6, 18));
//! ```
//!
//! # Calendars
//!
//! Each calendar variant is parameterized by a year, since month structure
//! is year-dependent:
//!
//! | Variant | Leap rule | Months |
//! |---------|-----------|--------|
//! | [`Calendar::gregorian`] | mod 4, except centuries off mod 400 | 12 |
//! | [`Calendar::islamic`] | 11 years per 30-year cycle | 12 |
//! | [`Calendar::hebrew`] | 7 years per 19-year cycle | 12 or 13 |
//!
//! All values are immutable; transformations such as
//! [`Timestamp::in_time_zone`] and [`Calendar::in_year`] return new
//! instances, so everything here is freely shareable across threads.

mod calendar;
mod format;
mod interval;
mod timestamp;
mod timezone;
mod tzif;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{Calendar, EpochAnchor, Gregorian, Hebrew, Islamic};
pub use format::{FormatComponent, NameLookup, TimeComponents, TimeFormat};
pub use interval::{IntervalShorthand, TimeInterval};
pub use timestamp::{Date, Time, Timestamp};
pub use timezone::{Policy, TimeZone};

pub use tzif::DEFAULT_ZONE_INFO_PATH;

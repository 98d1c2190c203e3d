// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time zones as ordered lists of offset policies.
//!
//! A [`TimeZone`] is a name plus a list of [`Policy`] records sorted by the
//! instant at which each takes effect.  Each policy carries the UTC offset,
//! the abbreviation, and the daylight-saving flag observed from its starting
//! instant until the next policy begins.  A zone with no policies behaves
//! like UTC.
//!
//! Zones are normally built by decoding the platform's zone database (see
//! [`crate::tzif`]); they can also be built from an explicit policy list or
//! from a fixed offset.

use std::fmt;
use std::path::Path;

use crate::tzif;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The offset rules a time zone observes from a particular instant onward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Policy {
    /// Seconds after the Unix epoch when this policy takes effect.
    ///
    /// `f64::MIN` marks a policy that has always been in effect.
    pub beginning_timestamp: f64,
    /// The short abbreviation, e.g. `"PST"`.
    pub abbreviation: String,
    /// The offset from UTC in seconds, positive east of Greenwich.
    pub offset: i64,
    /// Whether daylight-saving time is observed under this policy.
    pub is_daylight_time: bool,
}

impl Policy {
    pub fn new(
        beginning_timestamp: f64,
        abbreviation: &str,
        offset: i64,
        is_daylight_time: bool,
    ) -> Policy {
        Policy {
            beginning_timestamp,
            abbreviation: abbreviation.to_owned(),
            offset,
            is_daylight_time,
        }
    }

    /// The synthetic policy used when a zone has no data at all.
    fn utc() -> Policy {
        Policy::new(0.0, "UTC", 0, false)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: UTC+{} ({})",
            self.beginning_timestamp, self.offset, self.abbreviation
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeZone
// ═══════════════════════════════════════════════════════════════════════════

/// A named set of UTC-offset rules for a geographic or political region.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeZone {
    name: String,
    policies: Vec<Policy>,
}

impl TimeZone {
    /// Builds a zone by decoding the zone database under the default root
    /// (`/usr/share/zoneinfo`).
    ///
    /// A name with no readable zone file leaves the policy list empty, which
    /// makes the zone behave like UTC.
    pub fn named(name: &str) -> TimeZone {
        TimeZone::named_in(name, Path::new(tzif::DEFAULT_ZONE_INFO_PATH))
    }

    /// Builds a zone by decoding the zone database under an explicit root
    /// directory.
    pub fn named_in(name: &str, root: &Path) -> TimeZone {
        TimeZone::with_policies(name, tzif::read_zone_file(name, root))
    }

    /// Builds a zone from an explicit policy list.
    ///
    /// The policies are sorted by their beginning timestamp.
    pub fn with_policies(name: &str, mut policies: Vec<Policy>) -> TimeZone {
        policies.sort_by(|left, right| {
            left.beginning_timestamp
                .partial_cmp(&right.beginning_timestamp)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        TimeZone {
            name: name.to_owned(),
            policies,
        }
    }

    /// Builds a zone with a single permanent offset, named after the offset.
    pub fn fixed(offset: i64) -> TimeZone {
        let name = if offset > 0 {
            format!("+{}", offset)
        } else {
            format!("{}", offset)
        };
        let policy = Policy::new(f64::MIN, &name, offset, false);
        TimeZone {
            name,
            policies: vec![policy],
        }
    }

    /// The UTC zone: no policies, zero offset everywhere.
    pub fn utc() -> TimeZone {
        TimeZone {
            name: "UTC".to_owned(),
            policies: Vec::new(),
        }
    }

    /// The canonical identifier for the zone.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The policies this zone observes, ordered by beginning timestamp.
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    /// The policy observed at a given instant.
    ///
    /// The instant is always interpreted as UTC.  This returns the last
    /// policy whose beginning timestamp is at or before the instant; an
    /// instant before the first policy returns the first policy, and an
    /// empty zone returns a synthetic UTC policy.
    pub fn policy(&self, timestamp: f64) -> Policy {
        if self.policies.is_empty() {
            return Policy::utc();
        }
        let index = self
            .policies
            .partition_point(|policy| policy.beginning_timestamp <= timestamp);
        if index == 0 {
            self.policies[0].clone()
        } else {
            self.policies[index - 1].clone()
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policies: Vec<String> = self.policies.iter().map(|p| p.to_string()).collect();
        write!(f, "{}: ({})", self.name, policies.join(", "))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn hong_kong() -> TimeZone {
        TimeZone::with_policies(
            "Asia/Hong_Kong",
            vec![
                Policy::new(167_167_800.0, "HKST", 32_400, true),
                Policy::new(182_889_000.0, "HKT", 28_800, false),
                Policy::new(214_338_600.0, "HKT", 28_800, false),
            ],
        )
    }

    #[test]
    fn policy_lookup_returns_last_policy_at_or_before_instant() {
        let zone = hong_kong();
        let policy = zone.policy(254_338_600.0);
        assert_eq!(policy.beginning_timestamp, 214_338_600.0);
        assert_eq!(policy.offset, 28_800);
    }

    #[test]
    fn policy_lookup_between_transitions() {
        let zone = hong_kong();
        let policy = zone.policy(170_000_000.0);
        assert_eq!(policy.beginning_timestamp, 167_167_800.0);
        assert_eq!(policy.abbreviation, "HKST");
    }

    #[test]
    fn policy_lookup_on_exact_boundary() {
        let zone = hong_kong();
        let policy = zone.policy(182_889_000.0);
        assert_eq!(policy.beginning_timestamp, 182_889_000.0);
    }

    #[test]
    fn policy_lookup_before_first_returns_first() {
        let zone = hong_kong();
        let policy = zone.policy(0.0);
        assert_eq!(policy.beginning_timestamp, 167_167_800.0);
    }

    #[test]
    fn empty_zone_behaves_as_utc() {
        let zone = TimeZone::utc();
        let policy = zone.policy(1.0e9);
        assert_eq!(policy.offset, 0);
        assert_eq!(policy.abbreviation, "UTC");
        assert!(!policy.is_daylight_time);
    }

    #[test]
    fn policies_are_sorted_on_construction() {
        let zone = TimeZone::with_policies(
            "Test",
            vec![
                Policy::new(300.0, "B", 60, false),
                Policy::new(100.0, "A", 0, false),
            ],
        );
        assert_eq!(zone.policies()[0].abbreviation, "A");
        assert_eq!(zone.policy(200.0).abbreviation, "A");
    }

    #[test]
    fn fixed_offset_zone() {
        let zone = TimeZone::fixed(3600);
        assert_eq!(zone.name(), "+3600");
        assert_eq!(zone.policy(-1.0e12).offset, 3600);
        assert_eq!(zone.policy(1.0e12).offset, 3600);

        let west = TimeZone::fixed(-18_000);
        assert_eq!(west.name(), "-18000");
    }

    #[test]
    fn zones_compare_by_name_and_policies() {
        assert_eq!(hong_kong(), hong_kong());
        assert_ne!(hong_kong(), TimeZone::utc());
        let renamed = TimeZone::with_policies("Elsewhere", hong_kong().policies().to_vec());
        assert_ne!(hong_kong(), renamed);
    }
}

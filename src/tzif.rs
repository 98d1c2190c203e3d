// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zone-database (TZif) decoder.
//!
//! Zone files are binary and big-endian: a fixed 20-byte header, six 32-bit
//! counts, the transition instants, the transition-to-type indices, the type
//! records (offset, DST flag, abbreviation offset), the NUL-terminated
//! abbreviation blob, and two indicator arrays that this decoder ignores.
//!
//! Decoding never fails loudly: a missing file, a truncated file, or a name
//! that is not a zone at all produces an empty policy list, which degrades
//! the zone to UTC behavior.

use std::path::Path;

use crate::timezone::Policy;

/// Where the platform stores its zone database.
pub const DEFAULT_ZONE_INFO_PATH: &str = "/usr/share/zoneinfo";

// ═══════════════════════════════════════════════════════════════════════════
// Cursor
// ═══════════════════════════════════════════════════════════════════════════

/// A forward-only reader over a byte buffer.
///
/// Every read checks the remaining length; reading past the end yields
/// `None`, which aborts the decode.
struct Cursor<'a> {
    bytes: &'a [u8],
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Cursor<'a> {
        Cursor { bytes }
    }

    fn skip(&mut self, count: usize) -> Option<()> {
        if self.bytes.len() < count {
            return None;
        }
        self.bytes = &self.bytes[count..];
        Some(())
    }

    fn read_u8(&mut self) -> Option<u8> {
        let (&value, rest) = self.bytes.split_first()?;
        self.bytes = rest;
        Some(value)
    }

    fn read_u32(&mut self) -> Option<u32> {
        let (head, rest) = self.bytes.split_first_chunk::<4>()?;
        self.bytes = rest;
        Some(u32::from_be_bytes(*head))
    }

    fn read_i32(&mut self) -> Option<i32> {
        self.read_u32().map(|value| value as i32)
    }

    fn read_bytes(&mut self, count: usize) -> Option<&'a [u8]> {
        if self.bytes.len() < count {
            return None;
        }
        let (head, rest) = self.bytes.split_at(count);
        self.bytes = rest;
        Some(head)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Decoding
// ═══════════════════════════════════════════════════════════════════════════

/// One type record from the file: offset, DST flag, abbreviation offset.
#[derive(Clone, Copy, Default)]
struct TypeRecord {
    offset: i32,
    is_dst: bool,
    abbreviation_index: u8,
}

/// Reads and decodes the zone file for `name` under `root`.
///
/// Returns an empty list when the name is not a zone (the version marker or
/// a tabular-data file) or when the file is missing or malformed.
pub(crate) fn read_zone_file(name: &str, root: &Path) -> Vec<Policy> {
    if name == "+VERSION" || name.ends_with(".tab") {
        return Vec::new();
    }
    log::trace!("reading zone data for {}", name);
    let bytes = match std::fs::read(root.join(name)) {
        Ok(bytes) => bytes,
        Err(error) => {
            log::warn!("no zone data for {}: {}", name, error);
            return Vec::new();
        }
    };
    match decode(&bytes) {
        Some(policies) => policies,
        None => {
            log::warn!("malformed zone data for {}", name);
            Vec::new()
        }
    }
}

/// Decodes one TZif buffer into a policy list.
///
/// One extra policy is synthesized before the first recorded transition,
/// beginning at the minimum representable instant and using the first
/// non-DST type record, so that instants predating the zone's history still
/// resolve to a sensible offset.
pub(crate) fn decode(bytes: &[u8]) -> Option<Vec<Policy>> {
    let mut cursor = Cursor::new(bytes);

    // Magic, version byte, and reserved padding.
    cursor.skip(20)?;

    let utc_indicator_count = cursor.read_u32()? as usize;
    let standard_indicator_count = cursor.read_u32()? as usize;
    let _leap_count = cursor.read_u32()?;
    let transition_count = cursor.read_u32()? as usize;
    let type_count = cursor.read_u32()? as usize;
    let abbreviation_byte_count = cursor.read_u32()? as usize;

    let mut transition_times = Vec::with_capacity(transition_count);
    for _ in 0..transition_count {
        transition_times.push(cursor.read_i32()?);
    }
    let mut transition_types = Vec::with_capacity(transition_count);
    for _ in 0..transition_count {
        transition_types.push(cursor.read_u8()?);
    }

    let mut type_records = Vec::with_capacity(type_count);
    for _ in 0..type_count {
        let offset = cursor.read_i32()?;
        let is_dst = cursor.read_u8()? == 1;
        let abbreviation_index = cursor.read_u8()?;
        type_records.push(TypeRecord {
            offset,
            is_dst,
            abbreviation_index,
        });
    }

    let abbreviation_blob = cursor.read_bytes(abbreviation_byte_count)?;

    // Standard/wall and UT/local indicators: read and ignored.
    cursor.skip(standard_indicator_count)?;
    cursor.skip(utc_indicator_count)?;

    let abbreviation_at = |index: u8| -> String {
        let start = index as usize;
        if start >= abbreviation_blob.len() {
            return String::new();
        }
        let tail = &abbreviation_blob[start..];
        let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        String::from_utf8_lossy(&tail[..end]).into_owned()
    };

    let mut policies = Vec::with_capacity(transition_count + 1);

    // Pre-history policy: the first standard-time record, or zeros.
    let prehistory = type_records
        .iter()
        .find(|record| !record.is_dst)
        .copied()
        .unwrap_or_default();
    policies.push(Policy::new(
        f64::MIN,
        &abbreviation_at(prehistory.abbreviation_index),
        prehistory.offset as i64,
        prehistory.is_dst,
    ));

    for (index, &time) in transition_times.iter().enumerate() {
        let record = type_records
            .get(transition_types[index] as usize)
            .copied()
            .unwrap_or_default();
        policies.push(Policy::new(
            time as f64,
            &abbreviation_at(record.abbreviation_index),
            record.offset as i64,
            record.is_dst,
        ));
    }

    Some(policies)
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal TZif buffer with the given transitions, type
    /// records, and abbreviation blob.
    fn tzif(
        transitions: &[(i32, u8)],
        types: &[(i32, u8, u8)],
        abbreviations: &[u8],
    ) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"TZif");
        bytes.extend_from_slice(&[0; 16]);
        bytes.extend_from_slice(&0u32.to_be_bytes()); // UT indicators
        bytes.extend_from_slice(&0u32.to_be_bytes()); // standard indicators
        bytes.extend_from_slice(&0u32.to_be_bytes()); // leap records
        bytes.extend_from_slice(&(transitions.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&(types.len() as u32).to_be_bytes());
        bytes.extend_from_slice(&(abbreviations.len() as u32).to_be_bytes());
        for &(time, _) in transitions {
            bytes.extend_from_slice(&time.to_be_bytes());
        }
        for &(_, type_index) in transitions {
            bytes.push(type_index);
        }
        for &(offset, is_dst, abbreviation_index) in types {
            bytes.extend_from_slice(&offset.to_be_bytes());
            bytes.push(is_dst);
            bytes.push(abbreviation_index);
        }
        bytes.extend_from_slice(abbreviations);
        bytes
    }

    #[test]
    fn decodes_transitions_and_types() {
        let bytes = tzif(
            &[(1_000_000, 1), (2_000_000, 0)],
            &[(-18_000, 0, 0), (-14_400, 1, 4)],
            b"EST\0EDT\0",
        );
        let policies = decode(&bytes).expect("decode");
        assert_eq!(policies.len(), 3);

        // Synthesized pre-history policy from the first non-DST record.
        assert_eq!(policies[0].beginning_timestamp, f64::MIN);
        assert_eq!(policies[0].offset, -18_000);
        assert_eq!(policies[0].abbreviation, "EST");
        assert!(!policies[0].is_daylight_time);

        assert_eq!(policies[1].beginning_timestamp, 1_000_000.0);
        assert_eq!(policies[1].offset, -14_400);
        assert_eq!(policies[1].abbreviation, "EDT");
        assert!(policies[1].is_daylight_time);

        assert_eq!(policies[2].beginning_timestamp, 2_000_000.0);
        assert_eq!(policies[2].abbreviation, "EST");
    }

    #[test]
    fn prehistory_defaults_to_zero_offset_when_all_types_are_dst() {
        let bytes = tzif(&[(500, 0)], &[(3_600, 1, 0)], b"X\0");
        let policies = decode(&bytes).expect("decode");
        assert_eq!(policies[0].offset, 0);
        assert_eq!(policies[0].abbreviation, "X");
    }

    #[test]
    fn abbreviation_offsets_may_share_suffixes() {
        // Index 1 points into the middle of "AST": the suffix "ST".
        let bytes = tzif(&[(500, 0)], &[(0, 0, 1)], b"AST\0");
        let policies = decode(&bytes).expect("decode");
        assert_eq!(policies[1].abbreviation, "ST");
    }

    #[test]
    fn truncated_file_fails_to_decode() {
        let bytes = tzif(&[(500, 0)], &[(0, 0, 0)], b"UTC\0");
        assert!(decode(&bytes[..bytes.len() - 2]).is_none());
        assert!(decode(&bytes[..10]).is_none());
        assert!(decode(&[]).is_none());
    }

    #[test]
    fn non_zone_names_decode_to_empty() {
        let root = Path::new(DEFAULT_ZONE_INFO_PATH);
        assert!(read_zone_file("+VERSION", root).is_empty());
        assert!(read_zone_file("zone1970.tab", root).is_empty());
    }

    #[test]
    fn missing_file_decodes_to_empty() {
        let root = Path::new("/nonexistent/zoneinfo");
        assert!(read_zone_file("Europe/Madrid", root).is_empty());
    }
}

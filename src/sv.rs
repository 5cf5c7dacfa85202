//! Satellite identifiers
use std::str::FromStr;

use gnss::prelude::SV;

use crate::fields::split_leading_digits;

/// Converts a satellite identifier to the modern `XNN` format.
///   - "3" or "03" (legacy bare PRN) becomes "G03"
///   - identifiers starting with 'G' are returned untouched
///   - other constellations are returned untouched
/// Only the leading digits of a bare PRN are interpreted.
/// If they cannot be, the trimmed input is returned.
pub fn normalize_sat_id(sv: &str) -> String {
    let trimmed = sv.trim();
    match trimmed.chars().next() {
        Some(c) if c.is_ascii_digit() => {
            let (prn, _) = split_leading_digits(trimmed);
            match prn.parse::<u32>() {
                Ok(prn) => format!("G{:02}", prn),
                Err(_) => trimmed.to_string(),
            }
        },
        _ => trimmed.to_string(),
    }
}

/// Interprets a normalized identifier as [SV].
/// None if it does not follow the `XNN` standard.
pub fn to_sv(sv: &str) -> Option<SV> {
    if sv.len() < 2 || !sv.is_ascii() {
        return None;
    }
    SV::from_str(sv).ok()
}

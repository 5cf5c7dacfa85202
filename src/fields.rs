//! Header field extraction and lexical classifiers
use itertools::Itertools;

/// Valid first character of an observable code
pub const OBSERVABLE_FIRST_CHARS: &str = "CLDSPT";

/// Size of a RINEX satellite identifier (`XNN`)
const SVNN_SIZE: usize = 3;

/// Extracts candidate observable codes from a header line.
/// ## Input
///   - line: header content
///   - skip: number of leading characters to discard
///   - min_len, max_len: inclusive token length bounds
///   - first_chars: permitted first characters
/// ## Output
///   - whitespace delimited tokens that match all constraints, in order
pub fn extract_obs_types(
    line: &str,
    skip: usize,
    min_len: usize,
    max_len: usize,
    first_chars: &str,
) -> Vec<String> {
    let content = match line.get(skip..) {
        Some(content) => content,
        None => return Vec::new(),
    };
    content
        .split(|c: char| c == ' ' || c == '\t')
        .filter(|token| !token.is_empty())
        .filter(|token| {
            let len = token.chars().count();
            len >= min_len && len <= max_len
        })
        .filter(|token| match token.chars().next() {
            Some(c) => first_chars.contains(c),
            None => false,
        })
        .map(|token| token.to_string())
        .collect()
}

/// Returns the part of a header line that precedes its `label`.
/// Returns the entire line when the label is not found.
pub fn header_content<'a>(line: &'a str, label: &str) -> &'a str {
    match line.find(label) {
        Some(offset) => &line[..offset],
        None => line,
    }
}

/// Lexical check of a floating point literal.
/// Spaces and tabs are ignored, a sign is only tolerated as the first
/// significant character, a single dot is tolerated,
/// everything else must be a digit or an exponent marker,
/// and at least one digit is required.
/// This is permissive: "1E" passes, "1.2.3" and "1-2" do not.
pub fn is_number(token: &str) -> bool {
    let mut dot = false;
    let mut significant = false;
    let mut digit = false;
    for c in token.chars() {
        match c {
            ' ' | '\t' => continue,
            '+' | '-' => {
                if significant {
                    return false;
                }
            },
            '.' => {
                if dot {
                    return false;
                }
                dot = true;
            },
            'E' | 'e' => {},
            c if c.is_ascii_digit() => digit = true,
            _ => return false,
        }
        significant = true;
    }
    digit
}

/// Parses one observation field. Anything that is not
/// a valid number is interpreted as a null observation.
pub(crate) fn parse_observation(token: &str) -> f64 {
    if is_number(token) {
        token.parse::<f64>().unwrap_or(0.0)
    } else {
        0.0
    }
}

/// Returns true if this satellite identifier designates a GPS vehicle.
/// Bare PRN numbers, as found in old RINEX, are considered GPS.
pub fn is_gps_sat(sv: &str) -> bool {
    match sv.chars().next() {
        Some(c) => c == 'G' || c.is_ascii_digit(),
        None => false,
    }
}

/// Splits leading digits from the rest of this token.
pub(crate) fn split_leading_digits(token: &str) -> (&str, &str) {
    let end = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    token.split_at(end)
}

/// Splits the first `n` whitespace delimited fields of this line.
/// Returns the fields and what follows them, or None
/// if the line has fewer fields.
pub(crate) fn split_fields(line: &str, n: usize) -> Option<(Vec<&str>, &str)> {
    let mut fields = Vec::with_capacity(n);
    let mut rem = line;
    for _ in 0..n {
        rem = rem.trim_start();
        if rem.is_empty() {
            return None;
        }
        let end = rem.find(|c: char| c.is_whitespace()).unwrap_or(rem.len());
        let (field, next) = rem.split_at(end);
        fields.push(field);
        rem = next;
    }
    Some((fields, rem))
}

/// Interprets one fixed width `XNN` slot.
/// Space padded PRNs (`G 3`) are zero padded, a blank system
/// letter leaves a bare PRN.
fn slot_satellite(slot: &str) -> Option<String> {
    let mut chars = slot.chars();
    let system = chars.next()?;
    let prn = chars.as_str().trim();
    if system.is_whitespace() {
        if prn.is_empty() {
            None
        } else {
            Some(prn.to_string())
        }
    } else if !prn.is_empty() && prn.chars().all(|c| c.is_ascii_digit()) {
        Some(format!("{}{:0>2}", system, prn))
    } else {
        Some(format!("{}{}", system, prn))
    }
}

/// Splits a satellite list into identifiers.
/// Lists that start with a system letter are packed `XNN` slots
/// (`G06G17R01`, `G 6G17`), read 3 columns at a time.
/// Other lists are whitespace separated bare PRNs (`6 17`, `06 17`).
pub(crate) fn split_satellites(content: &str) -> Vec<String> {
    let content = content.trim();
    match content.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => {
            let mut satellites = Vec::new();
            for slot in &content.chars().chunks(SVNN_SIZE) {
                if let Some(sv) = slot_satellite(&slot.collect::<String>()) {
                    satellites.push(sv);
                }
            }
            satellites
        },
        _ => content
            .split_ascii_whitespace()
            .map(|token| token.to_string())
            .collect(),
    }
}

//! `RINEX` revision description
use std::str::FromStr;

/// Version line label
pub const VERSION_LABEL: &str = "RINEX VERSION / TYPE";

/// Version is used to describe RINEX standards revisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((major, minor)) => Ok(Self {
                major: major.trim().parse::<u8>()?,
                minor: minor.trim().parse::<u8>()?,
            }),
            None => Ok(Self {
                major: s.trim().parse::<u8>()?,
                minor: 0,
            }),
        }
    }
}

impl Version {
    /// Builds a new `Version` object
    pub fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
    /// Parses [Version] from a "RINEX VERSION / TYPE" header line
    pub(crate) fn from_header_line(line: &str) -> Option<Self> {
        let field = line.get(..20).unwrap_or(line);
        Self::from_str(field.trim()).ok()
    }
    /// [Revision] family this version belongs to
    pub fn revision(&self) -> Revision {
        if self.major >= 3 {
            Revision::V3
        } else {
            Revision::V2
        }
    }
}

/// Record layout family: one of the two historical
/// Observation RINEX conventions.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Revision {
    /// RINEX 2 (and older): "# / TYPES OF OBSERV" header,
    /// satellites listed in the epoch descriptor
    #[default]
    V2,
    /// RINEX 3 and 4: "SYS / # / OBS TYPES" header,
    /// '>' epoch marker, one satellite per line
    V3,
}

impl Revision {
    /// Returns true for RINEX 3 and later
    pub fn is_v3(&self) -> bool {
        *self == Self::V3
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::V2 => write!(f, "RINEX2"),
            Self::V3 => write!(f, "RINEX3"),
        }
    }
}

/// Returns true if this line is the version line
/// of a RINEX 3 or 4 file.
pub fn is_rinex_v3(line: &str) -> bool {
    if line.len() < 20 || !line.contains(VERSION_LABEL) {
        return false;
    }
    match line.get(..20) {
        Some(field) => field.trim().starts_with(&['3', '4'][..]),
        None => false,
    }
}

//! Observation RINEX header
use crate::version::{Revision, Version};

mod parsing;
mod validation;

/// End of Header section reached
pub const HEADER_END_MARKER: &str = "END OF HEADER";

/// Header line that declares observables
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObsTypesLabel {
    /// RINEX3 "SYS / # / OBS TYPES"
    SysObsTypes,
    /// RINEX2 "# / TYPES OF OBSERV"
    TypesOfObserv,
}

impl ObsTypesLabel {
    /// Header label, as found in columns 60-80
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SysObsTypes => "SYS / # / OBS TYPES",
            Self::TypesOfObserv => "# / TYPES OF OBSERV",
        }
    }
    /// [Revision] expected to use this label
    pub const fn revision(&self) -> Revision {
        match self {
            Self::SysObsTypes => Revision::V3,
            Self::TypesOfObserv => Revision::V2,
        }
    }
    /// (skipped characters, min length, max length) of the observables
    /// on the first declaration line
    pub(crate) const fn layout(&self) -> (usize, usize, usize) {
        match self {
            Self::SysObsTypes => (7, 3, 4),
            Self::TypesOfObserv => (6, 2, 3),
        }
    }
}

impl std::fmt::Display for ObsTypesLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Observation RINEX [Header], limited to what is needed
/// to interprate the following records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    /// Record layout, from the version line
    pub revision: Revision,
    /// Complete revision number, when it could be parsed
    pub version: Option<Version>,
    /// GPS observables, in order of appearance in each record
    pub obs_types: Vec<String>,
    /// Number of observables declared in the header
    pub(crate) declared: Option<i64>,
    /// Kind of declaration that was actually interpreted
    pub(crate) declaration: Option<ObsTypesLabel>,
    /// Whether the version line was seen
    pub(crate) version_line: bool,
    /// Whether any observables declaration (including skipped ones) was seen
    pub(crate) obs_types_line: bool,
    /// Whether END OF HEADER was reached
    pub(crate) terminated: bool,
}

impl Header {
    /// Number of declared observables
    pub fn num_obs(&self) -> usize {
        self.obs_types.len()
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub mod epoch;
pub mod fields;
pub mod header;
pub mod sv;
pub mod version;

mod error;
mod observation;
mod reader;

#[cfg(test)]
mod tests;

use std::{
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    observation::{parse_records, RinexV2Strategy, RinexV3Strategy},
    reader::BufferedReader,
};

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        epoch::{EpochFlag, ObservationEpoch},
        error::Error,
        header::Header,
        parse,
        version::{Revision, Version},
        ParsedObservationFile,
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Epoch, TimeScale};
}

pub use error::Error;
use prelude::*;

/*
 * returns true if given line is a comment
 */
pub(crate) fn is_rinex_comment(content: &str) -> bool {
    content.len() > 60 && content.trim_end().ends_with("COMMENT")
}

/// [ParsedObservationFile] is the GPS content of an Observation RINEX,
/// whatever its revision.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedObservationFile {
    /// Record layout that was used
    pub revision: Revision,
    /// Complete revision number, when it could be parsed
    pub version: Option<Version>,
    /// GPS observables, in order of appearance in each record
    pub obs_types: Vec<String>,
    /// Complete epochs, in order of appearance
    pub epochs: Vec<ObservationEpoch>,
}

impl ParsedObservationFile {
    /// Returns true if this file follows RINEX3 (or later) conventions
    pub fn is_v3(&self) -> bool {
        self.revision.is_v3()
    }

    /// Parses an Observation RINEX file.
    /// With `flate2` enabled, ".gz" files are supported too.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufferedReader::new(path.as_ref()).map_err(Error::FileNotFound)?;
        Self::from_reader(reader)
    }

    /// Parses a gzip compressed Observation RINEX file.
    #[cfg(feature = "flate2")]
    #[cfg_attr(docsrs, doc(cfg(feature = "flate2")))]
    pub fn from_gzip_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let reader = BufferedReader::gzip(path.as_ref()).map_err(Error::FileNotFound)?;
        Self::from_reader(reader)
    }

    /// Parses Observation RINEX content from any [BufRead]er.
    /// Header errors abort before any record is interpreted.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut lines = reader.lines().peekable();
        let header = Header::parse(&mut lines)?;

        #[cfg(feature = "log")]
        debug!("{} records, {} observables", header.revision, header.num_obs());

        let epochs = match header.revision {
            Revision::V2 => parse_records(RinexV2Strategy, header.num_obs(), lines)?,
            Revision::V3 => parse_records(RinexV3Strategy, header.num_obs(), lines)?,
        };

        if epochs.is_empty() {
            return Err(Error::NoEpochs);
        }

        Ok(Self {
            revision: header.revision,
            version: header.version,
            obs_types: header.obs_types,
            epochs,
        })
    }

    /// Returns number of [ObservationEpoch]s
    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    /// Always false for a parsed file
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// [ObservationEpoch]s Iterator, in chronological order
    pub fn epoch_iter(&self) -> impl Iterator<Item = &ObservationEpoch> + '_ {
        self.epochs.iter()
    }

    /// Returns first [ObservationEpoch]
    pub fn first_epoch(&self) -> Option<&ObservationEpoch> {
        self.epochs.first()
    }

    /// Returns last [ObservationEpoch]
    pub fn last_epoch(&self) -> Option<&ObservationEpoch> {
        self.epochs.last()
    }

    /// Unique [SV]s Iterator, over all epochs
    pub fn sv_iter(&self) -> impl Iterator<Item = SV> + '_ {
        self.epochs
            .iter()
            .flat_map(|epoch| epoch.vehicles())
            .unique()
    }
}

impl FromStr for ParsedObservationFile {
    type Err = Error;
    /// Parses Observation RINEX content held in memory
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::from_reader(BufReader::new(content.as_bytes()))
    }
}

/// Parses the Observation RINEX file located at `path`.
/// Identical to [ParsedObservationFile::from_file].
pub fn parse<P: AsRef<Path>>(path: P) -> Result<ParsedObservationFile, Error> {
    ParsedObservationFile::from_file(path)
}

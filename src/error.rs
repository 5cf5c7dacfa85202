use thiserror::Error;

use crate::version::Revision;

/// Errors that may rise while parsing an Observation RINEX
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist or is not readable
    #[error("failed to open file: {0}")]
    FileNotFound(#[source] std::io::Error),
    /// Read failure once the file was opened
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// VERSION or TYPES OF OBSERV line is absent,
    /// or END OF HEADER was never reached
    #[error("missing or incomplete header")]
    MissingHeader,
    /// Declared number of observables is invalid,
    /// or does not match the list that was actually collected
    #[error("invalid observation type count: declared {declared}, collected {collected}")]
    InvalidObsTypeCount { declared: i64, collected: usize },
    /// Observable codes do not follow the naming convention of this revision
    #[error("{revision} header declares incompatible observable \"{code}\"")]
    IncompatibleObsTypes { revision: Revision, code: String },
    /// Header is valid but not a single complete epoch was found
    #[error("no complete epoch found")]
    NoEpochs,
    /// Failed to express a timestamp as [hifitime::Epoch]
    #[error("epoch conversion error: {0}")]
    EpochConversion(#[from] hifitime::HifitimeError),
}

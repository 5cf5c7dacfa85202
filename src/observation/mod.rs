//! Observation records parsing
use crate::{
    epoch::ObservationEpoch,
    error::Error,
    fields::{is_gps_sat, parse_observation},
    sv::normalize_sat_id,
};

#[cfg(feature = "log")]
use log::{debug, warn};

mod v2;
mod v3;

pub(crate) use v2::RinexV2Strategy;
pub(crate) use v3::RinexV3Strategy;

/// Epoch descriptor, as parsed from an epoch header
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EpochHeader {
    /// Empty [ObservationEpoch]
    pub epoch: ObservationEpoch,
    /// Satellites listed in the descriptor itself (RINEX2)
    pub satellites: Vec<String>,
}

/// One satellite record
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SatelliteRecord {
    /// Raw satellite identifier, if it could be determined
    pub sv: Option<String>,
    /// First two observations
    pub pair: (f64, f64),
}

/// Record layout of one RINEX revision
pub(crate) trait EpochStrategy {
    /// Tries to interprate this line as a new epoch descriptor
    fn parse_epoch_header(&self, line: &str) -> Option<EpochHeader>;

    /// Interprates a satellite record.
    /// `listed` are the satellites announced by the descriptor,
    /// `index` is the position of this record within the epoch.
    fn parse_satellite_record(
        &self,
        line: &str,
        listed: &[String],
        index: usize,
        num_obs: usize,
    ) -> SatelliteRecord;

    /// True when satellites are listed in the descriptor
    /// and may need continuation lines
    fn lists_satellites(&self) -> bool {
        false
    }

    /// Appends satellites described by a continuation line
    fn parse_satellite_ids(&self, _line: &str, _epoch: &mut ObservationEpoch, _ids: &mut Vec<String>) {}

    /// True if this line starts a new epoch, whatever the current state
    fn interrupts_epoch(&self, _line: &str) -> bool {
        false
    }
}

/// Reads `num_obs` observations from these fields.
/// Missing or invalid fields are null observations,
/// only the first two are retained.
pub(crate) fn parse_pair<'a>(fields: impl Iterator<Item = &'a str>, num_obs: usize) -> (f64, f64) {
    let mut values = fields.take(num_obs).map(parse_observation);
    let first = values.next().unwrap_or(0.0);
    let second = values.next().unwrap_or(0.0);
    (first, second)
}

/// Parses all epochs described by these record lines
pub(crate) fn parse_records<S, I>(strategy: S, num_obs: usize, lines: I) -> Result<Vec<ObservationEpoch>, Error>
where
    S: EpochStrategy,
    I: Iterator<Item = std::io::Result<String>>,
{
    let mut walker = RecordWalker::new(strategy, num_obs);
    for line in lines {
        walker.consume(&line?);
    }
    Ok(walker.finish())
}

/// Records state machine
#[derive(Debug, Default)]
enum State {
    #[default]
    AwaitingEpochHeader,
    CollectingSatelliteIds {
        epoch: ObservationEpoch,
        satellites: Vec<String>,
    },
    CollectingObservations {
        epoch: ObservationEpoch,
        satellites: Vec<String>,
        remaining: usize,
    },
}

/// Walks the record section, one line at a time
pub(crate) struct RecordWalker<S: EpochStrategy> {
    strategy: S,
    num_obs: usize,
    state: State,
    epochs: Vec<ObservationEpoch>,
}

impl<S: EpochStrategy> RecordWalker<S> {
    /// Builds a new [RecordWalker] for records made of `num_obs` observables
    pub fn new(strategy: S, num_obs: usize) -> Self {
        Self {
            strategy,
            num_obs,
            state: State::default(),
            epochs: Vec::new(),
        }
    }

    /// Consumes one line
    pub fn consume(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        self.state = match std::mem::take(&mut self.state) {
            State::AwaitingEpochHeader => self.begin_epoch(line),
            State::CollectingSatelliteIds {
                mut epoch,
                mut satellites,
            } => {
                self.strategy
                    .parse_satellite_ids(line, &mut epoch, &mut satellites);
                if satellites.len() < epoch.num_sat {
                    State::CollectingSatelliteIds { epoch, satellites }
                } else {
                    self.collect_observations(epoch, satellites)
                }
            },
            State::CollectingObservations {
                epoch,
                satellites,
                remaining,
            } => {
                if self.strategy.interrupts_epoch(line) {
                    #[cfg(feature = "log")]
                    warn!(
                        "epoch interrupted: {} satellite(s) missing",
                        remaining
                    );
                    self.begin_epoch(line)
                } else {
                    self.satellite_record(line, epoch, satellites, remaining)
                }
            },
        };
    }

    /// Concludes the walk. An epoch still being collected is discarded.
    pub fn finish(self) -> Vec<ObservationEpoch> {
        match self.state {
            State::AwaitingEpochHeader => {},
            #[cfg(feature = "log")]
            _ => warn!("discarded incomplete epoch"),
            #[cfg(not(feature = "log"))]
            _ => {},
        }
        self.epochs
    }

    fn begin_epoch(&mut self, line: &str) -> State {
        let EpochHeader { epoch, satellites } = match self.strategy.parse_epoch_header(line) {
            Some(header) => header,
            None => return State::AwaitingEpochHeader,
        };

        #[cfg(feature = "log")]
        debug!(
            "epoch {}-{:02}-{:02} {:02}:{:02}:{} flag={} nsat={}",
            epoch.year,
            epoch.month,
            epoch.day,
            epoch.hour,
            epoch.minute,
            epoch.second,
            epoch.flag,
            epoch.num_sat
        );

        if self.strategy.lists_satellites() && satellites.len() < epoch.num_sat {
            State::CollectingSatelliteIds { epoch, satellites }
        } else {
            self.collect_observations(epoch, satellites)
        }
    }

    fn collect_observations(
        &mut self,
        epoch: ObservationEpoch,
        mut satellites: Vec<String>,
    ) -> State {
        satellites.truncate(epoch.num_sat);
        let remaining = epoch.num_sat;
        if remaining == 0 {
            self.conclude(epoch);
            State::AwaitingEpochHeader
        } else {
            State::CollectingObservations {
                epoch,
                satellites,
                remaining,
            }
        }
    }

    fn satellite_record(
        &mut self,
        line: &str,
        mut epoch: ObservationEpoch,
        satellites: Vec<String>,
        remaining: usize,
    ) -> State {
        let index = satellites.len().saturating_sub(remaining);
        let record = self
            .strategy
            .parse_satellite_record(line, &satellites, index, self.num_obs);

        if let Some(sv) = record.sv {
            if is_gps_sat(&sv) {
                epoch.insert(normalize_sat_id(&sv), record.pair);
            }
        }

        let remaining = remaining - 1;
        if remaining == 0 {
            self.conclude(epoch);
            State::AwaitingEpochHeader
        } else {
            State::CollectingObservations {
                epoch,
                satellites,
                remaining,
            }
        }
    }

    fn conclude(&mut self, epoch: ObservationEpoch) {
        #[cfg(feature = "log")]
        debug!("epoch concluded: {} satellite(s)", epoch.len());
        self.epochs.push(epoch);
    }
}

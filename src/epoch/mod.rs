//! Observation epochs
use std::collections::HashMap;

use hifitime::{Epoch, TimeScale};

use crate::{prelude::SV, sv::to_sv, Error};

mod flag;
pub use flag::EpochFlag;

/// One timestamped observation snapshot
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationEpoch {
    /// Year, as encoded (RINEX2 uses two digits)
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// Seconds, with sub second resolution
    pub second: f64,
    /// Raw event flag
    pub flag: u8,
    /// Number of satellites (or special records) declared for this epoch
    pub num_sat: usize,
    /// Receiver clock offset, when provided
    pub clock_offset: Option<f64>,
    /// First two observations, per normalized satellite identifier
    pub measurements: HashMap<String, (f64, f64)>,
}

impl ObservationEpoch {
    /// Interprets the raw event flag
    pub fn event_flag(&self) -> Option<EpochFlag> {
        EpochFlag::try_from(self.flag).ok()
    }

    /// Returns number of satellites actually stored
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Returns true if no measurement was stored
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Returns measurement pair for this satellite
    pub fn get(&self, sv: &str) -> Option<(f64, f64)> {
        self.measurements.get(sv).copied()
    }

    /// Stores a measurement pair. Last write wins.
    pub(crate) fn insert(&mut self, sv: String, pair: (f64, f64)) {
        self.measurements.insert(sv, pair);
    }

    /// Returns the full year, resolving two digit RINEX2 years
    pub fn full_year(&self) -> i32 {
        if self.year < 100 {
            if self.year < 80 {
                self.year + 2000
            } else {
                self.year + 1900
            }
        } else {
            self.year
        }
    }

    /// Expresses this timestamp as [Epoch] in GPST
    pub fn epoch(&self) -> Result<Epoch, Error> {
        let whole = self.second.trunc();
        let nanos = ((self.second - whole) * 1.0E9).round() as u32;
        let epoch = Epoch::maybe_from_gregorian(
            self.full_year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            whole as u8,
            nanos.min(999_999_999),
            TimeScale::GPST,
        )?;
        Ok(epoch)
    }

    /// Iterates the satellites of this epoch as [SV]
    pub fn vehicles(&self) -> impl Iterator<Item = SV> + '_ {
        self.measurements.keys().filter_map(|sv| to_sv(sv))
    }
}

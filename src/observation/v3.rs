//! RINEX3 records: '>' delimited epochs,
//! followed by one line per satellite, starting with its identifier.
use crate::{
    epoch::ObservationEpoch,
    fields::{is_number, split_fields},
    observation::{parse_pair, EpochHeader, EpochStrategy, SatelliteRecord},
};

/// New epoch marker
const EPOCH_MARKER: char = '>';

#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct RinexV3Strategy;

impl EpochStrategy for RinexV3Strategy {
    fn parse_epoch_header(&self, line: &str) -> Option<EpochHeader> {
        let content = line.trim_start().strip_prefix(EPOCH_MARKER)?;
        let (fields, rem) = split_fields(content, 8)?;

        let year = fields[0].parse::<i32>().ok()?;
        let month = fields[1].parse::<u8>().ok()?;
        let day = fields[2].parse::<u8>().ok()?;
        let hour = fields[3].parse::<u8>().ok()?;
        let minute = fields[4].parse::<u8>().ok()?;
        if !is_number(fields[5]) {
            return None;
        }
        let second = fields[5].parse::<f64>().ok()?;
        let flag = fields[6].parse::<u8>().ok()?;
        let num_sat = fields[7].parse::<usize>().ok()?;

        // possible receiver clock offset
        let clock_offset = rem
            .split_ascii_whitespace()
            .next()
            .filter(|field| is_number(field))
            .and_then(|field| field.parse::<f64>().ok());

        Some(EpochHeader {
            epoch: ObservationEpoch {
                year,
                month,
                day,
                hour,
                minute,
                second,
                flag,
                num_sat,
                clock_offset,
                ..Default::default()
            },
            satellites: Vec::new(),
        })
    }

    fn parse_satellite_record(
        &self,
        line: &str,
        _listed: &[String],
        _index: usize,
        num_obs: usize,
    ) -> SatelliteRecord {
        let mut fields = line.split_ascii_whitespace();
        let sv = fields.next().map(|sv| sv.to_string());
        SatelliteRecord {
            sv,
            pair: parse_pair(fields, num_obs),
        }
    }

    fn interrupts_epoch(&self, line: &str) -> bool {
        line.trim_start().starts_with(EPOCH_MARKER)
    }
}

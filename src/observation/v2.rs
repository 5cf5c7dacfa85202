//! RINEX2 records: satellites are listed in the epoch descriptor,
//! which may wrap on several lines. The following lines
//! are one record per listed satellite, without identifier.
use crate::{
    epoch::ObservationEpoch,
    fields::{is_number, split_fields, split_leading_digits, split_satellites},
    observation::{parse_pair, EpochHeader, EpochStrategy, SatelliteRecord},
};

/// (yy mm dd hh mm ss.sssssss flag)
const EPOCH_FIELDS: usize = 7;

#[derive(Debug, Default, Copy, Clone)]
pub(crate) struct RinexV2Strategy;

/// Splits satellite list content from a possible trailing
/// clock offset, which is the only field with a decimal point.
fn satellites_and_clock(content: &str) -> (&str, Option<f64>) {
    match content.find('.') {
        Some(dot) => {
            let start = content[..dot]
                .rfind(|c: char| c.is_ascii_whitespace())
                .map(|i| i + 1)
                .unwrap_or(0);
            let offset = content[start..]
                .split_ascii_whitespace()
                .next()
                .filter(|field| is_number(field))
                .and_then(|field| field.parse::<f64>().ok());
            (&content[..start], offset)
        },
        None => (content, None),
    }
}

impl EpochStrategy for RinexV2Strategy {
    fn parse_epoch_header(&self, line: &str) -> Option<EpochHeader> {
        let (fields, rem) = split_fields(line, EPOCH_FIELDS)?;
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

        // satellite count may be glued to the satellite list
        let (num_sat, listed) = split_leading_digits(rem.trim_start());
        let num_sat = num_sat.parse::<usize>().ok()?;

        let (satellites, clock_offset) = satellites_and_clock(listed);

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
            satellites: split_satellites(satellites),
        })
    }

    fn lists_satellites(&self) -> bool {
        true
    }

    fn parse_satellite_ids(&self, line: &str, epoch: &mut ObservationEpoch, ids: &mut Vec<String>) {
        let (satellites, clock_offset) = satellites_and_clock(line);
        ids.extend(split_satellites(satellites));
        if clock_offset.is_some() {
            epoch.clock_offset = clock_offset;
        }
    }

    fn parse_satellite_record(
        &self,
        line: &str,
        listed: &[String],
        index: usize,
        num_obs: usize,
    ) -> SatelliteRecord {
        SatelliteRecord {
            sv: listed.get(index).cloned(),
            pair: parse_pair(line.split_ascii_whitespace(), num_obs),
        }
    }
}

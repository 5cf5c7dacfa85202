#[cfg(test)]
mod test {
    use crate::{
        prelude::*,
        tests::toolkit::{assert_measurement, parsed, v2_header, v3_header},
    };
    use std::str::FromStr;

    #[test]
    fn v3_two_satellites() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  2
G03  21000000.123  4.567  110000000.1
G07  22000000.456  7.891  115000000.2
",
            v3_header("C1C S1C L1C")
        );
        let dut = parsed(&content);
        assert!(dut.is_v3());
        assert_eq!(dut.version, Some(Version::new(3, 4)));
        assert_eq!(dut.obs_types, vec!["C1C", "S1C", "L1C"]);
        assert_eq!(dut.len(), 1);

        let epoch = dut.first_epoch().unwrap();
        assert_eq!(epoch.year, 2024);
        assert_eq!(epoch.month, 1);
        assert_eq!(epoch.day, 15);
        assert_eq!(epoch.num_sat, 2);
        assert_eq!(epoch.len(), 2);
        assert_measurement(&dut, 0, "G03", (21000000.123, 4.567));
        assert_measurement(&dut, 0, "G07", (22000000.456, 7.891));

        assert_eq!(
            epoch.epoch().unwrap(),
            Epoch::from_str("2024-01-15T00:00:00 GPST").unwrap()
        );
    }

    #[test]
    fn v2_bare_prn() {
        let content = format!(
            "{} 24 01 15 00 00 30.0000000  0  2 3 07
  21000000.123  4.567  110000000.1
  22000000.456  7.891  115000000.2
",
            v2_header("C1 S1 L1")
        );
        let dut = parsed(&content);
        assert!(!dut.is_v3());
        assert_eq!(dut.obs_types, vec!["C1", "S1", "L1"]);

        let epoch = dut.first_epoch().unwrap();
        assert_eq!(epoch.year, 24);
        assert_eq!(epoch.full_year(), 2024);
        assert_eq!(epoch.second, 30.0);
        assert!(epoch.get("3").is_none());
        assert_measurement(&dut, 0, "G03", (21000000.123, 4.567));
        assert_measurement(&dut, 0, "G07", (22000000.456, 7.891));
    }

    #[test]
    fn v2_packed_satellites_and_clock() {
        let content = format!(
            "{} 24 01 15 00 00 30.0000000  0  3G03R05G07       0.000123456
  21000000.123  4.567
  19000000.000  1.000
  22000000.456  7.891
",
            v2_header("C1 S1")
        );
        let dut = parsed(&content);
        let epoch = dut.first_epoch().unwrap();
        assert_eq!(epoch.num_sat, 3);
        assert_eq!(epoch.clock_offset, Some(0.000123456));
        // glonass consumed its record
        assert_eq!(epoch.len(), 2);
        assert!(epoch.get("R05").is_none());
        assert_measurement(&dut, 0, "G03", (21000000.123, 4.567));
        assert_measurement(&dut, 0, "G07", (22000000.456, 7.891));
    }

    #[test]
    fn v2_space_padded_prn() {
        let content = format!(
            "{} 24 01 15 00 00 30.0000000  0  3G 3G 7G12
  21000000.123  4.567
  22000000.456  7.891
  23000000.789  8.912
",
            v2_header("C1 S1")
        );
        let dut = parsed(&content);
        let epoch = dut.first_epoch().unwrap();
        let mut keys = epoch.measurements.keys().cloned().collect::<Vec<_>>();
        keys.sort();
        assert_eq!(keys, vec!["G03", "G07", "G12"]);
        assert_measurement(&dut, 0, "G03", (21000000.123, 4.567));
        assert_measurement(&dut, 0, "G07", (22000000.456, 7.891));
        assert_measurement(&dut, 0, "G12", (23000000.789, 8.912));
    }

    #[test]
    fn v2_satellite_list_continuation() {
        let mut content = v2_header("C1 L1");
        content.push_str(" 24 01 15 00 00  0.0000000  0 14G01G02G03G04G05G06G07G08G09G10G11G12\n");
        content.push_str("                                G13G14\n");
        for prn in 1..=14 {
            content.push_str(&format!("  {}.0  {}.5\n", prn, prn));
        }
        let dut = parsed(&content);
        let epoch = dut.first_epoch().unwrap();
        assert_eq!(epoch.len(), 14);
        assert_measurement(&dut, 0, "G01", (1.0, 1.5));
        assert_measurement(&dut, 0, "G12", (12.0, 12.5));
        assert_measurement(&dut, 0, "G14", (14.0, 14.5));
    }

    #[test]
    fn blank_lines_and_multiple_epochs() {
        let content = format!(
            "{}
> 2024 01 15 00 00  0.0000000  0  1

G03  1.0  2.0

> 2024 01 15 00 00 30.0000000  0  2
G03  3.0  4.0

G07  5.0  6.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_eq!(dut.len(), 2);
        assert_measurement(&dut, 0, "G03", (1.0, 2.0));
        assert_measurement(&dut, 1, "G03", (3.0, 4.0));
        assert_measurement(&dut, 1, "G07", (5.0, 6.0));
        assert_eq!(dut.last_epoch().unwrap().second, 30.0);

        let mut sv = dut.sv_iter().collect::<Vec<_>>();
        sv.sort();
        assert_eq!(
            sv,
            vec![SV::new(Constellation::GPS, 3), SV::new(Constellation::GPS, 7)]
        );
    }

    #[test]
    fn non_gps_records_consume_a_slot() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  3
G03  1.0  2.0
R01  7.0  8.0
E11  9.0  9.5
> 2024 01 15 00 00 30.0000000  0  1
G07  5.0  6.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_eq!(dut.len(), 2);
        assert_eq!(dut.epochs[0].len(), 1);
        assert_eq!(dut.epochs[0].num_sat, 3);
        assert_measurement(&dut, 0, "G03", (1.0, 2.0));
        assert_measurement(&dut, 1, "G07", (5.0, 6.0));
    }

    #[test]
    fn incomplete_last_epoch_is_discarded() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  1
G03  1.0  2.0
> 2024 01 15 00 00 30.0000000  0  3
G03  3.0  4.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_eq!(dut.len(), 1);
        assert_measurement(&dut, 0, "G03", (1.0, 2.0));
    }

    #[test]
    fn interrupted_epoch() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  3
G03  1.0  2.0
> 2024 01 15 00 00 30.0000000  0  1
G07  5.0  6.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_eq!(dut.len(), 1);
        assert_eq!(dut.epochs[0].second, 30.0);
        assert_measurement(&dut, 0, "G07", (5.0, 6.0));
    }

    #[test]
    fn empty_epoch() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  0
> 2024 01 15 00 00 30.0000000  0  1
G07  5.0  6.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_eq!(dut.len(), 2);
        assert!(dut.epochs[0].is_empty());
        assert_measurement(&dut, 1, "G07", (5.0, 6.0));
    }

    #[test]
    fn missing_and_invalid_observations() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  2
G03
G07  abc  6.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_measurement(&dut, 0, "G03", (0.0, 0.0));
        assert_measurement(&dut, 0, "G07", (0.0, 6.0));
    }

    #[test]
    fn duplicate_satellite() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  2
G03  1.0  2.0
G03  3.0  4.0
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);
        assert_eq!(dut.epochs[0].len(), 1);
        assert_measurement(&dut, 0, "G03", (3.0, 4.0));
    }

    #[test]
    fn no_epochs() {
        let content = v3_header("C1C L1C");
        assert!(matches!(
            ParsedObservationFile::from_str(&content),
            Err(Error::NoEpochs)
        ));

        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  2
G03  1.0  2.0
",
            v3_header("C1C L1C")
        );
        assert!(matches!(
            ParsedObservationFile::from_str(&content),
            Err(Error::NoEpochs)
        ));
    }

    #[test]
    fn missing_header() {
        let content = "     3.04           OBSERVATION DATA    M                   RINEX VERSION / TYPE
G    2 C1C L1C                                              SYS / # / OBS TYPES
> 2024 01 15 00 00  0.0000000  0  1
G03  1.0  2.0
";
        assert!(matches!(
            ParsedObservationFile::from_str(content),
            Err(Error::MissingHeader)
        ));
        assert!(matches!(
            ParsedObservationFile::from_str(""),
            Err(Error::MissingHeader)
        ));
    }

    #[test]
    fn invalid_obs_type_count() {
        let content = "     3.04           OBSERVATION DATA    M                   RINEX VERSION / TYPE
G    3 C1C L1C                                              SYS / # / OBS TYPES
                                                            END OF HEADER
> 2024 01 15 00 00  0.0000000  0  1
G03  1.0  2.0
";
        assert!(matches!(
            ParsedObservationFile::from_str(content),
            Err(Error::InvalidObsTypeCount {
                declared: 3,
                collected: 2
            })
        ));

        let content = "     2.11           OBSERVATION DATA    G (GPS)             RINEX VERSION / TYPE
     3    L1    L2                                          # / TYPES OF OBSERV
                                                            END OF HEADER
 24 01 15 00 00  0.0000000  0  1G03
  1.0  2.0
";
        assert!(matches!(
            ParsedObservationFile::from_str(content),
            Err(Error::InvalidObsTypeCount {
                declared: 3,
                collected: 2
            })
        ));
    }

    #[test]
    fn incompatible_obs_types() {
        let content = format!(
            "{} 24 01 15 00 00  0.0000000  0  1 03
  1.0  2.0
",
            v2_header("L1 L2 L1C")
        );
        match ParsedObservationFile::from_str(&content) {
            Err(Error::IncompatibleObsTypes { revision, code }) => {
                assert_eq!(revision, Revision::V2);
                assert_eq!(code, "L1C");
            },
            other => panic!("unexpected {:?}", other),
        }

        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  1
G03  1.0  2.0
",
            v3_header("C1C L1")
        );
        // RINEX2 codes are too short to be collected in RINEX3
        assert!(matches!(
            ParsedObservationFile::from_str(&content),
            Err(Error::InvalidObsTypeCount {
                declared: 2,
                collected: 1
            })
        ));

        // RINEX3 layout declared in a RINEX2 file
        let content = "     2.11           OBSERVATION DATA    G (GPS)             RINEX VERSION / TYPE
G    2 C1C L1C                                              SYS / # / OBS TYPES
                                                            END OF HEADER
";
        assert!(matches!(
            ParsedObservationFile::from_str(content),
            Err(Error::IncompatibleObsTypes {
                revision: Revision::V2,
                ..
            })
        ));
    }

    #[test]
    fn parsing_is_idempotent() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  2
G03  21000000.123  4.567
G07  22000000.456  7.891
",
            v3_header("C1C L1C")
        );
        assert_eq!(parsed(&content), parsed(&content));
    }
}

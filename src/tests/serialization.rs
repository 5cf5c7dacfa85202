#[cfg(test)]
mod test {
    use crate::{
        prelude::*,
        tests::toolkit::{parsed, v3_header},
    };

    #[test]
    fn json_export() {
        let content = format!(
            "{}> 2024 01 15 00 00  0.0000000  0  1
G03  21000000.125  4.5
",
            v3_header("C1C L1C")
        );
        let dut = parsed(&content);

        let json = serde_json::to_value(&dut).unwrap();
        assert_eq!(json["revision"], "V3");
        assert_eq!(json["version"]["major"], 3);
        assert_eq!(json["obs_types"][1], "L1C");
        assert_eq!(json["epochs"][0]["num_sat"], 1);
        assert_eq!(json["epochs"][0]["measurements"]["G03"][0], 21000000.125);
        assert_eq!(json["epochs"][0]["measurements"]["G03"][1], 4.5);

        let restored: ParsedObservationFile = serde_json::from_value(json).unwrap();
        assert_eq!(restored, dut);
    }
}

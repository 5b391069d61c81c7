//! Airborne flight selection

use crate::models::FlightRecord;

/// Keep only flights whose live telemetry reports them off the ground
///
/// Flights without telemetry are unknown, not airborne, and are dropped.
/// Relative order of the input is preserved.
pub fn select_airborne(records: &[FlightRecord]) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|record| record.is_airborne())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LiveStatus;

    fn flight(code: &str, on_ground: Option<bool>) -> FlightRecord {
        FlightRecord {
            airline_name: "Test Air".to_string(),
            flight_code: code.to_string(),
            live: on_ground.map(|is_on_ground| LiveStatus {
                is_on_ground,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn codes(records: &[FlightRecord]) -> Vec<&str> {
        records.iter().map(|r| r.flight_code.as_str()).collect()
    }

    #[test]
    fn keeps_only_airborne() {
        let records = vec![
            flight("TA1", Some(false)),
            flight("TA2", Some(true)),
            flight("TA3", None),
        ];

        let airborne = select_airborne(&records);

        assert_eq!(airborne, vec![records[0].clone()]);
    }

    #[test]
    fn preserves_input_order() {
        let records = vec![
            flight("TA1", Some(false)),
            flight("TA2", None),
            flight("TA3", Some(false)),
            flight("TA4", Some(true)),
            flight("TA5", Some(false)),
        ];

        let airborne = select_airborne(&records);

        assert_eq!(codes(&airborne), vec!["TA1", "TA3", "TA5"]);
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn is_idempotent() {
        let records = vec![
            flight("TA1", Some(true)),
            flight("TA2", Some(false)),
            flight("TA3", None),
            flight("TA4", Some(false)),
        ];

        let once = select_airborne(&records);
        let twice = select_airborne(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn retained_records_are_airborne() {
        let records: Vec<FlightRecord> = (0..12)
            .map(|i| {
                let status = match i % 3 {
                    0 => Some(false),
                    1 => Some(true),
                    _ => None,
                };
                flight(&format!("TA{i}"), status)
            })
            .collect();

        let airborne = select_airborne(&records);

        assert!(airborne.len() <= records.len());
        assert_eq!(airborne.len(), 4);
        assert!(airborne
            .iter()
            .all(|r| r.live.as_ref().is_some_and(|live| !live.is_on_ground)));
    }

    #[test]
    fn empty_input() {
        assert!(select_airborne(&[]).is_empty());
    }
}

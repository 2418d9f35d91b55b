use bedside_core::band::{BandTable, ScoreBand};
use bedside_core::error::CoreError;

const HEART_RATE_BANDS: &[ScoreBand] = &[
    ScoreBand::up_to(40.0, 3),
    ScoreBand::up_to(50.0, 1),
    ScoreBand::up_to(90.0, 0),
    ScoreBand::up_to(110.0, 1),
    ScoreBand::up_to(130.0, 2),
    ScoreBand::above(3),
];

static HEART_RATE: BandTable = BandTable::new("heart_rate", HEART_RATE_BANDS);

#[test]
fn upper_bounds_are_inclusive() {
    assert_eq!(HEART_RATE.points(40.0), Some(3));
    assert_eq!(HEART_RATE.points(40.5), Some(1));
    assert_eq!(HEART_RATE.points(90.0), Some(0));
    assert_eq!(HEART_RATE.points(131.0), Some(3));
    assert_eq!(HEART_RATE.points(-10.0), Some(3));
}

#[test]
fn non_finite_values_match_no_band() {
    assert_eq!(HEART_RATE.points(f64::NAN), None);
    assert_eq!(HEART_RATE.points(f64::INFINITY), None);
}

#[test]
fn well_formed_table_validates() {
    assert!(HEART_RATE.validate().is_ok());
}

#[test]
fn validate_rejects_malformed_tables() {
    const CLOSED_BANDS: &[ScoreBand] = &[ScoreBand::up_to(1.0, 0)];
    const DESCENDING_BANDS: &[ScoreBand] = &[
        ScoreBand::up_to(5.0, 0),
        ScoreBand::up_to(2.0, 1),
        ScoreBand::above(2),
    ];

    let empty = BandTable::new("empty", &[]);
    let closed = BandTable::new("closed", CLOSED_BANDS);
    let descending = BandTable::new("descending", DESCENDING_BANDS);

    assert_eq!(
        empty.validate(),
        Err(CoreError::EmptyBandTable("empty".to_string()))
    );
    assert_eq!(
        closed.validate(),
        Err(CoreError::UnboundedTail("closed".to_string()))
    );
    assert_eq!(
        descending.validate(),
        Err(CoreError::UnorderedBands {
            table: "descending".to_string(),
            index: 1
        })
    );
}

use bedside_calculators::calculators::gcs::{
    EyeOpening, GcsSeverity, Glasgow, GlasgowScore, MotorResponse, VerbalResponse,
};
use bedside_calculators::error::CalculatorError;
use bedside_calculators::fields::FieldValues;
use bedside_calculators::Calculator;
use bedside_core::tone::Tone;

#[test]
fn totals_stay_within_three_to_fifteen() {
    for eye in EyeOpening::ALL {
        for verbal in VerbalResponse::ALL {
            for motor in MotorResponse::ALL {
                let score = GlasgowScore { eye, verbal, motor };
                let total = score.total();
                assert!((3..=15).contains(&total));
                assert_eq!(total <= 8, score.severity() == GcsSeverity::Severe);
            }
        }
    }
}

#[test]
fn severity_thresholds() {
    assert_eq!(GcsSeverity::from_total(3), GcsSeverity::Severe);
    assert_eq!(GcsSeverity::from_total(8), GcsSeverity::Severe);
    assert_eq!(GcsSeverity::from_total(9), GcsSeverity::Moderate);
    assert_eq!(GcsSeverity::from_total(12), GcsSeverity::Moderate);
    assert_eq!(GcsSeverity::from_total(13), GcsSeverity::Mild);
    assert_eq!(GcsSeverity::from_total(15), GcsSeverity::Mild);
}

#[test]
fn scores_round_trip_through_option_values() {
    assert_eq!(EyeOpening::from_score(3), Some(EyeOpening::ToVoice));
    assert_eq!(VerbalResponse::from_score(0), None);
    assert_eq!(MotorResponse::from_score(7), None);
}

#[test]
fn default_form_is_fully_conscious() {
    let outcome = Glasgow.evaluate(&FieldValues::new()).unwrap();
    assert_eq!(outcome.value, Some(15.0));
    assert_eq!(outcome.tone, Tone::Ok);
    assert_eq!(outcome.detail("Components"), Some("E4 V5 M6"));
}

#[test]
fn severe_injury_is_flagged_danger() {
    let values = FieldValues::new()
        .with("eye", 2)
        .with("verbal", 2)
        .with("motor", 4);
    let outcome = Glasgow.evaluate(&values).unwrap();
    assert_eq!(outcome.value, Some(8.0));
    assert_eq!(outcome.tone, Tone::Danger);
    assert_eq!(outcome.band.as_deref(), Some("Severe (≤8)"));

    let moderate = Glasgow
        .evaluate(&FieldValues::new().with("eye", 3).with("verbal", 2).with("motor", 4))
        .unwrap();
    assert_eq!(moderate.tone, Tone::Warn);
}

#[test]
fn values_outside_the_option_set_are_rejected() {
    let err = Glasgow
        .evaluate(&FieldValues::new().with("eye", 5))
        .unwrap_err();
    assert!(matches!(
        err,
        CalculatorError::InvalidChoice { ref field_id, .. } if field_id == "eye"
    ));
}

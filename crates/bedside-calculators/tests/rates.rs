use bedside_calculators::calculators::drip::{drip_rate, drip_rate_exact, DripRate};
use bedside_calculators::calculators::infusion::{infusion_rate, InfusionRate};
use bedside_calculators::fields::FieldValues;
use bedside_calculators::Calculator;

#[test]
fn infusion_rate_over_hours_and_minutes() {
    assert_eq!(infusion_rate(500.0, 2.0, 0.0), 250.0);
    assert_eq!(infusion_rate(1000.0, 7.0, 30.0), 1000.0 / 7.5);
    assert_eq!(infusion_rate(100.0, 0.0, 30.0), 200.0);
}

#[test]
fn infusion_rate_without_duration_is_zero() {
    assert_eq!(infusion_rate(500.0, 0.0, 0.0), 0.0);
    assert_eq!(infusion_rate(500.0, -1.0, 0.0), 0.0);
    assert_eq!(infusion_rate(500.0, f64::NAN, 0.0), 0.0);
}

#[test]
fn drip_rate_rounds_to_whole_drops() {
    assert_eq!(drip_rate(100.0, 30.0, 20.0), 67.0);
    assert!((drip_rate_exact(100.0, 30.0, 20.0) - 66.666_666).abs() < 1e-4);
    assert_eq!(drip_rate(1000.0, 480.0, 60.0), 125.0);
}

#[test]
fn drip_rate_without_duration_is_zero() {
    assert_eq!(drip_rate(100.0, 0.0, 20.0), 0.0);
    assert_eq!(drip_rate(100.0, -30.0, 20.0), 0.0);
}

#[test]
fn rate_calculators_render_units() {
    let infusion = InfusionRate.evaluate(&FieldValues::new()).unwrap();
    assert_eq!(infusion.headline, "250 mL/h");

    let drip = DripRate.evaluate(&FieldValues::new()).unwrap();
    assert_eq!(drip.headline, "67 gtt/min");
    assert_eq!(drip.detail("Exact rate"), Some("66.67 gtt/min"));

    let stopped = InfusionRate
        .evaluate(&FieldValues::new().with("hours", "0"))
        .unwrap();
    assert_eq!(stopped.headline, "0 mL/h");
}

#[test]
fn huge_volume_keeps_a_finite_rate() {
    let values = FieldValues::new().with("volume", "1e307");
    let outcome = InfusionRate.evaluate(&values).unwrap();
    let rate = outcome.value.unwrap();
    assert!(rate.is_finite());
    assert_eq!(rate, 5e306);
    assert!(!outcome.headline.contains("inf"));
}

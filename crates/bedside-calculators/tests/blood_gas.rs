use bedside_calculators::calculators::blood_gas::{
    aa_gradient, alveolar_oxygen, anion_gap, classify_acid_base, corrected_anion_gap, pf_ratio,
    AcidBaseDisorder, AlveolarConditions, BloodGas, BloodGasPanel,
};
use bedside_calculators::fields::FieldValues;
use bedside_calculators::Calculator;
use bedside_core::tone::Tone;

#[test]
fn pf_ratio_reference_and_guard() {
    assert!((pf_ratio(80.0, 0.21) - 380.95).abs() < 0.01);
    assert_eq!(pf_ratio(80.0, 0.0), 0.0);
}

#[test]
fn alveolar_gas_equation_at_sea_level() {
    let sea_level = AlveolarConditions::default();
    let pao2 = alveolar_oxygen(0.21, 40.0, &sea_level);
    assert!((pao2 - 99.73).abs() < 1e-9);
    assert!((aa_gradient(95.0, 40.0, 0.21, &sea_level) - 4.73).abs() < 1e-9);
}

#[test]
fn gradient_is_never_negative() {
    let sea_level = AlveolarConditions::default();
    assert_eq!(aa_gradient(120.0, 40.0, 0.21, &sea_level), 0.0);
}

#[test]
fn altitude_lowers_alveolar_oxygen() {
    let altitude = AlveolarConditions {
        atmospheric_pressure_mmhg: 630.0,
        ..AlveolarConditions::default()
    };
    assert!(
        alveolar_oxygen(0.21, 40.0, &altitude)
            < alveolar_oxygen(0.21, 40.0, &AlveolarConditions::default())
    );
}

#[test]
fn anion_gap_and_albumin_correction() {
    assert_eq!(anion_gap(140.0, 104.0, 24.0), 12.0);
    assert_eq!(corrected_anion_gap(12.0, 4.0), 12.0);
    assert_eq!(corrected_anion_gap(16.0, 2.0), 21.0);
    assert_eq!(corrected_anion_gap(10.0, 3.0), 12.5);
}

#[test]
fn acidaemia_branches() {
    assert_eq!(classify_acid_base(7.25, 60.0, 24.0), AcidBaseDisorder::RespiratoryAcidosis);
    assert_eq!(classify_acid_base(7.25, 30.0, 15.0), AcidBaseDisorder::MetabolicAcidosis);
    assert_eq!(classify_acid_base(7.25, 40.0, 26.0), AcidBaseDisorder::MixedAcidosis);
    assert_eq!(classify_acid_base(7.30, 50.0, 26.0), AcidBaseDisorder::MixedAcidosis);
}

#[test]
fn alkalaemia_branches() {
    assert_eq!(classify_acid_base(7.55, 25.0, 24.0), AcidBaseDisorder::RespiratoryAlkalosis);
    assert_eq!(classify_acid_base(7.50, 45.0, 32.0), AcidBaseDisorder::MetabolicAlkalosis);
    assert_eq!(classify_acid_base(7.50, 40.0, 25.0), AcidBaseDisorder::MixedAlkalosis);
}

#[test]
fn normal_range_is_inclusive() {
    assert_eq!(classify_acid_base(7.35, 60.0, 10.0), AcidBaseDisorder::NormalOrMixed);
    assert_eq!(classify_acid_base(7.45, 20.0, 40.0), AcidBaseDisorder::NormalOrMixed);
}

#[test]
fn non_finite_input_is_indeterminate() {
    assert_eq!(classify_acid_base(f64::NAN, 40.0, 24.0), AcidBaseDisorder::Indeterminate);
    assert_eq!(classify_acid_base(7.4, f64::INFINITY, 24.0), AcidBaseDisorder::Indeterminate);
}

#[test]
fn panel_interpretation_combines_everything() {
    let panel = BloodGasPanel {
        ph: 7.28,
        pao2: 60.0,
        paco2: 30.0,
        fio2: 0.4,
        bicarbonate: 14.0,
        sodium: 138.0,
        chloride: 100.0,
        albumin: 2.0,
    };
    let result = panel.interpret(&AlveolarConditions::default());
    assert_eq!(result.disorder, AcidBaseDisorder::MetabolicAcidosis);
    assert_eq!(result.pf_ratio, 150.0);
    assert_eq!(result.anion_gap, 24.0);
    assert_eq!(result.corrected_anion_gap, 29.0);
}

#[test]
fn calculator_defaults_are_normal() {
    let outcome = BloodGas::default().evaluate(&FieldValues::new()).unwrap();
    assert_eq!(outcome.headline, "Normal or mixed");
    assert_eq!(outcome.tone, Tone::Ok);
    assert_eq!(outcome.detail("A–a gradient"), Some("4.73 mmHg"));
    assert_eq!(outcome.detail("Anion gap"), Some("12 mmol/L"));
}

#[test]
fn calculator_uses_configured_conditions() {
    let altitude = BloodGas {
        conditions: AlveolarConditions {
            atmospheric_pressure_mmhg: 630.0,
            ..AlveolarConditions::default()
        },
    };
    let outcome = altitude.evaluate(&FieldValues::new().with("pao2", 60)).unwrap();
    // 0.21 × (630 − 47) − 40 ÷ 0.8 = 72.43
    assert_eq!(outcome.detail("PAO₂"), Some("72.43 mmHg"));
    assert_eq!(outcome.detail("A–a gradient"), Some("12.43 mmHg"));
}

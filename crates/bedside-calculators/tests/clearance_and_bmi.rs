use bedside_calculators::calculators::bmi::{body_mass_index, BmiBand, BodyMassIndex};
use bedside_calculators::calculators::crcl::{
    cockcroft_gault, creatinine_mg_dl, CreatinineClearance, CreatinineUnit, Sex,
};
use bedside_calculators::fields::FieldValues;
use bedside_calculators::Calculator;
use bedside_core::tone::Tone;

#[test]
fn cockcroft_gault_female_reference() {
    let crcl = cockcroft_gault(30.0, 60.0, Sex::Female, 70.0, CreatinineUnit::MicromolPerLitre);
    assert!((crcl - 98.4).abs() < 0.01, "got {crcl}");
}

#[test]
fn cockcroft_gault_male_in_mg_dl() {
    let crcl = cockcroft_gault(60.0, 80.0, Sex::Male, 1.2, CreatinineUnit::MgPerDecilitre);
    assert!((crcl - 6400.0 / 86.4).abs() < 1e-9);
}

#[test]
fn unit_conversion_uses_88_4() {
    assert_eq!(creatinine_mg_dl(88.4, CreatinineUnit::MicromolPerLitre), 1.0);
    assert_eq!(creatinine_mg_dl(1.3, CreatinineUnit::MgPerDecilitre), 1.3);
}

#[test]
fn zero_creatinine_gives_zero_clearance() {
    assert_eq!(
        cockcroft_gault(30.0, 60.0, Sex::Male, 0.0, CreatinineUnit::MicromolPerLitre),
        0.0
    );
    assert_eq!(
        cockcroft_gault(30.0, 60.0, Sex::Male, -1.0, CreatinineUnit::MgPerDecilitre),
        0.0
    );
}

#[test]
fn clearance_calculator_reads_choices() {
    let outcome = CreatinineClearance.evaluate(&FieldValues::new()).unwrap();
    assert_eq!(outcome.headline, "CrCl ≈ 98.4 mL/min");
    assert_eq!(outcome.tone, Tone::Info);

    let male = CreatinineClearance
        .evaluate(
            &FieldValues::new()
                .with("sex", "M")
                .with("unit", "mgdl")
                .with("age", 60)
                .with("weight", 80)
                .with("creatinine", "1,2"),
        )
        .unwrap();
    assert_eq!(male.value, Some(74.07));
    assert_eq!(male.detail("Creatinine"), Some("1.2 mg/dL"));
}

#[test]
fn bmi_reference_and_bands() {
    let bmi = body_mass_index(170.0, 60.0);
    assert!((bmi - 20.76).abs() < 0.01);
    assert_eq!(BmiBand::from_bmi(bmi), BmiBand::Normal);

    assert_eq!(BmiBand::from_bmi(18.4), BmiBand::Underweight);
    assert_eq!(BmiBand::from_bmi(18.5), BmiBand::Normal);
    assert_eq!(BmiBand::from_bmi(25.0), BmiBand::Overweight);
    assert_eq!(BmiBand::from_bmi(30.0), BmiBand::Obese);
}

#[test]
fn bmi_without_height_is_zero() {
    assert_eq!(body_mass_index(0.0, 60.0), 0.0);
    assert_eq!(body_mass_index(-170.0, 60.0), 0.0);
    assert_eq!(body_mass_index(f64::NAN, 60.0), 0.0);
}

#[test]
fn bmi_calculator_headline() {
    let outcome = BodyMassIndex
        .evaluate(&FieldValues::new().with("height", 180).with("weight", 100))
        .unwrap();
    assert_eq!(outcome.headline, "BMI = 30.86 — Obese");
    assert_eq!(outcome.band.as_deref(), Some("Obese"));
}

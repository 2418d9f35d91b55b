use bedside_calculators::calculators::blood_gas::{AlveolarConditions, BloodGasPanel};
use bedside_calculators::fields::FieldValues;
use bedside_calculators::get_calculator;
use bedside_calculators::selftest::{evaluate_scenarios, run_self_test, Scenario};
use bedside_export::error::ExportError;
use bedside_export::render::{render_builtin, render_template};
use bedside_export::styles::RenderOptions;
use bedside_export::summary::{
    blood_gas_summary, render_outcome, render_outcome_with, self_test_report,
};

#[test]
fn outcome_lists_headline_details_and_footnote() {
    let news2 = get_calculator("news2").unwrap();
    let outcome = news2
        .evaluate(&FieldValues::new().with("respiratory_rate", 26))
        .unwrap();

    let text = render_outcome(news2.name(), &outcome, RenderOptions::default()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "NEWS2 (adults)");
    assert_eq!(lines[1], "[info] Total score: 3 — Low");
    assert!(lines.contains(&"  RR: 3"));
    assert!(lines.contains(&"  AVPU: 0"));
    assert!(text.contains("Royal College of Physicians"));
}

#[test]
fn options_strip_markers_details_and_footnote() {
    let dose = get_calculator("dose").unwrap();
    let outcome = dose.evaluate(&FieldValues::new()).unwrap();
    let options = RenderOptions {
        tone_marker: false,
        show_details: false,
        show_footnote: false,
    };

    let text = render_outcome(dose.name(), &outcome, options).unwrap();
    assert_eq!(text, "Dose calculation\n70 mg total → 7 mL to draw.\n");
}

#[test]
fn incomplete_outcome_is_labelled() {
    let news2 = get_calculator("news2").unwrap();
    let outcome = news2
        .evaluate(&FieldValues::new().with("spo2", "?"))
        .unwrap();
    let text = render_outcome(news2.name(), &outcome, RenderOptions::default()).unwrap();
    assert!(text.starts_with("NEWS2 (adults) (incomplete)\n"));
    assert!(text.contains("  SpO₂: -"));
}

#[test]
fn custom_outcome_template() {
    let bmi = get_calculator("bmi").unwrap();
    let outcome = bmi.evaluate(&FieldValues::new()).unwrap();
    let text = render_outcome_with(
        "{{ calculator_id }}={{ value }} {{ unit }} ({{ band }})",
        bmi.name(),
        &outcome,
        RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(text, "bmi=20.76 kg/m² (Normal weight)");
}

#[test]
fn blood_gas_summary_is_copy_ready() {
    let panel = BloodGasPanel {
        ph: 7.28,
        pao2: 80.0,
        paco2: 30.0,
        fio2: 0.21,
        bicarbonate: 14.0,
        sodium: 138.0,
        chloride: 100.0,
        albumin: 2.0,
    };
    let result = panel.interpret(&AlveolarConditions::default());
    let text = blood_gas_summary(&result).unwrap();

    assert!(text.starts_with("Blood gas summary\n"));
    assert!(text.contains("pH 7.28 | PaCO₂ 30 mmHg | HCO₃⁻ 14 mmol/L"));
    assert!(text.contains("P/F 380.95"));
    assert!(text.contains("Anion gap 24 mmol/L | corrected 29 mmol/L (albumin 2 g/dL)"));
    assert!(text.trim_end().ends_with("Primary disorder: Metabolic acidosis"));
}

#[test]
fn self_test_panel_reports_status_and_cases() {
    let text = self_test_report(&run_self_test()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Built-in tests: OK (7/7)"));
    assert!(text.contains("Drops/min 100 mL, 30 min, DF20: expected 67 / got 67 — OK"));
    assert_eq!(lines.count(), 7);
}

#[test]
fn self_test_panel_shows_failures() {
    let table = [Scenario {
        name: "broken",
        expected: 1.0,
        compute: || 2.0,
    }];
    let text = self_test_report(&evaluate_scenarios(&table, 0.02)).unwrap();
    assert_eq!(
        text,
        "Built-in tests: FAILED (0/1)\nbroken: expected 1 / got 2 — KO\n"
    );
}

#[test]
fn template_errors_are_reported() {
    let parse = render_template("bad.txt", "{% if %}", &serde_json::json!({}));
    assert!(matches!(parse, Err(ExportError::TemplateParse(_))));

    let missing = render_builtin("nope.txt", &serde_json::json!({}));
    assert!(matches!(missing, Err(ExportError::TemplateNotFound(name)) if name == "nope.txt"));

    let render = render_template("undefined.txt", "{{ missing }}", &serde_json::json!({}));
    assert!(matches!(render, Err(ExportError::TemplateRender(_))));
}

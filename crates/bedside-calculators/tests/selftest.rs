use bedside_calculators::selftest::{
    evaluate_scenarios, run_self_test, run_self_test_with, scenarios, Scenario,
};

#[test]
fn built_in_scenarios_all_pass() {
    let report = run_self_test();
    assert_eq!(report.cases.len(), 7);
    assert!(report.all_pass, "failures: {:?}", report.failed().collect::<Vec<_>>());
    assert_eq!(report.passed(), 7);
    assert_eq!(report.tolerance, 0.02);
}

#[test]
fn actual_values_are_recomputed() {
    let report = run_self_test();
    let by_name = |prefix: &str| {
        report
            .cases
            .iter()
            .find(|c| c.name.starts_with(prefix))
            .unwrap()
            .actual
    };
    assert_eq!(by_name("Infusion rate"), 250.0);
    assert_eq!(by_name("Drops/min"), 67.0);
    assert_eq!(by_name("Dose mg/kg"), 6.0);
    assert!((by_name("Cockcroft") - 98.3976).abs() < 1e-3);
    assert!((by_name("A–a gradient") - 4.73).abs() < 1e-9);
    assert_eq!(by_name("Corrected anion gap"), 21.0);
}

#[test]
fn a_mismatch_is_reported_not_fatal() {
    let table = vec![
        Scenario {
            name: "always right",
            expected: 1.0,
            compute: || 1.0,
        },
        Scenario {
            name: "always wrong",
            expected: 10.0,
            compute: || 20.0,
        },
    ];
    let report = evaluate_scenarios(&table, 0.02);
    assert!(!report.all_pass);
    assert_eq!(report.passed(), 1);
    let failed: Vec<_> = report.failed().map(|c| c.name.as_str()).collect();
    assert_eq!(failed, vec!["always wrong"]);
}

#[test]
fn zero_tolerance_exposes_rounded_expectations() {
    let report = run_self_test_with(0.0);
    assert!(!report.all_pass);
    // Exact literals still pass.
    assert!(report
        .cases
        .iter()
        .any(|c| c.name.starts_with("Infusion rate") && c.pass));
    assert_eq!(report.cases.len(), scenarios().len());
}

//! Built-in self-test.
//!
//! Recomputes a fixed table of literal scenarios through the formula
//! library and compares each against its expected value. A failing
//! scenario is reported, never fatal.

use bedside_core::numeric::{approx_eq, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::calculators::blood_gas::{aa_gradient, corrected_anion_gap, pf_ratio, AlveolarConditions};
use crate::calculators::crcl::{cockcroft_gault, CreatinineUnit, Sex};
use crate::calculators::dose::weight_based_volume;
use crate::calculators::drip::drip_rate;
use crate::calculators::infusion::infusion_rate;

/// A literal scenario: name, expected value, and how to recompute it.
pub struct Scenario {
    pub name: &'static str,
    pub expected: f64,
    pub compute: fn() -> f64,
}

/// The fixed scenario table.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "Infusion rate 500 mL over 2 h",
            expected: 250.0,
            compute: || infusion_rate(500.0, 2.0, 0.0),
        },
        Scenario {
            name: "Drops/min 100 mL, 30 min, DF20",
            expected: 67.0,
            compute: || drip_rate(100.0, 30.0, 20.0),
        },
        Scenario {
            name: "Dose mg/kg 60 kg, 1 mg/kg, 10 mg/mL → mL",
            expected: 6.0,
            compute: || weight_based_volume(60.0, 1.0, 10.0),
        },
        Scenario {
            name: "Cockcroft–Gault F 30 y, 60 kg, 70 µmol/L",
            expected: 98.46,
            compute: || {
                cockcroft_gault(30.0, 60.0, Sex::Female, 70.0, CreatinineUnit::MicromolPerLitre)
            },
        },
        Scenario {
            name: "P/F ratio PaO₂ 80, FiO₂ 0.21",
            expected: 380.95,
            compute: || pf_ratio(80.0, 0.21),
        },
        Scenario {
            name: "A–a gradient PaO₂ 95, PaCO₂ 40, FiO₂ 0.21, sea level",
            expected: 4.7,
            compute: || aa_gradient(95.0, 40.0, 0.21, &AlveolarConditions::default()),
        },
        Scenario {
            name: "Corrected anion gap AG 16, albumin 2.0 g/dL",
            expected: 21.0,
            compute: || corrected_anion_gap(16.0, 2.0),
        },
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestCase {
    pub name: String,
    pub expected: f64,
    pub actual: f64,
    pub pass: bool,
}

impl TestCase {
    pub fn evaluate(scenario: &Scenario, tolerance: f64) -> Self {
        let actual = (scenario.compute)();
        let pass = approx_eq(actual, scenario.expected, tolerance);
        if pass {
            debug!(
                scenario = scenario.name,
                expected = scenario.expected,
                actual,
                "self-test passed"
            );
        } else {
            warn!(
                scenario = scenario.name,
                expected = scenario.expected,
                actual,
                "self-test failed"
            );
        }
        Self {
            name: scenario.name.to_string(),
            expected: scenario.expected,
            actual,
            pass,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelfTestReport {
    pub cases: Vec<TestCase>,
    pub tolerance: f64,
    pub all_pass: bool,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.pass).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &TestCase> {
        self.cases.iter().filter(|c| !c.pass)
    }
}

/// Run the self-test with the default 2% tolerance.
pub fn run_self_test() -> SelfTestReport {
    run_self_test_with(DEFAULT_TOLERANCE)
}

pub fn run_self_test_with(tolerance: f64) -> SelfTestReport {
    evaluate_scenarios(&scenarios(), tolerance)
}

/// Evaluate an arbitrary scenario table.
pub fn evaluate_scenarios(scenarios: &[Scenario], tolerance: f64) -> SelfTestReport {
    let cases: Vec<TestCase> = scenarios
        .iter()
        .map(|s| TestCase::evaluate(s, tolerance))
        .collect();
    let all_pass = cases.iter().all(|c| c.pass);
    SelfTestReport {
        cases,
        tolerance,
        all_pass,
    }
}

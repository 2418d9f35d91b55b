use bedside_calculators::calculators::blood_gas::BloodGasResult;
use bedside_calculators::outcome::{Detail, Outcome};
use bedside_calculators::selftest::SelfTestReport;
use bedside_core::numeric::display;
use serde::Serialize;

use crate::error::ExportError;
use crate::render::{render_builtin, render_template};
use crate::styles::RenderOptions;
use crate::templates;

/// Template variables for an outcome. Numbers are pre-formatted so the
/// text matches the result panels.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeContext<'a> {
    pub name: &'a str,
    pub calculator_id: &'a str,
    pub headline: &'a str,
    pub value: Option<String>,
    pub unit: Option<&'a str>,
    pub band: Option<&'a str>,
    pub tone: &'static str,
    pub details: &'a [Detail],
    pub footnote: Option<&'a str>,
    pub complete: bool,
    pub tone_marker: bool,
    pub show_details: bool,
}

impl<'a> OutcomeContext<'a> {
    pub fn new(name: &'a str, outcome: &'a Outcome, options: RenderOptions) -> Self {
        Self {
            name,
            calculator_id: &outcome.calculator_id,
            headline: &outcome.headline,
            value: outcome.value.map(display),
            unit: outcome.unit.as_deref(),
            band: outcome.band.as_deref(),
            tone: outcome.tone.as_str(),
            details: &outcome.details,
            footnote: outcome
                .footnote
                .as_deref()
                .filter(|_| options.show_footnote),
            complete: outcome.complete,
            tone_marker: options.tone_marker,
            show_details: options.show_details,
        }
    }
}

/// Render an outcome with the built-in layout.
pub fn render_outcome(
    name: &str,
    outcome: &Outcome,
    options: RenderOptions,
) -> Result<String, ExportError> {
    render_builtin(templates::OUTCOME, &OutcomeContext::new(name, outcome, options))
}

/// Render an outcome with a caller-supplied template.
pub fn render_outcome_with(
    template_content: &str,
    name: &str,
    outcome: &Outcome,
    options: RenderOptions,
) -> Result<String, ExportError> {
    render_template(
        "custom.txt",
        template_content,
        &OutcomeContext::new(name, outcome, options),
    )
}

#[derive(Debug, Clone, Serialize)]
struct BloodGasContext {
    ph: String,
    pao2: String,
    paco2: String,
    fio2: String,
    hco3: String,
    albumin: String,
    pf_ratio: String,
    alveolar_oxygen: String,
    aa_gradient: String,
    anion_gap: String,
    corrected_anion_gap: String,
    disorder: &'static str,
}

/// Copy-ready plain-text summary of a blood gas.
pub fn blood_gas_summary(result: &BloodGasResult) -> Result<String, ExportError> {
    let panel = &result.panel;
    let context = BloodGasContext {
        ph: display(panel.ph),
        pao2: display(panel.pao2),
        paco2: display(panel.paco2),
        fio2: display(panel.fio2),
        hco3: display(panel.bicarbonate),
        albumin: display(panel.albumin),
        pf_ratio: display(result.pf_ratio),
        alveolar_oxygen: display(result.alveolar_oxygen),
        aa_gradient: display(result.aa_gradient),
        anion_gap: display(result.anion_gap),
        corrected_anion_gap: display(result.corrected_anion_gap),
        disorder: result.disorder.label(),
    };
    render_builtin(templates::BLOOD_GAS_SUMMARY, &context)
}

#[derive(Debug, Clone, Serialize)]
struct CaseContext<'a> {
    name: &'a str,
    expected: String,
    actual: String,
    pass: bool,
}

#[derive(Debug, Clone, Serialize)]
struct SelfTestContext<'a> {
    all_pass: bool,
    passed: usize,
    total: usize,
    cases: Vec<CaseContext<'a>>,
}

/// The self-test panel: a status line, then one line per scenario.
pub fn self_test_report(report: &SelfTestReport) -> Result<String, ExportError> {
    let context = SelfTestContext {
        all_pass: report.all_pass,
        passed: report.passed(),
        total: report.cases.len(),
        cases: report
            .cases
            .iter()
            .map(|c| CaseContext {
                name: &c.name,
                expected: display(c.expected),
                actual: display(c.actual),
                pass: c.pass,
            })
            .collect(),
    };
    render_builtin(templates::SELF_TEST, &context)
}

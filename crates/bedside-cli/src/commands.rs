use std::path::{Path, PathBuf};

use bedside_calculators::calculators::blood_gas::BloodGas;
use bedside_calculators::error::CalculatorError;
use bedside_calculators::fields::{FieldEntry, FieldKind, FieldValues, Inputs};
use bedside_calculators::selftest::run_self_test_with;
use bedside_calculators::{all_calculators_with, require_calculator, Calculator};
use bedside_export::styles::RenderOptions;
use bedside_export::summary::{
    blood_gas_summary, render_outcome, render_outcome_with, self_test_report,
};
use eyre::Result;

use crate::config::{self, BedsideConfig};

pub struct CalcRequest {
    pub id: String,
    pub entries: Vec<FieldEntry>,
    pub json: bool,
    pub strict: bool,
    pub summary: bool,
    pub template: Option<PathBuf>,
    pub brief: bool,
}

pub fn list(settings: &BedsideConfig, json: bool) -> Result<()> {
    let calculators = all_calculators_with(settings.conditions());

    if json {
        let listing: Vec<serde_json::Value> = calculators
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id(),
                    "name": c.name(),
                    "subtitle": c.subtitle(),
                    "fields": c.fields(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for calculator in &calculators {
        println!("{} — {} ({})", calculator.id(), calculator.name(), calculator.subtitle());
        for field in calculator.fields() {
            let unit = field
                .unit
                .as_deref()
                .map(|u| format!(" [{u}]"))
                .unwrap_or_default();
            let extra = match field.kind {
                FieldKind::Choice => {
                    let options: Vec<&str> =
                        field.options.iter().map(|o| o.value.as_str()).collect();
                    format!(" one of {}", options.join("|"))
                }
                FieldKind::Toggle => " true|false".to_string(),
                FieldKind::Number => String::new(),
            };
            println!(
                "    {}{unit}{extra}, default {} — {}",
                field.id, field.default, field.label
            );
        }
    }
    Ok(())
}

pub fn calc(settings: &BedsideConfig, request: &CalcRequest) -> Result<()> {
    print!("{}", calc_output(settings, request)?);
    Ok(())
}

/// Everything `calc` prints for `request`.
fn calc_output(settings: &BedsideConfig, request: &CalcRequest) -> Result<String> {
    let conditions = settings.conditions();
    let calculator = require_calculator(&request.id, conditions)?;
    let values = FieldValues::from_entries(&request.entries);

    let problems = calculator.validate_entries(&values);
    for problem in &problems {
        tracing::warn!(field = %problem.field_id, value = %problem.value, "{}", problem.message);
    }
    if request.strict
        && let Some(first) = problems.into_iter().next()
    {
        return Err(CalculatorError::from(first).into());
    }

    if request.summary {
        if calculator.id() != "blood_gas" {
            return Err(eyre::eyre!(
                "--summary is only available for blood_gas, not {}",
                calculator.id()
            ));
        }
        let blood_gas = BloodGas { conditions };
        let inputs = Inputs::new(blood_gas.id(), blood_gas.fields(), &values)?;
        let result = BloodGas::panel(&inputs)?.interpret(&conditions);
        return Ok(blood_gas_summary(&result)?);
    }

    let outcome = calculator.evaluate(&values)?;
    tracing::debug!(calculator = calculator.id(), tone = %outcome.tone, "calculator evaluated");

    if request.json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&outcome)?));
    }

    let options = render_options(request.brief);
    let text = match &request.template {
        Some(path) => {
            let template = std::fs::read_to_string(path)
                .map_err(|e| eyre::eyre!("failed to read template {}: {e}", path.display()))?;
            render_outcome_with(&template, calculator.name(), &outcome, options)?
        }
        None => render_outcome(calculator.name(), &outcome, options)?,
    };
    Ok(text)
}

fn render_options(brief: bool) -> RenderOptions {
    if brief {
        RenderOptions {
            tone_marker: false,
            show_details: false,
            show_footnote: false,
        }
    } else {
        RenderOptions::default()
    }
}

pub fn self_test(settings: &BedsideConfig, json: bool) -> Result<()> {
    let report = run_self_test_with(settings.self_test_tolerance);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", self_test_report(&report)?);
    }
    Ok(())
}

pub fn config_show(settings: &BedsideConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}

pub fn config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(path, &BedsideConfig::default())?;
    println!("{}", path.display());
    Ok(())
}

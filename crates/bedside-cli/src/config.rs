use std::path::{Path, PathBuf};

use bedside_calculators::calculators::blood_gas::AlveolarConditions;
use bedside_core::numeric::DEFAULT_TOLERANCE;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedsideConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub atmospheric_pressure_mmhg: f64,
    pub water_vapour_pressure_mmhg: f64,
    pub respiratory_quotient: f64,
    /// Relative tolerance for the built-in self-test. Added in v1.
    pub self_test_tolerance: f64,
    /// Added in v1.
    pub run_self_test_on_start: bool,
}

impl Default for BedsideConfig {
    fn default() -> Self {
        let conditions = AlveolarConditions::default();
        Self {
            config_version: CURRENT_VERSION,
            atmospheric_pressure_mmhg: conditions.atmospheric_pressure_mmhg,
            water_vapour_pressure_mmhg: conditions.water_vapour_pressure_mmhg,
            respiratory_quotient: conditions.respiratory_quotient,
            self_test_tolerance: DEFAULT_TOLERANCE,
            run_self_test_on_start: true,
        }
    }
}

impl BedsideConfig {
    pub fn conditions(&self) -> AlveolarConditions {
        AlveolarConditions {
            atmospheric_pressure_mmhg: self.atmospheric_pressure_mmhg,
            water_vapour_pressure_mmhg: self.water_vapour_pressure_mmhg,
            respiratory_quotient: self.respiratory_quotient,
        }
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("bedside"))
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Load the config at `path`, or defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<BedsideConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BedsideConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<BedsideConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    // Versions past u32 are treated as too new rather than truncated.
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(version) => u32::try_from(version).unwrap_or(u32::MAX),
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: BedsideConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update bedside."
        ));
    }

    // v0 → v1: add self-test settings
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("self_test_tolerance")
            .or_insert(serde_json::json!(DEFAULT_TOLERANCE));
        obj.entry("run_self_test_on_start")
            .or_insert(serde_json::Value::Bool(true));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added self-test settings)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &BedsideConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn delete_config(path: &Path) -> eyre::Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
        tracing::info!(path = %path.display(), "config deleted");
    }
    Ok(())
}

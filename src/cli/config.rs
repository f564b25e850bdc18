//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::output;
use crate::config::{Config, CONFIG_TEMPLATE};
use crate::domain::InputField;
use crate::error::{ConfigError, Result};

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if path.exists() {
        output::warning(&format!("Overwriting {}", path.display()));
    }
    fs::write(path, CONFIG_TEMPLATE)?;
    if output::is_json() {
        return output::document("config_init", &Written { path: path.display().to_string() });
    }
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your scenario", path.display()));
    output::note(&format!(
        "2. Run: {}",
        output::highlight(format!("feedlot simulate -c {}", path.display()))
    ));
    Ok(())
}

#[derive(Serialize)]
struct Written {
    path: String,
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        return output::document("config", &config);
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Scenario");
    for field in InputField::ALL {
        output::field(field.prompt(), config.scenario.get(field));
    }

    output::section("Sensitivity");
    output::field("Price step", config.sensitivity.price_step);
    output::field("Conversion step", config.sensitivity.conversion_step);
    output::field("Daily gain step", config.sensitivity.daily_gain_step);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success(&format!("{} is valid", path.display()));
    Ok(())
}

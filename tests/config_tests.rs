use std::fs;
use std::path::PathBuf;

use feedlot::config::{Config, CONFIG_TEMPLATE};
use feedlot::domain::{DomainError, GridSteps, InputField, ScenarioInputs};
use feedlot::error::{ConfigError, Error};
use tempfile::TempDir;

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("feedlot.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_template() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, CONFIG_TEMPLATE);

    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.scenario, ScenarioInputs::default());
    assert_eq!(config.sensitivity, GridSteps::default());
}

#[test]
fn config_overrides_scenario_and_steps() {
    let toml = r#"
[logging]
level = "debug"
format = "json"

[scenario]
kg_purchased = 300
sale_price_per_kg = 4.5

[sensitivity]
price_step = 0.1
"#;

    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, toml);
    let config = Config::load(&path).unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.scenario.kg_purchased, 300.0);
    assert_eq!(config.scenario.sale_price_per_kg, 4.5);
    assert_eq!(config.scenario.daily_gain, 1.4);
    assert_eq!(config.sensitivity.price_step, 0.1);
    assert_eq!(config.sensitivity.daily_gain_step, 0.2);
}

#[test]
fn config_rejects_negative_step() {
    let toml = r#"
[sensitivity]
daily_gain_step = -0.2
"#;

    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, toml);

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "daily_gain_step",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid step error, got {err}"),
        Ok(config) => panic!(
            "Expected negative step to be rejected, got {}",
            config.sensitivity.daily_gain_step
        ),
    }
}

#[test]
fn config_rejects_zero_days() {
    let toml = r#"
[scenario]
days_on_feed = 0
"#;

    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, toml);

    assert!(
        matches!(
            Config::load(&path),
            Err(Error::Domain(DomainError::NonPositive {
                field: InputField::DaysOnFeed,
                ..
            }))
        ),
        "Expected zero days to be rejected"
    );
}

#[test]
fn config_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("absent.toml"));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_reports_type_mismatch_as_parse_error() {
    let toml = r#"
[scenario]
daily_gain = "fast"
"#;

    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, toml);

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse { .. }))
    ));
}

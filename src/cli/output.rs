//! Shared CLI output helpers.
//!
//! Human-readable text styled with `owo-colors`, or one JSON document per line
//! (`{"type": ..., "payload": ...}`) for scripting. Color follows the
//! `--color` override installed at startup.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;
use serde_json::json;

use crate::error::Result;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Return whether headings and hints are suppressed.
#[must_use]
pub fn is_quiet() -> bool {
    let config = read_config();
    !config.json && config.quiet
}

/// Apply a style when stdout supports color.
pub fn styled(value: impl Display, style: Style) -> String {
    value
        .if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

/// Emit a serializable payload as one JSON line.
pub fn document<T: Serialize>(kind: &str, payload: &T) -> Result<()> {
    let payload = serde_json::to_value(payload)?;
    println!("{}", json!({ "type": kind, "payload": payload }));
    Ok(())
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if is_json() || is_quiet() {
        return;
    }
    println!(
        "{} {}",
        styled("feedlot", Style::new().bold()),
        styled(version, Style::new().dimmed())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if is_json() || is_quiet() {
        return;
    }
    println!();
    println!("{}", styled(title, Style::new().bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    if is_json() || is_quiet() {
        return;
    }
    println!("  {:<28} {}", styled(label, Style::new().dimmed()), value);
}

/// Print a success line.
pub fn success(message: &str) {
    if is_json() {
        println!("{}", json!({ "type": "success", "payload": { "message": message } }));
        return;
    }
    if is_quiet() {
        return;
    }
    println!("  {} {}", styled("✓", Style::new().green()), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    if is_json() {
        println!("{}", json!({ "type": "warning", "payload": { "message": message } }));
        return;
    }
    println!("  {} {}", styled("⚠", Style::new().yellow()), message);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!(
        "  {} {}",
        "×".if_supports_color(Stream::Stderr, |text| text.red()),
        message
    );
}

/// Print a single-line note.
pub fn note(message: &str) {
    if is_json() || is_quiet() {
        return;
    }
    println!("  {message}");
}

/// Print a pre-rendered block (a table), indented.
pub fn block(text: &str) {
    if is_json() {
        return;
    }
    for line in text.lines() {
        println!("  {line}");
    }
}

/// Format a signed currency amount, green when positive and red when negative.
pub fn amount(value: i64) -> String {
    let text = format!("USD {value}");
    match value.signum() {
        1 => styled(text, Style::new().green()),
        -1 => styled(text, Style::new().red()),
        _ => text,
    }
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    styled(value, Style::new().cyan())
}

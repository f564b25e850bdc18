//! Miette-based error diagnostics for CLI errors.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::output;
use crate::domain::DomainError;
use crate::error::{ConfigError, Error};

/// Configuration parse error with source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(feedlot::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(message: impl Into<String>, src: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a diagnostic pointing at the failing span of a TOML parse error.
#[must_use]
pub fn parse_diagnostic(source: &toml::de::Error, content: &str) -> ConfigDiagnostic {
    let (offset, len) = source
        .span()
        .map_or((0, 0), |span| (span.start, span.end.saturating_sub(span.start)));

    ConfigDiagnostic::new(source.message(), content, offset, len)
        .with_help("run `feedlot config init` for a documented template")
}

/// Hint shown under a domain validation error.
fn domain_help(err: &DomainError) -> &'static str {
    match err {
        DomainError::NonFinite { .. } | DomainError::NonPositive { .. } => {
            "every scenario input must be a number greater than 0"
        }
        DomainError::YieldOutOfRange { .. } => "dressing yield is a percentage between 0 and 100",
        DomainError::NoWeightGained { .. } => "daily gain and days on feed must both be positive",
    }
}

/// Report a failed command on stderr.
pub fn report(err: &Error) {
    match err {
        Error::Config(ConfigError::Parse { source, content }) if !output::is_json() => {
            let diagnostic = parse_diagnostic(source, content);
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
        Error::Domain(domain) if !output::is_json() => {
            output::error(&err.to_string());
            eprintln!("    {}", domain_help(domain));
        }
        _ => output::error(&err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diagnostic_points_at_error() {
        let content = "[scenario]\nkg_purchased = \"many\"\n";
        let source = toml::from_str::<crate::config::Config>(content).unwrap_err();
        let diagnostic = parse_diagnostic(&source, content);

        let span_start = diagnostic.span.offset();
        assert!(span_start >= "[scenario]\n".len());
        assert!(span_start < content.len());
        assert!(diagnostic.help.is_some());
    }

    #[test]
    fn every_domain_error_has_help() {
        let errors = [
            DomainError::YieldOutOfRange { value: 120.0 },
            DomainError::NoWeightGained {
                daily_gain: 0.0,
                days_on_feed: 10,
            },
        ];
        for err in errors {
            assert!(!domain_help(&err).is_empty());
        }
    }
}

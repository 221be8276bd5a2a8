//! Optional tracing setup for marquee.
//!
//! Every diagnostic the pipeline used to print is emitted as a `tracing`
//! event under a stable target prefix, so consumers can filter or silence it:
//!
//! ```text
//! RUST_LOG=marquee=debug
//! ```
//!
//! Consumers bring their own subscriber; nothing here installs one.

use tracing::Level;

/// Target prefix used by all marquee tracing spans and events.
pub const TARGET_PREFIX: &str = "marquee";

/// Standard span names used across the pipeline.
pub mod span_names {
    /// Feature selection and diagnostics.
    pub const PREPARE_FEATURES: &str = "marquee::prepare_features";
    /// Point-metric evaluation of a fitted model.
    pub const EVALUATE: &str = "marquee::evaluate";
    /// Ranking-quality metric computation.
    pub const RANKING: &str = "marquee::ranking";
    /// Top-k report assembly.
    pub const TOP_PREDICTIONS: &str = "marquee::top_predictions";
    /// Experiment-run logging.
    pub const LOG_RUN: &str = "marquee::log_run";
}

/// Standard structured field names used in tracing events.
pub mod field_names {
    pub const MODEL_NAME: &str = "model_name";
    pub const ROW_COUNT: &str = "row_count";
    pub const FEATURE_COUNT: &str = "feature_count";
    pub const EXCLUDED_COUNT: &str = "excluded_count";
    pub const K: &str = "k";
    pub const OVERLAP: &str = "overlap";
    pub const YEAR: &str = "year";
    pub const RUN_ID: &str = "run_id";
    pub const SCOPE: &str = "scope";
}

/// Parse a log level string (case-insensitive).
///
/// Recognized values: `trace`, `debug`, `info`, `warn`, `error`.
/// Returns `None` for unrecognized strings.
#[must_use]
pub fn parse_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Returns the recommended `tracing::Level` for the given environment.
///
/// Checks `MARQUEE_LOG_LEVEL` first, then falls back to the provided default.
#[must_use]
pub fn level_from_env(default: Level) -> Level {
    std::env::var("MARQUEE_LOG_LEVEL")
        .ok()
        .and_then(|s| parse_level(&s))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_prefix_is_marquee() {
        assert_eq!(TARGET_PREFIX, "marquee");
    }

    #[test]
    fn span_names_carry_target_prefix() {
        let all = [
            span_names::PREPARE_FEATURES,
            span_names::EVALUATE,
            span_names::RANKING,
            span_names::TOP_PREDICTIONS,
            span_names::LOG_RUN,
        ];
        for span in all {
            assert!(
                span.starts_with(&format!("{TARGET_PREFIX}::")),
                "span {span:?} must start with \"{TARGET_PREFIX}::\"",
            );
        }
    }

    #[test]
    fn parse_level_recognizes_valid_levels() {
        assert_eq!(parse_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("info"), Some(Level::INFO));
        assert_eq!(parse_level("warn"), Some(Level::WARN));
        assert_eq!(parse_level("error"), Some(Level::ERROR));
    }

    #[test]
    fn parse_level_case_insensitive() {
        assert_eq!(parse_level("WARN"), Some(Level::WARN));
        assert_eq!(parse_level("Info"), Some(Level::INFO));
    }

    #[test]
    fn parse_level_returns_none_for_invalid() {
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level(" info"), None);
    }

    #[test]
    fn level_from_env_uses_default_when_unset() {
        // MARQUEE_LOG_LEVEL is not set in the test environment.
        assert_eq!(level_from_env(Level::WARN), Level::WARN);
    }
}

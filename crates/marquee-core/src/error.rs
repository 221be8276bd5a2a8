use std::path::PathBuf;

/// Unified error type covering all failure modes across the marquee evaluation toolkit.
///
/// Every variant includes an actionable error message guiding the consumer toward
/// resolution. The evaluation functions themselves never raise: missing columns,
/// length mismatches, and empty post-filter tables are recoverable conditions
/// reported as empty results. Only configuration problems, I/O, and an
/// unavailable tracking store surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The experiment-tracking store cannot be used at all.
    ///
    /// This is the one place the toolkit is allowed to stop the caller:
    /// silently skipping tracking would corrupt the reproducibility guarantees
    /// the sink exists to provide.
    #[error(
        "Experiment tracking unavailable: {reason}. Point the tracker at a writable directory or disable run logging."
    )]
    TrackingUnavailable {
        /// Why the store cannot be used.
        reason: String,
    },

    /// An unrecognized dataset scope name.
    #[error("Unknown dataset scope \"{scope}\". Available scopes: {available}.")]
    UnknownScope {
        /// The scope string that failed to parse.
        scope: String,
        /// Comma-separated list of valid scope names.
        available: String,
    },

    /// A column being inserted does not match the frame's row count.
    #[error(
        "Column \"{column}\" has {found} values but the frame has {expected} rows. Align the column before inserting."
    )]
    ColumnLength {
        /// Name of the offending column.
        column: String,
        /// Row count of the frame.
        expected: usize,
        /// Length of the column being inserted.
        found: usize,
    },

    /// Writing a run artifact failed.
    #[error("Failed to write artifact {path}: {source}")]
    ArtifactWrite {
        /// Destination path of the artifact.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A persisted configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {source}. Fix or delete the file to fall back to defaults.")]
    ConfigParse {
        /// Path of the config file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Wraps `std::io::Error` for file operations.
    #[error("I/O error: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the marquee crate hierarchy.
pub type EvalResult<T> = Result<T, EvalError>;

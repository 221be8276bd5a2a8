//! Experiment-run tracking sink for the marquee evaluation toolkit.
//!
//! Persists evaluation runs — parameters, tags, metrics, an inferred model
//! signature, and file artifacts — to a file-backed store behind the
//! [`ExperimentTracker`] trait. An unusable store is the one hard failure
//! the toolkit raises; everything upstream degrades gracefully instead.

pub mod logger;
pub mod record;
pub mod store;

pub use logger::{log_model_run, LogRunOptions, PREDICTIONS_ARTIFACT};
pub use record::{
    infer_signature, ColumnSpec, ModelSignature, ParamValue, RunRecord, SIGNATURE_SAMPLE_FLOOR,
};
pub use store::{ExperimentTracker, FileStoreTracker, RunHandle};

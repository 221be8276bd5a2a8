//! Glue between the evaluation engine and the run store.
//!
//! [`log_model_run`] packages a finished [`ModelEvaluation`] — dataset-scope
//! parameters and tags, the point metrics, any extra metrics (typically the
//! ranking bundle), an inferred model signature, and a CSV of validation
//! predictions — into one persisted run. Artifacts are staged in a scoped
//! temporary directory that is cleaned up on every exit path.

use std::collections::BTreeMap;
use std::path::Path;

use csv::Writer;
use marquee_core::config::DatasetConfig;
use marquee_core::error::{EvalError, EvalResult};
use marquee_core::frame::{columns, Frame};
use marquee_eval::point::ModelEvaluation;
use tracing::info;

use crate::record::{infer_signature, ParamValue, RunRecord};
use crate::store::{ExperimentTracker, RunHandle};

/// File name of the predictions artifact.
pub const PREDICTIONS_ARTIFACT: &str = "validation_predictions.csv";

/// Options for [`log_model_run`].
#[derive(Debug, Clone)]
pub struct LogRunOptions {
    /// Experiment the run is filed under.
    pub experiment: String,
    /// Rows requested for the signature sample; the effective sample is
    /// `max(input_example_rows, 500)` capped at the feature-frame length.
    pub input_example_rows: usize,
}

impl Default for LogRunOptions {
    fn default() -> Self {
        Self {
            experiment: "box-office".to_string(),
            input_example_rows: 5,
        }
    }
}

/// Log one evaluated model as a tracked run.
///
/// `features` is the validation feature frame (used for signature
/// inference); `validation` supplies titles and actuals for the predictions
/// artifact; `extra_metrics` is merged after the point metrics, so ranking
/// metrics land under their own keys. Non-finite metric values are dropped
/// rather than persisted, matching the absence-over-null contract of the
/// metric mappings.
pub fn log_model_run(
    tracker: &dyn ExperimentTracker,
    evaluation: &ModelEvaluation,
    features: &Frame,
    validation: &Frame,
    y_actual: &[f64],
    config: &DatasetConfig,
    extra_metrics: &BTreeMap<String, f64>,
    opts: &LogRunOptions,
) -> EvalResult<RunHandle> {
    let mut record = RunRecord::new(&opts.experiment, &evaluation.model_name);

    record
        .params
        .insert("model_name".into(), evaluation.model_name.as_str().into());
    record
        .params
        .insert("scope".into(), config.scope.as_str().into());
    record
        .params
        .insert("year_start".into(), ParamValue::Int(config.year_start));
    record.params.insert(
        "major_studio_only".into(),
        ParamValue::Bool(config.requires_major_filter()),
    );
    record.params.insert(
        "english_only".into(),
        ParamValue::Bool(config.filters_english()),
    );

    record
        .tags
        .insert("scope".into(), config.scope.as_str().to_string());
    record
        .tags
        .insert("year_start".into(), config.year_start.to_string());
    record.tags.insert(
        "major_studio_only".into(),
        config.requires_major_filter().to_string(),
    );
    record
        .tags
        .insert("english_only".into(), config.filters_english().to_string());

    let point_metrics = [
        ("rmse", evaluation.rmse),
        ("mae", evaluation.mae),
        ("mape", evaluation.mape),
        ("r2", evaluation.r2),
    ];
    for (key, value) in point_metrics {
        if value.is_finite() {
            record.metrics.insert(key.to_string(), value);
        }
    }
    for (key, value) in extra_metrics {
        if value.is_finite() {
            record.metrics.insert(key.clone(), *value);
        }
    }

    if !features.is_empty() {
        record.signature = Some(infer_signature(features, opts.input_example_rows));
    }

    // Stage the predictions CSV in a scoped temp directory; the store copies
    // it into the run before the directory drops.
    let staging = tempfile::tempdir()?;
    let staged_path = staging.path().join(PREDICTIONS_ARTIFACT);
    write_predictions_csv(&staged_path, validation, y_actual, &evaluation.predictions)?;
    record.artifacts.push(PREDICTIONS_ARTIFACT.to_string());

    let handle = tracker.log_run(&record, &[staged_path])?;

    info!(
        target: "marquee::log_run",
        model_name = %evaluation.model_name,
        run_id = %handle.run_id,
        metric_count = record.metrics.len(),
        "model run logged"
    );

    Ok(handle)
}

/// Write the validation-predictions artifact: one row per validation
/// observation with title, actual, and predicted revenue. Missing titles or
/// actuals become empty fields.
fn write_predictions_csv(
    path: &Path,
    validation: &Frame,
    y_actual: &[f64],
    predictions: &[f64],
) -> EvalResult<()> {
    let titles = validation
        .display_values(columns::TITLE)
        .unwrap_or_else(|| vec![None; predictions.len()]);

    let mut writer = Writer::from_path(path).map_err(|err| EvalError::ArtifactWrite {
        path: path.to_path_buf(),
        source: Box::new(err),
    })?;
    let write_err = |err: csv::Error| EvalError::ArtifactWrite {
        path: path.to_path_buf(),
        source: Box::new(err),
    };

    writer
        .write_record(["title", "actual_revenue", "predicted_revenue"])
        .map_err(write_err)?;
    for (i, predicted) in predictions.iter().enumerate() {
        let title = titles.get(i).and_then(Clone::clone).unwrap_or_default();
        let actual = y_actual
            .get(i)
            .map(|a| a.to_string())
            .unwrap_or_default();
        writer
            .write_record([title, actual, predicted.to_string()])
            .map_err(write_err)?;
    }
    writer.flush()?;
    Ok(())
}

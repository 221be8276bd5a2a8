//! The run record: everything one logged evaluation run carries.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use marquee_core::frame::Frame;
use serde::{Deserialize, Serialize};

/// Typed parameter value. Strings, numbers, and booleans keep their type in
/// the persisted record; everything else is stringified by the caller before
/// it gets here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Name and dtype of one model-input column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub dtype: String,
}

/// Inferred input/output signature of a fitted model.
///
/// Inferred from a bounded sample of the feature frame; `sample_rows` records
/// how many rows the inference actually looked at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSignature {
    /// One spec per feature column, in frame order.
    pub inputs: Vec<ColumnSpec>,
    /// Dtype of the prediction output.
    pub output_dtype: String,
    /// Number of rows sampled for inference.
    pub sample_rows: usize,
}

/// Floor for the signature-inference sample, matching the historical
/// tracking pipeline: the sample is `max(input_example_rows, 500)` rows,
/// capped at the frame length.
pub const SIGNATURE_SAMPLE_FLOOR: usize = 500;

/// Infer a model signature from the feature frame.
///
/// The sample size is `max(input_example_rows, 500)` capped at the frame's
/// row count; the output dtype is always `float64` (predictions are `f64`).
#[must_use]
pub fn infer_signature(features: &Frame, input_example_rows: usize) -> ModelSignature {
    let sample_rows = input_example_rows
        .max(SIGNATURE_SAMPLE_FLOOR)
        .min(features.len());
    let inputs = features
        .column_names()
        .into_iter()
        .filter_map(|name| {
            features.column(name).map(|col| ColumnSpec {
                name: name.to_string(),
                dtype: col.dtype().to_string(),
            })
        })
        .collect();
    ModelSignature {
        inputs,
        output_dtype: "float64".to_string(),
        sample_rows,
    }
}

/// One evaluation run, ready to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Store-unique run identifier.
    pub run_id: String,
    /// Human-readable run name (usually the model name).
    pub run_name: String,
    /// Experiment this run belongs to; becomes a directory in the store.
    pub experiment: String,
    /// Typed run parameters.
    pub params: BTreeMap<String, ParamValue>,
    /// Tags, all stringified.
    pub tags: BTreeMap<String, String>,
    /// Scalar metrics. Non-finite values must be filtered before insertion;
    /// the JSON document cannot represent them.
    pub metrics: BTreeMap<String, f64>,
    /// Inferred model signature, when feature data was available.
    pub signature: Option<ModelSignature>,
    /// File names of artifacts stored alongside the record.
    pub artifacts: Vec<String>,
}

impl RunRecord {
    /// New empty record with a fresh run id.
    #[must_use]
    pub fn new(experiment: impl Into<String>, run_name: impl Into<String>) -> Self {
        Self {
            run_id: generate_run_id(),
            run_name: run_name.into(),
            experiment: experiment.into(),
            params: BTreeMap::new(),
            tags: BTreeMap::new(),
            metrics: BTreeMap::new(),
            signature: None,
            artifacts: Vec::new(),
        }
    }
}

/// Process-unique run id: wall-clock nanoseconds plus a monotone counter,
/// so two runs started in the same instant still get distinct ids.
fn generate_run_id() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("run-{nanos:x}-{seq}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::frame::Column;

    fn features(rows: usize) -> Frame {
        let mut frame = Frame::new();
        frame
            .insert("budget", Column::Float(vec![Some(1.0); rows]))
            .unwrap();
        frame
            .insert("is_sequel", Column::Bool(vec![Some(false); rows]))
            .unwrap();
        frame
    }

    #[test]
    fn run_ids_are_unique() {
        let a = RunRecord::new("exp", "m");
        let b = RunRecord::new("exp", "m");
        assert_ne!(a.run_id, b.run_id);
        assert!(a.run_id.starts_with("run-"));
    }

    #[test]
    fn signature_sample_has_a_floor_of_500() {
        let sig = infer_signature(&features(2_000), 100);
        assert_eq!(sig.sample_rows, 500);

        let sig = infer_signature(&features(2_000), 1_200);
        assert_eq!(sig.sample_rows, 1_200);
    }

    #[test]
    fn signature_sample_capped_at_frame_length() {
        let sig = infer_signature(&features(40), 100);
        assert_eq!(sig.sample_rows, 40);
    }

    #[test]
    fn signature_records_column_names_and_dtypes() {
        let sig = infer_signature(&features(10), 0);
        assert_eq!(sig.inputs.len(), 2);
        assert_eq!(sig.inputs[0].name, "budget");
        assert_eq!(sig.inputs[0].dtype, "float64");
        assert_eq!(sig.inputs[1].dtype, "bool");
        assert_eq!(sig.output_dtype, "float64");
    }

    #[test]
    fn param_values_serialize_untagged() {
        let mut params: BTreeMap<String, ParamValue> = BTreeMap::new();
        params.insert("model_name".into(), "GBM".into());
        params.insert("year_start".into(), ParamValue::Int(2015));
        params.insert("major_studio_only".into(), ParamValue::Bool(true));

        let json = serde_json::to_string(&params).unwrap();
        assert!(json.contains("\"model_name\":\"GBM\""));
        assert!(json.contains("\"year_start\":2015"));
        assert!(json.contains("\"major_studio_only\":true"));
    }

    #[test]
    fn record_round_trips_through_json() {
        let mut record = RunRecord::new("box-office", "GBM");
        record.metrics.insert("rmse".into(), 12.5);
        record.tags.insert("scope".into(), "english".into());
        record.signature = Some(infer_signature(&features(10), 0));
        record.artifacts.push("validation_predictions.csv".into());

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: RunRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run_id, record.run_id);
        assert_eq!(back.metrics["rmse"], 12.5);
        assert_eq!(back.artifacts, record.artifacts);
    }
}

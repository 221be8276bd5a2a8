//! Evaluation engine for the marquee box-office toolkit.
//!
//! Four stages, each usable on its own:
//!
//! - [`features`]: choose model inputs from an observation frame and build
//!   pandemic-era sample weights.
//! - [`point`]: score a fitted model with RMSE / MAE / MAPE / R², undoing
//!   the log-space target transform.
//! - [`ranking`]: compare predicted and actual top-k rankings (overlap,
//!   recall, precision, NDCG, rank correlations).
//! - [`report`]: build and render the top-10 predicted-titles report for a
//!   release year.
//!
//! Every stage is defensive: malformed or incomplete input degrades to an
//! empty or absent result rather than an error.

pub mod features;
pub mod point;
pub mod ranking;
pub mod report;

pub use features::{
    pandemic_sample_weights, prepare_features, sample_weights, ExcludedColumn, FeatureOptions,
    FeatureSelection, DEFAULT_EXCLUDE_COLS, DEFAULT_FEATURE_FLAGS,
};
pub use point::{evaluate_model, fmt_currency, fmt_percent, ModelEvaluation, Predictor};
pub use ranking::{compute_ranking_metrics, top_k_overlap, RankingOptions, DEFAULT_K};
pub use report::{render_table, top_predictions, ReportOptions, REPORT_SIZE};

//! # marquee
//!
//! Evaluation toolkit for box-office revenue models: decide which columns a
//! model may see, weight anomalous rows down, score predictions with point
//! metrics, measure ranking quality at the top of the chart, and persist
//! each run to a tracked experiment store.
//!
//! Revenue targets are modeled in log space; the evaluators undo that
//! transform (`exp_m1`) before any metric is computed, so all reported
//! numbers are on the natural dollar scale.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use marquee::prelude::*;
//!
//! let selection = prepare_features(&frame, &FeatureOptions::default());
//! let weights = pandemic_sample_weights(&selection.frame);
//!
//! // ... fit a model externally, then:
//! let evaluation = evaluate_model(&model, &x_val, &y_actual, "GBM");
//! let ranking = compute_ranking_metrics(
//!     &validation,
//!     &evaluation.predictions,
//!     &RankingOptions::default(),
//! );
//!
//! let tracker = FileStoreTracker::new("./runs")?;
//! let handle = log_model_run(
//!     &tracker, &evaluation, &x_val, &validation, &y_actual,
//!     &DatasetConfig::full(), &ranking, &LogRunOptions::default(),
//! )?;
//! ```
//!
//! # Design posture
//!
//! The evaluation functions never raise: missing columns, length mismatches,
//! and empty post-filter tables come back as empty or absent results, and
//! numerically undefined metrics are omitted from the returned mapping.
//! The single hard failure is an unusable tracking store
//! ([`EvalError::TrackingUnavailable`]).

pub use marquee_core::config::{DatasetConfig, DatasetScope, DATASET_END_YEAR};
pub use marquee_core::error::{EvalError, EvalResult};
pub use marquee_core::frame::{columns, Column, Frame};
pub use marquee_core::titles::{
    pattern_group, PatternGroup, TitleCatalog, ALL_LIVE_ACTION_REMAKES, ALL_SUPERHERO_FILMS,
    DC_FILMS, DISNEY_LIVE_ACTION_REMAKES, FAST_FURIOUS_FILMS, FRANCHISE_SEQUELS, MARVEL_MCU_FILMS,
    MEDIA_ADAPTATIONS, NON_MCU_SUPERHERO_FILMS, OTHER_LIVE_ACTION_REMAKES, REMAKE_PATTERNS,
    REMAKE_TITLE_INDICATORS, STAR_WARS_FILMS, WIZARDING_WORLD_FILMS,
};
pub use marquee_core::tracing_config;

pub use marquee_eval::features::{
    pandemic_sample_weights, prepare_features, sample_weights, ExcludedColumn, FeatureOptions,
    FeatureSelection, DEFAULT_EXCLUDE_COLS, DEFAULT_FEATURE_FLAGS,
};
pub use marquee_eval::point::{
    evaluate_model, fmt_currency, fmt_percent, ModelEvaluation, Predictor,
};
pub use marquee_eval::ranking::{
    compute_ranking_metrics, top_k_overlap, RankingOptions, DEFAULT_K,
};
pub use marquee_eval::report::{render_table, top_predictions, ReportOptions, REPORT_SIZE};

pub use marquee_track::logger::{log_model_run, LogRunOptions, PREDICTIONS_ARTIFACT};
pub use marquee_track::record::{
    infer_signature, ColumnSpec, ModelSignature, ParamValue, RunRecord,
};
pub use marquee_track::store::{ExperimentTracker, FileStoreTracker, RunHandle};

/// Everything most callers need, in one import.
pub mod prelude {
    pub use marquee_core::config::{DatasetConfig, DatasetScope};
    pub use marquee_core::error::{EvalError, EvalResult};
    pub use marquee_core::frame::{columns, Column, Frame};
    pub use marquee_eval::features::{
        pandemic_sample_weights, prepare_features, FeatureOptions, FeatureSelection,
    };
    pub use marquee_eval::point::{evaluate_model, ModelEvaluation, Predictor};
    pub use marquee_eval::ranking::{compute_ranking_metrics, top_k_overlap, RankingOptions};
    pub use marquee_eval::report::{render_table, top_predictions, ReportOptions};
    pub use marquee_track::logger::{log_model_run, LogRunOptions};
    pub use marquee_track::store::{ExperimentTracker, FileStoreTracker, RunHandle};
}

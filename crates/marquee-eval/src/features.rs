//! Feature selection and sample weighting.
//!
//! [`prepare_features`] decides which frame columns are legitimate model
//! inputs: metadata, targets, leakage-prone signals, and high-cardinality
//! strings are excluded, while numeric, boolean, and binary-like text
//! columns are admitted. Excluded string columns are reported, never
//! silently dropped.
//!
//! [`sample_weights`] down-weights anomalous rows (pandemic-era releases by
//! default) without touching the frame itself.

use marquee_core::frame::{columns, Frame};
use tracing::{debug, info};

/// Columns that must not be used as model inputs.
///
/// Grouped as: metadata, target variants, string/categorical columns that
/// would need separate encoding, post-release signals that leak future
/// information, and the raw year (replaced by engineered time features).
pub const DEFAULT_EXCLUDE_COLS: &[&str] = &[
    // Metadata columns
    "adult",
    "backdrop_path",
    "genre_ids",
    "id",
    "original_language",
    "original_title",
    "overview",
    "poster_path",
    "release_date",
    "title",
    "video",
    "genres",
    "title_normalized",
    "rank",
    "distributor",
    "genre_names",
    "release_month_name",
    "nearest_holiday",
    "nearby_major_releases_max_revenue",
    "days_to_nearest_major_release",
    // Target columns
    "domestic_revenue",
    "revenue_domestic",
    "revenue",
    // String / categorical columns that would need separate encoding
    "primary_genre",
    "release_season",
    "competition_intensity",
    // Post-release signals that leak future information
    "popularity",
    "vote_average",
    "vote_count",
    // Raw year (replaced by engineered time features)
    "release_year",
];

/// Indicator flags worth surfacing when presenting results.
pub const DEFAULT_FEATURE_FLAGS: &[&str] = &[
    "is_marvel",
    "is_dc",
    "is_star_wars",
    "is_superhero",
    "is_sequel",
    "is_live_action_remake",
    "is_major_studio",
    "is_disney",
];

/// Options for [`prepare_features`].
#[derive(Debug, Clone)]
pub struct FeatureOptions {
    /// Target column name; returned unchanged for convenience.
    pub target: String,
    /// Replacement exclusion list. `None` uses [`DEFAULT_EXCLUDE_COLS`].
    pub exclude_cols: Option<Vec<String>>,
    /// Restrict rows to major studios (`is_major_studio` truthy) first.
    /// Skipped silently when the column is absent.
    pub filter_major_only: bool,
    /// Keep `is_major_studio` out of the feature list (helpful when the
    /// filter has made it constant).
    pub drop_major_flag_from_features: bool,
    /// Emit a diagnostic summary via tracing. Observational only.
    pub verbose: bool,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            target: columns::REVENUE_DOMESTIC.to_string(),
            exclude_cols: None,
            filter_major_only: false,
            drop_major_flag_from_features: true,
            verbose: true,
        }
    }
}

/// A column rejected by the admission rule, with up to five sample values so
/// the rejection is visible in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedColumn {
    /// Column name.
    pub name: String,
    /// First distinct non-missing values (at most five).
    pub sample_values: Vec<String>,
}

/// Result of [`prepare_features`].
#[derive(Debug, Clone)]
pub struct FeatureSelection {
    /// Filtered copy of the input frame.
    pub frame: Frame,
    /// Ordered list of admitted feature columns.
    pub feature_cols: Vec<String>,
    /// Target column name, unchanged from the options.
    pub target: String,
    /// Non-numeric columns rejected by the admission rule.
    pub excluded: Vec<ExcludedColumn>,
}

impl FeatureSelection {
    /// Render the diagnostic summary the pipeline historically printed:
    /// row count, candidate feature count, excluded columns with samples,
    /// and per-column missing counts. Purely observational.
    #[must_use]
    pub fn render_summary(&self) -> String {
        let mut out = String::from("Feature preparation summary:\n");
        out.push_str(&format!("   rows: {}\n", self.frame.len()));
        out.push_str(&format!(
            "   candidate features: {}\n",
            self.feature_cols.len()
        ));
        if !self.excluded.is_empty() {
            out.push_str("   excluded non-numeric columns:\n");
            for col in &self.excluded {
                out.push_str(&format!(
                    "     - {}: sample values {:?}\n",
                    col.name, col.sample_values
                ));
            }
        }
        let mut any_missing = false;
        for name in &self.feature_cols {
            if let Some(col) = self.frame.column(name) {
                let missing = col.missing_count();
                if missing > 0 {
                    if !any_missing {
                        out.push_str("   columns with missing values:\n");
                        any_missing = true;
                    }
                    out.push_str(&format!("     - {name}: {missing} nulls\n"));
                }
            }
        }
        if !any_missing {
            out.push_str("   no missing values in selected features\n");
        }
        out
    }
}

/// Prepare a frame for modeling and decide the usable feature columns.
///
/// Admission rule: a column is a feature when it is numeric, boolean, or a
/// non-numeric column with at most two distinct non-missing values (a
/// binary-like categorical). Everything else non-numeric is excluded and
/// reported. The returned frame is always a copy; the input is untouched.
#[must_use]
pub fn prepare_features(frame: &Frame, opts: &FeatureOptions) -> FeatureSelection {
    let mut prepared = frame.clone();
    if opts.filter_major_only {
        if let Some(mask) = prepared.bool_mask(columns::IS_MAJOR_STUDIO) {
            prepared = prepared.retain_rows(&mask);
        }
    }

    let mut exclude: Vec<String> = match &opts.exclude_cols {
        Some(cols) => cols.clone(),
        None => DEFAULT_EXCLUDE_COLS.iter().map(|s| (*s).to_string()).collect(),
    };
    if opts.drop_major_flag_from_features {
        exclude.push(columns::IS_MAJOR_STUDIO.to_string());
    }

    let mut feature_cols = Vec::new();
    let mut excluded = Vec::new();
    for name in prepared.column_names() {
        if exclude.iter().any(|e| e == name) {
            continue;
        }
        let Some(col) = prepared.column(name) else {
            continue;
        };
        if col.is_numeric() || col.is_bool() {
            feature_cols.push(name.to_string());
            continue;
        }
        let distinct = col.distinct_non_missing();
        if distinct.len() <= 2 {
            feature_cols.push(name.to_string());
        } else {
            excluded.push(ExcludedColumn {
                name: name.to_string(),
                sample_values: distinct.into_iter().take(5).collect(),
            });
        }
    }

    let selection = FeatureSelection {
        frame: prepared,
        feature_cols,
        target: opts.target.clone(),
        excluded,
    };

    if opts.verbose {
        info!(
            target: "marquee::prepare_features",
            row_count = selection.frame.len(),
            feature_count = selection.feature_cols.len(),
            excluded_count = selection.excluded.len(),
            filter_major_only = opts.filter_major_only,
            "feature preparation complete"
        );
        for col in &selection.excluded {
            debug!(
                target: "marquee::prepare_features",
                column = %col.name,
                samples = ?col.sample_values,
                "excluded non-numeric column"
            );
        }
    }

    selection
}

/// Per-row training weights down-weighting rows where `flag_col` is truthy.
///
/// Pure function: 1.0 everywhere, `low_weight` on flagged rows. A missing
/// flag column yields an all-ones vector.
#[must_use]
pub fn sample_weights(frame: &Frame, flag_col: &str, low_weight: f64) -> Vec<f64> {
    match frame.bool_mask(flag_col) {
        Some(mask) => mask
            .into_iter()
            .map(|flagged| if flagged { low_weight } else { 1.0 })
            .collect(),
        None => vec![1.0; frame.len()],
    }
}

/// Default pandemic-era down-weighting (`is_pandemic_year`, weight 0.3).
#[must_use]
pub fn pandemic_sample_weights(frame: &Frame) -> Vec<f64> {
    sample_weights(frame, columns::IS_PANDEMIC_YEAR, 0.3)
}

//! Top-k prediction report for a single release year.
//!
//! [`top_predictions`] filters the table to one year, runs the model over the
//! feature columns, and returns the ten rows with the highest predicted
//! revenue, projected to the display schema. [`render_table`] turns that
//! frame into a fixed-width console table with currency and percent
//! formatting.

use marquee_core::frame::{columns, Column, Frame};
use tracing::{info, warn};

use crate::features::DEFAULT_FEATURE_FLAGS;
use crate::point::{fmt_currency, fmt_percent, Predictor};

/// Number of rows the report keeps.
pub const REPORT_SIZE: usize = 10;

/// Options for [`top_predictions`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Actual-target column. When present in the table, actual revenue and
    /// error columns are attached alongside the predictions.
    pub target_col: String,
    /// Indicator columns appended to the display schema when they exist in
    /// the table.
    pub feature_flags: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            target_col: columns::REVENUE_DOMESTIC.to_string(),
            feature_flags: DEFAULT_FEATURE_FLAGS
                .iter()
                .map(|f| (*f).to_string())
                .collect(),
        }
    }
}

/// Build the top-10 predicted-revenue report for `year`.
///
/// Rows are filtered on `release_year == year`; an empty slate yields a
/// tracing warning and `None`, never an error. Predictions come back through
/// `exp_m1` onto the natural revenue scale. The returned frame is sorted by
/// predicted revenue descending; ties keep original row order (stable sort).
#[must_use]
pub fn top_predictions<M: Predictor + ?Sized>(
    model: &M,
    data: &Frame,
    year: i64,
    feature_cols: &[String],
    opts: &ReportOptions,
) -> Option<Frame> {
    let years = data.numeric_values(columns::RELEASE_YEAR)?;
    #[allow(clippy::cast_precision_loss)]
    let year_f = year as f64;
    let mask: Vec<bool> = years
        .iter()
        .map(|y| matches!(y, Some(v) if *v == year_f))
        .collect();
    let year_data = data.retain_rows(&mask);
    if year_data.is_empty() {
        warn!(
            target: "marquee::top_predictions",
            year,
            "no rows for requested year; no report"
        );
        return None;
    }

    let feature_refs: Vec<&str> = feature_cols.iter().map(String::as_str).collect();
    let features = year_data.select(&feature_refs);
    let predicted: Vec<f64> = model
        .predict(&features)
        .into_iter()
        .map(f64::exp_m1)
        .collect();
    if predicted.len() != year_data.len() {
        warn!(
            target: "marquee::top_predictions",
            year,
            rows = year_data.len(),
            prediction_len = predicted.len(),
            "prediction vector does not align with year slate; no report"
        );
        return None;
    }

    let mut enriched = year_data.clone();
    let insert_ok = enriched
        .insert(
            columns::PREDICTED_REVENUE,
            Column::Float(predicted.iter().map(|v| Some(*v)).collect()),
        )
        .is_ok();
    if !insert_ok {
        return None;
    }

    let has_actuals = enriched.has_column(&opts.target_col);
    if has_actuals {
        // Lengths already match: these columns come from the same frame.
        if let Some(actuals) = enriched.numeric_values(&opts.target_col) {
            let errors: Vec<Option<f64>> = actuals
                .iter()
                .zip(&predicted)
                .map(|(a, p)| a.map(|a| a - p))
                .collect();
            let error_pcts: Vec<Option<f64>> = actuals
                .iter()
                .zip(&errors)
                .map(|(a, e)| match (a, e) {
                    (Some(a), Some(e)) => Some(e / a * 100.0),
                    _ => None,
                })
                .collect();
            let columns_ok = enriched
                .insert(columns::ACTUAL_REVENUE, Column::Float(actuals))
                .and_then(|()| {
                    enriched.insert(columns::PREDICTION_ERROR, Column::Float(errors))
                })
                .and_then(|()| {
                    enriched.insert(columns::PREDICTION_ERROR_PCT, Column::Float(error_pcts))
                })
                .is_ok();
            if !columns_ok {
                return None;
            }
        }
    }

    // The REPORT_SIZE highest predicted rows, in descending predicted order.
    // Ties keep original row order (stable sort); NaN predictions sort last,
    // same as the ranking engine.
    let mut order: Vec<usize> = (0..enriched.len()).collect();
    order.sort_by(|&a, &b| match (predicted[a].is_nan(), predicted[b].is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => predicted[b].total_cmp(&predicted[a]),
    });
    order.truncate(REPORT_SIZE);
    let top = enriched.take_rows(&order);

    let mut display_cols = vec![columns::TITLE, columns::PREDICTED_REVENUE];
    if has_actuals {
        display_cols.push(columns::ACTUAL_REVENUE);
        display_cols.push(columns::PREDICTION_ERROR_PCT);
    }
    for flag in &opts.feature_flags {
        if top.has_column(flag) {
            display_cols.push(flag.as_str());
        }
    }

    info!(
        target: "marquee::top_predictions",
        year,
        slate_rows = enriched.len(),
        report_rows = top.len(),
        "top-k report built"
    );

    Some(top.select(&display_cols))
}

/// Render a report frame as a fixed-width console table.
///
/// Revenue columns use currency formatting, the error percentage uses one
/// decimal, and indicator columns render their display values. Missing cells
/// render as `-`.
#[must_use]
pub fn render_table(report: &Frame) -> String {
    let names = report.column_names();
    if names.is_empty() {
        return String::new();
    }

    let mut rendered: Vec<Vec<String>> = Vec::with_capacity(names.len());
    for name in &names {
        let cells = match report.numeric_values(name) {
            Some(values) if *name == columns::PREDICTION_ERROR_PCT => values
                .into_iter()
                .map(|c| c.map_or_else(|| "-".to_string(), fmt_percent))
                .collect(),
            Some(values)
                if matches!(
                    *name,
                    columns::PREDICTED_REVENUE
                        | columns::ACTUAL_REVENUE
                        | columns::PREDICTION_ERROR
                ) =>
            {
                values
                    .into_iter()
                    .map(|c| c.map_or_else(|| "-".to_string(), fmt_currency))
                    .collect()
            }
            _ => report
                .display_values(name)
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.unwrap_or_else(|| "-".to_string()))
                .collect::<Vec<String>>(),
        };
        rendered.push(cells);
    }

    let widths: Vec<usize> = names
        .iter()
        .zip(&rendered)
        .map(|(name, cells)| {
            cells
                .iter()
                .map(String::len)
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{name:<width$}", width = widths[i]));
    }
    out.push('\n');
    for row in 0..report.len() {
        for (i, cells) in rendered.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:<width$}", cells[row], width = widths[i]));
        }
        out.push('\n');
    }
    out
}

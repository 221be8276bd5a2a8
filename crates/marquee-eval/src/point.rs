//! Point-metric evaluation of a fitted model.
//!
//! Revenue targets are modeled in log space (`ln(1 + revenue)`) to stabilize
//! variance across orders of magnitude. This module is the single place that
//! undoes that transform: predictions come back through `exp_m1` before any
//! metric is computed, so its correctness gates every downstream number.

use marquee_core::frame::Frame;
use tracing::info;

/// Narrow capability interface for fitted models.
///
/// Exactly one operation is required, which decouples the evaluation engine
/// from any specific model family. Implementations return one log-space
/// prediction per row of `features`, in row order.
pub trait Predictor {
    /// Predict log-space target values for each row of `features`.
    fn predict(&self, features: &Frame) -> Vec<f64>;
}

/// Point-metric summary of one model evaluated on one validation set.
///
/// The fitted model itself is not stored here; the caller owns it and lends
/// it to whichever consumer needs it next. `predictions` are on the natural
/// revenue scale (already inverse-transformed).
#[derive(Debug, Clone)]
pub struct ModelEvaluation {
    /// Display name of the evaluated model.
    pub model_name: String,
    /// Root mean squared error, natural scale.
    pub rmse: f64,
    /// Mean absolute error, natural scale.
    pub mae: f64,
    /// Mean absolute percentage error, in percent. NaN/inf-prone when any
    /// actual value is zero; callers must guard before relying on it.
    pub mape: f64,
    /// Coefficient of determination. NaN when the actuals are constant.
    pub r2: f64,
    /// Natural-scale predictions, one per validation row.
    pub predictions: Vec<f64>,
}

impl ModelEvaluation {
    /// Render the fixed-format performance report.
    #[must_use]
    pub fn render_report(&self) -> String {
        format!(
            "{} Performance:\n  RMSE: {}\n  MAE:  {}\n  MAPE: {}\n  R²:   {:.3}\n",
            self.model_name,
            fmt_currency(self.rmse),
            fmt_currency(self.mae),
            fmt_percent(self.mape),
            self.r2,
        )
    }
}

/// Evaluate `model` on validation data.
///
/// Predictions are produced in log space, inverted with `exp_m1`, and scored
/// against the natural-scale actuals. The report is emitted as a tracing
/// event; use [`ModelEvaluation::render_report`] for the printable form.
#[must_use]
pub fn evaluate_model<M: Predictor + ?Sized>(
    model: &M,
    x_val: &Frame,
    y_actual: &[f64],
    model_name: &str,
) -> ModelEvaluation {
    let predictions: Vec<f64> = model
        .predict(x_val)
        .into_iter()
        .map(f64::exp_m1)
        .collect();

    let n = y_actual.len().min(predictions.len());
    let actual = &y_actual[..n];
    let predicted = &predictions[..n];

    let rmse = mean(actual.iter().zip(predicted).map(|(a, p)| (a - p).powi(2))).sqrt();
    let mae = mean(actual.iter().zip(predicted).map(|(a, p)| (a - p).abs()));
    let mape = mean(actual.iter().zip(predicted).map(|(a, p)| ((a - p) / a).abs())) * 100.0;
    let r2 = r_squared(actual, predicted);

    let evaluation = ModelEvaluation {
        model_name: model_name.to_string(),
        rmse,
        mae,
        mape,
        r2,
        predictions,
    };

    info!(
        target: "marquee::evaluate",
        model_name,
        row_count = n,
        rmse = evaluation.rmse,
        mae = evaluation.mae,
        mape = evaluation.mape,
        r2 = evaluation.r2,
        "model evaluated"
    );

    evaluation
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        f64::NAN
    } else {
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        sum / n
    }
}

/// Coefficient of determination. NaN for constant actuals (zero total sum of
/// squares leaves the ratio undefined).
fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    let y_mean = mean(actual.iter().copied());
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    let ss_tot: f64 = actual.iter().map(|a| (a - y_mean).powi(2)).sum();
    if ss_tot == 0.0 {
        f64::NAN
    } else {
        1.0 - ss_res / ss_tot
    }
}

/// Format a dollar amount: rounded to whole dollars with thousands
/// separators, e.g. `$12,345`. Non-finite values are passed through.
#[must_use]
pub fn fmt_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }
    let negative = value < 0.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = value.abs().round() as u128;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a percentage with one decimal, e.g. `12.3%`.
#[must_use]
pub fn fmt_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::frame::Column;

    /// Predictor returning a fixed log-space vector, ignoring features.
    struct FixedModel(Vec<f64>);

    impl Predictor for FixedModel {
        fn predict(&self, _features: &Frame) -> Vec<f64> {
            self.0.clone()
        }
    }

    fn empty_features(rows: usize) -> Frame {
        let mut frame = Frame::new();
        frame
            .insert("budget", Column::Float(vec![Some(0.0); rows]))
            .unwrap();
        frame
    }

    #[test]
    fn log_space_round_trip_yields_near_zero_error() {
        // ln(101) and ln(51) are log1p of 100 and 50.
        let model = FixedModel(vec![101f64.ln(), 51f64.ln()]);
        let evaluation = evaluate_model(&model, &empty_features(2), &[100.0, 50.0], "identity");

        assert!((evaluation.predictions[0] - 100.0).abs() < 1e-9);
        assert!((evaluation.predictions[1] - 50.0).abs() < 1e-9);
        assert!(evaluation.rmse < 1e-8);
        assert!(evaluation.mae < 1e-8);
        assert!(evaluation.mape < 1e-8);
        assert!((evaluation.r2 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn known_errors_produce_expected_metrics() {
        // Predictions on the natural scale: [110, 40] vs actuals [100, 50].
        let model = FixedModel(vec![111f64.ln(), 41f64.ln()]);
        let evaluation = evaluate_model(&model, &empty_features(2), &[100.0, 50.0], "off-by-ten");

        assert!((evaluation.mae - 10.0).abs() < 1e-6);
        assert!((evaluation.rmse - 10.0).abs() < 1e-6);
        // MAPE: mean(10/100, 10/50) * 100 = 15%.
        assert!((evaluation.mape - 15.0).abs() < 1e-6);
        // R²: 1 - (100+100)/(2*25²) = 1 - 200/1250.
        assert!((evaluation.r2 - (1.0 - 200.0 / 1250.0)).abs() < 1e-9);
    }

    #[test]
    fn mape_blows_up_on_zero_actual() {
        let model = FixedModel(vec![11f64.ln(), 6f64.ln()]);
        let evaluation = evaluate_model(&model, &empty_features(2), &[0.0, 5.0], "zero-actual");
        assert!(!evaluation.mape.is_finite());
    }

    #[test]
    fn r2_undefined_for_constant_actuals() {
        let model = FixedModel(vec![3f64.ln(), 4f64.ln()]);
        let evaluation = evaluate_model(&model, &empty_features(2), &[7.0, 7.0], "constant");
        assert!(evaluation.r2.is_nan());
    }

    #[test]
    fn report_uses_currency_and_percent_formats() {
        let evaluation = ModelEvaluation {
            model_name: "GBM".into(),
            rmse: 12_345_678.4,
            mae: 9_876.6,
            mape: 23.456,
            r2: 0.8766,
            predictions: vec![],
        };
        let report = evaluation.render_report();
        assert!(report.contains("GBM Performance:"));
        assert!(report.contains("RMSE: $12,345,678"));
        assert!(report.contains("MAE:  $9,877"));
        assert!(report.contains("MAPE: 23.5%"));
        assert!(report.contains("R²:   0.877"));
    }

    #[test]
    fn currency_formatting_edge_cases() {
        assert_eq!(fmt_currency(0.0), "$0");
        assert_eq!(fmt_currency(999.0), "$999");
        assert_eq!(fmt_currency(1_000.0), "$1,000");
        assert_eq!(fmt_currency(1_234_567.0), "$1,234,567");
        assert_eq!(fmt_currency(-5_000.4), "-$5,000");
        assert_eq!(fmt_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn percent_formatting_has_one_decimal() {
        assert_eq!(fmt_percent(7.0), "7.0%");
        assert_eq!(fmt_percent(12.34), "12.3%");
        assert_eq!(fmt_percent(-3.25), "-3.2%");
    }
}

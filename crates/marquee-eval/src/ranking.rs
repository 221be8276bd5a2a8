//! Ranking-quality metrics: does the model pick the right top-grossing titles?
//!
//! [`compute_ranking_metrics`] compares a single ranked prediction list
//! against a single ranked ground truth, both keyed by title, for a fixed
//! top-k window. It is deliberately defensive: malformed input (missing
//! columns, length mismatches, nothing left after dropping incomplete rows)
//! yields an empty mapping, never an error.
//!
//! "Cannot compute" is always represented as an *absent key*, never as zero,
//! NaN, or a null placeholder — downstream consumers test for key presence.
//!
//! # Tie-breaking contract
//!
//! Both orderings (actual-descending and predicted-descending) use a stable
//! sort, so rows with equal values keep their original row order. This
//! affects which titles sit on the top-k boundary and is a fixed, tested
//! contract: callers may rely on it for reproducibility.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use marquee_core::frame::{columns, Frame};
use tracing::debug;

/// Default top-k cutoff.
pub const DEFAULT_K: usize = 10;

/// Options for [`compute_ranking_metrics`].
#[derive(Debug, Clone)]
pub struct RankingOptions {
    /// Title column name.
    pub title_col: String,
    /// Actual-target column name.
    pub target_col: String,
    /// Top-k cutoff. The metric *names* stay `..._at_10`/`top10_...` for
    /// compatibility with the historical report schema regardless of `k`.
    pub k: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            title_col: columns::TITLE.to_string(),
            target_col: columns::REVENUE_DOMESTIC.to_string(),
            k: DEFAULT_K,
        }
    }
}

/// A metric that either has a value or is structurally inapplicable.
///
/// The output boundary drops `Undefined` (and any non-finite value), which is
/// how the "absence over null" contract is enforced in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Metric {
    Defined(f64),
    Undefined,
}

impl Metric {
    /// A ratio that is undefined when the denominator is not positive.
    fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Self::Defined(numerator / denominator)
        } else {
            Self::Undefined
        }
    }

    /// Insert into the output mapping; `Undefined` and non-finite values are
    /// dropped entirely.
    fn store(self, out: &mut BTreeMap<String, f64>, key: &str) {
        if let Self::Defined(value) = self {
            if value.is_finite() {
                out.insert(key.to_string(), value);
            }
        }
    }
}

struct ScoredTitle {
    title: String,
    actual: f64,
    predicted: f64,
}

/// Compute top-k overlap, recall/precision at k, NDCG at k, and full-set
/// rank correlations between predicted and actual rankings.
///
/// Returns an empty mapping when the required columns are missing, the
/// prediction vector length does not match the frame, or no complete rows
/// survive (missing title or missing/non-finite target drops the row;
/// predictions are synthetic and may be NaN).
///
/// Keys when defined: `top10_overlap`, `recall_at_10`, `precision_at_10`,
/// `ndcg_at_10`, `spearman_corr`, `kendall_corr`.
#[must_use]
pub fn compute_ranking_metrics(
    frame: &Frame,
    predictions: &[f64],
    opts: &RankingOptions,
) -> BTreeMap<String, f64> {
    let mut out = BTreeMap::new();

    let Some(titles) = frame.display_values(&opts.title_col) else {
        return out;
    };
    let Some(targets) = frame.numeric_values(&opts.target_col) else {
        return out;
    };
    if predictions.len() != frame.len() {
        debug!(
            target: "marquee::ranking",
            frame_rows = frame.len(),
            prediction_len = predictions.len(),
            "prediction vector does not align with frame; no metrics"
        );
        return out;
    }

    let rows: Vec<ScoredTitle> = titles
        .into_iter()
        .zip(targets)
        .zip(predictions)
        .filter_map(|((title, target), predicted)| match (title, target) {
            (Some(title), Some(actual)) if actual.is_finite() => Some(ScoredTitle {
                title,
                actual,
                predicted: *predicted,
            }),
            _ => None,
        })
        .collect();

    if rows.is_empty() {
        return out;
    }
    let n = rows.len();

    // Stable sorts: equal values keep original row order (see module docs).
    let mut by_actual: Vec<usize> = (0..n).collect();
    by_actual.sort_by(|&a, &b| rows[b].actual.total_cmp(&rows[a].actual));
    let mut by_predicted: Vec<usize> = (0..n).collect();
    by_predicted.sort_by(|&a, &b| cmp_desc_nan_last(rows[a].predicted, rows[b].predicted));

    let k_actual = opts.k.min(n);
    let k_pred = opts.k.min(n);

    let top_actual: HashSet<&str> = by_actual[..k_actual]
        .iter()
        .map(|&i| rows[i].title.as_str())
        .collect();
    let top_pred: HashSet<&str> = by_predicted[..k_pred]
        .iter()
        .map(|&i| rows[i].title.as_str())
        .collect();
    let overlap = top_actual.intersection(&top_pred).count();

    debug!(
        target: "marquee::ranking",
        row_count = n,
        k = opts.k,
        overlap,
        "top-k orderings computed"
    );

    #[allow(clippy::cast_precision_loss)]
    let overlap_f = overlap as f64;
    #[allow(clippy::cast_precision_loss)]
    let k_actual_f = k_actual as f64;
    #[allow(clippy::cast_precision_loss)]
    let k_pred_f = k_pred as f64;

    Metric::Defined(overlap_f).store(&mut out, "top10_overlap");
    Metric::ratio(overlap_f, k_actual_f).store(&mut out, "recall_at_10");
    Metric::ratio(overlap_f, k_pred_f).store(&mut out, "precision_at_10");

    // Gains are actual targets scaled by the maximum actual across ALL
    // surviving rows (not just top-k), keeping them in a bounded range. A
    // non-positive or non-finite maximum falls back to a scale of 1.0.
    let max_actual = rows.iter().map(|r| r.actual).fold(f64::NEG_INFINITY, f64::max);
    let scale = if max_actual.is_finite() && max_actual > 0.0 {
        max_actual
    } else {
        1.0
    };
    let dcg_pred = dcg(by_predicted[..k_pred].iter().map(|&i| rows[i].actual / scale));
    let dcg_ideal = dcg(by_actual[..k_actual].iter().map(|&i| rows[i].actual / scale));
    if dcg_ideal > 0.0 {
        Metric::Defined(dcg_pred / dcg_ideal).store(&mut out, "ndcg_at_10");
    }

    // Rank correlations over the FULL surviving set, not just top-k.
    let actuals: Vec<f64> = rows.iter().map(|r| r.actual).collect();
    let predicted: Vec<f64> = rows.iter().map(|r| r.predicted).collect();
    spearman(&actuals, &predicted).store(&mut out, "spearman_corr");
    kendall(&actuals, &predicted).store(&mut out, "kendall_corr");

    out
}

/// Convenience wrapper: just the top-k overlap count, `None` when the full
/// computation yields no metrics.
#[must_use]
pub fn top_k_overlap(frame: &Frame, predictions: &[f64], k: usize) -> Option<usize> {
    let opts = RankingOptions {
        k,
        ..RankingOptions::default()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    compute_ranking_metrics(frame, predictions, &opts)
        .get("top10_overlap")
        .map(|v| *v as usize)
}

/// Descending comparator with NaN sorted last (mirroring dataframe
/// `sort_values(ascending=False)` semantics for missing predictions).
fn cmp_desc_nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.total_cmp(&a),
    }
}

/// Discounted cumulative gain with divisor `log2(i + 2)` for 1-indexed
/// position `i`: the top rank is discounted by `log2(3)`, not `log2(1)`.
/// This exact discount is a bit-for-bit compatibility contract with the
/// historical report pipeline; do not "fix" it to the textbook formula.
fn dcg(gains: impl Iterator<Item = f64>) -> f64 {
    gains
        .enumerate()
        .map(|(p, g)| {
            #[allow(clippy::cast_precision_loss)]
            let divisor = (p as f64 + 3.0).log2();
            g / divisor
        })
        .sum()
}

/// Number of distinct values by bit pattern, with `-0.0` folded into `0.0`
/// so a numerically constant series is recognized as constant.
fn distinct_count(values: &[f64]) -> usize {
    let bits: HashSet<u64> = values
        .iter()
        .map(|v| if *v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() })
        .collect();
    bits.len()
}

/// Average ranks (1-based), ties sharing the mean of their positions.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && values[order[j + 1]].total_cmp(&values[order[i]]) == Ordering::Equal {
            j += 1;
        }
        #[allow(clippy::cast_precision_loss)]
        let avg = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = avg;
        }
        i = j + 1;
    }
    ranks
}

/// Spearman rank correlation: Pearson correlation of average ranks.
/// Undefined when either series has fewer than two distinct values — a
/// constant series has no defined rank correlation.
fn spearman(a: &[f64], b: &[f64]) -> Metric {
    if distinct_count(a) < 2 || distinct_count(b) < 2 {
        return Metric::Undefined;
    }
    pearson(&average_ranks(a), &average_ranks(b))
}

fn pearson(a: &[f64], b: &[f64]) -> Metric {
    let n = a.len().min(b.len());
    if n < 2 {
        return Metric::Undefined;
    }
    #[allow(clippy::cast_precision_loss)]
    let nf = n as f64;
    let mean_a = a[..n].iter().sum::<f64>() / nf;
    let mean_b = b[..n].iter().sum::<f64>() / nf;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    let denom = var_a.sqrt() * var_b.sqrt();
    if denom > 0.0 {
        Metric::Defined(cov / denom)
    } else {
        Metric::Undefined
    }
}

/// Kendall's tau-b (tie-corrected) rank correlation.
///
/// O(n²) pairwise counting; the surviving row sets here are yearly film
/// slates, small enough that the simpler tie handling wins over an
/// inversion-count formulation.
fn kendall(a: &[f64], b: &[f64]) -> Metric {
    let n = a.len().min(b.len());
    if n < 2 || distinct_count(&a[..n]) < 2 || distinct_count(&b[..n]) < 2 {
        return Metric::Undefined;
    }

    let mut concordant = 0u64;
    let mut discordant = 0u64;
    let mut tied_a = 0u64;
    let mut tied_b = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            let ca = a[i].total_cmp(&a[j]);
            let cb = b[i].total_cmp(&b[j]);
            if ca == Ordering::Equal {
                tied_a += 1;
            }
            if cb == Ordering::Equal {
                tied_b += 1;
            }
            if ca != Ordering::Equal && cb != Ordering::Equal {
                if ca == cb {
                    concordant += 1;
                } else {
                    discordant += 1;
                }
            }
        }
    }

    let n_u64 = n as u64;
    let total_pairs = n_u64 * (n_u64 - 1) / 2;
    #[allow(clippy::cast_precision_loss)]
    let denom = (((total_pairs - tied_a) as f64) * ((total_pairs - tied_b) as f64)).sqrt();
    if denom > 0.0 {
        #[allow(clippy::cast_precision_loss)]
        let numerator = concordant as f64 - discordant as f64;
        Metric::Defined(numerator / denom)
    } else {
        Metric::Undefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::frame::Column;

    fn frame_of(titles: &[&str], targets: &[f64]) -> Frame {
        let mut frame = Frame::new();
        frame
            .insert(
                columns::TITLE,
                Column::Text(titles.iter().map(|t| Some((*t).to_string())).collect()),
            )
            .unwrap();
        frame
            .insert(
                columns::REVENUE_DOMESTIC,
                Column::Float(targets.iter().map(|v| Some(*v)).collect()),
            )
            .unwrap();
        frame
    }

    fn descending_12() -> (Frame, Vec<f64>) {
        let titles: Vec<String> = (0..12).map(|i| format!("film_{i}")).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let targets: Vec<f64> = (0..12).map(|i| f64::from(120 - 10 * i)).collect();
        let frame = frame_of(&title_refs, &targets);
        // Predictions in the same order as the actuals (perfect ranking).
        let predictions = targets.clone();
        (frame, predictions)
    }

    #[test]
    fn perfect_ranking_scores_perfectly() {
        let (frame, predictions) = descending_12();
        let metrics = compute_ranking_metrics(&frame, &predictions, &RankingOptions::default());

        assert_eq!(metrics["top10_overlap"], 10.0);
        assert_eq!(metrics["recall_at_10"], 1.0);
        assert_eq!(metrics["precision_at_10"], 1.0);
        assert_eq!(metrics["ndcg_at_10"], 1.0);
        assert!((metrics["spearman_corr"] - 1.0).abs() < 1e-12);
        assert!((metrics["kendall_corr"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn length_mismatch_returns_empty() {
        let (frame, mut predictions) = descending_12();
        predictions.pop(); // 11 predictions vs 12 rows
        let metrics = compute_ranking_metrics(&frame, &predictions, &RankingOptions::default());
        assert!(metrics.is_empty());
    }

    #[test]
    fn missing_columns_return_empty() {
        let (frame, predictions) = descending_12();
        let no_title = RankingOptions {
            title_col: "movie".into(),
            ..RankingOptions::default()
        };
        assert!(compute_ranking_metrics(&frame, &predictions, &no_title).is_empty());

        let no_target = RankingOptions {
            target_col: "worldwide_revenue".into(),
            ..RankingOptions::default()
        };
        assert!(compute_ranking_metrics(&frame, &predictions, &no_target).is_empty());
    }

    #[test]
    fn rows_with_missing_title_or_target_are_dropped() {
        let mut frame = Frame::new();
        frame
            .insert(
                columns::TITLE,
                Column::Text(vec![Some("a".into()), None, Some("c".into())]),
            )
            .unwrap();
        frame
            .insert(
                columns::REVENUE_DOMESTIC,
                Column::Float(vec![Some(10.0), Some(20.0), None]),
            )
            .unwrap();
        let metrics =
            compute_ranking_metrics(&frame, &[10.0, 20.0, 30.0], &RankingOptions::default());
        // Only "a" survives; overlap over a single row.
        assert_eq!(metrics["top10_overlap"], 1.0);
        assert_eq!(metrics["recall_at_10"], 1.0);
    }

    #[test]
    fn all_rows_dropped_returns_empty_and_omits_recall() {
        let mut frame = Frame::new();
        frame
            .insert(columns::TITLE, Column::Text(vec![None, None]))
            .unwrap();
        frame
            .insert(
                columns::REVENUE_DOMESTIC,
                Column::Float(vec![Some(1.0), Some(2.0)]),
            )
            .unwrap();
        let metrics = compute_ranking_metrics(&frame, &[1.0, 2.0], &RankingOptions::default());
        assert!(metrics.is_empty());
        assert!(!metrics.contains_key("recall_at_10"));
    }

    #[test]
    fn constant_target_omits_rank_correlations() {
        let frame = frame_of(&["a", "b", "c"], &[5.0, 5.0, 5.0]);
        let metrics = compute_ranking_metrics(&frame, &[3.0, 2.0, 1.0], &RankingOptions::default());
        assert!(!metrics.contains_key("spearman_corr"));
        assert!(!metrics.contains_key("kendall_corr"));
        // Overlap metrics remain defined: with n < k every title is in both
        // top sets.
        assert_eq!(metrics["top10_overlap"], 3.0);
        assert_eq!(metrics["ndcg_at_10"], 1.0);
    }

    #[test]
    fn mixed_sign_zero_target_is_still_constant() {
        // -0.0 and 0.0 are numerically equal; a series of them has no
        // defined rank correlation.
        let frame = frame_of(&["a", "b", "c"], &[0.0, -0.0, 0.0]);
        let metrics = compute_ranking_metrics(&frame, &[3.0, 2.0, 1.0], &RankingOptions::default());
        assert!(!metrics.contains_key("spearman_corr"));
        assert!(!metrics.contains_key("kendall_corr"));
    }

    #[test]
    fn constant_predictions_omit_rank_correlations() {
        let frame = frame_of(&["a", "b", "c"], &[3.0, 2.0, 1.0]);
        let metrics = compute_ranking_metrics(&frame, &[7.0, 7.0, 7.0], &RankingOptions::default());
        assert!(!metrics.contains_key("spearman_corr"));
        assert!(!metrics.contains_key("kendall_corr"));
    }

    #[test]
    fn non_positive_targets_omit_ndcg() {
        // Maximum actual is non-positive: scale falls back to 1.0 and the
        // ideal DCG is not positive, so the key must be absent.
        let frame = frame_of(&["a", "b"], &[-5.0, -10.0]);
        let metrics = compute_ranking_metrics(&frame, &[1.0, 2.0], &RankingOptions::default());
        assert!(!metrics.contains_key("ndcg_at_10"));
        assert!(metrics.contains_key("top10_overlap"));
    }

    #[test]
    fn reversed_ranking_scores_below_perfect() {
        let titles: Vec<String> = (0..12).map(|i| format!("film_{i}")).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let targets: Vec<f64> = (0..12).map(|i| f64::from(120 - 10 * i)).collect();
        let frame = frame_of(&title_refs, &targets);
        let reversed: Vec<f64> = targets.iter().rev().copied().collect();

        let metrics = compute_ranking_metrics(&frame, &reversed, &RankingOptions::default());
        // 12 rows, k=10: both top-10 windows share the middle 8 titles.
        assert_eq!(metrics["top10_overlap"], 8.0);
        assert!(metrics["ndcg_at_10"] < 1.0);
        assert!(metrics["ndcg_at_10"] > 0.0);
        assert!((metrics["spearman_corr"] + 1.0).abs() < 1e-12);
        assert!((metrics["kendall_corr"] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn recall_and_precision_stay_in_unit_interval() {
        let frame = frame_of(&["a", "b", "c", "d"], &[40.0, 30.0, 20.0, 10.0]);
        let metrics =
            compute_ranking_metrics(&frame, &[10.0, 40.0, 20.0, 30.0], &RankingOptions::default());
        for key in ["recall_at_10", "precision_at_10", "ndcg_at_10"] {
            let v = metrics[key];
            assert!((0.0..=1.0).contains(&v), "{key} out of range: {v}");
        }
    }

    #[test]
    fn overlap_invariant_under_consistent_relabeling() {
        let (frame, predictions) = descending_12();
        let relabeled_titles: Vec<String> = (0..12).map(|i| format!("retitled {i}")).collect();
        let mut relabeled = frame.clone();
        relabeled
            .insert(
                columns::TITLE,
                Column::Text(relabeled_titles.into_iter().map(Some).collect()),
            )
            .unwrap();

        let a = compute_ranking_metrics(&frame, &predictions, &RankingOptions::default());
        let b = compute_ranking_metrics(&relabeled, &predictions, &RankingOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let frame = frame_of(&["a", "b", "c", "d"], &[4.0, 3.0, 2.0, 1.0]);
        let predictions = [2.5, 4.5, 1.5, 3.5];
        let first = compute_ranking_metrics(&frame, &predictions, &RankingOptions::default());
        let second = compute_ranking_metrics(&frame, &predictions, &RankingOptions::default());
        // Bit-identical output, not merely approximately equal.
        assert_eq!(first, second);
    }

    #[test]
    fn ties_break_by_original_row_order() {
        // Rows b and c tie on predicted value; the stable sort must keep b
        // (earlier row) ahead of c, so b takes the last top-k slot.
        let frame = frame_of(&["a", "b", "c"], &[30.0, 20.0, 10.0]);
        let opts = RankingOptions {
            k: 2,
            ..RankingOptions::default()
        };
        let metrics = compute_ranking_metrics(&frame, &[50.0, 40.0, 40.0], &opts);
        // Top-2 actual: {a, b}; top-2 predicted: {a, b} because b precedes c.
        assert_eq!(metrics["top10_overlap"], 2.0);
        assert_eq!(metrics["recall_at_10"], 1.0);
    }

    #[test]
    fn nan_predictions_sort_last_and_row_survives() {
        let frame = frame_of(&["a", "b", "c"], &[30.0, 20.0, 10.0]);
        let opts = RankingOptions {
            k: 2,
            ..RankingOptions::default()
        };
        let metrics = compute_ranking_metrics(&frame, &[f64::NAN, 5.0, 1.0], &opts);
        // Predicted top-2 is {b, c}: the NaN prediction for "a" ranks last.
        assert_eq!(metrics["top10_overlap"], 1.0);
        assert_eq!(metrics["precision_at_10"], 0.5);
    }

    #[test]
    fn nan_target_treated_as_missing() {
        let frame = frame_of(&["a", "b", "c"], &[f64::NAN, 20.0, 10.0]);
        let metrics =
            compute_ranking_metrics(&frame, &[1.0, 2.0, 3.0], &RankingOptions::default());
        // Row "a" dropped: two survivors.
        assert_eq!(metrics["top10_overlap"], 2.0);
    }

    #[test]
    fn duplicate_titles_collapse_in_the_overlap_sets() {
        // Duplicate titles are possible across years; within one evaluation
        // they collapse into a single set member.
        let frame = frame_of(&["a", "a", "b"], &[30.0, 20.0, 10.0]);
        let opts = RankingOptions {
            k: 2,
            ..RankingOptions::default()
        };
        let metrics = compute_ranking_metrics(&frame, &[30.0, 20.0, 10.0], &opts);
        assert_eq!(metrics["top10_overlap"], 1.0);
    }

    #[test]
    fn dcg_discount_uses_log2_of_position_plus_two() {
        // 1-indexed position i gets divisor log2(i + 2): the top rank is
        // discounted by log2(3). Locks the compatibility contract.
        let value = dcg([1.0, 1.0].into_iter());
        let expected = 1.0 / 3.0f64.log2() + 1.0 / 4.0f64.log2();
        assert!((value - expected).abs() < 1e-15);
    }

    #[test]
    fn ndcg_rewards_better_orderings_monotonically() {
        let titles: Vec<String> = (0..6).map(|i| format!("t{i}")).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let targets = [60.0, 50.0, 40.0, 30.0, 20.0, 10.0];
        let frame = frame_of(&title_refs, &targets);
        let opts = RankingOptions {
            k: 3,
            ..RankingOptions::default()
        };

        let perfect = compute_ranking_metrics(&frame, &targets, &opts);
        let one_swap = compute_ranking_metrics(&frame, &[50.0, 60.0, 40.0, 30.0, 20.0, 10.0], &opts);
        let reversed =
            compute_ranking_metrics(&frame, &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0], &opts);

        assert_eq!(perfect["ndcg_at_10"], 1.0);
        assert!(one_swap["ndcg_at_10"] <= perfect["ndcg_at_10"]);
        assert!(reversed["ndcg_at_10"] < one_swap["ndcg_at_10"]);
    }

    #[test]
    fn spearman_handles_ties_with_average_ranks() {
        let a = [1.0, 2.0, 2.0, 3.0];
        let ranks = average_ranks(&a);
        assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
    }

    #[test]
    fn kendall_tau_b_corrects_for_ties() {
        // a: [1, 2, 2, 3], b: [1, 2, 3, 4]; one pair tied in a.
        let tau = kendall(&[1.0, 2.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]);
        let Metric::Defined(v) = tau else {
            panic!("tau should be defined");
        };
        // C=5, D=0, n0=6, tied_a=1, tied_b=0 → 5 / sqrt(5 * 6).
        assert!((v - 5.0 / (5.0f64 * 6.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn top_k_overlap_wrapper_matches_full_computation() {
        let (frame, predictions) = descending_12();
        assert_eq!(top_k_overlap(&frame, &predictions, 10), Some(10));
        assert_eq!(top_k_overlap(&frame, &predictions[..11], 10), None);
    }

    #[test]
    fn title_column_coerced_to_text() {
        // Numeric identifiers still work as titles after coercion.
        let mut frame = Frame::new();
        frame
            .insert(columns::TITLE, Column::Int(vec![Some(1), Some(2), Some(3)]))
            .unwrap();
        frame
            .insert(
                columns::REVENUE_DOMESTIC,
                Column::Float(vec![Some(30.0), Some(20.0), Some(10.0)]),
            )
            .unwrap();
        let metrics =
            compute_ranking_metrics(&frame, &[30.0, 20.0, 10.0], &RankingOptions::default());
        assert_eq!(metrics["top10_overlap"], 3.0);
    }
}

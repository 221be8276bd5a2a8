//! Column-oriented observation table.
//!
//! [`Frame`] is the minimal dataframe stand-in the evaluation pipeline works
//! with: a row per film, a textual title, a numeric revenue target, and an
//! arbitrary set of feature columns. Missing values are first-class
//! (`Option<T>` per cell) because the upstream datasets routinely contain
//! them and every consumer has a documented fallback per absent field.
//!
//! All transforms copy: `retain_rows`, `select`, and `with_column` return new
//! frames, so no mutation ever leaks back to the caller.

use std::collections::HashSet;

use crate::error::{EvalError, EvalResult};

/// Well-known column names used across the pipeline.
///
/// These constants are the explicit optional-field schema: only `TITLE` and a
/// target column are ever structurally required, and callers that find a
/// column absent follow the documented fallback for that field.
pub mod columns {
    /// Film title (textual identifier; uniqueness NOT guaranteed across years).
    pub const TITLE: &str = "title";
    /// Default target: domestic revenue in dollars.
    pub const REVENUE_DOMESTIC: &str = "revenue_domestic";
    /// Release year (integer-like). Required only by the top-k report builder.
    pub const RELEASE_YEAR: &str = "release_year";
    /// 0/1 indicator for major-studio titles. Optional; filters skip when absent.
    pub const IS_MAJOR_STUDIO: &str = "is_major_studio";
    /// Boolean-like indicator for pandemic-era rows. Optional; weighting
    /// degrades to all-ones when absent.
    pub const IS_PANDEMIC_YEAR: &str = "is_pandemic_year";
    /// Attached by the ranking engine and report builder.
    pub const PREDICTED_REVENUE: &str = "predicted_revenue";
    /// Attached by the report builder when the target column is present.
    pub const ACTUAL_REVENUE: &str = "actual_revenue";
    /// Signed error (actual - predicted).
    pub const PREDICTION_ERROR: &str = "prediction_error";
    /// Signed error as a percentage of actual revenue.
    pub const PREDICTION_ERROR_PCT: &str = "prediction_error_pct";
}

/// A single column of homogeneous, possibly-missing values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// 64-bit floats. `None` is the missing marker; a stored NaN is treated
    /// as missing by consumers that mirror dataframe `dropna` semantics.
    Float(Vec<Option<f64>>),
    /// 64-bit integers.
    Int(Vec<Option<i64>>),
    /// Booleans.
    Bool(Vec<Option<bool>>),
    /// Free text.
    Text(Vec<Option<String>>),
}

impl Column {
    /// Number of cells (including missing ones).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Float(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    /// True when the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for `Float` and `Int` columns.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Int(_))
    }

    /// True for `Bool` columns.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Short dtype name used by the model-signature inference.
    #[must_use]
    pub fn dtype(&self) -> &'static str {
        match self {
            Self::Float(_) => "float64",
            Self::Int(_) => "int64",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }

    /// Cells coerced to `f64`. Bools become 0.0/1.0; text yields `None`
    /// for the whole column.
    #[must_use]
    pub fn numeric_values(&self) -> Option<Vec<Option<f64>>> {
        match self {
            Self::Float(v) => Some(v.clone()),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => Some(v.iter().map(|c| c.map(|x| x as f64)).collect()),
            Self::Bool(v) => Some(
                v.iter()
                    .map(|c| c.map(|b| if b { 1.0 } else { 0.0 }))
                    .collect(),
            ),
            Self::Text(_) => None,
        }
    }

    /// Cells coerced to display strings. Every column type can be rendered,
    /// which is how titles are "coerced to text for comparison".
    #[must_use]
    pub fn display_values(&self) -> Vec<Option<String>> {
        match self {
            Self::Float(v) => v.iter().map(|c| c.map(|x| x.to_string())).collect(),
            Self::Int(v) => v.iter().map(|c| c.map(|x| x.to_string())).collect(),
            Self::Bool(v) => v.iter().map(|c| c.map(|b| b.to_string())).collect(),
            Self::Text(v) => v.clone(),
        }
    }

    /// Truthiness per cell: missing is false, numbers are true when nonzero.
    #[must_use]
    pub fn truthy(&self) -> Vec<bool> {
        match self {
            Self::Float(v) => v.iter().map(|c| matches!(c, Some(x) if *x != 0.0)).collect(),
            Self::Int(v) => v.iter().map(|c| matches!(c, Some(x) if *x != 0)).collect(),
            Self::Bool(v) => v.iter().map(|c| matches!(c, Some(true))).collect(),
            Self::Text(v) => v
                .iter()
                .map(|c| matches!(c, Some(s) if !s.is_empty()))
                .collect(),
        }
    }

    /// Distinct non-missing values in first-seen order, rendered as strings.
    #[must_use]
    pub fn distinct_non_missing(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for cell in self.display_values().into_iter().flatten() {
            if seen.insert(cell.clone()) {
                out.push(cell);
            }
        }
        out
    }

    /// Number of missing cells.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        match self {
            Self::Float(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Int(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Bool(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Text(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    fn taken(&self, indices: &[usize]) -> Self {
        fn take<T: Clone>(cells: &[Option<T>], indices: &[usize]) -> Vec<Option<T>> {
            indices
                .iter()
                .filter_map(|&i| cells.get(i).cloned())
                .collect()
        }
        match self {
            Self::Float(v) => Self::Float(take(v, indices)),
            Self::Int(v) => Self::Int(take(v, indices)),
            Self::Bool(v) => Self::Bool(take(v, indices)),
            Self::Text(v) => Self::Text(take(v, indices)),
        }
    }

    fn retained(&self, mask: &[bool]) -> Self {
        fn keep<T: Clone>(cells: &[Option<T>], mask: &[bool]) -> Vec<Option<T>> {
            cells
                .iter()
                .zip(mask)
                .filter(|(_, keep)| **keep)
                .map(|(c, _)| c.clone())
                .collect()
        }
        match self {
            Self::Float(v) => Self::Float(keep(v, mask)),
            Self::Int(v) => Self::Int(keep(v, mask)),
            Self::Bool(v) => Self::Bool(keep(v, mask)),
            Self::Text(v) => Self::Text(keep(v, mask)),
        }
    }
}

/// Ordered collection of named, equal-length columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    /// Empty frame with no columns and no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Row count. An empty frame has zero rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, col)| col.len())
    }

    /// True when the frame has no rows (or no columns at all).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Look up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, col)| col)
    }

    /// True when a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Insert or replace a column. The first column fixes the row count;
    /// later inserts must match it.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) -> EvalResult<()> {
        let name = name.into();
        if !self.columns.is_empty() && column.len() != self.len() {
            return Err(EvalError::ColumnLength {
                column: name,
                expected: self.len(),
                found: column.len(),
            });
        }
        if let Some(slot) = self.columns.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = column;
        } else {
            self.columns.push((name, column));
        }
        Ok(())
    }

    /// Copy of this frame with one column inserted or replaced.
    pub fn with_column(&self, name: impl Into<String>, column: Column) -> EvalResult<Self> {
        let mut out = self.clone();
        out.insert(name, column)?;
        Ok(out)
    }

    /// Copy of this frame keeping only rows where `mask` is true.
    ///
    /// `mask` shorter than the frame drops the unmasked tail; longer masks
    /// ignore the excess.
    #[must_use]
    pub fn retain_rows(&self, mask: &[bool]) -> Self {
        let mut padded = mask.to_vec();
        padded.resize(self.len(), false);
        Self {
            columns: self
                .columns
                .iter()
                .map(|(name, col)| (name.clone(), col.retained(&padded)))
                .collect(),
        }
    }

    /// Copy of this frame with rows gathered by `indices`, in the given
    /// order. Rows may be repeated; out-of-range indices are skipped.
    ///
    /// Unlike [`Frame::retain_rows`], this reorders: the output row order is
    /// the index order, which is how ranked views are materialized.
    #[must_use]
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(name, col)| (name.clone(), col.taken(indices)))
                .collect(),
        }
    }

    /// Copy of this frame projected to `names`, in the requested order.
    /// Names that do not exist are silently skipped.
    #[must_use]
    pub fn select(&self, names: &[&str]) -> Self {
        Self {
            columns: names
                .iter()
                .filter_map(|name| {
                    self.column(name)
                        .map(|col| ((*name).to_string(), col.clone()))
                })
                .collect(),
        }
    }

    /// Numeric view of a column (see [`Column::numeric_values`]).
    #[must_use]
    pub fn numeric_values(&self, name: &str) -> Option<Vec<Option<f64>>> {
        self.column(name).and_then(Column::numeric_values)
    }

    /// Display-string view of a column.
    #[must_use]
    pub fn display_values(&self, name: &str) -> Option<Vec<Option<String>>> {
        self.column(name).map(Column::display_values)
    }

    /// Truthiness mask for a column; `None` when the column is absent.
    #[must_use]
    pub fn bool_mask(&self, name: &str) -> Option<Vec<bool>> {
        self.column(name).map(Column::truthy)
    }
}

//! Dataset-scope configuration.
//!
//! The upstream box-office datasets come in several variants (full corpus,
//! English-only, major-studio-only, and the intersection). [`DatasetConfig`]
//! keeps every consumer pointed at the same variant: it derives the dataset
//! filename, knows which extra filters must be applied at load time, and can
//! be persisted to JSON so separate processes stay in sync.
//!
//! # Environment Variable Overrides
//!
//! | Variable             | Field        | Default   |
//! |----------------------|--------------|-----------|
//! | `MARQUEE_SCOPE`      | `scope`      | `full`    |
//! | `MARQUEE_YEAR_START` | `year_start` | `2010`    |
//! | `MARQUEE_DATA_DIR`   | `data_dir`   | `../data` |

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, EvalResult};

/// Final year covered by every dataset variant.
pub const DATASET_END_YEAR: i64 = 2026;

/// Which subset of the corpus a consumer works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DatasetScope {
    /// All studios, all languages.
    #[default]
    Full,
    /// English-language titles only.
    English,
    /// Major-studio titles only.
    Major,
    /// English-language titles from major studios only.
    EnglishMajor,
}

impl DatasetScope {
    /// All scope names, for error messages.
    pub const NAMES: [&'static str; 4] = ["full", "english", "major", "english_major"];

    /// Stable identifier used in filenames, params, and persisted config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::English => "english",
            Self::Major => "major",
            Self::EnglishMajor => "english_major",
        }
    }

    /// Human-readable name for summaries.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Full => "Full Dataset",
            Self::English => "English Only",
            Self::Major => "Major Studios",
            Self::EnglishMajor => "English + Major Studios",
        }
    }

    /// One-line description for summaries.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Full => "All studios, all languages",
            Self::English => "English movies only",
            Self::Major => "Major studios only",
            Self::EnglishMajor => "English movies from major studios only",
        }
    }

    /// Parse a scope identifier. Unknown names yield
    /// [`EvalError::UnknownScope`] listing the valid options.
    pub fn parse(s: &str) -> EvalResult<Self> {
        match s {
            "full" => Ok(Self::Full),
            "english" => Ok(Self::English),
            "major" => Ok(Self::Major),
            "english_major" => Ok(Self::EnglishMajor),
            other => Err(EvalError::UnknownScope {
                scope: other.to_string(),
                available: Self::NAMES.join(", "),
            }),
        }
    }
}

impl fmt::Display for DatasetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dataset-scope configuration shared across all consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Which subset of the corpus to use.
    pub scope: DatasetScope,
    /// First year of the scoped range (the corpus ships 2010 and 2015 cuts).
    pub year_start: i64,
    /// Directory the dataset CSVs live in.
    pub data_dir: PathBuf,
    /// Use the full dataset for validation even when the scope is limited.
    pub force_full_validation: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            scope: DatasetScope::Full,
            year_start: 2010,
            data_dir: PathBuf::from("../data"),
            force_full_validation: false,
        }
    }
}

impl DatasetConfig {
    /// Full-corpus scope, 2010 onward.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// English-only scope.
    #[must_use]
    pub fn english_only(year_start: i64) -> Self {
        Self {
            scope: DatasetScope::English,
            year_start,
            ..Self::default()
        }
    }

    /// Major-studio scope.
    #[must_use]
    pub fn major_studios(year_start: i64) -> Self {
        Self {
            scope: DatasetScope::Major,
            year_start,
            ..Self::default()
        }
    }

    /// English + major-studio scope.
    #[must_use]
    pub fn english_major(year_start: i64) -> Self {
        Self {
            scope: DatasetScope::EnglishMajor,
            year_start,
            ..Self::default()
        }
    }

    /// Load overrides from environment variables.
    ///
    /// Only overrides fields for which variables are set. Invalid values are
    /// silently ignored (current values are kept).
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("MARQUEE_SCOPE") {
            if let Ok(scope) = DatasetScope::parse(&val) {
                self.scope = scope;
            }
        }
        if let Ok(val) = std::env::var("MARQUEE_YEAR_START") {
            if let Ok(year) = val.parse::<i64>() {
                self.year_start = year;
            }
        }
        if let Ok(val) = std::env::var("MARQUEE_DATA_DIR") {
            if !val.is_empty() {
                self.data_dir = PathBuf::from(val);
            }
        }
        self
    }

    /// True when rows must additionally be filtered to major studios at load
    /// time (the combined scope reuses the English file).
    #[must_use]
    pub fn requires_major_filter(&self) -> bool {
        matches!(self.scope, DatasetScope::Major | DatasetScope::EnglishMajor)
    }

    /// True when the scope is restricted to English-language titles.
    #[must_use]
    pub fn filters_english(&self) -> bool {
        matches!(
            self.scope,
            DatasetScope::English | DatasetScope::EnglishMajor
        )
    }

    /// Filename of the dataset CSV for this scope.
    ///
    /// `training` selects the modeling cut of the full corpus; the scoped
    /// variants use one file for both. When `force_full_validation` is set,
    /// non-training reads of a limited scope fall back to the full file.
    #[must_use]
    pub fn dataset_filename(&self, training: bool) -> String {
        if !training && self.force_full_validation && self.scope != DatasetScope::Full {
            return "dataset_domestic_processed.csv".to_string();
        }
        match self.scope {
            DatasetScope::Full => {
                if training {
                    "dataset_domestic_processed_modeling.csv".to_string()
                } else {
                    "dataset_domestic_processed.csv".to_string()
                }
            }
            DatasetScope::English | DatasetScope::EnglishMajor => format!(
                "dataset_domestic_processed_english_{}_{}.csv",
                self.year_start, DATASET_END_YEAR
            ),
            DatasetScope::Major => format!(
                "dataset_domestic_processed_major_{}_{}.csv",
                self.year_start, DATASET_END_YEAR
            ),
        }
    }

    /// Full path of the dataset CSV for this scope.
    #[must_use]
    pub fn dataset_path(&self, training: bool) -> PathBuf {
        self.data_dir.join(self.dataset_filename(training))
    }

    /// Human-readable summary of the active configuration.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Dataset configuration: {}\n   Description: {}\n   Year range: {}-{}\n   Training file: {}\n   Full file: {}\n",
            self.scope.display_name(),
            self.scope.description(),
            self.year_start,
            DATASET_END_YEAR,
            self.dataset_filename(true),
            self.dataset_filename(false),
        );
        if self.force_full_validation {
            out.push_str("   Using full dataset for validation (force_full_validation)\n");
        }
        out
    }

    /// Persist this configuration as JSON.
    pub fn save(&self, path: &Path) -> EvalResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| EvalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from JSON.
    ///
    /// A missing file yields the defaults; a partial file merges over the
    /// defaults (`serde(default)`). A present-but-malformed file is an error.
    pub fn load(path: &Path) -> EvalResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| EvalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

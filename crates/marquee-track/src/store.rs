//! File-backed run store.
//!
//! Layout: `<root>/<experiment>/<run_id>/run.json` plus an `artifacts/`
//! directory holding copies of any staged artifact files. The store is the
//! one component allowed to fail hard: an unusable store root surfaces as
//! [`EvalError::TrackingUnavailable`] with an actionable message, because
//! silently skipping run logging would corrupt the reproducibility
//! guarantees the sink exists to provide.

use std::fs;
use std::path::{Path, PathBuf};

use marquee_core::error::{EvalError, EvalResult};
use tracing::info;

use crate::record::RunRecord;

/// Where a logged run landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunHandle {
    pub run_id: String,
    pub run_dir: PathBuf,
}

/// Narrow sink interface so external tracking services can be swapped in
/// behind the same call site.
pub trait ExperimentTracker {
    /// Persist `record` together with copies of the staged `artifacts`.
    fn log_run(&self, record: &RunRecord, artifacts: &[PathBuf]) -> EvalResult<RunHandle>;
}

/// Local filesystem implementation of [`ExperimentTracker`].
#[derive(Debug)]
pub struct FileStoreTracker {
    root: PathBuf,
}

impl FileStoreTracker {
    /// Open (creating if needed) a store rooted at `root`.
    ///
    /// Fails with [`EvalError::TrackingUnavailable`] when the root cannot be
    /// created or is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> EvalResult<Self> {
        let root = root.into();
        if let Err(err) = fs::create_dir_all(&root) {
            return Err(EvalError::TrackingUnavailable {
                reason: format!("cannot create store root {}: {err}", root.display()),
            });
        }
        if !root.is_dir() {
            return Err(EvalError::TrackingUnavailable {
                reason: format!("store root {} is not a directory", root.display()),
            });
        }
        Ok(Self { root })
    }

    /// Store root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory a given run would occupy.
    #[must_use]
    pub fn run_dir(&self, experiment: &str, run_id: &str) -> PathBuf {
        self.root.join(experiment).join(run_id)
    }

    /// Read a previously logged record back from the store.
    pub fn load_run(&self, experiment: &str, run_id: &str) -> EvalResult<RunRecord> {
        let path = self.run_dir(experiment, run_id).join("run.json");
        let bytes = fs::read(&path)?;
        serde_json::from_slice(&bytes).map_err(|source| EvalError::ConfigParse { path, source })
    }
}

impl ExperimentTracker for FileStoreTracker {
    fn log_run(&self, record: &RunRecord, artifacts: &[PathBuf]) -> EvalResult<RunHandle> {
        let run_dir = self.run_dir(&record.experiment, &record.run_id);
        let artifact_dir = run_dir.join("artifacts");
        fs::create_dir_all(&artifact_dir)?;

        for staged in artifacts {
            let Some(file_name) = staged.file_name() else {
                continue;
            };
            let dest = artifact_dir.join(file_name);
            fs::copy(staged, &dest).map_err(|err| EvalError::ArtifactWrite {
                path: dest.clone(),
                source: Box::new(err),
            })?;
        }

        let record_path = run_dir.join("run.json");
        let json =
            serde_json::to_vec_pretty(record).map_err(|err| EvalError::ArtifactWrite {
                path: record_path.clone(),
                source: Box::new(err),
            })?;
        fs::write(&record_path, json).map_err(|err| EvalError::ArtifactWrite {
            path: record_path,
            source: Box::new(err),
        })?;

        info!(
            target: "marquee::log_run",
            run_id = %record.run_id,
            experiment = %record.experiment,
            artifact_count = artifacts.len(),
            run_dir = %run_dir.display(),
            "run persisted"
        );

        Ok(RunHandle {
            run_id: record.run_id.clone(),
            run_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("nested/runs");
        let tracker = FileStoreTracker::new(&root).unwrap();
        assert!(tracker.root().is_dir());
    }

    #[test]
    fn unusable_root_fails_with_tracking_unavailable() {
        let tmp = tempfile::tempdir().unwrap();
        let file_path = tmp.path().join("not_a_dir");
        std::fs::write(&file_path, b"occupied").unwrap();

        let err = FileStoreTracker::new(&file_path).unwrap_err();
        assert!(matches!(err, EvalError::TrackingUnavailable { .. }));
        assert!(err.to_string().contains("not_a_dir"));
    }

    #[test]
    fn log_run_writes_record_and_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let tracker = FileStoreTracker::new(tmp.path().join("runs")).unwrap();

        let staged = tmp.path().join("predictions.csv");
        std::fs::write(&staged, b"title,actual,predicted\n").unwrap();

        let mut record = RunRecord::new("box-office", "GBM");
        record.metrics.insert("rmse".into(), 1.5);
        record.artifacts.push("predictions.csv".into());

        let handle = tracker.log_run(&record, &[staged]).unwrap();
        assert!(handle.run_dir.join("run.json").is_file());
        assert!(handle
            .run_dir
            .join("artifacts")
            .join("predictions.csv")
            .is_file());

        let back = tracker.load_run("box-office", &handle.run_id).unwrap();
        assert_eq!(back.metrics["rmse"], 1.5);
        assert_eq!(back.artifacts, vec!["predictions.csv".to_string()]);
    }

    #[test]
    fn load_run_reports_malformed_record() {
        let tmp = tempfile::tempdir().unwrap();
        let tracker = FileStoreTracker::new(tmp.path()).unwrap();
        let run_dir = tracker.run_dir("exp", "bad");
        std::fs::create_dir_all(&run_dir).unwrap();
        std::fs::write(run_dir.join("run.json"), b"{not json").unwrap();

        let err = tracker.load_run("exp", "bad").unwrap_err();
        assert!(matches!(err, EvalError::ConfigParse { .. }));
    }
}

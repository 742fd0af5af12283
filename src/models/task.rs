//! Per-directory work units and their outcomes.

use std::fmt;
use std::path::{Path, PathBuf};

/// A directory to organize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryTask {
    /// Directory name (last path component).
    pub name: String,
    /// Directory containing it.
    pub parent_dir: PathBuf,
}

impl DirectoryTask {
    pub fn new(name: impl Into<String>, parent_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent_dir: parent_dir.into(),
        }
    }

    /// Build a task from a full directory path.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let parent_dir = path.parent()?.to_path_buf();
        Some(Self { name, parent_dir })
    }

    /// Full path of the directory.
    pub fn path(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }

    /// Prefix used for asset file names.
    pub fn asset_prefix(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Result of resolving a query against the catalog.
#[derive(Debug, Clone)]
pub enum Resolution<T, C> {
    /// The service answered with a single detail record.
    Single(T),
    /// The service answered with a result list.
    Ambiguous(Vec<C>),
    /// Nothing usable was found (including transport failures).
    NotFound,
}

impl<T, C> Resolution<T, C> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

/// Terminal state of one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganizeOutcome {
    /// Already organized (cover image present).
    Skipped,
    /// Directory renamed.
    Renamed { from: String, to: String },
    /// Nothing to change in the name.
    Unchanged,
    /// Rename computed but not permitted for this run.
    RenameDisabled { proposed: String },
    /// The pipeline failed for this directory.
    Failed { reason: String },
}

impl fmt::Display for OrganizeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizeOutcome::Skipped => write!(f, "skipped"),
            OrganizeOutcome::Renamed { from, to } => write!(f, "renamed {} -> {}", from, to),
            OrganizeOutcome::Unchanged => write!(f, "unchanged"),
            OrganizeOutcome::RenameDisabled { proposed } => {
                write!(f, "not renamed (would be {})", proposed)
            }
            OrganizeOutcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

/// Tally of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub unchanged: usize,
    pub not_renamed: usize,
    pub failed: Vec<String>,
}

impl BatchSummary {
    /// Record the outcome for one directory.
    pub fn record(&mut self, name: &str, outcome: &OrganizeOutcome) {
        match outcome {
            OrganizeOutcome::Skipped => self.skipped += 1,
            OrganizeOutcome::Renamed { .. } => self.renamed += 1,
            OrganizeOutcome::Unchanged => self.unchanged += 1,
            OrganizeOutcome::RenameDisabled { .. } => self.not_renamed += 1,
            OrganizeOutcome::Failed { .. } => self.failed.push(name.to_string()),
        }
    }

    pub fn total(&self) -> usize {
        self.renamed + self.skipped + self.unchanged + self.not_renamed + self.failed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_path() {
        let task = DirectoryTask::from_path(Path::new("/media/ABC-123")).unwrap();
        assert_eq!(task.name, "ABC-123");
        assert_eq!(task.parent_dir, PathBuf::from("/media"));
        assert_eq!(task.path(), PathBuf::from("/media/ABC-123"));
        assert_eq!(task.asset_prefix(), "abc-123");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = BatchSummary::default();
        summary.record("a", &OrganizeOutcome::Skipped);
        summary.record(
            "b",
            &OrganizeOutcome::Failed {
                reason: "boom".to_string(),
            },
        );
        summary.record("c", &OrganizeOutcome::Unchanged);

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, vec!["b".to_string()]);
        assert_eq!(summary.total(), 3);
    }
}

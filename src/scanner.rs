//! Project directory scanner

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{MAX_PATH_LENGTH, ProjectList, ProjectRecord};

/// Outcome of scanning a project root
#[derive(Debug)]
pub struct ScanReport {
    /// Candidate projects, in directory enumeration order
    pub projects: Box<ProjectList>,
    /// Entries skipped because their metadata could not be read
    pub skipped:  usize,
}

/// Resolve the configured project root
///
/// The engine performs no discovery of its own: the root must arrive from
/// the caller, parsed from a flag or the environment.
///
/// # Errors
/// Returns `Error::RootNotSet` if no root was configured.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    root.ok_or(Error::RootNotSet)
}

/// Scan the immediate subdirectories of a project root
///
/// Produces one record per subdirectory, carrying its last-modified
/// timestamp. Non-directory entries are excluded. Entries whose metadata
/// cannot be read are counted and skipped; only a root that cannot be
/// enumerated at all fails the whole scan. Candidate sets are
/// re-materialized on every call, so two scans of an unchanged root yield
/// value-equal records.
///
/// # Errors
/// Returns error if:
/// - The root path exceeds `MAX_PATH_LENGTH`
/// - The root cannot be enumerated
/// - More than `MAX_PROJECTS` subdirectories are found
pub fn scan(root: &Path) -> Result<ScanReport> {
    validate_path(root)?;

    let entries = fs::read_dir(root)
        .map_err(|e| Error::scan(&format!("Cannot read project root {}: {e}", root.display())))?;

    let mut projects = Box::new(ProjectList::new());
    let mut skipped = 0;

    for entry in entries {
        let Ok(entry) = entry else {
            skipped += 1;
            continue;
        };

        let Ok(file_type) = entry.file_type() else {
            skipped += 1;
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if validate_path(&path).is_err() {
            skipped += 1;
            continue;
        }

        // Names that are not valid UTF-8 cannot be matched against a query
        let Ok(name) = entry.file_name().into_string() else {
            skipped += 1;
            continue;
        };

        let Ok(metadata) = entry.metadata() else {
            skipped += 1;
            continue;
        };
        let Ok(modified_at) = metadata.modified() else {
            skipped += 1;
            continue;
        };

        projects
            .try_push(ProjectRecord { name, path, modified_at })
            .map_err(|_| Error::ProjectLimitExceeded)?;
    }

    Ok(ScanReport { projects, skipped })
}

/// Validate a path against constraints
fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().len() > MAX_PATH_LENGTH {
        return Err(Error::PathTooLong);
    }
    Ok(())
}

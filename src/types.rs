//! Common types and constants for `ScratchRun`

use std::path::PathBuf;
use std::time::SystemTime;

use arrayvec::ArrayVec;

/// Maximum number of candidate projects per scan
pub const MAX_PROJECTS: usize = 1_000;

/// Maximum path length in characters
pub const MAX_PATH_LENGTH: usize = 255;

/// Default number of projects shown per listing page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fixed-capacity candidate set produced by one scan
pub type ProjectList = ArrayVec<ProjectRecord, MAX_PROJECTS>;

/// Fixed-capacity ranked result of one fuzzy query
pub type MatchList = ArrayVec<ScoredMatch, MAX_PROJECTS>;

/// One discovered project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Display name, equal to the subdirectory's base name
    pub name:        String,
    /// Path to the project directory
    pub path:        PathBuf,
    /// Last modification time of the directory entry
    pub modified_at: SystemTime,
}

/// A candidate paired with its similarity score against one query
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    /// The matched project
    pub project: ProjectRecord,
    /// Similarity score (0.0 to 1.0)
    pub score:   f32,
}

const _: () = {
    assert!(MAX_PROJECTS > 0);
    assert!(MAX_PATH_LENGTH > 0);
    assert!(DEFAULT_PAGE_SIZE > 0);
};

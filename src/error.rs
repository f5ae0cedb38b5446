//! Error types for `ScratchRun`

use arrayvec::ArrayString;
use thiserror::Error;

/// Maximum length of error messages
pub const MAX_ERROR_LENGTH: usize = 256;

/// Custom result type for `ScratchRun` operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for `ScratchRun`
///
/// # Design
/// - String buffers are stack-allocated with a fixed `MAX_ERROR_LENGTH`
/// - Every condition at the engine boundary is recoverable; only a launch
///   failure is fatal
#[derive(Debug, Error)]
pub enum Error {
    /// No project root was configured
    #[error("Error: No project root configured")]
    RootNotSet,

    /// The project root could not be enumerated
    #[error("Error: {0}")]
    Scan(Box<ArrayString<MAX_ERROR_LENGTH>>),

    /// Candidate count exceeded the fixed limit
    #[error("Error: Maximum project count of 1,000 exceeded")]
    ProjectLimitExceeded,

    /// Path length exceeded the maximum limit
    #[error("Error: Path length exceeded 255 characters")]
    PathTooLong,

    /// A scan produced zero candidates where one was required
    #[error("Error: No projects found")]
    NoProjects,

    /// A fuzzy query matched nothing above the score threshold
    #[error("Error: {0}")]
    NoMatch(Box<ArrayString<MAX_ERROR_LENGTH>>),

    /// The command line was used incorrectly
    #[error("Error: {0}")]
    Usage(Box<ArrayString<MAX_ERROR_LENGTH>>),

    /// An entry point could not be located or started
    #[error("Error: {0}")]
    Launch(Box<ArrayString<MAX_ERROR_LENGTH>>),
}

impl Error {
    fn boxed_message(msg: &str) -> Box<ArrayString<MAX_ERROR_LENGTH>> {
        let mut buf = ArrayString::new();
        // Try to write the message, drop it if too long
        let _ = buf.try_push_str(msg);
        Box::new(buf)
    }

    /// Create a new scan error
    pub fn scan(msg: &str) -> Self {
        Self::Scan(Self::boxed_message(msg))
    }

    /// Create a new no-match error for a failed query
    pub fn no_match(query: &str) -> Self {
        Self::NoMatch(Self::boxed_message(&format!("No project matched '{query}'")))
    }

    /// Create a new usage error
    pub fn usage(msg: &str) -> Self {
        Self::Usage(Self::boxed_message(msg))
    }

    /// Create a new launch error
    pub fn launch(msg: &str) -> Self {
        Self::Launch(Self::boxed_message(msg))
    }

    /// Get a user-friendly error message with action items
    #[must_use]
    pub fn user_message(&self) -> ArrayString<MAX_ERROR_LENGTH> {
        let mut msg = ArrayString::new();
        match self {
            Self::RootNotSet => {
                let _ = msg.try_push_str(
                    "Error: No project root configured\nTip: Pass --root or set SCRATCHRUN_ROOT",
                );
            },
            Self::Scan(scan_msg) => {
                let _ = msg.try_push_str(scan_msg);
                let _ = msg.try_push_str("\nTip: Check that the root exists and is readable");
            },
            Self::ProjectLimitExceeded => {
                let _ = msg.try_push_str(
                    "Error: Too many projects (max 1,000)\nTip: Split the root into smaller \
                     directories",
                );
            },
            Self::PathTooLong => {
                let _ = msg.try_push_str(
                    "Error: Path too long (max 255 characters)\nTip: Try moving projects to a \
                     shorter path",
                );
            },
            Self::NoProjects => {
                let _ = msg.try_push_str(
                    "Error: No projects found\nTip: Create a project directory under the root \
                     first",
                );
            },
            Self::NoMatch(match_msg) => {
                let _ = msg.try_push_str(match_msg);
                let _ = msg.try_push_str("\nTip: Try a shorter term, or run 'scratch list'");
            },
            Self::Usage(usage_msg) => {
                let _ = msg.try_push_str(usage_msg);
            },
            Self::Launch(launch_msg) => {
                let _ = msg.try_push_str(launch_msg);
            },
        }
        msg
    }
}

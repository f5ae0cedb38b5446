//! Entry-point launching for resolved projects
//!
//! Thin collaborator around the resolution engine: the engine decides which
//! project wins, this module decides what process that means and reports
//! the child's exit status back for the caller to proxy.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};
use crate::types::ProjectRecord;

/// Entry-point file names probed inside a project directory, in order
pub const ENTRY_POINTS: [&str; 2] = ["run", "run.sh"];

/// A fully resolved launch: program, working directory, forwarded arguments
#[derive(Debug)]
pub struct LaunchPlan {
    /// Program to execute
    pub program: PathBuf,
    /// Working directory for the child process
    pub workdir: PathBuf,
    /// Arguments forwarded verbatim, in caller order
    pub args:    Vec<OsString>,
}

impl LaunchPlan {
    /// Resolve the entry point of a project
    ///
    /// Forwarded arguments are not interpreted here; they travel opaquely
    /// to the launched process.
    ///
    /// # Errors
    /// Returns error if the project directory contains no entry point.
    pub fn resolve(project: &ProjectRecord, args: &[OsString]) -> Result<Self> {
        for entry in ENTRY_POINTS {
            let candidate = project.path.join(entry);
            if candidate.is_file() {
                return Ok(Self {
                    program: candidate,
                    workdir: project.path.clone(),
                    args:    args.to_vec(),
                });
            }
        }

        Err(Error::launch(&format!(
            "No entry point in {} (expected one of: run, run.sh)",
            project.path.display()
        )))
    }
}

/// Spawn a resolved launch plan and wait for it to finish
///
/// # Errors
/// Returns error if the child process cannot be started.
pub fn spawn(plan: &LaunchPlan) -> Result<ExitStatus> {
    Command::new(&plan.program)
        .args(&plan.args)
        .current_dir(&plan.workdir)
        .status()
        .map_err(|e| Error::launch(&format!("Failed to launch {}: {e}", plan.program.display())))
}

#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! `ScratchRun` - find, list, and launch scratch projects.

mod error;
mod launch;
mod page;
mod resolve;
mod scanner;
mod score;
mod types;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use clap_cargo::style::CLAP_STYLING;
use error::{Error, Result};
use types::{DEFAULT_PAGE_SIZE, ProjectList};

/// CLI arguments for `ScratchRun`
#[derive(Parser, Debug)]
#[command(author, version, about, styles = CLAP_STYLING)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Command {
    /// List projects, most recently modified first
    List {
        /// Project root directory
        #[arg(long, env = "SCRATCHRUN_ROOT")]
        root:      Option<PathBuf>,
        /// Page to display (1-indexed; out-of-range values are clamped)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page:      i64,
        /// Projects per page
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Resolve one project and launch its entry point
    Run {
        /// Project name or fuzzy term
        #[arg(required_unless_present = "latest", conflicts_with = "latest")]
        query:  Option<String>,
        /// Launch the most recently modified project
        #[arg(long)]
        latest: bool,
        /// Project root directory
        #[arg(long, env = "SCRATCHRUN_ROOT")]
        root:   Option<PathBuf>,
        /// Arguments forwarded to the project entry point (after --)
        #[arg(last = true)]
        args:   Vec<OsString>,
    },
    /// Print project names for shell-completion suggestions
    #[command(hide = true)]
    Names {
        /// Project root directory
        #[arg(long, env = "SCRATCHRUN_ROOT")]
        root: Option<PathBuf>,
    },
}

/// Scan the root and order the candidates, warning about skipped entries
fn sorted_projects(root: &Path) -> Result<Box<ProjectList>> {
    let report = scanner::scan(root)?;
    if report.skipped > 0 {
        eprintln!("Warning: skipped {} unreadable entries", report.skipped);
    }
    Ok(resolve::sort_recent(&report.projects))
}

/// List projects one page at a time
fn list_projects(root: Option<PathBuf>, page: i64, page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::usage("Page size must be at least 1"));
    }

    // A missing or unreadable root renders as an empty listing; the
    // explanation goes to stderr
    let projects = match scanner::resolve_root(root).and_then(|root| sorted_projects(&root)) {
        Ok(projects) => projects,
        Err(e) => {
            eprintln!("{}", e.user_message());
            Box::new(ProjectList::new())
        },
    };

    let view = page::paginate(&projects, page, page_size);

    if view.total_items == 0 {
        println!("No projects (page {} of {}).", view.current_page, view.total_pages);
        return Ok(());
    }

    println!(
        "Projects, most recent first (page {} of {}, {} total):",
        view.current_page, view.total_pages, view.total_items
    );
    for record in view.items {
        println!("  {}", record.name);
    }

    Ok(())
}

/// Resolve one project, launch its entry point, and report its exit code
fn run_project(
    root: Option<PathBuf>,
    query: Option<String>,
    latest: bool,
    args: &[OsString],
) -> Result<i32> {
    let root = scanner::resolve_root(root)?;
    let projects = sorted_projects(&root)?;
    if projects.is_empty() {
        return Err(Error::NoProjects);
    }

    let project = if latest {
        resolve::latest(&projects).ok_or(Error::NoProjects)?.clone()
    } else {
        let term = query.unwrap_or_default();
        let matches = resolve::find_matches(&projects, &term);
        let Some(best) = matches.first() else {
            return Err(Error::no_match(&term));
        };

        if matches.len() > 1 {
            println!("Matched {} projects:", matches.len());
            println!("Score | Name");
            println!("------|-----");
            for found in &matches {
                println!("{:>5.2} | {}", found.score, found.project.name);
            }
            println!("Launching best match: {}", best.project.name);
        }

        best.project.clone()
    };

    let plan = launch::LaunchPlan::resolve(&project, args)?;
    let status = launch::spawn(&plan)?;

    Ok(status.code().unwrap_or(1))
}

/// Print candidate names for completion, failing soft on any error
fn print_names(root: Option<PathBuf>) {
    let Ok(root) = scanner::resolve_root(root) else {
        return;
    };
    let Ok(report) = scanner::scan(&root) else {
        return;
    };
    for name in resolve::names(&report.projects) {
        println!("{name}");
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::List { root, page, page_size } => list_projects(root, page, page_size).map(|()| 0),
        Command::Run { root, query, latest, args } => run_project(root, query, latest, &args),
        Command::Names { root } => {
            print_names(root);
            Ok(0)
        },
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        },
    }
}

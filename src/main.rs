//! odtquery - query .odt files from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List a document's members (the default action)
//! odtquery document.odt
//!
//! # Verify several documents contain the essential members
//! odtquery --verify a.odt b.odt c.odt
//!
//! # Verify and list in one pass
//! odtquery --verify --list document.odt
//! ```

use clap::Parser;
use odtquery::Actions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Queries .odt files.
#[derive(Parser)]
#[command(name = "odtquery")]
#[command(version)]
#[command(about = "Queries .odt files.")]
struct Cli {
    /// List each .odt file's contents. [default]
    #[arg(long)]
    list: bool,

    /// Verify each .odt file's contents.
    #[arg(long)]
    verify: bool,

    /// .odt files to query
    #[arg(required = true, value_name = "ODT_FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let actions = Actions::resolve(cli.list, cli.verify);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = odtquery::run(&cli.files, actions, &mut out) {
        let _ = writeln!(io::stderr(), "error: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

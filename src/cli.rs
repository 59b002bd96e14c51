//! Command-line interface implementation

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::SyncError;
use crate::index::index_sources;
use crate::project::collect_sprites;
use crate::reimport::apply;
use crate::report::{LogFilter, Report};
use crate::resolver::resolve;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// spritesync - Re-import externally edited master PNGs into a sprite project
#[derive(Parser)]
#[command(name = "spritesync")]
#[command(about = "Re-import externally edited master PNGs into a sprite project")]
#[command(version)]
pub struct Cli {
    /// Directory tree containing the master PNG images
    pub source: PathBuf,

    /// Sprites directory of the destination project
    pub dest: PathBuf,

    /// Report what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not report frames whose source image already matches
    #[arg(long)]
    pub quiet_matches: bool,

    /// Do not warn about frames with no matching source image
    #[arg(long)]
    pub quiet_misses: bool,

    /// Do not warn about sprites excluded for using multiple layers
    #[arg(long)]
    pub quiet_disqualified: bool,

    /// Do not report individual copy operations
    #[arg(long)]
    pub quiet_copies: bool,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let filter = LogFilter {
        quiet_matches: cli.quiet_matches,
        quiet_misses: cli.quiet_misses,
        quiet_disqualified: cli.quiet_disqualified,
        quiet_copies: cli.quiet_copies,
    };
    let mut report = Report::new(filter);
    let result = run_sync(&cli, &mut report);

    // Diagnostics accumulated before a fatal error still get shown.
    for line in report.lines() {
        eprintln!("{line}");
    }
    match result {
        Ok(()) => {
            println!("{}", report.summary(cli.dry_run));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_sync(cli: &Cli, report: &mut Report) -> Result<(), SyncError> {
    let sources = index_sources(&cli.source)?;
    let sprites = collect_sprites(&cli.dest, report)?;
    let instructions = resolve(&sources, &sprites, report)?;
    apply(&instructions, &cli.dest, cli.dry_run, report)
}

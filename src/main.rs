//! spritesync - Command-line tool for re-importing edited master images
//! into a sprite project

use std::process::ExitCode;

use spritesync::cli;

fn main() -> ExitCode {
    cli::run()
}

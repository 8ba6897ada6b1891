//! blah: fetch Git and Mercurial working copies from a single repository URI

use std::process::ExitCode;

fn main() -> ExitCode {
    match blah::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // `{:#}` keeps the whole cause chain on one line.
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

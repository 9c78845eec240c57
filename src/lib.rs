pub mod canvas;
pub mod inspect;
pub mod palette;
pub mod radar;

use anyhow::{Context, Result};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

/// Generate both assets into `out_dir` and return the process exit code.
///
/// When `png_supported` is false nothing is written and the operator is told how
/// to fix the build. Every other failure is reported as `Error: ...`. Progress
/// goes to `log`; a failing `log` never changes the exit code.
pub fn run<W: Write>(out_dir: &Path, png_supported: bool, log: &mut W) -> i32 {
    if !png_supported {
        let _ = writeln!(log, "PNG encoding support is not available in this build.");
        let _ = writeln!(
            log,
            "Rebuild with the `png` feature of the `image` crate enabled, then run again."
        );
        return FAILURE;
    }

    match radar::generate_all(out_dir, log) {
        Ok(()) => {
            let _ = writeln!(log, "✓ All images created successfully!");
            SUCCESS
        }
        Err(err) => {
            let _ = writeln!(log, "Error: {:#}", err);
            FAILURE
        }
    }
}

/// Assets land in `public/`, one level above the directory holding the executable.
pub fn default_output_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Can't locate the running executable")?;
    let exe_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;

    Ok(exe_dir.join("..").join("public"))
}

pub mod git_log;

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Run a git command in the given working directory and return its stdout.
/// On failure, returns an error containing stderr output.
pub fn run_git_stdout(workdir: &Path, args: &[&str]) -> Result<String> {
    tracing::debug!(workdir = %workdir.display(), "git {}", args.join(" "));

    let output = Command::new("git")
        .current_dir(workdir)
        .args(args)
        .output()
        .context("Failed to run git (is it installed and on PATH?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("git {} failed:\n{}", args.join(" "), stderr.trim_end());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

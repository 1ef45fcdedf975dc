use std::path::Path;

use anyhow::Result;

/// List the full hashes of every commit that touched `path`, newest first.
///
/// Runs `git log --pretty=format:%H -- <path>` inside `workdir`.
pub fn file_commits(workdir: &Path, path: &str) -> Result<Vec<String>> {
    let stdout = super::run_git_stdout(workdir, &["log", "--pretty=format:%H", "--", path])?;
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

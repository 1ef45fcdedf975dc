use std::path::Path;

use anyhow::{Context, Result, bail};
use git2::Repository;

use crate::git_commands::git_log;

/// The commits that touched a file, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    commits: Vec<String>,
}

/// One entry of a `Timeline` with its 1-based display position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Revision<'a> {
    pub order: usize,
    pub commit: &'a str,
}

impl Timeline {
    /// Build a timeline from commits already in oldest-first order.
    pub fn new(commits: Vec<String>) -> Self {
        Timeline { commits }
    }

    /// Build a timeline from git's native newest-first listing.
    pub fn from_newest_first(mut commits: Vec<String>) -> Self {
        commits.reverse();
        Timeline::new(commits)
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Look up a commit by its 1-based position.
    pub fn get(&self, order: usize) -> Option<&str> {
        order
            .checked_sub(1)
            .and_then(|i| self.commits.get(i))
            .map(String::as_str)
    }

    /// Iterate revisions in history order, numbered from 1.
    pub fn revisions(&self) -> impl Iterator<Item = Revision<'_>> {
        self.commits.iter().enumerate().map(|(i, commit)| Revision {
            order: i + 1,
            commit,
        })
    }
}

/// Collect the history of `target_file` inside the working copy at `repo_path`.
/// `target_file` is resolved relative to `repo_path`.
///
/// The repository is passed to git as the subprocess working directory; the
/// process's own current directory is left untouched.
pub fn extract(repo_path: &Path, target_file: &str) -> Result<Timeline> {
    let repo = Repository::discover(repo_path)
        .with_context(|| format!("Failed to open repository {}", repo_path.display()))?;
    if repo.is_bare() {
        bail!("Cannot read history in bare repository");
    }

    let commits = git_log::file_commits(repo_path, target_file)?;
    let timeline = Timeline::from_newest_first(commits);
    if timeline.is_empty() {
        tracing::warn!(target_file, "no commits touch the target file");
    } else {
        tracing::info!(
            count = timeline.len(),
            oldest = timeline.get(1),
            target_file,
            "collected file history"
        );
    }

    Ok(timeline)
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

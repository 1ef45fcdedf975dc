use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::{dot, history, report};

/// Load the config at `config_path`, write the history graph, and print the
/// command that renders it.
pub fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let command = generate(&config)?;
    report::write_instructions(
        &mut std::io::stdout().lock(),
        &config.output_path,
        &command,
    )?;
    Ok(())
}

/// Extract the target file's history, write it as DOT to the configured
/// output path, and return the render command for it.
pub fn generate(config: &Config) -> Result<String> {
    let timeline = history::extract(&config.repo_path, &config.target_file)?;
    let graph = dot::render(&timeline);
    report::save(&graph, &config.output_path)?;
    Ok(report::render_command(
        &config.graphviz_path,
        &config.output_path,
    ))
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

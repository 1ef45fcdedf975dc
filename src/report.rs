use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Image file name used in the suggested render command.
pub const OUTPUT_IMAGE: &str = "output.png";

/// Write the DOT source to `path`, replacing any existing content.
pub fn save(graph: &str, path: &Path) -> Result<()> {
    std::fs::write(path, graph)
        .with_context(|| format!("Failed to write graph to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = graph.len(), "wrote graph");
    Ok(())
}

/// Build the shell command that rasterizes `output_path` with Graphviz.
/// Paths are quoted only when the shell would otherwise split or expand them.
pub fn render_command(graphviz_path: &str, output_path: &Path) -> String {
    format!(
        "{} -Tpng {} -o {}",
        shell_escape::escape(Cow::Borrowed(graphviz_path)),
        shell_escape::escape(output_path.to_string_lossy()),
        OUTPUT_IMAGE
    )
}

/// Tell the user where the graph went and how to turn it into an image.
pub fn write_instructions(
    out: &mut impl Write,
    output_path: &Path,
    command: &str,
) -> io::Result<()> {
    writeln!(out, "Graphviz code saved to {}", output_path.display())?;
    writeln!(out, "Run the following command to visualize:")?;
    writeln!(out, "{}", command)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

mod config;
mod dot;
mod git_commands;
mod history;
mod msg;
mod render;
mod report;

#[cfg(test)]
mod test_helpers;

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use colored::control;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-history-graph",
    about = "Visualize the commit history of a file using Graphviz"
)]
struct Cli {
    /// Path to the configuration JSON file
    #[arg(long)]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG=git_history_graph=debug shows each pipeline stage.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("git_history_graph=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if std::env::var_os("NO_COLOR").is_some()
        || std::env::var_os("TERM").is_some_and(|v| v == "dumb")
        || !std::io::stdout().is_terminal()
    {
        control::set_override(false);
    }

    report_outcome(render::run(&cli.config), &mut std::io::stdout().lock());
}

/// Print a failed run to `out` as `Error: <context chain>`.
/// Failures are reported, never signalled: the exit status stays 0.
fn report_outcome(result: anyhow::Result<()>, out: &mut impl Write) {
    if let Err(e) = result {
        let _ = msg::error(out, &format!("{:#}", e));
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

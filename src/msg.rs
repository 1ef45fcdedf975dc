use std::io::{self, Write};

use colored::Colorize;

/// Write an error message prefixed with a red `Error:`.
pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red(), message)
}

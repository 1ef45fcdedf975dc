use anyhow::{Context, anyhow};

use super::report_outcome;

fn outcome_text(result: anyhow::Result<()>) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    report_outcome(result, &mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn success_prints_nothing() {
    assert_eq!(outcome_text(Ok(())), "");
}

#[test]
fn failure_prints_error_prefix_and_full_chain() {
    let result = Err::<(), _>(anyhow!("Missing required config field(s): target_file"))
        .context("Invalid config file cfg.json");

    assert_eq!(
        outcome_text(result),
        "Error: Invalid config file cfg.json: Missing required config field(s): target_file\n"
    );
}

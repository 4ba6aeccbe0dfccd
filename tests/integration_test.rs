use std::fs;
use std::path::Path;
use std::process::Command;
use anyhow::{anyhow, Result};
use tempfile::tempdir;

const BINARY_PATH: &str = env!("CARGO_BIN_EXE_trade-processor");

#[test]
fn test_cli_stores_sample_trades() -> Result<()> {
    let directory = tempdir()?;
    let store_path = directory.path().join("trades.csv");

    let output = Command::new(BINARY_PATH)
        .arg(Path::new("samples").join("trades.txt"))
        .arg(&store_path)
        .output()?;

    assert!(output.status.success());

    let stored = fs::read_to_string(&store_path)?;
    let mut lines = stored.lines();

    assert_eq!(lines.next(), Some("source_currency,destination_currency,lots,price"));
    assert_eq!(lines.next(), Some("EUR,USD,10,1.2"));
    assert_eq!(lines.next(), Some("GBP,USD,20,1.5"));
    assert_eq!(lines.next(), Some("USD,JPY,1,110.25"));
    assert_eq!(lines.next(), None);

    let stderr = String::from_utf8(output.stderr)?;

    assert!(stderr.contains("3 trades processed"));

    Ok(())
}

#[test]
fn test_cli_warns_about_malformed_lines_and_stores_the_rest() -> Result<()> {
    let directory = tempdir()?;
    let store_path = directory.path().join("trades.csv");

    let output = Command::new(BINARY_PATH)
        .arg(Path::new("samples").join("malformed.txt"))
        .arg(&store_path)
        .output()?;

    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;

    for expected_warning in [
        "Line 1 malformed. Only 2 field(s) found.",
        "Trade currencies on line 3 malformed: 'EURUSDX'",
        "Trade amount on line 4 not a valid integer: 'abc'",
        "Trade price on line 5 not a valid decimal: 'not-a-price'",
        "Line 6 malformed. Only 1 field(s) found.",
        "2 trades processed"
    ] {
        assert!(stderr.contains(expected_warning), "missing [{expected_warning}] in:\n{stderr}");
    }

    let stored = fs::read_to_string(&store_path)?;
    let rows: Vec<&str> = stored.lines().skip(1).collect();

    assert_eq!(rows, vec!["GBP,USD,20,1.5", "AUD,NZD,-2,1.0875"]);

    Ok(())
}

#[test]
fn test_cli_appends_batches_to_an_existing_store() -> Result<()> {
    let directory = tempdir()?;
    let store_path = directory.path().join("trades.csv");

    for _ in 0..2 {
        let status = Command::new(BINARY_PATH)
            .arg(Path::new("samples").join("trades.txt"))
            .arg(&store_path)
            .status()?;

        assert!(status.success());
    }

    let stored = fs::read_to_string(&store_path)?;

    assert_eq!(stored.lines().count(), 7);
    assert_eq!(stored.matches("source_currency").count(), 1);

    Ok(())
}

#[test]
fn test_cli_dry_run_reads_stdin_without_a_store() -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(BINARY_PATH)
        .arg("-")
        .stdin(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child.stdin.take().ok_or_else(|| anyhow!("stdin not captured"))?
        .write_all(b"EURUSD,1000000,1.2\nGBPUSD,2000000,1.5")?;

    let output = child.wait_with_output()?;

    assert!(output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("2 trades processed"));

    Ok(())
}

#[test]
fn test_cli_fails_for_missing_input_file() -> Result<()> {
    let directory = tempdir()?;
    let store_path = directory.path().join("trades.csv");

    let output = Command::new(BINARY_PATH)
        .arg("missing.txt")
        .arg(&store_path)
        .output()?;

    assert!(!output.status.success());
    assert!(!store_path.exists());

    Ok(())
}

#[test]
fn test_cli_prints_usage_without_arguments() -> Result<()> {
    let output = Command::new(BINARY_PATH).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.starts_with("Usage:"));

    Ok(())
}

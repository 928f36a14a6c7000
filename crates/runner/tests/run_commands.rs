//! Runner integration test
//!
//! Parses command lines the way the binary does and runs them against the
//! built-in catalogue with a frozen clock, collecting the output lines.

use tally_clock::FixedClock;
use tally_interest::{InterestError, NON_POSITIVE_PRINCIPAL_ALERT};
use tally_runner::{Cli, Outcome, RunnerConfig, RunnerError, run};

fn clock() -> FixedClock {
    FixedClock::at_year(2026).expect("representable year")
}

fn run_args(args: &[&str]) -> (Result<Outcome, RunnerError>, Vec<String>) {
    let _ = env_logger::try_init();

    let cli = Cli::parse(args.iter().copied()).expect("valid command line");
    let config = RunnerConfig::default();
    let mut out: Vec<String> = Vec::new();
    let outcome = run(&cli.command, &config, clock(), &mut out);
    (outcome, out)
}

#[test]
fn test_stock_command() {
    let (outcome, out) = run_args(&["stock"]);
    assert_eq!(outcome.unwrap(), Outcome::Completed);
    assert_eq!(
        out,
        vec![
            "Laptop is In Stock.",
            "Headphones is Out of Stock.",
            "Smartphone is In Stock.",
        ]
    );
}

#[test]
fn test_sales_command() {
    let (outcome, out) = run_args(&["sales"]);
    assert_eq!(outcome.unwrap(), Outcome::Completed);
    assert_eq!(out, vec!["Total sales amount: $27.50"]);
}

#[test]
fn test_all_command_runs_reports_in_sequence() {
    let (outcome, out) = run_args(&["all"]);
    assert_eq!(outcome.unwrap(), Outcome::Completed);

    assert_eq!(out.len(), 3 + 1 + 8);
    assert_eq!(out[0], "Laptop is In Stock.");
    assert_eq!(out[3], "Total sales amount: $27.50");
    assert_eq!(out[4], "Order Receipt");
    assert_eq!(out[10], "Grand Total: $27.50");
}

#[test]
fn test_receipt_with_config_override() {
    let config = RunnerConfig::from_json(
        r#"{ "orders": [
            { "item": "melon", "price": "3.2", "quantity": 2 },
            { "item": "fig", "price": "0.05", "quantity": 7 }
        ] }"#,
    )
    .unwrap();
    let cli = Cli::parse(["receipt"]).unwrap();

    let mut out: Vec<String> = Vec::new();
    run(&cli.command, &config, clock(), &mut out).unwrap();

    assert_eq!(out[2], "melon - $3.20 x 2 = $6.40");
    assert_eq!(out[3], "fig - $0.05 x 7 = $0.35");
    assert_eq!(out[5], "Grand Total: $6.75");
}

#[test]
fn test_interest_command() {
    let (outcome, out) = run_args(&[
        "interest",
        "--principal",
        "1000",
        "--rate",
        "5",
        "--years",
        "2",
    ]);
    assert_eq!(outcome.unwrap(), Outcome::Completed);
    assert_eq!(out[0], "rate_val: 5");
    assert!(out[1].contains("$<mark>1100</mark>"));
    assert!(out[1].contains("<mark>2028</mark>"));
}

#[test]
fn test_interest_command_alerts_on_zero_principal() {
    let (outcome, out) = run_args(&[
        "interest",
        "--principal",
        "0",
        "--rate",
        "5",
        "--years",
        "2",
    ]);
    assert_eq!(
        outcome.unwrap(),
        Outcome::Alerted(vec![NON_POSITIVE_PRINCIPAL_ALERT.to_string()])
    );
    // Only the rate mirror was written
    assert_eq!(out, vec!["rate_val: 5"]);
}

#[test]
fn test_interest_command_rejects_malformed_years() {
    let (outcome, _) = run_args(&[
        "interest",
        "--principal",
        "1000",
        "--rate",
        "5",
        "--years",
        "two",
    ]);
    assert!(matches!(
        outcome,
        Err(RunnerError::Interest(InterestError::InvalidNumber { .. }))
    ));
}

#[test]
fn test_form_command_prints_page() {
    let (outcome, out) = run_args(&["form"]);
    assert_eq!(outcome.unwrap(), Outcome::Completed);
    assert_eq!(out[0], "<!DOCTYPE html>");
    assert!(out.iter().any(|l| l.contains("id=\"rate_val\"")));
}

#[test]
fn test_sales_overflow_is_reported() {
    let config = RunnerConfig::from_json(
        r#"{ "sales": [{ "item": "yacht", "price": "79228162514264337593543950335", "quantity": 2 }] }"#,
    )
    .unwrap();
    let cli = Cli::parse(["sales"]).unwrap();

    let mut out: Vec<String> = Vec::new();
    let err = run(&cli.command, &config, clock(), &mut out).unwrap_err();

    assert!(matches!(
        err,
        RunnerError::Sales(tally_sales::Error::Overflow(ref name)) if name == "yacht"
    ));
    assert!(out.is_empty());
}

#[test]
fn test_receipt_overflow_is_reported() {
    let config = RunnerConfig::from_json(
        r#"{ "orders": [
            { "item": "hull", "price": "50000000000000000000000000000", "quantity": 1 },
            { "item": "mast", "price": "50000000000000000000000000000", "quantity": 1 }
        ] }"#,
    )
    .unwrap();
    let cli = Cli::parse(["receipt"]).unwrap();

    let mut out: Vec<String> = Vec::new();
    let err = run(&cli.command, &config, clock(), &mut out).unwrap_err();

    assert!(matches!(
        err,
        RunnerError::Sales(tally_sales::Error::Overflow(ref name)) if name == "mast"
    ));
    assert!(out.is_empty());
}

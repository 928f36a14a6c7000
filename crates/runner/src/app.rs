//! Runs one command against the configured datasets

use log::info;
use tally_interest::{InterestForm, MemoryForm, render_form_page};
use tally_inventory::check_stock_levels;
use tally_ports::{Clock, FieldId, LineSink};
use tally_sales::{generate_order_receipt, report_total_sales};

use crate::cli::{Command, HELP};
use crate::config::RunnerConfig;
use crate::error::Result;

/// How a command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The form raised blocking alerts instead of producing a result
    Alerted(Vec<String>),
}

pub fn run<C: Clock>(
    command: &Command,
    config: &RunnerConfig,
    clock: C,
    out: &mut impl LineSink,
) -> Result<Outcome> {
    info!("Running {:?}", command);
    match command {
        Command::Stock => {
            check_stock_levels(&config.products, out)?;
        }
        Command::Sales => {
            report_total_sales(&config.sales, out)?;
        }
        Command::Receipt => {
            generate_order_receipt(&config.orders, out)?;
        }
        Command::All => {
            check_stock_levels(&config.products, out)?;
            report_total_sales(&config.sales, out)?;
            generate_order_receipt(&config.orders, out)?;
        }
        Command::Interest {
            principal,
            rate,
            years,
        } => return run_interest(principal, rate, years, clock, out),
        Command::Form => {
            for line in render_form_page().lines() {
                out.write_line(line)?;
            }
        }
        Command::Help => {
            for line in HELP.lines() {
                out.write_line(line)?;
            }
        }
    }
    Ok(Outcome::Completed)
}

/// Fill an in-memory form, fire "rate changed" then "compute requested"
fn run_interest<C: Clock>(
    principal: &str,
    rate: &str,
    years: &str,
    clock: C,
    out: &mut impl LineSink,
) -> Result<Outcome> {
    let calculator = InterestForm::new(clock);
    let mut form = MemoryForm::with_inputs(principal, rate, years);

    let mirrored = calculator.on_rate_changed(&mut form);
    out.write_line(&format!("rate_val: {}", mirrored))?;

    if calculator.on_compute_requested(&mut form)?.is_none() {
        return Ok(Outcome::Alerted(form.alerts().to_vec()));
    }
    if let Some(html) = form.html(FieldId::Result) {
        out.write_line(html)?;
    }
    Ok(Outcome::Completed)
}

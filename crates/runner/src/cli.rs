//! Argument parsing for the `tally` binary

use std::path::PathBuf;

use crate::error::{Result, RunnerError};

pub const HELP: &str = r#"Tally - stock, sales and interest reports

USAGE:
    tally [OPTIONS] <COMMAND>

COMMANDS:
    stock                   Classify every product as In Stock / Out of Stock
    sales                   Print the total sales amount
    receipt                 Print the order receipt
    all                     stock, sales and receipt in sequence
    interest --principal <P> --rate <R> --years <Y>
                            Compute simple interest and print the result markup
    form                    Print the interest calculator's HTML form

OPTIONS:
    --config <PATH>         Load datasets from a JSON file
    --help                  Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Log level filter

EXAMPLES:
    tally receipt
    tally --config shop.json stock
    tally interest --principal 1000 --rate 5 --years 2
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stock,
    Sales,
    Receipt,
    All,
    /// Raw field text, exactly as a user would type it into the form
    Interest {
        principal: String,
        rate: String,
        years: String,
    },
    Form,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub config: Option<PathBuf>,
    pub command: Command,
}

impl Cli {
    /// Parse arguments, program name excluded
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut config = None;
        let mut command = None;
        let mut principal = None;
        let mut rate = None;
        let mut years = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => {
                    return Ok(Self {
                        config,
                        command: Command::Help,
                    });
                }
                "--config" | "-c" => config = Some(PathBuf::from(value_of(&args, &mut i)?)),
                "--principal" => principal = Some(value_of(&args, &mut i)?),
                "--rate" => rate = Some(value_of(&args, &mut i)?),
                "--years" => years = Some(value_of(&args, &mut i)?),
                name if command.is_none() && !name.starts_with('-') => {
                    command = Some(name.to_string());
                }
                arg => return Err(RunnerError::Usage(format!("Unknown argument: {}", arg))),
            }
            i += 1;
        }

        let command = match command.as_deref() {
            Some("stock") => Command::Stock,
            Some("sales") => Command::Sales,
            Some("receipt") => Command::Receipt,
            Some("all") => Command::All,
            Some("form") => Command::Form,
            Some("interest") => Command::Interest {
                principal: required("--principal", principal)?,
                rate: required("--rate", rate)?,
                years: required("--years", years)?,
            },
            Some(other) => return Err(RunnerError::Usage(format!("Unknown command: {}", other))),
            None => return Err(RunnerError::Usage("No command given".to_string())),
        };

        Ok(Self { config, command })
    }
}

fn value_of(args: &[String], i: &mut usize) -> Result<String> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| RunnerError::Usage(format!("{} requires a value", flag)))
}

fn required(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| RunnerError::Usage(format!("interest requires {}", flag)))
}

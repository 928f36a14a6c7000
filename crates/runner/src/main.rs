use log::info;
use tally_clock::SystemClock;
use tally_runner::{Cli, Command, ConsoleSink, HELP, Outcome, RunnerConfig, RunnerError, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::parse(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(RunnerError::Usage(msg)) => {
            eprintln!("Error: {}", msg);
            eprint!("{}", HELP);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    if cli.command == Command::Help {
        eprint!("{}", HELP);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            RunnerConfig::from_file(path)?
        }
        None => RunnerConfig::default(),
    };

    let mut out = ConsoleSink::stdout();
    match run(&cli.command, &config, SystemClock::new(), &mut out) {
        Ok(Outcome::Completed) => Ok(()),
        Ok(Outcome::Alerted(alerts)) => {
            for alert in alerts {
                eprintln!("alert: {}", alert);
            }
            std::process::exit(2);
        }
        Err(RunnerError::Interest(err)) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

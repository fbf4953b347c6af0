use std::io;
use std::process::ExitCode;

use clap::{App, Arg};
use tracing::{Level, error, info};

use weekly_payroll::config::{ConfigLoader, PayrollConfig};
use weekly_payroll::console::{Console, OutputFormat};

fn main() -> ExitCode {
    let matches = App::new("weekly-payroll")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes one employee's weekly pay with overtime, night and holiday premiums")
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .value_name("FILE")
                .takes_value(true)
                .help("YAML file with daily_wage, regular_hours and workdays"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print generated payroll as JSON instead of a table"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .help("Log calculation details to stderr"),
        )
        .get_matches();

    let level = if matches.is_present("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    let config = match matches.value_of("config") {
        Some(path) => match ConfigLoader::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Could not load configuration");
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => PayrollConfig::default(),
    };
    info!(
        daily_wage = %config.daily_wage,
        regular_hours = %config.regular_hours,
        workdays = config.workdays,
        "Starting payroll session"
    );

    let format = if matches.is_present("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config).with_format(format);
    if let Err(e) = console.run() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

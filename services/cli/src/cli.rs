use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use underwriting::{DecisionEngine, LoanRequest, PersonalCode};

use crate::config::AppConfig;
use crate::demo::{run_demo, DemoArgs};
use crate::error::AppError;
use crate::infra::RegistryFormatCheck;
use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "underwriting-cli",
    about = "Evaluate loan applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide a single application
    Decide(DecideArgs),
    /// Run a canned set of applicants through the engine
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant's personal ID code (eleven digits)
    #[arg(long)]
    code: String,
    /// Requested loan amount in euros
    #[arg(long)]
    amount: u32,
    /// Requested repayment period in months
    #[arg(long)]
    period: u32,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    today: Option<NaiveDate>,
    /// Emit the decision as JSON instead of a summary line
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(
        max_amount = config.policy.max_amount,
        max_period = config.policy.max_period_months,
        "configuration loaded"
    );

    match cli.command {
        Command::Decide(args) => run_decide(args, config),
        Command::Demo(args) => run_demo(args, config),
    }
}

fn run_decide(args: DecideArgs, config: AppConfig) -> Result<(), AppError> {
    let engine = DecisionEngine::new(config.policy, RegistryFormatCheck);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let request = LoanRequest::new(PersonalCode(args.code), args.amount, args.period);

    let decision = engine.decide(&request, today);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}", decision.summary());
    }

    Ok(())
}

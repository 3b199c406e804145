use chrono::{Local, NaiveDate};
use clap::Args;
use underwriting::{DecisionEngine, LoanRequest, PersonalCode};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::infra::RegistryFormatCheck;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    today: Option<NaiveDate>,
}

/// Applicants chosen to walk every branch of the engine: the three credit
/// tiers, a debtor, both age gates, and a code the registry check rejects.
const APPLICANTS: [(&str, &str, u32, u32); 7] = [
    ("Top tier, capped at the maximum", "38506018000", 10_000, 24),
    ("Mid tier at the requested period", "48506015800", 4000, 36),
    ("Low tier, period walked forward", "39007023000", 2500, 12),
    ("Applicant in active debt", "38506011200", 4000, 36),
    ("Underage applicant", "51001014500", 2500, 12),
    ("Past the age ceiling", "34501017500", 5000, 24),
    ("Code the registry rejects", "123", 4000, 36),
];

pub(crate) fn run_demo(args: DemoArgs, config: AppConfig) -> Result<(), AppError> {
    let engine = DecisionEngine::new(config.policy, RegistryFormatCheck);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Loan decision demo, evaluated as of {today}");
    for (label, code, amount, period) in APPLICANTS {
        let request = LoanRequest::new(PersonalCode(code.to_string()), amount, period);
        let decision = engine.decide(&request, today);
        println!("- {label}");
        println!("    {code} requesting {amount} EUR over {period} months");
        println!("    -> {}", decision.summary());
    }

    Ok(())
}

mod cli;
mod config;
mod demo;
mod error;
mod infra;
mod telemetry;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

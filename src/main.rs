use calc_smoke::utils::logger;
use calc_smoke::{CliConfig, SmokeRunner, StdCalculator};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let runner = SmokeRunner::new(StdCalculator);
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    ExitCode::from(runner.report(&mut out, &mut err))
}

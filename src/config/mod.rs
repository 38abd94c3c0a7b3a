use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-smoke")]
#[command(version)]
#[command(about = "Smoke tests for the calculator's add and subtract")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

use clap::Parser;
use cryptoquote::cli::Cli;
use cryptoquote::config::Config;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cq: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) if e.is_missing() => {
            eprintln!("Warning: {}", e);
            eprintln!("Using default configuration");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    // Initialize telemetry
    cryptoquote::telemetry::init_telemetry(&config.telemetry, cli.command.verbose())?;

    cli.command.execute(&config).await
}

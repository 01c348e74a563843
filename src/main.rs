use anyhow::Result;
use clap::Parser;
use landmark_guide::cli;
use landmark_guide::generator::workflow::launch;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config()?;
    init_logging(config.verbose);

    let request = args.into_request()?;
    match launch(&config, request).await {
        Ok(answer) => {
            println!("{}", answer);
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(1);
        }
    }
}

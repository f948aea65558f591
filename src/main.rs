//! cf-apps - Main entry point

use clap::Parser;
use log::{debug, info};

use cf_apps::{run_report, CfClient, Cli, Presenter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting cf-apps v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: base_url={}, concurrency={:?}, timeout={:?}",
        cli.base_url, cli.concurrency, cli.timeout
    );

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> cf_apps::Result<()> {
    let client = CfClient::new(cli.config()?);
    let options = cli.report_options();

    let mut presenter = Presenter::new(std::io::stdout());
    let summary = run_report(&client, &options, &mut presenter).await?;

    info!(
        "Completed successfully: {} spaces, {} started apps, {} instances",
        summary.spaces, summary.started_apps, summary.instances
    );
    Ok(())
}

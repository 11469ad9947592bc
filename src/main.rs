use anyhow::Result;
use clap::Parser;
use postgraph::api::ApiClient;
use postgraph::ingest::build_graph;
use postgraph::verify::Verifier;
use postgraph::Config;

#[derive(Parser, Debug)]
#[command(name = "postgraph")]
#[command(about = "Build a user/post entity graph from a REST API and verify it")]
struct Args {
    /// Override the configured API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Build the graph but skip verification against the source
    #[arg(long)]
    skip_verify: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config carries the default log level; RUST_LOG still wins
    let mut config = Config::load()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.log_level.clone()),
    )
    .init();

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }

    log::info!("Starting postgraph v{}", env!("CARGO_PKG_VERSION"));
    log::info!("API base URL: {}", config.api.base_url);

    let client = ApiClient::new(config.base_url()?, config.request_timeout());

    let graph = build_graph(&client).await?;

    if args.skip_verify {
        log::info!("Verification skipped");
        return Ok(());
    }

    let verifier = Verifier::fetch(&client).await?;
    let report = verifier.check(&graph)?;

    log::info!(
        "GREAT SUCCESS: all checks passed ({} entities, {} relationships)",
        report.entities_checked,
        report.relationships_checked
    );

    Ok(())
}

use anyhow::Context as _;
use clap::Parser;
use loadcast_config::LoadcastConfig;
use loadcast_server::{cli, context, schema, server};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("loadcast error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        cli::Commands::Schema => schema::print(),
        cli::Commands::Serve(args) => {
            let mut config =
                LoadcastConfig::load_with_dotenv().context("failed to load configuration")?;
            args.apply(&mut config);
            let ctx = context::AppContext::init(config);
            server::run(ctx).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LOADCAST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rebuttal::{ClientSettings, Container, ContainerConfig, RequestConfig, Stance};

mod cli;

use cli::Commands;

#[derive(Parser)]
#[command(name = "rebuttal")]
#[command(author, version, about = "Debate partner that rebuts your claims", long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Debate topic added to the instructions
    #[arg(short, long, global = true)]
    topic: Option<String>,

    /// Your side of the topic: for or against
    #[arg(short, long, global = true, default_value = "for", value_parser = Stance::parse)]
    stance: Stance,

    /// Keep answers to at most 3 sentences
    #[arg(short, long, global = true)]
    concise: bool,

    /// Answer from an offline mock instead of the completion endpoint
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = ClientSettings::from_env();
    debug!("Loaded settings: {:?}", settings);
    if settings.api_key().is_none() && !cli.mock {
        warn!("OPENAI_API_KEY is not set; requests will fail until it is configured");
    }

    let container = Container::new(ContainerConfig {
        settings,
        mock_transport: cli.mock,
    });
    info!(
        "Using model {}{}",
        container.model(),
        if container.is_mock() { " (mock)" } else { "" }
    );

    let mut request_config = RequestConfig::new()
        .with_stance(cli.stance)
        .with_concise(cli.concise);
    if let Some(topic) = cli.topic {
        request_config = request_config.with_topic(topic);
    }

    let session = container.session(request_config);

    match cli.command {
        Commands::Chat => cli::run_chat(session).await?,
        Commands::Ask { message } => cli::run_ask(session, &message).await?,
    }

    Ok(())
}

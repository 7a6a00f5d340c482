//! statechain-loader — command-line entry point
//!
//! Uses the statechain-sdk RemoteClient, or an EmbeddedClient with
//! `--embedded`.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use statechain_cli::{
    generate, AssumeNo, AssumeYes, Cli, Confirm, GenerationReport, LoaderConfig, LoaderResult,
    PromptMode, StdinPrompt, Target,
};
use statechain_sdk::{EmbeddedClient, GraphClient, RemoteClient};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = match Cli::parse().into_config() {
        Ok(config) => run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: LoaderConfig) -> LoaderResult<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut prompt: Box<dyn Confirm> = match config.prompt {
        PromptMode::Ask => Box::new(StdinPrompt::stdin()),
        PromptMode::AssumeYes => Box::new(AssumeYes),
        PromptMode::AssumeNo => Box::new(AssumeNo),
    };

    let client: Box<dyn GraphClient> = match &config.target {
        Target::Remote { url, user, password } => {
            tracing::info!(url = %url, "writing to remote server");
            Box::new(RemoteClient::new(url).with_credentials(user.as_str(), password.as_str()))
        }
        Target::Embedded => {
            tracing::info!("writing to in-process store");
            Box::new(EmbeddedClient::new())
        }
    };

    let mut stdout = std::io::stdout();
    let report: GenerationReport = generate(
        client.as_ref(),
        prompt.as_mut(),
        &mut rng,
        &config.params,
        &mut stdout,
    )
    .await?;

    println!("{}", report);
    Ok(())
}

use clap::Parser;
use spirit::{DungeonGuide, GeminiConfig};
use std::{process::ExitCode, time::Duration};
use tokio::io::BufReader;
use tracing::error;
use trial::{Conversation, init_logging, run_chat};

#[derive(Parser)]
#[command(author, version, about = "Talk to the ancient spirit of the Trial Dungeon")]
struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model used when no endpoint is given
    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-pro")]
    model: String,

    /// Full generateContent URL, overriding the model
    #[arg(long, env = "GEMINI_ENDPOINT")]
    endpoint: Option<String>,

    /// Seconds to wait for the spirit before giving up
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Turns of history sent with each message
    #[arg(long, default_value_t = 20)]
    max_turns: usize,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging("warn");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Chat is unavailable: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let endpoint = cli
        .endpoint
        .unwrap_or_else(|| GeminiConfig::endpoint_for_model(&cli.model));
    let config = GeminiConfig::new(cli.api_key)
        .with_endpoint(endpoint)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let guide = DungeonGuide::new(config)?;

    let mut conversation = Conversation::new(cli.max_turns);
    let stdin = BufReader::new(tokio::io::stdin());
    run_chat(&guide, &mut conversation, stdin, tokio::io::stdout()).await
}

//! Binary for the crypto-news digest bot.

use anyhow::Result;
use clap::{Parser, Subcommand};
use digest_bot::{run_bot, BotConfig};

#[derive(Parser)]
#[command(name = "digest-bot")]
#[command(about = "Crypto news digest bot for Telegram", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
    }
}

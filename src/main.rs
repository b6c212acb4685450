// src/main.rs
// folio - portfolio site server, static builder and chat assistant

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use folio::config::{EnvConfig, Settings};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = EnvConfig::from_env();

    // Subscriber goes in before the config file is read so its warnings show
    let subscriber = FmtSubscriber::builder()
        .with_max_level(env.tracing_level())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut settings = Settings::resolve(env);

    match cli.command {
        None => {
            cli::run_server(&settings).await?;
        }
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                settings.host = host;
            }
            if let Some(port) = port {
                settings.port = port;
            }
            cli::run_server(&settings).await?;
        }
        Some(Commands::Build { out }) => {
            if let Some(out) = out {
                settings.out_dir = out;
            }
            cli::run_build(&settings)?;
        }
        Some(Commands::Ask { query }) => {
            cli::run_ask(&query)?;
        }
        Some(Commands::Chat) => {
            cli::run_chat(settings.chat_delay).await?;
        }
    }

    Ok(())
}

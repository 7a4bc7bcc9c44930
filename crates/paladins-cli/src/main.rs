/*
[INPUT]:  CLI arguments, YAML configuration file, PALADINS_* environment variables
[OUTPUT]: Paladins API results printed as JSON or exported to a file
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paladins_api::{CallOptions, PaladinsClient, UrlArgs};
use paladins_cli::{CliConfig, export_champions};

#[derive(Parser, Debug)]
#[command(name = "paladins", version, about = "Paladins API command line client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or reuse a session and report its state
    Session,
    /// Show developer usage limits for today
    DataUsage,
    /// Look up a player by name or id
    Player { player: String },
    /// Call any method with positional arguments
    Call {
        method: String,
        #[arg(long)]
        platform: Option<u32>,
        #[arg(long)]
        player: Option<String>,
        #[arg(long)]
        champion: Option<u32>,
        #[arg(long)]
        language: Option<u32>,
        #[arg(long = "match")]
        match_id: Option<u64>,
        #[arg(long)]
        queue: Option<u32>,
        #[arg(long)]
        tier: Option<u32>,
        #[arg(long)]
        season: Option<u32>,
    },
    /// Write `Name = id` lines for every champion
    ExportChampions {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_deref())?;
    let client = PaladinsClient::with_config(config.client_config()?)
        .context("create paladins client")?;
    info!(base_url = client.base_url(), "client ready");

    match args.command {
        Command::Session => {
            client.ensure_session().await.context("ensure session")?;
            let session = client
                .sessions()
                .store()
                .current()
                .context("session missing after creation")?;
            println!(
                "session active (created {}, stored at {})",
                session.created_at,
                client.sessions().store().path().display()
            );
        }
        Command::DataUsage => {
            let usage = client.get_data_usage().await.context("get data usage")?;
            print_json(&usage)?;
        }
        Command::Player { player } => {
            let found = client.get_player(&player).await.context("get player")?;
            print_json(&found)?;
        }
        Command::Call {
            method,
            platform,
            player,
            champion,
            language,
            match_id,
            queue,
            tier,
            season,
        } => {
            let mut url_args = UrlArgs::new();
            if let Some(v) = platform {
                url_args = url_args.platform(v);
            }
            if let Some(v) = player {
                url_args = url_args.player(v);
            }
            if let Some(v) = champion {
                url_args = url_args.champion(v);
            }
            if let Some(v) = language {
                url_args = url_args.language(v);
            }
            if let Some(v) = match_id {
                url_args = url_args.match_id(v);
            }
            if let Some(v) = queue {
                url_args = url_args.queue(v);
            }
            if let Some(v) = tier {
                url_args = url_args.tier(v);
            }
            if let Some(v) = season {
                url_args = url_args.season(v);
            }

            let body = client
                .call_with(&method, &url_args, CallOptions::raw())
                .await
                .with_context(|| format!("call {method}"))?;
            print_json(&body)?;
        }
        Command::ExportChampions { output } => {
            let rendered = export_champions(&client, output.as_deref()).await?;
            if output.is_none() {
                print!("{rendered}");
            }
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => CliConfig::from_file(path).context("load config")?,
        None => CliConfig::default(),
    };
    Ok(config.with_env())
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("encode output")?
    );
    Ok(())
}

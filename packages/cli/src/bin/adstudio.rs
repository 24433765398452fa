use adstudio_cli::commands::{run_submit, run_tui};
use adstudio_cli::logging::{init_tracing, LogTarget};
use adstudio_config::Config;
use clap::{Parser, Subcommand};
use colored::*;
use std::process;

#[derive(Parser)]
#[command(name = "adstudio")]
#[command(about = "AdStudio - campaign brief editor with ad previews")]
#[command(version)]
struct Cli {
    /// Recommendation service base URL (overrides ADSTUDIO_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Drop responses to submits superseded by a newer one
    #[arg(long, global = true)]
    discard_stale: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the terminal editor (default)
    Tui {
        /// Tick rate in milliseconds
        #[arg(long)]
        tick_rate: Option<u64>,
    },
    /// Send the default brief once and print the recommendation
    Submit,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = handle_command(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if cli.discard_stale {
        config.discard_stale_responses = true;
    }

    match cli.command.unwrap_or(Commands::Tui { tick_rate: None }) {
        Commands::Tui { tick_rate } => {
            if let Some(tick_rate) = tick_rate.filter(|t| *t > 0) {
                config.tick_rate_ms = tick_rate;
            }
            init_tracing(&LogTarget::for_tui(config.log_file.as_deref()))?;
            run_tui(&config).await
        }
        Commands::Submit => {
            init_tracing(&LogTarget::Stderr)?;
            println!("{}", "Generating recommendation...".green().bold());
            let rendered = run_submit(&config).await?;
            println!("{}", rendered);
            Ok(())
        }
    }
}

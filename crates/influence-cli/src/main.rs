mod guide;
mod submit;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "influence-cli")]
#[command(about = "Public sphere influence questionnaire")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Record every sample in a responses file, relay each one, and export the CSV
    Submit {
        /// YAML file with a `context` section and a `samples` list
        file: PathBuf,

        /// Spreadsheet webhook to relay samples to (overrides INFLUENCE_WEBHOOK_URL)
        #[arg(long)]
        webhook: Option<String>,

        /// Where to write the CSV export (overrides INFLUENCE_EXPORT_PATH)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Record and export only; do not contact any webhook
        #[arg(long, conflicts_with = "webhook")]
        no_relay: bool,
    },
    /// Check a responses file against the questionnaire constraints without recording it
    Validate {
        /// YAML file with a `context` section and a `samples` list
        file: PathBuf,
    },
    /// Print the questionnaire sections and prompts
    Guide,
}

impl Commands {
    /// Only `submit` reads the environment configuration; the other commands
    /// work even when it is malformed.
    fn needs_config(&self) -> bool {
        matches!(self, Commands::Submit { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.command {
        Some(command) if command.needs_config() => Some(influence_core::load_app_config()?),
        _ => None,
    };
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Submit {
            file,
            webhook,
            out,
            no_relay,
        }) => {
            let config = match config {
                Some(config) => config,
                None => influence_core::load_app_config()?,
            };
            submit::run_submit(
                &config,
                &file,
                webhook.as_deref(),
                out.as_deref(),
                no_relay,
            )
            .await?;
        }
        Some(Commands::Validate { file }) => submit::run_validate(&file)?,
        Some(Commands::Guide) | None => {
            let mut text = String::new();
            guide::render_guide(&mut text)?;
            print!("{text}");
        }
    }

    Ok(())
}

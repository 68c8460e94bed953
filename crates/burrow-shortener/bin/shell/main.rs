mod cli;
mod command;

use crate::cli::{GeneratorArg, LogFormat, CLI};
use crate::command::{execute, Command};
use anyhow::Context;
use burrow_core::Shortener;
use burrow_generator::{RandomGenerator, SeqGenerator};
use burrow_shortener::{ShortenerService, ShortenerSettings};
use burrow_storage::InMemoryRepository;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    init_tracing(config.log_format);

    info!(
        generator = %config.generator,
        extension_length = %config.extension_length,
        max_attempts = config.max_attempts,
        "starting burrow shell"
    );

    let settings = ShortenerSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let base_url = config.base_url.as_deref();

    match config.generator {
        GeneratorArg::Random => {
            let generator = RandomGenerator::builder()
                .length(config.extension_length)
                .build();
            let service =
                ShortenerService::with_settings(InMemoryRepository::new(), generator, settings);
            run_shell(service, base_url).await
        }
        GeneratorArg::Seq => {
            let generator = SeqGenerator::with_prefix(config.seq_prefix.clone());
            let service =
                ShortenerService::with_settings(InMemoryRepository::new(), generator, settings);
            run_shell(service, base_url).await
        }
    }
}

/// Logs go to stderr so that stdout carries only command output.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }
}

async fn run_shell<S: Shortener>(shortener: S, base_url: Option<&str>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read command from stdin")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match Command::parse_line(line) {
            Ok(command) => command,
            Err(e) => {
                // Covers `help` as well as malformed input.
                println!("{}", e.render());
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }

        debug!(?command, "executing command");
        println!("{}", execute(&shortener, command, base_url).await);
    }

    info!("shell closed");
    Ok(())
}

use burrow_core::{Extension, ShortenParams, Shortener};
use clap::Parser;

/// One line of shell input.
#[derive(Debug, PartialEq, Eq, Parser)]
#[command(name = "burrow", no_binary_name = true)]
pub enum Command {
    /// Shorten a URL, optionally under a custom extension.
    Create {
        long_url: String,
        extension: Option<String>,
    },
    /// Print the long URL for an extension and count the access.
    Resolve { extension: String },
    /// Print the long URL and access count for an extension.
    Stats { extension: String },
    /// Remove an extension.
    Delete { extension: String },
    /// Leave the shell.
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(line.split_whitespace())
    }
}

/// Runs a command and renders its outcome as one line of output.
///
/// `Quit` is handled by the caller and renders nothing.
pub async fn execute<S: Shortener>(
    shortener: &S,
    command: Command,
    base_url: Option<&str>,
) -> String {
    let outcome = match command {
        Command::Create {
            long_url,
            extension,
        } => {
            let mut params = ShortenParams::new(long_url);
            if let Some(extension) = extension {
                params = params.with_extension(extension);
            }
            shortener.create(params).await.map(|ext| match base_url {
                Some(base_url) => ext.to_url(base_url),
                None => ext.to_string(),
            })
        }
        Command::Resolve { extension } => shortener.resolve(&Extension::new(extension)).await,
        Command::Stats { extension } => shortener
            .stats(&Extension::new(extension))
            .await
            .map(|record| format!("{} {}", record.long_url, record.access_count)),
        Command::Delete { extension } => shortener
            .delete(&Extension::new(extension))
            .await
            .map(|()| "deleted".to_string()),
        Command::Quit => return String::new(),
    };

    outcome.unwrap_or_else(|e| format!("error: {e}"))
}

//! Command-line shell for the shopping list.
//!
//! Reads one command per line from stdin; every accepted command re-renders
//! the list to stdout. Logs and errors go to stderr.

use anyhow::Context;
use shopping_list::command::{parse_command, Command, HELP};
use shopping_list::{AppConfig, AppError, ShoppingListApp, StdoutSurface};
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut app = ShoppingListApp::from_config(&config, StdoutSurface::new(io::stdout()));
    app.start().await?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(error) => {
                eprintln!("error: {error}");
                continue;
            },
        };

        match command {
            Command::Event(event) => match app.dispatch(event).await {
                Ok(()) => {},
                Err(AppError::Rejected(error)) => eprintln!("error: {error}"),
                Err(error @ AppError::Display(_)) => return Err(error.into()),
            },
            Command::List => app.refresh().await?,
            Command::Dump => {
                let state = app.snapshot().await;
                println!("{}", serde_json::to_string_pretty(&state)?);
            },
            Command::Help => eprintln!("{HELP}"),
            Command::Quit => break,
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}

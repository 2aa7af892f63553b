use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use todo_app::command::{self, Command, CommandError};
use todo_app::{render, AppState, Config, Driver, InFlight, Msg, UreqTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level().as_str())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let driver = Driver::new(config.client(), UreqTransport::new());
    info!(base_url = driver.client().base_url(), "starting");

    // First frame is the loading indicator; the list replaces it once fetched.
    let mut in_flight = InFlight::new();
    let mut state = driver.apply(AppState::default(), Msg::Mounted, &mut in_flight);
    let mut shown = state.view_model();
    println!("{}\n", render(&shown));
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let msgs = match command::parse(&line).and_then(|command| match command {
                    Command::Quit => Ok(None),
                    Command::Help => {
                        println!("{}", command::HELP);
                        Ok(Some(Vec::new()))
                    }
                    command => command.into_msgs(&state).map(Some),
                }) {
                    Ok(Some(msgs)) => msgs,
                    Ok(None) => break,
                    Err(CommandError::Empty) => Vec::new(),
                    Err(err) => {
                        println!("{err}");
                        Vec::new()
                    }
                };
                for msg in msgs {
                    state = driver.apply(state, msg, &mut in_flight);
                }
            }
            Some(msg) = in_flight.next(), if !in_flight.is_empty() => {
                state = driver.apply(state, msg, &mut in_flight);
            }
        }

        let view = state.view_model();
        if view != shown {
            println!("\n{}\n", render(&view));
            shown = view;
        }
        prompt()?;
    }
    Ok(())
}

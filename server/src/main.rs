mod command;
mod game_service;
mod game_store;
mod server_config;

use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use snake_boost_common::games::{EntropySeedSource, LogEventSink};
use snake_boost_common::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};

use command::{Command, USAGE, parse_command};
use game_service::GameService;
use game_store::GameStore;
use server_config::{DEFAULT_CONFIG_FILE_NAME, ServerConfig, get_config_manager};

#[derive(Parser)]
#[command(name = "snake_boost_server")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn print_yaml<T: Serialize>(value: &T) {
    match serde_yaml_ng::to_string(value) {
        Ok(text) => print!("{}", text),
        Err(e) => println!("error: failed to format output: {}", e),
    }
}

async fn execute(service: &GameService<LogEventSink>, config: &ServerConfig, command: Command) {
    match command {
        Command::Start { player, size } => {
            let (width, height) = size.unwrap_or((config.default_width, config.default_height));
            match service.start_game(&player, width, height).await {
                Ok(meta) => print_yaml(&meta),
                Err(e) => println!("error: {}", e),
            }
        }
        Command::Move { player, direction } => match service.move_snake(&player, direction).await {
            Ok(outcome) => println!(
                "alive: {}, head: ({}, {}), ate_apple: {}",
                outcome.alive, outcome.new_head.x, outcome.new_head.y, outcome.ate_apple
            ),
            Err(e) => println!("error: {}", e),
        },
        Command::Meta { player } => print_yaml(&service.get_game_meta(&player).await),
        Command::Body { player } => print_yaml(&service.get_body(&player).await),
        Command::Calculate { left, op, right } => match service.calculate(left, right, op) {
            Ok(result) => println!("{}", result),
            Err(e) => println!("error: {}", e),
        },
        Command::Boost { player, left, op, right } => {
            match service.calculate_and_boost(&player, left, right, op).await {
                Ok(result) => println!("{}", result),
                Err(e) => println!("error: {}", e),
            }
        }
        Command::Quit => {}
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(&args.config).get_config()?;

    let prefix = match (&config.log_prefix, args.use_log_prefix) {
        (Some(prefix), _) => Some(prefix.clone()),
        (None, true) => Some("Server".to_string()),
        (None, false) => None,
    };
    logger::init_logger(prefix);

    let service = GameService::new(
        GameStore::new(),
        Arc::new(EntropySeedSource::new()),
        LogEventSink::with_enabled(config.echo_events),
    );

    log!(
        "Snake boost server ready, default board {}x{}",
        config.default_width,
        config.default_height
    );
    println!("{}", USAGE);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                log!("Shutdown signal received");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => execute(&service, &config, command).await,
            Err(e) => println!("error: {}", e),
        }
    }

    log!(
        "Server shut down gracefully, {} player records",
        service.player_count().await
    );

    Ok(())
}

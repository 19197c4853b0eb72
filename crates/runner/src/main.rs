use foresight_core::{Phase, SessionView};
use foresight_runner::{Command, GameBootstrap, GameConfig};
use foresight_scoring::ScoringEngine;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

fn print_help() {
    eprintln!(
        r#"Foresight - pick the instrument you think will outperform

USAGE:
    foresight [OPTIONS]

OPTIONS:
    --config <PATH>     Load game configuration from JSON file
    --help              Print this help message

COMMANDS (stdin, one per line):
    confirm             Start the selection window
    select <KEY>        Commit to an instrument while thinking
    focus <KEY>         Highlight an instrument
    restart             Back to analysis, dropping the current cycle
    quit                Exit

Each view change is printed to stdout as one JSON line.

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info, logs go to stderr)

EXAMPLES:
    # Run with defaults
    foresight

    # Run with config file
    foresight --config game.json
"#
    );
}

/// Print every published view, plus a summary line when a cycle ends
async fn print_views(mut views: watch::Receiver<SessionView>) {
    let mut last_phase = None;
    loop {
        let view = views.borrow_and_update().clone();
        match serde_json::to_string(&view) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to encode view: {}", e),
        }

        if view.phase == Phase::Result && last_phase != Some(Phase::Result) {
            log_result(&view);
        }
        last_phase = Some(view.phase);

        if views.changed().await.is_err() {
            break;
        }
    }
}

fn log_result(view: &SessionView) {
    let mean = ScoringEngine::mean_performance(&view.scores);
    match view.selected_score() {
        Some(record) => log::info!(
            "[RESULT] {} finished #{} of {} at {}% (field mean {})",
            record.key,
            record.rank,
            view.scores.len(),
            record.change_pct,
            mean
        ),
        None => log::info!(
            "[RESULT] {} instruments ranked (field mean {})",
            view.scores.len(),
            mean
        ),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            GameConfig::from_file(&path)?
        }
        None => {
            log::info!("Using default configuration");
            GameConfig::default()
        }
    };
    log::info!(
        "Instruments: {}",
        config
            .feed
            .instruments
            .iter()
            .map(|i| i.key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let game = GameBootstrap::with_config(config).launch().await?;
    let printer = tokio::spawn(print_views(game.subscribe()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Action(action)) => game.session().send(action).await?,
            Err(e) => log::warn!("{}", e),
        }
    }

    game.shutdown().await;
    printer.abort();
    Ok(())
}

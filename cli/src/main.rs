use log::{error, info, warn};
use std::io::BufRead;
use wristnote_core::command::parse_command;
use wristnote_core::platform::{console, EventBridge, EventDispatcher, NotifyEvent};
use wristnote_core::{Config, WristnoteResult};

mod cli;
mod logger;

fn main() -> WristnoteResult<()> {
    let args = cli::parse_args();

    if let Err(e) = logger::init_logger(args.quiet, args.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }

    info!("Starting Wristnote {}", wristnote_core::version());

    let config = if args.use_defaults {
        Config::default()
    } else {
        Config::load(args.config_path.as_deref(), !args.dry_run)?
    };
    config.validate()?;

    if args.dry_run {
        match &config.config_path {
            Some(path) => info!("Configuration at {} is valid", path.display()),
            None => info!("Default configuration is valid"),
        }
        return Ok(());
    }

    let bridge = EventBridge::new();
    let services = console::services(&config, bridge.dispatcher())?;

    let dispatcher = bridge.dispatcher();
    ctrlc::set_handler(move || {
        info!("Received Ctrl+C, shutting down...");
        dispatcher.send(NotifyEvent::Shutdown);
    })
    .map_err(|e| format!("Could not set Ctrl+C handler: {e}"))?;

    let dispatcher = bridge.dispatcher();
    std::thread::Builder::new()
        .name("console-input".to_string())
        .spawn(move || read_commands(dispatcher))
        .map_err(|e| format!("Could not start console reader: {e}"))?;

    wristnote_core::start(config, bridge, services)?;

    info!("Wristnote stopped");
    Ok(())
}

/// Turns lines on stdin into events until `quit` or end of input.
fn read_commands(dispatcher: EventDispatcher) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read console input: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(NotifyEvent::Shutdown) => break,
            Ok(event) => dispatcher.send(event),
            Err(e) => warn!("{e}"),
        }
    }
    dispatcher.send(NotifyEvent::Shutdown);
}

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use catalog_logging::{catalog_debug, catalog_info};
use clap::Parser;
use movies_core::{update, AppState, Msg};
use movies_engine::CatalogLoader;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

/// Poll interval for engine events while waiting on user input.
const TICK: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    if !catalog_logging::initialize(config.log_destination(), config.log_level()) {
        eprintln!("Warning: a logger was already installed; diagnostics go to it");
    }
    catalog_info!("Starting with {:?}", config);

    let loader = CatalogLoader::new(config.source(), config.load_settings());
    let effects = EffectRunner::new(loader).context("failed to start catalog engine")?;

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    thread::spawn(move || read_commands(cmd_tx));

    let mut app = App {
        state: AppState::new(),
        effects,
        out: io::stdout(),
    };
    app.dispatch(Msg::AppStarted)?;

    loop {
        for msg in app.effects.poll() {
            app.dispatch(msg)?;
        }

        match cmd_rx.recv_timeout(TICK) {
            Ok(Command::Dispatch(msg)) => app.dispatch(msg)?,
            Ok(Command::Help) => writeln!(app.out, "{HELP}")?,
            Ok(Command::Unknown(text)) => {
                writeln!(app.out, "Unknown command: {text} (try `help`)")?
            }
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => app.dispatch(Msg::Tick)?,
        }
    }

    catalog_info!("Shutting down");
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
    out: io::Stdout,
}

impl App {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        if !matches!(msg, Msg::Tick) {
            catalog_debug!("Dispatch {:?}", msg);
        }
        let (mut state, effects) = update(std::mem::take(&mut self.state), msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        self.effects.enqueue(effects);

        if was_dirty {
            let mut out = self.out.lock();
            writeln!(out)?;
            for line in render(&view) {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        }
        Ok(())
    }
}

fn read_commands(cmd_tx: mpsc::Sender<Command>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let command = parse_command(&line);
        let quit = command == Command::Quit;
        if cmd_tx.send(command).is_err() || quit {
            return;
        }
    }
    let _ = cmd_tx.send(Command::Quit);
}

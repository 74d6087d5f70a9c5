use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use admin_logging::{admin_debug, admin_info};
use anyhow::{Context, Result};
use qrcodes_core::{update, Msg, PageState, PageViewModel};

use super::config::{config_path_from_args, load_config};
use super::effects::EffectRunner;
use super::navigation::TerminalNavigator;
use super::ui::input::{parse_input, InputCommand};
use super::{logging, ui};

/// Everything the page loop reacts to, in arrival order.
pub enum LoopEvent {
    Dispatch(Msg),
    Input(String),
    Quit,
}

pub fn run_app() -> Result<()> {
    let config_path = config_path_from_args(std::env::args());
    let config = load_config(&config_path)?;
    logging::initialize(config.log_destination, config.level_filter());
    admin_info!(
        "Starting QR codes page against {}{}",
        config.base_url,
        config.codes_path
    );

    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let mut effects = EffectRunner::new(
        config.engine_config(),
        loop_tx.clone(),
        Box::new(TerminalNavigator),
    )
    .context("Failed to start the QR codes data source")?;

    spawn_stdin_reader(loop_tx.clone());
    spawn_refresh_ticker(loop_tx.clone(), config.refresh_interval());
    drop(loop_tx);

    let mut stdout = io::stdout();
    let mut state = PageState::new(config.create_route());
    draw(&mut stdout, &state.view())?;

    let mut pending = Some(Msg::RefreshRequested);
    loop {
        let msg = match pending.take() {
            Some(msg) => msg,
            None => match loop_rx.recv() {
                Ok(LoopEvent::Dispatch(msg)) => msg,
                Ok(LoopEvent::Input(line)) => match parse_input(&line, &state.view()) {
                    Some(InputCommand::Dispatch(msg)) => msg,
                    Some(InputCommand::Quit) => break,
                    None => {
                        writeln!(stdout, "{}", ui::constants::HELP_LINE)?;
                        continue;
                    }
                },
                Ok(LoopEvent::Quit) | Err(_) => break,
            },
        };

        admin_debug!("Dispatching {:?}", msg);
        let (next, new_effects) = update(state, msg);
        state = next;
        effects.run(new_effects);

        if state.consume_dirty() {
            draw(&mut stdout, &state.view())?;
        }
    }

    effects.shutdown();
    admin_info!("QR codes page closed");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(LoopEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(LoopEvent::Quit);
    });
}

/// Posts `RefreshRequested` every `interval` until the loop goes away.
/// No interval means no thread. update() drops ticks while a fetch is in flight.
fn spawn_refresh_ticker(
    tx: mpsc::Sender<LoopEvent>,
    interval: Option<Duration>,
) -> Option<JoinHandle<()>> {
    let interval = interval?;
    Some(thread::spawn(move || loop {
        thread::sleep(interval);
        if tx.send(LoopEvent::Dispatch(Msg::RefreshRequested)).is_err() {
            break;
        }
    }))
}

fn draw(out: &mut impl Write, view: &PageViewModel) -> Result<()> {
    writeln!(out)?;
    for line in ui::render::render(view) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

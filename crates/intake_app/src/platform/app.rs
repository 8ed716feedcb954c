use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use intake_core::{update, AppState, Msg};
use intake_logging::{intake_debug, intake_info, intake_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui;
use super::ui::input::InputEvent;

pub enum UiEvent {
    Input(InputEvent),
    /// Message produced by the engine on a worker thread.
    Engine(Msg),
    /// Standard input reached end of file.
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    intake_logging::initialize(&config.log)
        .with_context(|| format!("failed to create log file {:?}", config.log.file_path))?;
    intake_info!("Starting intake, endpoint={}", config.lookup.endpoint);

    let (ui_tx, ui_rx) = mpsc::channel::<UiEvent>();
    let runner =
        EffectRunner::new(config.lookup, ui_tx.clone()).context("failed to start lookup engine")?;
    spawn_input_reader(ui_tx);

    let stdout = io::stdout();
    let mut app = App::new(runner, stdout.lock());
    app.run(ui_rx)?;

    intake_info!("Intake finished");
    Ok(())
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    fn run(&mut self, ui_rx: mpsc::Receiver<UiEvent>) -> io::Result<()> {
        self.render()?;
        self.prompt()?;

        let mut input_closed = false;
        for event in ui_rx.iter() {
            match event {
                UiEvent::Input(InputEvent::Msgs(msgs)) => {
                    for msg in msgs {
                        self.dispatch_msg(msg)?;
                    }
                }
                UiEvent::Input(InputEvent::Help) => writeln!(self.out, "{}", ui::constants::HELP)?,
                UiEvent::Input(InputEvent::Invalid(reason)) => writeln!(self.out, "?? {reason}")?,
                UiEvent::Input(InputEvent::Quit) => break,
                UiEvent::Engine(msg) => self.dispatch_msg(msg)?,
                UiEvent::InputClosed => {
                    intake_debug!("Input closed");
                    input_closed = true;
                }
            }

            // Piped input may end before the last lookup settles.
            if input_closed && !self.state.in_progress() {
                break;
            }
            self.prompt()?;
        }
        Ok(())
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        if let Msg::LookupCompleted { request_id, .. } = &msg {
            if !self.state.is_pending(*request_id) {
                intake_debug!("Discarding stale lookup completion request_id={}", request_id);
            }
        }
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let view = self.state.view();
        writeln!(self.out)?;
        for line in ui::render::render(&view) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", ui::constants::PROMPT)?;
        self.out.flush()
    }
}

fn spawn_input_reader(ui_tx: mpsc::Sender<UiEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    let event = ui::input::parse_line(&line);
                    if ui_tx.send(UiEvent::Input(event)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    intake_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = ui_tx.send(UiEvent::InputClosed);
    });
}

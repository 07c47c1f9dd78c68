use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use docdash_core::{update, AppState, Msg, Section};
use docdash_logging::{dash_debug, dash_info};

use super::config::Config;
use super::effects::EffectRunner;
use super::flourish::PlaceholderTimer;
use super::input::{self, Command, HELP_TEXT};
use super::ui::render::{self, Tone};
use super::ui::terminal::TerminalSurface;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Msg(Msg),
    /// New frame from the placeholder animation.
    Placeholder(String),
    /// A line typed at the prompt.
    Line(String),
    Quit,
}

pub fn run_app(config: Config) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    let runner = EffectRunner::new(config.client.clone(), config.state_dir.clone(), event_tx.clone())?;
    let dark_mode = runner.load_dark_mode();
    dash_info!(
        "Starting docdash api_base={} state_dir={:?} dark_mode={}",
        config.client.base_url,
        config.state_dir,
        dark_mode
    );

    spawn_stdin_reader(event_tx.clone());
    spawn_ticker(event_tx.clone());

    let mut app = App {
        state: AppState::default(),
        runner,
        surface: TerminalSurface::new(),
        events: event_tx,
        typing_effect: config.typing_effect,
        placeholder: None,
        placeholder_text: None,
        render_pending: false,
    };
    app.dispatch(Msg::Started { dark_mode });
    app.draw()?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(Msg::Tick) => {
                app.dispatch(Msg::Tick);
                if app.render_pending {
                    app.draw()?;
                }
            }
            AppEvent::Msg(msg) => app.dispatch(msg),
            AppEvent::Placeholder(text) => app.show_placeholder(text)?,
            AppEvent::Line(line) => match input::parse_line(&line) {
                Ok(Command::Dispatch(msgs)) => {
                    for msg in msgs {
                        app.dispatch(msg);
                    }
                    app.draw()?;
                }
                Ok(Command::Help) => app.surface.draw_message(HELP_TEXT, Tone::Muted)?,
                Ok(Command::Quit) => break,
                Err(err) => app.surface.draw_message(&err.to_string(), Tone::Error)?,
            },
            AppEvent::Quit => break,
        }
    }

    dash_info!("Shutting down");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    surface: TerminalSurface,
    events: mpsc::Sender<AppEvent>,
    typing_effect: bool,
    placeholder: Option<PlaceholderTimer>,
    placeholder_text: Option<String>,
    render_pending: bool,
}

impl App {
    fn dispatch(&mut self, msg: Msg) {
        let (state, effects) = update(std::mem::take(&mut self.state), msg);
        self.state = state;
        self.runner.enqueue(effects);
        if self.state.consume_dirty() {
            self.render_pending = true;
        }
        self.sync_placeholder();
    }

    fn draw(&mut self) -> Result<()> {
        let view = self.state.view();
        let lines = render::render(&view);
        self.render_pending = false;
        self.surface
            .draw(&lines, view.dark_mode, self.placeholder_text.as_deref())
            .context("drawing dashboard")
    }

    fn show_placeholder(&mut self, text: String) -> Result<()> {
        if self.placeholder.is_none() {
            return Ok(());
        }
        self.surface
            .draw_prompt(Some(&text))
            .context("drawing prompt")?;
        self.placeholder_text = Some(text);
        Ok(())
    }

    /// Runs the placeholder animation only while the search section shows.
    fn sync_placeholder(&mut self) {
        let on_search = self.state.section() == Section::Search;
        match (&self.placeholder, on_search && self.typing_effect) {
            (None, true) => {
                dash_debug!("Starting placeholder animation");
                let events = self.events.clone();
                self.placeholder = Some(PlaceholderTimer::start(move |text| {
                    events.send(AppEvent::Placeholder(text)).is_ok()
                }));
            }
            (Some(_), false) => {
                dash_debug!("Stopping placeholder animation");
                if let Some(timer) = self.placeholder.take() {
                    timer.stop();
                }
                self.placeholder_text = None;
            }
            _ => {}
        }
    }
}

fn spawn_stdin_reader(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if events.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = events.send(AppEvent::Quit);
    });
}

fn spawn_ticker(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while events.send(AppEvent::Msg(Msg::Tick)).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });
}

use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// Main loop state: redraw only on committed changes or terminal resize.
pub struct EventLoop {
    poll_interval: Duration,
    resized: bool,
    frames: u64,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            resized: false,
            frames: 0,
        }
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw if needed, check for exit, then handle at most one event.
    pub fn step<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        app: &mut App,
        events: &EventHandler,
        shutdown: &ShutdownHandle,
    ) -> Result<Step, B::Error> {
        if app.take_redraw() || self.resized {
            terminal.draw(|frame| draw(frame, app))?;
            self.resized = false;
            self.frames += 1;
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            return Ok(Step::Exit);
        }

        match events.next(self.poll_interval) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                self.resized = true;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    /// Step until exit and return the final count.
    pub fn drive<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        app: &mut App,
        events: &EventHandler,
        shutdown: &ShutdownHandle,
    ) -> Result<i64, B::Error> {
        while self.step(terminal, app, events, shutdown)? == Step::Continue {}
        Ok(app.count())
    }
}

/// Run the interactive counter until the user quits or a signal arrives.
///
/// Returns the final count. The shutdown flag is set on every exit path,
/// errors included, so the input thread always stops.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<i64> {
    shutdown.run_then_signal(|| run_terminal(config, &shutdown))
}

fn run_terminal(config: &Config, shutdown: &ShutdownHandle) -> io::Result<i64> {
    let (mut terminal, _guard) = setup_terminal(config.ui.mouse)?;
    let poll_interval = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config.counter.initial, config.ui.mouse);
    let events = EventHandler::new(poll_interval, shutdown.clone());
    let (cols, rows) = crossterm::terminal::size()?;
    app.on_resize(cols, rows);
    tracing::info!(initial = config.counter.initial, "counter started");

    let count =
        EventLoop::new(poll_interval).drive(&mut terminal, &mut app, &events, shutdown)?;
    tracing::info!(count, "counter stopped");
    Ok(count)
}

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a background thread and forwards it to the
/// main loop. The thread never touches application state.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            // Short poll so the shutdown flag is checked regularly
            match event::poll(poll_interval) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "failed to poll terminal events");
                    break;
                }
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "failed to read terminal event");
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Wrap an existing channel, e.g. one fed by something other than the
    /// terminal.
    pub fn from_receiver(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

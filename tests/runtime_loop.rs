//! Event loop redraw and exit rules, driven through a test backend.

mod common;

use std::sync::mpsc::{self, Sender};
use std::time::Duration;

use common::*;
use crossterm::event::KeyCode;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tally::shutdown::ShutdownHandle;
use tally::ui::app::App;
use tally::ui::events::{AppEvent, EventHandler};
use tally::ui::runtime::{EventLoop, Step};

const POLL: Duration = Duration::from_millis(5);

struct Harness {
    terminal: Terminal<TestBackend>,
    app: App,
    events: EventHandler,
    tx: Sender<AppEvent>,
    shutdown: ShutdownHandle,
    event_loop: EventLoop,
}

impl Harness {
    fn new(initial: i64) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            terminal: Terminal::new(TestBackend::new(COLS, ROWS)).unwrap(),
            app: make_app(initial),
            events: EventHandler::from_receiver(rx),
            tx,
            shutdown: ShutdownHandle::new(),
            event_loop: EventLoop::new(POLL),
        }
    }

    fn step(&mut self) -> Step {
        self.event_loop
            .step(&mut self.terminal, &mut self.app, &self.events, &self.shutdown)
            .unwrap()
    }

    fn send(&self, event: AppEvent) {
        self.tx.send(event).unwrap();
    }

    fn shown(&self) -> String {
        let area = self.app.counter_area().expect("size known");
        let row = self.app.view().layout(area).value.y as usize;
        buffer_rows(self.terminal.backend().buffer())[row].clone()
    }
}

#[test]
fn first_step_draws() {
    let mut h = Harness::new(0);
    assert_eq!(h.step(), Step::Continue);
    assert_eq!(h.event_loop.frames(), 1);
    assert!(h.shown().contains(" 0 "));
}

#[test]
fn idle_steps_do_not_redraw() {
    let mut h = Harness::new(0);
    h.step();
    h.step();
    h.step();
    assert_eq!(h.event_loop.frames(), 1);
}

#[test]
fn committed_change_redraws_once() {
    let mut h = Harness::new(0);
    h.step();

    h.send(AppEvent::Key(key(KeyCode::Up)));
    h.step(); // handles the key
    h.step(); // draws
    assert_eq!(h.event_loop.frames(), 2);
    assert!(h.shown().contains(" 1 "));

    h.step();
    assert_eq!(h.event_loop.frames(), 2);
}

#[test]
fn unmapped_key_does_not_redraw() {
    let mut h = Harness::new(0);
    h.step();

    h.send(AppEvent::Key(key(KeyCode::Char('x'))));
    h.step();
    h.step();
    assert_eq!(h.event_loop.frames(), 1);
}

#[test]
fn resize_redraws_without_state_change() {
    let mut h = Harness::new(0);
    h.step();

    h.send(AppEvent::Resize(60, 20));
    h.step();
    h.step();
    assert_eq!(h.event_loop.frames(), 2);
    assert_eq!(h.app.count(), 0);

    h.step();
    assert_eq!(h.event_loop.frames(), 2);
}

#[test]
fn exits_when_shutdown_signalled() {
    let mut h = Harness::new(0);
    h.step();
    h.shutdown.signal();
    assert_eq!(h.step(), Step::Exit);
}

#[test]
fn exits_after_quit_key() {
    let mut h = Harness::new(0);
    h.send(AppEvent::Key(key(KeyCode::Char('q'))));
    assert_eq!(h.step(), Step::Continue);
    assert_eq!(h.step(), Step::Exit);
}

#[test]
fn exits_when_event_source_closes() {
    let mut h = Harness::new(0);
    h.step();
    // Replacing the only sender disconnects the loop's channel
    h.tx = mpsc::channel().0;
    assert_eq!(h.step(), Step::Exit);
}

#[test]
fn drive_returns_final_count() {
    let mut h = Harness::new(0);
    for code in [KeyCode::Up, KeyCode::Up, KeyCode::Down, KeyCode::Char('q')] {
        h.send(AppEvent::Key(key(code)));
    }

    let count = h
        .event_loop
        .drive(&mut h.terminal, &mut h.app, &h.events, &h.shutdown)
        .unwrap();
    assert_eq!(count, 1);
    assert!(h.shown().contains(" 1 "));
}

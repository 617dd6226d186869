use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};

/// Shared shutdown flag, set by signals or by the UI on quit.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT and SIGTERM into this handle's flag.
    pub fn install_signal_handlers(&self) -> io::Result<()> {
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.shutdown))?;
        }
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("shutdown initiated");
        }
    }

    /// Run `f`, then signal shutdown whether it succeeded or not.
    pub fn run_then_signal<T, E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let result = f();
        self.signal();
        result
    }
}

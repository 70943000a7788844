//! Terminal implementations of the desk capabilities.

use std::{
    io::{self, BufRead, BufReader, Write},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

use tokio::{
    runtime::{Handle, RuntimeFlavor},
    sync::Notify,
    task,
};
use tracing::{info, warn};

use crate::{
    notifier::{Navigator, Notifier},
    views::{
        booked_slots::{SlotPanel, Surface},
        notifications::{NotificationPanel, NotificationSurface},
    },
};

/// Alerts go to stdout, confirmations are read from stdin.
///
/// Reading an answer blocks the calling thread. On a multi-threaded runtime
/// the read is moved off the worker with `block_in_place`.
pub struct ConsoleNotifier {
    assume_yes: bool,
    input: Mutex<Box<dyn BufRead + Send>>,
}

impl ConsoleNotifier {
    /// With `assume_yes` every confirmation is answered "yes" without asking.
    pub fn new(assume_yes: bool) -> Self {
        Self::with_input(assume_yes, Box::new(BufReader::new(io::stdin())))
    }

    /// Reads answers from `input` instead of stdin.
    pub fn with_input(assume_yes: bool, input: Box<dyn BufRead + Send>) -> Self {
        Self {
            assume_yes,
            input: Mutex::new(input),
        }
    }

    fn read_answer(&self) -> io::Result<String> {
        let mut input = self.input.lock().unwrap_or_else(PoisonError::into_inner);
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        Ok(answer)
    }
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            info!("auto-confirmed: {}", message);
            return true;
        }

        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        match run_blocking(|| self.read_answer()) {
            Ok(answer) => is_yes(&answer),
            Err(e) => {
                warn!("could not read confirmation: {}", e);
                false
            }
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => task::block_in_place(f),
        _ => f(),
    }
}

/// Records reload requests for the command loop and opens URLs either in the
/// system browser or by printing them.
#[derive(Default)]
pub struct ConsoleNavigator {
    open_browser: bool,
    reload_requested: AtomicBool,
    reloaded: Notify,
}

impl ConsoleNavigator {
    pub fn new(open_browser: bool) -> Self {
        Self {
            open_browser,
            ..Self::default()
        }
    }

    /// Returns whether a reload was requested since the last call, clearing
    /// the request.
    pub fn take_reload(&self) -> bool {
        self.reload_requested.swap(false, Ordering::SeqCst)
    }

    /// Waits for the next reload request and clears it.
    pub async fn wait_for_reload(&self) {
        self.reloaded.notified().await;
        self.reload_requested.store(false, Ordering::SeqCst);
    }
}

impl Navigator for ConsoleNavigator {
    fn reload(&self) {
        self.reload_requested.store(true, Ordering::SeqCst);
        self.reloaded.notify_one();
    }

    fn open(&self, url: &str) {
        if self.open_browser {
            match webbrowser::open(url) {
                Ok(()) => return,
                Err(e) => warn!("could not launch browser: {}", e),
            }
        }
        println!("Open: {}", url);
    }
}

/// Prints every panel to stdout.
pub struct ConsoleSurface;

impl Surface for ConsoleSurface {
    fn show(&self, panel: &SlotPanel) {
        // The loading panel is transient in a terminal
        if matches!(panel, SlotPanel::Loading(_)) {
            info!("{}", panel.to_string().trim_end());
            return;
        }
        print!("{}", panel);
    }
}

impl NotificationSurface for ConsoleSurface {
    fn show_notifications(&self, panel: &NotificationPanel) {
        if matches!(panel, NotificationPanel::Loading(_)) {
            info!("{}", panel.to_string().trim_end());
            return;
        }
        print!("{}", panel);
    }
}

//! Animated placeholder for the search prompt. Purely decorative.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const PHRASES: [&str; 5] = [
    "Ask a question about your documents...",
    "What are the key findings?",
    "Summarize the main points...",
    "Compare different sections...",
    "Find specific information...",
];

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const FULL_PHRASE_PAUSE: Duration = Duration::from_secs(2);
const START_DELAY: Duration = Duration::from_secs(1);

/// Types a phrase one char at a time, deletes it, and moves to the next.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderTyper {
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl PlaceholderTyper {
    /// Advances one char and returns the visible text plus the delay
    /// before the next step.
    pub fn step(&mut self) -> (String, Duration) {
        let phrase = PHRASES[self.phrase];
        let len = phrase.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            let text = prefix(phrase, self.chars);
            if self.chars == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % PHRASES.len();
                return (text, TYPE_DELAY);
            }
            (text, DELETE_DELAY)
        } else {
            self.chars = (self.chars + 1).min(len);
            let text = prefix(phrase, self.chars);
            if self.chars == len {
                self.deleting = true;
                return (text, FULL_PHRASE_PAUSE);
            }
            (text, TYPE_DELAY)
        }
    }
}

fn prefix(phrase: &str, chars: usize) -> String {
    phrase.chars().take(chars).collect()
}

/// Background thread driving a `PlaceholderTyper`. Dropping it stops the
/// animation.
pub struct PlaceholderTimer {
    stop_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl PlaceholderTimer {
    /// Calls `on_text` with each frame until it returns `false` or the
    /// timer is stopped.
    pub fn start<F>(on_text: F) -> Self
    where
        F: Fn(String) -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            let mut typer = PlaceholderTyper::default();
            let mut delay = START_DELAY;
            loop {
                match stop_rx.recv_timeout(delay) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
                let (text, next) = typer.step();
                if !on_text(text) {
                    break;
                }
                delay = next;
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for PlaceholderTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

//! Rotating headline strip.
//!
//! Holds the static bilingual headline list and the current rotation index.
//! A background task advances the index on a fixed period; the index page and
//! the `/ticker` fragment both render whatever line is current.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::models::{Lang, Localized};

pub struct Ticker {
    lines: Vec<Localized>,
    index: AtomicUsize,
}

impl Ticker {
    pub fn new(lines: Vec<Localized>) -> Self {
        Self {
            lines,
            index: AtomicUsize::new(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Move to the next headline, wrapping at the end of the list.
    pub fn advance(&self) {
        if self.lines.is_empty() {
            return;
        }
        let len = self.lines.len();
        self.index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| {
                Some((i + 1) % len)
            })
            .ok();
    }

    /// The headline currently on display, empty when no lines exist.
    pub fn current(&self, lang: Lang) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let index = self.index.load(Ordering::Relaxed) % self.lines.len();
        self.lines[index].get(lang).to_string()
    }
}

pub async fn start_ticker_rotation(ticker: Arc<Ticker>, period_seconds: u64) {
    let period = Duration::from_secs(period_seconds);
    loop {
        tokio::time::sleep(period).await;
        ticker.advance();
    }
}

//! Background fetch worker
//!
//! Fetches run on their own thread so the UI stays interactive. Each
//! completed fetch is sent back as a [`FetchOutcome`] tagged with the
//! [`RequestToken`] it was issued under; the session decides whether the
//! outcome is still current.

use crate::api::{ApiError, BrewerySource, fetch_for_state};
use crate::brewery::{Brewery, BreweryType};
use crate::session::RequestToken;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use tracing::debug;

/// Result of one fetch, tagged with its request token
#[derive(Debug)]
pub struct FetchOutcome {
    pub token: RequestToken,
    pub state: String,
    pub result: Result<Vec<Brewery>, ApiError>,
}

/// Spawns fetches and collects their outcomes
pub struct FetchWorker {
    source: Arc<dyn BrewerySource>,
    allowed: Arc<[BreweryType]>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl FetchWorker {
    /// Create a worker over `source`, keeping only `allowed` types
    #[must_use]
    pub fn new(source: Arc<dyn BrewerySource>, allowed: Vec<BreweryType>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            allowed: allowed.into(),
            tx,
            rx,
        }
    }

    /// Start a fetch for `state` in the background
    ///
    /// There is no cancellation; superseded fetches still complete and are
    /// filtered out by token.
    pub fn spawn(&self, token: RequestToken, state: &str) {
        let source = Arc::clone(&self.source);
        let allowed = Arc::clone(&self.allowed);
        let tx = self.tx.clone();
        let state = state.to_string();

        thread::spawn(move || {
            let result = fetch_for_state(source.as_ref(), &state, &allowed);
            debug!(token = token.value(), ok = result.is_ok(), "Fetch thread finished");
            // Receiver gone means the UI has exited
            let _ = tx.send(FetchOutcome {
                token,
                state,
                result,
            });
        });
    }

    /// Collect every outcome that has arrived, without blocking
    pub fn drain(&self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        outcomes
    }

    /// Block until the next outcome arrives
    ///
    /// Returns `None` only if every sender is gone, which cannot happen while
    /// the worker itself is alive.
    pub fn recv(&self) -> Option<FetchOutcome> {
        self.rx.recv().ok()
    }
}

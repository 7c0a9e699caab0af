//! Background catalog loading, scoped to a view activation.
//!
//! Each activation spawns one fetch thread and bumps a generation counter.
//! The underlying request is never cancelled; instead, results are stamped
//! with the generation that started them, and anything from an earlier
//! activation is dropped on arrival so a reloaded (or torn-down) view never
//! has a stale catalog installed over its state.

use super::{Catalog, CatalogError, fetch_catalog};
use std::sync::mpsc;
use std::thread;
use tracing::debug;

/// Outcome of one fetch, stamped with the activation that started it.
struct FetchMessage {
    generation: u64,
    outcome: Result<Catalog, CatalogError>,
}

/// Spawns and tracks the per-activation catalog fetch.
#[derive(Debug)]
pub struct Loader {
    service_root: String,
    generation: u64,
    tx: mpsc::Sender<FetchMessage>,
    rx: mpsc::Receiver<FetchMessage>,
}

impl Loader {
    /// Create a loader for the given service root.
    #[must_use]
    pub fn new(service_root: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            service_root: service_root.into(),
            generation: 0,
            tx,
            rx,
        }
    }

    /// Start a fresh activation: bump the generation and kick off one fetch.
    ///
    /// Any fetch still in flight from a previous activation keeps running,
    /// but its eventual result will fail the generation check in [`poll`]
    /// and be discarded.
    ///
    /// [`poll`]: Self::poll
    pub fn activate(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let service_root = self.service_root.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = fetch_catalog(&service_root);
            // The receiver is gone when the app has already exited.
            let _ = tx.send(FetchMessage {
                generation,
                outcome,
            });
        });
    }

    /// Drain the channel and return the result of the current activation's
    /// fetch, if it has arrived.
    pub fn poll(&mut self) -> Option<Result<Catalog, CatalogError>> {
        while let Ok(message) = self.rx.try_recv() {
            if message.generation == self.generation {
                return Some(message.outcome);
            }
            debug!(
                generation = message.generation,
                current = self.generation,
                "discarding catalog fetch result from a previous activation"
            );
        }
        None
    }

    /// The activation generation currently in effect.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    fn inject(&self, generation: u64, outcome: Result<Catalog, CatalogError>) {
        let _ = self.tx.send(FetchMessage {
            generation,
            outcome,
        });
    }

    /// Advance the generation without spawning a fetch thread, so tests can
    /// feed outcomes through [`inject`](Self::inject) deterministically.
    #[cfg(test)]
    const fn bump_generation(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test assertions")]

    use super::*;
    use crate::catalog::{ModelDescriptor, ModelId};
    use std::time::{Duration, Instant};

    fn one_model_catalog() -> Catalog {
        Catalog::from(vec![ModelDescriptor {
            id: ModelId::Number(1),
            name: "Sandpile".to_string(),
            source: "sandpile.py".to_string(),
            doc: "desc1".to_string(),
        }])
    }

    fn poll_until_some(loader: &mut Loader) -> Result<Catalog, CatalogError> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(outcome) = loader.poll() {
                return outcome;
            }
            assert!(Instant::now() < deadline, "fetch never resolved");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_poll_empty_before_activation() {
        let mut loader = Loader::new("http://127.0.0.1:1");
        assert_eq!(loader.generation(), 0);
        assert!(loader.poll().is_none());
    }

    #[test]
    fn test_activate_bumps_generation() {
        let mut loader = Loader::new("http://127.0.0.1:1");
        loader.activate();
        loader.activate();
        assert_eq!(loader.generation(), 2);
    }

    #[test]
    fn test_current_generation_result_is_delivered() {
        let mut loader = Loader::new("unused");
        loader.bump_generation();
        loader.inject(loader.generation(), Ok(one_model_catalog()));
        let outcome = poll_until_some(&mut loader);
        assert_eq!(outcome.unwrap().get(0).map(|m| m.name.as_str()), Some("Sandpile"));
    }

    #[test]
    fn test_stale_generation_result_is_discarded() {
        let mut loader = Loader::new("unused");
        loader.inject(0, Ok(one_model_catalog()));
        loader.bump_generation();
        loader.inject(loader.generation(), Ok(Catalog::default()));
        let outcome = poll_until_some(&mut loader);
        // The stale one-model catalog must not surface; the current
        // activation's empty catalog must.
        assert!(outcome.unwrap().is_empty());
    }

    #[test]
    fn test_stale_result_alone_yields_nothing() {
        let mut loader = Loader::new("unused");
        loader.bump_generation();
        loader.inject(0, Ok(one_model_catalog()));
        assert!(loader.poll().is_none());
    }

    #[test]
    fn test_failure_outcome_is_delivered() {
        let mut loader = Loader::new("unused");
        loader.bump_generation();
        loader.inject(loader.generation(), Err(CatalogError::Fetch("boom".to_string())));
        let outcome = poll_until_some(&mut loader);
        assert!(outcome.is_err());
    }

    #[test]
    fn test_real_fetch_against_dead_port_resolves_failed() {
        let mut loader = Loader::new("http://127.0.0.1:1");
        loader.activate();
        let outcome = poll_until_some(&mut loader);
        assert!(matches!(outcome, Err(CatalogError::Fetch(_))));
    }
}

//! Application state: targets, round bookkeeping, and the per-round
//! dashboard snapshot handed to the render sink.

use std::time::Instant;

use crate::data::Target;
use crate::poll::Poller;
use crate::vars::VarSpec;

/// The immutable per-round snapshot consumed by a render sink.
///
/// Borrowed from [`App`] after a round joins; a sink must not retain
/// it beyond its own `refresh` call, which the borrow already
/// enforces.
pub struct Dashboard<'a> {
    /// All targets, read-only, in configuration order.
    pub targets: &'a [Target],
    /// The variable specs, for column and legend ordering.
    pub specs: &'a [VarSpec],
    /// When the most recent round completed.
    pub updated_at: Instant,
}

/// Owns the poller and the mutable target set, and serializes rounds.
///
/// Rounds run one at a time on the caller's thread (the `&mut self`
/// borrow of [`App::run_round`] enforces it), so a target's next
/// update can never begin before its previous one completed.
pub struct App {
    poller: Poller,
    targets: Vec<Target>,
    last_round_at: Option<Instant>,
    pub running: bool,
}

impl App {
    /// Create the app with one pending target per resolved address.
    pub fn new(poller: Poller, addresses: &[String]) -> Self {
        let targets = poller.make_targets(addresses);
        Self {
            poller,
            targets,
            last_round_at: None,
            running: true,
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Run one polling round to completion and record its timestamp.
    pub async fn run_round(&mut self) {
        let completed = self.poller.run_round(&mut self.targets).await;
        self.last_round_at = Some(completed);
    }

    /// Snapshot the current state for rendering.
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard {
            targets: &self.targets,
            specs: self.poller.specs(),
            updated_at: self.last_round_at.unwrap_or_else(Instant::now),
        }
    }

    /// Stop the main loop after the current iteration.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{ExpvarSource, FetchError};
    use crate::vars::parse_vars;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    #[derive(Debug)]
    struct StaticSource;

    #[async_trait]
    impl ExpvarSource for StaticSource {
        async fn fetch(&self, _url: &str) -> Result<Value, FetchError> {
            Ok(json!({"Goroutines": 4}))
        }
    }

    #[test]
    fn test_dashboard_reflects_round() {
        let specs = parse_vars("Goroutines").unwrap();
        let poller = Poller::new(Box::new(StaticSource), specs);
        let mut app = App::new(poller, &["http://localhost:1/debug/vars".to_string()]);

        assert_eq!(app.target_count(), 1);
        tokio_test::block_on(app.run_round());

        let dashboard = app.dashboard();
        assert_eq!(dashboard.targets.len(), 1);
        assert_eq!(dashboard.specs.len(), 1);
        assert_eq!(dashboard.targets[0].series[0].last_value(), Some(4.0));
    }

    #[test]
    fn test_quit() {
        let specs = parse_vars("Goroutines").unwrap();
        let poller = Poller::new(Box::new(StaticSource), specs);
        let mut app = App::new(poller, &[]);
        assert!(app.running);
        app.quit();
        assert!(!app.running);
    }
}

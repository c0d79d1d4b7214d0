//! Per-target state and the application of round results.
//!
//! A [`Target`] is owned by the polling scheduler; the renderer only
//! ever borrows it between rounds. All mutation happens in
//! [`Target::apply_document`] and [`Target::apply_failure`], called at
//! most once per round per target after the round's fetches join.

use std::time::Instant;

use serde_json::Value;

use super::series::Series;
use crate::extract::extract;
use crate::fetch::FetchError;
use crate::vars::VarSpec;

/// Reachability of a monitored process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    /// No fetch has completed yet.
    Pending,
    /// Last fetch succeeded.
    Online,
    /// Last fetch failed to connect or timed out.
    Offline,
    /// Last fetch reached the endpoint but failed (404, bad body,
    /// unexpected status).
    Error(String),
}

impl TargetStatus {
    /// Short fixed-width label for table display.
    pub fn symbol(&self) -> &'static str {
        match self {
            TargetStatus::Pending => "...",
            TargetStatus::Online => "UP",
            TargetStatus::Offline => "DOWN",
            TargetStatus::Error(_) => "ERR",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, TargetStatus::Online)
    }
}

/// One monitored process and its per-variable series.
#[derive(Debug, Clone)]
pub struct Target {
    /// Resolved URL of the introspection endpoint.
    pub address: String,
    pub status: TargetStatus,
    pub last_fetched_at: Option<Instant>,
    /// Exactly one entry per spec, positionally aligned with the spec
    /// list, created here and never added to or removed afterward.
    pub series: Vec<Series>,
    /// Most recent fetch or extraction problem, for the renderer.
    pub last_error: Option<String>,
}

impl Target {
    /// Create a target with one empty series per spec.
    pub fn new(address: impl Into<String>, specs: &[VarSpec]) -> Self {
        Self {
            address: address.into(),
            status: TargetStatus::Pending,
            last_fetched_at: None,
            series: specs.iter().map(|_| Series::new()).collect(),
            last_error: None,
        }
    }

    /// Fold one successfully fetched document into this target.
    ///
    /// Every spec is extracted independently: a missing path degrades
    /// only that variable's series (no point appended, last value
    /// unchanged) and never aborts the siblings.
    pub fn apply_document(&mut self, tree: &Value, specs: &[VarSpec]) {
        self.status = TargetStatus::Online;
        self.last_fetched_at = Some(Instant::now());

        let mut failed: Vec<&str> = Vec::new();
        for (spec, series) in specs.iter().zip(self.series.iter_mut()) {
            match extract(tree, &spec.path) {
                Ok(raw) => series.observe(raw, spec.kind),
                Err(_) => failed.push(&spec.name),
            }
        }

        self.last_error = if failed.is_empty() {
            None
        } else {
            Some(format!("unresolved vars: {}", failed.join(", ")))
        };
    }

    /// Record a failed fetch. No series is touched: a network failure
    /// must not inject a fabricated zero into the time series.
    pub fn apply_failure(&mut self, err: &FetchError) {
        self.status = match err {
            FetchError::Connection(_) | FetchError::Timeout => TargetStatus::Offline,
            other => TargetStatus::Error(other.to_string()),
        };
        self.last_error = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::parse_vars;
    use serde_json::json;

    fn specs() -> Vec<VarSpec> {
        parse_vars("mem:memstats.Alloc,counter:Requests,Goroutines").unwrap()
    }

    #[test]
    fn test_new_target_is_pending() {
        let target = Target::new("http://localhost:1234/debug/vars", &specs());
        assert_eq!(target.status, TargetStatus::Pending);
        assert_eq!(target.series.len(), 3);
        assert!(target.series.iter().all(Series::is_empty));
    }

    #[test]
    fn test_apply_document_updates_every_series() {
        let specs = specs();
        let mut target = Target::new("http://localhost:1234/debug/vars", &specs);
        let tree = json!({
            "memstats": {"Alloc": 4096},
            "Requests": 100,
            "Goroutines": 8
        });

        target.apply_document(&tree, &specs);

        assert_eq!(target.status, TargetStatus::Online);
        assert!(target.last_fetched_at.is_some());
        assert!(target.last_error.is_none());
        assert_eq!(target.series[0].last_value(), Some(4096.0));
        assert_eq!(target.series[1].last_value(), Some(0.0)); // no baseline yet
        assert_eq!(target.series[2].last_value(), Some(8.0));
    }

    #[test]
    fn test_missing_path_degrades_one_variable() {
        let specs = specs();
        let mut target = Target::new("http://localhost:1234/debug/vars", &specs);
        let full = json!({
            "memstats": {"Alloc": 4096},
            "Requests": 100,
            "Goroutines": 8
        });
        target.apply_document(&full, &specs);

        // Second document is missing Requests.
        let partial = json!({
            "memstats": {"Alloc": 5120},
            "Goroutines": 9
        });
        target.apply_document(&partial, &specs);

        assert_eq!(target.status, TargetStatus::Online);
        assert_eq!(target.series[0].history().len(), 2);
        assert_eq!(target.series[1].history().len(), 1); // did not advance
        assert_eq!(target.series[1].last_value(), Some(0.0)); // unchanged
        assert_eq!(target.series[2].history().len(), 2);
        assert!(target.last_error.as_deref().unwrap().contains("Requests"));
    }

    #[test]
    fn test_fetch_failure_statuses() {
        let specs = specs();
        let mut target = Target::new("http://localhost:1234/debug/vars", &specs);

        target.apply_failure(&FetchError::Timeout);
        assert_eq!(target.status, TargetStatus::Offline);

        target.apply_failure(&FetchError::Connection("refused".into()));
        assert_eq!(target.status, TargetStatus::Offline);

        target.apply_failure(&FetchError::VarsNotFound);
        assert!(matches!(target.status, TargetStatus::Error(_)));
        assert!(target.last_error.as_deref().unwrap().contains("expvar"));

        // Series were never touched by any failure.
        assert!(target.series.iter().all(Series::is_empty));
    }
}

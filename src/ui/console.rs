//! Headless console sink for `--dummy` mode.
//!
//! Prints one line per target per round. Useful for piping, for
//! terminals without alternate-screen support, and for debugging the
//! acquisition engine without a TUI in the way.

use anyhow::Result;

use super::{short_address, RenderSink};
use crate::app::Dashboard;
use crate::data::format::format_value;
use crate::data::Target;
use crate::vars::VarSpec;

pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for ConsoleSink {
    fn init(&mut self, dashboard: &Dashboard) -> Result<()> {
        println!(
            "varwatch: monitoring {} target(s), {} var(s)",
            dashboard.targets.len(),
            dashboard.specs.len()
        );
        Ok(())
    }

    fn refresh(&mut self, dashboard: &Dashboard) -> Result<()> {
        for target in dashboard.targets {
            println!("{}", target_line(target, dashboard.specs));
        }
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// One round's output for one target.
fn target_line(target: &Target, specs: &[VarSpec]) -> String {
    let mut line = format!("{} [{}]", short_address(&target.address), target.status.symbol());

    if target.status.is_online() {
        for (spec, series) in specs.iter().zip(&target.series) {
            match series.last_value() {
                Some(value) => {
                    line.push_str(&format!(" {}={}", spec.name, format_value(value, spec.kind)));
                }
                None => line.push_str(&format!(" {}=-", spec.name)),
            }
        }
    } else if let Some(err) = &target.last_error {
        line.push(' ');
        line.push_str(err);
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::vars::parse_vars;
    use serde_json::json;

    #[test]
    fn test_target_line_online() {
        let specs = parse_vars("mem:memstats.Alloc,Goroutines").unwrap();
        let mut target = Target::new("http://localhost:1234/debug/vars", &specs);
        target.apply_document(&json!({"memstats": {"Alloc": 2048}, "Goroutines": 7}), &specs);

        assert_eq!(
            target_line(&target, &specs),
            "localhost:1234 [UP] memstats.Alloc=2.00KB Goroutines=7"
        );
    }

    #[test]
    fn test_target_line_offline_shows_error() {
        let specs = parse_vars("Goroutines").unwrap();
        let mut target = Target::new("http://localhost:1234/debug/vars", &specs);
        target.apply_failure(&FetchError::Timeout);

        assert_eq!(target_line(&target, &specs), "localhost:1234 [DOWN] request timed out");
    }

    #[test]
    fn test_target_line_pending() {
        let specs = parse_vars("Goroutines").unwrap();
        let target = Target::new("http://localhost:1234/debug/vars", &specs);
        assert_eq!(target_line(&target, &specs), "localhost:1234 [...]");
    }
}

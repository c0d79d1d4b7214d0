//! Render sinks: terminal dashboards and the headless console output.
//!
//! The core hands each completed round to a [`RenderSink`] and knows
//! nothing else about presentation. Which sink runs is decided once at
//! startup: the console sink when headless, the single-target layout
//! for one target, the table layout otherwise.
//!
//! ## Submodules
//!
//! - [`multi`]: Table dashboard, one row per target, one column per variable
//! - [`single`]: One full-width sparkline panel per variable
//! - [`console`]: Plain line-per-round output for `--dummy` mode
//! - [`term`]: Raw-mode terminal setup/teardown shared by the TUI sinks
//! - [`theme`]: Light/dark theme support with terminal auto-detection

pub mod console;
pub mod multi;
pub mod single;
pub mod term;
pub mod theme;

pub use console::ConsoleSink;
pub use multi::MultiView;
pub use single::SingleView;
pub use theme::Theme;

use anyhow::Result;

use crate::app::Dashboard;

/// Sparkline characters (8 levels of height).
pub(crate) const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Where completed rounds are displayed.
///
/// `refresh` is called once per round on the main thread; the sink
/// must not retain the dashboard past its own execution (the borrow
/// makes that a compile error rather than a convention).
pub trait RenderSink {
    /// One-time setup with the initial (usually all-pending) state.
    fn init(&mut self, dashboard: &Dashboard) -> Result<()>;

    /// Redraw with the state of the round that just completed.
    fn refresh(&mut self, dashboard: &Dashboard) -> Result<()>;

    /// Tear down (restore the terminal for TUI sinks).
    fn shutdown(&mut self) -> Result<()>;
}

/// Which concrete sink to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    Single,
    Multi,
}

impl SinkKind {
    /// Pick a sink from the headless flag and the target count.
    pub fn select(headless: bool, target_count: usize) -> Self {
        if headless {
            SinkKind::Console
        } else if target_count > 1 {
            SinkKind::Multi
        } else {
            SinkKind::Single
        }
    }
}

/// Construct the sink selected for this configuration.
pub fn create_sink(headless: bool, target_count: usize) -> Box<dyn RenderSink> {
    match SinkKind::select(headless, target_count) {
        SinkKind::Console => Box::new(ConsoleSink::new()),
        SinkKind::Single => Box::new(SingleView::new()),
        SinkKind::Multi => Box::new(MultiView::new()),
    }
}

/// Render the newest `width` levels as a sparkline string.
pub(crate) fn sparkline_string(levels: &[u8], width: usize) -> String {
    let skip = levels.len().saturating_sub(width);
    levels[skip..]
        .iter()
        .map(|&level| SPARKLINE_CHARS[usize::from(level.min(7))])
        .collect()
}

/// Compact target label: scheme and endpoint path stripped.
pub(crate) fn short_address(address: &str) -> &str {
    let address = address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"))
        .unwrap_or(address);
    match address.find('/') {
        Some(slash) => &address[..slash],
        None => address,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_selection() {
        assert_eq!(SinkKind::select(true, 5), SinkKind::Console);
        assert_eq!(SinkKind::select(true, 1), SinkKind::Console);
        assert_eq!(SinkKind::select(false, 1), SinkKind::Single);
        assert_eq!(SinkKind::select(false, 0), SinkKind::Single);
        assert_eq!(SinkKind::select(false, 3), SinkKind::Multi);
    }

    #[test]
    fn test_sparkline_string_truncates_from_the_left() {
        assert_eq!(sparkline_string(&[0, 3, 7], 8), "▁▄█");
        assert_eq!(sparkline_string(&[0, 1, 2, 3], 2), "▃▄");
        assert_eq!(sparkline_string(&[], 8), "");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address("http://localhost:1234/debug/vars"), "localhost:1234");
        assert_eq!(short_address("https://example.com:80/debug/vars"), "example.com:80");
        assert_eq!(short_address("localhost:9999"), "localhost:9999");
    }
}

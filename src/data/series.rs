//! Per-variable accumulated state: delta derivation and bounded history.

use std::collections::VecDeque;

use crate::vars::VarKind;

/// Number of display values retained per series (the sparkline window).
pub const HISTORY_CAPACITY: usize = 60;

/// Accumulated state for one (target, variable) pair.
///
/// Holds the raw baseline for cumulative kinds and a fixed-capacity
/// ring of display values. The ring only grows by appending at the
/// tail and only shrinks by dropping from the head once at capacity.
#[derive(Debug, Clone)]
pub struct Series {
    raw_previous: Option<f64>,
    history: VecDeque<f64>,
    last_value: Option<f64>,
    capacity: usize,
}

impl Default for Series {
    fn default() -> Self {
        Self::new()
    }
}

impl Series {
    /// Create an empty series with the standard window size.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create an empty series with an explicit window size.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raw_previous: None,
            history: VecDeque::with_capacity(capacity),
            last_value: None,
            capacity,
        }
    }

    /// Fold one freshly extracted raw value into the series.
    ///
    /// Gauge and Memory values display as-is. Duration and Counter
    /// values display as the delta since the previous poll: zero on
    /// the first read (no baseline yet), and clamped to zero when the
    /// raw value decreases, which means the monitored process
    /// restarted and its counter reset.
    pub fn observe(&mut self, raw: f64, kind: VarKind) {
        let display = if kind.is_cumulative() {
            match self.raw_previous {
                Some(previous) => (raw - previous).max(0.0),
                None => 0.0,
            }
        } else {
            raw
        };
        self.raw_previous = Some(raw);

        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(display);
        self.last_value = Some(display);
    }

    /// Most recent display value, if any poll has succeeded yet.
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// The retained display values, oldest first.
    pub fn history(&self) -> &VecDeque<f64> {
        &self.history
    }

    /// Whether no value has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// History normalized to 0-7 bar levels for sparkline rendering.
    ///
    /// Returns an empty Vec when there is nothing to draw.
    pub fn levels(&self) -> Vec<u8> {
        if self.history.is_empty() {
            return Vec::new();
        }

        let max = self.history.iter().copied().fold(f64::MIN, f64::max);
        let min = self.history.iter().copied().fold(f64::MAX, f64::min).min(0.0);
        let range = (max - min).max(f64::EPSILON);

        self.history
            .iter()
            .map(|&v| {
                let normalized = ((v - min) / range * 7.0) as u8;
                normalized.min(7)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_displays_raw() {
        let mut series = Series::new();
        series.observe(10.0, VarKind::Gauge);
        series.observe(7.5, VarKind::Gauge);
        assert_eq!(series.last_value(), Some(7.5));
        assert_eq!(series.history().iter().copied().collect::<Vec<_>>(), vec![10.0, 7.5]);
    }

    #[test]
    fn test_counter_deltas_with_reset_clamp() {
        let mut series = Series::new();
        for raw in [100.0, 140.0, 130.0, 175.0] {
            series.observe(raw, VarKind::Counter);
        }
        // First read has no baseline; 140 -> 130 is a counter reset.
        assert_eq!(
            series.history().iter().copied().collect::<Vec<_>>(),
            vec![0.0, 40.0, 0.0, 45.0]
        );
        assert_eq!(series.last_value(), Some(45.0));
    }

    #[test]
    fn test_duration_is_cumulative_too() {
        let mut series = Series::new();
        series.observe(1_000.0, VarKind::Duration);
        series.observe(1_250.0, VarKind::Duration);
        assert_eq!(series.last_value(), Some(250.0));
    }

    #[test]
    fn test_history_is_a_fifo_ring() {
        let mut series = Series::with_capacity(3);
        for raw in [1.0, 2.0, 3.0, 4.0, 5.0] {
            series.observe(raw, VarKind::Gauge);
        }
        assert_eq!(
            series.history().iter().copied().collect::<Vec<_>>(),
            vec![3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_levels_normalization() {
        let mut series = Series::new();
        for raw in [0.0, 7.0, 14.0] {
            series.observe(raw, VarKind::Gauge);
        }
        assert_eq!(series.levels(), vec![0, 3, 7]);
    }

    #[test]
    fn test_levels_flat_series() {
        let mut series = Series::new();
        series.observe(5.0, VarKind::Gauge);
        series.observe(5.0, VarKind::Gauge);
        let levels = series.levels();
        assert_eq!(levels.len(), 2);
        assert!(levels.iter().all(|&l| l <= 7));
    }

    #[test]
    fn test_empty_series() {
        let series = Series::new();
        assert!(series.is_empty());
        assert_eq!(series.last_value(), None);
        assert!(series.levels().is_empty());
    }
}

//! Display formatting for variable values.
//!
//! Durations are carried internally as f64 nanoseconds (the unit Go's
//! runtime exports), memory as bytes.

use crate::vars::VarKind;

/// Suffix to nanoseconds multiplier (order matters: longer suffixes first)
const DURATION_UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("µs", 1_000.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("m", 60_000_000_000.0),
    ("h", 3_600_000_000_000.0),
    ("s", 1_000_000_000.0),
];

/// Parse Go-style duration strings like "29.99s", "988.82ms",
/// "16.958µs" into nanoseconds.
pub fn parse_go_duration(s: &str) -> Option<f64> {
    let s = s.trim();
    for (suffix, multiplier) in DURATION_UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: f64 = val_str.parse().ok()?;
            return Some(val * multiplier);
        }
    }
    None
}

/// Format a value for display according to its kind.
pub fn format_value(value: f64, kind: VarKind) -> String {
    match kind {
        VarKind::Memory => format_bytes(value),
        VarKind::Duration => format_duration(value),
        VarKind::Gauge | VarKind::Counter => format_number(value),
    }
}

/// Format nanoseconds into the shortest readable unit.
pub fn format_duration(nanos: f64) -> String {
    if nanos == 0.0 {
        "0ns".to_string()
    } else if nanos < 1_000.0 {
        format!("{:.0}ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2}µs", nanos / 1_000.0)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2}ms", nanos / 1_000_000.0)
    } else {
        format!("{:.2}s", nanos / 1_000_000_000.0)
    }
}

/// Format a byte count in human units (base 1024).
pub fn format_bytes(bytes: f64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut value = bytes;
    let mut unit = 0;
    while value.abs() >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{:.0}{}", value, UNITS[unit])
    } else {
        format!("{:.2}{}", value, UNITS[unit])
    }
}

/// Format a plain number, dropping the fraction when it is integral.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_duration() {
        assert_eq!(parse_go_duration("0ns"), Some(0.0));
        assert_eq!(parse_go_duration("16.958µs"), Some(16_958.0));
        let ms = parse_go_duration("988.82ms").unwrap();
        assert!((ms - 988_820_000.0).abs() < 1.0);
        let s = parse_go_duration("29.99s").unwrap();
        assert!((s - 29_990_000_000.0).abs() < 1.0);
        assert_eq!(parse_go_duration("12"), None);
        assert_eq!(parse_go_duration("fast"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0ns");
        assert_eq!(format_duration(512.0), "512ns");
        assert_eq!(format_duration(1_500.0), "1.50µs");
        assert_eq!(format_duration(2_250_000.0), "2.25ms");
        assert_eq!(format_duration(3_000_000_000.0), "3.00s");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512.0), "512B");
        assert_eq!(format_bytes(2048.0), "2.00KB");
        assert_eq!(format_bytes(5.5 * 1024.0 * 1024.0), "5.50MB");
        assert_eq!(format_bytes(3.0 * 1024.0 * 1024.0 * 1024.0), "3.00GB");
    }

    #[test]
    fn test_format_value_by_kind() {
        assert_eq!(format_value(2048.0, VarKind::Memory), "2.00KB");
        assert_eq!(format_value(1_500.0, VarKind::Duration), "1.50µs");
        assert_eq!(format_value(42.0, VarKind::Gauge), "42");
        assert_eq!(format_value(42.5, VarKind::Counter), "42.50");
    }
}

//! The variable specification mini-language.
//!
//! Variables to monitor are described by a comma-separated list of
//! tokens of the form `[kind:]path[ name]`, e.g.
//! `mem:memstats.Alloc,duration:Response.Mean,Goroutines`.
//!
//! The optional kind prefix selects how values are interpreted and
//! formatted; the dot-separated path navigates the fetched JSON tree.
//! Parsing is pure text-to-structure, no I/O happens here.

use thiserror::Error;

/// Errors raised while parsing variable specs or port expressions.
///
/// All of these are configuration errors: they are reported to the
/// operator at startup and the process does not start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    /// A comma-separated token was empty.
    #[error("empty variable spec")]
    EmptyToken,

    /// A kind prefix was given but no path followed it.
    #[error("variable spec '{0}' has an empty path")]
    EmptyPath(String),

    /// The path contained an empty segment (e.g. `memstats..Alloc`).
    #[error("variable spec '{0}' has an empty path segment")]
    EmptySegment(String),

    /// Two specs in the same list resolved to the same display name.
    #[error("duplicate variable name '{0}'")]
    DuplicateName(String),

    /// A ports entry was not a port, a port range, or a URL.
    #[error("invalid port or URL '{0}'")]
    InvalidPort(String),

    /// A port range had a non-numeric bound or start > end.
    #[error("invalid port range '{0}'")]
    InvalidRange(String),
}

/// How a variable's raw values are interpreted and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    /// Instantaneous value, displayed as-is.
    Gauge,
    /// Cumulative nanoseconds, displayed as the per-interval delta.
    Duration,
    /// Instantaneous byte count, displayed as-is in human units.
    Memory,
    /// Cumulative count, displayed as the per-interval delta.
    Counter,
}

impl VarKind {
    /// Whether raw values accumulate monotonically and must be
    /// displayed as the delta since the previous poll.
    pub fn is_cumulative(self) -> bool {
        matches!(self, VarKind::Duration | VarKind::Counter)
    }

    /// Map a recognized kind prefix; anything else stays part of the path.
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "mem" => Some(VarKind::Memory),
            "duration" => Some(VarKind::Duration),
            "counter" => Some(VarKind::Counter),
            _ => None,
        }
    }
}

/// One variable to track, produced once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarSpec {
    /// Display label; defaults to the path text when not overridden.
    pub name: String,
    pub kind: VarKind,
    /// Dot-split field path; a segment indexes objects by field name
    /// and arrays by parsed integer. Never empty.
    pub path: Vec<String>,
}

/// Parse a comma-separated list of variable specs.
///
/// Display names must be unique within the list; a collision is a
/// configuration error rather than a silent last-wins.
pub fn parse_vars(input: &str) -> Result<Vec<VarSpec>, SpecError> {
    let mut specs: Vec<VarSpec> = Vec::new();
    for token in input.split(',') {
        let spec = parse_one(token.trim())?;
        if specs.iter().any(|s| s.name == spec.name) {
            return Err(SpecError::DuplicateName(spec.name));
        }
        specs.push(spec);
    }
    Ok(specs)
}

/// Parse a single `[kind:]path[ name]` token.
fn parse_one(token: &str) -> Result<VarSpec, SpecError> {
    if token.is_empty() {
        return Err(SpecError::EmptyToken);
    }

    // Optional name override after the first whitespace.
    let (token, name_override) = match token.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim().to_string())),
        None => (token, None),
    };

    // A prefix only counts as a kind when it is one of the recognized
    // keywords; `Counter` with no colon is a Gauge named "Counter".
    let (kind, path_text) = match token.split_once(':') {
        Some((prefix, rest)) => match VarKind::from_prefix(prefix) {
            Some(kind) => (kind, rest),
            None => (VarKind::Gauge, token),
        },
        None => (VarKind::Gauge, token),
    };

    if path_text.is_empty() {
        return Err(SpecError::EmptyPath(token.to_string()));
    }

    let path: Vec<String> = path_text.split('.').map(str::to_string).collect();
    if path.iter().any(String::is_empty) {
        return Err(SpecError::EmptySegment(token.to_string()));
    }

    Ok(VarSpec {
        name: name_override.unwrap_or_else(|| path_text.to_string()),
        kind,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds_and_paths() {
        let specs = parse_vars("mem:memstats.Alloc,duration:Response.Mean,Counter").unwrap();
        assert_eq!(specs.len(), 3);

        assert_eq!(specs[0].kind, VarKind::Memory);
        assert_eq!(specs[0].path, vec!["memstats", "Alloc"]);
        assert_eq!(specs[0].name, "memstats.Alloc");

        assert_eq!(specs[1].kind, VarKind::Duration);
        assert_eq!(specs[1].path, vec!["Response", "Mean"]);

        // A bare kind-looking word is a Gauge path, not a kind.
        assert_eq!(specs[2].kind, VarKind::Gauge);
        assert_eq!(specs[2].path, vec!["Counter"]);
        assert_eq!(specs[2].name, "Counter");
    }

    #[test]
    fn test_unrecognized_prefix_stays_in_path() {
        let specs = parse_vars("foo:bar.baz").unwrap();
        assert_eq!(specs[0].kind, VarKind::Gauge);
        assert_eq!(specs[0].path, vec!["foo:bar", "baz"]);
    }

    #[test]
    fn test_name_override() {
        let specs = parse_vars("counter:cmdline.0 First Arg").unwrap();
        assert_eq!(specs[0].name, "First Arg");
        assert_eq!(specs[0].kind, VarKind::Counter);
        assert_eq!(specs[0].path, vec!["cmdline", "0"]);
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(parse_vars("Goroutines,,Uptime"), Err(SpecError::EmptyToken));
    }

    #[test]
    fn test_kind_with_empty_path() {
        assert!(matches!(parse_vars("mem:"), Err(SpecError::EmptyPath(_))));
    }

    #[test]
    fn test_empty_segment() {
        assert!(matches!(
            parse_vars("memstats..Alloc"),
            Err(SpecError::EmptySegment(_))
        ));
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(
            parse_vars("mem:memstats.Alloc,duration:memstats.Alloc"),
            Err(SpecError::DuplicateName("memstats.Alloc".to_string()))
        );
    }

    #[test]
    fn test_cumulative_kinds() {
        assert!(VarKind::Counter.is_cumulative());
        assert!(VarKind::Duration.is_cumulative());
        assert!(!VarKind::Gauge.is_cumulative());
        assert!(!VarKind::Memory.is_cumulative());
    }
}

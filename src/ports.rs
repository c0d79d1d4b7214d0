//! Expansion of port/URL range expressions into resolved base URLs.
//!
//! The `--ports` argument accepts a comma-separated mix of bare ports,
//! inclusive port ranges, host:port pairs and full URLs:
//!
//! ```text
//! 1234                  -> http://localhost:1234
//! 8080-8082             -> http://localhost:8080 .. http://localhost:8082
//! remoteapp:80          -> http://remoteapp:80
//! https://example.com:80-81 -> https://example.com:80, https://example.com:81
//! ```
//!
//! The core only ever sees the expanded URL list; the endpoint path is
//! appended by the caller.

use crate::vars::SpecError;

/// Expand a ports expression into an ordered list of base URLs.
pub fn parse_ports(input: &str) -> Result<Vec<String>, SpecError> {
    let mut urls = Vec::new();
    for entry in input.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            return Err(SpecError::InvalidPort(entry.to_string()));
        }
        expand_entry(entry, &mut urls)?;
    }
    Ok(urls)
}

/// Expand one comma-separated entry, pushing its URLs in port order.
fn expand_entry(entry: &str, urls: &mut Vec<String>) -> Result<(), SpecError> {
    // Peel off an explicit scheme; default to http.
    let (scheme, rest) = match entry.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("http", entry),
    };
    if rest.is_empty() {
        return Err(SpecError::InvalidPort(entry.to_string()));
    }

    // Everything after the last colon is the port part; with no colon
    // the whole entry must be a port or range on localhost.
    let (host, port_part) = match rest.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => (host, port),
        Some(_) => return Err(SpecError::InvalidPort(entry.to_string())),
        None => ("localhost", rest),
    };

    let (start, end) = parse_range(entry, port_part)?;
    for port in start..=end {
        urls.push(format!("{}://{}:{}", scheme, host, port));
    }
    Ok(())
}

/// Parse `N` or `N-M` into an inclusive range.
fn parse_range(entry: &str, port_part: &str) -> Result<(u16, u16), SpecError> {
    match port_part.split_once('-') {
        Some((start, end)) => {
            let start: u16 = start
                .parse()
                .map_err(|_| SpecError::InvalidRange(entry.to_string()))?;
            let end: u16 = end
                .parse()
                .map_err(|_| SpecError::InvalidRange(entry.to_string()))?;
            if start > end {
                return Err(SpecError::InvalidRange(entry.to_string()));
            }
            Ok((start, end))
        }
        None => {
            let port: u16 = port_part
                .parse()
                .map_err(|_| SpecError::InvalidPort(entry.to_string()))?;
            Ok((port, port))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_port() {
        assert_eq!(parse_ports("1234").unwrap(), vec!["http://localhost:1234"]);
    }

    #[test]
    fn test_port_range() {
        assert_eq!(
            parse_ports("8080-8082").unwrap(),
            vec![
                "http://localhost:8080",
                "http://localhost:8081",
                "http://localhost:8082"
            ]
        );
    }

    #[test]
    fn test_host_and_port() {
        assert_eq!(parse_ports("remoteapp:80").unwrap(), vec!["http://remoteapp:80"]);
    }

    #[test]
    fn test_url_with_range() {
        assert_eq!(
            parse_ports("https://example.com:80-81").unwrap(),
            vec!["https://example.com:80", "https://example.com:81"]
        );
    }

    #[test]
    fn test_mixed_entries_keep_order() {
        let urls = parse_ports("23000-23001,http://example.com:80").unwrap();
        assert_eq!(
            urls,
            vec![
                "http://localhost:23000",
                "http://localhost:23001",
                "http://example.com:80"
            ]
        );
    }

    #[test]
    fn test_reversed_range() {
        assert!(matches!(
            parse_ports("8082-8080"),
            Err(SpecError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_garbage() {
        assert!(matches!(parse_ports("not-a-port"), Err(SpecError::InvalidRange(_))));
        assert!(matches!(parse_ports(""), Err(SpecError::InvalidPort(_))));
    }
}

//! # Scan Range Model
//!
//! Defines the unit of scan input: an IPv4 network range in CIDR
//! notation, as published in remote range lists.
//!
//! A range list body is newline-delimited; blank lines and `#` comment
//! lines carry no ranges and are filtered out during parsing.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::warn;

/// A block of IPv4 addresses in CIDR notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrRange {
    pub network: Ipv4Addr,
    pub prefix: u8,
}

impl CidrRange {
    pub fn new(network: Ipv4Addr, prefix: u8) -> Self {
        Self { network, prefix }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeParseError {
    #[error("invalid address in '{0}'")]
    InvalidAddr(String),
    #[error("invalid prefix in '{0}', expected 0-32")]
    InvalidPrefix(String),
}

impl FromStr for CidrRange {
    type Err = RangeParseError;

    /// Parses `a.b.c.d/prefix`. A bare address implies `/32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((addr_str, prefix_str)) = s.split_once('/') else {
            let network = s
                .parse::<Ipv4Addr>()
                .map_err(|_| RangeParseError::InvalidAddr(s.to_string()))?;
            return Ok(Self::new(network, 32));
        };

        let network = addr_str
            .parse::<Ipv4Addr>()
            .map_err(|_| RangeParseError::InvalidAddr(s.to_string()))?;

        let prefix = prefix_str
            .parse::<u8>()
            .ok()
            .filter(|p| *p <= 32)
            .ok_or_else(|| RangeParseError::InvalidPrefix(s.to_string()))?;

        Ok(Self::new(network, prefix))
    }
}

impl fmt::Display for CidrRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

/// Parses a range list body into scan targets, preserving order.
///
/// Blank lines and `#` comment lines are dropped. A line that survives
/// filtering but does not parse as an IPv4 CIDR is skipped with a
/// warning instead of being handed to the scanner verbatim.
pub fn parse_range_list(text: &str) -> Vec<CidrRange> {
    let mut ranges: Vec<CidrRange> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line.parse::<CidrRange>() {
            Ok(range) => ranges.push(range),
            Err(e) => warn!("Skipping unusable range line: {e}"),
        }
    }

    ranges
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cidr() {
        assert_eq!(
            "104.16.0.0/13".parse::<CidrRange>(),
            Ok(CidrRange::new(Ipv4Addr::new(104, 16, 0, 0), 13))
        );

        // Bare address implies /32
        assert_eq!(
            "203.0.113.5".parse::<CidrRange>(),
            Ok(CidrRange::new(Ipv4Addr::new(203, 0, 113, 5), 32))
        );

        // Round-trips through Display
        let range: CidrRange = "172.64.0.0/17".parse().unwrap();
        assert_eq!(range.to_string(), "172.64.0.0/17");
    }

    #[test]
    fn test_parse_cidr_errors() {
        assert!(matches!(
            "not-a-range".parse::<CidrRange>(),
            Err(RangeParseError::InvalidAddr(_))
        ));
        assert!(matches!(
            "10.0.0.0/33".parse::<CidrRange>(),
            Err(RangeParseError::InvalidPrefix(_))
        ));
        assert!(matches!(
            "10.0.0.0/x".parse::<CidrRange>(),
            Err(RangeParseError::InvalidPrefix(_))
        ));
        assert!(matches!(
            "10.0.0.256/8".parse::<CidrRange>(),
            Err(RangeParseError::InvalidAddr(_))
        ));
    }

    #[test]
    fn test_parse_range_list_filters_comments_and_blanks() {
        let body = "# proxy ranges\n\n104.16.0.0/13\n  \n# trailing comment\n172.64.0.0/17\n";
        let ranges = parse_range_list(body);

        assert_eq!(
            ranges,
            vec![
                CidrRange::new(Ipv4Addr::new(104, 16, 0, 0), 13),
                CidrRange::new(Ipv4Addr::new(172, 64, 0, 0), 17),
            ]
        );
    }

    #[test]
    fn test_parse_range_list_only_comments_is_empty() {
        let body = "# nothing here\n\n# still nothing\n";
        assert!(parse_range_list(body).is_empty());
    }

    #[test]
    fn test_parse_range_list_skips_malformed_lines() {
        let body = "104.16.0.0/13\ngarbage\n172.64.0.0/17\n";
        let ranges = parse_range_list(body);
        assert_eq!(ranges.len(), 2);
    }
}

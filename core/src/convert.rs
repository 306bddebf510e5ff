//! Reshapes scanner list output into `address:port` lines.
//!
//! masscan's `-oL` format is one whitespace-separated record per line:
//!
//! ```text
//! open tcp 443 203.0.113.5 1690000000
//! ```
//!
//! Only `open` records are kept. The trailing timestamp is not used;
//! a record is valid with or without it as long as the state, protocol,
//! port and address fields are present.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use edgesift_common::network::endpoint::Endpoint;
use tracing::warn;

/// Parses one scanner output line into an endpoint.
///
/// Returns `None` for anything that is not a well-formed `open` record:
/// comment lines, `closed` records, short lines, or unparsable port and
/// address fields. Such lines are dropped by the converter.
pub fn parse_scan_line(line: &str) -> Option<Endpoint> {
    let mut fields = line.split_whitespace();

    if fields.next()? != "open" {
        return None;
    }
    let _proto = fields.next()?;
    let port = fields.next()?.parse().ok()?;
    let addr = fields.next()?.parse().ok()?;

    Some(Endpoint::new(addr, port))
}

/// Rewrites the scanner list file at `input` into one `address:port`
/// line per open record at `output`, preserving input order.
///
/// Returns the number of endpoints written.
pub fn convert_scan_results(input: &Path, output: &Path) -> Result<usize> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?,
    );

    let mut count = 0;
    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {}", input.display()))?;
        if let Some(endpoint) = parse_scan_line(&line) {
            writeln!(writer, "{endpoint}")
                .with_context(|| format!("failed to write {}", output.display()))?;
            count += 1;
        }
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", output.display()))?;

    if count == 0 {
        warn!("Scanner reported no open ports, endpoint list is empty");
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_parse_open_record() {
        let ep = parse_scan_line("open tcp 443 203.0.113.5 1690000000").unwrap();
        assert_eq!(ep.addr, IpAddr::V4(Ipv4Addr::new(203, 0, 113, 5)));
        assert_eq!(ep.port, 443);
        assert_eq!(ep.to_string(), "203.0.113.5:443");
    }

    #[test]
    fn test_parse_record_without_timestamp() {
        // Four fields are enough; the timestamp is optional.
        assert_eq!(
            parse_scan_line("open tcp 8443 198.51.100.9"),
            Some(Endpoint::new(
                IpAddr::V4(Ipv4Addr::new(198, 51, 100, 9)),
                8443
            ))
        );
    }

    #[test]
    fn test_non_open_records_are_dropped() {
        assert_eq!(parse_scan_line("closed tcp 443 203.0.113.5 1690000000"), None);
        assert_eq!(parse_scan_line("#masscan"), None);
        assert_eq!(parse_scan_line("# end"), None);
        assert_eq!(parse_scan_line(""), None);
    }

    #[test]
    fn test_short_or_mangled_records_are_dropped() {
        assert_eq!(parse_scan_line("open tcp 443"), None);
        assert_eq!(parse_scan_line("open tcp notaport 203.0.113.5 0"), None);
        assert_eq!(parse_scan_line("open tcp 443 nothost 0"), None);
    }
}

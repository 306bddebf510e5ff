//! An address paired with a port, the unit of latency-test input.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// A scannable `address:port` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub addr: IpAddr,
    pub port: u16,
}

impl Endpoint {
    pub fn new(addr: IpAddr, port: u16) -> Self {
        Self { addr, port }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid endpoint '{0}', expected address:port")]
pub struct EndpointParseError(String);

impl FromStr for Endpoint {
    type Err = EndpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // rsplit keeps IPv6 addresses with embedded colons intact
        let (addr_str, port_str) = s
            .rsplit_once(':')
            .ok_or_else(|| EndpointParseError(s.to_string()))?;

        let addr = addr_str
            .parse::<IpAddr>()
            .map_err(|_| EndpointParseError(s.to_string()))?;
        let port = port_str
            .parse::<u16>()
            .map_err(|_| EndpointParseError(s.to_string()))?;

        Ok(Self::new(addr, port))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}

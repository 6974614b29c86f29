//! Picks the host address advertised in the pairing code

use std::io::{BufRead, Write};
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("no non-loopback IPv4 address found; set `ip` in the config file")]
    NoCandidates,

    #[error("input closed before an address was chosen")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-loopback IPv4 addresses of this host, in the order the OS reports them
pub fn enumerate() -> Vec<Ipv4Addr> {
    let interfaces = match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces,
        Err(e) => {
            warn!("Failed to enumerate network interfaces: {}", e);
            return Vec::new();
        }
    };

    interfaces
        .iter()
        .filter_map(|iface| match iface.ip() {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        })
        .filter(|ip| !ip.is_loopback())
        .collect()
}

/// Parse a 1-based menu choice into an index into `count` candidates
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Decides which address goes into the pairing code
pub trait AddressResolver {
    fn resolve(&mut self, candidates: &[Ipv4Addr]) -> Result<String, AddressError>;
}

/// Address from the config file, used verbatim
pub struct FixedAddress(pub String);

impl AddressResolver for FixedAddress {
    fn resolve(&mut self, _candidates: &[Ipv4Addr]) -> Result<String, AddressError> {
        Ok(self.0.clone())
    }
}

/// Prints the candidates and asks the operator for a number until it gets a valid one
pub struct InteractiveSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> AddressResolver for InteractiveSelector<R, W> {
    fn resolve(&mut self, candidates: &[Ipv4Addr]) -> Result<String, AddressError> {
        if candidates.is_empty() {
            return Err(AddressError::NoCandidates);
        }

        writeln!(self.output, "Local IP addresses:")?;
        for (i, ip) in candidates.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, ip)?;
        }

        let mut line = String::new();
        loop {
            write!(
                self.output,
                "Enter the number of the address to advertise (used for the pairing code only): "
            )?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AddressError::InputClosed);
            }
            if let Some(index) = parse_choice(&line, candidates.len()) {
                return Ok(candidates[index].to_string());
            }
            writeln!(self.output, "Invalid choice, please try again.")?;
        }
    }
}

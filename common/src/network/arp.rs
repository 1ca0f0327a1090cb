use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

static IPV4_PATTERN: OnceLock<Regex> = OnceLock::new();
static MAC_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Dotted-decimal shape only. `999.1.1.1` is accepted, octet ranges are not checked.
fn ipv4_pattern() -> &'static Regex {
    IPV4_PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}$").expect("invalid IPv4 pattern")
    })
}

fn mac_pattern() -> &'static Regex {
    MAC_PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$").expect("invalid MAC pattern")
    })
}

/// A neighbour listed in the operating system's ARP cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEntry {
    /// The IPv4-shaped token the address was listed with.
    pub ip: String,
    /// The hardware address exactly as the platform printed it.
    pub mac: String,
}

impl ArpEntry {
    pub fn new(ip: impl Into<String>, mac: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            mac: mac.into(),
        }
    }
}

/// Extracts the neighbours from the text printed by `arp -a`.
///
/// A line counts when it has at least three whitespace separated tokens, the
/// first one looks like an IPv4 address and the second one like a MAC address
/// (`:` or `-` separated). Interface headers, column titles and incomplete
/// entries are skipped. Entries keep the order in which they were printed.
pub fn parse_arp_output(output: &str) -> Vec<ArpEntry> {
    output.lines().filter_map(parse_arp_line).collect()
}

fn parse_arp_line(line: &str) -> Option<ArpEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }

    let (ip, mac) = (tokens[0], tokens[1]);
    if !ipv4_pattern().is_match(ip) || !mac_pattern().is_match(mac) {
        trace!("Skipping ARP line '{}'", line.trim());
        return None;
    }

    Some(ArpEntry::new(ip, mac))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

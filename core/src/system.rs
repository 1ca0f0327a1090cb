use std::io::ErrorKind;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use ouilookup_common::network::arp::{self, ArpEntry};
use ouilookup_common::system::{ArpTable, ArpTableError, Platform};

const ARP_COMMAND: &str = "arp";
/// Lists every interface instead of the default one only.
const ARP_ALL_INTERFACES: &str = "-a";

/// Reads the ARP cache by running `arp -a`. Windows only.
pub struct OsArpTable {
    platform: Platform,
    command: String,
}

impl OsArpTable {
    pub fn new() -> Self {
        Self::with_command(Platform::current(), ARP_COMMAND)
    }

    /// Overrides the platform check and the program that gets spawned.
    pub fn with_command(platform: Platform, command: impl Into<String>) -> Self {
        Self {
            platform,
            command: command.into(),
        }
    }

    async fn run_command(&self) -> Result<String, ArpTableError> {
        let output = Command::new(&self.command)
            .arg(ARP_ALL_INTERFACES)
            .output()
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ArpTableError::CommandNotFound {
                    command: self.command.clone(),
                },
                _ => ArpTableError::Io {
                    command: self.command.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            return Err(ArpTableError::CommandFailed {
                command: self.command.clone(),
                status: output.status,
            });
        }

        Ok(decode_latin1(&output.stdout))
    }
}

impl Default for OsArpTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArpTable for OsArpTable {
    async fn list_entries(&self) -> Result<Vec<ArpEntry>, ArpTableError> {
        if !self.platform.supports_arp_table() {
            return Err(ArpTableError::Unsupported { os: self.platform });
        }

        let stdout = self.run_command().await?;
        let entries = arp::parse_arp_output(&stdout);

        info!("Found {} ARP entries", entries.len());
        for entry in &entries {
            debug!("ARP entry {} at {}", entry.mac, entry.ip);
        }

        Ok(entries)
    }
}

/// `arp` prints in the console code page, every byte maps to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use std::fmt;
use std::process::ExitStatus;

use async_trait::async_trait;
use thiserror::Error;

use crate::network::arp::ArpEntry;

/// Operating system family, as far as ARP table access is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other(&'static str),
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other(std::env::consts::OS)
        }
    }

    pub fn supports_arp_table(&self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::Other(os) => f.write_str(os),
        }
    }
}

#[derive(Debug, Error)]
pub enum ArpTableError {
    #[error("reading the ARP table is only supported on Windows (running on {os})")]
    Unsupported { os: Platform },
    #[error("command '{command}' was not found on this system")]
    CommandNotFound { command: String },
    #[error("'{command}' exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
    #[error("failed to run '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Access to the neighbours the operating system currently knows about.
#[async_trait]
pub trait ArpTable: Send + Sync {
    /// Lists the ARP cache in the order the platform reports it.
    async fn list_entries(&self) -> Result<Vec<ArpEntry>, ArpTableError>;
}

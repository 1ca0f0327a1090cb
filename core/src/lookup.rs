//! Orchestrates vendor lookups for the two modes of the tool.
//!
//! The service only talks to the [`VendorRepository`] and [`ArpTable`] ports,
//! so the CLI can wire in the real adapters and tests can wire in stubs.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::{debug, error};

use ouilookup_common::network::arp::ArpEntry;
use ouilookup_common::network::mac;
use ouilookup_common::system::{ArpTable, ArpTableError};
use ouilookup_common::vendors::{LookupFailure, Vendor, VendorLookup, VendorRepository};

/// Result of looking up one address typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacReport {
    /// The address as it was typed.
    pub input: String,
    /// The address sent to the lookup service.
    pub canonical: String,
    pub lookup: VendorLookup,
}

/// Result of looking up one ARP table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpReport {
    pub entry: ArpEntry,
    pub lookup: VendorLookup,
}

pub struct LookupService {
    vendor_repo: Arc<dyn VendorRepository>,
    arp_table: Box<dyn ArpTable>,
    jobs: usize,
}

impl LookupService {
    pub fn new(
        vendor_repo: Arc<dyn VendorRepository>,
        arp_table: Box<dyn ArpTable>,
        jobs: usize,
    ) -> Self {
        Self {
            vendor_repo,
            arp_table,
            jobs: jobs.max(1),
        }
    }

    /// Normalizes `input` and resolves its vendor.
    pub async fn lookup_mac(&self, input: &str) -> MacReport {
        let canonical = mac::normalize(input);
        if !mac::is_canonical(&canonical) {
            debug!("'{input}' does not look like a MAC address, looking up '{canonical}' anyway");
        }

        let lookup = self.vendor_repo.get_vendor(&canonical).await;
        MacReport {
            input: input.to_string(),
            canonical,
            lookup,
        }
    }

    pub async fn arp_entries(&self) -> Result<Vec<ArpEntry>, ArpTableError> {
        self.arp_table.list_entries().await
    }

    /// Resolves the vendor of every entry, at most `jobs` requests at a time.
    ///
    /// Entries are looked up by their raw address. The returned reports are in
    /// the same order as `entries`, whatever order the lookups complete in.
    /// `on_resolved` is called with the number of reports collected so far.
    pub async fn resolve_entries(
        &self,
        entries: Vec<ArpEntry>,
        on_resolved: Option<Box<dyn Fn(usize) + Send + Sync>>,
    ) -> Vec<ArpReport> {
        let permits = Arc::new(Semaphore::new(self.jobs));
        let mut handles = Vec::with_capacity(entries.len());

        for entry in entries {
            let repo = Arc::clone(&self.vendor_repo);
            let permits = Arc::clone(&permits);
            let mac = entry.mac.clone();

            let handle = tokio::spawn(async move {
                let _permit = permits.acquire_owned().await;
                repo.get_vendor(&mac).await
            });
            handles.push((entry, handle));
        }

        let mut reports = Vec::with_capacity(handles.len());
        for (entry, handle) in handles {
            let lookup = match handle.await {
                Ok(lookup) => lookup,
                Err(e) => {
                    error!("Lookup for {} did not finish: {}", entry.mac, e);
                    VendorLookup::new(
                        Vendor::Unavailable(LookupFailure::Aborted(e.to_string())),
                        Duration::ZERO,
                    )
                }
            };
            reports.push(ArpReport { entry, lookup });

            if let Some(cb) = &on_resolved {
                cb(reports.len());
            }
        }
        reports
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

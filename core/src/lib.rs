//! Adapters and services behind the `ouilookup` CLI.
//!
//! * [`vendors`]: the maclookup.app HTTP adapter for [`VendorRepository`](ouilookup_common::vendors::VendorRepository).
//! * [`system`]: the `arp -a` adapter for [`ArpTable`](ouilookup_common::system::ArpTable).
//! * [`lookup`]: the service the CLI drives.

pub mod lookup;
pub mod system;
pub mod vendors;

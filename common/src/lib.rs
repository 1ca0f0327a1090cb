//! Shared building blocks for `ouilookup`.
//!
//! * [`network`]: MAC address normalization and ARP table text parsing.
//! * [`vendors`]: the vendor lookup port and its result types.
//! * [`system`]: the ARP table port and its error type.
//! * [`config`]: runtime configuration assembled by the CLI.

pub mod config;
pub mod network;
pub mod system;
pub mod vendors;

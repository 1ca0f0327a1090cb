//! Integration tests for `ouilookup`, run against local stub servers.

pub mod util;

#[cfg(test)]
mod lookup;

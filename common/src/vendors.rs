use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use thiserror::Error;

/// Printed in place of a vendor name whenever a lookup did not produce one.
pub const NOT_FOUND: &str = "Not Found";

/// Defines the contract for resolving device manufacturers from MAC addresses.
///
/// Implementations never fail: every problem is folded into
/// [`Vendor::Unavailable`] so one bad lookup cannot abort the others.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Looks up the vendor for `mac` and reports how long it took.
    ///
    /// `mac` is passed to the backend untouched, callers normalize it first if they want to.
    async fn get_vendor(&self, mac: &str) -> VendorLookup;
}

/// Why a lookup did not yield a vendor name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("no company registered for this address")]
    NoCompany,
    #[error("lookup service answered with HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable response body: {0}")]
    MalformedBody(String),
    #[error("lookup task aborted: {0}")]
    Aborted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vendor {
    Resolved(String),
    Unavailable(LookupFailure),
}

impl Vendor {
    pub fn name(&self) -> Option<&str> {
        match self {
            Vendor::Resolved(name) => Some(name),
            Vendor::Unavailable(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Vendor::Resolved(_))
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(NOT_FOUND))
    }
}

impl From<Result<String, LookupFailure>> for Vendor {
    fn from(result: Result<String, LookupFailure>) -> Self {
        match result {
            Ok(name) => Vendor::Resolved(name),
            Err(failure) => Vendor::Unavailable(failure),
        }
    }
}

/// Outcome of one vendor lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLookup {
    pub vendor: Vendor,
    pub elapsed: Duration,
}

impl VendorLookup {
    pub fn new(vendor: Vendor, elapsed: Duration) -> Self {
        Self { vendor, elapsed }
    }

    /// Elapsed time in whole milliseconds, truncated.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Measures a lookup from request start to its last exit point.
///
/// [`LookupTimer::finish`] consumes the timer, so whatever path produced the
/// outcome also stamps the duration.
#[derive(Debug)]
pub struct LookupTimer {
    started: Instant,
}

impl LookupTimer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn finish(self, outcome: Result<String, LookupFailure>) -> VendorLookup {
        VendorLookup::new(outcome.into(), self.started.elapsed())
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

use std::time::Duration;

/// Public endpoint of the maclookup.app v2 API. The address is appended as the last path segment.
pub const DEFAULT_API_URL: &str = "https://api.maclookup.app/v2/macs";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_JOBS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the vendor lookup service, without a trailing slash.
    pub api_url: String,
    /// Upper bound for a single HTTP lookup, connect included.
    pub timeout: Duration,
    /// Maximum number of lookups in flight while resolving the ARP table.
    ///
    /// `1` resolves entries strictly one after another.
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            jobs: DEFAULT_JOBS,
        }
    }
}

impl Config {
    /// Builds the lookup URL for one address.
    pub fn lookup_url(&self, mac: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), mac)
    }
}

use async_trait::async_trait;
use ouilookup_common::config::Config;
use ouilookup_common::vendors::{LookupFailure, LookupTimer, VendorLookup, VendorRepository};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Literal some backends put in `company` instead of leaving it empty.
const NOT_FOUND_MARKER: &str = "not found";

/// Resolves vendors through the maclookup.app REST API, one GET per address.
pub struct HttpVendorRepo {
    client: Client,
    cfg: Config,
}

impl HttpVendorRepo {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .user_agent(concat!("ouilookup/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            cfg: cfg.clone(),
        })
    }

    async fn fetch_company(&self, mac: &str) -> Result<String, LookupFailure> {
        let url = self.cfg.lookup_url(mac);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupFailure::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LookupFailure::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupFailure::Transport(e.to_string()))?;

        company_from_body(&body)
    }
}

#[async_trait]
impl VendorRepository for HttpVendorRepo {
    async fn get_vendor(&self, mac: &str) -> VendorLookup {
        let timer = LookupTimer::start();
        let outcome = self.fetch_company(mac).await;

        if let Err(failure) = &outcome {
            debug!("No vendor for {mac}: {failure}");
        }

        timer.finish(outcome)
    }
}

/// Picks the company name out of a `200 OK` body.
fn company_from_body(body: &[u8]) -> Result<String, LookupFailure> {
    let body: Value =
        serde_json::from_slice(body).map_err(|e| LookupFailure::MalformedBody(e.to_string()))?;

    let fields = body
        .as_object()
        .ok_or_else(|| LookupFailure::MalformedBody("expected a JSON object".to_string()))?;

    match fields.get("company") {
        None | Some(Value::Null) => Err(LookupFailure::NoCompany),
        Some(Value::String(company))
            if company.is_empty() || company.eq_ignore_ascii_case(NOT_FOUND_MARKER) =>
        {
            Err(LookupFailure::NoCompany)
        }
        Some(Value::String(company)) => Ok(company.clone()),
        Some(other) => Err(LookupFailure::MalformedBody(format!(
            "'company' is not a string: {other}"
        ))),
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

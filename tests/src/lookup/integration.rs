#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use ouilookup_common::config::Config;
use ouilookup_common::network::arp::ArpEntry;
use ouilookup_common::system::{ArpTableError, Platform};
use ouilookup_common::vendors::{LookupFailure, Vendor, VendorRepository};
use ouilookup_core::lookup::LookupService;
use ouilookup_core::system::OsArpTable;
use ouilookup_core::vendors::HttpVendorRepo;

use crate::util::{self, StubServer};

fn config(api_url: String) -> Config {
    Config {
        api_url,
        timeout: Duration::from_secs(5),
        jobs: 2,
    }
}

#[tokio::test]
async fn resolves_company_from_stub() {
    let server = StubServer::respond(200, r#"{"success":true,"found":true,"company":"Example Corp"}"#)
        .await
        .unwrap();
    let repo = HttpVendorRepo::new(&config(server.api_url())).unwrap();

    let lookup = repo.get_vendor("aa:bb:cc:dd:ee:ff").await;

    assert_eq!(lookup.vendor, Vendor::Resolved("Example Corp".to_string()));
    assert_eq!(
        server.request_lines(),
        vec!["GET /v2/macs/aa:bb:cc:dd:ee:ff HTTP/1.1"]
    );
}

#[tokio::test]
async fn not_found_company_is_sentinel() {
    for body in [r#"{"company":"not found"}"#, r#"{}"#, r#"{"company":""}"#] {
        let server = StubServer::respond(200, body).await.unwrap();
        let repo = HttpVendorRepo::new(&config(server.api_url())).unwrap();

        let lookup = repo.get_vendor("aa:bb:cc:dd:ee:ff").await;

        assert_eq!(
            lookup.vendor,
            Vendor::Unavailable(LookupFailure::NoCompany),
            "body {body}"
        );
        assert_eq!(lookup.vendor.to_string(), "Not Found");
    }
}

#[tokio::test]
async fn http_error_is_sentinel() {
    let server = StubServer::respond(404, r#"{"error":"not found"}"#).await.unwrap();
    let repo = HttpVendorRepo::new(&config(server.api_url())).unwrap();

    let lookup = repo.get_vendor("aa:bb:cc:dd:ee:ff").await;

    assert_eq!(lookup.vendor, Vendor::Unavailable(LookupFailure::Status(404)));
    assert_eq!(lookup.vendor.to_string(), "Not Found");
}

#[tokio::test]
async fn malformed_body_is_sentinel() {
    let server = StubServer::respond(200, "<html>busy</html>").await.unwrap();
    let repo = HttpVendorRepo::new(&config(server.api_url())).unwrap();

    let lookup = repo.get_vendor("aa:bb:cc:dd:ee:ff").await;

    assert!(matches!(
        lookup.vendor,
        Vendor::Unavailable(LookupFailure::MalformedBody(_))
    ));
}

#[tokio::test]
async fn refused_connection_is_sentinel() {
    let api_url = util::closed_api_url().await.unwrap();
    let repo = HttpVendorRepo::new(&config(api_url)).unwrap();

    let lookup = repo.get_vendor("aa:bb:cc:dd:ee:ff").await;

    assert!(matches!(
        lookup.vendor,
        Vendor::Unavailable(LookupFailure::Transport(_))
    ));
    assert_eq!(lookup.vendor.to_string(), "Not Found");
}

#[tokio::test]
async fn hung_service_hits_timeout() {
    let server = StubServer::silent().await.unwrap();
    let cfg = Config {
        timeout: Duration::from_millis(300),
        ..config(server.api_url())
    };
    let repo = HttpVendorRepo::new(&cfg).unwrap();

    let lookup = repo.get_vendor("aa:bb:cc:dd:ee:ff").await;

    assert!(matches!(
        lookup.vendor,
        Vendor::Unavailable(LookupFailure::Transport(_))
    ));
    assert!(lookup.elapsed >= Duration::from_millis(250));
    assert!(lookup.elapsed < Duration::from_secs(5));
}

#[tokio::test]
async fn table_entries_are_looked_up_raw_and_in_order() {
    let server = StubServer::respond(200, r#"{"company":"Example Corp"}"#).await.unwrap();
    let cfg = config(server.api_url());
    let service = LookupService::new(
        Arc::new(HttpVendorRepo::new(&cfg).unwrap()),
        Box::new(OsArpTable::with_command(Platform::Other("linux"), "arp")),
        cfg.jobs,
    );
    let entries = vec![
        ArpEntry::new("192.168.1.1", "aa-bb-cc-dd-ee-ff"),
        ArpEntry::new("192.168.1.2", "11-22-33-44-55-66"),
        ArpEntry::new("192.168.1.3", "00:50:56:c0:00:08"),
    ];

    let reports = service.resolve_entries(entries, None).await;

    let macs: Vec<&str> = reports.iter().map(|r| r.entry.mac.as_str()).collect();
    assert_eq!(macs, vec!["aa-bb-cc-dd-ee-ff", "11-22-33-44-55-66", "00:50:56:c0:00:08"]);
    assert!(reports.iter().all(|r| r.lookup.vendor.to_string() == "Example Corp"));

    let mut requested = server.request_lines();
    requested.sort();
    assert_eq!(
        requested,
        vec![
            "GET /v2/macs/00:50:56:c0:00:08 HTTP/1.1",
            "GET /v2/macs/11-22-33-44-55-66 HTTP/1.1",
            "GET /v2/macs/aa-bb-cc-dd-ee-ff HTTP/1.1",
        ]
    );
}

#[tokio::test]
async fn single_mac_is_normalized_before_request() {
    let server = StubServer::respond(200, r#"{"company":"Example Corp"}"#).await.unwrap();
    let cfg = config(server.api_url());
    let service = LookupService::new(
        Arc::new(HttpVendorRepo::new(&cfg).unwrap()),
        Box::new(OsArpTable::with_command(Platform::Other("linux"), "arp")),
        cfg.jobs,
    );

    let report = service.lookup_mac("AABB.CCDD.EEFF").await;

    assert_eq!(report.input, "AABB.CCDD.EEFF");
    assert_eq!(report.lookup.vendor.to_string(), "Example Corp");
    assert_eq!(
        server.request_lines(),
        vec!["GET /v2/macs/aa:bb:cc:dd:ee:ff HTTP/1.1"]
    );
}

#[tokio::test]
async fn arp_table_on_unsupported_platform_is_empty() {
    let service = LookupService::new(
        Arc::new(HttpVendorRepo::new(&Config::default()).unwrap()),
        Box::new(OsArpTable::with_command(Platform::Other("linux"), "arp")),
        1,
    );

    let result = service.arp_entries().await;

    assert!(matches!(result, Err(ArpTableError::Unsupported { .. })));
}

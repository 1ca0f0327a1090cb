use std::io::Write;

use ouilookup_core::lookup::LookupService;
use tracing::info;

use crate::terminal::print;
use crate::terminal::spinner::TableProgress;

const NO_ENTRIES: &str = "No ARP entries were found or the ARP table could not be read.";

pub async fn lookup_table<W: Write + ?Sized>(
    service: &LookupService,
    out: &mut W,
) -> anyhow::Result<()> {
    let entries = match service.arp_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            print::diagnostic(out, &e.to_string())?;
            Vec::new()
        }
    };

    if entries.is_empty() {
        print::println(out, NO_ENTRIES)?;
        return Ok(());
    }

    let progress = TableProgress::start(entries.len());
    let reports = service
        .resolve_entries(entries, Some(progress.reporter()))
        .await;
    progress.finish_and_clear();

    let unresolved = reports.iter().filter(|r| !r.lookup.vendor.is_resolved()).count();
    if unresolved == reports.len() {
        info!("None of the {} ARP entries could be resolved", reports.len());
    }

    print::header(out, "MAC/Vendor")?;
    for report in &reports {
        let line = format!(
            "{} / {}",
            print::mac(&report.entry.mac),
            print::vendor(&report.lookup.vendor)
        );
        print::println(out, &line)?;
    }
    Ok(())
}

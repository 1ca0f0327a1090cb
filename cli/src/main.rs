mod commands;
mod terminal;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use ouilookup_core::lookup::LookupService;
use ouilookup_core::system::OsArpTable;
use ouilookup_core::vendors::HttpVendorRepo;

use commands::Invocation;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let mut stdout = io::stdout();
    let status = commands::run(std::env::args_os(), wire_services, &mut stdout).await?;
    Ok(ExitCode::from(status))
}

fn wire_services(invocation: &Invocation) -> anyhow::Result<LookupService> {
    logging::init_logging(invocation.verbosity);

    let vendor_repo = Arc::new(HttpVendorRepo::new(&invocation.config)?);
    let arp_table = Box::new(OsArpTable::new());
    Ok(LookupService::new(vendor_repo, arp_table, invocation.config.jobs))
}

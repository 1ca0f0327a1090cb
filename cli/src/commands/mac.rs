use std::io::Write;

use colored::*;
use ouilookup_core::lookup::{LookupService, MacReport};

use crate::terminal::{colors, print};

/// Width of the longest key, `Response time`.
const KEY_WIDTH: usize = 13;

pub async fn lookup<W: Write + ?Sized>(
    service: &LookupService,
    input: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let report = service.lookup_mac(input).await;
    print_report(out, &report)?;
    Ok(())
}

fn print_report<W: Write + ?Sized>(out: &mut W, report: &MacReport) -> std::io::Result<()> {
    let elapsed: ColoredString =
        format!("{}ms", report.lookup.elapsed_ms()).color(colors::ACCENT);

    print::aligned_line(out, "MAC address", print::mac(&report.input), KEY_WIDTH)?;
    print::aligned_line(out, "Vendor", print::vendor(&report.lookup.vendor), KEY_WIDTH)?;
    print::aligned_line(out, "Response time", elapsed, KEY_WIDTH)
}

pub mod arp;
pub mod mac;

use std::ffi::OsString;
use std::io::Write;
use std::time::Duration;

use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use ouilookup_common::config::{Config, DEFAULT_API_URL};
use ouilookup_core::lookup::LookupService;

use crate::terminal::print;

pub const EXIT_OK: u8 = 0;
pub const EXIT_USAGE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "ouilookup")]
#[command(about = "Look up the manufacturer of a MAC address.")]
#[command(override_usage = "ouilookup --mac <MAC> | --arp | [--help]")]
#[command(disable_help_flag = true)]
pub struct CommandLine {
    /// MAC address to look up, e.g. aa:bb:cc:00:00:00
    #[arg(short, long, value_name = "MAC", action = ArgAction::Append)]
    pub mac: Vec<String>,

    /// Show the vendors of the hosts in the ARP table (Windows only)
    #[arg(short, long, action = ArgAction::Append, num_args = 0,
          default_missing_value = "true")]
    pub arp: Vec<bool>,

    /// Show this message and exit
    #[arg(short, long, action = ArgAction::Append, num_args = 0,
          default_missing_value = "true")]
    pub help: Vec<bool>,

    /// Give up on a lookup after this many seconds
    #[arg(short, long, value_name = "SECS", default_value_t = 10,
          value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,

    /// Number of ARP table lookups running at the same time
    #[arg(short, long, value_name = "N", default_value_t = 4,
          value_parser = clap::value_parser!(u8).range(1..=64))]
    pub jobs: u8,

    /// Print more log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Mac(String),
    Arp,
}

/// Everything needed to carry out one validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// In the order they were given.
    pub actions: Vec<Action>,
    pub config: Config,
    pub verbosity: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Nothing but the program name was given.
    Usage,
    Invalid(String),
    Run(Invocation),
}

pub fn usage() -> String {
    CommandLine::command().render_help().to_string()
}

/// Validates `args` (program name included) and puts the requested actions in order.
pub fn parse<I, T>(args: I) -> Parsed
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Parsed::Usage;
    }

    let matches = match CommandLine::command().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(e) => return Parsed::Invalid(first_line(&e.render().to_string())),
    };
    let cli = match CommandLine::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => return Parsed::Invalid(first_line(&e.render().to_string())),
    };

    let config = Config {
        api_url: DEFAULT_API_URL.to_string(),
        timeout: Duration::from_secs(cli.timeout),
        jobs: usize::from(cli.jobs),
    };

    Parsed::Run(Invocation {
        actions: ordered_actions(&matches, &cli),
        config,
        verbosity: cli.verbose,
    })
}

/// Recovers the command line order of `--mac`, `--arp` and `--help`.
///
/// Every occurrence keeps its own position, so `-a -m X -a` lists the ARP
/// table twice around the single lookup.
fn ordered_actions(matches: &ArgMatches, cli: &CommandLine) -> Vec<Action> {
    let mut positioned: Vec<(usize, Action)> = Vec::new();

    if let Some(indices) = given_indices(matches, "mac") {
        positioned.extend(
            indices
                .zip(cli.mac.iter())
                .map(|(idx, mac)| (idx, Action::Mac(mac.clone()))),
        );
    }

    for (id, given, action) in [("arp", &cli.arp, Action::Arp), ("help", &cli.help, Action::Help)] {
        if let Some(indices) = given_indices(matches, id) {
            positioned.extend(indices.zip(given.iter()).map(|(idx, _)| (idx, action.clone())));
        }
    }

    positioned.sort_by_key(|(idx, _)| *idx);
    positioned.into_iter().map(|(_, action)| action).collect()
}

fn given_indices<'a>(matches: &'a ArgMatches, id: &str) -> Option<clap::parser::Indices<'a>> {
    match matches.value_source(id) {
        Some(ValueSource::CommandLine) => matches.indices_of(id),
        _ => None,
    }
}

fn first_line(rendered: &str) -> String {
    rendered.lines().next().unwrap_or_default().to_string()
}

/// Runs the whole program against `out` and returns the process exit status.
///
/// `build` wires up the lookup service once the command line is known to be valid.
pub async fn run<I, T, W, F>(args: I, build: F, out: &mut W) -> anyhow::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
    F: FnOnce(&Invocation) -> anyhow::Result<LookupService>,
{
    let invocation = match parse(args) {
        Parsed::Usage => {
            print::println(out, &usage())?;
            return Ok(EXIT_OK);
        }
        Parsed::Invalid(msg) => {
            print::diagnostic(out, &msg)?;
            print::println(out, &usage())?;
            return Ok(EXIT_USAGE);
        }
        Parsed::Run(invocation) => invocation,
    };

    let service = build(&invocation)?;

    for action in &invocation.actions {
        match action {
            Action::Help => {
                print::println(out, &usage())?;
                return Ok(EXIT_OK);
            }
            Action::Mac(input) => mac::lookup(&service, input, out).await?,
            Action::Arp => arp::lookup_table(&service, out).await?,
        }
    }

    Ok(EXIT_OK)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

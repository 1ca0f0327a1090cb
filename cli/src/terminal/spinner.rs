use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// The bar currently on screen, if any. Log output is routed around it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Draws a spinner on stderr while ARP table entries are resolved.
///
/// Hidden automatically when stderr is not a terminal.
pub struct TableProgress {
    bar: ProgressBar,
}

impl TableProgress {
    pub fn start(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{spinner:.blue} Resolving vendors {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS);

        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut active) = ACTIVE.lock() {
            *active = Some(bar.clone());
        }

        Self { bar }
    }

    /// A handle the lookup service can move into its progress callback.
    pub fn reporter(&self) -> Box<dyn Fn(usize) + Send + Sync> {
        let bar = self.bar.clone();
        Box::new(move |resolved| bar.set_position(resolved as u64))
    }

    pub fn finish_and_clear(self) {
        if let Ok(mut active) = ACTIVE.lock() {
            *active = None;
        }
        self.bar.finish_and_clear();
    }
}

/// Writes to stdout, suspending the active spinner so lines do not get torn.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let active = ACTIVE
            .lock()
            .map_err(|_| io::Error::other("spinner state poisoned"))?;

        match active.as_ref() {
            Some(bar) => bar.suspend(|| io::stdout().write_all(buf))?,
            None => io::stdout().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

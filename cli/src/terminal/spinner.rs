use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

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

fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(|| {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_strings(TICK_STRINGS);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    })
}

/// Starts the spinner (on first use) and sets its stage message.
pub fn set_stage(msg: &str) {
    get_spinner().set_message(msg.to_string());
}

pub fn finish() {
    if let Some(pb) = SPINNER.get() {
        pb.finish_and_clear();
    }
}

/// Prints a line without tearing the spinner, falling back to plain
/// stderr when no spinner has been started.
pub fn println_above(msg: &str) {
    match SPINNER.get() {
        Some(pb) if !pb.is_finished() => pb.println(msg),
        _ => eprintln!("{msg}"),
    }
}

/// Log writer that routes subscriber output above the spinner.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        println_above(msg.trim_end());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

use std::io::{self, Write};

use colored::*;
use dotquad_common::config::Config;
use dotquad_common::log::PRINT_TARGET;
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Writes `msg` without a line break and leaves the cursor after it.
pub fn prompt(msg: &str) {
    let mut stdout = io::stdout().lock();
    let written = write!(stdout, "{}", msg.color(colors::PRIMARY)).and_then(|()| stdout.flush());
    if let Err(err) = written {
        debug!("failed to write prompt: {err}");
    }
}

/// ASCII art followed by the version, centered under it.
pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    banner::print();
    let version = format!("v{}", env!("CARGO_PKG_VERSION"));
    let pad = banner::WIDTH.saturating_sub(version.width()) / 2;
    print(&format!("{}{}", " ".repeat(pad), version.color(colors::SEPARATOR)));
    mprint!();
}

/// `── TITLE ─────…` padded out to [`TOTAL_WIDTH`].
pub fn header(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = title.to_uppercase();
    let rest = TOTAL_WIDTH.saturating_sub(title.width() + 4);
    print(&format!(
        "{} {} {}",
        "──".color(colors::SEPARATOR),
        title.color(colors::PRIMARY).bold(),
        "─".repeat(rest).color(colors::SEPARATOR)
    ));
}

/// One result row of a batch, marked with a dim bullet.
pub fn bullet(line: &str) {
    print(&format!("{} {}", "•".color(colors::SEPARATOR), line));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}

/// Colored `VALID` / `INVALID` word.
pub fn label(valid: bool) -> ColoredString {
    if valid {
        "VALID".color(colors::VALID).bold()
    } else {
        "INVALID".color(colors::INVALID).bold()
    }
}

use colored::*;
use dotquad_common::config::Config;
use dotquad_common::ui::{Presenter, Verdict};

use crate::mprint;
use crate::terminal::{colors, print};

const HINTS: [&str; 3] = [
    "Note: Valid IPv4 format is xxx.xxx.xxx.xxx where each xxx is 0-255",
    "      Examples: 192.168.1.1, 10.0.0.1, 255.255.255.0",
    "      Invalid examples: 256.1.1.1, 192.168.01.1, 192.168.1",
];

/// Renders the interactive session on the terminal.
pub struct TerminalPresenter<'a> {
    cfg: &'a Config,
}

impl<'a> TerminalPresenter<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }
}

impl Presenter for TerminalPresenter<'_> {
    fn title(&mut self) {
        print::header("IP Address Validator", self.cfg.quiet);
        if self.cfg.quiet == 0 {
            mprint!();
        }
    }

    fn prompt_address(&mut self) {
        if self.cfg.quiet < 2 {
            print::prompt("Enter an IP address to validate: ");
        }
    }

    fn verdict(&mut self, verdict: &Verdict) {
        if self.cfg.quiet >= 2 {
            print::print(verdict.label());
            return;
        }

        print::print(&verdict_line(verdict, self.cfg));

        if !verdict.is_valid() {
            for hint in HINTS {
                print::print(&format!("{}", hint.color(colors::TEXT_DEFAULT)));
            }
        }
    }

    fn read_error(&mut self, _err: &str) {
        print::print(&format!("{}", "Error reading input.".color(colors::INVALID)));
    }

    fn prompt_again(&mut self) {
        if self.cfg.quiet < 2 {
            mprint!();
            print::prompt("Do you want to validate another IP address? (y/n): ");
        }
    }

    fn farewell(&mut self) {
        if self.cfg.quiet >= 2 {
            return;
        }
        mprint!();
        let goodbye = "Thank you for using the IP Address Validator!";
        if self.cfg.quiet == 0 {
            print::centerln(&format!("{}", goodbye.color(colors::PRIMARY)));
            print::end_of_program();
        } else {
            print::print(goodbye);
        }
    }
}

/// `Result: '<candidate>' is VALID`, plus the reason when explaining.
pub fn verdict_line(verdict: &Verdict, cfg: &Config) -> String {
    let mut line = format!(
        "Result: '{}' is {}",
        verdict.candidate.color(colors::ACCENT),
        print::label(verdict.is_valid())
    );

    if let (true, Some(reason)) = (cfg.explain, &verdict.reason) {
        line.push_str(&format!(" ({})", reason.message.color(colors::SEPARATOR)));
    }

    line
}

use std::io;

use anyhow::Context;
use dotquad_common::config::Config;
use dotquad_common::ui::Verdict;
use dotquad_common::{success, warn};
use dotquad_core::session::{next_line, verdict_for};

use crate::terminal::{presenter, print};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub valid: usize,
    pub invalid: usize,
}

impl Tally {
    fn record(&mut self, verdict: &Verdict) {
        if verdict.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }
}

/// Validates every candidate and returns `true` when all of them passed.
pub fn check(candidates: Vec<String>, cfg: &Config) -> anyhow::Result<bool> {
    print::header("checking candidates", cfg.quiet);

    let mut tally = Tally::default();

    if candidates.is_empty() {
        let mut input = io::stdin().lock();
        while let Some(line) =
            next_line(&mut input).context("failed to read candidates from stdin")?
        {
            report(&verdict_for(&line), cfg, &mut tally);
        }
    } else {
        for candidate in &candidates {
            report(&verdict_for(candidate), cfg, &mut tally);
        }
    }

    summary(tally, cfg);
    Ok(tally.invalid == 0)
}

fn report(verdict: &Verdict, cfg: &Config, tally: &mut Tally) {
    tally.record(verdict);

    if cfg.quiet >= 2 {
        print::print(verdict.label());
    } else {
        print::bullet(&presenter::verdict_line(verdict, cfg));
    }
}

fn summary(tally: Tally, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let total = tally.valid + tally.invalid;
    let unit: &str = if total == 1 { "candidate" } else { "candidates" };
    if tally.invalid == 0 {
        success!("{total} {unit} checked, all valid");
    } else {
        warn!("{total} {unit} checked, {} invalid", tally.invalid);
    }
    print::end_of_program();
}

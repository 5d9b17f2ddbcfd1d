//! # Interactive Session
//!
//! Drives the prompt / validate / "again?" loop over any line source.
//! Output is delegated to a [`Presenter`]; this module only decides what
//! comes next.

use std::io::{self, BufRead};

use dotquad_common::ui::{Presenter, Verdict};
use tracing::debug;

use crate::validator::check_ipv4;

/// Counters collected over one session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub checked: usize,
    pub valid: usize,
    pub read_errors: usize,
}

#[derive(Debug, Default)]
pub struct Session {
    summary: SessionSummary,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs until the input ends or the user declines another round.
    pub fn run<R: BufRead>(
        mut self,
        mut input: R,
        presenter: &mut dyn Presenter,
    ) -> SessionSummary {
        presenter.title();

        loop {
            presenter.prompt_address();

            match next_line(&mut input) {
                Ok(None) => break,
                Ok(Some(candidate)) => {
                    let verdict = verdict_for(&candidate);
                    self.summary.checked += 1;
                    if verdict.is_valid() {
                        self.summary.valid += 1;
                    }
                    presenter.verdict(&verdict);
                }
                Err(err) => {
                    self.summary.read_errors += 1;
                    debug!("failed to read candidate: {err}");
                    presenter.read_error(&err.to_string());
                }
            }

            presenter.prompt_again();

            match next_line(&mut input) {
                Ok(Some(answer)) if wants_another(&answer) => continue,
                _ => break,
            }
        }

        presenter.farewell();
        self.summary
    }
}

/// Validates `candidate` and wraps the outcome for presentation.
pub fn verdict_for(candidate: &str) -> Verdict {
    match check_ipv4(candidate) {
        Ok(_) => Verdict::valid(candidate),
        Err(rejection) => {
            debug!(code = rejection.code(), "rejected {candidate:?}: {rejection}");
            Verdict::invalid(candidate, rejection.into())
        }
    }
}

/// Reads one line with its terminator (`\n` or `\r\n`) removed.
///
/// `Ok(None)` means the input is exhausted. Errors come only from the
/// underlying reader; bytes that are not UTF-8 are decoded lossily.
pub fn next_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    // Undecodable bytes become U+FFFD, which no gate lets through
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

fn wants_another(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

use std::io;

use dotquad_common::config::Config;
use dotquad_core::session::{Session, SessionSummary};
use tracing::debug;

use crate::terminal::presenter::TerminalPresenter;

pub fn interactive(cfg: &Config) -> SessionSummary {
    let mut presenter = TerminalPresenter::new(cfg);
    let summary = Session::new().run(io::stdin().lock(), &mut presenter);

    debug!(
        checked = summary.checked,
        valid = summary.valid,
        read_errors = summary.read_errors,
        "session finished"
    );
    summary
}

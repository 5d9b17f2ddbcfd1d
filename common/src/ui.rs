//! # Presenter Port
//!
//! The interactive session only decides *what* happens next. Everything the
//! user sees goes through a [`Presenter`], which keeps the session free of
//! terminal concerns and lets tests record the conversation instead.

/// Why a candidate was turned down, in presentable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reason {
    /// Stable kebab-case identifier of the failing gate.
    pub code: &'static str,
    pub message: String,
}

/// Outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub candidate: String,
    pub reason: Option<Reason>,
}

impl Verdict {
    pub fn valid(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            reason: None,
        }
    }

    pub fn invalid(candidate: impl Into<String>, reason: Reason) -> Self {
        Self {
            candidate: candidate.into(),
            reason: Some(reason),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }

    pub fn label(&self) -> &'static str {
        if self.is_valid() { "VALID" } else { "INVALID" }
    }
}

pub trait Presenter {
    fn title(&mut self);
    fn prompt_address(&mut self);
    fn verdict(&mut self, verdict: &Verdict);
    fn read_error(&mut self, err: &str);
    fn prompt_again(&mut self);
    fn farewell(&mut self);
}

use dotquad_common::ui::Reason;
use thiserror::Error;

use crate::validator::{MAX_LEN, MIN_LEN};

/// The first gate a candidate failed.
///
/// Octet indices are zero-based; messages render them one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("too short: {len} characters, need at least {}", MIN_LEN)]
    TooShort { len: usize },
    #[error("too long: more than {} characters", MAX_LEN)]
    TooLong,
    #[error("invalid character {ch:?} at position {}", .position + 1)]
    InvalidCharacter { ch: char, position: usize },
    #[error("expected 3 dots, found {found}")]
    DotCount { found: usize },
    #[error("expected 4 octets, found {found}")]
    SegmentCount { found: usize },
    #[error("octet {} is empty", .index + 1)]
    EmptyOctet { index: usize },
    #[error("octet {} has a leading zero", .index + 1)]
    LeadingZero { index: usize },
    #[error("octet {} is outside 0-255", .index + 1)]
    OutOfRange { index: usize },
    #[error("octet {} is not written in canonical form", .index + 1)]
    NotCanonical { index: usize },
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::TooShort { .. } => "too-short",
            Rejection::TooLong => "too-long",
            Rejection::InvalidCharacter { .. } => "invalid-character",
            Rejection::DotCount { .. } => "dot-count",
            Rejection::SegmentCount { .. } => "segment-count",
            Rejection::EmptyOctet { .. } => "empty-octet",
            Rejection::LeadingZero { .. } => "leading-zero",
            Rejection::OutOfRange { .. } => "out-of-range",
            Rejection::NotCanonical { .. } => "not-canonical",
        }
    }
}

impl From<Rejection> for Reason {
    fn from(rejection: Rejection) -> Self {
        Reason {
            code: rejection.code(),
            message: rejection.to_string(),
        }
    }
}

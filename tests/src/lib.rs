//! Cross-crate integration tests for `dotquad`.

mod session;
mod validation;

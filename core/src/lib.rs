//! # dotquad-core
//!
//! The canonical dotted-decimal IPv4 validator and the interactive session
//! built around it.

pub mod rejection;
pub mod session;
pub mod validator;

pub use rejection::Rejection;
pub use session::{Session, SessionSummary};
pub use validator::{check_ipv4, is_valid_ipv4};

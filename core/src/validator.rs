//! # Dotted-Decimal IPv4 Validator
//!
//! Decides whether a string is an IPv4 address written in canonical
//! dotted-decimal form (`0.0.0.0` through `255.255.255.255`).
//!
//! The check is a straight line of gates, each failing fast:
//! 1. Length between [`MIN_LEN`] and [`MAX_LEN`] characters.
//! 2. Only ASCII digits and dots.
//! 3. Exactly [`DOT_COUNT`] dots.
//! 4. Exactly [`OCTET_COUNT`] segments, none of them empty.
//! 5. Every segment: no leading zero, value in 0-255, and the value
//!    rendered back in decimal equals the segment text.
//!
//! Unlike [`std::net::Ipv4Addr`]'s parser, callers get the failing gate
//! back as a [`Rejection`].

use std::net::Ipv4Addr;

use crate::rejection::Rejection;

/// Shortest valid form, `0.0.0.0`.
pub const MIN_LEN: usize = 7;
/// Longest valid form, `255.255.255.255`.
pub const MAX_LEN: usize = 15;
pub const DOT_COUNT: usize = 3;
pub const OCTET_COUNT: usize = 4;

/// Returns `true` if `candidate` is a canonical dotted-decimal IPv4 address.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    check_ipv4(candidate).is_ok()
}

/// Runs every gate in order and returns the parsed address, or the first
/// gate that failed.
pub fn check_ipv4(candidate: &str) -> Result<Ipv4Addr, Rejection> {
    check_length(candidate)?;
    check_charset(candidate)?;

    let found = candidate.bytes().filter(|b| *b == b'.').count();
    if found != DOT_COUNT {
        return Err(Rejection::DotCount { found });
    }

    // split keeps empty pieces, so "1..2.3" still yields four segments here
    let segments: Vec<&str> = candidate.split('.').collect();
    if segments.len() != OCTET_COUNT {
        return Err(Rejection::SegmentCount {
            found: segments.len(),
        });
    }

    let mut octets = [0u8; OCTET_COUNT];
    for (index, segment) in segments.into_iter().enumerate() {
        octets[index] = check_octet(index, segment)?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Validates a single dot-separated segment at position `index`.
pub fn check_octet(index: usize, segment: &str) -> Result<u8, Rejection> {
    if segment.is_empty() {
        return Err(Rejection::EmptyOctet { index });
    }

    if segment.len() > 1 && segment.starts_with('0') {
        return Err(Rejection::LeadingZero { index });
    }

    let value = segment
        .parse::<u64>()
        .map_err(|_| Rejection::OutOfRange { index })?;
    let octet = u8::try_from(value).map_err(|_| Rejection::OutOfRange { index })?;

    if octet.to_string() != segment {
        return Err(Rejection::NotCanonical { index });
    }

    Ok(octet)
}

/// Counts at most `MAX_LEN + 1` characters so that oversized input is
/// turned away without walking all of it.
fn check_length(candidate: &str) -> Result<(), Rejection> {
    let len = candidate.chars().take(MAX_LEN + 1).count();
    if len < MIN_LEN {
        return Err(Rejection::TooShort { len });
    }
    if len > MAX_LEN {
        return Err(Rejection::TooLong);
    }
    Ok(())
}

fn check_charset(candidate: &str) -> Result<(), Rejection> {
    match candidate
        .chars()
        .enumerate()
        .find(|(_, ch)| !(ch.is_ascii_digit() || *ch == '.'))
    {
        Some((position, ch)) => Err(Rejection::InvalidCharacter { ch, position }),
        None => Ok(()),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#![cfg(test)]
use dotquad_core::{Rejection, check_ipv4, is_valid_ipv4};
use dotquad_core::validator::{MAX_LEN, MIN_LEN};
use proptest::prelude::*;
use std::net::Ipv4Addr;

/// Every canonical address agrees with the standard library parser.
#[test]
fn agrees_with_std_on_samples() {
    let samples = [
        "0.0.0.0",
        "127.0.0.1",
        "172.16.254.1",
        "192.168.1.1",
        "255.255.255.255",
    ];

    for sample in samples {
        let expected: Ipv4Addr = sample.parse().unwrap();
        assert_eq!(check_ipv4(sample), Ok(expected));
    }
}

#[test]
fn length_boundaries() {
    assert!(is_valid_ipv4(&"0.0.0.0"[..MIN_LEN]));
    assert_eq!(check_ipv4("0.0.0."), Err(Rejection::TooShort { len: 6 }));
    assert_eq!(check_ipv4("255.255.255.2555"), Err(Rejection::TooLong));
    assert_eq!("255.255.255.255".len(), MAX_LEN);

    let huge = "1".repeat(100_000);
    assert_eq!(check_ipv4(&huge), Err(Rejection::TooLong));
}

#[test]
fn only_dots_never_pass() {
    for len in 0..=32 {
        assert!(!is_valid_ipv4(&".".repeat(len)), "{len} dots");
    }
}

#[test]
fn rejection_codes_are_distinct() {
    let cases = [
        ("", "too-short"),
        ("1234567890123456", "too-long"),
        ("1.1.1.1 ", "invalid-character"),
        ("1.1.1111", "dot-count"),
        ("1.1..111", "empty-octet"),
        ("1.1.1.01", "leading-zero"),
        ("1.1.1.300", "out-of-range"),
    ];

    for (input, code) in cases {
        let rejection = check_ipv4(input).unwrap_err();
        assert_eq!(rejection.code(), code, "input: {input:?}");
    }
}

proptest! {
    #[test]
    fn canonical_quads_are_valid(a in any::<u8>(), b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
        let addr = Ipv4Addr::new(a, b, c, d);
        prop_assert!(is_valid_ipv4(&addr.to_string()));
    }

    #[test]
    fn std_parser_never_accepts_what_we_reject(candidate in "[0-9.]{7,15}") {
        if !is_valid_ipv4(&candidate) {
            prop_assert!(candidate.parse::<Ipv4Addr>().is_err());
        }
    }

    #[test]
    fn arbitrary_strings_terminate(candidate in any::<String>()) {
        let _ = check_ipv4(&candidate);
    }
}

#![cfg(test)]
use std::io::Cursor;

use dotquad_common::ui::{Presenter, Verdict};
use dotquad_core::{Session, SessionSummary};

/// Writes the conversation the way a terminal would show it.
#[derive(Default)]
struct Transcript {
    lines: Vec<String>,
}

impl Presenter for Transcript {
    fn title(&mut self) {
        self.lines.push("IP Address Validator".into());
    }

    fn prompt_address(&mut self) {
        self.lines.push("Enter an IP address to validate:".into());
    }

    fn verdict(&mut self, verdict: &Verdict) {
        self.lines
            .push(format!("Result: '{}' is {}", verdict.candidate, verdict.label()));
        if let Some(reason) = &verdict.reason {
            self.lines.push(format!("reason: {}", reason.code));
        }
    }

    fn read_error(&mut self, _err: &str) {
        self.lines.push("Error reading input.".into());
    }

    fn prompt_again(&mut self) {
        self.lines.push("again?".into());
    }

    fn farewell(&mut self) {
        self.lines.push("bye".into());
    }
}

fn transcript(input: &str) -> (SessionSummary, Vec<String>) {
    let mut presenter = Transcript::default();
    let summary = Session::new().run(Cursor::new(input.as_bytes().to_vec()), &mut presenter);
    (summary, presenter.lines)
}

#[test]
fn full_conversation() {
    let (summary, lines) = transcript("192.168.1.1\ny\n192.168.01.1\nY\n256.1.1.1\nn\n");

    assert_eq!(
        lines,
        vec![
            "IP Address Validator",
            "Enter an IP address to validate:",
            "Result: '192.168.1.1' is VALID",
            "again?",
            "Enter an IP address to validate:",
            "Result: '192.168.01.1' is INVALID",
            "reason: leading-zero",
            "again?",
            "Enter an IP address to validate:",
            "Result: '256.1.1.1' is INVALID",
            "reason: out-of-range",
            "again?",
            "bye",
        ]
    );
    assert_eq!(summary, SessionSummary { checked: 3, valid: 1, read_errors: 0 });
}

#[test]
fn answer_other_than_y_stops() {
    for answer in ["n", "N", "", "yy", "yes", "q"] {
        let input = format!("10.0.0.1\n{answer}\n10.0.0.2\n");
        let (summary, _) = transcript(&input);
        assert_eq!(summary.checked, 1, "answer {answer:?}");
    }
}

#[test]
fn windows_line_endings() {
    let (summary, lines) = transcript("10.0.0.1\r\ny\r\n10.0.0.256\r\nn\r\n");
    assert_eq!(summary.checked, 2);
    assert_eq!(summary.valid, 1);
    assert!(lines.contains(&"Result: '10.0.0.1' is VALID".to_string()));
}

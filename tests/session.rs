use std::fs;

use pretty_assertions::assert_eq;
use smartcalc::{Outcome, Session, get_output};
use walkdir::WalkDir;

/// A transcript: lines starting with `>` are input, `#` lines are comments,
/// every other non-empty line is expected output.
struct Transcript {
    inputs:   Vec<String>,
    expected: Vec<String>,
}

fn parse_transcript(content: &str) -> Transcript {
    let mut inputs = Vec::new();
    let mut expected = Vec::new();

    for line in content.lines() {
        if let Some(input) = line.strip_prefix('>') {
            inputs.push(input.strip_prefix(' ').unwrap_or(input).to_string());
        } else if line.starts_with('#') || line.trim().is_empty() {
            continue;
        } else {
            expected.push(line.to_string());
        }
    }

    Transcript { inputs, expected }
}

#[test]
fn session_transcripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let transcript = parse_transcript(&content);

        let output = get_output(transcript.inputs.iter().map(String::as_str));
        assert_eq!(output, transcript.expected, "transcript {path:?} diverged");
        count += 1;
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

fn reply(session: &mut Session, line: &str) -> String {
    match session.handle_line(line) {
        Outcome::Print(text) => text,
        other => panic!("expected output for {line:?}, got {other:?}"),
    }
}

#[test]
fn blank_lines_are_silent() {
    let mut session = Session::new();
    assert_eq!(session.handle_line(""), Outcome::Silent);
    assert_eq!(session.handle_line("   \t "), Outcome::Silent);
}

#[test]
fn commands() {
    let mut session = Session::new();
    assert_eq!(reply(&mut session, "/help"), smartcalc::session::HELP_TEXT);
    assert_eq!(reply(&mut session, "/go"), "Unknown command");
    assert_eq!(reply(&mut session, "/exit now"), "Unknown command");
    assert_eq!(session.handle_line("/exit"), Outcome::Exit);
}

#[test]
fn bare_numbers_are_echoed_unchanged() {
    let mut session = Session::new();
    assert_eq!(reply(&mut session, "42"), "42");
    assert_eq!(reply(&mut session, "-007"), "-007");
    assert_eq!(reply(&mut session, "  123456789012345678901234567890  "),
               "123456789012345678901234567890");
}

#[test]
fn variables_follow_their_chain() {
    let mut session = Session::new();
    assert_eq!(session.handle_line("x = 5"), Outcome::Silent);
    assert_eq!(session.handle_line("y = x"), Outcome::Silent);
    assert_eq!(reply(&mut session, "y"), "5");

    assert_eq!(session.handle_line("x = 9"), Outcome::Silent);
    assert_eq!(reply(&mut session, "y"), "9");
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut session = Session::new();
    session.handle_line("n = 1");
    session.handle_line("N = 2");
    assert_eq!(reply(&mut session, "n"), "1");
    assert_eq!(reply(&mut session, "N"), "2");
}

#[test]
fn failed_assignment_leaves_store_unchanged() {
    let mut session = Session::new();
    session.handle_line("a = 1");
    assert_eq!(reply(&mut session, "a = b"), "Unknown variable");
    assert_eq!(reply(&mut session, "a = 2a"), "Invalid assignment");
    assert_eq!(reply(&mut session, "a = 2 = 3"), "Invalid assignment");
    assert_eq!(reply(&mut session, "a"), "1");
}

#[test]
fn error_messages() {
    let mut session = Session::new();
    assert_eq!(reply(&mut session, "z"), "Unknown variable");
    assert_eq!(reply(&mut session, "1x = 5"), "Invalid identifier");
    assert_eq!(reply(&mut session, "x1 = 5"), "Invalid identifier");
    assert_eq!(reply(&mut session, "8*/2"), "Invalid expression");
    assert_eq!(reply(&mut session, "(1+2"), "Invalid expression");
    assert_eq!(reply(&mut session, "2 ** 3"), "Invalid expression");
    assert_eq!(reply(&mut session, "z + 1"), "Unknown variable");
}

#[test]
fn self_reference_is_reported_not_looped() {
    let mut session = Session::new();
    session.handle_line("a = 1");
    assert_eq!(session.handle_line("a = a"), Outcome::Silent);
    assert_eq!(reply(&mut session, "a"), "Cyclic variable reference");
    assert_eq!(reply(&mut session, "a + 1"), "Cyclic variable reference");

    assert_eq!(session.handle_line("a = 3"), Outcome::Silent);
    assert_eq!(reply(&mut session, "a + 1"), "4");
}

#[test]
fn division_by_zero_does_not_end_the_session() {
    let mut session = Session::new();
    session.handle_line("k = 0");
    assert_eq!(reply(&mut session, "10 / k"), "Division by zero");
    assert_eq!(reply(&mut session, "10 % (5 - 5)"), "Division by zero");
    assert_eq!(reply(&mut session, "10 / 2"), "5");
}

#[test]
fn run_stops_after_exit() {
    let input = "1 + 1\n/exit\n2 + 2\n";
    let mut output = Vec::new();
    let exited = Session::new().run(input.as_bytes(), &mut output).unwrap();

    assert!(exited);
    assert_eq!(String::from_utf8(output).unwrap(), "2\nBye!\n");
}

#[test]
fn run_ends_quietly_at_end_of_input() {
    let input = "x = 2\nx * x\n";
    let mut output = Vec::new();
    let exited = Session::new().run(input.as_bytes(), &mut output).unwrap();

    assert!(!exited);
    assert_eq!(String::from_utf8(output).unwrap(), "4\n");
}

#[test]
fn invalid_utf8_line_does_not_end_the_session() {
    let input: &[u8] = b"1 + 1\n\xff\xfe\n2 + 2\n/exit\n";
    let mut output = Vec::new();
    let exited = Session::new().run(input, &mut output).unwrap();

    assert!(exited);
    assert_eq!(String::from_utf8(output).unwrap(), "2\nInvalid expression\n4\nBye!\n");
}

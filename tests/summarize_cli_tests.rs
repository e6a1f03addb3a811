mod common;

use common::{describe, run_recap, TestEnv};

const TRANSCRIPT: &str = "[00:00:01] Speaker 1: Python is a programming language.\n\
    [00:00:05] Speaker 2: It is widely used.\n\
    [00:00:09] Speaker 1: Python emphasizes readability.\n\
    [00:00:14] Speaker 3: Many developers enjoy using Python.\n";

#[test]
fn summarize_subcommand_is_available() {
    let output = run_recap(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\n{}",
        describe(&output)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("--generate-sample"));
}

#[test]
fn summarize_text_file_prints_requested_sentences() {
    let env = TestEnv::new();
    std::fs::write(env.path("meeting.txt"), TRANSCRIPT).unwrap();

    let output = env.run(&["summarize", "meeting.txt", "--sentences", "2"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));
    let lines: Vec<&str> = stdout.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 2, "unexpected summary:\n{}", stdout);
    assert!(!stdout.contains("Speaker"));
    assert!(!stdout.contains("[00:"));
}

#[test]
fn summarize_uses_configured_sentence_count() {
    let env = TestEnv::new();
    env.write_config("[summary]\nsentences = 1\n");
    std::fs::write(env.path("meeting.txt"), TRANSCRIPT).unwrap();

    let output = env.run(&["summarize", "meeting.txt"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));
    assert_eq!(stdout.lines().filter(|l| !l.is_empty()).count(), 1);
}

#[test]
fn summarize_reports_missing_file() {
    let output = run_recap(&["summarize", "does-not-exist.txt"]);

    assert!(!output.status.success(), "summarize should fail\n{}", describe(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Path not found"),
        "expected missing file error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_rejects_unsupported_extension() {
    let env = TestEnv::new();
    std::fs::write(env.path("notes.md"), "# Notes").unwrap();

    let output = env.run(&["summarize", "notes.md"]);

    assert!(!output.status.success(), "summarize should fail\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported file type: .md"));
}

#[test]
fn summarize_missing_docx_suggests_sample() {
    let output = run_recap(&["summarize", "absent.docx"]);

    assert!(!output.status.success(), "summarize should fail\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--generate-sample"));
}

#[test]
fn summarize_writes_text_output_file() {
    let env = TestEnv::new();
    std::fs::write(env.path("meeting.txt"), TRANSCRIPT).unwrap();

    let output = env.run(&[
        "summarize",
        "meeting.txt",
        "-s",
        "2",
        "--output",
        "out/summary.txt",
    ]);

    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));
    let written = std::fs::read_to_string(env.path("out/summary.txt")).unwrap();
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn summarize_json_lists_ranked_sentences() {
    let env = TestEnv::new();
    std::fs::write(env.path("meeting.txt"), TRANSCRIPT).unwrap();

    let output = env.run(&["summarize", "meeting.txt", "-s", "2", "--json"]);
    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sentences = report["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 2);
    assert_eq!(report["language"], "english");
    assert!(sentences[0]["index"].as_u64() < sentences[1]["index"].as_u64());
}

#[cfg(feature = "docx")]
#[test]
fn summarize_generates_sample_docx() {
    let env = TestEnv::new();

    let output = env.run(&["summarize", "sample.docx", "--generate-sample", "-s", "2"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));
    assert!(env.path("sample.docx").exists());
    assert_eq!(stdout.lines().filter(|l| !l.is_empty()).count(), 2);
    assert!(!stdout.contains("Speaker"));
}

#[cfg(feature = "docx")]
#[test]
fn summarize_empty_docx_prints_placeholder() {
    let env = TestEnv::new();
    recap::reader::write_paragraphs(&env.path("empty.docx"), &[] as &[&str]).unwrap();

    let output = env.run(&["summarize", "empty.docx"]);

    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stdout)
        .contains(recap::summarizer::EMPTY_DOCUMENT_MESSAGE));
}

#[cfg(feature = "docx")]
#[test]
fn summarize_docx_output_round_trips() {
    let env = TestEnv::new();
    std::fs::write(env.path("meeting.txt"), TRANSCRIPT).unwrap();

    let output = env.run(&["summarize", "meeting.txt", "-s", "3", "-o", "summary.docx"]);

    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));
    let paragraphs = recap::reader::read_paragraphs(&env.path("summary.docx")).unwrap();
    assert_eq!(paragraphs.len(), 3);
}

#[cfg(feature = "docx")]
#[test]
fn summarize_json_reports_placeholder_for_empty_docx() {
    let env = TestEnv::new();
    recap::reader::write_paragraphs(&env.path("empty.docx"), &[] as &[&str]).unwrap();

    let output = env.run(&["summarize", "empty.docx", "--json"]);
    assert!(output.status.success(), "summarize should succeed\n{}", describe(&output));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sentences"].as_array().unwrap().len(), 0);
    assert_eq!(
        report["message"],
        recap::summarizer::EMPTY_DOCUMENT_MESSAGE
    );
}

#[cfg(feature = "docx")]
#[test]
fn summarize_json_matches_plain_output_for_corrupt_docx() {
    let env = TestEnv::new();
    std::fs::write(env.path("corrupt.docx"), "not a zip").unwrap();

    let plain = env.run(&["summarize", "corrupt.docx"]);
    let json = env.run(&["summarize", "corrupt.docx", "--json"]);

    assert!(plain.status.success(), "plain summarize should succeed\n{}", describe(&plain));
    assert!(json.status.success(), "json summarize should succeed\n{}", describe(&json));

    let report: serde_json::Value = serde_json::from_slice(&json.stdout).unwrap();
    assert_eq!(
        String::from_utf8_lossy(&plain.stdout).trim(),
        report["message"].as_str().unwrap()
    );
}

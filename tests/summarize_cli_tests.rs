mod common;

use common::TestEnv;

#[test]
fn summarize_help_is_available() {
    let output = common::run_recap(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_without_api_key_reports_missing_credential() {
    let env = TestEnv::new();

    // No config file and no RECAP_GROQ_API_KEY in the environment.
    let output = env.run(&["summarize"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Groq API key is missing"),
        "expected missing credential error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_missing_file_reports_read_error() {
    let env = TestEnv::new();

    let output = env.run_with_stdin(&["summarize", "/nonexistent/transcript.txt"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read transcript file"),
        "expected file read error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_segments_rejects_invalid_json() {
    let env = TestEnv::new();

    let output = env.run_with_stdin(&["summarize", "--segments"], "not json");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse transcript segments"),
        "expected segment parse error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_empty_segment_list_reports_empty_transcript() {
    let env = TestEnv::new();

    let output = env.run_with_stdin(&["summarize", "--segments"], "[]");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Transcript is empty"),
        "expected empty transcript error, got:\n{}",
        stderr
    );
}

#[test]
fn summarize_empty_stdin_reports_empty_transcript() {
    let env = TestEnv::new();

    let output = env.run_with_stdin(&["summarize"], "   \n  \n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Transcript is empty"),
        "expected empty transcript error, got:\n{}",
        stderr
    );
}

use mp3_bridge::infrastructure::observability::sanitize_tool_output;

#[test]
fn given_blank_output_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_tool_output("  \n "), "[EMPTY]");
}

#[test]
fn given_multiline_output_when_sanitizing_then_collapses_to_one_line() {
    let stderr = "input.wav: Invalid data found\nwhen processing input\n";
    assert_eq!(
        sanitize_tool_output(stderr),
        "input.wav: Invalid data found when processing input"
    );
}

#[test]
fn given_long_output_when_sanitizing_then_keeps_tail_and_reports_length() {
    let stderr = format!("{}FINAL ERROR", "x".repeat(1000));

    let sanitized = sanitize_tool_output(&stderr);

    assert!(sanitized.starts_with("..."));
    assert!(sanitized.contains("FINAL ERROR"));
    assert!(sanitized.ends_with("(1011 chars total)"));
}

#[test]
fn given_multibyte_output_when_truncating_then_does_not_split_characters() {
    let stderr = "é".repeat(500);
    let sanitized = sanitize_tool_output(&stderr);
    assert!(sanitized.contains("(500 chars total)"));
}

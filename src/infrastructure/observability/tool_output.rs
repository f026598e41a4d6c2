const MAX_VISIBLE_CHARS: usize = 300;

/// Collapses external tool output to a single bounded line for logging.
///
/// Keeps the tail, where ffmpeg reports the failing stage.
pub fn sanitize_tool_output(output: &str) -> String {
    let collapsed = output.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = collapsed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return collapsed;
    }

    let tail: String = collapsed.chars().skip(total - MAX_VISIBLE_CHARS).collect();
    format!("...{} ({} chars total)", tail, total)
}

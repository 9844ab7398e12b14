//! Beginner-friendly notes for common compiler diagnostics.

use sensei_types::protocol::COMPILATION_ERROR_PREFIX;

const MISSING_SEMICOLON: &str = "expected ';'";
const UNDECLARED_NAME: &str = "was not declared in this scope";

/// A tip for the first recognised diagnostic in `stderr`.
pub fn friendly_hint(stderr: &str) -> Option<&'static str> {
    if stderr.contains(MISSING_SEMICOLON) {
        Some("💡 Tip: You forgot a semicolon (;) at the end of a line. In C++, that's like a period at the end of a sentence.")
    } else if stderr.contains(UNDECLARED_NAME) {
        Some("💡 Tip: You're using a name that the computer doesn't recognize. Did you forget to create the variable first?")
    } else {
        None
    }
}

/// The frame sent when compilation fails: the raw diagnostics, then a tip
/// when one applies.
pub fn compile_error_message(stderr: &str) -> String {
    let mut message = format!("{COMPILATION_ERROR_PREFIX}{stderr}");
    if let Some(hint) = friendly_hint(stderr) {
        if !message.ends_with('\n') {
            message.push('\n');
        }
        message.push('\n');
        message.push_str(hint);
    }
    message
}

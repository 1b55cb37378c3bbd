const CODE_FENCE: &str = "```";

/// Trim a model reply and strip any code fences from it.
///
/// The spirit never speaks in code blocks, so every literal triple backtick
/// is removed, not only those at the edges.
pub fn clean_reply(text: &str) -> String {
    text.trim().replace(CODE_FENCE, "").trim().to_string()
}

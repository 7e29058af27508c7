// Shared prompt constants and prompt-building utilities.
// Each feature module defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Maximum characters of user-supplied document text interpolated into a prompt.
pub const MAX_PROMPT_INPUT_CHARS: usize = 10_000;

/// Instruction appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Return ONLY a valid JSON object with this exact structure (no additional text):";

/// Returns the leading `max_chars` characters of `text`.
/// Counts Unicode scalar values, so the cut never splits a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Clips document text to the prompt input limit.
pub fn clip_input(text: &str) -> &str {
    truncate_chars(text, MAX_PROMPT_INPUT_CHARS)
}

/// Joins a skill list the way prompts present it: "A, B, C".
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

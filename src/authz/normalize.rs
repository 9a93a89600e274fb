//! Canonicalization of command and preset names.
//!
//! Every map key in the engine is stored in normalized form; raw input
//! never reaches a lookup. An empty normalized string means
//! "invalid/ignore this entry" to every caller.

/// Canonical form of a command or preset name: leading/trailing whitespace
/// trimmed, inner whitespace runs collapsed to a single space, lower-cased.
pub fn normalize(text: &str) -> String {
    let trimmed = text.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    let mut last_was_space = false;
    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                normalized.push(' ');
                last_was_space = true;
            }
        } else {
            for lower in ch.to_lowercase() {
                normalized.push(lower);
            }
            last_was_space = false;
        }
    }
    normalized
}

/// Splits a comma-delimited list into normalized tokens, dropping entries
/// that normalize to the empty string.
pub fn normalized_tokens(list: &str) -> Vec<String> {
    list.split(',')
        .map(normalize)
        .filter(|token| !token.is_empty())
        .collect()
}

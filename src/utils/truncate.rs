/// Character budget for prompt text on the compact card.
pub const COMPACT_PROMPT_LIMIT: usize = 100;

/// Appended to any prompt that was cut short.
pub const ELLIPSIS: &str = " ...";

/// Whether `text` is longer than `limit` characters.
pub fn needs_truncation(text: &str, limit: usize) -> bool {
    text.chars().nth(limit).is_some()
}

/// Shorten `text` to at most `limit` characters, cutting at the last
/// whitespace at or before index `limit` and appending [`ELLIPSIS`].
///
/// Text within the limit is returned unchanged, without a marker. When there
/// is no whitespace to cut at (one long token) the text is hard cut at
/// `limit` characters instead of collapsing to a bare marker.
///
/// Indices are counted in `char`s so a cut never lands inside a multi-byte
/// character.
pub fn truncate(text: &str, limit: usize) -> String {
    // Byte offset of the char at index `limit`; only exists when truncation is needed.
    let Some((limit_offset, limit_char)) = text.char_indices().nth(limit) else {
        return text.to_string();
    };

    let window = &text[..limit_offset + limit_char.len_utf8()];
    let cut = window
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(limit_offset);

    format!("{}{}", &text[..cut], ELLIPSIS)
}

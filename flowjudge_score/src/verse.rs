// Verse splitting shared by the rhyme and rhythm checkers.
//
// A transcript is cut on sentence-ending punctuation (Japanese and ASCII
// forms) and on line breaks. Each piece is trimmed; pieces whose length in
// chars does not exceed the caller's threshold are dropped. The rhyme
// checker keeps verses longer than 2 chars, the rhythm checker any
// non-empty verse.

/// Characters that end a verse.
pub const VERSE_DELIMITERS: &[char] = &['、', '。', '！', '？', '!', '?', '\n', '\r'];

/// Split `text` into trimmed verses longer than `min_chars` chars.
pub fn split_verses(text: &str, min_chars: usize) -> Vec<&str> {
    text.split(VERSE_DELIMITERS)
        .map(str::trim)
        .filter(|verse| verse.chars().count() > min_chars)
        .collect()
}

/// The last `n` chars of `verse` (all of it when shorter).
pub fn tail_chars(verse: &str, n: usize) -> &str {
    let len = verse.chars().count();
    if len <= n {
        return verse;
    }
    if n == 0 {
        return "";
    }
    match verse.char_indices().nth(len - n) {
        Some((byte_idx, _)) => &verse[byte_idx..],
        None => verse,
    }
}

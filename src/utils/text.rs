// Character-based text helpers

/// Longest prefix of `text` holding at most `max_chars` characters.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_prefix() {
        assert_eq!(char_prefix("abcdef", 3), "abc");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("", 5), "");
        assert_eq!(char_prefix("abc", 0), "");
        // multi-byte characters count once
        assert_eq!(char_prefix("€€€€", 2), "€€");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("Revenue: 100\nCost:\t40  "), 4);
        assert_eq!(word_count("   "), 0);
    }
}

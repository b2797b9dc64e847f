/// Finds the length of the common leading substring of two labels.
///
/// Returns a byte length that always falls on a `char` boundary of both
/// inputs, so it can be used directly to slice either of them.
pub fn prefix_match(key: &str, label: &str) -> usize {
    key.char_indices()
        .zip(label.chars())
        .find(|&((_, a), b)| a != b)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| shorter_len(key, label))
}

// Both strings agree on every char of the shorter one.
fn shorter_len(key: &str, label: &str) -> usize {
    key.len().min(label.len())
}

/// Returns the first symbol of a label, if any.
pub fn leading_symbol(label: &str) -> Option<char> {
    label.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        assert_eq!(prefix_match("abcdef", "abc"), 3);
        assert_eq!(prefix_match("abc", "abcdef"), 3);
        assert_eq!(prefix_match("bcx", "bcy"), 2);
        assert_eq!(prefix_match("abcdef", "xyz"), 0);
        assert_eq!(prefix_match("", "xyz"), 0);
    }

    #[test]
    fn test_prefix_match_multibyte() {
        // 'é' and 'è' share their first UTF-8 byte but are different symbols
        assert_eq!(prefix_match("café", "cafè"), 3);
        assert_eq!(prefix_match("naïve", "naïf"), "naï".len());
        assert!("naïve".is_char_boundary(prefix_match("naïve", "naïf")));
    }

    #[test]
    fn test_leading_symbol() {
        assert_eq!(leading_symbol("über"), Some('ü'));
        assert_eq!(leading_symbol(""), None);
    }
}

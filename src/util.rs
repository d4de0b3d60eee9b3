//! Display-width helpers for column layout.

use unicode_width::UnicodeWidthStr;

/// Pads `s` with trailing spaces up to `width` terminal columns.
///
/// Width is measured with Unicode width rules, so wide characters (CJK,
/// fullwidth forms) count as two columns and combining marks as zero.
/// Strings already at or past `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use boldtext::pad_to_width;
///
/// assert_eq!(pad_to_width("ab", 4), "ab  ");
/// assert_eq!(pad_to_width("ＡＢ", 6), "ＡＢ  ");
/// assert_eq!(pad_to_width("toolong", 3), "toolong");
/// ```
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + width - current);
    result.push_str(s);
    result.extend(std::iter::repeat(' ').take(width - current));
    result
}

/// Widest display width among `items`, or 0 when empty.
pub fn max_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items.into_iter().map(UnicodeWidthStr::width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_ascii() {
        assert_eq!(pad_to_width("abc", 5), "abc  ");
        assert_eq!(pad_to_width("abc", 3), "abc");
    }

    #[test]
    fn test_pad_to_width_empty() {
        assert_eq!(pad_to_width("", 2), "  ");
        assert_eq!(pad_to_width("", 0), "");
    }

    #[test]
    fn test_pad_to_width_combining_marks() {
        // Each mark is zero-width, so "a̲b̲" occupies two columns.
        assert_eq!(pad_to_width("a\u{332}b\u{332}", 3), "a\u{332}b\u{332} ");
    }

    #[test]
    fn test_max_width() {
        assert_eq!(max_width(["a", "abc", "ab"]), 3);
        assert_eq!(max_width(Vec::<&str>::new()), 0);
        assert_eq!(max_width(["ＡＢ"]), 4);
    }
}

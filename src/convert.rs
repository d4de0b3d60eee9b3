//! The conversion engine.
//!
//! [`convert`] resolves a style id in the built-in registry and dispatches on
//! the entry's [`Transform`]:
//!
//! | Transform | Behaviour |
//! |-----------|-----------|
//! | `Substitute` | each code point replaced through the map, unmapped ones kept |
//! | `SubstituteThenReverse` | substitution, then the code-point sequence reversed |
//! | `AppendCombining(mark)` | `mark` after every code point but space, tab, newline |
//!
//! Unknown style ids return the input unchanged. Conversion is total: it
//! never fails and never drops characters.
//!
//! ```rust
//! use boldtext::convert;
//!
//! assert_eq!(convert("Hello", "bold-serif"), "𝐇𝐞𝐥𝐥𝐨");
//! assert_eq!(convert("Hi", "underlined"), "H\u{332}i\u{332}");
//! assert_eq!(convert("Hello", "not-a-real-style"), "Hello");
//! ```

use log::debug;
use serde::Serialize;

use crate::style::{self, CharacterMap, StyleEntry, Transform};

/// One style's rendering of a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedText {
    pub style_id: &'static str,
    pub text: String,
}

/// Applies the style `style_id` to `text`.
///
/// Returns `text` unchanged when the style is not registered. Callers that
/// need to tell an unknown style from an unchanged result should check
/// [`style::contains`] first.
pub fn convert(text: &str, style_id: &str) -> String {
    match style::global().get(style_id) {
        Some(entry) => convert_with(text, entry),
        None => {
            debug!("unknown style {:?}, passing text through", style_id);
            text.to_string()
        }
    }
}

/// Applies an already-resolved style entry to `text`.
pub fn convert_with(text: &str, entry: &StyleEntry) -> String {
    match entry.transform() {
        Transform::Substitute => substitute(text, entry.map()),
        Transform::SubstituteThenReverse => substitute(text, entry.map()).chars().rev().collect(),
        Transform::AppendCombining(mark) => append_combining(text, mark),
    }
}

/// Converts `text` with every registered style, in registry order.
pub fn get_all_conversions(text: &str) -> Vec<ConvertedText> {
    style::global()
        .entries()
        .map(|entry| ConvertedText {
            style_id: entry.id(),
            text: convert_with(text, entry),
        })
        .collect()
}

/// Finds one style's result in the output of [`get_all_conversions`].
pub fn find_conversion<'a>(conversions: &'a [ConvertedText], style_id: &str) -> Option<&'a str> {
    conversions
        .iter()
        .find(|c| c.style_id == style_id)
        .map(|c| c.text.as_str())
}

fn substitute(text: &str, map: &CharacterMap) -> String {
    let mut result = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        match map.get(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}

fn append_combining(text: &str, mark: char) -> String {
    let mut result = String::with_capacity(text.len() * 3);
    for c in text.chars() {
        result.push(c);
        if !matches!(c, ' ' | '\n' | '\t') {
            result.push(mark);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{COMBINING_LONG_STROKE_OVERLAY, COMBINING_OVERLINE};

    #[test]
    fn test_bold_serif() {
        assert_eq!(convert("Hello", "bold-serif"), "𝐇𝐞𝐥𝐥𝐨");
    }

    #[test]
    fn test_double_struck() {
        assert_eq!(convert("Hello", "double-struck"), "ℍ𝕖𝕝𝕝𝕠");
        assert_ne!(convert("A", "double-struck"), convert("C", "double-struck"));
    }

    #[test]
    fn test_bold_sans_maps_digits() {
        assert_eq!(convert("ab1", "bold-sans"), "𝗮𝗯𝟭");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(convert("Hi, 世界! 🎉", "bold-serif"), "𝐇𝐢, 世界! 🎉");
        assert_eq!(convert("x7", "italic-serif"), "𝑥7");
    }

    #[test]
    fn test_upside_down_reverses() {
        assert_eq!(convert("Hi", "upside-down"), "ᴉH");
        assert_eq!(convert("Hello", "upside-down"), "ollǝH");
        assert_eq!(convert("why?", "upside-down"), "¿ʎɥʍ");
    }

    #[test]
    fn test_underlined() {
        assert_eq!(convert("Hi", "underlined"), "H\u{332}i\u{332}");
    }

    #[test]
    fn test_combining_skips_whitespace() {
        let struck = convert("a b\tc\nd", "strikethrough");
        let marks = struck
            .chars()
            .filter(|&c| c == COMBINING_LONG_STROKE_OVERLAY)
            .count();
        assert_eq!(marks, 4);
        assert_eq!(convert(" \t\n", "overlined"), " \t\n");
        assert_eq!(convert("a b", "overlined"), format!("a{m} b{m}", m = COMBINING_OVERLINE));
    }

    #[test]
    fn test_combining_marks_other_characters() {
        // Only space, tab and newline are exempt.
        assert_eq!(convert("\r!", "underlined"), "\r\u{332}!\u{332}");
    }

    #[test]
    fn test_unknown_style_is_identity() {
        assert_eq!(convert("Hello", "not-a-real-style"), "Hello");
        assert_eq!(convert("", "not-a-real-style"), "");
    }

    #[test]
    fn test_empty_input() {
        for id in style::global().ids() {
            assert_eq!(convert("", id), "", "{}", id);
        }
    }

    #[test]
    fn test_examples_match_conversion() {
        for def in style::list_all() {
            assert_eq!(convert("Hello", def.id), def.example, "{}", def.id);
        }
    }

    #[test]
    fn test_fullwidth_punctuation_and_space() {
        assert_eq!(convert("a b!", "fullwidth"), "ａ\u{3000}ｂ！");
    }

    #[test]
    fn test_superscript_signs() {
        assert_eq!(convert("x2+1", "superscript"), "ˣ²⁺¹");
        assert_eq!(convert("H2O", "subscript"), "ₕ₂ₒ");
    }

    #[test]
    fn test_get_all_conversions() {
        let all = get_all_conversions("A");
        assert_eq!(all.len(), style::global().len());
        let ids: Vec<_> = all.iter().map(|c| c.style_id).collect();
        let expected: Vec<_> = style::global().ids().collect();
        assert_eq!(ids, expected);
        assert_eq!(find_conversion(&all, "bold-serif"), Some("𝐀"));
        assert_eq!(find_conversion(&all, "underlined"), Some("A\u{332}"));
        assert_eq!(find_conversion(&all, "nope"), None);
    }

    #[test]
    fn test_converted_text_serializes() {
        let value = serde_json::to_value(ConvertedText {
            style_id: "circled",
            text: "ⓐ".to_string(),
        })
        .unwrap();
        assert_eq!(value["style_id"], "circled");
        assert_eq!(value["text"], "ⓐ");
    }
}

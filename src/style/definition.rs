//! Style metadata and transform kinds.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// U+0332 COMBINING LOW LINE, appended by the `underlined` style.
pub const COMBINING_LOW_LINE: char = '\u{0332}';
/// U+0336 COMBINING LONG STROKE OVERLAY, appended by the `strikethrough` style.
pub const COMBINING_LONG_STROKE_OVERLAY: char = '\u{0336}';
/// U+0305 COMBINING OVERLINE, appended by the `overlined` style.
pub const COMBINING_OVERLINE: char = '\u{0305}';

/// How a style turns input text into output text.
///
/// Every registered style carries exactly one of these, so the converter
/// dispatches on the variant instead of on the style id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Replace each code point through the style's map, keep the rest.
    Substitute,
    /// Substitute, then reverse the code-point sequence (flipped text reads right to left).
    SubstituteThenReverse,
    /// Append the given combining mark after every code point except space, tab and newline.
    AppendCombining(char),
}

/// Grouping shown in style pickers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "Bold & Italic")]
    BoldItalic,
    #[serde(rename = "Special Unicode")]
    SpecialUnicode,
    #[serde(rename = "Decorative")]
    Decorative,
    #[serde(rename = "Fun & Creative")]
    FunCreative,
    #[serde(rename = "Mathematical")]
    Mathematical,
}

impl Category {
    /// All categories in display order.
    pub fn all() -> &'static [Category] {
        &[
            Self::BoldItalic,
            Self::SpecialUnicode,
            Self::Decorative,
            Self::FunCreative,
            Self::Mathematical,
        ]
    }

    /// Human readable name, e.g. `"Bold & Italic"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BoldItalic => "Bold & Italic",
            Self::SpecialUnicode => "Special Unicode",
            Self::Decorative => "Decorative",
            Self::FunCreative => "Fun & Creative",
            Self::Mathematical => "Mathematical",
        }
    }

    /// Command-line friendly name, e.g. `"bold-italic"`.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BoldItalic => "bold-italic",
            Self::SpecialUnicode => "special-unicode",
            Self::Decorative => "decorative",
            Self::FunCreative => "fun-creative",
            Self::Mathematical => "mathematical",
        }
    }

    /// Parses either the display name or the slug, ignoring ASCII case.
    pub fn parse(input: &str) -> Option<Category> {
        let input = input.trim();
        Self::all().iter().copied().find(|category| {
            category.slug().eq_ignore_ascii_case(input)
                || category.display_name().eq_ignore_ascii_case(input)
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Display metadata for one style.
///
/// Definitions are `'static` literals declared alongside the character
/// tables; `example` is the style applied to `"Hello"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub example: &'static str,
}

impl StyleDefinition {
    /// Case-insensitive substring match against name, description and id.
    ///
    /// An empty (or all-whitespace) query matches every style.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.id.contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyleDefinition {
        StyleDefinition {
            id: "bold-serif",
            name: "Bold (serif)",
            category: Category::BoldItalic,
            description: "Mathematical bold serif characters",
            example: "𝐇𝐞𝐥𝐥𝐨",
        }
    }

    #[test]
    fn test_category_parse_accepts_slug_and_name() {
        assert_eq!(Category::parse("bold-italic"), Some(Category::BoldItalic));
        assert_eq!(Category::parse("Fun & Creative"), Some(Category::FunCreative));
        assert_eq!(Category::parse("  MATHEMATICAL "), Some(Category::Mathematical));
        assert_eq!(Category::parse("emoji"), None);
    }

    #[test]
    fn test_category_from_str_error_names_input() {
        let err = "nope".parse::<Category>().unwrap_err();
        assert!(err.contains("nope"));
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let json = serde_json::to_string(&Category::SpecialUnicode).unwrap();
        assert_eq!(json, "\"Special Unicode\"");
    }

    #[test]
    fn test_matches_query_empty() {
        assert!(sample().matches_query(""));
        assert!(sample().matches_query("   "));
    }

    #[test]
    fn test_matches_query_fields() {
        let def = sample();
        assert!(def.matches_query("BOLD"));
        assert!(def.matches_query("mathematical"));
        assert!(def.matches_query("bold-ser"));
        assert!(!def.matches_query("fraktur"));
    }
}

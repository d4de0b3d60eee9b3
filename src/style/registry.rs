//! The ordered style registry.
//!
//! [`Registry`] pairs every [`StyleDefinition`] with its [`CharacterMap`] and
//! [`Transform`]. The built-in registry is assembled once, on first access,
//! and is read-only for the rest of the process:
//!
//! ```rust
//! use boldtext::style;
//!
//! let def = style::metadata("double-struck").unwrap();
//! assert_eq!(def.name, "Double-Struck");
//! assert_eq!(style::lookup("double-struck").unwrap().get('C'), Some("ℂ"));
//! assert!(style::lookup("no-such-style").is_none());
//! ```
//!
//! # Ordering
//!
//! Styles are kept in declaration order. [`list_all`] and everything derived
//! from it (conversions, category groups, CLI listings) follow that order,
//! and repeated calls yield identical sequences.

use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::charmap::CharacterMap;
use super::definition::{
    Category, StyleDefinition, Transform, COMBINING_LONG_STROKE_OVERLAY, COMBINING_LOW_LINE,
    COMBINING_OVERLINE,
};
use super::tables;

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::builtin();
    debug!("style registry built with {} styles", registry.len());
    registry
});

/// One registered style: metadata, character table and transform kind.
#[derive(Debug, Clone)]
pub struct StyleEntry {
    definition: StyleDefinition,
    map: CharacterMap,
    transform: Transform,
}

impl StyleEntry {
    pub fn new(definition: StyleDefinition, transform: Transform, map: CharacterMap) -> Self {
        Self {
            definition,
            map,
            transform,
        }
    }

    pub fn id(&self) -> &'static str {
        self.definition.id
    }

    pub fn definition(&self) -> &StyleDefinition {
        &self.definition
    }

    pub fn map(&self) -> &CharacterMap {
        &self.map
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

/// Ordered collection of styles, addressable by id.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<StyleEntry>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a style, returning the registry for chaining.
    ///
    /// Registering an id twice replaces the earlier entry in place, so ids
    /// stay unique and the original position is kept.
    pub fn register(
        mut self,
        definition: StyleDefinition,
        transform: Transform,
        map: CharacterMap,
    ) -> Self {
        let entry = StyleEntry::new(definition, transform, map);
        match self.index.get(definition.id).copied() {
            Some(pos) => self.entries[pos] = entry,
            None => {
                self.index.insert(definition.id, self.entries.len());
                self.entries.push(entry);
            }
        }
        self
    }

    /// Returns the full entry for `id`.
    pub fn get(&self, id: &str) -> Option<&StyleEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Returns the character map for `id`.
    pub fn lookup(&self, id: &str) -> Option<&CharacterMap> {
        self.get(id).map(StyleEntry::map)
    }

    /// Returns display metadata for `id`.
    pub fn metadata(&self, id: &str) -> Option<&StyleDefinition> {
        self.get(id).map(StyleEntry::definition)
    }

    /// Returns the transform kind for `id`.
    pub fn transform(&self, id: &str) -> Option<Transform> {
        self.get(id).map(StyleEntry::transform)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.iter()
    }

    /// Style definitions in declaration order.
    pub fn list_all(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.entries.iter().map(StyleEntry::definition)
    }

    /// Style ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(StyleEntry::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the registry of every built-in style.
    pub fn builtin() -> Self {
        use Category::*;
        use Transform::*;

        let def = |id, name, category, description, example| StyleDefinition {
            id,
            name,
            category,
            description,
            example,
        };

        Registry::new()
            // Bold & Italic
            .register(
                def(
                    "bold-serif",
                    "Bold (serif)",
                    BoldItalic,
                    "Mathematical bold serif characters",
                    "𝐇𝐞𝐥𝐥𝐨",
                ),
                Substitute,
                tables::BOLD_SERIF.to_map(),
            )
            .register(
                def(
                    "bold-sans",
                    "Bold (sans)",
                    BoldItalic,
                    "Mathematical bold sans-serif characters",
                    "𝗛𝗲𝗹𝗹𝗼",
                ),
                Substitute,
                tables::BOLD_SANS.to_map(),
            )
            .register(
                def(
                    "italic-bold-serif",
                    "Italic Bold (serif)",
                    BoldItalic,
                    "Mathematical bold italic serif characters",
                    "𝑯𝒆𝒍𝒍𝒐",
                ),
                Substitute,
                tables::BOLD_ITALIC_SERIF.to_map(),
            )
            .register(
                def(
                    "italic-bold-sans",
                    "Italic Bold (sans)",
                    BoldItalic,
                    "Mathematical bold italic sans-serif characters",
                    "𝙃𝙚𝙡𝙡𝙤",
                ),
                Substitute,
                tables::BOLD_ITALIC_SANS.to_map(),
            )
            .register(
                def(
                    "italic-serif",
                    "Italic (serif)",
                    BoldItalic,
                    "Mathematical italic serif characters",
                    "𝐻𝑒𝑙𝑙𝑜",
                ),
                Substitute,
                tables::ITALIC_SERIF.to_map(),
            )
            .register(
                def(
                    "italic-sans",
                    "Italic (sans)",
                    BoldItalic,
                    "Mathematical italic sans-serif characters",
                    "𝘏𝘦𝘭𝘭𝘰",
                ),
                Substitute,
                tables::ITALIC_SANS.to_map(),
            )
            // Special Unicode
            .register(
                def(
                    "medieval-bold",
                    "Medieval Bold",
                    SpecialUnicode,
                    "Mathematical Fraktur bold characters",
                    "𝕳𝖊𝖑𝖑𝖔",
                ),
                Substitute,
                tables::BOLD_FRAKTUR.to_map(),
            )
            .register(
                def(
                    "double-struck",
                    "Double-Struck",
                    SpecialUnicode,
                    "Mathematical double-struck characters",
                    "ℍ𝕖𝕝𝕝𝕠",
                ),
                Substitute,
                tables::DOUBLE_STRUCK.to_map(),
            )
            .register(
                def(
                    "script",
                    "Script",
                    SpecialUnicode,
                    "Mathematical script characters",
                    "ℋℯ𝓁𝓁ℴ",
                ),
                Substitute,
                tables::SCRIPT.to_map(),
            )
            .register(
                def(
                    "script-bold",
                    "Script Bold",
                    SpecialUnicode,
                    "Mathematical bold script characters",
                    "𝓗𝓮𝓵𝓵𝓸",
                ),
                Substitute,
                tables::BOLD_SCRIPT.to_map(),
            )
            .register(
                def(
                    "fraktur",
                    "Fraktur",
                    SpecialUnicode,
                    "Mathematical Fraktur characters",
                    "ℌ𝔢𝔩𝔩𝔬",
                ),
                Substitute,
                tables::FRAKTUR.to_map(),
            )
            .register(
                def(
                    "monospace",
                    "Monospace",
                    SpecialUnicode,
                    "Mathematical monospace characters",
                    "𝙷𝚎𝚕𝚕𝚘",
                ),
                Substitute,
                tables::MONOSPACE.to_map(),
            )
            // Decorative
            .register(
                def(
                    "circled",
                    "Circled",
                    Decorative,
                    "Characters enclosed in circles",
                    "Ⓗⓔⓛⓛⓞ",
                ),
                Substitute,
                tables::CIRCLED.to_map(),
            )
            .register(
                def(
                    "squared",
                    "Squared",
                    Decorative,
                    "Characters in square blocks",
                    "🄷🄴🄻🄻🄾",
                ),
                Substitute,
                tables::SQUARED.to_map(),
            )
            .register(
                def(
                    "negative-squared",
                    "Blocks",
                    Decorative,
                    "White characters on black squares",
                    "🅷🅴🅻🅻🅾",
                ),
                Substitute,
                tables::NEGATIVE_SQUARED.to_map(),
            )
            .register(
                def(
                    "underlined",
                    "Underlined",
                    Decorative,
                    "Characters with underline",
                    "H\u{332}e\u{332}l\u{332}l\u{332}o\u{332}",
                ),
                AppendCombining(COMBINING_LOW_LINE),
                CharacterMap::new(),
            )
            .register(
                def(
                    "strikethrough",
                    "Strikethrough",
                    Decorative,
                    "Characters with strikethrough",
                    "H\u{336}e\u{336}l\u{336}l\u{336}o\u{336}",
                ),
                AppendCombining(COMBINING_LONG_STROKE_OVERLAY),
                CharacterMap::new(),
            )
            .register(
                def(
                    "overlined",
                    "Overlined",
                    Decorative,
                    "Characters with overline",
                    "H\u{305}e\u{305}l\u{305}l\u{305}o\u{305}",
                ),
                AppendCombining(COMBINING_OVERLINE),
                CharacterMap::new(),
            )
            // Fun & Creative
            .register(
                def(
                    "small-caps",
                    "Small Caps",
                    FunCreative,
                    "Small capital letters",
                    "ʜᴇʟʟᴏ",
                ),
                Substitute,
                tables::SMALL_CAPS.to_map(),
            )
            .register(
                def(
                    "upside-down",
                    "Upside Down",
                    FunCreative,
                    "Flipped text",
                    "ollǝH",
                ),
                SubstituteThenReverse,
                tables::UPSIDE_DOWN
                    .to_map()
                    .pairs(tables::UPSIDE_DOWN_PUNCTUATION),
            )
            .register(
                def(
                    "superscript",
                    "Superscript",
                    FunCreative,
                    "Raised characters",
                    "ᴴᵉˡˡᵒ",
                ),
                Substitute,
                tables::SUPERSCRIPT.to_map().pairs(tables::SUPERSCRIPT_SIGNS),
            )
            .register(
                def(
                    "subscript",
                    "Subscript",
                    FunCreative,
                    "Lowered characters",
                    "ₕₑₗₗₒ",
                ),
                Substitute,
                tables::SUBSCRIPT.to_map().pairs(tables::SUBSCRIPT_SIGNS),
            )
            .register(
                def(
                    "fullwidth",
                    "Fullwidth",
                    FunCreative,
                    "Wide characters",
                    "Ｈｅｌｌｏ",
                ),
                Substitute,
                tables::FULLWIDTH.to_map().zip(
                    tables::FULLWIDTH_PUNCTUATION_SOURCE,
                    tables::FULLWIDTH_PUNCTUATION,
                ),
            )
            .register(
                def(
                    "regional-indicator",
                    "Regional Indicator",
                    FunCreative,
                    "Flag-style letters",
                    "🇭🇪🇱🇱🇴",
                ),
                Substitute,
                tables::REGIONAL_INDICATOR.to_map(),
            )
            // Mathematical
            .register(
                def(
                    "sans-serif",
                    "Sans-serif",
                    Mathematical,
                    "Mathematical sans-serif characters",
                    "𝖧𝖾𝗅𝗅𝗈",
                ),
                Substitute,
                tables::SANS_SERIF.to_map(),
            )
            .register(
                def(
                    "sans-serif-bold",
                    "Sans-serif Bold",
                    Mathematical,
                    "Mathematical bold sans-serif characters",
                    "𝗛𝗲𝗹𝗹𝗼",
                ),
                Substitute,
                tables::BOLD_SANS.to_map(),
            )
            .register(
                def(
                    "sans-serif-italic",
                    "Sans-serif Italic",
                    Mathematical,
                    "Mathematical italic sans-serif characters",
                    "𝘏𝘦𝘭𝘭𝘰",
                ),
                Substitute,
                tables::ITALIC_SANS.to_map(),
            )
            .register(
                def(
                    "sans-serif-bold-italic",
                    "Sans-serif Bold Italic",
                    Mathematical,
                    "Mathematical bold italic sans-serif characters",
                    "𝙃𝙚𝙡𝙡𝙤",
                ),
                Substitute,
                tables::BOLD_ITALIC_SANS.to_map(),
            )
    }
}

/// The process-wide built-in registry.
pub fn global() -> &'static Registry {
    &REGISTRY
}

/// Returns the character map for a built-in style.
pub fn lookup(id: &str) -> Option<&'static CharacterMap> {
    global().lookup(id)
}

/// Returns display metadata for a built-in style.
pub fn metadata(id: &str) -> Option<&'static StyleDefinition> {
    global().metadata(id)
}

/// Returns the transform kind of a built-in style.
pub fn transform(id: &str) -> Option<Transform> {
    global().transform(id)
}

/// Whether `id` names a built-in style.
pub fn contains(id: &str) -> bool {
    global().contains(id)
}

/// All built-in style definitions in declaration order.
pub fn list_all() -> impl Iterator<Item = &'static StyleDefinition> {
    global().list_all()
}

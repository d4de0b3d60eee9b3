//! Browsing helpers for style pickers: category groups, search and quick picks.

use serde::Serialize;

use crate::style::{self, Category, StyleDefinition};

/// The short list of styles offered first in compact pickers.
pub const QUICK_STYLES: &[&str] = &[
    "bold-serif",
    "bold-sans",
    "italic-bold-serif",
    "italic-bold-sans",
    "medieval-bold",
    "double-struck",
    "script-bold",
    "negative-squared",
];

/// A category together with its styles, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleCategory {
    pub name: Category,
    pub styles: Vec<StyleDefinition>,
}

/// All categories in display order.
pub fn categories() -> &'static [Category] {
    Category::all()
}

/// Styles belonging to `category`, in registry order.
pub fn styles_in_category(category: Category) -> Vec<&'static StyleDefinition> {
    style::list_all()
        .filter(|def| def.category == category)
        .collect()
}

/// Styles matching `query` (see [`StyleDefinition::matches_query`]),
/// optionally restricted to one category.
pub fn search(query: &str, category: Option<Category>) -> Vec<&'static StyleDefinition> {
    style::list_all()
        .filter(|def| category.map_or(true, |c| def.category == c))
        .filter(|def| def.matches_query(query))
        .collect()
}

/// Definitions of the [`QUICK_STYLES`], skipping any id the registry lacks.
pub fn quick_styles() -> Vec<&'static StyleDefinition> {
    QUICK_STYLES
        .iter()
        .filter_map(|id| style::metadata(id))
        .collect()
}

/// Groups every registered style by category.
pub fn grouped() -> Vec<StyleCategory> {
    group(style::list_all())
}

/// Groups the given styles by category.
///
/// Categories come out in display order, styles keep their input order, and
/// categories with no styles are left out.
pub fn group<'a>(styles: impl IntoIterator<Item = &'a StyleDefinition>) -> Vec<StyleCategory> {
    let styles: Vec<&StyleDefinition> = styles.into_iter().collect();
    categories()
        .iter()
        .filter_map(|&category| {
            let members: Vec<StyleDefinition> = styles
                .iter()
                .filter(|def| def.category == category)
                .map(|def| **def)
                .collect();
            (!members.is_empty()).then_some(StyleCategory {
                name: category,
                styles: members,
            })
        })
        .collect()
}

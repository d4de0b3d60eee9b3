//! Named terminal styles for rendered output.

use console::Style;
use std::collections::HashMap;

/// Shown in place of styling when a template names a style the theme lacks.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A named collection of terminal styles used when rendering templates.
///
/// # Example
///
/// ```rust
/// use boldtext::render::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("heading", Style::new().bold())
///     .add("muted", Style::new().dim());
///
/// assert!(theme.has("heading"));
/// assert_eq!(theme.apply("muted", "quiet", false), "quiet");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme used by the `boldtext` command.
    pub fn cli() -> Self {
        Theme::new()
            .add("heading", Style::new().bold().underlined())
            .add("id", Style::new().cyan())
            .add("muted", Style::new().dim())
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Applies the style `name` to `text`.
    ///
    /// Without colour the text is returned as-is. Unknown style names are
    /// flagged with [`MISSING_STYLE_INDICATOR`] so template typos show up.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(_) if !use_color => text.to_string(),
            Some(style) => style.clone().force_styling(true).apply_to(text).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

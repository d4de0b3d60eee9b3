//! Template rendering for command output.
//!
//! Output is produced by rendering a minijinja template against serializable
//! data. The environment carries these filters:
//!
//! | Filter | Effect |
//! |--------|--------|
//! | `style(name)` | applies a [`Theme`] style (ANSI colour when enabled) |
//! | `unicode(style_id)` | converts the value with a Unicode text style |
//! | `pad(width)` | pads to a display width |
//! | `nl` | appends a newline |
//!
//! In [`OutputMode::Json`] the data is serialized instead of rendered.
//!
//! ```rust
//! use boldtext::render::{render, Theme};
//! use boldtext::OutputMode;
//!
//! let out = render(
//!     r#"{{ word | unicode("circled") }}"#,
//!     &serde_json::json!({ "word": "abc" }),
//!     &Theme::new(),
//!     OutputMode::Text,
//! )
//! .unwrap();
//! assert_eq!(out, "ⓐⓑⓒ");
//! ```

mod filters;
mod theme;

use minijinja::Environment;
use serde::Serialize;
use std::fmt;

pub use theme::{Theme, MISSING_STYLE_INDICATOR};

use crate::output::OutputMode;
use filters::register_filters;

/// Error returned when output cannot be produced.
#[derive(Debug)]
pub enum RenderError {
    /// The template failed to compile or render.
    Template(minijinja::Error),
    /// The data could not be serialized to JSON.
    Serialize(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Template(e) => write!(f, "template error: {}", e),
            RenderError::Serialize(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Template(e) => Some(e),
            RenderError::Serialize(e) => Some(e),
        }
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(e: minijinja::Error) -> Self {
        RenderError::Template(e)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        RenderError::Serialize(e)
    }
}

/// Renders `template` with `data`, styling through `theme` as `mode` allows.
pub fn render<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    mode: OutputMode,
) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    register_filters(&mut env, theme.clone(), mode);
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    Ok(tmpl.render(data)?)
}

/// Serializes `data` as pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(data: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Renders the template, or serializes `data` when `mode` is structured.
pub fn render_or_serialize<T: Serialize>(
    template: &str,
    data: &T,
    theme: &Theme,
    mode: OutputMode,
) -> Result<String, RenderError> {
    if mode.is_structured() {
        to_json(data)
    } else {
        render(template, data, theme, mode)
    }
}

//! # boldtext - styled Unicode text
//!
//! `boldtext` converts plain text into visually styled Unicode variants:
//! mathematical bold and italic, script, Fraktur, circled and squared
//! letters, small caps, upside-down text, combining underlines and more.
//!
//! Each style is a character table plus a [`Transform`]:
//!
//! - most styles substitute each code point through their table
//! - `upside-down` substitutes, then reverses the sequence
//! - `underlined`, `strikethrough` and `overlined` append a combining mark
//!
//! Characters a table does not cover are passed through untouched, and an
//! unknown style id returns the input unchanged, so conversion never fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use boldtext::{convert, get_all_conversions, list_styles};
//!
//! assert_eq!(convert("Hello", "bold-serif"), "𝐇𝐞𝐥𝐥𝐨");
//! assert_eq!(convert("Hello", "double-struck"), "ℍ𝕖𝕝𝕝𝕠");
//! assert_eq!(convert("Hello, 世界", "monospace"), "𝙷𝚎𝚕𝚕𝚘, 世界");
//!
//! // Every registered style, in declaration order
//! let all = get_all_conversions("A");
//! assert_eq!(all.len(), list_styles().count());
//! ```
//!
//! ## Browsing styles
//!
//! [`catalog`] groups styles by [`Category`], searches them by name or
//! description, and exposes the short [`QUICK_STYLES`] list:
//!
//! ```rust
//! use boldtext::catalog;
//!
//! let hits = catalog::search("fraktur", None);
//! assert_eq!(hits[0].id, "medieval-bold");
//! ```
//!
//! ## Features
//!
//! - `cli` (default): the `boldtext` binary and the [`cli`] module. Library
//!   users can disable it to drop `clap`, `anyhow`, `thiserror` and
//!   `env_logger`.
//!
//! ## Thread safety
//!
//! The style registry is built once on first use and never modified, so all
//! functions here can be called from any number of threads.

pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
mod convert;
mod output;
pub mod render;
pub mod style;
mod util;

pub use catalog::{StyleCategory, QUICK_STYLES};
pub use convert::{convert, convert_with, find_conversion, get_all_conversions, ConvertedText};
pub use output::OutputMode;
pub use style::{Category, CharacterMap, StyleDefinition, Transform};
pub use util::{max_width, pad_to_width};

/// All styles in declaration order, for populating style pickers.
///
/// Repeated calls return identical sequences.
pub fn list_styles() -> impl Iterator<Item = &'static StyleDefinition> {
    style::list_all()
}

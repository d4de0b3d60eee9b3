//! Style registry and character tables.
//!
//! This module provides the data half of the engine:
//!
//! - [`StyleDefinition`]: display metadata for one style (id, name, category, ...)
//! - [`Category`]: the grouping used by style pickers
//! - [`Transform`]: how a style is applied (plain substitution, reversal, combining mark)
//! - [`CharacterMap`]: an immutable source-char to replacement table
//! - [`Registry`]: the ordered, process-wide collection of all of the above
//!
//! The registry is built on first use and never mutated afterwards, so every
//! accessor here is safe to call from any thread without locking.

mod charmap;
mod definition;
mod registry;
mod tables;

pub use charmap::CharacterMap;
pub use definition::{
    Category, StyleDefinition, Transform, COMBINING_LONG_STROKE_OVERLAY, COMBINING_LOW_LINE,
    COMBINING_OVERLINE,
};
pub use registry::{contains, global, list_all, lookup, metadata, transform, Registry, StyleEntry};

//! Output mode selection.

#[cfg(feature = "cli")]
use clap::ValueEnum;

/// How command output is produced.
///
/// - `Auto`: styled when stdout supports colour, plain otherwise
/// - `Term`: always styled with ANSI codes
/// - `Text`: never styled
/// - `Json`: structured data instead of rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
pub enum OutputMode {
    #[default]
    Auto,
    Term,
    Text,
    Json,
}

impl OutputMode {
    /// Whether theme styles should emit ANSI codes.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Json => false,
        }
    }

    /// Whether output is serialized data rather than a rendered template.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

//! Command-line errors.

use thiserror::Error;

use crate::render::RenderError;

/// Errors reported by the `boldtext` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested style id is not registered.
    #[error("unknown style '{id}'{}", suggestion_hint(.suggestion))]
    UnknownStyle {
        id: String,
        suggestion: Option<String>,
    },

    /// The `--category` value matches no category.
    #[error("unknown category '{0}' (expected one of: {1})")]
    UnknownCategory(String, String),

    /// Reading text from stdin failed.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),

    /// Writing the result failed, e.g. the reader closed the pipe.
    #[error("failed to write output: {0}")]
    Output(std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_with_suggestion() {
        let err = CliError::UnknownStyle {
            id: "bold".to_string(),
            suggestion: Some("bold-serif".to_string()),
        };
        assert_eq!(err.to_string(), "unknown style 'bold' (did you mean 'bold-serif'?)");
    }

    #[test]
    fn test_unknown_style_without_suggestion() {
        let err = CliError::UnknownStyle {
            id: "zzz".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "unknown style 'zzz'");
    }

    #[test]
    fn test_unknown_category_lists_choices() {
        let err = CliError::UnknownCategory(
            "emoji".to_string(),
            "decorative, mathematical".to_string(),
        );
        let msg = err.to_string();
        assert!(msg.contains("emoji"));
        assert!(msg.contains("decorative"));
    }
}

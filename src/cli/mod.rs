//! The `boldtext` command line front end.
//!
//! Subcommands:
//!
//! - `convert [-s STYLE] [TEXT...]`: one style (text from stdin when omitted)
//! - `all [TEXT...]`: every style, one per line
//! - `list [--category CAT] [--search QUERY] [--quick]`: browse styles
//!
//! The global `--output` flag (or `BOLDTEXT_OUTPUT`) selects `auto`, `term`,
//! `text` or `json` output. `BOLDTEXT_STYLE` sets the default style for
//! `convert`.
//!
//! All character work goes through [`crate::convert`]; this module only
//! parses arguments, validates style ids and renders results.

mod error;
mod views;

use clap::{Parser, Subcommand};
use log::debug;
use std::io::{Read, Write};

pub use error::CliError;

use crate::catalog;
use crate::convert::{convert, get_all_conversions, ConvertedText};
use crate::output::OutputMode;
use crate::render::{render_or_serialize, Theme};
use crate::style::{self, Category};
use views::{AllRow, AllView, ListView, ALL_TEMPLATE, CONVERT_TEMPLATE, LIST_TEMPLATE};

/// Style used by `convert` when none is given.
pub const DEFAULT_STYLE: &str = "bold-serif";

#[derive(Debug, Parser)]
#[command(name = "boldtext", version, about = "Convert text into styled Unicode variants")]
pub struct Cli {
    /// Output mode
    #[arg(
        long,
        global = true,
        value_enum,
        env = "BOLDTEXT_OUTPUT",
        default_value_t = OutputMode::Auto
    )]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert text with a single style
    Convert {
        /// Style id (see `boldtext list`)
        #[arg(short, long, env = "BOLDTEXT_STYLE", default_value = DEFAULT_STYLE)]
        style: String,

        /// Text to convert; read from stdin when omitted
        text: Vec<String>,
    },

    /// Show text converted with every style
    All {
        /// Text to convert; read from stdin when omitted
        text: Vec<String>,
    },

    /// List the available styles
    List {
        /// Only styles in this category (name or slug, e.g. `decorative`)
        #[arg(short, long)]
        category: Option<String>,

        /// Only styles whose name, description or id contains this text
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Only the quick-pick styles
        #[arg(long)]
        quick: bool,
    },
}

/// Runs a parsed command, reading text from `input` when the command has
/// none and writing the result to `out`.
pub fn run<R: Read, W: Write>(cli: Cli, input: R, out: &mut W) -> Result<(), CliError> {
    debug!("running {:?} with output {:?}", cli.command, cli.output);
    let theme = Theme::cli();
    let mode = cli.output;

    let mut rendered = match cli.command {
        Command::Convert { style, text } => {
            let text = read_text(text, input)?;
            convert_command(&style, &text, &theme, mode)?
        }
        Command::All { text } => {
            let text = read_text(text, input)?;
            all_command(&text, &theme, mode)?
        }
        Command::List {
            category,
            search,
            quick,
        } => list_command(category.as_deref(), search.as_deref(), quick, &theme, mode)?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::Output)
}

fn convert_command(
    style_id: &str,
    text: &str,
    theme: &Theme,
    mode: OutputMode,
) -> Result<String, CliError> {
    let definition = style::metadata(style_id).ok_or_else(|| CliError::UnknownStyle {
        id: style_id.to_string(),
        suggestion: suggest_style(style_id).map(str::to_string),
    })?;

    let view = ConvertedText {
        style_id: definition.id,
        text: convert(text, definition.id),
    };
    Ok(render_or_serialize(CONVERT_TEMPLATE, &view, theme, mode)?)
}

fn all_command(text: &str, theme: &Theme, mode: OutputMode) -> Result<String, CliError> {
    let rows: Vec<AllRow> = get_all_conversions(text)
        .into_iter()
        .filter_map(|c| {
            style::metadata(c.style_id).map(|def| AllRow {
                id: def.id,
                name: def.name,
                text: c.text,
            })
        })
        .collect();
    let view = AllView::new(rows);
    Ok(render_or_serialize(ALL_TEMPLATE, &view, theme, mode)?)
}

fn list_command(
    category: Option<&str>,
    query: Option<&str>,
    quick: bool,
    theme: &Theme,
    mode: OutputMode,
) -> Result<String, CliError> {
    let category = category.map(parse_category).transpose()?;

    let query = query.unwrap_or("");

    let mut styles = if quick {
        catalog::quick_styles()
    } else {
        catalog::search(query, category)
    };
    if quick {
        styles.retain(|def| {
            category.map_or(true, |c| def.category == c) && def.matches_query(query)
        });
    }

    let view = ListView::new(catalog::group(styles));
    Ok(render_or_serialize(LIST_TEMPLATE, &view, theme, mode)?)
}

fn parse_category(input: &str) -> Result<Category, CliError> {
    Category::parse(input).ok_or_else(|| {
        let expected: Vec<_> = Category::all().iter().map(Category::slug).collect();
        CliError::UnknownCategory(input.to_string(), expected.join(", "))
    })
}

/// Joins argument words, or reads all of `input` when there are none.
///
/// One trailing line ending is dropped from piped input, since the command
/// adds its own.
fn read_text<R: Read>(args: Vec<String>, mut input: R) -> Result<String, CliError> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Picks the first registered id containing `id`, falling back to the id
/// sharing the longest prefix with it (at least three characters).
fn suggest_style(id: &str) -> Option<&'static str> {
    let id = id.trim().to_lowercase();
    if id.is_empty() {
        return None;
    }
    if let Some(candidate) = style::global().ids().find(|candidate| candidate.contains(&id)) {
        return Some(candidate);
    }
    style::global()
        .ids()
        .map(|candidate| (common_prefix_len(&id, candidate), candidate))
        .filter(|(len, _)| *len >= 3)
        .min_by_key(|(len, _)| std::cmp::Reverse(*len))
        .map(|(_, candidate)| candidate)
}

fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str], stdin: &str) -> Result<String, CliError> {
        let mut argv = vec!["boldtext", "--output", "text"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        let mut out = Vec::new();
        run(cli, stdin.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).expect("output is utf-8"))
    }

    fn run_json(args: &[&str]) -> serde_json::Value {
        let mut argv = vec!["boldtext", "--output", "json"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(cli, &b""[..], &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_convert_args() {
        let out = run_args(&["convert", "-s", "double-struck", "Hello"], "").unwrap();
        assert_eq!(out, "ℍ𝕖𝕝𝕝𝕠\n");
    }

    #[test]
    fn test_convert_joins_words() {
        let out = run_args(&["convert", "--style", "circled", "a", "b"], "").unwrap();
        assert_eq!(out, "ⓐ ⓑ\n");
    }

    #[test]
    fn test_convert_reads_stdin() {
        let out = run_args(&["convert", "-s", "bold-sans"], "ab1\n").unwrap();
        assert_eq!(out, "𝗮𝗯𝟭\n");
    }

    #[test]
    fn test_convert_stdin_keeps_inner_newlines() {
        let out = run_args(&["convert", "-s", "underlined"], "a\nb\r\n").unwrap();
        assert_eq!(out, "a\u{332}\nb\u{332}\n");
    }

    #[test]
    fn test_convert_unknown_style_errors() {
        let err = run_args(&["convert", "-s", "bold", "x"], "").unwrap_err();
        match err {
            CliError::UnknownStyle { id, suggestion } => {
                assert_eq!(id, "bold");
                assert_eq!(suggestion.as_deref(), Some("bold-serif"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_convert_json() {
        let value = run_json(&["convert", "-s", "upside-down", "Hi"]);
        assert_eq!(value["style_id"], "upside-down");
        assert_eq!(value["text"], "ᴉH");
    }

    #[test]
    fn test_all_lists_every_style() {
        let out = run_args(&["all", "A"], "").unwrap();
        assert_eq!(out.lines().count(), style::global().len());
        assert!(out.lines().next().unwrap().starts_with("Bold (serif)"));
        assert!(out.lines().next().unwrap().ends_with("𝐀"));
    }

    #[test]
    fn test_all_json() {
        let value = run_json(&["all", "A"]);
        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), style::global().len());
        assert_eq!(rows[0]["id"], "bold-serif");
        assert_eq!(rows[0]["name"], "Bold (serif)");
        assert_eq!(rows[0]["text"], "𝐀");
    }

    #[test]
    fn test_list_json_matches_template_view() {
        let value = run_json(&["list", "--category", "mathematical"]);
        let groups = value["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["name"], "Mathematical");
        assert_eq!(groups[0]["styles"][0]["id"], "sans-serif");
        assert_eq!(value["width"], "sans-serif-bold-italic".len());
    }

    #[test]
    fn test_write_failure_is_output_error() {
        let cli = Cli::try_parse_from(["boldtext", "convert", "-s", "circled", "a"]).unwrap();
        let err = run(cli, &b""[..], &mut ClosedPipe).unwrap_err();
        assert!(matches!(err, CliError::Output(_)));
        assert_eq!(err.to_string(), "failed to write output: pipe closed");
    }

    #[test]
    fn test_read_failure_is_input_error() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "no stdin"))
            }
        }

        let err = read_text(Vec::new(), FailingReader).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
        assert_eq!(err.to_string(), "failed to read input: no stdin");
    }

    #[test]
    fn test_list_groups_by_category() {
        let out = run_args(&["list"], "").unwrap();
        assert!(out.starts_with("Bold & Italic\n"));
        assert!(out.contains("Mathematical\n"));
        assert!(out.contains("double-struck"));
        assert!(out.contains("ℍ𝕖𝕝𝕝𝕠"));
    }

    #[test]
    fn test_list_filters() {
        let out = run_args(&["list", "--category", "decorative", "--search", "line"], "").unwrap();
        assert!(out.starts_with("Decorative\n"));
        assert!(out.contains("underlined"));
        assert!(out.contains("overlined"));
        assert!(!out.contains("circled"));
    }

    #[test]
    fn test_list_quick() {
        let out = run_args(&["list", "--quick"], "").unwrap();
        assert!(out.contains("negative-squared"));
        assert!(!out.contains("upside-down"));
    }

    #[test]
    fn test_list_no_match() {
        let out = run_args(&["list", "--search", "zzzz"], "").unwrap();
        assert_eq!(out, "No styles match.\n");
    }

    #[test]
    fn test_list_unknown_category() {
        let err = run_args(&["list", "--category", "emoji"], "").unwrap_err();
        assert!(matches!(err, CliError::UnknownCategory(ref c, _) if c == "emoji"));
    }

    #[test]
    fn test_suggest_style() {
        assert_eq!(suggest_style("frak"), Some("fraktur"));
        assert_eq!(suggest_style("Italic"), Some("italic-bold-serif"));
        assert_eq!(suggest_style("struck"), Some("double-struck"));
        assert_eq!(suggest_style("bold-sarif"), Some("bold-sans"));
        assert_eq!(suggest_style("gothic"), None);
        assert_eq!(suggest_style(""), None);
    }

    #[test]
    fn test_read_text_prefers_args() {
        let text = read_text(vec!["a".into(), "b".into()], &b"ignored"[..]).unwrap();
        assert_eq!(text, "a b");
    }
}

//! MiniJinja filter registration.

use minijinja::{Environment, Value};

use super::theme::Theme;
use crate::output::OutputMode;

/// Registers all built-in filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>, theme: Theme, mode: OutputMode) {
    let use_color = mode.should_use_color();

    // {{ value | style("heading") }} applies a theme style (terminal colours).
    env.add_filter("style", move |value: Value, name: String| -> String {
        theme.apply(&name, &value.to_string(), use_color)
    });

    // {{ value | unicode("bold-serif") }} applies a Unicode text style.
    env.add_filter("unicode", |value: Value, style_id: String| -> String {
        crate::convert(&value.to_string(), &style_id)
    });

    // {{ value | pad(12) }} pads to a display width in terminal columns.
    env.add_filter("pad", |value: Value, width: usize| -> String {
        crate::util::pad_to_width(&value.to_string(), width)
    });

    // {{ content | nl }} appends a newline, for explicit line break control.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

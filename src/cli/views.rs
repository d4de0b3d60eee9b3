//! Templates and view data for command output.

use serde::Serialize;

use crate::catalog::StyleCategory;
use crate::util::max_width;

pub(crate) const CONVERT_TEMPLATE: &str = "{{ text }}";

pub(crate) const LIST_TEMPLATE: &str = r#"{% for group in groups %}
{{ group.name | style("heading") }}
{% for style in group.styles %}
  {{ style.id | pad(width) | style("id") }}  {{ style.example }}  {{ style.name | style("muted") }}
{% endfor %}
{% else %}
No styles match.
{% endfor %}
"#;

pub(crate) const ALL_TEMPLATE: &str = r#"{% for row in rows %}
{{ row.name | pad(width) | style("muted") }}  {{ row.text }}
{% endfor %}
"#;

#[derive(Debug, Serialize)]
pub(crate) struct ListView {
    pub groups: Vec<StyleCategory>,
    pub width: usize,
}

impl ListView {
    pub(crate) fn new(groups: Vec<StyleCategory>) -> Self {
        let width = max_width(groups.iter().flat_map(|g| g.styles.iter().map(|s| s.id)));
        Self { groups, width }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AllRow {
    pub id: &'static str,
    pub name: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AllView {
    pub rows: Vec<AllRow>,
    pub width: usize,
}

impl AllView {
    pub(crate) fn new(rows: Vec<AllRow>) -> Self {
        let width = max_width(rows.iter().map(|r| r.name));
        Self { rows, width }
    }
}

//! Plain-text outline of the editor state
//!
//! Renders what a canvas would show: sections in order, each row with its
//! occupied grid columns, and each field with its span, kind, label and
//! kind-specific attributes. The active section is marked with `*` and the
//! selected field with `>`.

use crate::editor::{Editor, SelectionPath};
use crate::form::{FieldKind, RowPath, GRID_COLUMNS};

/// Render the editor's tree and selection as an indented outline
pub fn render_outline(editor: &Editor) -> String {
    let mut out = String::new();
    let selection = editor.selection_path();
    let selected_field = match selection {
        Some(SelectionPath::Field(path)) => Some(path),
        _ => None,
    };
    let active = editor.active_section();

    out.push_str(&format!("font size: {}\n", editor.global_font_size()));
    out.push_str(&format!(
        "selection: {}\n",
        match selection {
            None => "none".to_string(),
            Some(SelectionPath::Section(index)) => format!("section-{}", index),
            Some(SelectionPath::Field(path)) => path.to_string(),
        }
    ));

    for (s, section) in editor.form().sections.iter().enumerate() {
        let marker = if active == Some(s) { " *" } else { "" };
        out.push_str(&format!("{}{}\n", section.title, marker));

        for (r, row) in section.rows.iter().enumerate() {
            let path = RowPath::new(s, r);
            if row.is_empty() {
                out.push_str(&format!("  {} (empty)\n", path));
                continue;
            }
            out.push_str(&format!(
                "  {} ({}/{})\n",
                path,
                row.total_span(),
                GRID_COLUMNS
            ));
            for (f, field) in row.fields.iter().enumerate() {
                let cursor = if selected_field == Some(path.field(f)) {
                    ">"
                } else {
                    " "
                };
                out.push_str(&format!(
                    "   {}[{}] {} {:?}{}\n",
                    cursor,
                    field.col_span,
                    field.field_type(),
                    field.label,
                    attributes(&field.kind)
                ));
            }
        }
    }

    out
}

fn attributes(kind: &FieldKind) -> String {
    let mut attrs = String::new();
    if let Some(placeholder) = kind.placeholder() {
        attrs.push_str(&format!(" placeholder={:?}", placeholder));
    }
    if let Some(options) = kind.options() {
        attrs.push_str(&format!(" options={:?}", options));
    }
    if let Some(appearance) = kind.appearance() {
        attrs.push_str(&format!(" appearance={}", appearance));
    }
    attrs
}

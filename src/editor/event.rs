//! UI events consumed by the editor

use serde::Deserialize;

use crate::form::Appearance;

use super::container::{ClickTarget, ContainerId};

/// A completed drag-and-drop gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragDrop {
    pub source: ContainerId,
    pub dest: ContainerId,
    pub source_index: usize,
    pub dest_index: usize,
}

impl DragDrop {
    pub fn new(source: ContainerId, dest: ContainerId, source_index: usize, dest_index: usize) -> Self {
        Self {
            source,
            dest,
            source_index,
            dest_index,
        }
    }
}

/// One user interaction. Inspector edits target the current selection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Drop {
        from: ContainerId,
        to: ContainerId,
        from_index: usize,
        to_index: usize,
    },
    Click {
        target: ClickTarget,
    },
    /// Title of the active section
    SetTitle {
        title: String,
    },
    SetLabel {
        label: String,
    },
    SetPlaceholder {
        placeholder: String,
    },
    SetFontSize {
        font_size: String,
    },
    SetAppearance {
        appearance: Appearance,
    },
    SetOption {
        index: usize,
        value: String,
    },
    AddOption,
    RemoveOption {
        index: usize,
    },
    SetColSpan {
        span: u8,
    },
    SetGlobalFontSize {
        font_size: String,
    },
    DeleteField,
    DeleteSection,
}

impl Event {
    /// Short name used in logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            Event::Drop { .. } => "drop",
            Event::Click { .. } => "click",
            Event::SetTitle { .. } => "set_title",
            Event::SetLabel { .. } => "set_label",
            Event::SetPlaceholder { .. } => "set_placeholder",
            Event::SetFontSize { .. } => "set_font_size",
            Event::SetAppearance { .. } => "set_appearance",
            Event::SetOption { .. } => "set_option",
            Event::AddOption => "add_option",
            Event::RemoveOption { .. } => "remove_option",
            Event::SetColSpan { .. } => "set_col_span",
            Event::SetGlobalFontSize { .. } => "set_global_font_size",
            Event::DeleteField => "delete_field",
            Event::DeleteSection => "delete_section",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::RowPath;

    #[derive(Deserialize)]
    struct Wrapper {
        event: Vec<Event>,
    }

    #[test]
    fn test_deserialize_events() {
        let source = r#"
[[event]]
type = "drop"
from = "availableFields"
to = "row-0-0"
from_index = 2
to_index = 0

[[event]]
type = "click"
target = "outside"

[[event]]
type = "set_appearance"
appearance = "fill"

[[event]]
type = "add_option"
"#;
        let parsed: Wrapper = toml::from_str(source).expect("Should parse");
        assert_eq!(
            parsed.event,
            vec![
                Event::Drop {
                    from: ContainerId::Palette,
                    to: ContainerId::Row(RowPath::new(0, 0)),
                    from_index: 2,
                    to_index: 0,
                },
                Event::Click {
                    target: ClickTarget::Outside
                },
                Event::SetAppearance {
                    appearance: Appearance::Fill
                },
                Event::AddOption,
            ]
        );
        assert_eq!(parsed.event[3].name(), "add_option");
    }

    #[test]
    fn test_bad_container_id_fails() {
        let source = r#"
[[event]]
type = "drop"
from = "nowhere"
to = "row-0-0"
from_index = 0
to_index = 0
"#;
        let result: Result<Wrapper, _> = toml::from_str(source);
        assert!(result.is_err());
    }
}

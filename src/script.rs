//! Session scripts: recorded UI events replayed through an editor
//!
//! A session is a TOML file with one `[[event]]` table per interaction:
//!
//! ```toml
//! [[event]]
//! type = "drop"
//! from = "availableFields"
//! to = "row-0-0"
//! from_index = 1
//! to_index = 0
//!
//! [[event]]
//! type = "click"
//! target = "field-0-0-0"
//!
//! [[event]]
//! type = "set_label"
//! label = "Full name"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::editor::{Editor, Event};
use crate::error::ScriptError;

/// A parsed session script
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    #[serde(default, rename = "event")]
    pub events: Vec<Event>,
}

impl Session {
    pub fn from_file(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply every event to `editor` in order.
    ///
    /// A refused drop only leaves its notice on the editor, like the blocking
    /// alert it stands for, and the replay goes on. Any other failure stops
    /// the replay at that event.
    pub fn run(&self, editor: &mut Editor) -> Result<(), ScriptError> {
        for (index, event) in self.events.iter().enumerate() {
            let name = event.name();
            match editor.apply(event.clone()) {
                Ok(()) => debug!(index, event = name, "applied event"),
                Err(err) if err.is_capacity() => {
                    debug!(index, event = name, "event refused: {}", err)
                }
                Err(source) => return Err(ScriptError::Event {
                    index,
                    name,
                    source,
                }),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormError;

    #[test]
    fn test_empty_session() {
        let session = Session::from_str("").expect("Should parse");
        assert!(session.events.is_empty());
        let mut editor = Editor::new();
        session.run(&mut editor).unwrap();
        assert_eq!(editor.form().sections.len(), 1);
    }

    #[test]
    fn test_failing_event_stops_replay() {
        let session = Session::from_str(
            r#"
[[event]]
type = "delete_field"

[[event]]
type = "set_global_font_size"
font_size = "30px"
"#,
        )
        .expect("Should parse");
        let mut editor = Editor::new();
        let err = session.run(&mut editor).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Event {
                index: 0,
                source: FormError::NothingSelected,
                ..
            }
        ));
        assert_eq!(editor.global_font_size(), "16px");
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let result = Session::from_str("[[event]]\ntype = \"explode\"\n");
        assert!(matches!(result, Err(ScriptError::Toml(_))));
    }
}

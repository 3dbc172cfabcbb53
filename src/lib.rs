//! Form Canvas - the layout model behind a drag-and-drop form builder
//!
//! A form is a tree of sections, rows and fields laid out on a 12-column
//! grid. This library keeps that tree consistent while a user drags fields
//! in from a palette, moves them between rows, resizes and deletes them, and
//! keeps a single selection in sync with it. Rendering is left to the
//! caller, which reads the tree back after every event.
//!
//! # Example
//!
//! ```rust
//! use form_canvas::{ContainerId, DragDrop, Editor, RowPath};
//!
//! let mut editor = Editor::new();
//! let row = ContainerId::Row(RowPath::new(0, 0));
//! editor.drag_dropped(DragDrop::new(ContainerId::Palette, row, 0, 0)).unwrap();
//! editor.drag_dropped(DragDrop::new(ContainerId::Palette, row, 1, 1)).unwrap();
//!
//! let spans: Vec<u8> = editor.form().sections[0].rows[0]
//!     .fields
//!     .iter()
//!     .map(|f| f.col_span)
//!     .collect();
//! assert_eq!(spans, vec![6, 6]);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod notice;
pub mod outline;
pub mod script;

pub use config::{BuilderConfig, ConfigError};
pub use editor::{ClickTarget, ContainerId, DragDrop, Editor, Event, Selection, SelectionPath};
pub use error::ScriptError;
pub use form::{
    Appearance, Field, FieldId, FieldKind, FieldPath, FieldType, Form, FormError, FormStore, Row,
    RowPath, Section, SectionId, GRID_COLUMNS,
};
pub use notice::{Notice, NoticeCategory};
pub use outline::render_outline;
pub use script::Session;

/// Replay a session script with default settings
///
/// # Example
///
/// ```rust
/// use form_canvas::replay;
///
/// let editor = replay(r#"
///     [[event]]
///     type = "drop"
///     from = "availableFields"
///     to = "row-0-0"
///     from_index = 0
///     to_index = 0
/// "#).unwrap();
///
/// assert_eq!(editor.form().sections.len(), 2);
/// ```
pub fn replay(source: &str) -> Result<Editor, ScriptError> {
    replay_with_config(source, &BuilderConfig::default())
}

/// Replay a session script on an editor built from `config`
pub fn replay_with_config(source: &str, config: &BuilderConfig) -> Result<Editor, ScriptError> {
    let session = Session::from_str(source)?;
    let mut editor = Editor::with_config(config);
    session.run(&mut editor)?;
    Ok(editor)
}

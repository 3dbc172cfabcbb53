//! The editor: the single object a renderer drives and observes
//!
//! An [`Editor`] composes the form store, the selection, and the pending
//! notices. UI events come in through [`Editor::drag_dropped`],
//! [`Editor::click`] and the inspector setters (or all of them through
//! [`Editor::apply`]); the renderer re-reads the tree, the selection and the
//! drop targets afterwards.

pub mod container;
pub mod event;
pub mod selection;

pub use container::{ClickTarget, ContainerId, IdError, CANVAS_ID, PALETTE_ID};
pub use event::{DragDrop, Event};
pub use selection::{Selection, SelectionPath};

use tracing::{debug, warn};

use crate::config::BuilderConfig;
use crate::form::{Appearance, Field, FieldPath, Form, FormError, FormStore, Section};
use crate::notice::Notice;

/// Form store plus selection, driven by UI events
#[derive(Debug, Clone, Default)]
pub struct Editor {
    store: FormStore,
    selection: Selection,
    notices: Vec<Notice>,
}

impl Editor {
    /// An editor with default settings and a freshly seeded form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &BuilderConfig) -> Self {
        Self {
            store: FormStore::new(config),
            selection: Selection::Idle,
            notices: Vec::new(),
        }
    }

    // ── Read surface ──────────────────────────────────────────────────

    pub fn form(&self) -> &Form {
        self.store.form()
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selection resolved against the current tree
    pub fn selection_path(&self) -> Option<SelectionPath> {
        self.selection.resolve(self.store.form())
    }

    /// Section highlighted as active (selected, or owning the selected field)
    pub fn active_section(&self) -> Option<usize> {
        self.selection.active_section(self.store.form())
    }

    pub fn selected_field(&self) -> Option<&Field> {
        let path = self.selection.field_path(self.store.form()).ok()?;
        self.store.form().field(path).ok()
    }

    pub fn global_font_size(&self) -> &str {
        self.store.font_size()
    }

    /// One drop container per existing row
    pub fn row_targets(&self) -> Vec<ContainerId> {
        self.store
            .form()
            .row_paths()
            .into_iter()
            .map(ContainerId::Row)
            .collect()
    }

    /// Containers a dragged field can be wired to: the palette plus every row
    pub fn drop_targets(&self) -> Vec<ContainerId> {
        std::iter::once(ContainerId::Palette)
            .chain(self.row_targets())
            .collect()
    }

    /// Notices waiting to be shown
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand pending notices to the renderer
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ── Events ────────────────────────────────────────────────────────

    /// Apply any event
    pub fn apply(&mut self, event: Event) -> Result<(), FormError> {
        match event {
            Event::Drop {
                from,
                to,
                from_index,
                to_index,
            } => self.drag_dropped(DragDrop::new(from, to, from_index, to_index)),
            Event::Click { target } => self.click(target),
            Event::SetTitle { title } => self.set_section_title(title),
            Event::SetLabel { label } => self.set_label(label),
            Event::SetPlaceholder { placeholder } => self.set_placeholder(placeholder),
            Event::SetFontSize { font_size } => self.set_font_size(font_size),
            Event::SetAppearance { appearance } => self.set_appearance(appearance),
            Event::SetOption { index, value } => self.set_option(index, value),
            Event::AddOption => self.add_option().map(|_| ()),
            Event::RemoveOption { index } => self.remove_option(index).map(|_| ()),
            Event::SetColSpan { span } => self.set_col_span(span),
            Event::SetGlobalFontSize { font_size } => {
                self.apply_global_font_size(font_size);
                Ok(())
            }
            Event::DeleteField => self.delete_field().map(|_| ()),
            Event::DeleteSection => self.delete_section().map(|_| ()),
        }
    }

    /// Handle a finished drag.
    ///
    /// Canvas → canvas reorders sections; palette → row inserts a copy;
    /// row → row moves or transfers a field. Nothing can be dropped onto the
    /// palette. A successful field drop selects the destination section; a
    /// refused one leaves a notice.
    pub fn drag_dropped(&mut self, drop: DragDrop) -> Result<(), FormError> {
        let DragDrop {
            source,
            dest,
            source_index,
            dest_index,
        } = drop;

        let result = match (source, dest) {
            (ContainerId::Canvas, ContainerId::Canvas) => self
                .store
                .move_section(source_index, dest_index)
                .map(|()| None),
            (ContainerId::Palette, ContainerId::Row(row)) => self
                .store
                .insert_from_palette(row, source_index, dest_index)
                .map(Some),
            (ContainerId::Row(from), ContainerId::Row(to)) => self
                .store
                .transfer_field(from, to, source_index, dest_index)
                .map(Some),
            _ => Err(FormError::invalid_drop(source, dest)),
        };

        let landed = self.report(result)?;
        if let Some(path) = landed {
            self.selection
                .select_section(self.store.form(), path.section)?;
        }
        self.sync_selection();
        debug!(%source, %dest, source_index, dest_index, "handled drop");
        Ok(())
    }

    /// Update the selection from a click
    pub fn click(&mut self, target: ClickTarget) -> Result<(), FormError> {
        let form = self.store.form();
        match target {
            ClickTarget::Section(index) => self.selection.select_section(form, index)?,
            ClickTarget::Field(path) => self.selection.select_field(form, path)?,
            ClickTarget::Inspector => {}
            ClickTarget::Outside => self.selection.clear(),
        }
        Ok(())
    }

    // ── Inspector edits ───────────────────────────────────────────────

    fn selected_field_path(&self) -> Result<FieldPath, FormError> {
        self.selection.field_path(self.store.form())
    }

    /// Rename the active section
    pub fn set_section_title(&mut self, title: impl Into<String>) -> Result<(), FormError> {
        let index = self.active_section().ok_or(FormError::NothingSelected)?;
        self.store.set_section_title(index, title)
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> Result<(), FormError> {
        let path = self.selected_field_path()?;
        self.store.set_label(path, label)
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> Result<(), FormError> {
        let path = self.selected_field_path()?;
        self.store.set_placeholder(path, placeholder)
    }

    pub fn set_font_size(&mut self, font_size: impl Into<String>) -> Result<(), FormError> {
        let path = self.selected_field_path()?;
        self.store.set_font_size(path, font_size)
    }

    pub fn set_appearance(&mut self, appearance: Appearance) -> Result<(), FormError> {
        let path = self.selected_field_path()?;
        self.store.set_appearance(path, appearance)
    }

    pub fn set_option(&mut self, index: usize, value: impl Into<String>) -> Result<(), FormError> {
        let path = self.selected_field_path()?;
        self.store.set_option(path, index, value)
    }

    /// Append "New Option" (or the configured label) to the selected field
    pub fn add_option(&mut self) -> Result<usize, FormError> {
        let path = self.selected_field_path()?;
        self.store.add_option(path)
    }

    pub fn remove_option(&mut self, index: usize) -> Result<String, FormError> {
        let path = self.selected_field_path()?;
        self.store.remove_option(path, index)
    }

    /// Resize the selected field; an overflowing row is rebalanced and noticed
    pub fn set_col_span(&mut self, span: u8) -> Result<(), FormError> {
        let path = self.selected_field_path()?;
        if let Some(notice) = self.store.set_col_span(path, span)? {
            self.notices.push(notice);
        }
        Ok(())
    }

    pub fn apply_global_font_size(&mut self, font_size: impl Into<String>) {
        self.store.apply_global_font_size(font_size);
    }

    /// Delete the selected field; the selection becomes idle
    pub fn delete_field(&mut self) -> Result<Field, FormError> {
        let path = self.selected_field_path()?;
        let field = self.store.delete_field(path)?;
        self.selection.clear();
        Ok(field)
    }

    /// Delete the active section; the selection becomes idle
    pub fn delete_section(&mut self) -> Result<Section, FormError> {
        let index = self.active_section().ok_or(FormError::NothingSelected)?;
        let section = self.store.delete_section(index)?;
        self.selection.clear();
        Ok(section)
    }

    fn report<T>(&mut self, result: Result<T, FormError>) -> Result<T, FormError> {
        if let Err(err) = &result {
            if let Some(notice) = Notice::from_error(err) {
                warn!(%notice, "drop refused");
                self.notices.push(notice);
            }
        }
        result
    }

    fn sync_selection(&mut self) {
        if self.selection.prune(self.store.form()) {
            debug!("selected entity is gone, selection cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldType, RowPath};
    use crate::notice::NoticeCategory;

    fn palette_drop(editor: &mut Editor, template: usize, row: RowPath, at: usize) {
        editor
            .drag_dropped(DragDrop::new(
                ContainerId::Palette,
                ContainerId::Row(row),
                template,
                at,
            ))
            .unwrap();
    }

    #[test]
    fn test_drop_selects_destination_section() {
        let mut editor = Editor::new();
        palette_drop(&mut editor, 0, RowPath::new(0, 0), 0);
        assert_eq!(editor.selection_path(), Some(SelectionPath::Section(0)));
    }

    #[test]
    fn test_drop_onto_palette_refused() {
        let mut editor = Editor::new();
        palette_drop(&mut editor, 0, RowPath::new(0, 0), 0);
        let err = editor
            .drag_dropped(DragDrop::new(
                ContainerId::Row(RowPath::new(0, 0)),
                ContainerId::Palette,
                0,
                0,
            ))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidDrop { .. }));
        assert!(editor.notices().is_empty());
    }

    #[test]
    fn test_full_row_leaves_notice() {
        let mut editor = Editor::new();
        for _ in 0..12 {
            palette_drop(&mut editor, 5, RowPath::new(0, 0), 0);
        }
        let err = editor
            .drag_dropped(DragDrop::new(
                ContainerId::Palette,
                ContainerId::Row(RowPath::new(0, 0)),
                5,
                0,
            ))
            .unwrap_err();
        assert!(err.is_capacity());
        let notices = editor.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].category, NoticeCategory::RowFull);
        assert!(editor.notices().is_empty());
    }

    #[test]
    fn test_click_transitions() {
        let mut editor = Editor::new();
        palette_drop(&mut editor, 0, RowPath::new(0, 0), 0);

        editor.click(ClickTarget::Field(FieldPath::new(0, 0, 0))).unwrap();
        assert_eq!(editor.active_section(), Some(0));
        assert_eq!(editor.selected_field().map(Field::field_type), Some(FieldType::Text));

        editor.click(ClickTarget::Inspector).unwrap();
        assert!(editor.selected_field().is_some());

        editor.click(ClickTarget::Section(1)).unwrap();
        assert_eq!(editor.selection_path(), Some(SelectionPath::Section(1)));
        assert!(editor.selected_field().is_none());

        editor.click(ClickTarget::Outside).unwrap();
        assert!(editor.selection().is_idle());
    }

    #[test]
    fn test_inspector_edit_without_selection() {
        let mut editor = Editor::new();
        assert_eq!(editor.set_label("x"), Err(FormError::NothingSelected));
        assert_eq!(editor.set_section_title("x"), Err(FormError::NothingSelected));
    }

    #[test]
    fn test_title_edit_targets_field_section() {
        let mut editor = Editor::new();
        palette_drop(&mut editor, 0, RowPath::new(0, 0), 0);
        editor.click(ClickTarget::Field(FieldPath::new(0, 0, 0))).unwrap();
        editor.set_section_title("Contact").unwrap();
        assert_eq!(editor.form().sections[0].title, "Contact");
    }

    #[test]
    fn test_add_option_requires_option_kind() {
        let mut editor = Editor::new();
        palette_drop(&mut editor, 5, RowPath::new(0, 0), 0);
        editor.click(ClickTarget::Field(FieldPath::new(0, 0, 0))).unwrap();
        assert_eq!(
            editor.add_option(),
            Err(FormError::unsupported(FieldType::Checkbox, "options"))
        );
    }

    #[test]
    fn test_section_reorder_keeps_selection() {
        let mut editor = Editor::new();
        palette_drop(&mut editor, 0, RowPath::new(0, 0), 0);
        editor.click(ClickTarget::Section(0)).unwrap();
        editor
            .drag_dropped(DragDrop::new(ContainerId::Canvas, ContainerId::Canvas, 0, 1))
            .unwrap();
        assert_eq!(editor.selection_path(), Some(SelectionPath::Section(1)));
    }

    #[test]
    fn test_drop_targets_list_palette_and_rows() {
        let mut editor = Editor::new();
        assert_eq!(
            editor.drop_targets(),
            vec![ContainerId::Palette, ContainerId::Row(RowPath::new(0, 0))]
        );
        palette_drop(&mut editor, 0, RowPath::new(0, 0), 0);
        let ids: Vec<String> = editor.drop_targets().iter().map(|c| c.to_string()).collect();
        assert_eq!(ids, vec!["availableFields", "row-0-0", "row-0-1", "row-1-0"]);
    }
}

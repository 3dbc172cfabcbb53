//! The form tree store
//!
//! `FormStore` exclusively owns the tree. Structural operations run
//! mutate → rebalance touched rows → grow, and either apply completely or
//! leave the tree untouched.

use tracing::{debug, warn};

use crate::config::BuilderConfig;
use crate::notice::Notice;

use super::error::FormError;
use super::grid::{self, MAX_FIELDS_PER_ROW};
use super::growth::{self, Growth};
use super::palette::Palette;
use super::types::{Appearance, Field, FieldPath, Form, Row, RowPath, Section, GRID_COLUMNS};

/// Owner of the form tree and the palette it is built from
#[derive(Debug, Clone)]
pub struct FormStore {
    form: Form,
    palette: Palette,
    font_size: String,
    new_option_label: String,
    title_prefix: String,
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new(&BuilderConfig::default())
    }
}

impl FormStore {
    /// A store seeded with one section holding one empty row
    pub fn new(config: &BuilderConfig) -> Self {
        Self::with_palette(config, Palette::standard())
    }

    /// Same as [`FormStore::new`] but drawing from a custom palette
    pub fn with_palette(config: &BuilderConfig, palette: Palette) -> Self {
        Self {
            form: Form::seeded(growth::section_title(&config.section_title_prefix, 0)),
            palette,
            font_size: config.font_size.clone(),
            new_option_label: config.new_option_label.clone(),
            title_prefix: config.section_title_prefix.clone(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Font size given to new fields and applied by the global setter
    pub fn font_size(&self) -> &str {
        &self.font_size
    }

    // ── Structural operations ─────────────────────────────────────────

    /// Reorder sections; `to` is clamped to the last position
    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), FormError> {
        self.form.section(from)?;
        let to = to.min(self.form.sections.len() - 1);
        move_item(&mut self.form.sections, from, to);
        debug!(from, to, "moved section");
        Ok(())
    }

    /// Reorder fields inside one row and rebalance it
    pub fn move_field_within_row(
        &mut self,
        row: RowPath,
        from: usize,
        to: usize,
    ) -> Result<FieldPath, FormError> {
        self.form.field(row.field(from))?;
        let target = self.form.row_mut(row)?;
        let to = to.min(target.len() - 1);
        move_item(&mut target.fields, from, to);
        target.balance();
        debug!(%row, from, to, "moved field within row");
        Ok(row.field(to))
    }

    /// Place a copy of palette template `template_index` into `row` at `at`.
    ///
    /// The copy spans one column and takes the current global font size
    /// before the row is rebalanced. A row already holding 12 fields is left
    /// untouched and the drop is refused.
    pub fn insert_from_palette(
        &mut self,
        row: RowPath,
        template_index: usize,
        at: usize,
    ) -> Result<FieldPath, FormError> {
        let template = self
            .palette
            .get(template_index)
            .ok_or(FormError::TemplateNotFound {
                index: template_index,
            })?;
        if self.form.row(row)?.len() >= MAX_FIELDS_PER_ROW {
            warn!(%row, "row is full, refusing palette drop");
            return Err(FormError::row_full(row, MAX_FIELDS_PER_ROW));
        }

        let id = self.form.next_field_id();
        let field = template.instantiate(id, &self.font_size);
        let target = self.form.row_mut(row)?;
        let at = at.min(target.len());
        target.fields.insert(at, field);
        target.balance();
        debug!(%row, at, field = %id, kind = %template.field_type(), "inserted field from palette");

        self.grow(&[row.section]);
        Ok(row.field(at))
    }

    /// Move a field between rows, keeping its identity.
    ///
    /// Refused without any change when the destination holds 12 fields. A
    /// source row left empty is removed. Returns where the field landed.
    pub fn transfer_field(
        &mut self,
        from: RowPath,
        to: RowPath,
        from_index: usize,
        to_index: usize,
    ) -> Result<FieldPath, FormError> {
        if from == to {
            return self.move_field_within_row(from, from_index, to_index);
        }
        self.form.field(from.field(from_index))?;
        if self.form.row(to)?.len() >= MAX_FIELDS_PER_ROW {
            warn!(%from, %to, "destination row is full, refusing transfer");
            return Err(FormError::row_full(to, MAX_FIELDS_PER_ROW));
        }

        let source = self.form.row_mut(from)?;
        let field = source.fields.remove(from_index);
        source.balance();
        let emptied = source.is_empty();
        let id = field.id;

        let target = self.form.row_mut(to)?;
        let at = to_index.min(target.len());
        target.fields.insert(at, field);
        target.balance();

        let mut landed = to.field(at);
        if emptied {
            self.form.sections[from.section].rows.remove(from.row);
            if from.section == to.section && from.row < to.row {
                landed.row -= 1;
            }
        }
        debug!(%from, %to, field = %id, emptied, "transferred field");

        self.grow(&[landed.section, from.section]);
        Ok(landed)
    }

    /// Remove a field; a row left empty is removed with it
    pub fn delete_field(&mut self, path: FieldPath) -> Result<Field, FormError> {
        self.form.field(path)?;
        let section = &mut self.form.sections[path.section];
        let row = &mut section.rows[path.row];
        let field = row.fields.remove(path.field);
        let emptied = row.is_empty();
        if emptied {
            section.rows.remove(path.row);
        } else {
            row.balance();
        }
        debug!(%path, field = %field.id, emptied, "deleted field");

        self.grow(&[path.section]);
        Ok(field)
    }

    /// Remove a section; the form is re-seeded when none remain
    pub fn delete_section(&mut self, index: usize) -> Result<Section, FormError> {
        self.form.section(index)?;
        let removed = self.form.sections.remove(index);
        if self.form.sections.is_empty() {
            let seeded = self
                .form
                .push_section(growth::section_title(&self.title_prefix, 0));
            self.form.sections[seeded].rows.push(Row::default());
        }
        debug!(index, section = %removed.id, "deleted section");

        self.grow(&[]);
        Ok(removed)
    }

    fn grow(&mut self, affected: &[usize]) -> Growth {
        let growth = growth::grow(&mut self.form, affected, &self.title_prefix);
        if !growth.is_empty() {
            debug!(rows = ?growth.rows_added, section = ?growth.section_added, "added drop targets");
        }
        growth
    }

    // ── Property edits ────────────────────────────────────────────────

    pub fn set_section_title(
        &mut self,
        index: usize,
        title: impl Into<String>,
    ) -> Result<(), FormError> {
        self.form.section_mut(index)?.title = title.into();
        Ok(())
    }

    pub fn set_label(&mut self, path: FieldPath, label: impl Into<String>) -> Result<(), FormError> {
        self.form.field_mut(path)?.label = label.into();
        Ok(())
    }

    pub fn set_placeholder(
        &mut self,
        path: FieldPath,
        placeholder: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = self.form.field_mut(path)?;
        let field_type = field.field_type();
        let slot = field
            .kind
            .placeholder_mut()
            .ok_or(FormError::unsupported(field_type, "placeholder"))?;
        *slot = placeholder.into();
        Ok(())
    }

    pub fn set_font_size(
        &mut self,
        path: FieldPath,
        font_size: impl Into<String>,
    ) -> Result<(), FormError> {
        self.form.field_mut(path)?.font_size = Some(font_size.into());
        Ok(())
    }

    pub fn set_appearance(
        &mut self,
        path: FieldPath,
        appearance: Appearance,
    ) -> Result<(), FormError> {
        let field = self.form.field_mut(path)?;
        let field_type = field.field_type();
        let slot = field
            .kind
            .appearance_mut()
            .ok_or(FormError::unsupported(field_type, "appearance"))?;
        *slot = appearance;
        Ok(())
    }

    /// Replace the text of option `index`
    pub fn set_option(
        &mut self,
        path: FieldPath,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let options = options_mut(&mut self.form, path)?;
        let slot = options
            .get_mut(index)
            .ok_or(FormError::OptionNotFound { field: path, index })?;
        *slot = value.into();
        Ok(())
    }

    /// Append the configured new-option label; returns the option's index
    pub fn add_option(&mut self, path: FieldPath) -> Result<usize, FormError> {
        let options = options_mut(&mut self.form, path)?;
        options.push(self.new_option_label.clone());
        Ok(options.len() - 1)
    }

    pub fn remove_option(&mut self, path: FieldPath, index: usize) -> Result<String, FormError> {
        let options = options_mut(&mut self.form, path)?;
        if index >= options.len() {
            return Err(FormError::OptionNotFound { field: path, index });
        }
        Ok(options.remove(index))
    }

    /// Manually resize a field, then run the capacity check on its row.
    ///
    /// The span is kept as given unless the row overflows, in which case the
    /// row is rebalanced and the overflow notice is returned.
    pub fn set_col_span(&mut self, path: FieldPath, span: u8) -> Result<Option<Notice>, FormError> {
        if !(1..=GRID_COLUMNS).contains(&span) {
            return Err(FormError::InvalidColSpan {
                span,
                max: GRID_COLUMNS,
            });
        }
        self.form.field_mut(path)?.col_span = span;
        self.validate_row_capacity(path.row_path())
    }

    /// Rebalance `row` if its spans exceed the grid, reporting the overflow
    pub fn validate_row_capacity(&mut self, row: RowPath) -> Result<Option<Notice>, FormError> {
        let target = self.form.row_mut(row)?;
        if !grid::overflows(&target.fields) {
            return Ok(None);
        }
        let total = target.total_span();
        target.balance();
        warn!(%row, total, "column span overflow, row rebalanced");
        Ok(Some(Notice::span_overflow(row, total)))
    }

    /// Set the global font size and overwrite it on every existing field
    pub fn apply_global_font_size(&mut self, font_size: impl Into<String>) {
        self.font_size = font_size.into();
        let mut updated = 0usize;
        for field in self.form.fields_mut() {
            field.font_size = Some(self.font_size.clone());
            updated += 1;
        }
        debug!(font_size = %self.font_size, updated, "applied global font size");
    }
}

fn options_mut(form: &mut Form, path: FieldPath) -> Result<&mut Vec<String>, FormError> {
    let field = form.field_mut(path)?;
    let field_type = field.field_type();
    field
        .kind
        .options_mut()
        .ok_or(FormError::unsupported(field_type, "options"))
}

/// Move `items[from]` to position `to`; both must be in bounds
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::types::{FieldId, FieldType};
    use crate::notice::NoticeCategory;

    const TEXT: usize = 0;
    const INPUT: usize = 1;
    const CHECKBOX: usize = 5;
    const SELECT: usize = 6;

    fn store() -> FormStore {
        FormStore::default()
    }

    fn ids(store: &FormStore, row: RowPath) -> Vec<FieldId> {
        store
            .form()
            .row(row)
            .unwrap()
            .fields
            .iter()
            .map(|f| f.id)
            .collect()
    }

    #[test]
    fn test_insert_balances_and_grows() {
        let mut store = store();
        let row = RowPath::new(0, 0);
        store.insert_from_palette(row, TEXT, 0).unwrap();
        let path = store.insert_from_palette(row, INPUT, 1).unwrap();

        assert_eq!(path, FieldPath::new(0, 0, 1));
        assert_eq!(grid::spans(&store.form().row(row).unwrap().fields), vec![6, 6]);
        assert_eq!(store.form().sections.len(), 2);
        assert_eq!(store.form().sections[0].rows.len(), 2);
    }

    #[test]
    fn test_insert_uses_global_font_size() {
        let config = BuilderConfig::new().with_font_size("20px");
        let mut store = FormStore::new(&config);
        let path = store
            .insert_from_palette(RowPath::new(0, 0), CHECKBOX, 0)
            .unwrap();
        assert_eq!(store.form().field(path).unwrap().font_size.as_deref(), Some("20px"));
    }

    #[test]
    fn test_insert_index_is_clamped() {
        let mut store = store();
        let path = store
            .insert_from_palette(RowPath::new(0, 0), TEXT, 99)
            .unwrap();
        assert_eq!(path, FieldPath::new(0, 0, 0));
    }

    #[test]
    fn test_insert_unknown_template() {
        let mut store = store();
        let err = store
            .insert_from_palette(RowPath::new(0, 0), 42, 0)
            .unwrap_err();
        assert_eq!(err, FormError::TemplateNotFound { index: 42 });
    }

    #[test]
    fn test_insert_into_full_row_refused() {
        let mut store = store();
        let row = RowPath::new(0, 0);
        for _ in 0..12 {
            store.insert_from_palette(row, TEXT, 0).unwrap();
        }
        let before = store.form().clone();
        let err = store.insert_from_palette(row, TEXT, 0).unwrap_err();
        assert!(err.is_capacity());
        assert_eq!(store.form(), &before);
    }

    #[test]
    fn test_move_within_row() {
        let mut store = store();
        let row = RowPath::new(0, 0);
        for template in [TEXT, INPUT, CHECKBOX] {
            store.insert_from_palette(row, template, 99).unwrap();
        }
        let before = ids(&store, row);
        let landed = store.move_field_within_row(row, 0, 2).unwrap();
        assert_eq!(landed, FieldPath::new(0, 0, 2));
        assert_eq!(ids(&store, row), vec![before[1], before[2], before[0]]);
        assert_eq!(grid::spans(&store.form().row(row).unwrap().fields), vec![4, 4, 4]);
    }

    #[test]
    fn test_move_section() {
        let mut store = store();
        store.insert_from_palette(RowPath::new(0, 0), TEXT, 0).unwrap();
        let first = store.form().sections[0].id;
        store.move_section(0, 5).unwrap();
        assert_eq!(store.form().sections[1].id, first);
        assert!(store.move_section(7, 0).is_err());
    }

    #[test]
    fn test_transfer_keeps_identity_and_removes_emptied_row() {
        let mut store = store();
        store.insert_from_palette(RowPath::new(0, 0), TEXT, 0).unwrap();
        // section 0 now has rows [text][empty]; fill the empty one
        store.insert_from_palette(RowPath::new(0, 1), INPUT, 0).unwrap();
        let moved = store.form().field(FieldPath::new(0, 0, 0)).unwrap().id;

        let landed = store
            .transfer_field(RowPath::new(0, 0), RowPath::new(0, 1), 0, 1)
            .unwrap();

        assert_eq!(landed, FieldPath::new(0, 0, 1));
        assert_eq!(store.form().field(landed).unwrap().id, moved);
        assert_eq!(
            grid::spans(&store.form().row(RowPath::new(0, 0)).unwrap().fields),
            vec![6, 6]
        );
    }

    #[test]
    fn test_delete_field_rebalances() {
        let mut store = store();
        let row = RowPath::new(0, 0);
        for _ in 0..3 {
            store.insert_from_palette(row, TEXT, 0).unwrap();
        }
        store.delete_field(row.field(1)).unwrap();
        assert_eq!(grid::spans(&store.form().row(row).unwrap().fields), vec![6, 6]);
    }

    #[test]
    fn test_delete_last_section_reseeds() {
        let mut store = store();
        let old = store.form().sections[0].id;
        store.delete_section(0).unwrap();
        assert_eq!(store.form().sections.len(), 1);
        assert_eq!(store.form().sections[0].rows.len(), 1);
        assert!(store.form().sections[0].rows[0].is_empty());
        assert_ne!(store.form().sections[0].id, old);
    }

    #[test]
    fn test_placeholder_edits() {
        let mut store = store();
        let input = store.insert_from_palette(RowPath::new(0, 0), INPUT, 0).unwrap();
        let check = store.insert_from_palette(RowPath::new(0, 0), CHECKBOX, 1).unwrap();

        store.set_placeholder(input, "Your name").unwrap();
        assert_eq!(
            store.form().field(input).unwrap().kind.placeholder(),
            Some("Your name")
        );
        assert_eq!(
            store.set_placeholder(check, "nope"),
            Err(FormError::unsupported(FieldType::Checkbox, "placeholder"))
        );
    }

    #[test]
    fn test_option_edits() {
        let mut store = store();
        let select = store.insert_from_palette(RowPath::new(0, 0), SELECT, 0).unwrap();

        assert_eq!(store.add_option(select).unwrap(), 2);
        store.set_option(select, 0, "Red").unwrap();
        assert_eq!(store.remove_option(select, 1).unwrap(), "Option 2");
        assert_eq!(
            store.form().field(select).unwrap().kind.options(),
            Some(&["Red".to_string(), "New Option".to_string()][..])
        );
        assert!(matches!(
            store.set_option(select, 5, "x"),
            Err(FormError::OptionNotFound { index: 5, .. })
        ));
    }

    #[test]
    fn test_col_span_edit_within_grid_is_kept() {
        let mut store = store();
        let row = RowPath::new(0, 0);
        store.insert_from_palette(row, TEXT, 0).unwrap();
        store.insert_from_palette(row, TEXT, 1).unwrap();

        let notice = store.set_col_span(row.field(0), 4).unwrap();
        assert_eq!(notice, None);
        assert_eq!(grid::spans(&store.form().row(row).unwrap().fields), vec![4, 6]);
    }

    #[test]
    fn test_col_span_overflow_rebalances() {
        let mut store = store();
        let row = RowPath::new(0, 0);
        store.insert_from_palette(row, TEXT, 0).unwrap();
        store.insert_from_palette(row, TEXT, 1).unwrap();

        let notice = store.set_col_span(row.field(0), 9).unwrap().unwrap();
        assert_eq!(notice.category, NoticeCategory::SpanOverflow);
        assert_eq!(grid::spans(&store.form().row(row).unwrap().fields), vec![6, 6]);
    }

    #[test]
    fn test_col_span_out_of_range() {
        let mut store = store();
        let path = store.insert_from_palette(RowPath::new(0, 0), TEXT, 0).unwrap();
        assert_eq!(
            store.set_col_span(path, 0),
            Err(FormError::InvalidColSpan { span: 0, max: 12 })
        );
        assert!(store.set_col_span(path, 13).is_err());
    }

    #[test]
    fn test_global_font_size_overwrites_existing() {
        let mut store = store();
        store.insert_from_palette(RowPath::new(0, 0), TEXT, 0).unwrap();
        store.insert_from_palette(RowPath::new(0, 1), INPUT, 0).unwrap();

        store.apply_global_font_size("22px");

        assert_eq!(store.font_size(), "22px");
        assert!(store
            .form()
            .fields()
            .all(|f| f.font_size.as_deref() == Some("22px")));
    }
}

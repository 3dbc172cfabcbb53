//! Single-selection model
//!
//! The selection refers to entities by identity, not by index, and is
//! resolved against the current tree on every read. An entity that no longer
//! exists resolves to nothing and [`Selection::prune`] drops it.

use crate::form::{FieldId, FieldPath, Form, FormError, SectionId};

/// What the user has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Section(SectionId),
    Field(FieldId),
}

/// A selection resolved to its current position in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    Section(usize),
    Field(FieldPath),
}

impl Selection {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn select_section(&mut self, form: &Form, index: usize) -> Result<(), FormError> {
        *self = Selection::Section(form.section(index)?.id);
        Ok(())
    }

    pub fn select_field(&mut self, form: &Form, path: FieldPath) -> Result<(), FormError> {
        *self = Selection::Field(form.field(path)?.id);
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    /// Current path of the selected entity, `None` when idle or dangling
    pub fn resolve(&self, form: &Form) -> Option<SelectionPath> {
        match *self {
            Selection::Idle => None,
            Selection::Section(id) => form.locate_section(id).map(SelectionPath::Section),
            Selection::Field(id) => form.locate_field(id).map(SelectionPath::Field),
        }
    }

    /// The section highlighted as active: the selected one, or the one
    /// owning the selected field
    pub fn active_section(&self, form: &Form) -> Option<usize> {
        match self.resolve(form)? {
            SelectionPath::Section(index) => Some(index),
            SelectionPath::Field(path) => Some(path.section),
        }
    }

    /// Path of the selected field, for inspector edits
    pub fn field_path(&self, form: &Form) -> Result<FieldPath, FormError> {
        match self.resolve(form) {
            Some(SelectionPath::Field(path)) => Ok(path),
            _ => Err(FormError::NothingSelected),
        }
    }

    /// Fall back to idle if the selected entity is gone; true if it was
    pub fn prune(&mut self, form: &Form) -> bool {
        if !self.is_idle() && self.resolve(form).is_none() {
            self.clear();
            return true;
        }
        false
    }
}

//! Error types for the form tree store

use thiserror::Error;

use super::types::{FieldPath, FieldType, RowPath};

/// Errors that can occur while mutating the form tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The destination row already holds one field per grid column
    #[error("cannot add field: {row} already holds {max} fields")]
    RowFull { row: RowPath, max: usize },

    /// Section index does not exist
    #[error("section {index} not found")]
    SectionNotFound { index: usize },

    /// Row path does not exist
    #[error("{row} not found")]
    RowNotFound { row: RowPath },

    /// Field path does not exist
    #[error("{field} not found")]
    FieldNotFound { field: FieldPath },

    /// Palette index does not exist
    #[error("palette template {index} not found")]
    TemplateNotFound { index: usize },

    /// The field's kind does not carry the attribute being edited
    #[error("{field_type} fields have no {attribute}")]
    UnsupportedAttribute {
        field_type: FieldType,
        attribute: &'static str,
    },

    /// Manual column span outside the grid
    #[error("column span {span} is outside 1..={max}")]
    InvalidColSpan { span: u8, max: u8 },

    /// Option index does not exist on the field
    #[error("option {index} not found on {field}")]
    OptionNotFound { field: FieldPath, index: usize },

    /// Drop between containers that do not accept each other
    #[error("cannot drop from '{from}' onto '{to}'")]
    InvalidDrop { from: String, to: String },

    /// An inspector edit arrived with no matching selection
    #[error("nothing is selected")]
    NothingSelected,
}

impl FormError {
    /// Create a row-full capacity error
    pub fn row_full(row: RowPath, max: usize) -> Self {
        Self::RowFull { row, max }
    }

    /// Create an unsupported attribute error
    pub fn unsupported(field_type: FieldType, attribute: &'static str) -> Self {
        Self::UnsupportedAttribute {
            field_type,
            attribute,
        }
    }

    /// Create an invalid drop error
    pub fn invalid_drop(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidDrop {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// True for the capacity class, the only user-facing failure
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::RowFull { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_full_display() {
        let err = FormError::row_full(RowPath::new(0, 1), 12);
        assert_eq!(
            err.to_string(),
            "cannot add field: row-0-1 already holds 12 fields"
        );
        assert!(err.is_capacity());
    }

    #[test]
    fn test_unsupported_display() {
        let err = FormError::unsupported(FieldType::Checkbox, "options");
        assert_eq!(err.to_string(), "checkbox fields have no options");
        assert!(!err.is_capacity());
    }

    #[test]
    fn test_invalid_drop_display() {
        let err = FormError::invalid_drop("row-0-0", "availableFields");
        assert!(err.to_string().contains("availableFields"));
    }
}

//! Blocking notices shown to the user.
//!
//! Capacity overflow is the only user-facing failure. A rejected drop and an
//! auto-corrected span edit both leave a notice for the renderer to display.

use std::fmt;

use crate::form::{FormError, RowPath};

/// A notice about a capacity overflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub category: NoticeCategory,
    pub row: RowPath,
    pub message: String,
}

/// Category of overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeCategory {
    /// A drop was refused because the row already holds 12 fields
    RowFull,
    /// Manual spans exceeded the grid and the row was rebalanced
    SpanOverflow,
}

impl fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeCategory::RowFull => write!(f, "row-full"),
            NoticeCategory::SpanOverflow => write!(f, "span-overflow"),
        }
    }
}

impl Notice {
    /// Notice for a span total that exceeded the grid
    pub fn span_overflow(row: RowPath, total: u32) -> Self {
        Self {
            category: NoticeCategory::SpanOverflow,
            row,
            message: format!(
                "total column span {} exceeds 12 in {}; spans were rebalanced",
                total, row
            ),
        }
    }

    /// Notice for a refused drop; `None` for non-capacity errors
    pub fn from_error(err: &FormError) -> Option<Self> {
        match err {
            FormError::RowFull { row, .. } => Some(Self {
                category: NoticeCategory::RowFull,
                row: *row,
                message: err.to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

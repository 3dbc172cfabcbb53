//! Auto-growth of drop targets
//!
//! After a field-level change the canvas must still offer an empty row in
//! the sections that were touched, and an empty trailing section once every
//! section holds content.

use super::types::{Form, Row};

/// Scaffolding appended by one growth pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Growth {
    /// Sections (by index) that received a trailing empty row
    pub rows_added: Vec<usize>,
    /// Index of the appended empty section, if any
    pub section_added: Option<usize>,
}

impl Growth {
    pub fn is_empty(&self) -> bool {
        self.rows_added.is_empty() && self.section_added.is_none()
    }
}

/// Title given to the section at `index`
pub fn section_title(prefix: &str, index: usize) -> String {
    format!("{} {}", prefix, index + 1)
}

/// Append empty rows and sections where the canvas ran out of drop targets.
///
/// Rows are checked only in the `affected` sections; the trailing-section
/// check always looks at the whole form. Appending never shifts existing
/// indices.
pub fn grow(form: &mut Form, affected: &[usize], title_prefix: &str) -> Growth {
    let mut growth = Growth::default();

    for &index in affected {
        if growth.rows_added.contains(&index) {
            continue;
        }
        if let Some(section) = form.sections.get_mut(index) {
            if section.is_filled() {
                section.rows.push(Row::default());
                growth.rows_added.push(index);
            }
        }
    }

    if form.sections.iter().all(|section| section.has_content()) {
        let title = section_title(title_prefix, form.sections.len());
        let index = form.push_section(title);
        form.sections[index].rows.push(Row::default());
        growth.section_added = Some(index);
    }

    growth
}

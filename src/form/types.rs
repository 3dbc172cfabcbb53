//! Core types for the form tree

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::grid;

/// Width of the layout grid in column units
pub const GRID_COLUMNS: u8 = 12;

/// Stable identity of a field, preserved across moves and transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FieldId(pub u64);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Stable identity of a section, preserved across reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SectionId(pub u64);

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Visual variant of an outlined form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Fill,
    Outline,
    Standard,
    Legacy,
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Fill => write!(f, "fill"),
            Appearance::Outline => write!(f, "outline"),
            Appearance::Standard => write!(f, "standard"),
            Appearance::Legacy => write!(f, "legacy"),
        }
    }
}

/// The kind of a field without its attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Input,
    Textarea,
    Number,
    Date,
    Checkbox,
    Select,
    Radio,
    Spacer,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Input => "input",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Checkbox => "checkbox",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Spacer => "spacer",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A field kind together with the attributes only that kind carries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Static paragraph text; the label is the content
    Text { appearance: Appearance },
    Input {
        placeholder: String,
        appearance: Appearance,
    },
    Textarea {
        placeholder: String,
        appearance: Appearance,
    },
    Number {
        placeholder: String,
        appearance: Appearance,
    },
    Date { appearance: Appearance },
    Checkbox,
    /// Dropdown with an ordered list of choices
    Select {
        options: Vec<String>,
        appearance: Appearance,
    },
    /// Radio group with an ordered list of choices
    Radio { options: Vec<String> },
    /// Empty filler occupying grid columns
    Spacer,
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::Text { .. } => FieldType::Text,
            FieldKind::Input { .. } => FieldType::Input,
            FieldKind::Textarea { .. } => FieldType::Textarea,
            FieldKind::Number { .. } => FieldType::Number,
            FieldKind::Date { .. } => FieldType::Date,
            FieldKind::Checkbox => FieldType::Checkbox,
            FieldKind::Select { .. } => FieldType::Select,
            FieldKind::Radio { .. } => FieldType::Radio,
            FieldKind::Spacer => FieldType::Spacer,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            FieldKind::Input { placeholder, .. }
            | FieldKind::Textarea { placeholder, .. }
            | FieldKind::Number { placeholder, .. } => Some(placeholder),
            _ => None,
        }
    }

    pub fn placeholder_mut(&mut self) -> Option<&mut String> {
        match self {
            FieldKind::Input { placeholder, .. }
            | FieldKind::Textarea { placeholder, .. }
            | FieldKind::Number { placeholder, .. } => Some(placeholder),
            _ => None,
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Select { options, .. } | FieldKind::Radio { options } => Some(options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            FieldKind::Select { options, .. } | FieldKind::Radio { options } => Some(options),
            _ => None,
        }
    }

    pub fn appearance(&self) -> Option<Appearance> {
        match self {
            FieldKind::Text { appearance }
            | FieldKind::Input { appearance, .. }
            | FieldKind::Textarea { appearance, .. }
            | FieldKind::Number { appearance, .. }
            | FieldKind::Date { appearance }
            | FieldKind::Select { appearance, .. } => Some(*appearance),
            _ => None,
        }
    }

    pub fn appearance_mut(&mut self) -> Option<&mut Appearance> {
        match self {
            FieldKind::Text { appearance }
            | FieldKind::Input { appearance, .. }
            | FieldKind::Textarea { appearance, .. }
            | FieldKind::Number { appearance, .. }
            | FieldKind::Date { appearance }
            | FieldKind::Select { appearance, .. } => Some(appearance),
            _ => None,
        }
    }
}

/// A single form control placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub id: FieldId,
    pub label: String,
    /// CSS font size, e.g. `"16px"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Occupied grid columns, 1..=12
    pub col_span: u8,
    pub kind: FieldKind,
}

impl Field {
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }
}

/// A horizontal run of fields sharing the 12-column grid
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    pub fields: Vec<Field>,
}

impl Row {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Sum of the column spans of all fields in the row
    pub fn total_span(&self) -> u32 {
        grid::total_span(&self.fields)
    }

    /// Redistribute the grid evenly across the row's fields
    pub fn balance(&mut self) {
        grid::balance(&mut self.fields);
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub rows: Vec<Row>,
}

impl Section {
    /// True when at least one row holds a field
    pub fn has_content(&self) -> bool {
        self.rows.iter().any(|row| !row.is_empty())
    }

    /// True when no row is left empty (vacuously true without rows)
    pub fn is_filled(&self) -> bool {
        self.rows.iter().all(|row| !row.is_empty())
    }
}

/// Index path to a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

impl RowPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Path to the field at `field` within this row
    pub fn field(self, field: usize) -> FieldPath {
        FieldPath::new(self.section, self.row, field)
    }
}

impl fmt::Display for RowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}-{}", self.section, self.row)
    }
}

/// Index path to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub section: usize,
    pub row: usize,
    pub field: usize,
}

impl FieldPath {
    pub fn new(section: usize, row: usize, field: usize) -> Self {
        Self {
            section,
            row,
            field,
        }
    }

    pub fn row_path(self) -> RowPath {
        RowPath::new(self.section, self.row)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field-{}-{}-{}", self.section, self.row, self.field)
    }
}

/// The root of the tree: an ordered list of sections
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Form {
    pub sections: Vec<Section>,
    #[serde(skip)]
    next_id: u64,
}

impl Form {
    /// A form holding one section with one empty row
    pub fn seeded(title: impl Into<String>) -> Self {
        let mut form = Self::default();
        let index = form.push_section(title);
        form.sections[index].rows.push(Row::default());
        form
    }

    /// Append a section without rows, returning its index
    pub fn push_section(&mut self, title: impl Into<String>) -> usize {
        let id = SectionId(self.allocate_id());
        self.sections.push(Section {
            id,
            title: title.into(),
            rows: Vec::new(),
        });
        self.sections.len() - 1
    }

    /// Reserve a fresh identity for a new field
    pub fn next_field_id(&mut self) -> FieldId {
        FieldId(self.allocate_id())
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn section(&self, index: usize) -> Result<&Section, FormError> {
        self.sections
            .get(index)
            .ok_or(FormError::SectionNotFound { index })
    }

    pub fn section_mut(&mut self, index: usize) -> Result<&mut Section, FormError> {
        self.sections
            .get_mut(index)
            .ok_or(FormError::SectionNotFound { index })
    }

    pub fn row(&self, path: RowPath) -> Result<&Row, FormError> {
        self.section(path.section)?
            .rows
            .get(path.row)
            .ok_or(FormError::RowNotFound { row: path })
    }

    pub fn row_mut(&mut self, path: RowPath) -> Result<&mut Row, FormError> {
        self.section_mut(path.section)?
            .rows
            .get_mut(path.row)
            .ok_or(FormError::RowNotFound { row: path })
    }

    pub fn field(&self, path: FieldPath) -> Result<&Field, FormError> {
        self.row(path.row_path())?
            .fields
            .get(path.field)
            .ok_or(FormError::FieldNotFound { field: path })
    }

    pub fn field_mut(&mut self, path: FieldPath) -> Result<&mut Field, FormError> {
        self.row_mut(path.row_path())?
            .fields
            .get_mut(path.field)
            .ok_or(FormError::FieldNotFound { field: path })
    }

    /// Current index of the section with the given identity
    pub fn locate_section(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Current path of the field with the given identity
    pub fn locate_field(&self, id: FieldId) -> Option<FieldPath> {
        for (s, section) in self.sections.iter().enumerate() {
            for (r, row) in section.rows.iter().enumerate() {
                if let Some(f) = row.fields.iter().position(|field| field.id == id) {
                    return Some(FieldPath::new(s, r, f));
                }
            }
        }
        None
    }

    /// Paths of every row, in display order
    pub fn row_paths(&self) -> Vec<RowPath> {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.rows.len()).map(move |r| RowPath::new(s, r)))
            .collect()
    }

    /// Every field in the tree, in display order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .flat_map(|row| row.fields.iter())
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.sections
            .iter_mut()
            .flat_map(|section| section.rows.iter_mut())
            .flat_map(|row| row.fields.iter_mut())
    }
}

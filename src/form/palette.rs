//! Palette of field templates
//!
//! Templates are never placed on the canvas themselves; every drop from the
//! palette instantiates an independent copy with a fresh identity.

use super::types::{Appearance, Field, FieldId, FieldKind, FieldType};

/// Font size carried by the stock templates
pub const TEMPLATE_FONT_SIZE: &str = "16px";

/// A prototype field
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub label: String,
    pub font_size: Option<String>,
    pub kind: FieldKind,
}

impl Template {
    fn new(label: &str, kind: FieldKind) -> Self {
        Self {
            label: label.to_string(),
            font_size: Some(TEMPLATE_FONT_SIZE.to_string()),
            kind,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Deep copy into a placeable field spanning one column at `font_size`
    pub fn instantiate(&self, id: FieldId, font_size: &str) -> Field {
        Field {
            id,
            label: self.label.clone(),
            font_size: Some(font_size.to_string()),
            col_span: 1,
            kind: self.kind.clone(),
        }
    }
}

/// The catalog users drag from, one template per field kind
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    templates: Vec<Template>,
}

impl Palette {
    /// The stock catalog
    pub fn standard() -> Self {
        let outline = Appearance::Outline;
        let mut spacer = Template::new("Spacer", FieldKind::Spacer);
        spacer.font_size = None;

        Self {
            templates: vec![
                Template::new("Static Text", FieldKind::Text { appearance: outline }),
                Template::new(
                    "Input Field",
                    FieldKind::Input {
                        placeholder: "Enter text".to_string(),
                        appearance: outline,
                    },
                ),
                Template::new(
                    "Text Area",
                    FieldKind::Textarea {
                        placeholder: "Enter more...".to_string(),
                        appearance: outline,
                    },
                ),
                Template::new(
                    "Number Field",
                    FieldKind::Number {
                        placeholder: "0".to_string(),
                        appearance: outline,
                    },
                ),
                Template::new("Date Picker", FieldKind::Date { appearance: outline }),
                Template::new("Check Option", FieldKind::Checkbox),
                Template::new(
                    "Select Option",
                    FieldKind::Select {
                        options: vec!["Option 1".to_string(), "Option 2".to_string()],
                        appearance: outline,
                    },
                ),
                Template::new(
                    "Choose One",
                    FieldKind::Radio {
                        options: vec!["Yes".to_string(), "No".to_string()],
                    },
                ),
                spacer,
            ],
        }
    }

    pub fn get(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Palette index of the template for `field_type`
    pub fn position(&self, field_type: FieldType) -> Option<usize> {
        self.templates
            .iter()
            .position(|template| template.field_type() == field_type)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

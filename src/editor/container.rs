//! Drop-container and click-target identifiers
//!
//! The renderer addresses containers by string id: the palette
//! (`availableFields`), the section list (`formBuilder`), and one
//! `row-{section}-{row}` per row. Click targets use `section-{s}`,
//! `field-{s}-{r}-{f}`, `inspector` and `outside`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::form::{FieldPath, RowPath};

/// Id of the field palette
pub const PALETTE_ID: &str = "availableFields";

/// Id of the section list
pub const CANVAS_ID: &str = "formBuilder";

/// Malformed container or click-target id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what} '{id}'")]
pub struct IdError {
    pub what: &'static str,
    pub id: String,
}

/// A drag-and-drop container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum ContainerId {
    Palette,
    Canvas,
    Row(RowPath),
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerId::Palette => f.write_str(PALETTE_ID),
            ContainerId::Canvas => f.write_str(CANVAS_ID),
            ContainerId::Row(row) => write!(f, "{}", row),
        }
    }
}

impl FromStr for ContainerId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || IdError {
            what: "drop container",
            id: s.to_string(),
        };
        match s {
            PALETTE_ID => Ok(ContainerId::Palette),
            CANVAS_ID => Ok(ContainerId::Canvas),
            _ => {
                let rest = s.strip_prefix("row-").ok_or_else(err)?;
                match parse_indices(rest).as_deref() {
                    Some(&[section, row]) => Ok(ContainerId::Row(RowPath::new(section, row))),
                    _ => Err(err()),
                }
            }
        }
    }
}

impl TryFrom<String> for ContainerId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ClickTarget {
    /// A section body, outside any field
    Section(usize),
    Field(FieldPath),
    /// The inspector panel; keeps the selection
    Inspector,
    /// Anywhere outside every section and the inspector
    Outside,
}

impl fmt::Display for ClickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickTarget::Section(index) => write!(f, "section-{}", index),
            ClickTarget::Field(path) => write!(f, "{}", path),
            ClickTarget::Inspector => f.write_str("inspector"),
            ClickTarget::Outside => f.write_str("outside"),
        }
    }
}

impl FromStr for ClickTarget {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || IdError {
            what: "click target",
            id: s.to_string(),
        };
        if s == "inspector" {
            return Ok(ClickTarget::Inspector);
        }
        if s == "outside" {
            return Ok(ClickTarget::Outside);
        }
        if let Some(rest) = s.strip_prefix("section-") {
            return match parse_indices(rest).as_deref() {
                Some(&[section]) => Ok(ClickTarget::Section(section)),
                _ => Err(err()),
            };
        }
        if let Some(rest) = s.strip_prefix("field-") {
            return match parse_indices(rest).as_deref() {
                Some(&[section, row, field]) => {
                    Ok(ClickTarget::Field(FieldPath::new(section, row, field)))
                }
                _ => Err(err()),
            };
        }
        Err(err())
    }
}

impl TryFrom<String> for ClickTarget {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse `1-2-3` into indices; `None` if any part is not a number
fn parse_indices(s: &str) -> Option<Vec<usize>> {
    s.split('-').map(|part| part.parse().ok()).collect()
}

//! Form tree model
//!
//! The tree is sections → rows → fields. [`FormStore`] owns it and applies
//! every structural change; the grid balancer and the growth policy run as
//! part of those changes so the tree is consistent between operations.

pub mod error;
pub mod grid;
pub mod growth;
pub mod palette;
pub mod store;
pub mod types;

pub use error::FormError;
pub use grid::MAX_FIELDS_PER_ROW;
pub use growth::Growth;
pub use palette::{Palette, Template};
pub use store::FormStore;
pub use types::*;

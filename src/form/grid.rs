//! Column-span allocation on the 12-unit grid

use super::types::{Field, GRID_COLUMNS};

/// A row never holds more fields than the grid has columns
pub const MAX_FIELDS_PER_ROW: usize = GRID_COLUMNS as usize;

/// Spread the grid evenly over `fields`.
///
/// Every field gets `12 / n` columns and the first `12 % n` fields one more,
/// so the spans sum to exactly 12 and differ by at most one. An empty slice
/// is left alone.
pub fn balance(fields: &mut [Field]) {
    let count = fields.len();
    if count == 0 {
        return;
    }
    let columns = usize::from(GRID_COLUMNS);
    let base = columns / count;
    let remainder = columns % count;
    for (index, field) in fields.iter_mut().enumerate() {
        let span = base + usize::from(index < remainder);
        field.col_span = span as u8;
    }
}

/// Sum of the column spans in `fields`
pub fn total_span(fields: &[Field]) -> u32 {
    fields.iter().map(|field| u32::from(field.col_span)).sum()
}

/// True when the spans no longer fit on the grid
pub fn overflows(fields: &[Field]) -> bool {
    total_span(fields) > u32::from(GRID_COLUMNS)
}

/// Column spans in row order
pub fn spans(fields: &[Field]) -> Vec<u8> {
    fields.iter().map(|field| field.col_span).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::types::{FieldId, FieldKind};

    fn fields(count: usize) -> Vec<Field> {
        (0..count)
            .map(|i| Field {
                id: FieldId(i as u64),
                label: format!("f{}", i),
                font_size: None,
                col_span: 1,
                kind: FieldKind::Spacer,
            })
            .collect()
    }

    #[test]
    fn test_two_fields_split_evenly() {
        let mut row = fields(2);
        balance(&mut row);
        assert_eq!(spans(&row), vec![6, 6]);
    }

    #[test]
    fn test_five_fields_front_load_remainder() {
        let mut row = fields(5);
        balance(&mut row);
        assert_eq!(spans(&row), vec![3, 3, 2, 2, 2]);
    }

    #[test]
    fn test_every_count_sums_to_grid() {
        for count in 1..=MAX_FIELDS_PER_ROW {
            let mut row = fields(count);
            balance(&mut row);
            assert_eq!(total_span(&row), 12, "count {}", count);
            let max = row.iter().map(|f| f.col_span).max().unwrap();
            let min = row.iter().map(|f| f.col_span).min().unwrap();
            assert!(max - min <= 1, "count {}", count);
        }
    }

    #[test]
    fn test_empty_row_untouched() {
        let mut row: Vec<Field> = Vec::new();
        balance(&mut row);
        assert!(row.is_empty());
        assert_eq!(total_span(&row), 0);
    }

    #[test]
    fn test_overflow_detection() {
        let mut row = fields(3);
        row[0].col_span = 8;
        row[1].col_span = 4;
        assert!(overflows(&row));
        balance(&mut row);
        assert!(!overflows(&row));
    }
}

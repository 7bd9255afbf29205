//! Column sorting for trade tables.
//!
//! Numeric columns sort high to low and text columns sort low to high.
//!
//! A column is numeric only when it has at least one data cell and every cell
//! parses as a decimal once `%` characters are stripped. Mixed and empty
//! columns are compared as text throughout.

use tracing::debug;

use super::collate::TextCollator;
use super::error::TableError;
use super::model::Table;
use super::numeric::{parse_numeric, strip_percent};

/// Which comparison a sort applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Every cell was numeric (and there was at least one); larger values first.
    NumericDescending,
    /// Some cell was not numeric, or there were no data rows; collated text, ascending.
    LexicalAscending,
}

/// Sort the data rows of `table` in place by the zero-based `column`.
///
/// The sort is stable, so rows with equal keys keep their previous relative
/// order and sorting twice by the same column changes nothing the second time.
///
/// Returns an error without touching the table if `column` is outside the
/// header or some data row has no cell there.
pub fn sort_table(table: &mut Table, column: usize) -> Result<SortOrder, TableError> {
    let width = table.width();
    if column >= width {
        return Err(TableError::ColumnOutOfRange { column, width });
    }

    let keys: Vec<String> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row, r)| {
            r.cell(column)
                .map(strip_percent)
                .ok_or(TableError::MissingCell { row, column })
        })
        .collect::<Result<_, _>>()?;

    let numbers: Option<Vec<f64>> = if keys.is_empty() {
        None
    } else {
        keys.iter().map(|k| parse_numeric(k)).collect()
    };

    let mut order: Vec<usize> = (0..keys.len()).collect();
    let sort_order = match numbers {
        Some(values) => {
            order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
            SortOrder::NumericDescending
        }
        None => {
            let mut collator = TextCollator::new();
            order.sort_by(|&a, &b| collator.compare(&keys[a], &keys[b]));
            SortOrder::LexicalAscending
        }
    };

    table.reorder(&order);
    debug!(column, rows = order.len(), ?sort_order, "sorted table");

    Ok(sort_order)
}

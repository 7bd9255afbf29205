//! Trade table model and column sorting.
//!
//! A [`Table`] is a header row followed by data rows. Sorting moves data rows
//! in place; the header never takes part.

mod collate;
mod error;
mod filter;
mod model;
mod numeric;
mod sort;
pub mod trades;

pub use collate::collate;
pub use error::TableError;
pub use filter::{InvalidSortKey, TradeFilter, TradeSortKey, filter_trades, margin_fraction};
pub use model::{Row, Table};
pub use numeric::{parse_numeric, strip_percent};
pub use sort::{SortOrder, sort_table};
pub use trades::{Security, TRADE_COLUMNS, Trade, TradeStation, load_trades, trades_table};

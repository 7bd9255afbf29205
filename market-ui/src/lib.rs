//! Client-side behavior for the market trade page.
//!
//! Sorts the trade table when a header is clicked, and fills the source and
//! destination station dropdowns from the `/search_station/` endpoint as the
//! user types.

pub mod autocomplete;
pub mod page;
pub mod stations;
pub mod table;

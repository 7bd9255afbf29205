//! Station search client for the `/search_station/` endpoint.
//!
//! [`StationSearch`] is the seam the autocomplete talks through.
//! [`StationClient`] is the HTTP implementation; [`MockStationSearch`] serves
//! canned results in tests.

mod client;
mod error;
pub mod mock;
mod types;

use std::future::Future;

pub use client::{StationClient, StationClientConfig};
pub use error::StationError;
pub use mock::MockStationSearch;
pub use types::{Station, StationId};

/// Looks up stations whose name matches a query.
pub trait StationSearch {
    /// Search stations by (partial) name.
    ///
    /// Results come back in the order the endpoint returned them.
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Station>, StationError>> + Send;
}

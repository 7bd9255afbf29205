//! Key-release handling and response sequencing.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use super::config::AutocompleteConfig;
use super::elements::{Dropdown, DropdownOption};
use crate::stations::StationSearch;

/// Which of the two station inputs an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Source,
    Destination,
}

impl Field {
    /// Element id of the text input on the trade page.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Source => "source_station_search",
            Field::Destination => "dest_station_search",
        }
    }

    /// Element id of the dropdown on the trade page.
    pub fn dropdown_id(self) -> &'static str {
        match self {
            Field::Source => "source_station_dropdown",
            Field::Destination => "dest_station_dropdown",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Source => f.write_str("source"),
            Field::Destination => f.write_str("destination"),
        }
    }
}

/// Error returned when parsing an unknown field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field {0:?} (expected \"source\" or \"destination\")")]
pub struct InvalidField(String);

impl FromStr for Field {
    type Err = InvalidField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "source" | "src" => Ok(Field::Source),
            "destination" | "dest" => Ok(Field::Destination),
            _ => Err(InvalidField(s.to_string())),
        }
    }
}

/// What a key release ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyUpOutcome {
    /// Query too short; no request, dropdown untouched.
    Skipped,
    /// Dropdown replaced with `count` options.
    Applied { count: usize },
    /// A newer request for the same field was issued; response discarded.
    Stale,
    /// Lookup failed; logged, dropdown untouched.
    Failed,
}

/// Per-field state: the dropdown and the token of the latest request.
#[derive(Debug)]
struct FieldState {
    dropdown: Dropdown,
    latest: AtomicU64,
}

impl FieldState {
    fn new(dropdown: Dropdown) -> Self {
        Self {
            dropdown,
            latest: AtomicU64::new(0),
        }
    }
}

/// Fills the source and destination dropdowns as the user types.
///
/// Every lookup gets a token from a per-field counter. A response is applied
/// only if its token is still the latest one issued for that field, so a slow
/// earlier response can never overwrite a newer one.
#[derive(Debug)]
pub struct StationAutocomplete<S> {
    search: S,
    config: AutocompleteConfig,
    source: FieldState,
    destination: FieldState,
}

impl<S: StationSearch> StationAutocomplete<S> {
    /// Create an autocomplete over the two injected dropdowns.
    pub fn new(
        search: S,
        source: Dropdown,
        destination: Dropdown,
        config: AutocompleteConfig,
    ) -> Self {
        Self {
            search,
            config,
            source: FieldState::new(source),
            destination: FieldState::new(destination),
        }
    }

    pub fn dropdown(&self, field: Field) -> &Dropdown {
        &self.field(field).dropdown
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Source => &self.source,
            Field::Destination => &self.destination,
        }
    }

    /// Handle a key release in `field` whose input now reads `text`.
    ///
    /// Never fails: lookup errors are logged and leave the dropdown as it was.
    pub async fn on_key_up(&self, field: Field, text: &str) -> KeyUpOutcome {
        let query = text.trim();
        if query.chars().count() < self.config.min_query_chars {
            debug!(input = field.input_id(), query, "query too short, skipping lookup");
            return KeyUpOutcome::Skipped;
        }

        let state = self.field(field);
        let token = state.latest.fetch_add(1, Ordering::SeqCst) + 1;

        let stations = match self.search.search(query).await {
            Ok(stations) => stations,
            Err(e) => {
                warn!(input = field.input_id(), query, error = %e, "station lookup failed");
                return KeyUpOutcome::Failed;
            }
        };

        let options: Vec<DropdownOption> =
            stations.iter().map(DropdownOption::from_station).collect();
        let count = options.len();

        let applied = state
            .dropdown
            .replace_if(options, || state.latest.load(Ordering::SeqCst) == token);

        if applied {
            debug!(dropdown = field.dropdown_id(), query, count, "dropdown updated");
            KeyUpOutcome::Applied { count }
        } else {
            debug!(input = field.input_id(), query, token, "discarding stale lookup response");
            KeyUpOutcome::Stale
        }
    }
}

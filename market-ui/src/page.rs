//! Page wiring: injected elements in, event handlers out.
//!
//! The host builds a [`Page`] from its own elements once the document has
//! loaded and calls [`Page::wire`]. The returned [`PageController`] receives
//! header clicks and key releases for the lifetime of the page.

use tracing::{info, warn};

use crate::autocomplete::{
    AutocompleteConfig, Dropdown, Field, KeyUpOutcome, SearchInput, StationAutocomplete,
};
use crate::stations::StationSearch;
use crate::table::{SortOrder, Table, TableError, sort_table};

/// A text input and the dropdown it fills.
#[derive(Debug, Clone, Default)]
pub struct FieldElements {
    pub input: SearchInput,
    pub dropdown: Dropdown,
}

/// The elements of the trade page the behaviors act on.
#[derive(Debug, Clone)]
pub struct Page {
    /// `tradeTable`
    pub trade_table: Table,
    /// `source_station_search` / `source_station_dropdown`
    pub source: FieldElements,
    /// `dest_station_search` / `dest_station_dropdown`
    pub destination: FieldElements,
}

impl Page {
    /// A page with fresh, empty station inputs around `trade_table`.
    pub fn new(trade_table: Table) -> Self {
        Self {
            trade_table,
            source: FieldElements::default(),
            destination: FieldElements::default(),
        }
    }

    /// Attach the sorter and autocomplete behaviors.
    pub fn wire<S: StationSearch>(
        self,
        search: S,
        config: AutocompleteConfig,
    ) -> PageController<S> {
        let autocomplete = StationAutocomplete::new(
            search,
            self.source.dropdown.clone(),
            self.destination.dropdown.clone(),
            config,
        );

        PageController {
            table: self.trade_table,
            source_input: self.source.input,
            destination_input: self.destination.input,
            autocomplete,
        }
    }
}

/// A UI event delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Click on the header cell of `column`.
    HeaderClick { column: usize },
    /// Key released in a station input that now reads `text`.
    KeyUp { field: Field, text: String },
}

/// Result of handling one [`UiEvent`].
#[derive(Debug)]
pub enum EventOutcome {
    Sorted(SortOrder),
    SortRejected(TableError),
    KeyUp(KeyUpOutcome),
}

/// Event handlers bound to one page.
#[derive(Debug)]
pub struct PageController<S> {
    table: Table,
    source_input: SearchInput,
    destination_input: SearchInput,
    autocomplete: StationAutocomplete<S>,
}

impl<S: StationSearch> PageController<S> {
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn dropdown(&self, field: Field) -> &Dropdown {
        self.autocomplete.dropdown(field)
    }

    pub fn input(&self, field: Field) -> &SearchInput {
        match field {
            Field::Source => &self.source_input,
            Field::Destination => &self.destination_input,
        }
    }

    /// Sort the trade table by the clicked column.
    ///
    /// A rejected sort is logged and leaves the table as it was.
    pub fn on_header_click(&mut self, column: usize) -> Result<SortOrder, TableError> {
        match sort_table(&mut self.table, column) {
            Ok(order) => {
                info!(column, ?order, "trade table sorted");
                Ok(order)
            }
            Err(e) => {
                warn!(column, error = %e, "ignoring header click");
                Err(e)
            }
        }
    }

    /// Record the input's new value and run the autocomplete for it.
    pub async fn on_key_up(&self, field: Field, text: &str) -> KeyUpOutcome {
        self.input(field).set_value(text);
        self.autocomplete.on_key_up(field, text).await
    }

    /// Route one event to its handler.
    pub async fn dispatch(&mut self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::HeaderClick { column } => match self.on_header_click(column) {
                Ok(order) => EventOutcome::Sorted(order),
                Err(e) => EventOutcome::SortRejected(e),
            },
            UiEvent::KeyUp { field, text } => {
                EventOutcome::KeyUp(self.on_key_up(field, &text).await)
            }
        }
    }
}

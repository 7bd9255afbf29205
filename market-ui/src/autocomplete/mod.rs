//! Station autocomplete for the source and destination inputs.
//!
//! Each key release may trigger one lookup; the paired dropdown is replaced
//! with the results of the latest lookup issued for that input.

mod config;
mod controller;
mod elements;


pub use config::AutocompleteConfig;
pub use controller::{Field, InvalidField, KeyUpOutcome, StationAutocomplete};
pub use elements::{Dropdown, DropdownOption, SearchInput};

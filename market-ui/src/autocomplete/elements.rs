//! Injected UI elements: text inputs and dropdowns.
//!
//! Both are cheap shared handles. The host keeps one clone to render from and
//! hands another to the controller.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::stations::Station;

/// One selectable dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    /// Submitted value: the station id
    pub value: String,
    /// Display label: `"<name> (ID: <station_id>)"`
    pub label: String,
}

impl DropdownOption {
    pub fn from_station(station: &Station) -> Self {
        Self {
            value: station.station_id.to_string(),
            label: format!("{} (ID: {})", station.name, station.station_id),
        }
    }
}

impl fmt::Display for DropdownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.value, self.label)
    }
}

/// A selection list whose contents are replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    options: Arc<RwLock<Vec<DropdownOption>>>,
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current options.
    pub fn options(&self) -> Vec<DropdownOption> {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.options
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the dropdown and fill it with `options`.
    pub fn replace(&self, options: Vec<DropdownOption>) {
        *self.options.write().unwrap_or_else(PoisonError::into_inner) = options;
    }

    /// Replace the options only if `still_current` holds while the dropdown is
    /// locked. Returns whether the replacement happened.
    pub(crate) fn replace_if(
        &self,
        options: Vec<DropdownOption>,
        still_current: impl FnOnce() -> bool,
    ) -> bool {
        let mut guard = self.options.write().unwrap_or_else(PoisonError::into_inner);
        if !still_current() {
            return false;
        }
        *guard = options;
        true
    }
}

/// A text input whose value the host updates on each key release.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    value: Arc<RwLock<String>>,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

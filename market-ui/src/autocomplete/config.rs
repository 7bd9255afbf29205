//! Autocomplete configuration.

/// Configuration for [`StationAutocomplete`](super::StationAutocomplete).
#[derive(Debug, Clone)]
pub struct AutocompleteConfig {
    /// Minimum trimmed query length (in characters) that triggers a lookup.
    /// Shorter queries leave the dropdown as it is.
    pub min_query_chars: usize,
}

impl AutocompleteConfig {
    /// Set a custom minimum query length.
    pub fn with_min_query_chars(mut self, chars: usize) -> Self {
        self.min_query_chars = chars;
        self
    }
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self { min_query_chars: 3 }
    }
}

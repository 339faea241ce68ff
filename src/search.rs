//! City search box state.

use std::fmt;

use crate::config::DEFAULT_CITY;

/// Active city name; never blank
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCity(String);

impl SearchCity {
    /// Trimmed input, or `None` when there is nothing to search for.
    /// Case is kept as typed; the request path lower-cases it. Surrounding
    /// whitespace is dropped here, so neither the URL nor the header sees it.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SearchCity {
    fn default() -> Self {
        Self(DEFAULT_CITY.to_string())
    }
}

impl fmt::Display for SearchCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text typed into the search input, submitted on Enter or the search button
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CitySearch {
    draft: String,
}

impl CitySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Key pressed while the input has focus; only Enter submits
    pub fn on_key(&self, key: &str) -> Option<SearchCity> {
        if key == "Enter" {
            self.submit()
        } else {
            None
        }
    }

    /// Search button clicked. The draft is left as is either way.
    pub fn submit(&self) -> Option<SearchCity> {
        SearchCity::parse(&self.draft)
    }
}

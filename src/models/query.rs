use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How the title is matched against catalog names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// Fuzzy keyword search; cannot be combined with sorting
    #[serde(rename = "search")]
    Search,
    /// Exact, case-sensitive name filter
    #[serde(rename = "name equals")]
    NameEquals,
    /// Case-insensitive wildcard name filter
    #[serde(rename = "name like")]
    NameLike,
}

impl SearchType {
    /// Parses the textual mode name, returning `None` for anything unrecognized
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "search" => Some(SearchType::Search),
            "name equals" => Some(SearchType::NameEquals),
            "name like" => Some(SearchType::NameLike),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Search => "search",
            SearchType::NameEquals => "name equals",
            SearchType::NameLike => "name like",
        }
    }

    /// Whether a sort clause may accompany this mode
    pub fn supports_sorting(&self) -> bool {
        !matches!(self, SearchType::Search)
    }
}

impl Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs for building a catalog query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub title: String,
    /// Raw mode name; unrecognized values fall back to `name equals`
    pub search_type: String,
    pub sort_results: bool,
    /// Sort criteria, e.g. `release_dates.y asc`
    pub sort_by: String,
    pub limit: u32,
    pub offset: u32,
}

impl QueryOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            search_type: SearchType::NameEquals.as_str().to_string(),
            sort_results: false,
            sort_by: "release_dates.y asc".to_string(),
            limit: 25,
            offset: 0,
        }
    }
}

/// A finished query expression, ready for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub body: String,
    /// The mode actually used
    pub search_type: SearchType,
    /// Set when the requested mode was not recognized and `name equals` was used instead
    pub warning: Option<String>,
}

impl BuiltQuery {
    pub fn fell_back(&self) -> bool {
        self.warning.is_some()
    }
}

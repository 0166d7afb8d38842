use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Listing sort orders understood by the Reddit API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    Hot,
    Top,
    New,
    Controversial,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [Self::Hot, Self::Top, Self::New, Self::Controversial];

    /// The exact string the upstream expects, in a path segment or a `sort` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Top => "top",
            Self::New => "new",
            Self::Controversial => "controversial",
        }
    }

    /// Parses a sort order, treating anything unknown (or absent) as `hot`.
    pub fn lenient(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_string()))
    }
}

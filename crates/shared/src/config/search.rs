use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How a search term is matched against question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMatch {
    /// ASCII case-insensitive, the term must have a space on both sides. A
    /// term at the very start or end of the text never matches.
    #[default]
    Bounded,
    /// ASCII case-insensitive substring. Non-ASCII letters match verbatim.
    Substring,
    /// Case-sensitive substring.
    Exact,
}

impl FromStr for SearchMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounded" => Ok(SearchMatch::Bounded),
            "substring" => Ok(SearchMatch::Substring),
            "exact" => Ok(SearchMatch::Exact),
            other => Err(format!(
                "unknown search match '{other}', expected one of: bounded, substring, exact"
            )),
        }
    }
}

impl fmt::Display for SearchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchMatch::Bounded => "bounded",
            SearchMatch::Substring => "substring",
            SearchMatch::Exact => "exact",
        };
        f.write_str(name)
    }
}

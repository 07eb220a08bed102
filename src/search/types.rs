//! Search result types and the Custom Search wire format.

use serde::{Deserialize, Serialize};

/// One search hit. Every field is optional on the wire; absent fields stay
/// absent rather than failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: Option<String>,
    /// Result URL.
    pub link: Option<String>,
    /// Short text excerpt.
    pub snippet: Option<String>,
}

/// Response body from the Custom Search JSON API. Only the `items` array is
/// consumed; the API omits it entirely when there are no more results.
#[derive(Debug, Deserialize)]
pub(crate) struct CseResponse {
    #[serde(default)]
    pub items: Vec<CseItem>,
}

/// One entry of the `items` array.
#[derive(Debug, Deserialize)]
pub(crate) struct CseItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub snippet: Option<String>,
}

impl From<CseItem> for SearchResult {
    fn from(item: CseItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
            snippet: item.snippet,
        }
    }
}

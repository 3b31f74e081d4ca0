//! Wire model for fetched resources.

use serde::{Deserialize, Serialize};

use crate::fetch::FetchError;

/// A single fetched resource. Identity is `id`; extra JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Expected JSON shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// One JSON object (a resource addressed by parameter).
    Single,
    /// A JSON array of objects.
    Collection,
}

impl ResponseShape {
    pub fn for_param(param: Option<&str>) -> Self {
        if param.is_some() {
            ResponseShape::Single
        } else {
            ResponseShape::Collection
        }
    }

    /// Decode a response body into an ordered sequence of items.
    ///
    /// A single object becomes a one-element sequence. Any malformed item
    /// rejects the whole body.
    pub fn decode(self, body: &[u8]) -> Result<Vec<ListItem>, FetchError> {
        match self {
            ResponseShape::Single => serde_json::from_slice::<ListItem>(body)
                .map(|item| vec![item])
                .map_err(|e| FetchError::Decode(e.to_string())),
            ResponseShape::Collection => serde_json::from_slice::<Vec<ListItem>>(body)
                .map_err(|e| FetchError::Decode(e.to_string())),
        }
    }
}

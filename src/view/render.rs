use std::fmt;

use crate::model::ListItem;

/// Pure projection of a view's state, independent of any output backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    /// Nothing requested yet.
    Idle,
    Loading,
    Error(String),
    List {
        /// Derived title (memoized mode only).
        heading: Option<String>,
        entries: Vec<RenderedEntry>,
    },
}

/// One rendered list row, keyed by the item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub key: u64,
    pub title: String,
    pub body: String,
}

impl From<&ListItem> for RenderedEntry {
    fn from(item: &ListItem) -> Self {
        Self {
            key: item.id,
            title: item.title.clone(),
            body: item.body.clone(),
        }
    }
}

impl RenderOutput {
    pub fn entries(&self) -> &[RenderedEntry] {
        match self {
            RenderOutput::List { entries, .. } => entries,
            _ => &[],
        }
    }
}

/// Plain-text rendering used by the headless front end.
impl fmt::Display for RenderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderOutput::Idle => writeln!(f, "Nothing fetched yet."),
            RenderOutput::Loading => writeln!(f, "Loading..."),
            RenderOutput::Error(message) => writeln!(f, "Error: {}", message),
            RenderOutput::List { heading, entries } => {
                if let Some(heading) = heading {
                    writeln!(f, "{}", heading)?;
                    writeln!(f)?;
                }
                for entry in entries {
                    writeln!(f, "- {}", entry.title)?;
                    writeln!(f, "{}", entry.body)?;
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }
}

use crate::model::ListItem;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestIntent {
    /// A read request was issued.
    RequestStart,
    /// The in-flight request decoded successfully.
    RequestSuccess(Vec<ListItem>),
    /// The in-flight request failed; carries a human-readable cause.
    RequestFailure(String),
}

impl Intent for RequestIntent {}

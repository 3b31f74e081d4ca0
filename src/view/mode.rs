use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Re-fetch policy of a [`DataListView`](super::DataListView).
///
/// All modes share one state machine; they differ only in what may start a
/// fetch and whether the derived title is memoized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Fetch once on activation. Re-fetches only on re-activation.
    #[default]
    Immediate,
    /// Fetch on activation and whenever the parameter changes.
    Memoized,
    /// Fetch only on explicit trigger.
    Manual,
}

impl FetchMode {
    pub fn fetches_on_activate(self) -> bool {
        matches!(self, FetchMode::Immediate | FetchMode::Memoized)
    }

    /// Whether an explicit [`trigger_fetch`](super::DataListView::trigger_fetch)
    /// issues a request.
    pub fn fetches_on_trigger(self) -> bool {
        matches!(self, FetchMode::Memoized | FetchMode::Manual)
    }

    pub fn refetches_on_param_change(self) -> bool {
        matches!(self, FetchMode::Memoized)
    }

    pub fn memoizes_derived(self) -> bool {
        matches!(self, FetchMode::Memoized)
    }

    pub fn label(self) -> &'static str {
        match self {
            FetchMode::Immediate => "immediate",
            FetchMode::Memoized => "memoized",
            FetchMode::Manual => "manual",
        }
    }
}

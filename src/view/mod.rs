//! The list view: one request lifecycle per activation, rendered as a list.
//!
//! `DataListView` owns its [`RequestState`] and is its only writer. Fetches
//! run as tokio tasks that report back over a channel; results are applied
//! only through [`DataListView::poll`] or [`DataListView::settle`], and only
//! if they belong to the current request generation and the view has not
//! been deactivated since.

mod memo;
mod mode;
mod render;

pub use memo::Memo;
pub use mode::FetchMode;
pub use render::{RenderOutput, RenderedEntry};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};

use crate::fetch::{fetch_items, FetchError, HttpClient};
use crate::model::ListItem;
use crate::ui::mvi::Reducer;
use crate::ui::request::{RequestIntent, RequestReducer, RequestState};

/// Result of asking the view to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A new request was issued.
    Started,
    /// A request is already in flight; nothing was issued.
    AlreadyLoading,
    /// The view is not active.
    Inactive,
    /// The current mode does not fetch on this event.
    Skipped,
}

struct Completion {
    generation: u64,
    result: Result<Vec<ListItem>, FetchError>,
}

struct InFlight {
    generation: u64,
    task: JoinHandle<()>,
}

/// What `settle` woke up on.
enum Settled {
    Completion(Option<Completion>),
    TaskExited(Result<(), JoinError>),
}

pub struct DataListView<C> {
    client: Arc<C>,
    mode: FetchMode,
    endpoint: String,
    param: Option<String>,
    state: RequestState,
    derived: Memo<Vec<ListItem>, Option<String>>,
    active: bool,
    /// One-way per activation; replaced on re-activation.
    discard: Arc<AtomicBool>,
    generation: u64,
    in_flight: Option<InFlight>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<C: HttpClient> DataListView<C> {
    pub fn new(client: Arc<C>, mode: FetchMode) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            client,
            mode,
            endpoint: String::new(),
            param: None,
            state: RequestState::default(),
            derived: Memo::new(),
            active: false,
            discard: Arc::new(AtomicBool::new(true)),
            generation: 0,
            in_flight: None,
            completions_tx,
            completions_rx,
        }
    }

    /// Make the view live with fresh state.
    ///
    /// Auto-fetching modes issue the first request immediately; manual mode
    /// stays `Idle`. Must be called within a tokio runtime.
    pub fn activate(&mut self, endpoint: impl Into<String>, param: Option<String>) -> TriggerOutcome {
        self.cancel_in_flight();
        self.endpoint = endpoint.into();
        self.param = param;
        self.state = RequestState::default();
        self.derived = Memo::new();
        self.discard = Arc::new(AtomicBool::new(false));
        self.active = true;

        tracing::info!(
            endpoint = %self.endpoint,
            param = ?self.param,
            mode = self.mode.label(),
            "View activated"
        );

        if self.mode.fetches_on_activate() {
            self.start_request();
            TriggerOutcome::Started
        } else {
            TriggerOutcome::Skipped
        }
    }

    /// Issue a request unless one is already in flight.
    ///
    /// Immediate mode never fetches on trigger; it fetches again only when
    /// re-activated.
    pub fn trigger_fetch(&mut self) -> TriggerOutcome {
        if !self.active {
            return TriggerOutcome::Inactive;
        }
        if !self.mode.fetches_on_trigger() {
            tracing::trace!(mode = self.mode.label(), "Trigger ignored");
            return TriggerOutcome::Skipped;
        }
        if self.in_flight.is_some() {
            tracing::trace!("Fetch requested while loading, ignoring");
            return TriggerOutcome::AlreadyLoading;
        }
        self.start_request();
        TriggerOutcome::Started
    }

    /// Change the resource parameter.
    ///
    /// In memoized mode a changed parameter supersedes any in-flight request
    /// and fetches again. Other modes use the new parameter on the next fetch.
    pub fn set_param(&mut self, param: Option<String>) -> TriggerOutcome {
        if self.param == param {
            return TriggerOutcome::Skipped;
        }
        tracing::debug!(from = ?self.param, to = ?param, "Param changed");
        self.param = param;

        if !self.active {
            return TriggerOutcome::Inactive;
        }
        if !self.mode.refetches_on_param_change() {
            return TriggerOutcome::Skipped;
        }

        self.cancel_in_flight();
        self.start_request();
        TriggerOutcome::Started
    }

    /// Stop applying results. State stays as it is now until re-activation.
    pub fn deactivate(&mut self) {
        self.discard.store(true, Ordering::Release);
        self.active = false;
        self.cancel_in_flight();
        while self.completions_rx.try_recv().is_ok() {}
        tracing::info!(state = self.state.label(), "View deactivated");
    }

    /// Apply any finished request without waiting. Returns whether state changed.
    pub fn poll(&mut self) -> bool {
        // Checked before draining: a task that sent its result is finished
        // only after the send.
        let exited = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.task.is_finished());
        let mut changed = self.drain_completions();
        if exited {
            changed |= self.fail_in_flight("Fetch task ended without a result".to_string());
        }
        changed
    }

    /// Wait for the in-flight request and apply its result.
    ///
    /// Returns `false` without waiting when nothing is in flight or the view
    /// is inactive. A fetch task that dies without reporting fails the request.
    pub async fn settle(&mut self) -> bool {
        while self.active {
            let Some(in_flight) = self.in_flight.as_mut() else {
                break;
            };
            let settled = tokio::select! {
                biased;
                completion = self.completions_rx.recv() => Settled::Completion(completion),
                joined = &mut in_flight.task => Settled::TaskExited(joined),
            };

            match settled {
                Settled::Completion(Some(completion)) => {
                    if self.apply(completion) {
                        return true;
                    }
                }
                Settled::Completion(None) => break,
                Settled::TaskExited(joined) => {
                    if self.drain_completions() {
                        return true;
                    }
                    let reason = match joined {
                        Ok(()) => "Fetch task ended without a result".to_string(),
                        Err(err) => format!("Fetch task failed: {err}"),
                    };
                    return self.fail_in_flight(reason);
                }
            }
        }
        false
    }

    pub fn render(&self) -> RenderOutput {
        match &self.state {
            RequestState::Idle => RenderOutput::Idle,
            RequestState::Loading => RenderOutput::Loading,
            RequestState::Failed(message) => RenderOutput::Error(message.clone()),
            RequestState::Succeeded(items) => RenderOutput::List {
                heading: if self.mode.memoizes_derived() {
                    self.derived().map(str::to_string)
                } else {
                    None
                },
                entries: items.iter().map(RenderedEntry::from).collect(),
            },
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Title of the first fetched item, memoized on the fetched items.
    pub fn derived(&self) -> Option<&str> {
        self.derived.value().and_then(|title| title.as_deref())
    }

    pub fn memo_computations(&self) -> u64 {
        self.derived.computations()
    }

    pub fn mode(&self) -> FetchMode {
        self.mode
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn start_request(&mut self) {
        self.dispatch(RequestIntent::RequestStart);
        self.generation += 1;

        let generation = self.generation;
        let client = Arc::clone(&self.client);
        let endpoint = self.endpoint.clone();
        let param = self.param.clone();
        let discard = Arc::clone(&self.discard);
        let tx = self.completions_tx.clone();

        tracing::info!(generation, endpoint = %endpoint, param = ?param, "Fetch started");

        let task = tokio::spawn(async move {
            let result = fetch_items(client.as_ref(), &endpoint, param.as_deref()).await;
            if discard.load(Ordering::Acquire) {
                tracing::debug!(generation, "View deactivated, dropping result");
                return;
            }
            let _ = tx.send(Completion { generation, result });
        });

        self.in_flight = Some(InFlight { generation, task });
    }

    fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(generation = in_flight.generation, "Cancelling in-flight fetch");
            in_flight.task.abort();
        }
    }

    fn drain_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Fail the in-flight request whose task is gone without reporting.
    fn fail_in_flight(&mut self, reason: String) -> bool {
        if !self.active {
            return false;
        }
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        tracing::error!(generation = in_flight.generation, reason = %reason, "Fetch task lost");
        self.dispatch(RequestIntent::RequestFailure(reason));
        true
    }

    fn apply(&mut self, completion: Completion) -> bool {
        if !self.active || self.discard.load(Ordering::Acquire) {
            return false;
        }
        match &self.in_flight {
            Some(in_flight) if in_flight.generation == completion.generation => {}
            _ => {
                tracing::debug!(generation = completion.generation, "Stale result ignored");
                return false;
            }
        }
        self.in_flight = None;

        let intent = match completion.result {
            Ok(items) => {
                tracing::info!(
                    generation = completion.generation,
                    count = items.len(),
                    "Fetch succeeded"
                );
                RequestIntent::RequestSuccess(items)
            }
            Err(err) => {
                tracing::warn!(
                    generation = completion.generation,
                    kind = err.kind(),
                    error = %err,
                    "Fetch failed"
                );
                RequestIntent::RequestFailure(err.to_string())
            }
        };
        self.dispatch(intent);

        if self.mode.memoizes_derived() {
            if let RequestState::Succeeded(items) = &self.state {
                self.derived
                    .get_or_compute(items, |items| items.first().map(|item| item.title.clone()));
            }
        }
        true
    }

    fn dispatch(&mut self, intent: RequestIntent) {
        let from = self.state.label();
        self.state = RequestReducer::reduce(std::mem::take(&mut self.state), intent);
        tracing::debug!(from, to = self.state.label(), "Request state transition");
    }
}

impl<C> Drop for DataListView<C> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.task.abort();
        }
    }
}

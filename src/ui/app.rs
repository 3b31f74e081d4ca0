use crate::fetch::HttpClient;
use crate::ui::render::body_lines;
use crate::view::{DataListView, TriggerOutcome};

/// Terminal front end state around one [`DataListView`].
pub struct App<C> {
    should_quit: bool,
    view: DataListView<C>,
    scroll: u16,
    animation_tick: u8,
}

impl<C: HttpClient> App<C> {
    pub fn new(view: DataListView<C>) -> Self {
        Self {
            should_quit: false,
            view,
            scroll: 0,
            animation_tick: 0,
        }
    }

    pub fn view(&self) -> &DataListView<C> {
        &self.view
    }

    pub fn activate(&mut self, endpoint: impl Into<String>, param: Option<String>) {
        self.scroll = 0;
        self.view.activate(endpoint, param);
    }

    pub fn deactivate(&mut self) {
        self.view.deactivate();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply finished requests and advance the spinner.
    pub fn on_tick(&mut self) {
        if self.view.poll() {
            self.scroll = 0;
        }
        if self.view.state().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Fetch again. Immediate mode does not take triggers, so the view is
    /// re-activated with its current endpoint and param instead.
    pub fn refetch(&mut self) -> TriggerOutcome {
        if self.view.mode().fetches_on_trigger() {
            return self.view.trigger_fetch();
        }
        if !self.view.is_active() {
            return TriggerOutcome::Inactive;
        }
        if self.view.state().is_loading() {
            return TriggerOutcome::AlreadyLoading;
        }

        let endpoint = self.view.endpoint().to_string();
        let param = self.view.param().map(str::to_string);
        self.view.deactivate();
        self.scroll = 0;
        self.view.activate(endpoint, param)
    }

    /// Move to the next/previous numeric resource id. Ids start at 1.
    pub fn step_param(&mut self, delta: i64) -> TriggerOutcome {
        let current = self
            .view
            .param()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(0);
        let next = current.saturating_add(delta).max(1);
        self.view.set_param(Some(next.to_string()))
    }

    /// Drop the resource id and view the whole collection.
    pub fn clear_param(&mut self) -> TriggerOutcome {
        self.view.set_param(None)
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Stops with the last body line at the top of the body region.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        let count = body_lines(&self.view.render(), self.animation_tick).len();
        u16::try_from(count.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }
}

use crate::config::ViewConfig;
use crate::fetch::HttpClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::view::DataListView;
use std::io;
use std::sync::Arc;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the terminal front end until the user quits.
///
/// Fetch tasks share the caller's tokio runtime; completions are applied
/// on ticks, from this loop only.
pub async fn run<C: HttpClient>(client: Arc<C>, view_config: ViewConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(DataListView::new(client, view_config.mode));
    app.activate(view_config.endpoint, view_config.param);
    let mut events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Tick) => app.on_tick(),
            Some(AppEvent::Resize) => {}
            None => break,
        }
    }

    app.deactivate();
    drop(guard);
    Ok(())
}

//! Key handling of the terminal front end, without a terminal.

mod common;

use common::item_json;
use common::stub_client::{StubClient, StubReply};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use feedview::ui::app::App;
use feedview::ui::input::handle_key;
use feedview::ui::render::body_lines;
use feedview::ui::request::RequestState;
use feedview::view::{DataListView, FetchMode, TriggerOutcome};
use std::time::Duration;

const ENDPOINT: &str = "http://stub.test/posts";

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn tick_until_settled(app: &mut App<StubClient>) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.on_tick();
        if !app.view().state().is_loading() {
            return;
        }
    }
    panic!("request did not settle");
}

#[tokio::test]
async fn r_triggers_fetch_in_manual_mode() {
    let client = StubClient::always(StubReply::json(&format!("[{}]", item_json(1, "A", "B"))));
    let mut app = App::new(DataListView::new(client.clone(), FetchMode::Manual));
    app.activate(ENDPOINT, None);
    assert_eq!(app.view().state(), &RequestState::Idle);

    handle_key(&mut app, key(KeyCode::Char('r')));
    assert!(app.view().state().is_loading());
    tick_until_settled(&mut app).await;

    assert_eq!(app.view().render().entries().len(), 1);
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn n_and_p_step_through_ids() {
    let client = StubClient::always(StubReply::json(&item_json(1, "A", "B")));
    let mut app = App::new(DataListView::new(client.clone(), FetchMode::Memoized));
    app.activate(ENDPOINT, Some("1".to_string()));
    tick_until_settled(&mut app).await;

    handle_key(&mut app, key(KeyCode::Char('n')));
    tick_until_settled(&mut app).await;
    assert_eq!(app.view().param(), Some("2"));

    handle_key(&mut app, key(KeyCode::Char('p')));
    tick_until_settled(&mut app).await;
    handle_key(&mut app, key(KeyCode::Char('p')));
    assert_eq!(app.view().param(), Some("1"));

    assert_eq!(
        client.urls(),
        vec![
            format!("{}/1", ENDPOINT),
            format!("{}/2", ENDPOINT),
            format!("{}/1", ENDPOINT),
        ]
    );
}

#[tokio::test]
async fn c_returns_to_collection() {
    let client = StubClient::new(vec![
        StubReply::json(&item_json(4, "A", "B")),
        StubReply::json("[]"),
    ]);
    let mut app = App::new(DataListView::new(client.clone(), FetchMode::Memoized));
    app.activate(ENDPOINT, Some("4".to_string()));
    tick_until_settled(&mut app).await;

    handle_key(&mut app, key(KeyCode::Char('c')));
    tick_until_settled(&mut app).await;

    assert_eq!(app.view().param(), None);
    assert_eq!(client.urls()[1], ENDPOINT);
}

#[tokio::test]
async fn quit_keys() {
    let client = StubClient::new(vec![]);
    let mut app = App::new(DataListView::new(client, FetchMode::Manual));
    assert!(!app.should_quit());

    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert!(!app.should_quit());

    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let mut app = App::new(DataListView::new(StubClient::new(vec![]), FetchMode::Manual));
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[tokio::test]
async fn scrolling_saturates_at_top() {
    let body = (1..=8)
        .map(|id| item_json(id, "title", "body"))
        .collect::<Vec<_>>()
        .join(",");
    let client = StubClient::new(vec![StubReply::json(&format!("[{body}]"))]);
    let mut app = App::new(DataListView::new(client, FetchMode::Immediate));
    app.activate(ENDPOINT, None);
    tick_until_settled(&mut app).await;

    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.scroll(), 0);

    handle_key(&mut app, key(KeyCode::PageDown));
    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.scroll(), 11);

    handle_key(&mut app, key(KeyCode::PageUp));
    assert_eq!(app.scroll(), 1);
}

#[tokio::test]
async fn scrolling_stops_at_last_body_line() {
    let client = StubClient::new(vec![StubReply::json(&format!("[{}]", item_json(1, "A", "B")))]);
    let mut app = App::new(DataListView::new(client, FetchMode::Immediate));
    app.activate(ENDPOINT, None);
    tick_until_settled(&mut app).await;

    // " - A", "   B", ""
    let last = body_lines(&app.view().render(), 0).len() as u16 - 1;
    for _ in 0..5 {
        handle_key(&mut app, key(KeyCode::PageDown));
    }
    assert_eq!(app.scroll(), last);

    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.scroll(), last - 1);
}

#[tokio::test]
async fn r_reactivates_in_immediate_mode() {
    let client = StubClient::new(vec![
        StubReply::status(500, ""),
        StubReply::json(&format!("[{}]", item_json(1, "A", "B"))),
    ]);
    let mut app = App::new(DataListView::new(client.clone(), FetchMode::Immediate));
    app.activate(ENDPOINT, None);
    tick_until_settled(&mut app).await;
    assert!(app.view().state().error().is_some());

    assert_eq!(app.refetch(), TriggerOutcome::Started);
    assert!(app.view().state().is_loading());
    assert_eq!(app.refetch(), TriggerOutcome::AlreadyLoading);
    tick_until_settled(&mut app).await;

    assert_eq!(app.view().render().entries().len(), 1);
    assert_eq!(client.calls(), 2);
}

#[tokio::test]
async fn spinner_advances_only_while_loading() {
    let client = StubClient::always(StubReply::json("[]").with_delay(50));
    let mut app = App::new(DataListView::new(client, FetchMode::Immediate));
    app.on_tick();
    assert_eq!(app.animation_tick(), 0);

    app.activate(ENDPOINT, None);
    app.on_tick();
    app.on_tick();
    assert_eq!(app.animation_tick(), 2);
}

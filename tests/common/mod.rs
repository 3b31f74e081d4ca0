//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;
pub mod stub_client;

use feedview::model::ListItem;
use std::net::TcpListener;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn item(id: u64, title: &str, body: &str) -> ListItem {
    ListItem {
        id,
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// JSON for one item, with an extra field the decoder must ignore.
pub fn item_json(id: u64, title: &str, body: &str) -> String {
    format!(
        r#"{{"userId": 1, "id": {}, "title": "{}", "body": "{}"}}"#,
        id, title, body
    )
}

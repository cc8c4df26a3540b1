//! Shared helpers for server integration tests.

#![allow(dead_code)]

use std::time::Duration;

use axum_test::TestServer;

use marquee_model::{ContentCatalog, ContentItem, Section};
use marquee_server::{
    create_app,
    infra::{app_state::AppState, config::Config},
};

pub fn sample_catalog() -> ContentCatalog {
    ContentCatalog::new(vec![
        Section {
            title: "Top 10".into(),
            items: vec![
                ContentItem::new(1, "Kingdom", "/img/1.jpg"),
                ContentItem::new(2, "Squid Game", "/img/2.jpg"),
            ],
        },
        Section {
            title: "Today's Picks For You".into(),
            items: vec![ContentItem::new(11, "Dark", "/img/11.jpg")],
        },
        Section {
            title: "Made in Korea".into(),
            items: vec![
                ContentItem::new(26, "Kingdom: Ashin of the North", "/img/26.jpg"),
                ContentItem::new(27, "Sweet Home", "/img/27.jpg"),
            ],
        },
    ])
}

pub fn config_with_delay(delay: Duration) -> Config {
    let mut config = Config::default();
    config.search.delay = delay;
    config
}

pub fn test_server_with(config: Config) -> TestServer {
    let state = AppState::new(sample_catalog(), config);
    TestServer::new(create_app(state)).expect("test server")
}

/// Server over the sample catalog with no search delay.
pub fn test_server() -> TestServer {
    test_server_with(config_with_delay(Duration::ZERO))
}

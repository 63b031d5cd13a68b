// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Facade integration tests: cache-first reads and invalidation on
//! mutations, against a mock service.

use remcal_core::{ApiConfig, CalendarDate, Remcal, ReminderDraft};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REMINDERS_BODY: &str = r#"[{
    "id": 1,
    "text": "water the plants",
    "date": "2024-06-01",
    "time": "09:30",
    "createdAt": "2024-05-30T10:00:00",
    "updatedAt": "2024-05-30T10:00:00"
}]"#;

const CREATED_BODY: &str = r#"{
    "id": 2,
    "text": "dentist",
    "date": "2024-06-01",
    "time": "14:00",
    "createdAt": "2024-06-01T08:00:00",
    "updatedAt": "2024-06-01T08:00:00"
}"#;

const OVERVIEW_BODY: &str = r#"[{"date": "2024-06-01", "count": 1}]"#;

fn facade_for(server: &MockServer) -> Remcal {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    Remcal::new(&config).expect("failed to create facade")
}

async fn requests_to(server: &MockServer, http_method: &str, req_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == http_method && r.url.path() == req_path)
        .count()
}

#[tokio::test]
async fn reads_are_cache_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders"))
        .and(query_param("date", "2024-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REMINDERS_BODY, "application/json"))
        .mount(&server)
        .await;

    let mut app = facade_for(&server);
    let date = CalendarDate::from("2024-06-01");

    let first = app.reminders_on(&date).await.expect("request failed");
    let second = app.reminders_on(&date).await.expect("request failed");
    assert_eq!(first, second);

    // the second read was served from the cache
    assert_eq!(requests_to(&server, "GET", "/reminders").await, 1);
}

#[tokio::test]
async fn create_invalidates_by_date_and_overview() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REMINDERS_BODY, "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/reminders/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(OVERVIEW_BODY, "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/reminders"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(CREATED_BODY, "application/json"))
        .mount(&server)
        .await;

    let mut app = facade_for(&server);
    let date = CalendarDate::from("2024-06-01");

    app.reminders_on(&date).await.expect("request failed");
    app.overview().await.expect("request failed");

    let draft = ReminderDraft {
        text: "dentist".to_string(),
        date: date.clone(),
        time: "14:00".to_string(),
    };
    app.create_reminder(&draft).await.expect("create failed");

    // both dependent query groups refetch after the mutation
    app.reminders_on(&date).await.expect("request failed");
    app.overview().await.expect("request failed");

    assert_eq!(requests_to(&server, "GET", "/reminders").await, 2);
    assert_eq!(requests_to(&server, "GET", "/reminders/overview").await, 2);
}

#[tokio::test]
async fn delete_by_date_invalidates_but_holidays_stay_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REMINDERS_BODY, "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/reminders"))
        .and(query_param("date", "2024-06-01"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut app = facade_for(&server);
    let date = CalendarDate::from("2024-06-01");

    app.holidays(2024).await.expect("request failed");
    app.reminders_on(&date).await.expect("request failed");
    app.delete_reminders_on(&date).await.expect("delete failed");
    app.reminders_on(&date).await.expect("request failed");
    app.holidays(2024).await.expect("request failed");

    assert_eq!(requests_to(&server, "GET", "/reminders").await, 2);
    // the holidays group is untouched by reminder mutations
    assert_eq!(requests_to(&server, "GET", "/holidays").await, 1);
}

#[tokio::test]
async fn failed_mutation_leaves_the_cache_intact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(REMINDERS_BODY, "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/reminders"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("boom", "text/plain"))
        .mount(&server)
        .await;

    let mut app = facade_for(&server);
    let date = CalendarDate::from("2024-06-01");

    app.reminders_on(&date).await.expect("request failed");

    let draft = ReminderDraft {
        text: "dentist".to_string(),
        date: date.clone(),
        time: "14:00".to_string(),
    };
    app.create_reminder(&draft).await.expect_err("expected failure");

    // failure did not invalidate; read still served from cache
    app.reminders_on(&date).await.expect("request failed");
    assert_eq!(requests_to(&server, "GET", "/reminders").await, 1);
}

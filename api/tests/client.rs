// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use remcal_api::{ApiClient, ApiConfig, ApiError, CalendarDate, ReminderDraft};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    };
    ApiClient::new(&config).expect("failed to create client")
}

#[tokio::test]
async fn fetches_holidays_for_a_year() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/holidays"))
        .and(query_param("year", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{
                "date": "2024-12-25",
                "localName": "Kalėdos",
                "englishName": "Christmas Day",
                "countryCode": "LT",
                "type": "Public",
                "global": true
            }]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let holidays = client.holidays(Some(2024)).await.expect("request failed");

    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].date, CalendarDate::from("2024-12-25"));
    assert_eq!(holidays[0].local_name, "Kalėdos");
    assert!(holidays[0].global);
}

#[tokio::test]
async fn fetches_reminders_by_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders"))
        .and(query_param("date", "2024-06-01"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{
                "id": 7,
                "text": "water the plants",
                "date": "2024-06-01",
                "time": "09:30",
                "createdAt": "2024-05-30T10:00:00",
                "updatedAt": "2024-05-30T10:00:00"
            }]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let date = CalendarDate::from("2024-06-01");
    let reminders = client.reminders(Some(&date)).await.expect("request failed");

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].id, 7);
    assert_eq!(reminders[0].time, "09:30");
}

#[tokio::test]
async fn fetches_allowed_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders/range"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"minDate": "2024-01-10", "maxDate": "2025-01-10"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let range = client.allowed_range().await.expect("request failed");

    assert_eq!(range.min_date, CalendarDate::from("2024-01-10"));
    assert_eq!(range.max_date, CalendarDate::from("2025-01-10"));
}

#[tokio::test]
async fn fetches_overview_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"date": "2024-06-01", "count": 2}, {"date": "2024-06-03", "count": 1}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let overview = client.overview().await.expect("request failed");

    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].count, 2);
}

#[tokio::test]
async fn creates_a_reminder() {
    let server = MockServer::start().await;
    let draft = ReminderDraft {
        text: "dentist".to_string(),
        date: CalendarDate::from("2024-06-02"),
        time: "14:00".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/reminders"))
        .and(body_json(&draft))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            r#"{
                "id": 12,
                "text": "dentist",
                "date": "2024-06-02",
                "time": "14:00",
                "createdAt": "2024-06-01T08:00:00",
                "updatedAt": "2024-06-01T08:00:00"
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.create_reminder(&draft).await.expect("request failed");

    assert_eq!(created.id, 12);
    assert_eq!(created.text, "dentist");
}

#[tokio::test]
async fn delete_treats_204_as_void() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/reminders/5"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_reminder(5).await.expect("request failed");
}

#[tokio::test]
async fn surfaces_field_errors_from_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reminders"))
        .respond_with(ResponseTemplate::new(400).set_body_raw(
            r#"{
                "timestamp": "2024-06-01T08:00:00",
                "status": 400,
                "error": "Bad Request",
                "message": "Validation failed",
                "path": "/reminders",
                "fieldErrors": {"text": "Reminder text must not be blank"}
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let draft = ReminderDraft {
        text: String::new(),
        date: CalendarDate::from("2024-06-02"),
        time: "14:00".to_string(),
    };
    let err = client.create_reminder(&draft).await.expect_err("expected failure");

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "Validation failed");
    let fields = err.field_errors().expect("expected field errors");
    assert_eq!(
        fields.get("text").map(String::as_str),
        Some("Reminder text must not be blank")
    );
}

#[tokio::test]
async fn unparsable_error_body_yields_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reminders/range"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("boom", "text/plain"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.allowed_range().await.expect_err("expected failure");

    assert_eq!(err.to_string(), "request failed with status 500");
    assert!(err.field_errors().is_none());
    match err {
        ApiError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert!(body.is_none());
        }
        other => panic!("unexpected error variant: {other:?}"),
    }
}

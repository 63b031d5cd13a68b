// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Typed endpoint methods for the reminder service.

use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{CalendarDate, DateRange, OverviewEntry, PublicHoliday, Reminder, ReminderDraft};

/// Client for the reminder/holiday REST service.
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    /// Creates a new client.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(config)?;
        Ok(Self { http })
    }

    /// Fetches public holidays, optionally limited to one year.
    pub async fn holidays(&self, year: Option<i32>) -> Result<Vec<PublicHoliday>, ApiError> {
        tracing::debug!(?year, "fetching holidays");
        let path = match year {
            Some(year) => format!("/holidays?year={year}"),
            None => "/holidays".to_string(),
        };
        let resp = self.http.execute(self.http.request(Method::GET, &path)).await?;
        decode(resp).await
    }

    /// Fetches reminders, optionally limited to one date.
    pub async fn reminders(&self, date: Option<&CalendarDate>) -> Result<Vec<Reminder>, ApiError> {
        tracing::debug!(date = date.map(CalendarDate::as_str), "fetching reminders");
        let path = match date {
            Some(date) => format!("/reminders?date={date}"),
            None => "/reminders".to_string(),
        };
        let resp = self.http.execute(self.http.request(Method::GET, &path)).await?;
        decode(resp).await
    }

    /// Fetches the inclusive date range in which reminders may be placed.
    pub async fn allowed_range(&self) -> Result<DateRange, ApiError> {
        tracing::debug!("fetching allowed date range");
        let req = self.http.request(Method::GET, "/reminders/range");
        let resp = self.http.execute(req).await?;
        decode(resp).await
    }

    /// Fetches the per-date reminder counts aggregate.
    pub async fn overview(&self) -> Result<Vec<OverviewEntry>, ApiError> {
        tracing::debug!("fetching reminders overview");
        let req = self.http.request(Method::GET, "/reminders/overview");
        let resp = self.http.execute(req).await?;
        decode(resp).await
    }

    /// Creates a reminder.
    pub async fn create_reminder(&self, draft: &ReminderDraft) -> Result<Reminder, ApiError> {
        tracing::debug!(date = %draft.date, "creating reminder");
        let req = self.http.request(Method::POST, "/reminders").json(draft);
        let resp = self.http.execute(req).await?;
        decode(resp).await
    }

    /// Updates an existing reminder.
    pub async fn update_reminder(
        &self,
        id: i64,
        draft: &ReminderDraft,
    ) -> Result<Reminder, ApiError> {
        tracing::debug!(id, "updating reminder");
        let req = self
            .http
            .request(Method::PUT, &format!("/reminders/{id}"))
            .json(draft);
        let resp = self.http.execute(req).await?;
        decode(resp).await
    }

    /// Deletes one reminder. The service answers 204 with an empty body.
    pub async fn delete_reminder(&self, id: i64) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting reminder");
        let req = self.http.request(Method::DELETE, &format!("/reminders/{id}"));
        self.http.execute(req).await?;
        Ok(())
    }

    /// Deletes all reminders on one date. The service answers 204.
    pub async fn delete_reminders_on(&self, date: &CalendarDate) -> Result<(), ApiError> {
        tracing::debug!(%date, "deleting reminders by date");
        let req = self
            .http
            .request(Method::DELETE, &format!("/reminders?date={date}"));
        self.http.execute(req).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

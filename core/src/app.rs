// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use remcal_api::{
    ApiClient, ApiConfig, ApiError, CalendarDate, DateRange, OverviewEntry, PublicHoliday,
    Reminder, ReminderDraft,
};

use crate::cache::{QueryCache, QueryKey};

/// Cached client facade over the reminder service.
///
/// Reads are cache-first; every successful mutation invalidates the by-date
/// and overview query groups so the next read refetches. There is no
/// optimistic update and no retry; a failure surfaces once and leaves the
/// cache as it was.
#[derive(Debug)]
pub struct Remcal {
    api: ApiClient,
    cache: QueryCache,
}

impl Remcal {
    /// Creates a facade for the configured service.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(config)?,
            cache: QueryCache::new(),
        })
    }

    /// The allowed date range, cached for a few minutes.
    pub async fn allowed_range(&mut self) -> Result<DateRange, ApiError> {
        if let Some(range) = self.cache.range() {
            return Ok(range.clone());
        }
        let range = self.api.allowed_range().await?;
        self.cache.put_range(range.clone());
        Ok(range)
    }

    /// Public holidays of one year, cached for a day.
    pub async fn holidays(&mut self, year: i32) -> Result<Vec<PublicHoliday>, ApiError> {
        if let Some(holidays) = self.cache.holidays(year) {
            return Ok(holidays.clone());
        }
        let holidays = self.api.holidays(Some(year)).await?;
        self.cache.put_holidays(year, holidays.clone());
        Ok(holidays)
    }

    /// Reminders on one date, cached until a mutation invalidates them.
    pub async fn reminders_on(&mut self, date: &CalendarDate) -> Result<Vec<Reminder>, ApiError> {
        if let Some(reminders) = self.cache.reminders(date) {
            return Ok(reminders.clone());
        }
        let reminders = self.api.reminders(Some(date)).await?;
        self.cache.put_reminders(date.clone(), reminders.clone());
        Ok(reminders)
    }

    /// Every reminder on the service, uncached. Used by one-shot commands
    /// that need to resolve a reminder id without a by-id endpoint.
    pub async fn all_reminders(&mut self) -> Result<Vec<Reminder>, ApiError> {
        self.api.reminders(None).await
    }

    /// The per-date reminder-count aggregate, cached briefly.
    pub async fn overview(&mut self) -> Result<Vec<OverviewEntry>, ApiError> {
        if let Some(overview) = self.cache.overview() {
            return Ok(overview.clone());
        }
        let overview = self.api.overview().await?;
        self.cache.put_overview(overview.clone());
        Ok(overview)
    }

    /// Creates a reminder and invalidates dependent queries.
    pub async fn create_reminder(&mut self, draft: &ReminderDraft) -> Result<Reminder, ApiError> {
        let reminder = self.api.create_reminder(draft).await?;
        tracing::debug!(id = reminder.id, "reminder created");
        self.invalidate_reminders();
        Ok(reminder)
    }

    /// Updates a reminder and invalidates dependent queries.
    pub async fn update_reminder(
        &mut self,
        id: i64,
        draft: &ReminderDraft,
    ) -> Result<Reminder, ApiError> {
        let reminder = self.api.update_reminder(id, draft).await?;
        tracing::debug!(id, "reminder updated");
        self.invalidate_reminders();
        Ok(reminder)
    }

    /// Deletes one reminder and invalidates dependent queries.
    pub async fn delete_reminder(&mut self, id: i64) -> Result<(), ApiError> {
        self.api.delete_reminder(id).await?;
        tracing::debug!(id, "reminder deleted");
        self.invalidate_reminders();
        Ok(())
    }

    /// Deletes all reminders on a date and invalidates dependent queries.
    pub async fn delete_reminders_on(&mut self, date: &CalendarDate) -> Result<(), ApiError> {
        self.api.delete_reminders_on(date).await?;
        tracing::debug!(%date, "reminders deleted by date");
        self.invalidate_reminders();
        Ok(())
    }

    fn invalidate_reminders(&mut self) {
        self.cache.invalidate(QueryKey::RemindersByDate);
        self.cache.invalidate(QueryKey::RemindersOverview);
    }
}

// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! The fetch worker. It owns the [`Remcal`] facade and processes requests
//! one at a time; the UI thread never touches the network. Fetch replies
//! carry the generation they were issued under so the store can drop
//! answers that navigation has already superseded.

use tokio::sync::mpsc;

use remcal_core::{
    CalendarDate, DateRange, FieldErrors, Generation, OverviewEntry, PublicHoliday, Remcal,
    Reminder, ReminderDraft,
};

/// A unit of work for the fetch worker.
#[derive(Debug)]
pub enum Request {
    FetchRange {
        generation: Generation,
    },
    FetchHolidays {
        year: i32,
        generation: Generation,
    },
    FetchReminders {
        date: CalendarDate,
        generation: Generation,
    },
    FetchOverview {
        generation: Generation,
    },
    Create {
        draft: ReminderDraft,
    },
    Update {
        id: i64,
        draft: ReminderDraft,
    },
    Delete {
        id: i64,
    },
    DeleteAllOn {
        date: CalendarDate,
    },
}

/// A reply from the fetch worker.
#[derive(Debug)]
pub enum AppEvent {
    Range {
        range: DateRange,
        generation: Generation,
    },
    Holidays {
        year: i32,
        holidays: Vec<PublicHoliday>,
        generation: Generation,
    },
    Reminders {
        date: CalendarDate,
        reminders: Vec<Reminder>,
        generation: Generation,
    },
    Overview {
        overview: Vec<OverviewEntry>,
        generation: Generation,
    },
    MutationDone,
    FetchFailed {
        message: String,
        generation: Generation,
    },
    MutationFailed {
        message: String,
        field_errors: Option<FieldErrors>,
    },
}

/// Serve requests until the UI drops its channel.
pub async fn serve(
    mut app: Remcal,
    mut requests: mpsc::Receiver<Request>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(request) = requests.recv().await {
        let event = handle(&mut app, request).await;
        if events.send(event).await.is_err() {
            break;
        }
    }
}

async fn handle(app: &mut Remcal, request: Request) -> AppEvent {
    match request {
        Request::FetchRange { generation } => match app.allowed_range().await {
            Ok(range) => AppEvent::Range { range, generation },
            Err(e) => fetch_failed(e, generation),
        },
        Request::FetchHolidays { year, generation } => match app.holidays(year).await {
            Ok(holidays) => AppEvent::Holidays {
                year,
                holidays,
                generation,
            },
            Err(e) => fetch_failed(e, generation),
        },
        Request::FetchReminders { date, generation } => match app.reminders_on(&date).await {
            Ok(reminders) => AppEvent::Reminders {
                date,
                reminders,
                generation,
            },
            Err(e) => fetch_failed(e, generation),
        },
        Request::FetchOverview { generation } => match app.overview().await {
            Ok(overview) => AppEvent::Overview {
                overview,
                generation,
            },
            Err(e) => fetch_failed(e, generation),
        },
        Request::Create { draft } => mutation(app.create_reminder(&draft).await.map(|_| ())),
        Request::Update { id, draft } => {
            mutation(app.update_reminder(id, &draft).await.map(|_| ()))
        }
        Request::Delete { id } => mutation(app.delete_reminder(id).await),
        Request::DeleteAllOn { date } => mutation(app.delete_reminders_on(&date).await),
    }
}

fn fetch_failed(error: remcal_core::ApiError, generation: Generation) -> AppEvent {
    tracing::warn!(%error, "fetch failed");
    AppEvent::FetchFailed {
        message: error.to_string(),
        generation,
    }
}

fn mutation(result: Result<(), remcal_core::ApiError>) -> AppEvent {
    match result {
        Ok(()) => AppEvent::MutationDone,
        Err(error) => {
            tracing::warn!(%error, "mutation failed");
            AppEvent::MutationFailed {
                field_errors: error.field_errors().cloned(),
                message: error.to_string(),
            }
        }
    }
}

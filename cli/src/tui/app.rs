// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, time::Duration};

use ratatui::crossterm::event::{self, Event};
use tokio::sync::mpsc;

use remcal_core::{Remcal, to_naive, today};

use crate::config::Config;
use crate::tui::store::CalendarStore;
use crate::tui::view;
use crate::tui::worker::{self, Request};

const CHANNEL_CAPACITY: usize = 32;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the calendar screen until the user quits.
///
/// The facade lives on a worker task; the UI loop owns the terminal, drains
/// worker replies between frames and polls for input with a short timeout so
/// replies show up without a keypress.
pub async fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let app = Remcal::new(&config.api)?;
    let today = today();
    let today_naive = to_naive(&today).ok_or("Failed to resolve the current date")?;

    let (request_tx, request_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (event_tx, mut event_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let worker = tokio::spawn(worker::serve(app, request_rx, event_tx));

    let mut store = CalendarStore::new(config.week_start, today_naive);
    send_all(&request_tx, store.startup()).await;

    let mut terminal = ratatui::init();
    let result = async {
        loop {
            terminal.draw(|frame| view::draw(frame, &store))?;

            while let Ok(reply) = event_rx.try_recv() {
                let follow_ups = store.on_event(reply);
                send_all(&request_tx, follow_ups).await;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    let requests = store.on_key(key);
                    send_all(&request_tx, requests).await;
                }
            }

            if store.should_quit {
                break Ok::<(), Box<dyn Error>>(());
            }
        }
    }
    .await;
    ratatui::restore();

    // Dropping the request channel stops the worker.
    drop(request_tx);
    worker.abort();

    result
}

async fn send_all(tx: &mpsc::Sender<Request>, requests: Vec<Request>) {
    for request in requests {
        // A send only fails when the worker is gone, and then we are
        // already on our way out.
        let _ = tx.send(request).await;
    }
}

// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side draft validation, mirroring the service's rules so obvious
//! mistakes never reach the network.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use remcal_api::ReminderDraft;

/// Field name to human-readable message.
pub type FieldErrors = BTreeMap<String, String>;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("hardcoded regex"));

/// Maximum reminder text length, matching the service limit.
pub const MAX_TEXT_LEN: usize = 255;

/// Validates a draft before any network call.
///
/// Returns the same field-keyed error map the service uses in its error
/// envelope, so form rendering has a single code path for both.
pub fn validate_draft(draft: &ReminderDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.text.trim().is_empty() {
        errors.insert("text".into(), "Reminder text is required".into());
    } else if draft.text.chars().count() > MAX_TEXT_LEN {
        errors.insert(
            "text".into(),
            format!("Reminder text must be at most {MAX_TEXT_LEN} characters"),
        );
    }

    if draft.time.is_empty() {
        errors.insert("time".into(), "Time is required".into());
    } else if !TIME_RE.is_match(&draft.time) {
        errors.insert("time".into(), "Time must be in HH:mm format".into());
    }

    if crate::date::to_naive(&draft.date).is_none() {
        errors.insert("date".into(), "Date must be in YYYY-MM-DD format".into());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

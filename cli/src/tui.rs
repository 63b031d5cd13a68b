// SPDX-FileCopyrightText: 2026 remcal developers
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod store;
mod view;
mod worker;

pub use app::run;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod court;
pub mod racket;
pub mod stats;

pub use activity::{Activity, NewActivity, UpdateActivity};
pub use court::{Coordinates, Court, CourtFilters};
pub use racket::{NewRacket, Racket, UpdateRacket};
pub use stats::StatsOverview;

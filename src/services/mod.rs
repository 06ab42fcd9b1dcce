// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod courts;
pub mod csv;
pub mod equipment;

pub use courts::courts_data;
pub use csv::{import_rows, parse_csv_text, seed_from_file, CsvRow, ImportOutcome};
pub use equipment::{normalize_label, racket_label, usage_minutes_by_racket};

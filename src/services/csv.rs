// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV import for activity history.
//!
//! Understands the export header
//! `date,sport,activity type,duration minutes,club name,club location,
//! club map link,club latitude,club longitude,session rating,racket,
//! partner,oponents,notes` — the `oponents` typo is part of the format
//! and kept for compatibility.
//!
//! Import is best-effort per row: invalid rows are logged and skipped,
//! never aborting the batch.

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::db::MemDb;
use crate::models::NewActivity;

/// One CSV row, keyed by the export header names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CsvRow {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default, rename = "activity type")]
    pub activity_type: String,
    #[serde(default, rename = "duration minutes")]
    pub duration_minutes: String,
    #[serde(default, rename = "club name")]
    pub club_name: String,
    #[serde(default, rename = "club location")]
    pub club_location: String,
    #[serde(default, rename = "club map link")]
    pub club_map_link: String,
    #[serde(default, rename = "club latitude")]
    pub club_latitude: String,
    #[serde(default, rename = "club longitude")]
    pub club_longitude: String,
    #[serde(default, rename = "session rating")]
    pub session_rating: String,
    #[serde(default)]
    pub racket: String,
    #[serde(default)]
    pub partner: String,
    /// Header typo, see module docs
    #[serde(default, rename = "oponents")]
    pub opponents: String,
    #[serde(default)]
    pub notes: String,
}

/// Outcome of a best-effort batch import.
#[derive(Debug, Clone, Copy)]
pub struct ImportOutcome {
    pub imported: usize,
    pub total: usize,
}

/// Parse raw CSV text into rows, using the first line as header.
pub fn parse_csv_text(text: &str) -> Vec<CsvRow> {
    let mut lines = text.trim().lines();
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

    lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let values = parse_csv_line(line);
            let mut object = serde_json::Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = values.get(i).cloned().unwrap_or_default();
                object.insert(header.clone(), Value::String(value));
            }
            // All fields default, so this cannot fail
            serde_json::from_value(Value::Object(object)).unwrap_or_default()
        })
        .collect()
}

/// Split one CSV line; double quotes group commas and are dropped.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Convert a row into a creation payload. Empty fields become None;
/// an unparseable duration becomes 0, which then fails validation.
pub fn row_to_activity(row: &CsvRow) -> NewActivity {
    NewActivity {
        date: row.date.clone(),
        sport: row.sport.to_lowercase(),
        activity_type: non_empty(&row.activity_type),
        duration: row.duration_minutes.trim().parse().unwrap_or(0),
        club_name: non_empty(&row.club_name),
        club_location: non_empty(&row.club_location),
        club_map_link: non_empty(&row.club_map_link),
        club_latitude: non_empty(&row.club_latitude),
        club_longitude: non_empty(&row.club_longitude),
        session_rating: row.session_rating.trim().parse().ok(),
        racket: non_empty(&row.racket),
        partner: non_empty(&row.partner),
        opponents: non_empty(&row.opponents),
        notes: non_empty(&row.notes),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Import rows one at a time; failed rows are logged and skipped.
pub fn import_rows(db: &MemDb, rows: &[CsvRow]) -> ImportOutcome {
    let total = rows.len();
    let mut imported = 0;

    for (index, row) in rows.iter().enumerate() {
        let activity = row_to_activity(row);
        match activity.validate() {
            Ok(()) => {
                db.create_activity(activity);
                imported += 1;
            }
            Err(err) => {
                tracing::warn!(
                    row = index,
                    date = %row.date,
                    error = %err,
                    "Skipping invalid CSV row"
                );
            }
        }
    }

    ImportOutcome { imported, total }
}

/// Seed the store from a CSV file at startup.
pub fn seed_from_file(db: &MemDb, path: &str) -> anyhow::Result<ImportOutcome> {
    let text = std::fs::read_to_string(path)?;
    let rows = parse_csv_text(&text);
    Ok(import_rows(db, &rows))
}

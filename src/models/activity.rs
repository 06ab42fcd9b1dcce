// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged session (activity) model for storage and API.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::parse_iso_date;

/// Sports the tracker knows about.
pub const SPORTS: &[&str] = &["padel", "tennis", "pickleball"];

/// Session kinds.
pub const ACTIVITY_TYPES: &[&str] = &["training", "friendly", "tournament"];

/// A logged sports session.
///
/// `id` and `createdAt` are assigned by the store and immutable after
/// creation. Optional fields serialize as `null` so the wire format
/// matches what the frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// Session date, ISO "YYYY-MM-DD"
    pub date: String,
    /// "padel", "tennis" or "pickleball"
    pub sport: String,
    /// "training", "friendly" or "tournament"
    pub activity_type: Option<String>,
    /// Duration in minutes
    pub duration: i32,
    pub club_name: Option<String>,
    pub club_location: Option<String>,
    pub club_map_link: Option<String>,
    /// Coordinates kept as free text; parsed lazily by the courts aggregator
    pub club_latitude: Option<String>,
    pub club_longitude: Option<String>,
    /// 1-5
    pub session_rating: Option<i32>,
    /// Free-text racket label, matched against equipment by name
    pub racket: Option<String>,
    pub partner: Option<String>,
    /// Comma-joined opponent names
    pub opponents: Option<String>,
    pub notes: Option<String>,
    /// When this activity was recorded (RFC3339)
    pub created_at: String,
}

/// Payload for creating an activity (everything except id/createdAt).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[validate(custom(function = validate_date))]
    pub date: String,
    #[validate(custom(function = validate_sport))]
    pub sport: String,
    #[validate(custom(function = validate_activity_type))]
    pub activity_type: Option<String>,
    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration: i32,
    pub club_name: Option<String>,
    pub club_location: Option<String>,
    pub club_map_link: Option<String>,
    pub club_latitude: Option<String>,
    pub club_longitude: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub session_rating: Option<i32>,
    pub racket: Option<String>,
    pub partner: Option<String>,
    pub opponents: Option<String>,
    pub notes: Option<String>,
}

/// Partial update payload; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivity {
    #[validate(custom(function = validate_date))]
    pub date: Option<String>,
    #[validate(custom(function = validate_sport))]
    pub sport: Option<String>,
    #[validate(custom(function = validate_activity_type))]
    pub activity_type: Option<String>,
    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration: Option<i32>,
    pub club_name: Option<String>,
    pub club_location: Option<String>,
    pub club_map_link: Option<String>,
    pub club_latitude: Option<String>,
    pub club_longitude: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub session_rating: Option<i32>,
    pub racket: Option<String>,
    pub partner: Option<String>,
    pub opponents: Option<String>,
    pub notes: Option<String>,
}

impl Activity {
    /// Apply a partial update, leaving id/createdAt untouched.
    pub fn apply_update(&mut self, update: UpdateActivity) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(sport) = update.sport {
            self.sport = sport;
        }
        if update.activity_type.is_some() {
            self.activity_type = update.activity_type;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
        if update.club_name.is_some() {
            self.club_name = update.club_name;
        }
        if update.club_location.is_some() {
            self.club_location = update.club_location;
        }
        if update.club_map_link.is_some() {
            self.club_map_link = update.club_map_link;
        }
        if update.club_latitude.is_some() {
            self.club_latitude = update.club_latitude;
        }
        if update.club_longitude.is_some() {
            self.club_longitude = update.club_longitude;
        }
        if update.session_rating.is_some() {
            self.session_rating = update.session_rating;
        }
        if update.racket.is_some() {
            self.racket = update.racket;
        }
        if update.partner.is_some() {
            self.partner = update.partner;
        }
        if update.opponents.is_some() {
            self.opponents = update.opponents;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
    }
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
    if parse_iso_date(date).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("date").with_message("date must be ISO YYYY-MM-DD".into()))
    }
}

fn validate_sport(sport: &str) -> Result<(), ValidationError> {
    if SPORTS.contains(&sport.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("sport")
            .with_message("sport must be one of padel, tennis, pickleball".into()))
    }
}

fn validate_activity_type(activity_type: &str) -> Result<(), ValidationError> {
    if ACTIVITY_TYPES.contains(&activity_type) {
        Ok(())
    } else {
        Err(ValidationError::new("activity_type")
            .with_message("activity type must be one of training, friendly, tournament".into()))
    }
}

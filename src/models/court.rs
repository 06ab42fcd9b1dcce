// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Derived court (venue) summaries and their filter surface.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Parsed venue coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A venue summary derived from the activity set.
///
/// Never persisted; recomputed per request. One court per distinct
/// (clubName, clubLocation) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Court {
    pub club_name: String,
    /// Empty string when the contributing activities carry no location
    pub club_location: String,
    pub play_count: u32,
    /// Total minutes played at this venue
    pub total_duration: i32,
    /// Max date among contributing activities (ISO, lexicographic)
    pub last_played: String,
    pub sports: Vec<String>,
    pub activity_types: Vec<String>,
    /// Union of partners and split opponents, trimmed and deduplicated
    pub players: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// Optional filters applied before aggregation.
///
/// An absent field means no constraint on that dimension; clearing
/// filters is the empty record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtFilters {
    /// Inclusive lower date bound (ISO "YYYY-MM-DD")
    pub start_date: Option<String>,
    /// Inclusive upper date bound
    pub end_date: Option<String>,
    /// Case-insensitive exact sport match
    pub sport: Option<String>,
    /// Exact activity type match
    pub activity_type: Option<String>,
    /// Case-insensitive substring match against partner or opponents
    pub player: Option<String>,
}

/// Favorites are keyed by the delimited "clubName|clubLocation" pair.
pub fn favorite_key(club_name: &str, club_location: &str) -> String {
    format!("{}|{}", club_name, club_location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_key_format() {
        assert_eq!(favorite_key("Padel Town", "Dubai"), "Padel Town|Dubai");
        assert_eq!(favorite_key("X", ""), "X|");
    }
}

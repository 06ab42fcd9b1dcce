// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Courts aggregation engine.
//!
//! Groups raw activities into per-venue summaries:
//! 1. Apply the optional filters (date range, sport, type, player)
//! 2. Group the survivors by their (clubName, clubLocation) pair
//! 3. Accumulate counts, durations, last-played and member sets
//! 4. Sort descending by play count (stable on ties)
//!
//! Activities without a club name cannot be attributed to a court and
//! are dropped before grouping.

use std::collections::{BTreeSet, HashMap};

use crate::models::{Activity, Coordinates, Court, CourtFilters};
use crate::time_utils::parse_iso_date;

/// Compute court summaries for the given activities and filters.
///
/// `activities` must be in creation order so that groups form (and
/// ties sort) deterministically.
pub fn courts_data(activities: &[Activity], filters: &CourtFilters) -> Vec<Court> {
    let mut builders: Vec<CourtBuilder> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for activity in activities.iter().filter(|a| matches_filters(a, filters)) {
        let Some(club_name) = activity.club_name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        let club_location = activity.club_location.clone().unwrap_or_default();

        let key = (club_name.to_string(), club_location.clone());
        let idx = *index.entry(key).or_insert_with(|| {
            builders.push(CourtBuilder::new(club_name.to_string(), club_location));
            builders.len() - 1
        });
        builders[idx].add(activity);
    }

    let mut courts: Vec<Court> = builders.into_iter().map(CourtBuilder::build).collect();
    // Vec::sort_by is stable, so ties keep group-formation order
    courts.sort_by(|a, b| b.play_count.cmp(&a.play_count));
    courts
}

/// True when the activity passes every defined filter dimension.
fn matches_filters(activity: &Activity, filters: &CourtFilters) -> bool {
    if let Some(sport) = &filters.sport {
        if !activity.sport.eq_ignore_ascii_case(sport) {
            return false;
        }
    }

    if let Some(activity_type) = &filters.activity_type {
        if activity.activity_type.as_deref() != Some(activity_type.as_str()) {
            return false;
        }
    }

    if let Some(player) = &filters.player {
        let needle = player.to_lowercase();
        let mentions = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(&needle))
        };
        if !mentions(&activity.partner) && !mentions(&activity.opponents) {
            return false;
        }
    }

    let start = filters.start_date.as_deref().and_then(parse_iso_date);
    let end = filters.end_date.as_deref().and_then(parse_iso_date);
    if start.is_some() || end.is_some() {
        let Some(date) = parse_iso_date(&activity.date) else {
            return false;
        };
        if start.is_some_and(|s| date < s) {
            return false;
        }
        if end.is_some_and(|e| date > e) {
            return false;
        }
    }

    true
}

struct CourtBuilder {
    club_name: String,
    club_location: String,
    play_count: u32,
    total_duration: i32,
    last_played: String,
    sports: BTreeSet<String>,
    activity_types: BTreeSet<String>,
    players: BTreeSet<String>,
    coordinates: Option<Coordinates>,
}

impl CourtBuilder {
    fn new(club_name: String, club_location: String) -> Self {
        Self {
            club_name,
            club_location,
            play_count: 0,
            total_duration: 0,
            last_played: String::new(),
            sports: BTreeSet::new(),
            activity_types: BTreeSet::new(),
            players: BTreeSet::new(),
            coordinates: None,
        }
    }

    fn add(&mut self, activity: &Activity) {
        self.play_count += 1;
        self.total_duration += activity.duration;

        // ISO dates compare lexicographically
        if activity.date > self.last_played {
            self.last_played = activity.date.clone();
        }

        self.sports.insert(activity.sport.clone());
        if let Some(activity_type) = &activity.activity_type {
            self.activity_types.insert(activity_type.clone());
        }

        if let Some(partner) = activity.partner.as_deref() {
            let name = partner.trim();
            if !name.is_empty() {
                self.players.insert(name.to_string());
            }
        }
        if let Some(opponents) = activity.opponents.as_deref() {
            for name in opponents.split(',') {
                let name = name.trim();
                if !name.is_empty() {
                    self.players.insert(name.to_string());
                }
            }
        }

        // First activity with finite coordinates wins; no averaging
        if self.coordinates.is_none() {
            self.coordinates = parse_coordinates(activity);
        }
    }

    fn build(self) -> Court {
        Court {
            club_name: self.club_name,
            club_location: self.club_location,
            play_count: self.play_count,
            total_duration: self.total_duration,
            last_played: self.last_played,
            sports: self.sports.into_iter().collect(),
            activity_types: self.activity_types.into_iter().collect(),
            players: self.players.into_iter().collect(),
            coordinates: self.coordinates,
        }
    }
}

/// Parse an activity's free-text coordinates; malformed or non-finite
/// values yield None.
fn parse_coordinates(activity: &Activity) -> Option<Coordinates> {
    let lat: f64 = activity.club_latitude.as_deref()?.trim().parse().ok()?;
    let lng: f64 = activity.club_longitude.as_deref()?.trim().parse().ok()?;
    (lat.is_finite() && lng.is_finite()).then_some(Coordinates { lat, lng })
}

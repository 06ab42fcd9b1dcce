// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store with typed operations.
//!
//! Provides high-level operations for:
//! - Activities (logged sessions)
//! - Favorites (court keys marked by the user)
//! - Rackets (equipment)
//!
//! Backed by concurrent maps, so handlers need no explicit locking.
//! Nothing is persisted across restarts; the optional CSV seed refills
//! the store at startup.

use chrono::NaiveDate;
use dashmap::{DashMap, DashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::models::court::favorite_key;
use crate::models::{Activity, NewActivity, NewRacket, Racket, UpdateActivity, UpdateRacket};
use crate::time_utils::{now_rfc3339, parse_iso_date};

/// Shared in-memory database. Cheap to clone.
#[derive(Clone, Default)]
pub struct MemDb {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    activities: DashMap<u64, Activity>,
    rackets: DashMap<u64, Racket>,
    favorites: DashSet<String>,
    next_id: AtomicU64,
}

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// All activities, most recent date first.
    pub fn list_activities(&self) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .inner
            .activities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        activities
    }

    /// All activities in creation order (ascending id).
    ///
    /// The courts aggregator depends on this ordering so that group
    /// formation (and thus tie order in the sorted output) is
    /// deterministic.
    pub fn activities_in_creation_order(&self) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .inner
            .activities
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by_key(|a| a.id);
        activities
    }

    pub fn get_activity(&self, id: u64) -> Option<Activity> {
        self.inner.activities.get(&id).map(|a| a.value().clone())
    }

    pub fn create_activity(&self, new: NewActivity) -> Activity {
        let activity = Activity {
            id: self.next_id(),
            date: new.date,
            sport: new.sport,
            activity_type: new.activity_type,
            duration: new.duration,
            club_name: new.club_name,
            club_location: new.club_location,
            club_map_link: new.club_map_link,
            club_latitude: new.club_latitude,
            club_longitude: new.club_longitude,
            session_rating: new.session_rating,
            racket: new.racket,
            partner: new.partner,
            opponents: new.opponents,
            notes: new.notes,
            created_at: now_rfc3339(),
        };
        self.inner.activities.insert(activity.id, activity.clone());
        activity
    }

    /// Merge a partial update into an existing activity.
    pub fn update_activity(&self, id: u64, update: UpdateActivity) -> Option<Activity> {
        let mut entry = self.inner.activities.get_mut(&id)?;
        entry.apply_update(update);
        Some(entry.value().clone())
    }

    /// Returns false if the activity did not exist.
    pub fn delete_activity(&self, id: u64) -> bool {
        self.inner.activities.remove(&id).is_some()
    }

    /// Case-insensitive exact sport match, most recent date first.
    pub fn activities_by_sport(&self, sport: &str) -> Vec<Activity> {
        let needle = sport.to_lowercase();
        let mut activities: Vec<Activity> = self
            .inner
            .activities
            .iter()
            .filter(|entry| entry.value().sport.to_lowercase() == needle)
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        activities
    }

    /// Activities whose date falls within [start, end] inclusive,
    /// most recent date first.
    pub fn activities_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Activity> {
        let mut activities: Vec<Activity> = self
            .inner
            .activities
            .iter()
            .filter(|entry| {
                parse_iso_date(&entry.value().date)
                    .map(|d| d >= start && d <= end)
                    .unwrap_or(false)
            })
            .map(|entry| entry.value().clone())
            .collect();
        activities.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        activities
    }

    // ─── Favorite Operations ─────────────────────────────────────

    /// All favorite keys ("clubName|clubLocation"); order unspecified.
    pub fn list_favorites(&self) -> Vec<String> {
        self.inner
            .favorites
            .iter()
            .map(|key| key.key().clone())
            .collect()
    }

    /// Idempotent; returns false if the key was already present.
    pub fn add_favorite(&self, club_name: &str, club_location: &str) -> bool {
        self.inner
            .favorites
            .insert(favorite_key(club_name, club_location))
    }

    /// Idempotent; returns false if the key was not present.
    pub fn remove_favorite(&self, club_name: &str, club_location: &str) -> bool {
        self.inner
            .favorites
            .remove(&favorite_key(club_name, club_location))
            .is_some()
    }

    pub fn is_favorite(&self, club_name: &str, club_location: &str) -> bool {
        self.inner
            .favorites
            .contains(&favorite_key(club_name, club_location))
    }

    // ─── Racket Operations ───────────────────────────────────────

    /// All rackets, newest first.
    pub fn list_rackets(&self) -> Vec<Racket> {
        let mut rackets: Vec<Racket> = self
            .inner
            .rackets
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        rackets.sort_by(|a, b| b.id.cmp(&a.id));
        rackets
    }

    pub fn get_racket(&self, id: u64) -> Option<Racket> {
        self.inner.rackets.get(&id).map(|r| r.value().clone())
    }

    pub fn create_racket(&self, new: NewRacket) -> Racket {
        let racket = Racket {
            id: self.next_id(),
            brand: new.brand,
            model: new.model,
            is_active: true,
            is_broken: false,
            notes: new.notes,
            image_url: new.image_url,
            created_at: now_rfc3339(),
        };
        self.inner.rackets.insert(racket.id, racket.clone());
        racket
    }

    pub fn update_racket(&self, id: u64, update: UpdateRacket) -> Option<Racket> {
        let mut entry = self.inner.rackets.get_mut(&id)?;
        entry.apply_update(update);
        Some(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_activity(date: &str, sport: &str) -> NewActivity {
        NewActivity {
            date: date.to_string(),
            sport: sport.to_string(),
            activity_type: None,
            duration: 60,
            club_name: None,
            club_location: None,
            club_map_link: None,
            club_latitude: None,
            club_longitude: None,
            session_rating: None,
            racket: None,
            partner: None,
            opponents: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_and_get_activity() {
        let db = MemDb::new();
        let created = db.create_activity(new_activity("2024-01-15", "padel"));

        let fetched = db.get_activity(created.id).unwrap();
        assert_eq!(fetched.date, "2024-01-15");
        assert!(!fetched.created_at.is_empty());
    }

    #[test]
    fn test_list_sorted_by_date_descending() {
        let db = MemDb::new();
        db.create_activity(new_activity("2024-01-10", "padel"));
        db.create_activity(new_activity("2024-03-01", "tennis"));
        db.create_activity(new_activity("2024-02-15", "padel"));

        let activities = db.list_activities();
        let dates: Vec<&str> = activities.iter().map(|a| a.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-02-15", "2024-01-10"]);
    }

    #[test]
    fn test_sport_filter_case_insensitive() {
        let db = MemDb::new();
        db.create_activity(new_activity("2024-01-10", "padel"));
        db.create_activity(new_activity("2024-01-11", "tennis"));

        assert_eq!(db.activities_by_sport("PADEL").len(), 1);
        assert_eq!(db.activities_by_sport("pickleball").len(), 0);
    }

    #[test]
    fn test_date_range_inclusive() {
        let db = MemDb::new();
        db.create_activity(new_activity("2024-01-10", "padel"));
        db.create_activity(new_activity("2024-01-20", "padel"));
        db.create_activity(new_activity("2024-02-01", "padel"));

        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(db.activities_by_date_range(start, end).len(), 2);
    }

    #[test]
    fn test_delete_activity() {
        let db = MemDb::new();
        let created = db.create_activity(new_activity("2024-01-15", "padel"));

        assert!(db.delete_activity(created.id));
        assert!(!db.delete_activity(created.id));
        assert!(db.get_activity(created.id).is_none());
    }

    #[test]
    fn test_favorites_idempotent() {
        let db = MemDb::new();

        assert!(db.add_favorite("X", "Y"));
        assert!(!db.add_favorite("X", "Y"));
        assert!(db.is_favorite("X", "Y"));
        assert_eq!(db.list_favorites(), vec!["X|Y".to_string()]);

        assert!(db.remove_favorite("X", "Y"));
        assert!(!db.remove_favorite("X", "Y"));
        assert!(!db.is_favorite("X", "Y"));
    }

    #[test]
    fn test_racket_defaults() {
        let db = MemDb::new();
        let racket = db.create_racket(NewRacket {
            brand: "Wilson".to_string(),
            model: "Bela Elite V2.5".to_string(),
            notes: None,
            image_url: None,
        });

        assert!(racket.is_active);
        assert!(!racket.is_broken);
        assert_eq!(db.list_rackets().len(), 1);
    }
}

//! Activity statistics for the dashboard overview.

use serde::Serialize;
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Activity;

/// Aggregate statistics over the full activity set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsOverview {
    pub total_activities: u32,
    /// Total minutes played, rounded to whole hours
    pub total_hours: i64,
    /// Mean session length in minutes, rounded; 0 when there are no activities
    pub average_duration: i64,
    /// Training sessions per tournament; 0.0 when no tournaments are logged
    pub training_tournament_ratio: f64,
    /// Activity count per sport
    pub sport_stats: HashMap<String, u32>,
}

impl StatsOverview {
    /// Compute the overview from the full activity set.
    pub fn from_activities(activities: &[Activity]) -> Self {
        let total_activities = activities.len() as u32;
        let total_minutes: i64 = activities.iter().map(|a| a.duration as i64).sum();

        let average_duration = if activities.is_empty() {
            0
        } else {
            (total_minutes as f64 / activities.len() as f64).round() as i64
        };

        let mut sport_stats: HashMap<String, u32> = HashMap::new();
        for activity in activities {
            *sport_stats.entry(activity.sport.clone()).or_insert(0) += 1;
        }

        let count_of = |kind: &str| {
            activities
                .iter()
                .filter(|a| a.activity_type.as_deref() == Some(kind))
                .count()
        };
        let training = count_of("training");
        let tournaments = count_of("tournament");
        let training_tournament_ratio = if tournaments > 0 {
            training as f64 / tournaments as f64
        } else {
            0.0
        };

        Self {
            total_activities,
            total_hours: (total_minutes as f64 / 60.0).round() as i64,
            average_duration,
            training_tournament_ratio,
            sport_stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(sport: &str, activity_type: Option<&str>, duration: i32) -> Activity {
        Activity {
            id: 0,
            date: "2024-01-15".to_string(),
            sport: sport.to_string(),
            activity_type: activity_type.map(String::from),
            duration,
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
            created_at: "2024-01-15T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let stats = StatsOverview::from_activities(&[]);
        assert_eq!(stats.total_activities, 0);
        assert_eq!(stats.total_hours, 0);
        assert_eq!(stats.average_duration, 0);
        assert_eq!(stats.training_tournament_ratio, 0.0);
        assert!(stats.sport_stats.is_empty());
    }

    #[test]
    fn test_totals_and_average() {
        let activities = vec![
            make_activity("padel", Some("training"), 90),
            make_activity("padel", Some("tournament"), 120),
            make_activity("tennis", None, 60),
        ];

        let stats = StatsOverview::from_activities(&activities);

        assert_eq!(stats.total_activities, 3);
        assert_eq!(stats.total_hours, 5); // 270 minutes -> 4.5 -> rounds to 5
        assert_eq!(stats.average_duration, 90);
        assert_eq!(stats.sport_stats.get("padel"), Some(&2));
        assert_eq!(stats.sport_stats.get("tennis"), Some(&1));
    }

    #[test]
    fn test_training_tournament_ratio() {
        let activities = vec![
            make_activity("padel", Some("training"), 60),
            make_activity("padel", Some("training"), 60),
            make_activity("padel", Some("training"), 60),
            make_activity("padel", Some("tournament"), 180),
        ];

        let stats = StatsOverview::from_activities(&activities);
        assert_eq!(stats.training_tournament_ratio, 3.0);
    }

    #[test]
    fn test_ratio_zero_without_tournaments() {
        let activities = vec![make_activity("padel", Some("training"), 60)];
        let stats = StatsOverview::from_activities(&activities);
        assert_eq!(stats.training_tournament_ratio, 0.0);
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Equipment usage aggregation.
//!
//! Rackets and activities are linked only by free-text labels. Both
//! sides are normalized (trim, lowercase, collapse whitespace) and
//! matched exactly; a typo on either side silently undercounts.

use std::collections::HashMap;

use crate::models::{Activity, Racket};

/// Normalize a racket label for matching.
pub fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The normalized "brand model" label for a racket.
pub fn racket_label(racket: &Racket) -> String {
    normalize_label(&format!("{} {}", racket.brand, racket.model))
}

/// Total minutes used per racket id.
///
/// Activities whose normalized racket field matches no racket label
/// contribute nothing.
pub fn usage_minutes_by_racket(
    rackets: &[Racket],
    activities: &[Activity],
) -> HashMap<u64, i64> {
    let label_to_id: HashMap<String, u64> =
        rackets.iter().map(|r| (racket_label(r), r.id)).collect();

    let mut minutes: HashMap<u64, i64> = HashMap::new();
    for activity in activities {
        let Some(label) = activity.racket.as_deref() else {
            continue;
        };
        if let Some(&id) = label_to_id.get(&normalize_label(label)) {
            *minutes.entry(id).or_insert(0) += activity.duration as i64;
        }
    }
    minutes
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Equipment (racket) model.
//!
//! Rackets are linked to activities only by free-text label matching
//! ("brand model"), never by foreign key.

use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A racket owned by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Racket {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub is_active: bool,
    pub is_broken: bool,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub created_at: String,
}

/// Payload for registering a racket.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRacket {
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[validate(length(min = 1, message = "model is required"))]
    pub model: String,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

/// Partial racket update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRacket {
    #[validate(length(min = 1, message = "brand cannot be empty"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, message = "model cannot be empty"))]
    pub model: Option<String>,
    pub is_active: Option<bool>,
    pub is_broken: Option<bool>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl Racket {
    /// Apply a partial update, leaving id/createdAt untouched.
    pub fn apply_update(&mut self, update: UpdateRacket) {
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(is_broken) = update.is_broken {
            self.is_broken = is_broken;
        }
        if update.notes.is_some() {
            self.notes = update.notes;
        }
        if update.image_url.is_some() {
            self.image_url = update.image_url;
        }
    }
}

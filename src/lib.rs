// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Tracket: personal racket-sports session tracker
//!
//! This crate provides the backend API for logging padel/tennis/
//! pickleball sessions and deriving per-venue (court) summaries,
//! favorites and equipment usage.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::MemDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: MemDb,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Courts aggregation API tests.

use axum::http::StatusCode;
use serde_json::json;

mod common;

fn payload_at(date: &str, club: &str, duration: i32) -> serde_json::Value {
    common::activity_payload(date, Some(club), duration)
}

#[tokio::test]
async fn test_club_a_aggregation_example() {
    let (app, _) = common::create_test_app();

    common::send_json(&app, "POST", "/api/activities", payload_at("2024-01-01", "Club A", 90)).await;
    common::send_json(&app, "POST", "/api/activities", payload_at("2024-01-02", "Club A", 120)).await;

    let (status, body) = common::send(&app, "GET", "/api/courts").await;

    assert_eq!(status, StatusCode::OK);
    let courts = body.as_array().unwrap();
    assert_eq!(courts.len(), 1);
    assert_eq!(courts[0]["clubName"], "Club A");
    assert_eq!(courts[0]["playCount"], 2);
    assert_eq!(courts[0]["totalDuration"], 210);
    assert_eq!(courts[0]["lastPlayed"], "2024-01-02");
}

#[tokio::test]
async fn test_activities_without_club_are_excluded() {
    let (app, _) = common::create_test_app();

    common::send_json(
        &app,
        "POST",
        "/api/activities",
        common::activity_payload("2024-01-01", None, 60),
    )
    .await;
    common::send_json(&app, "POST", "/api/activities", payload_at("2024-01-02", "Club A", 60)).await;

    let (_, body) = common::send(&app, "GET", "/api/courts").await;
    let courts = body.as_array().unwrap();
    assert_eq!(courts.len(), 1);
    assert_eq!(courts[0]["playCount"], 1);
}

#[tokio::test]
async fn test_sorted_by_play_count() {
    let (app, _) = common::create_test_app();

    common::send_json(&app, "POST", "/api/activities", payload_at("2024-01-01", "Quiet", 60)).await;
    for date in ["2024-01-02", "2024-01-03"] {
        common::send_json(&app, "POST", "/api/activities", payload_at(date, "Busy", 60)).await;
    }

    let (_, body) = common::send(&app, "GET", "/api/courts").await;
    let courts = body.as_array().unwrap();
    assert_eq!(courts[0]["clubName"], "Busy");
    assert_eq!(courts[1]["clubName"], "Quiet");
}

#[tokio::test]
async fn test_filters_applied_before_grouping() {
    let (app, _) = common::create_test_app();

    let mut training = payload_at("2024-01-01", "Club A", 60);
    training["activityType"] = json!("training");
    training["partner"] = json!("Ana");
    common::send_json(&app, "POST", "/api/activities", training).await;

    let mut friendly = payload_at("2024-01-02", "Club A", 90);
    friendly["opponents"] = json!("Ricardo, Tomas");
    common::send_json(&app, "POST", "/api/activities", friendly).await;

    let (_, body) = common::send(&app, "GET", "/api/courts?activityType=training").await;
    assert_eq!(body[0]["playCount"], 1);
    assert_eq!(body[0]["totalDuration"], 60);

    let (_, body) = common::send(&app, "GET", "/api/courts?player=tomas").await;
    assert_eq!(body[0]["playCount"], 1);
    assert_eq!(body[0]["totalDuration"], 90);

    let (_, body) = common::send(
        &app,
        "GET",
        "/api/courts?startDate=2024-01-02&endDate=2024-01-02",
    )
    .await;
    assert_eq!(body[0]["playCount"], 1);
    assert_eq!(body[0]["lastPlayed"], "2024-01-02");
}

#[tokio::test]
async fn test_invalid_filter_date_rejected() {
    let (app, _) = common::create_test_app();

    let (status, body) = common::send(&app, "GET", "/api/courts?startDate=not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_players_and_coordinates() {
    let (app, _) = common::create_test_app();

    let mut a = payload_at("2024-01-01", "Padel Town", 90);
    a["partner"] = json!("Alvaro");
    a["opponents"] = json!("Ricardo, Tomas");
    a["clubLatitude"] = json!("25.14082667");
    a["clubLongitude"] = json!("55.25946167");
    common::send_json(&app, "POST", "/api/activities", a).await;

    let mut b = payload_at("2024-01-02", "Padel Town", 90);
    b["partner"] = json!("Rami");
    b["clubLatitude"] = json!("garbage");
    b["clubLongitude"] = json!("55.0");
    common::send_json(&app, "POST", "/api/activities", b).await;

    let (_, body) = common::send(&app, "GET", "/api/courts").await;
    let court = &body.as_array().unwrap()[0];

    let players: Vec<&str> = court["players"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap())
        .collect();
    assert_eq!(players, vec!["Alvaro", "Rami", "Ricardo", "Tomas"]);

    assert!((court["coordinates"]["lat"].as_f64().unwrap() - 25.14082667).abs() < 1e-9);
    assert!((court["coordinates"]["lng"].as_f64().unwrap() - 55.25946167).abs() < 1e-9);
}

#[tokio::test]
async fn test_same_club_different_location_are_distinct() {
    let (app, _) = common::create_test_app();

    let mut brooklyn = payload_at("2024-01-01", "Padel Haus", 60);
    brooklyn["clubLocation"] = json!("Brooklyn");
    common::send_json(&app, "POST", "/api/activities", brooklyn).await;

    let mut queens = payload_at("2024-01-02", "Padel Haus", 60);
    queens["clubLocation"] = json!("Queens");
    common::send_json(&app, "POST", "/api/activities", queens).await;

    let (_, body) = common::send(&app, "GET", "/api/courts").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

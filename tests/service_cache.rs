use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

use pointscache::{ApiClient, ApiError, PointsService};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Service against a mock server, pinned to a fixed calendar day.
fn pinned_service(server: &MockServer, today: NaiveDate) -> Result<PointsService> {
    let client = ApiClient::with_base_url(server.base_url())?;
    Ok(PointsService::with_clock(client, Box::new(move || today)))
}

fn points_lists_body() -> serde_json::Value {
    json!({
        "pointsLists": [
            {
                "name": "Period 1",
                "listType": "Seeding",
                "startDate": "Dec 18, 2023",
                "endDate": "Jan 2, 2024",
                "publicationDate": "Jan&nbsp;5,&nbsp;2024",
                "id": 101,
            },
            {
                "name": "Period 1 Juniors",
                "listType": "Seeding",
                "startDate": "Dec 18, 2023",
                "endDate": "Jan 2, 2024",
                "publicationDate": "Jan&nbsp;5,&nbsp;2024",
                "id": 102,
            },
            {
                "name": "Sprint Rankings",
                "listType": "Sprint",
                "startDate": "Dec 18, 2023",
                "endDate": "Jan 2, 2024",
                "publicationDate": "Jan 5, 2024",
                "id": 103,
            },
            {
                "name": "Period 2",
                "listType": "Seeding",
                "startDate": "Jan 3, 2024",
                "endDate": "Feb 6, 2024",
                "publicationDate": "Feb 9, 2024",
                "id": 104,
            },
        ]
    })
}

#[tokio::test]
async fn test_first_call_fetches_then_same_day_calls_hit_cache() -> Result<()> {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(GET)
            .path("/ViewPoints.asp")
            .query_param("format", "json");
        then.status(200).json_body(points_lists_body());
    });

    let service = pinned_service(&server, day(2024, 1, 20))?;

    let first = service.all_points_lists().await?;
    let second = service.all_points_lists().await?;

    upstream.assert_hits(1);
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].name, second[0].name);
    Ok(())
}

#[tokio::test]
async fn test_groups_are_normalized_for_clients() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ViewPoints.asp");
        then.status(200).json_body(points_lists_body());
    });

    let service = pinned_service(&server, day(2024, 1, 20))?;
    let groups = service.all_points_lists().await?;

    // one group per distinct publication date, Sprint list excluded
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Period 1 / Period 1 Juniors");
    assert_eq!(groups[0].publication_date, "2024-01-05");
    assert_eq!(groups[0].start_date, "2023-12-18");
    assert_eq!(groups[0].end_date, "2024-01-02");
    assert_eq!(groups[0].lists.len(), 2);
    assert_eq!(groups[1].name, "Period 2");

    // members keep their id but lose the hoisted date fields
    let member = serde_json::to_value(&groups[0].lists[0])?;
    assert_eq!(member["id"], 101);
    assert!(member.get("publicationDate").is_none());
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_is_not_cached_and_next_call_retries() -> Result<()> {
    let server = MockServer::start();
    let mut failing = server.mock(|when, then| {
        when.method(GET).path("/ViewPoints.asp");
        then.status(500).body("maintenance");
    });

    let service = pinned_service(&server, day(2024, 1, 20))?;

    let err = service.all_points_lists().await.unwrap_err();
    assert!(matches!(err, ApiError::Remote { status: 500, .. }));
    failing.assert_hits(1);
    failing.delete();

    let recovered = server.mock(|when, then| {
        when.method(GET).path("/ViewPoints.asp");
        then.status(200).json_body(points_lists_body());
    });

    let groups = service.all_points_lists().await?;
    recovered.assert_hits(1);
    assert_eq!(groups.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_date_rollover_forces_refetch() -> Result<()> {
    let server = MockServer::start();
    let upstream = server.mock(|when, then| {
        when.method(GET).path("/ViewPoints.asp");
        then.status(200).json_body(points_lists_body());
    });

    let today = Arc::new(Mutex::new(day(2024, 1, 20)));
    let clock_date = Arc::clone(&today);
    let client = ApiClient::with_base_url(server.base_url())?;
    let service =
        PointsService::with_clock(client, Box::new(move || *clock_date.lock().unwrap()));

    service.all_points_lists().await?;
    service.all_points_lists().await?;
    upstream.assert_hits(1);

    *today.lock().unwrap() = day(2024, 1, 21);
    service.all_points_lists().await?;
    upstream.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_roster_is_filtered_and_cached_per_id() -> Result<()> {
    let server = MockServer::start();
    let roster_17 = server.mock(|when, then| {
        when.method(GET)
            .path("/ViewPointsList.asp")
            .query_param("id", "17")
            .query_param("format", "json");
        then.status(200).json_body(json!({
            "skiers": [
                { "name": "Ontario Racer", "country": "CAN", "division": "ON", "points": 88.1 },
                { "name": "Visitor", "country": "USA", "division": "ON", "points": 91.0 },
                { "name": "Quebec Racer", "country": "CAN", "division": "QC", "points": 79.4 },
            ]
        }));
    });
    let roster_18 = server.mock(|when, then| {
        when.method(GET)
            .path("/ViewPointsList.asp")
            .query_param("id", "18");
        then.status(200).json_body(json!({ "skiers": [] }));
    });

    let service = pinned_service(&server, day(2024, 1, 20))?;

    let roster = service.points_list_data("17").await?;
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].country, "CAN");
    assert_eq!(roster[0].division, "ON");
    assert_eq!(roster[0].extra["name"], "Ontario Racer");
    assert_eq!(roster[0].extra["points"], 88.1);

    // distinct ids are cached independently
    assert!(service.points_list_data("18").await?.is_empty());
    service.points_list_data("17").await?;
    roster_17.assert_hits(1);
    roster_18.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_unparsable_success_body_fails_decode_without_caching() -> Result<()> {
    let server = MockServer::start();
    let mut garbled = server.mock(|when, then| {
        when.method(GET).path("/ViewPoints.asp");
        then.status(200).body("<html>not json</html>");
    });

    let service = pinned_service(&server, day(2024, 1, 20))?;

    let err = service.all_points_lists().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    garbled.delete();

    let recovered = server.mock(|when, then| {
        when.method(GET).path("/ViewPoints.asp");
        then.status(200).json_body(points_lists_body());
    });

    service.all_points_lists().await?;
    recovered.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_remote_error_carries_status_and_body() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ViewPointsList.asp");
        then.status(404).json_body(json!({ "error": "no such list" }));
    });

    let service = pinned_service(&server, day(2024, 1, 20))?;

    match service.points_list_data("99").await.unwrap_err() {
        ApiError::Remote {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
            assert_eq!(body["error"], "no such list");
        }
        other => panic!("expected Remote error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_connection_failure_surfaces_as_transport() -> Result<()> {
    // port 1 is privileged and unbound; connecting is refused outright
    let client = ApiClient::with_base_url("http://127.0.0.1:1")?;
    let service = PointsService::with_clock(client, Box::new(|| day(2024, 1, 20)));

    let err = service.all_points_lists().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    Ok(())
}

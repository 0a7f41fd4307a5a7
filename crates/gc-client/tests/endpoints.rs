/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

mod common;

use chrono::NaiveDate;
use common::*;
use gc_client::{DownloadFormat, Error, GarminConnectClient, Paginator, SocialProfile};
use std::collections::HashSet;
use std::sync::Arc;

fn day(d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn by_date_key(start: u64) -> String {
  format!(
    "{}?startDate=2024-03-01&endDate=2024-03-31&start={}&limit=20&activityType=running",
    ACTIVITIES_PATH, start
  )
}

async fn seeded_client(display_name: &str) -> (GarminConnectClient, Arc<StubTransport>) {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  let client = client(&auth, &transport);
  client.context().ensure_valid_session().await.unwrap();
  let profile: SocialProfile = serde_json::from_value(profile_json(display_name)).unwrap();
  client.context().seed_profile(profile).await;
  (client, transport)
}

#[tokio::test]
async fn test_list_passes_offsets_verbatim() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(ACTIVITIES_PATH, json_response(activity_page(100, 2)));
  let client = client(&auth, &transport);

  let activities = client.activities().list(5, 10).await.unwrap();

  assert_eq!(activities.len(), 2);
  assert_eq!(activities[0].activity_id, 100);
  let requests = transport.requests();
  assert_eq!(requests.len(), 1);
  assert_eq!(requests[0].path_and_query(), format!("{}?start=5&limit=10", ACTIVITIES_PATH));
}

#[tokio::test]
async fn test_by_date_walks_pages_until_empty() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(&by_date_key(0), json_response(activity_page(0, 20)))
    .route(&by_date_key(20), json_response(activity_page(20, 20)))
    .route(&by_date_key(40), json_response(activity_page(40, 7)))
    .route(&by_date_key(60), json_response(activity_page(60, 0)));
  let client = client(&auth, &transport);

  let activities = client.activities().by_date(day(1), day(31), Some("running")).await.unwrap();

  assert_eq!(activities.len(), 47);
  let ids: Vec<u64> = activities.iter().map(|a| a.activity_id).collect();
  assert_eq!(ids, (0..47).collect::<Vec<u64>>());

  let starts: Vec<String> = transport
    .requests()
    .iter()
    .map(|r| r.query().get("start").unwrap_or_default().to_string())
    .collect();
  assert_eq!(starts, vec!["0", "20", "40", "60"]);
}

#[tokio::test]
async fn test_by_date_empty_first_page() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(ACTIVITIES_PATH, json_response(activity_page(0, 0)));
  let client = client(&auth, &transport);

  let activities = client.activities().by_date(day(1), day(2), None).await.unwrap();

  assert!(activities.is_empty());
  assert_eq!(transport.request_count(), 1);
  assert_eq!(transport.requests()[0].query().get("activityType"), None);
}

#[tokio::test]
async fn test_by_date_failure_discards_collected_pages() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(&by_date_key(0), json_response(activity_page(0, 20)))
    .route(&by_date_key(20), status_response(500));
  let client = client(&auth, &transport);

  let err = client.activities().by_date(day(1), day(31), Some("running")).await.unwrap_err();

  assert_eq!(err.status(), Some(500));
  assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_by_date_page_cap() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(ACTIVITIES_PATH, json_response(activity_page(0, 20)));
  let client = GarminConnectClient::with_context(
    context(&auth, &transport),
    Paginator::new(20).with_max_pages(Some(2)),
  );

  let err = client.activities().by_date(day(1), day(31), None).await.unwrap_err();

  assert!(matches!(err, Error::PaginationLimit { pages: 2 }), "unexpected error: {:?}", err);
  assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_every_download_format_hits_its_own_path() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  let client = client(&auth, &transport);

  for (i, format) in DownloadFormat::ALL.iter().enumerate() {
    let path = gc_client::download_path(42, *format).unwrap();
    let body = vec![0x0e, 0x10, 0xff, 0x00, i as u8];
    transport.route(&path, gc_client::RawResponse::new(reqwest::StatusCode::OK, body));
  }

  for (i, format) in DownloadFormat::ALL.iter().enumerate() {
    let bytes = client.downloads().download(42, *format).await.unwrap();
    assert_eq!(bytes, vec![0x0e, 0x10, 0xff, 0x00, i as u8]);
  }

  let paths: HashSet<String> = transport.requests().iter().map(|r| r.path().to_string()).collect();
  assert_eq!(paths.len(), 5);
  assert!(paths.contains("/proxy/download-service/export/tcx/activity/42"));
}

#[tokio::test]
async fn test_unknown_download_format_fails_before_any_request() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  let client = client(&auth, &transport);

  let err = client.activities().download_named(42, "xlsx").await.unwrap_err();

  assert!(matches!(err, Error::InvalidArgument(_)), "unexpected error: {:?}", err);
  assert_eq!(transport.request_count(), 0);
  assert_eq!(auth.logins(), 0);
}

#[tokio::test]
async fn test_named_download_is_case_insensitive() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport.route(
    "/proxy/download-service/export/gpx/activity/7",
    gc_client::RawResponse::new(reqwest::StatusCode::OK, "<gpx/>"),
  );
  let client = client(&auth, &transport);

  let bytes = client.activities().download_named(7, "Gpx").await.unwrap();
  assert_eq!(bytes, b"<gpx/>".to_vec());
}

#[tokio::test]
async fn test_user_summary_is_idempotent() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(PROFILE_PATH, json_response(profile_json("alice")))
    .route(
      "/proxy/usersummary-service/usersummary/daily/alice",
      json_response(serde_json::json!({ "calendarDate": "2024-03-05", "totalSteps": 10432 })),
    );
  let client = client(&auth, &transport);

  let first = client.wellness().user_summary(day(5)).await.unwrap();
  let second = client.wellness().user_summary(day(5)).await.unwrap();

  assert_eq!(first, second);
  assert_eq!(first.total_steps, Some(10432));
  assert_eq!(transport.count_for(PROFILE_PATH), 1);

  let summaries: Vec<String> = transport
    .requests()
    .iter()
    .filter(|r| r.path() != PROFILE_PATH)
    .map(|r| r.path_and_query())
    .collect();
  assert_eq!(summaries.len(), 2);
  assert_eq!(summaries[0], summaries[1]);
  assert_eq!(summaries[0], "/proxy/usersummary-service/usersummary/daily/alice?calendarDate=2024-03-05");
}

#[tokio::test]
async fn test_identity_endpoints_use_seeded_profile() {
  let (client, transport) = seeded_client("seeded").await;
  transport.route(
    "/proxy/wellness-service/wellness/dailyHeartRate/seeded",
    json_response(serde_json::json!({ "restingHeartRate": 48 })),
  );
  transport.route(
    "/proxy/wellness-service/wellness/dailySummaryChart/seeded",
    json_response(serde_json::json!([])),
  );

  client.wellness().heart_rates(day(5)).await.unwrap();
  client.wellness().steps_data(day(5)).await.unwrap();

  assert_eq!(transport.count_for(PROFILE_PATH), 0);
  let requests = transport.requests();
  assert_eq!(
    requests[0].path_and_query(),
    "/proxy/wellness-service/wellness/dailyHeartRate/seeded?date=2024-03-05"
  );
}

#[tokio::test]
async fn test_display_name_follows_renewal() {
  let auth = Arc::new(StubAuthenticator::new());
  let transport = Arc::new(StubTransport::new());
  transport
    .route(PROFILE_PATH, json_response(profile_json("alice")))
    .route(PROFILE_PATH, json_response(profile_json("bob")))
    .route("/proxy/wellness-service/wellness/dailySleepData/alice", json_response(serde_json::json!({})))
    .route("/proxy/wellness-service/wellness/dailySleepData/bob", json_response(serde_json::json!({})));
  let client = client(&auth, &transport);

  client.wellness().sleep_data(day(5)).await.unwrap();
  client.context().expire().await;
  client.wellness().sleep_data(day(5)).await.unwrap();

  let sleep_paths: Vec<String> = transport
    .requests()
    .iter()
    .filter(|r| r.path() != PROFILE_PATH)
    .map(|r| r.path().to_string())
    .collect();
  assert_eq!(
    sleep_paths,
    vec![
      "/proxy/wellness-service/wellness/dailySleepData/alice",
      "/proxy/wellness-service/wellness/dailySleepData/bob",
    ]
  );
}

#[tokio::test]
async fn test_body_composition_and_hydration_paths() {
  let (client, transport) = seeded_client("alice").await;
  transport
    .route(
      "/proxy/weight-service/weight/daterangesnapshot",
      json_response(serde_json::json!({ "dateWeightList": [] })),
    )
    .route(
      "/proxy/usersummary-service/usersummary/hydration/daily/2024-03-05",
      json_response(serde_json::json!({ "calendarDate": "2024-03-05" })),
    );

  let composition = client.wellness().body_composition(day(1), day(7)).await.unwrap();
  client.wellness().hydration(day(5)).await.unwrap();

  assert!(composition.date_weight_list.is_empty());
  let requests = transport.requests();
  assert_eq!(
    requests[0].path_and_query(),
    "/proxy/weight-service/weight/daterangesnapshot?startDate=2024-03-01&endDate=2024-03-07"
  );
  assert_eq!(requests[1].path(), "/proxy/usersummary-service/usersummary/hydration/daily/2024-03-05");
  assert!(requests[1].query().is_empty());
}

#[tokio::test]
async fn test_details_default_polyline_size() {
  let (client, transport) = seeded_client("alice").await;
  transport.route(
    "/proxy/activity-service/activity/9/details",
    json_response(serde_json::json!({
      "activityId": 9,
      "metricDescriptors": [],
      "activityDetailMetrics": []
    })),
  );

  let details = client.activities().details(9, 100, None).await.unwrap();

  assert_eq!(details.activity_id, 9);
  assert_eq!(
    transport.requests()[0].path_and_query(),
    "/proxy/activity-service/activity/9/details?maxChartSize=100&maxPolylineSize=4000"
  );
}

#[tokio::test]
async fn test_own_personal_records_use_display_name() {
  let (client, transport) = seeded_client("alice").await;
  transport.route(
    "/proxy/personalrecord-service/personalrecord/prs/alice",
    json_response(serde_json::json!([{ "id": 1, "typeId": 3, "value": 1500.0 }])),
  );

  let records = client.user().own_personal_records().await.unwrap();

  assert_eq!(records.len(), 1);
  assert_eq!(records[0].type_id, 3);
}

#[tokio::test]
async fn test_display_names_are_escaped_in_paths() {
  let (client, transport) = seeded_client("Pat/Runner?x#y").await;
  transport
    .route("/proxy/personalrecord-service/personalrecord/prs/a%2Fb%3Fc%23d", json_response(serde_json::json!([])))
    .route(
      "/proxy/wellness-service/wellness/dailyHeartRate/Pat%2FRunner%3Fx%23y",
      json_response(serde_json::json!({ "calendarDate": "2024-03-05" })),
    );

  let records = client.user().personal_records("a/b?c#d").await.unwrap();
  assert!(records.is_empty());
  client.wellness().heart_rates(day(5)).await.unwrap();

  let requests = transport.requests();
  assert_eq!(requests[0].path(), "/proxy/personalrecord-service/personalrecord/prs/a%2Fb%3Fc%23d");
  assert_eq!(requests[0].path_and_query(), requests[0].path());
  assert_eq!(requests[1].path(), "/proxy/wellness-service/wellness/dailyHeartRate/Pat%2FRunner%3Fx%23y");
  assert_eq!(requests[1].path_and_query(), format!("{}?date=2024-03-05", requests[1].path()));
}

#[tokio::test]
async fn test_device_endpoints() {
  let (client, transport) = seeded_client("alice").await;
  transport
    .route(
      "/proxy/device-service/deviceregistration/devices",
      json_response(serde_json::json!([{ "deviceId": 3001, "productDisplayName": "Forerunner 965" }])),
    )
    .route(
      "/proxy/device-service/deviceservice/device-info/settings/3001",
      json_response(serde_json::json!({ "deviceId": 3001 })),
    );

  let devices = client.devices().list().await.unwrap();
  let settings = client.devices().settings(devices[0].device_id).await.unwrap();

  assert_eq!(settings.device_id, 3001);
  assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn test_error_statuses_and_bad_bodies() {
  let (client, transport) = seeded_client("alice").await;
  transport.route(ACTIVITIES_PATH, json_response(serde_json::json!({ "unexpected": true })));

  let err = client.activities().list(0, 20).await.unwrap_err();
  assert!(matches!(err, Error::Deserialization(_)), "unexpected error: {:?}", err);

  let err = client.user().settings().await.unwrap_err();
  assert!(matches!(err, Error::Http { status: 404, .. }), "unexpected error: {:?}", err);
}

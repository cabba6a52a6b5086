mod common;
use common::{FakeMembers, date};
use serde_json::json;
use weeksheet::api::clickup::{parse_members, parse_time_entries};
use weeksheet::api::{EntryWindow, Member, MemberDirectory, member_code};
use weeksheet::core::reporting_offset;
use weeksheet::errors::AppError;
use weeksheet::models::TaskDetail;

// ---------------------------
// Query window
// ---------------------------

#[test]
fn test_window_in_reporting_timezone() {
    let tz = reporting_offset(330).expect("offset");
    let w = EntryWindow::for_dates(date(2025, 1, 6), date(2025, 1, 12), tz);

    // 2025-01-06 00:00 at UTC+5:30 and 2025-01-12 23:59:59 at UTC+5:30
    assert_eq!(w.start_ms, 1_736_101_800_000);
    assert_eq!(w.end_ms, 1_736_706_599_000);
}

#[test]
fn test_window_in_utc() {
    let tz = reporting_offset(0).expect("offset");
    let w = EntryWindow::for_dates(date(2025, 1, 6), date(2025, 1, 6), tz);

    assert_eq!(w.start_ms, 1_736_121_600_000);
    assert_eq!(w.end_ms, 1_736_121_600_000 + 86_399_000);
}

#[test]
fn test_out_of_range_offset_is_rejected() {
    assert!(reporting_offset(24 * 60).is_err());
}

// ---------------------------
// Members
// ---------------------------

#[test]
fn test_member_code_is_last_four_chars_uppercased() {
    assert_eq!(member_code("john.doe.ab12").as_deref(), Some("AB12"));
    assert_eq!(member_code("  xy9z ").as_deref(), Some("XY9Z"));
    assert_eq!(member_code("abc").as_deref(), Some("ABC"));
    assert_eq!(member_code("  "), None);
}

#[test]
fn test_parse_members_across_teams() {
    let body = json!({
        "teams": [
            { "members": [
                { "user": { "id": 123, "username": "john.ab12" } },
                { "user": { "id": "9", "username": "abc" } }
            ]},
            { "members": [
                { "user": { "id": "77", "username": "mary.cd34" } },
                { "user": { "username": "no.id.ef56" } }
            ]}
        ]
    });
    let members = parse_members(&body);

    assert_eq!(
        members,
        vec![
            Member {
                code: "AB12".to_string(),
                id: "123".to_string(),
                username: "john.ab12".to_string(),
            },
            Member {
                code: "ABC".to_string(),
                id: "9".to_string(),
                username: "abc".to_string(),
            },
            Member {
                code: "CD34".to_string(),
                id: "77".to_string(),
                username: "mary.cd34".to_string(),
            },
        ]
    );
    assert!(parse_members(&json!({})).is_empty());
}

#[test]
fn test_resolve_member_ignores_case() {
    let members = FakeMembers::single("AB12", "42");

    assert_eq!(members.resolve_member(" ab12 ").expect("resolve").as_deref(), Some("42"));
    assert_eq!(members.resolve_member("ZZ99").expect("resolve"), None);
}

// ---------------------------
// Time entries
// ---------------------------

#[test]
fn test_parse_time_entries() {
    let body = json!({
        "data": [
            {
                "task": { "id": "abc1", "name": "Write docs", "status": { "status": "in progress" } },
                "duration": "3600000",
                "start": "1736143200000"
            },
            {
                "duration": 1500,
                "start": 1736143200999_i64
            }
        ]
    });
    let entries = parse_time_entries(&body).expect("parse");

    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].task_id.as_deref(), Some("abc1"));
    assert_eq!(entries[0].task_name.as_deref(), Some("Write docs"));
    assert_eq!(entries[0].task_status.as_deref(), Some("in progress"));
    assert_eq!(entries[0].duration_ms, "3600000");
    assert_eq!(entries[0].start_epoch_seconds, 1_736_143_200);

    assert_eq!(entries[1].task_id, None);
    assert_eq!(entries[1].task_status, None);
    assert_eq!(entries[1].duration_ms, "1500");
    assert_eq!(entries[1].start_epoch_seconds, 1_736_143_200);
}

#[test]
fn test_missing_data_means_no_entries() {
    assert!(parse_time_entries(&json!({})).expect("parse").is_empty());
    assert!(parse_time_entries(&json!({ "data": [] })).expect("parse").is_empty());
}

#[test]
fn test_bad_start_timestamp_is_reported() {
    let body = json!({
        "data": [
            { "duration": "1", "start": "1736143200000" },
            { "duration": "1", "start": "yesterday" }
        ]
    });
    match parse_time_entries(&body) {
        Err(AppError::InvalidTimestamp { position, .. }) => assert_eq!(position, 2),
        other => panic!("expected InvalidTimestamp, got {other:?}"),
    }
}

// ---------------------------
// Task details
// ---------------------------

#[test]
fn test_task_detail_payload() {
    let detail: TaskDetail = serde_json::from_value(json!({
        "id": "abc1",
        "name": "Write docs",
        "time_spent": "5400000",
        "custom_fields": [{ "name": "Product", "type": "drop_down", "value": 0 }]
    }))
    .expect("deserialize");

    assert_eq!(detail.time_spent_ms, Some(5_400_000));
    assert!(detail.custom_fields.as_ref().is_some_and(|v| v.is_array()));
}

#[test]
fn test_task_detail_without_optional_keys() {
    let detail: TaskDetail = serde_json::from_value(json!({ "id": "abc1" })).expect("deserialize");
    assert_eq!(detail, TaskDetail::default());

    let detail: TaskDetail =
        serde_json::from_value(json!({ "time_spent": null })).expect("deserialize");
    assert_eq!(detail.time_spent_ms, None);
}

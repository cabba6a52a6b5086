#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use weeksheet::api::{EntryWindow, Member, MemberDirectory, TaskDetailProvider, TimeEntrySource};
use weeksheet::config::{ENV_API_TOKEN, ENV_TEAM_ID};
use weeksheet::core::{ReportSettings, reporting_offset};
use weeksheet::errors::{AppError, AppResult};
use weeksheet::models::{RawTimeEntry, TaskDetail};

pub fn wks() -> Command {
    let mut cmd = cargo_bin_cmd!("weeksheet");
    cmd.env_remove(ENV_API_TOKEN)
        .env_remove(ENV_TEAM_ID)
        .env_remove("RUST_LOG");
    cmd
}

/// Temporary file path, removed if left over from a previous run
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("weeksheet_{name}.{ext}"));
    fs::remove_file(&path).ok();
    path
}

/// Fresh, empty temporary directory
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("weeksheet_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Epoch seconds of a UTC wall-clock time
pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid datetime")
        .timestamp()
}

pub fn entry(task_id: &str, duration_ms: i64, start: i64) -> RawTimeEntry {
    RawTimeEntry::for_task(
        task_id,
        &format!("Task {task_id}"),
        "in progress",
        duration_ms,
        start,
    )
}

pub fn settings() -> ReportSettings {
    ReportSettings {
        reporting_offset: reporting_offset(330).expect("offset"),
        max_concurrency: 4,
        link_base: "https://app.clickup.com/t".to_string(),
    }
}

/// Drop-down custom field JSON as returned by ClickUp
pub fn dropdown(name: &str, index: i64, options: &[&str]) -> Value {
    let options: Vec<Value> = options.iter().map(|o| json!({ "name": o })).collect();
    json!({
        "name": name,
        "type": "drop_down",
        "value": index,
        "type_config": { "options": options }
    })
}

pub fn detail(time_spent_ms: i64, custom_fields: Value) -> TaskDetail {
    TaskDetail {
        time_spent_ms: Some(time_spent_ms),
        custom_fields: Some(custom_fields),
    }
}

// ---------------------------
// Fake collaborators
// ---------------------------

pub struct FakeMembers(pub Vec<Member>);

impl FakeMembers {
    pub fn single(code: &str, id: &str) -> Self {
        FakeMembers(vec![Member {
            code: code.to_string(),
            id: id.to_string(),
            username: format!("user {code}"),
        }])
    }
}

impl MemberDirectory for FakeMembers {
    fn list_members(&self) -> AppResult<Vec<Member>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub struct FakeEntries {
    pub entries: Vec<RawTimeEntry>,
    pub last_query: RefCell<Option<(String, EntryWindow)>>,
}

impl FakeEntries {
    pub fn new(entries: Vec<RawTimeEntry>) -> Self {
        Self {
            entries,
            last_query: RefCell::new(None),
        }
    }
}

impl TimeEntrySource for FakeEntries {
    fn fetch_entries(&self, assignee: &str, window: &EntryWindow) -> AppResult<Vec<RawTimeEntry>> {
        *self.last_query.borrow_mut() = Some((assignee.to_string(), *window));
        Ok(self.entries.clone())
    }
}

#[derive(Default)]
pub struct FakeTasks {
    pub details: HashMap<String, TaskDetail>,
    pub failing: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeTasks {
    pub fn with(mut self, task_id: &str, detail: TaskDetail) -> Self {
        self.details.insert(task_id.to_string(), detail);
        self
    }

    pub fn failing(mut self, task_id: &str) -> Self {
        self.failing.insert(task_id.to_string());
        self
    }

    pub fn called(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl TaskDetailProvider for FakeTasks {
    fn task_detail(&self, task_id: &str) -> AppResult<TaskDetail> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(task_id.to_string());

        if self.failing.contains(task_id) {
            return Err(AppError::Api {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(self.details.get(task_id).cloned().unwrap_or_default())
    }
}

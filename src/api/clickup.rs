// src/api/clickup.rs

use crate::api::{EntryWindow, Member, MemberDirectory, TaskDetailProvider, TimeEntrySource, member_code};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::task::value_as_i64;
use crate::models::{RawTimeEntry, TaskDetail};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

/// Blocking ClickUp API v2 client.
///
/// Implements the three collaborator traits of the report engine. The client
/// is `Sync`, so the same instance serves all enrichment workers.
pub struct ClickUpClient {
    http: Client,
    base_url: String,
    team_id: String,
    token: String,
}

impl ClickUpClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        if cfg.api_token.trim().is_empty() {
            return Err(AppError::Config(
                "api_token is not set (config file or WEEKSHEET_API_TOKEN)".to_string(),
            ));
        }
        if cfg.team_id.trim().is_empty() {
            return Err(AppError::Config(
                "team_id is not set (config file or WEEKSHEET_TEAM_ID)".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: cfg.api_base_url.trim_end_matches('/').to_string(),
            team_id: cfg.team_id.trim().to_string(),
            token: cfg.api_token.trim().to_string(),
        })
    }

    fn get_json(&self, path: &str, query: &[(&str, String)]) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            error!("GET {} failed with {}: {}", url, status, body);
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Value>()?)
    }
}

impl MemberDirectory for ClickUpClient {
    fn list_members(&self) -> AppResult<Vec<Member>> {
        let body = self.get_json("/team", &[])?;
        let members = parse_members(&body);
        info!("Loaded {} workspace members", members.len());
        Ok(members)
    }
}

impl TimeEntrySource for ClickUpClient {
    fn fetch_entries(&self, assignee: &str, window: &EntryWindow) -> AppResult<Vec<RawTimeEntry>> {
        let path = format!("/team/{}/time_entries", self.team_id);
        let query = [
            ("start_date", window.start_ms.to_string()),
            ("end_date", window.end_ms.to_string()),
            ("assignee", assignee.to_string()),
        ];
        let body = self.get_json(&path, &query)?;
        let entries = parse_time_entries(&body)?;
        info!("Fetched {} time entries for assignee {}", entries.len(), assignee);
        Ok(entries)
    }
}

impl TaskDetailProvider for ClickUpClient {
    fn task_detail(&self, task_id: &str) -> AppResult<TaskDetail> {
        let body = self.get_json(&format!("/task/{task_id}"), &[])?;
        Ok(serde_json::from_value(body)?)
    }
}

// ---------------------------
// Payload parsing
// ---------------------------

/// Members of every team in a `/team` response. Members without a username
/// or id are ignored.
pub fn parse_members(body: &Value) -> Vec<Member> {
    let teams = body.get("teams").and_then(Value::as_array);

    teams
        .into_iter()
        .flatten()
        .filter_map(|team| team.get("members").and_then(Value::as_array))
        .flatten()
        .filter_map(|member| {
            let user = member.get("user")?;
            let username = user.get("username").and_then(Value::as_str)?;
            let id = match user.get("id")? {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some(Member {
                code: member_code(username)?,
                id,
                username: username.to_string(),
            })
        })
        .collect()
}

/// Entries of a `/time_entries` response. A missing or empty `data` list
/// yields an empty vector.
pub fn parse_time_entries(body: &Value) -> AppResult<Vec<RawTimeEntry>> {
    let Some(items) = body.get("data").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_time_entry(i + 1, item))
        .collect()
}

fn parse_time_entry(position: usize, item: &Value) -> AppResult<RawTimeEntry> {
    let task = item.get("task");
    let text = |v: Option<&Value>| v.and_then(Value::as_str).map(str::to_string);

    let duration_ms = match item.get("duration") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let start_ms = item
        .get("start")
        .and_then(value_as_i64)
        .ok_or_else(|| AppError::InvalidTimestamp {
            position,
            value: item.get("start").map(Value::to_string).unwrap_or_default(),
        })?;

    Ok(RawTimeEntry {
        task_id: text(task.and_then(|t| t.get("id"))),
        task_name: text(task.and_then(|t| t.get("name"))),
        task_status: text(task.and_then(|t| t.get("status")).and_then(|s| s.get("status"))),
        duration_ms,
        start_epoch_seconds: start_ms.div_euclid(1000),
    })
}

//! Seams to the remote time-tracking service.
//!
//! The report engine only talks to these traits; [`clickup::ClickUpClient`]
//! implements all of them over HTTP.

pub mod clickup;
pub mod window;

use crate::errors::AppResult;
use crate::models::{RawTimeEntry, TaskDetail};

pub use clickup::ClickUpClient;
pub use window::EntryWindow;

/// A workspace member reachable through a short employee code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub code: String,
    pub id: String,
    pub username: String,
}

/// Resolves a human-entered employee code to the service's assignee id.
pub trait MemberDirectory {
    fn list_members(&self) -> AppResult<Vec<Member>>;

    /// `Ok(None)` when no member carries the code.
    fn resolve_member(&self, code: &str) -> AppResult<Option<String>> {
        let code = code.trim().to_uppercase();
        Ok(self
            .list_members()?
            .into_iter()
            .find(|m| m.code == code)
            .map(|m| m.id))
    }
}

/// Source of the raw time entries of one assignee.
pub trait TimeEntrySource {
    fn fetch_entries(&self, assignee: &str, window: &EntryWindow) -> AppResult<Vec<RawTimeEntry>>;
}

/// Per-task details (lifetime tracked time, custom fields).
///
/// Called concurrently from the enrichment workers.
pub trait TaskDetailProvider: Send + Sync {
    fn task_detail(&self, task_id: &str) -> AppResult<TaskDetail>;
}

/// Employee code of a username: its last four characters, upper-cased.
/// Shorter usernames are used whole; an empty one has no code.
pub fn member_code(username: &str) -> Option<String> {
    let chars: Vec<char> = username.trim().chars().collect();
    if chars.is_empty() {
        return None;
    }
    let tail = &chars[chars.len().saturating_sub(4)..];
    Some(tail.iter().collect::<String>().to_uppercase())
}

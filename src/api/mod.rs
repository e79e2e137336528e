//! Clients for external services.
//!
//! Only TickTick is integrated. Its responses are wrapped in a small
//! envelope so callers can tell "no token configured" apart from a failed
//! request without handling errors themselves.

use serde::{Deserialize, Serialize};

pub mod ticktick;

pub use ticktick::{TickTick, TickTickConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProxyStatus {
    Ready,
    MissingToken,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectsResponse {
    pub status: ProxyStatus,
    pub projects: Vec<ticktick::TickTickProject>,
}

impl ProjectsResponse {
    pub fn new(status: ProxyStatus, projects: Vec<ticktick::TickTickProject>) -> Self {
        Self { status, projects }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasksResponse {
    pub status: ProxyStatus,
    pub tasks: Vec<ticktick::TickTickTask>,
}

impl TasksResponse {
    pub fn new(status: ProxyStatus, tasks: Vec<ticktick::TickTickTask>) -> Self {
        Self { status, tasks }
    }
}

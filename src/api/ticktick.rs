//! TickTick open API client.
//!
//! Wraps `GET /project` and `GET /project/{id}/data` behind the same envelope
//! the dashboard has always consumed: a [`ProxyStatus`] plus the payload. The
//! client never hands an error to the caller. Transport, status and decode
//! failures are logged and reported as [`ProxyStatus::Error`], and a missing
//! token short-circuits to [`ProxyStatus::MissingToken`] without a request.
//!
//! Project data is cached per project for `cache_ttl_secs`, in memory and,
//! when a [`TickTickCache`] is attached, in SQLite so that later runs reuse it.
//! Due-date buckets are computed on every call, so a cached payload still
//! classifies against the current day.

use super::{ProjectsResponse, ProxyStatus, TasksResponse};
use crate::db::ticktick_cache::{CacheEntry, TickTickCache};
use crate::libs::config::ConfigModule;
use crate::libs::dashboard::encode_uri_component;
use crate::libs::date::sortable_timestamp;
use crate::libs::messages::Message;
use crate::libs::task::Project;
use crate::libs::todo::{classify_due, DueBucket};
use crate::{msg_debug, msg_print};
use anyhow::Result;
use chrono::{DateTime, Local, TimeDelta, Utc};
use dialoguer::{theme::ColorfulTheme, Input};
use parking_lot::Mutex;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.ticktick.com/open/v1";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;
pub const TOKEN_ENV: &str = "TICKTICK_ACCESS_TOKEN";

const PROJECTS_URL: &str = "project";
/// TickTick marks open tasks with status 0 and completed ones with 2.
const STATUS_OPEN: i64 = 0;

#[derive(Debug, Error)]
pub enum TickTickError {
    #[error("TickTick request failed")]
    Http(#[source] reqwest::Error),
    #[error("TickTick responded with status {0}")]
    Status(StatusCode),
    #[error("TickTick response could not be decoded")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickTickProject {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub closed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickTickTask {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub column_id: Option<String>,
    /// Due bucket, filled in by [`bucket_tasks`].
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub ticktick_status: Option<DueBucket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectData {
    #[serde(default)]
    tasks: Vec<TickTickTask>,
}

#[derive(Debug, Clone)]
struct CachedTasks {
    fetched_at: DateTime<Utc>,
    tasks: Vec<TickTickTask>,
}

pub struct TickTick {
    client: Client,
    config: TickTickConfig,
    cache: Mutex<HashMap<String, CachedTasks>>,
    store: Option<Mutex<TickTickCache>>,
}

impl TickTick {
    pub fn new(config: &TickTickConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            cache: Mutex::new(HashMap::new()),
            store: None,
        }
    }

    /// Keeps fetched tasks in `store` as well, and reads them back from it.
    pub fn with_store(mut self, store: TickTickCache) -> Self {
        self.store = Some(Mutex::new(store));
        self
    }

    pub async fn projects(&self) -> ProjectsResponse {
        if !self.config.has_token() {
            return ProjectsResponse::new(ProxyStatus::MissingToken, Vec::new());
        }

        match self.get::<Vec<TickTickProject>>(PROJECTS_URL).await {
            Ok(projects) => ProjectsResponse::new(ProxyStatus::Ready, projects),
            Err(error) => {
                tracing::warn!(error = %error, "failed to load TickTick projects");
                ProjectsResponse::new(ProxyStatus::Error, Vec::new())
            }
        }
    }

    /// Open tasks of `project_id`, optionally restricted to one kanban
    /// column, bucketed by due date and sorted earliest first.
    ///
    /// `refresh` skips the cache and replaces the cached payload.
    pub async fn tasks(&self, project_id: &str, column_id: Option<&str>, refresh: bool) -> TasksResponse {
        if !self.config.has_token() {
            return TasksResponse::new(ProxyStatus::MissingToken, Vec::new());
        }

        let raw = match self.cached(project_id, refresh) {
            Some(tasks) => tasks,
            None => match self.get::<ProjectData>(&project_data_path(project_id)).await {
                Ok(data) => {
                    self.store(project_id, &data.tasks);
                    data.tasks
                }
                Err(error) => {
                    tracing::warn!(project_id, error = %error, "failed to load TickTick tasks");
                    return TasksResponse::new(ProxyStatus::Error, Vec::new());
                }
            },
        };

        TasksResponse::new(ProxyStatus::Ready, bucket_tasks(&raw, column_id, Local::now()))
    }

    /// Drops every cached payload and returns how many stored entries went.
    pub fn clear_cache(&self) -> Result<usize> {
        self.cache.lock().clear();
        match &self.store {
            Some(store) => store.lock().clear(),
            None => Ok(0),
        }
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        let ttl = i64::try_from(self.config.cache_ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Utc::now().signed_duration_since(fetched_at) < ttl
    }

    fn cached(&self, project_id: &str, refresh: bool) -> Option<Vec<TickTickTask>> {
        if refresh {
            return None;
        }

        if let Some(entry) = self.cache.lock().get(project_id).filter(|entry| self.is_fresh(entry.fetched_at)) {
            msg_debug!(Message::TickTickCacheHit(project_id.to_string()));
            return Some(entry.tasks.clone());
        }

        let entry = self.load_stored(project_id)?;
        msg_debug!(Message::TickTickCacheHit(project_id.to_string()));
        let tasks = entry.tasks.clone();
        self.cache.lock().insert(project_id.to_string(), entry);
        Some(tasks)
    }

    fn load_stored(&self, project_id: &str) -> Option<CachedTasks> {
        let entry = match self.store.as_ref()?.lock().get(project_id) {
            Ok(entry) => entry?,
            Err(error) => {
                tracing::warn!(project_id, %error, "TickTick cache read failed");
                return None;
            }
        };
        if !self.is_fresh(entry.fetched_at) {
            return None;
        }

        match serde_json::from_str(&entry.payload) {
            Ok(tasks) => Some(CachedTasks {
                fetched_at: entry.fetched_at,
                tasks,
            }),
            Err(error) => {
                tracing::warn!(project_id, %error, "cached TickTick payload is not valid JSON");
                None
            }
        }
    }

    fn store(&self, project_id: &str, tasks: &[TickTickTask]) {
        let fetched_at = Utc::now();
        self.cache.lock().insert(
            project_id.to_string(),
            CachedTasks {
                fetched_at,
                tasks: tasks.to_vec(),
            },
        );

        let Some(store) = &self.store else {
            return;
        };
        let written = serde_json::to_string(tasks).map_err(anyhow::Error::from).and_then(|payload| {
            store.lock().put(project_id, &CacheEntry { fetched_at, payload })
        });
        if let Err(error) = written {
            tracing::warn!(project_id, %error, "TickTick cache write failed");
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TickTickError> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(TickTickError::Http)?;

        if !res.status().is_success() {
            return Err(TickTickError::Status(res.status()));
        }

        res.json::<T>().await.map_err(TickTickError::Decode)
    }
}

/// `project/{id}/data` with the id escaped as a single path segment.
fn project_data_path(project_id: &str) -> String {
    format!("{}/{}/data", PROJECTS_URL, encode_uri_component(project_id))
}

/// Keeps open tasks (optionally of one column), tags each with its due
/// bucket and sorts them by due date. Undated tasks go last, in input order.
pub fn bucket_tasks(tasks: &[TickTickTask], column_id: Option<&str>, now: DateTime<Local>) -> Vec<TickTickTask> {
    let column_id = column_id.filter(|id| !id.is_empty());

    let mut open: Vec<TickTickTask> = tasks
        .iter()
        .filter(|task| task.status == STATUS_OPEN)
        .filter(|task| column_id.is_none() || task.column_id.as_deref() == column_id)
        .cloned()
        .map(|mut task| {
            task.ticktick_status = Some(classify_due(task.due_date.as_deref(), now));
            task
        })
        .collect();

    open.sort_by_key(|task| sortable_timestamp(task.due_date.as_deref()));
    open
}

/// Project preselected in the TickTick panel: the saved one if it still
/// exists, else the preferred one if it exists, else the first.
pub fn select_default_project<'a>(
    projects: &'a [TickTickProject],
    saved: Option<&str>,
    preferred: Option<&str>,
) -> Option<&'a TickTickProject> {
    let find = |id: Option<&str>| id.and_then(|id| projects.iter().find(|project| project.id == id));
    find(saved).or_else(|| find(preferred)).or_else(|| projects.first())
}

/// TickTick project linked to a dashboard project, if any.
pub fn preferred_project(project: Option<&Project>) -> Option<&str> {
    project.and_then(|project| project.ticktick_project_id.as_deref())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TickTickConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_cache_ttl() -> u64 {
    DEFAULT_CACHE_TTL_SECS
}

impl Default for TickTickConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: String::new(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl TickTickConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "ticktick".to_string(),
            name: "TickTick".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleTickTick);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTickTickApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            access_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTickTickToken.to_string())
                .default(config.access_token)
                .allow_empty(true)
                .interact_text()?,
            cache_ttl_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTickTickCacheTtl.to_string())
                .default(config.cache_ttl_secs)
                .interact_text()?,
        })
    }

    /// Replaces the stored token with `TICKTICK_ACCESS_TOKEN` when it is set.
    pub fn with_env_token(mut self) -> Self {
        if let Some(token) = std::env::var(TOKEN_ENV).ok().filter(|token| !token.trim().is_empty()) {
            self.access_token = token.trim().to_string();
        }
        self
    }

    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

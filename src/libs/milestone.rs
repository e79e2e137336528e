//! Project milestones.

use crate::libs::task::order_value;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(default, deserialize_with = "crate::libs::task::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::libs::task::opt_id")]
    pub project_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub order: Option<f64>,
}

pub fn filter_milestones_by_project(milestones: &[Milestone], project_id: Option<&str>) -> Vec<Milestone> {
    match project_id.filter(|id| !id.is_empty()) {
        None => milestones.to_vec(),
        Some(id) => milestones
            .iter()
            .filter(|m| m.project_id.as_deref() == Some(id))
            .cloned()
            .collect(),
    }
}

/// Milestones by `order` (unordered last), then by title.
pub fn sort_milestones(milestones: &[Milestone]) -> Vec<Milestone> {
    let mut sorted = milestones.to_vec();
    sorted.sort_by(|a, b| {
        order_value(a.order)
            .partial_cmp(&order_value(b.order))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    sorted
}

/// Case-insensitive: `done`, `completed` and `completada` all count.
pub fn is_milestone_done(milestone: &Milestone) -> bool {
    let status = milestone.status.as_deref().unwrap_or("").to_lowercase();
    matches!(status.as_str(), "done" | "completed" | "completada")
}

pub fn visible_milestones(milestones: &[Milestone], show_completed: bool) -> Vec<Milestone> {
    if show_completed {
        return milestones.to_vec();
    }
    milestones.iter().filter(|m| !is_milestone_done(m)).cloned().collect()
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Predicted,
    OnTrack,
    AtRisk,
    Delayed,
    Completed,
}

impl ProjectStatus {
    /// Active covers everything currently under execution, healthy or not.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ProjectStatus::OnTrack | ProjectStatus::AtRisk | ProjectStatus::Delayed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Predicted => "Predicted",
            ProjectStatus::OnTrack => "On Track",
            ProjectStatus::AtRisk => "At Risk",
            ProjectStatus::Delayed => "Delayed",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "predicted" => Ok(ProjectStatus::Predicted),
            "ontrack" => Ok(ProjectStatus::OnTrack),
            "atrisk" => Ok(ProjectStatus::AtRisk),
            "delayed" => Ok(ProjectStatus::Delayed),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(format!("Unknown project status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub status: ProjectStatus,
    pub planned_start: NaiveDate,
    pub planned_end: NaiveDate,
    pub budget_cr: f64,
}

impl Project {
    /// Case-insensitive match over id, name and status label.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.id.to_lowercase().contains(&q)
            || self.name.to_lowercase().contains(&q)
            || self.status.as_str().to_lowercase().contains(&q)
    }
}

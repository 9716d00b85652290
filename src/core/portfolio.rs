use chrono::{Months, NaiveDate};
use rand::Rng;
use std::str::FromStr;

use crate::config::constants::{GENERATED_PROJECT_ID_BOUND, PIPELINE_TOTAL_MONTHS};
use crate::models::project::{Project, ProjectStatus};

/// Status buckets of the portfolio overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Predicted,
    Active,
    Completed,
}

impl StatusFilter {
    fn admits(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Predicted => status == ProjectStatus::Predicted,
            StatusFilter::Active => status.is_active(),
            StatusFilter::Completed => status == ProjectStatus::Completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "predicted" => Ok(StatusFilter::Predicted),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!("Unknown status filter: {}", other)),
        }
    }
}

/// Portfolio grouped for display: predicted, active, completed.
#[derive(Debug)]
pub struct PortfolioBuckets<'a> {
    pub predicted: Vec<&'a Project>,
    pub active: Vec<&'a Project>,
    pub completed: Vec<&'a Project>,
}

#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    projects: Vec<Project>,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Free-text search plus status-bucket filter, preserving seed order.
    pub fn search(&self, query: &str, filter: StatusFilter) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches_query(query) && filter.admits(p.status))
            .collect()
    }

    pub fn buckets(&self, query: &str) -> PortfolioBuckets<'_> {
        let matching: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.matches_query(query))
            .collect();
        PortfolioBuckets {
            predicted: matching
                .iter()
                .copied()
                .filter(|p| p.status == ProjectStatus::Predicted)
                .collect(),
            active: matching
                .iter()
                .copied()
                .filter(|p| p.status.is_active())
                .collect(),
            completed: matching
                .iter()
                .copied()
                .filter(|p| p.status == ProjectStatus::Completed)
                .collect(),
        }
    }

    /// Creates a fresh project with a generated NEW-<n> id and returns that
    /// id. Retries the draw until the id is unused, so repeated creations
    /// stay unique.
    pub fn create_project(
        &mut self,
        name: &str,
        planned_start: NaiveDate,
        rng: &mut impl Rng,
    ) -> String {
        let id = loop {
            let candidate = format!("NEW-{}", rng.gen_range(0..GENERATED_PROJECT_ID_BOUND));
            if self.find(&candidate).is_none() {
                break candidate;
            }
        };
        let planned_end = planned_start
            .checked_add_months(Months::new(PIPELINE_TOTAL_MONTHS))
            .unwrap_or(planned_start);

        self.projects.push(Project {
            id: id.clone(),
            name: name.to_string(),
            status: ProjectStatus::Predicted,
            planned_start,
            planned_end,
            budget_cr: 0.0,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn project(id: &str, name: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            status,
            planned_start: date(2025, 1, 10),
            planned_end: date(2026, 10, 1),
            budget_cr: 500.0,
        }
    }

    fn portfolio() -> Portfolio {
        Portfolio::new(vec![
            project("PG-2201", "Northern Corridor 400kV Upgrade", ProjectStatus::OnTrack),
            project("PG-2202", "Coastal Interconnect Line E-W", ProjectStatus::AtRisk),
            project("PG-2203", "Smart Substation Retrofit Phase I", ProjectStatus::Delayed),
            project("AI-1001", "Eastern Loop Expansion", ProjectStatus::Predicted),
            project("PG-2107", "River Delta Reinforcement", ProjectStatus::Completed),
        ])
    }

    #[test]
    fn active_bucket_is_exactly_on_track_at_risk_delayed() {
        let p = portfolio();
        let active = p.search("", StatusFilter::Active);
        let ids: Vec<&str> = active.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["PG-2201", "PG-2202", "PG-2203"]);
    }

    #[test]
    fn search_combines_query_and_filter() {
        let p = portfolio();
        let hits = p.search("coastal", StatusFilter::Active);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "PG-2202");

        assert!(p.search("coastal", StatusFilter::Completed).is_empty());
    }

    #[test]
    fn buckets_partition_matching_projects() {
        let p = portfolio();
        let buckets = p.buckets("");
        assert_eq!(buckets.predicted.len(), 1);
        assert_eq!(buckets.active.len(), 3);
        assert_eq!(buckets.completed.len(), 1);
    }

    #[test]
    fn created_projects_get_unique_new_ids() {
        let mut p = portfolio();
        let mut rng = StdRng::seed_from_u64(7);

        let first = p.create_project("Test Line A", date(2026, 1, 1), &mut rng);
        let second = p.create_project("Test Line B", date(2026, 1, 1), &mut rng);

        assert!(first.starts_with("NEW-"));
        assert!(second.starts_with("NEW-"));
        assert_ne!(first, second);
        assert_eq!(p.find(&first).map(|pr| pr.status), Some(ProjectStatus::Predicted));
    }

    #[test]
    fn created_project_spans_the_pipeline_length() {
        let mut p = Portfolio::default();
        let mut rng = StdRng::seed_from_u64(1);
        let id = p.create_project("Test", date(2026, 1, 15), &mut rng);
        let created = p.find(&id).unwrap();
        assert_eq!(created.planned_end, date(2027, 2, 15));
    }
}

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

use crate::models::project::{Project, ProjectStatus};

#[derive(Debug, Deserialize)]
pub struct ProjectData {
    pub id: String,
    pub name: String,
    pub status: String,
    pub planned_start: String,
    pub planned_end: String,
    pub budget_cr: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProjectsList {
    pub projects: Vec<ProjectData>,
}

pub fn load_projects(path: &str) -> Result<Vec<Project>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let projects_list: ProjectsList = serde_json::from_reader(reader)?;

    let mut projects = Vec::new();
    for p in projects_list.projects {
        let status: ProjectStatus = p.status.parse()?;
        let planned_start = NaiveDate::parse_from_str(&p.planned_start, "%Y-%m-%d")?;
        let planned_end = NaiveDate::parse_from_str(&p.planned_end, "%Y-%m-%d")?;
        projects.push(Project {
            id: p.id,
            name: p.name,
            status,
            planned_start,
            planned_end,
            budget_cr: p.budget_cr,
        });
    }
    Ok(projects)
}

use chrono::NaiveDate;
use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::geo::point::GeoPoint;
use crate::models::event::ProjectEvent;
use crate::models::material::{ConstructionPhase, Material, Urgency};
use crate::models::project::{Project, ProjectStatus};
use crate::models::supplier::Supplier;
use crate::models::team::TeamMember;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn items(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

lazy_static! {
    static ref DEFAULT_PROJECTS: Vec<Project> = vec![
        Project {
            id: "PG-2201".to_string(),
            name: "Northern Corridor 400kV Upgrade".to_string(),
            status: ProjectStatus::OnTrack,
            planned_start: date(2025, 1, 10),
            planned_end: date(2026, 10, 1),
            budget_cr: 1240.0,
        },
        Project {
            id: "PG-2202".to_string(),
            name: "Coastal Interconnect Line E-W".to_string(),
            status: ProjectStatus::AtRisk,
            planned_start: date(2025, 3, 1),
            planned_end: date(2026, 12, 15),
            budget_cr: 860.0,
        },
        Project {
            id: "PG-2203".to_string(),
            name: "Smart Substation Retrofit Phase I".to_string(),
            status: ProjectStatus::Delayed,
            planned_start: date(2024, 8, 1),
            planned_end: date(2025, 12, 31),
            budget_cr: 420.0,
        },
        Project {
            id: "AI-1001".to_string(),
            name: "PIB: Eastern Loop Expansion".to_string(),
            status: ProjectStatus::Predicted,
            planned_start: date(2025, 7, 1),
            planned_end: date(2027, 4, 30),
            budget_cr: 980.0,
        },
        Project {
            id: "AI-1002".to_string(),
            name: "Media: HVDC Backbone South".to_string(),
            status: ProjectStatus::Predicted,
            planned_start: date(2026, 1, 15),
            planned_end: date(2028, 3, 1),
            budget_cr: 1650.0,
        },
        Project {
            id: "PG-2107".to_string(),
            name: "River Delta Reinforcement".to_string(),
            status: ProjectStatus::Completed,
            planned_start: date(2023, 1, 1),
            planned_end: date(2024, 6, 15),
            budget_cr: 300.0,
        },
    ];

    static ref DEFAULT_MATERIALS: Vec<Material> = vec![
        Material {
            id: "STL-ANG-90".to_string(),
            name: "Steel Angle 90x90x8".to_string(),
            phase: ConstructionPhase::Foundation,
            urgency: Urgency::Critical,
            forecast_qty: 800,
            required_by: date(2025, 11, 1),
            on_site: 120,
            predicted_exhaustion: date(2025, 10, 5),
            unit_cost: 5200.0,
        },
        Material {
            id: "CEM-OPC-53".to_string(),
            name: "OPC Cement 53 Grade (bags)".to_string(),
            phase: ConstructionPhase::Foundation,
            urgency: Urgency::NextPhase,
            forecast_qty: 5000,
            required_by: date(2025, 12, 1),
            on_site: 1200,
            predicted_exhaustion: date(2025, 11, 20),
            unit_cost: 390.0,
        },
        Material {
            id: "COND-ACSR".to_string(),
            name: "ACSR Conductor (km)".to_string(),
            phase: ConstructionPhase::Stringing,
            urgency: Urgency::LongTerm,
            forecast_qty: 120,
            required_by: date(2026, 2, 1),
            on_site: 20,
            predicted_exhaustion: date(2026, 1, 10),
            unit_cost: 950_000.0,
        },
        Material {
            id: "FND-REB-12".to_string(),
            name: "Rebar T12 (tons)".to_string(),
            phase: ConstructionPhase::Foundation,
            urgency: Urgency::Critical,
            forecast_qty: 60,
            required_by: date(2025, 10, 20),
            on_site: 10,
            predicted_exhaustion: date(2025, 10, 1),
            unit_cost: 62_000.0,
        },
        Material {
            id: "TWR-BLT-M20".to_string(),
            name: "Tower Bolts M20 (pcs)".to_string(),
            phase: ConstructionPhase::TowerErection,
            urgency: Urgency::NextPhase,
            forecast_qty: 25_000,
            required_by: date(2025, 12, 15),
            on_site: 4000,
            predicted_exhaustion: date(2025, 12, 1),
            unit_cost: 28.0,
        },
    ];

    static ref DEFAULT_SUPPLIERS: Vec<Supplier> = vec![
        Supplier::new(
            "V001".to_string(),
            "Bharat Steel Works".to_string(),
            GeoPoint::new(28.6448, 77.2167),
            items(&["STL-ANG-90", "FND-REB-12"]),
        ),
        Supplier::new(
            "V002".to_string(),
            "Eastern Cement Co".to_string(),
            GeoPoint::new(22.5726, 88.3639),
            items(&["CEM-OPC-53"]),
        ),
        Supplier::new(
            "V003".to_string(),
            "SouthGrid Conductors".to_string(),
            GeoPoint::new(12.9716, 77.5946),
            items(&["COND-ACSR"]),
        ),
        Supplier::new(
            "V004".to_string(),
            "Unified Fasteners Ltd".to_string(),
            GeoPoint::new(19.076, 72.8777),
            items(&["TWR-BLT-M20"]),
        ),
        Supplier::new(
            "V005".to_string(),
            "Omni Infra Supplies".to_string(),
            GeoPoint::new(25.5941, 85.1376),
            items(&["CEM-OPC-53", "STL-ANG-90", "FND-REB-12"]),
        ),
    ];

    static ref DEFAULT_TEAM: Vec<TeamMember> = vec![
        TeamMember {
            id: 1,
            name: "A. Sharma".to_string(),
            role: "Project Manager".to_string(),
            email: "asharma@example.com".to_string(),
        },
        TeamMember {
            id: 2,
            name: "K. Iyer".to_string(),
            role: "Procurement Lead".to_string(),
            email: "kiyer@example.com".to_string(),
        },
        TeamMember {
            id: 3,
            name: "R. Singh".to_string(),
            role: "Site Engineer".to_string(),
            email: "rsingh@example.com".to_string(),
        },
    ];

    static ref DEFAULT_EVENTS: Vec<ProjectEvent> = vec![
        ProjectEvent {
            id: 1,
            date: date(2025, 10, 1),
            description: "RFQ review meeting".to_string(),
        },
        ProjectEvent {
            id: 2,
            date: date(2025, 10, 10),
            description: "Foundation phase handover".to_string(),
        },
    ];
}

pub fn default_projects() -> Vec<Project> {
    DEFAULT_PROJECTS.clone()
}

pub fn default_materials() -> Vec<Material> {
    DEFAULT_MATERIALS.clone()
}

pub fn default_suppliers() -> Vec<Supplier> {
    DEFAULT_SUPPLIERS.clone()
}

pub fn default_team() -> Vec<TeamMember> {
    DEFAULT_TEAM.clone()
}

pub fn default_events() -> Vec<ProjectEvent> {
    DEFAULT_EVENTS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let projects = default_projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());
    }

    #[test]
    fn every_material_has_at_least_one_supplier() {
        let suppliers = default_suppliers();
        for material in default_materials() {
            assert!(
                suppliers.iter().any(|s| s.supplies(&material.id)),
                "no supplier for {}",
                material.id
            );
        }
    }

    #[test]
    fn supplier_locations_are_valid_coordinates() {
        for supplier in default_suppliers() {
            assert!(supplier.get_location().validate().is_ok());
        }
    }
}

use chrono::{Duration, NaiveDate};

use crate::analysis::alerts::{self, Alert};
use crate::config::constants::RUPEES_PER_CRORE;
use crate::config::workspace_config::WorkspaceConfig;
use crate::core::contingency::ContingencyTracker;
use crate::core::procurement::ProcurementList;
use crate::geo::location_hash::project_location;
use crate::geo::point::{GeoError, GeoPoint};
use crate::geo::ranking::{DistanceRanker, RankedSupplier};
use crate::models::event::EventLog;
use crate::models::material::{ConstructionPhase, Material, Urgency};
use crate::models::project::Project;
use crate::models::supplier::Supplier;
use crate::models::team::{RosterError, TeamRoster};
use crate::utils::logging::{self, OperationCategory, RankingType};

#[derive(Debug)]
pub enum WorkspaceError {
    UnknownMaterial(String),
    NotInProcurementList(String),
    Geo(GeoError),
    Roster(RosterError),
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkspaceError::UnknownMaterial(id) => write!(f, "Unknown material: {}", id),
            WorkspaceError::NotInProcurementList(id) => {
                write!(f, "Material {} is not on the procurement list", id)
            }
            WorkspaceError::Geo(e) => write!(f, "Geo error: {}", e),
            WorkspaceError::Roster(e) => write!(f, "Roster error: {}", e),
        }
    }
}

impl std::error::Error for WorkspaceError {}

impl From<GeoError> for WorkspaceError {
    fn from(err: GeoError) -> Self {
        WorkspaceError::Geo(err)
    }
}

impl From<RosterError> for WorkspaceError {
    fn from(err: RosterError) -> Self {
        WorkspaceError::Roster(err)
    }
}

/// Everything the per-project screens share: catalog, procurement list,
/// contingency buffer, roster and event log. Owned explicitly and passed by
/// reference to callers; there is no ambient state behind it.
#[derive(Debug)]
pub struct ProjectWorkspace {
    project: Project,
    location: GeoPoint,
    materials: Vec<Material>,
    ranker: DistanceRanker,
    procurement: ProcurementList,
    contingency: ContingencyTracker,
    roster: TeamRoster,
    events: EventLog,
    config: WorkspaceConfig,
}

impl ProjectWorkspace {
    pub fn new(
        project: Project,
        materials: Vec<Material>,
        suppliers: Vec<Supplier>,
        roster: TeamRoster,
        events: EventLog,
        config: WorkspaceConfig,
    ) -> Self {
        let location = project_location(&project.id);
        let contingency =
            ContingencyTracker::new(config.buffer_months, config.buffer_risk_threshold_months);
        Self {
            project,
            location,
            materials,
            ranker: DistanceRanker::new(suppliers),
            procurement: ProcurementList::default(),
            contingency,
            roster,
            events,
            config,
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn suppliers(&self) -> &[Supplier] {
        self.ranker.suppliers()
    }

    pub fn procurement(&self) -> &ProcurementList {
        &self.procurement
    }

    pub fn contingency(&self) -> &ContingencyTracker {
        &self.contingency
    }

    pub fn roster(&self) -> &TeamRoster {
        &self.roster
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    fn find_material(&self, material_id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == material_id)
    }

    /// Inventory view: filter the catalog by phase, urgency and free text.
    pub fn filtered_materials(
        &self,
        phase: Option<ConstructionPhase>,
        urgency: Option<Urgency>,
        query: &str,
    ) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| phase.map_or(true, |p| m.phase == p))
            .filter(|m| urgency.map_or(true, |u| m.urgency == u))
            .filter(|m| m.matches_query(query))
            .collect()
    }

    pub fn add_to_procurement(&mut self, material_id: &str, qty: u32) -> Result<(), WorkspaceError> {
        if self.find_material(material_id).is_none() {
            return Err(WorkspaceError::UnknownMaterial(material_id.to_string()));
        }
        self.procurement.add(material_id, qty);
        Ok(())
    }

    pub fn remove_from_procurement(&mut self, material_id: &str) -> bool {
        self.procurement.remove(material_id)
    }

    pub fn clear_procurement(&mut self) {
        self.procurement.clear();
    }

    pub fn toggle_procurement_paused(&mut self) {
        self.procurement.toggle_paused();
    }

    pub fn procurement_estimate(&self) -> f64 {
        self.procurement.total_estimate(&self.materials)
    }

    /// Records on-site consumption. Returns the stock remaining afterwards.
    pub fn log_usage(&mut self, material_id: &str, qty: u32) -> Result<u32, WorkspaceError> {
        match self.materials.iter_mut().find(|m| m.id == material_id) {
            Some(material) => Ok(material.log_usage(qty)),
            None => Err(WorkspaceError::UnknownMaterial(material_id.to_string())),
        }
    }

    /// Ranks suppliers for a material on the procurement list against the
    /// project site, nearest first. The material has to be on the list first,
    /// matching how the recommendation screen is reached.
    pub fn recommend_suppliers(
        &self,
        material_id: &str,
    ) -> Result<Vec<RankedSupplier>, WorkspaceError> {
        let _timing = logging::start_timing(
            "recommend_suppliers",
            OperationCategory::Ranking {
                subcategory: RankingType::SupplierQuery,
            },
        );

        if self.find_material(material_id).is_none() {
            return Err(WorkspaceError::UnknownMaterial(material_id.to_string()));
        }
        if !self.procurement.contains(material_id) {
            return Err(WorkspaceError::NotInProcurementList(material_id.to_string()));
        }
        Ok(self.ranker.rank(&self.location, material_id)?)
    }

    pub fn consume_buffer(&mut self, months: u32) -> u32 {
        self.contingency.consume(months)
    }

    pub fn add_member(&mut self, name: &str, role: &str, email: &str) -> Result<u32, WorkspaceError> {
        Ok(self.roster.add(name, role, email)?)
    }

    pub fn remove_member(&mut self, id: u32) -> bool {
        self.roster.remove(id)
    }

    pub fn add_event(&mut self, date: NaiveDate, description: &str) -> u32 {
        self.events.add(date, description)
    }

    pub fn alerts(&self, as_of: NaiveDate) -> Vec<Alert> {
        alerts::generate(&self.materials, &self.contingency, as_of, &self.config)
    }

    /// Milestones inside the lookahead window: material due dates plus logged
    /// events.
    pub fn upcoming_milestones(&self, as_of: NaiveDate) -> usize {
        let horizon = as_of + Duration::days(self.config.milestone_window_days);
        let material_due = self
            .materials
            .iter()
            .filter(|m| m.required_by >= as_of && m.required_by <= horizon)
            .count();
        let event_due = self
            .events
            .chronological()
            .iter()
            .filter(|e| e.date >= as_of && e.date <= horizon)
            .count();
        material_due + event_due
    }

    /// Committed procurement spend expressed in crores against the budget.
    pub fn spent_cr(&self) -> f64 {
        self.procurement_estimate() / RUPEES_PER_CRORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;
    use crate::models::project::ProjectStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workspace() -> ProjectWorkspace {
        let project = Project {
            id: "PG-2201".to_string(),
            name: "Northern Corridor 400kV Upgrade".to_string(),
            status: ProjectStatus::OnTrack,
            planned_start: date(2025, 1, 10),
            planned_end: date(2026, 10, 1),
            budget_cr: 1240.0,
        };
        ProjectWorkspace::new(
            project,
            catalog::default_materials(),
            catalog::default_suppliers(),
            TeamRoster::new(catalog::default_team()),
            EventLog::new(catalog::default_events()),
            WorkspaceConfig::default(),
        )
    }

    #[test]
    fn workspace_location_is_the_hashed_site() {
        let ws = workspace();
        assert_eq!(ws.location().latitude, 10.0);
        assert_eq!(ws.location().longitude, 84.0);
    }

    #[test]
    fn recommendation_requires_a_listed_material() {
        let mut ws = workspace();
        assert!(matches!(
            ws.recommend_suppliers("STL-ANG-90"),
            Err(WorkspaceError::NotInProcurementList(_))
        ));

        ws.add_to_procurement("STL-ANG-90", 10).unwrap();
        let ranked = ws.recommend_suppliers("STL-ANG-90").unwrap();
        assert!(!ranked.is_empty());
        // V001 and V005 both carry steel angle; distances must be ordered
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn unknown_material_is_rejected_up_front() {
        let mut ws = workspace();
        assert!(matches!(
            ws.add_to_procurement("NOPE-1", 1),
            Err(WorkspaceError::UnknownMaterial(_))
        ));
        assert!(matches!(
            ws.recommend_suppliers("NOPE-1"),
            Err(WorkspaceError::UnknownMaterial(_))
        ));
    }

    #[test]
    fn usage_logging_updates_stock() {
        let mut ws = workspace();
        let remaining = ws.log_usage("STL-ANG-90", 20).unwrap();
        assert_eq!(remaining, 100);
        assert!(ws.log_usage("NOPE-1", 1).is_err());
    }

    #[test]
    fn inventory_filters_compose() {
        let ws = workspace();
        let foundation_critical = ws.filtered_materials(
            Some(ConstructionPhase::Foundation),
            Some(Urgency::Critical),
            "",
        );
        let ids: Vec<&str> = foundation_critical.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["STL-ANG-90", "FND-REB-12"]);

        let by_text = ws.filtered_materials(None, None, "cement");
        assert_eq!(by_text.len(), 1);
        assert_eq!(by_text[0].id, "CEM-OPC-53");
    }

    #[test]
    fn spend_is_reported_in_crores() {
        let mut ws = workspace();
        // 1000 bags of cement at 390 each = 390,000 rupees
        ws.add_to_procurement("CEM-OPC-53", 1000).unwrap();
        assert!((ws.spent_cr() - 0.039).abs() < 1e-9);
    }

    #[test]
    fn milestone_count_spans_materials_and_events() {
        let ws = workspace();
        // As of 2025-10-02: materials required by 2025-10-20 and 2025-11-01
        // fall inside 30 days, as does the 2025-10-10 handover event.
        let count = ws.upcoming_milestones(date(2025, 10, 2));
        assert_eq!(count, 3);
    }
}

use chrono::{Datelike, NaiveDate};

use crate::analysis::alerts::Alert;
use crate::analysis::supply_scan::ProjectSupplyReport;
use crate::config::workspace_config::PhasePlan;
use crate::core::portfolio::Portfolio;
use crate::core::workspace::ProjectWorkspace;
use crate::geo::ranking::RankedSupplier;
use crate::models::material::{ConstructionPhase, Material, Urgency};
use crate::models::project::Project;

/// Everything the dashboard screen shows, assembled separately from printing
/// so it can be checked in tests.
#[derive(Debug)]
pub struct DashboardSummary {
    pub spent_cr: f64,
    pub budget_cr: f64,
    pub buffer_months: u32,
    pub upcoming_milestones: usize,
    pub procurement_items: usize,
    pub procurement_paused: bool,
    pub alerts: Vec<Alert>,
    pub phases: Vec<PhasePlan>,
    pub pipeline_months: u32,
}

pub fn build_dashboard(workspace: &ProjectWorkspace, as_of: NaiveDate) -> DashboardSummary {
    DashboardSummary {
        spent_cr: workspace.spent_cr(),
        budget_cr: workspace.project().budget_cr,
        buffer_months: workspace.contingency().remaining_months(),
        upcoming_milestones: workspace.upcoming_milestones(as_of),
        procurement_items: workspace.procurement().len(),
        procurement_paused: workspace.procurement().is_paused(),
        alerts: workspace.alerts(as_of),
        phases: workspace.config().phase_plan.clone(),
        pipeline_months: workspace.config().pipeline_months,
    }
}

fn print_project_line(project: &Project) {
    println!(
        "  {:<8} {:<42} {:<10} {} -> {}  INR {} Cr",
        project.id,
        project.name,
        project.status,
        project.planned_start,
        project.planned_end,
        project.budget_cr,
    );
}

pub fn print_portfolio(portfolio: &Portfolio, query: &str) {
    let buckets = portfolio.buckets(query);

    println!("\nProject Portfolio");
    println!("----------------------------------------");
    if !query.is_empty() {
        println!("Filter: \"{}\"", query);
    }

    println!("\nPredicted ({} projects)", buckets.predicted.len());
    for project in &buckets.predicted {
        print_project_line(project);
    }
    if buckets.predicted.is_empty() {
        println!("  No predicted projects match the filters.");
    }

    println!("\nActive / Ongoing ({} projects)", buckets.active.len());
    for project in &buckets.active {
        print_project_line(project);
    }
    if buckets.active.is_empty() {
        println!("  No active projects match the filters.");
    }

    println!("\nCompleted / Archived ({} projects)", buckets.completed.len());
    for project in &buckets.completed {
        print_project_line(project);
    }
    if buckets.completed.is_empty() {
        println!("  No completed projects match the filters.");
    }
}

pub fn print_project_list(title: &str, projects: &[&Project]) {
    println!("\n{} ({} projects)", title, projects.len());
    println!("----------------------------------------");
    for project in projects {
        print_project_line(project);
    }
    if projects.is_empty() {
        println!("  No projects match the filters.");
    }
}

// Pipeline bar over a fixed-width track, one char per half month
fn phase_bar(phase: &PhasePlan, pipeline_months: u32) -> String {
    let track_width = (pipeline_months * 2) as usize;
    let start = (phase.start_month * 2) as usize;
    let len = (phase.duration_months * 2) as usize;
    let mut bar = String::with_capacity(track_width);
    for i in 0..track_width {
        if i >= start && i < start + len {
            bar.push('#');
        } else {
            bar.push('.');
        }
    }
    bar
}

pub fn print_dashboard(workspace: &ProjectWorkspace, as_of: NaiveDate) {
    let summary = build_dashboard(workspace, as_of);
    let project = workspace.project();

    println!("\nProject Dashboard: {} ({})", project.name, project.id);
    println!("----------------------------------------");
    println!(
        "Procurement List Items: {}{}",
        summary.procurement_items,
        if summary.procurement_paused { " [Paused]" } else { "" },
    );
    println!("KPIs:");
    println!(
        "  Budget vs Actual: INR {:.1} Cr / {:.1} Cr",
        summary.spent_cr, summary.budget_cr
    );
    println!("  Contingency Remaining: {} mo", summary.buffer_months);
    println!(
        "  Upcoming Milestones: {} within {} days",
        summary.upcoming_milestones,
        workspace.config().milestone_window_days,
    );

    println!("Project Pipeline (0 -> {} months):", summary.pipeline_months);
    for phase in &summary.phases {
        println!(
            "  {:<28} [{}] months {}-{}",
            phase.name,
            phase_bar(phase, summary.pipeline_months),
            phase.start_month,
            phase.start_month + phase.duration_months,
        );
    }

    println!("Critical Alerts:");
    if summary.alerts.is_empty() {
        println!("  None.");
    }
    for alert in &summary.alerts {
        println!("  {} ({}): {}", alert.kind, alert.severity, alert.message);
    }
}

pub fn print_inventory(
    workspace: &ProjectWorkspace,
    phase: Option<ConstructionPhase>,
    urgency: Option<Urgency>,
    query: &str,
) {
    let materials = workspace.filtered_materials(phase, urgency, query);

    println!("\nInventory: {}", workspace.project().id);
    println!("----------------------------------------");
    println!(
        "{:<12} {:<30} {:>9} {:>8} {:<12} {:<16}",
        "Material", "Name", "Forecast", "On-Site", "Exhaustion", "Status"
    );
    for m in &materials {
        println!(
            "{:<12} {:<30} {:>9} {:>8} {:<12} {:<16}",
            m.id,
            m.name,
            m.forecast_qty,
            m.on_site,
            m.predicted_exhaustion.to_string(),
            m.reorder_status().as_str(),
        );
    }
    if materials.is_empty() {
        println!("No materials match the filters.");
    }

    println!(
        "\nProcurement List: {} items, estimate INR {:.2}",
        workspace.procurement().len(),
        workspace.procurement_estimate(),
    );
    for item in workspace.procurement().items() {
        println!("  {} x{}", item.material_id, item.qty);
    }
}

pub fn print_recommendations(
    workspace: &ProjectWorkspace,
    material_id: &str,
    ranked: &[RankedSupplier],
) {
    let site = workspace.location();

    println!("\nSupplier Recommendation: {}", workspace.project().id);
    println!("----------------------------------------");
    println!(
        "Material: {} | Site: ({:.4}, {:.4})",
        material_id, site.latitude, site.longitude
    );

    match ranked.first() {
        Some(best) => println!(
            "Recommended: {} ({:.1} km)",
            best.supplier.get_display_name(),
            best.distance_km
        ),
        None => {
            println!("No suppliers found for the selected material.");
            return;
        }
    }

    for entry in ranked {
        println!(
            "  {:<6} {:<24} {:>8.1} km  supplies: {}",
            entry.supplier.get_id(),
            entry.supplier.get_display_name(),
            entry.distance_km,
            entry.supplier.supplied_items_sorted().join(", "),
        );
    }
}

pub fn print_contingency(workspace: &ProjectWorkspace) {
    let tracker = workspace.contingency();
    let pct = (tracker.remaining_fraction() * 100.0).round();

    println!("\nContingency Tracker: {}", workspace.project().id);
    println!("----------------------------------------");
    println!(
        "Buffer Remaining: {} months of {} ({:.0}%)",
        tracker.remaining_months(),
        tracker.baseline_months(),
        pct,
    );
    println!("Burn Rate Alert: {}", tracker.current_risk());
}

pub fn print_events(workspace: &ProjectWorkspace) {
    println!("\nEvents & Warnings: {}", workspace.project().id);
    println!("----------------------------------------");
    if workspace.events().is_empty() {
        println!("No events logged.");
    }
    for event in workspace.events().chronological() {
        println!("  {}  {}", event.date, event.description);
    }
}

pub fn print_team(workspace: &ProjectWorkspace) {
    println!("\nProject Team: {}", workspace.project().id);
    println!("----------------------------------------");
    println!("{:<4} {:<20} {:<20} {:<28}", "Id", "Name", "Role", "Email");
    for member in workspace.roster().members() {
        println!(
            "{:<4} {:<20} {:<20} {:<28}",
            member.id, member.name, member.role, member.email
        );
    }
}

pub fn print_calendar(workspace: &ProjectWorkspace, selected: NaiveDate) {
    println!("\nCalendar: {}", workspace.project().id);
    println!("----------------------------------------");
    println!("Selected date: {}", selected);

    let month_events = workspace.events().in_month(selected.year(), selected.month());
    println!(
        "Events in {}-{:02}: {}",
        selected.year(),
        selected.month(),
        month_events.len()
    );
    for event in month_events {
        let marker = if event.date == selected { "*" } else { " " };
        println!(" {} {}  {}", marker, event.date, event.description);
    }
}

pub fn print_supply_scan(reports: &[ProjectSupplyReport], materials: &[Material]) {
    println!("\nPortfolio Supply Scan");
    println!("----------------------------------------");
    println!("{} projects x {} materials", reports.len(), materials.len());

    for report in reports {
        println!("\n{} ({})", report.project_name, report.project_id);
        for row in &report.rows {
            match (&row.supplier_name, row.distance_km) {
                (Some(name), Some(distance)) => println!(
                    "  {:<12} -> {:<24} {:>8.1} km",
                    row.material_id, name, distance
                ),
                _ => println!("  {:<12} -> no supplier available", row.material_id),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::workspace_config::WorkspaceConfig;
    use crate::data::catalog;
    use crate::models::event::EventLog;
    use crate::models::team::TeamRoster;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn workspace() -> ProjectWorkspace {
        let project = catalog::default_projects()
            .into_iter()
            .find(|p| p.id == "PG-2201")
            .unwrap();
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
    fn dashboard_reflects_procurement_and_buffer_state() {
        let mut ws = workspace();
        ws.add_to_procurement("STL-ANG-90", 100).unwrap();
        ws.consume_buffer(2);

        let summary = build_dashboard(&ws, date(2025, 9, 20));
        assert_eq!(summary.procurement_items, 1);
        assert_eq!(summary.buffer_months, 7);
        assert_eq!(summary.budget_cr, 1240.0);
        assert!((summary.spent_cr - 0.052).abs() < 1e-9);
        assert_eq!(summary.phases.len(), 3);
    }

    #[test]
    fn dashboard_alerts_track_the_as_of_date() {
        let ws = workspace();
        // well before any exhaustion or deadline
        let quiet = build_dashboard(&ws, date(2025, 1, 5));
        assert!(quiet.alerts.is_empty());

        // late September: steel and rebar exhaustion inside the lead window
        let busy = build_dashboard(&ws, date(2025, 9, 20));
        assert!(!busy.alerts.is_empty());
    }

    #[test]
    fn phase_bar_marks_the_active_span() {
        let phase = PhasePlan {
            name: "Tower Erection".to_string(),
            start_month: 4,
            duration_months: 5,
        };
        let bar = phase_bar(&phase, 13);
        assert_eq!(bar.len(), 26);
        assert!(bar.starts_with("........##########"));
        assert!(bar.ends_with("........"));
    }
}

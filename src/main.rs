use std::error::Error;

use chrono::{Local, NaiveDate};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use gridfolio::analysis::{reporting, supply_scan};
use gridfolio::cli::cli::Args;
use gridfolio::config::workspace_config::WorkspaceConfig;
use gridfolio::core::portfolio::{Portfolio, StatusFilter};
use gridfolio::core::workspace::ProjectWorkspace;
use gridfolio::data::{catalog, projects_loader, suppliers_loader};
use gridfolio::models::event::EventLog;
use gridfolio::models::material::{ConstructionPhase, Material, Urgency};
use gridfolio::models::project::Project;
use gridfolio::models::supplier::Supplier;
use gridfolio::models::team::TeamRoster;
use gridfolio::utils::csv_export;
use gridfolio::utils::logging::{self, FileIOType, OperationCategory};

type MainResult = Result<(), Box<dyn Error + Send + Sync>>;

fn main() -> MainResult {
    let args = Args::parse();

    logging::init_logging(args.enable_timing());

    println!("Gridfolio - Power Infrastructure Portfolio Console");

    let as_of = match args.as_of() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    let mut portfolio = Portfolio::new(load_projects(args.projects_json()));
    let suppliers = load_suppliers(args.suppliers_csv());
    let materials = catalog::default_materials();

    if let Some(name) = args.create_project() {
        let mut rng = match args.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let id = portfolio.create_project(name, as_of, &mut rng);
        println!("Created project {}: {}", id, name);
    }

    match args.view() {
        "portfolio" => {
            let filter: StatusFilter = args.status().parse()?;
            if filter == StatusFilter::All {
                reporting::print_portfolio(&portfolio, args.query());
            } else {
                let hits = portfolio.search(args.query(), filter);
                reporting::print_project_list(&format!("Projects: {}", args.status()), &hits);
            }
        }
        "scan" => {
            let reports = supply_scan::scan_portfolio(&portfolio, &materials, &suppliers, true);
            reporting::print_supply_scan(&reports, &materials);
        }
        view => {
            let mut workspace =
                build_workspace(&portfolio, args.project(), materials.clone(), suppliers.clone())?;
            apply_workspace_ops(&mut workspace, &args)?;
            render_workspace_view(&workspace, view, &args, as_of)?;

            if args.export_csv() && !workspace.procurement().is_empty() {
                let path = csv_export::export_procurement(
                    workspace.procurement(),
                    workspace.materials(),
                    args.output_dir(),
                )?;
                println!("\nProcurement list exported to {}", path.display());
            }
        }
    }

    logging::print_timing_report();

    Ok(())
}

// Load the portfolio from JSON, falling back to the builtin catalog
fn load_projects(path: &str) -> Vec<Project> {
    let _timing = logging::start_timing(
        "load_projects",
        OperationCategory::FileIO {
            subcategory: FileIOType::DataLoad,
        },
    );

    match projects_loader::load_projects(path) {
        Ok(projects) => projects,
        Err(e) => {
            eprintln!(
                "Failed to load projects from {}: {}. Using builtin portfolio.",
                path, e
            );
            catalog::default_projects()
        }
    }
}

fn load_suppliers(path: &str) -> Vec<Supplier> {
    let _timing = logging::start_timing(
        "load_suppliers",
        OperationCategory::FileIO {
            subcategory: FileIOType::DataLoad,
        },
    );

    match suppliers_loader::load_suppliers(path) {
        Ok(suppliers) => suppliers,
        Err(e) => {
            eprintln!(
                "Failed to load suppliers from {}: {}. Using builtin catalog.",
                path, e
            );
            catalog::default_suppliers()
        }
    }
}

fn build_workspace(
    portfolio: &Portfolio,
    project_id: Option<&str>,
    materials: Vec<Material>,
    suppliers: Vec<Supplier>,
) -> Result<ProjectWorkspace, Box<dyn Error + Send + Sync>> {
    let id = project_id.ok_or("This view needs --project <id>")?;
    let project = portfolio
        .find(id)
        .ok_or_else(|| format!("Unknown project id: {}", id))?
        .clone();

    Ok(ProjectWorkspace::new(
        project,
        materials,
        suppliers,
        TeamRoster::new(catalog::default_team()),
        EventLog::new(catalog::default_events()),
        WorkspaceConfig::default(),
    ))
}

// Parses "ID:QTY" procurement/usage specs; a bare id defaults to quantity 1
fn parse_item_spec(spec: &str) -> Result<(&str, u32), Box<dyn Error + Send + Sync>> {
    match spec.split_once(':') {
        Some((id, qty)) => {
            let qty: u32 = qty
                .parse()
                .map_err(|_| format!("Bad quantity in spec: {}", spec))?;
            Ok((id, qty))
        }
        None => Ok((spec, 1)),
    }
}

fn apply_workspace_ops(workspace: &mut ProjectWorkspace, args: &Args) -> MainResult {
    if args.clear() {
        workspace.clear_procurement();
    }
    for spec in args.add() {
        let (id, qty) = parse_item_spec(spec)?;
        workspace.add_to_procurement(id, qty)?;
    }
    for id in args.remove() {
        if !workspace.remove_from_procurement(id) {
            eprintln!("{} was not on the procurement list", id);
        }
    }
    for spec in args.usage() {
        let (id, qty) = parse_item_spec(spec)?;
        let remaining = workspace.log_usage(id, qty)?;
        println!("Usage logged: {} x{} ({} left on site)", id, qty, remaining);
    }
    if let Some(months) = args.delay() {
        let remaining = workspace.consume_buffer(months);
        println!(
            "Delay logged: {} months consumed, {} remaining",
            months, remaining
        );
    }
    if args.pause() {
        workspace.toggle_procurement_paused();
    }
    for spec in args.add_member() {
        let mut parts = spec.splitn(3, ',').map(str::trim);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(role), Some(email)) => {
                let id = workspace.add_member(name, role, email)?;
                println!("Added team member {} ({})", name, id);
            }
            _ => return Err(format!("Expected NAME,ROLE,EMAIL, got: {}", spec).into()),
        }
    }
    for id in args.remove_member() {
        if !workspace.remove_member(*id) {
            eprintln!("No team member with id {}", id);
        }
    }
    for spec in args.add_event() {
        let (date, description) = spec
            .split_once(':')
            .ok_or_else(|| format!("Expected YYYY-MM-DD:DESCRIPTION, got: {}", spec))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        workspace.add_event(date, description.trim());
    }
    Ok(())
}

fn render_workspace_view(
    workspace: &ProjectWorkspace,
    view: &str,
    args: &Args,
    as_of: NaiveDate,
) -> MainResult {
    match view {
        "dashboard" => reporting::print_dashboard(workspace, as_of),
        "inventory" => {
            let phase: Option<ConstructionPhase> = args.phase().map(str::parse).transpose()?;
            let urgency: Option<Urgency> = args.urgency().map(str::parse).transpose()?;
            reporting::print_inventory(workspace, phase, urgency, args.query());
        }
        "map" => {
            let material_id = args.material().ok_or(
                "The map view needs --material <id>, with the material on the procurement list (--add)",
            )?;
            match workspace.recommend_suppliers(material_id) {
                Ok(ranked) => reporting::print_recommendations(workspace, material_id, &ranked),
                Err(e) => println!("{}", e),
            }
        }
        "contingency" => reporting::print_contingency(workspace),
        "events" => reporting::print_events(workspace),
        "team" => reporting::print_team(workspace),
        "calendar" => reporting::print_calendar(workspace, as_of),
        other => return Err(format!("Unknown view: {}", other).into()),
    }
    Ok(())
}

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        short,
        long,
        default_value = "portfolio",
        help = "View to render: portfolio, dashboard, inventory, map, contingency, events, team, calendar, scan"
    )]
    view: String,

    #[arg(short, long, help = "Project id for per-project views")]
    project: Option<String>,

    #[arg(short, long, help = "Material id for the map view")]
    material: Option<String>,

    #[arg(short, long, default_value = "", help = "Free-text filter")]
    query: String,

    #[arg(long, default_value = "all", help = "Portfolio bucket: all, predicted, active, completed")]
    status: String,

    #[arg(long, help = "Inventory phase filter")]
    phase: Option<String>,

    #[arg(long, help = "Inventory urgency filter")]
    urgency: Option<String>,

    #[arg(long, default_value = "assets/projects.json")]
    projects_json: String,

    #[arg(long, default_value = "assets/suppliers.csv")]
    suppliers_csv: String,

    #[arg(long, value_name = "ID[:QTY]", help = "Add a material to the procurement list")]
    add: Vec<String>,

    #[arg(long, value_name = "ID", help = "Remove a material from the procurement list")]
    remove: Vec<String>,

    #[arg(long, default_value_t = false, help = "Clear the procurement list first")]
    clear: bool,

    #[arg(long, value_name = "ID:QTY", help = "Log on-site consumption")]
    usage: Vec<String>,

    #[arg(long, value_name = "NAME,ROLE,EMAIL", help = "Add a team member")]
    add_member: Vec<String>,

    #[arg(long, value_name = "ID", help = "Remove a team member by id")]
    remove_member: Vec<u32>,

    #[arg(long, value_name = "YYYY-MM-DD:DESCRIPTION", help = "Log a project event")]
    add_event: Vec<String>,

    #[arg(long, help = "Consume contingency buffer months")]
    delay: Option<u32>,

    #[arg(long, default_value_t = false, help = "Toggle the procurement pause flag")]
    pause: bool,

    #[arg(long, value_name = "NAME", help = "Create a new predicted project")]
    create_project: Option<String>,

    #[arg(long, help = "Random seed for deterministic id generation")]
    seed: Option<u64>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date for alerts and the calendar")]
    as_of: Option<String>,

    #[arg(long, default_value_t = false)]
    export_csv: bool,

    #[arg(short, long, default_value = "exports")]
    output_dir: String,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,
}

// Add getter methods for all fields
impl Args {
    pub fn view(&self) -> &str {
        &self.view
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn phase(&self) -> Option<&str> {
        self.phase.as_deref()
    }

    pub fn urgency(&self) -> Option<&str> {
        self.urgency.as_deref()
    }

    pub fn projects_json(&self) -> &str {
        &self.projects_json
    }

    pub fn suppliers_csv(&self) -> &str {
        &self.suppliers_csv
    }

    pub fn add(&self) -> &[String] {
        &self.add
    }

    pub fn remove(&self) -> &[String] {
        &self.remove
    }

    pub fn clear(&self) -> bool {
        self.clear
    }

    pub fn usage(&self) -> &[String] {
        &self.usage
    }

    pub fn add_member(&self) -> &[String] {
        &self.add_member
    }

    pub fn remove_member(&self) -> &[u32] {
        &self.remove_member
    }

    pub fn add_event(&self) -> &[String] {
        &self.add_event
    }

    pub fn delay(&self) -> Option<u32> {
        self.delay
    }

    pub fn pause(&self) -> bool {
        self.pause
    }

    pub fn create_project(&self) -> Option<&str> {
        self.create_project.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn as_of(&self) -> Option<&str> {
        self.as_of.as_deref()
    }

    pub fn export_csv(&self) -> bool {
        self.export_csv
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }
}

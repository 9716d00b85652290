// Shared constants for geography, demo placement and schedule tracking.

// Mean Earth radius used by the great-circle distance computation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Valid coordinate ranges. Anything outside is rejected, never clamped.
pub const MIN_LATITUDE_DEG: f64 = -90.0;
pub const MAX_LATITUDE_DEG: f64 = 90.0;
pub const MIN_LONGITUDE_DEG: f64 = -180.0;
pub const MAX_LONGITUDE_DEG: f64 = 180.0;

// Bounding box for hashed demo placement of project sites.
// Latitude lands in [8, 31), longitude in [68, 97).
pub const SITE_HASH_LAT_ORIGIN: f64 = 8.0;
pub const SITE_HASH_LAT_SPAN: u64 = 23;
pub const SITE_HASH_LON_ORIGIN: f64 = 68.0;
pub const SITE_HASH_LON_SPAN: u64 = 29;

// Contingency buffer defaults
pub const DEFAULT_BUFFER_MONTHS: u32 = 9;
pub const BUFFER_RISK_THRESHOLD_MONTHS: u32 = 3;

// Alert windows
pub const REORDER_LEAD_DAYS: i64 = 30;
pub const RFQ_DUE_SOON_DAYS: i64 = 7;
pub const MILESTONE_WINDOW_DAYS: i64 = 30;

// Construction pipeline length in months
pub const PIPELINE_TOTAL_MONTHS: u32 = 13;

// Rupees per crore, for budget figures quoted in Cr
pub const RUPEES_PER_CRORE: f64 = 10_000_000.0;

// Generated project ids are NEW-<n> with n below this bound
pub const GENERATED_PROJECT_ID_BOUND: u32 = 10_000;

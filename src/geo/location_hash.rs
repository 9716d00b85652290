use crate::config::constants::{
    SITE_HASH_LAT_ORIGIN, SITE_HASH_LAT_SPAN, SITE_HASH_LON_ORIGIN, SITE_HASH_LON_SPAN,
};
use crate::geo::point::GeoPoint;

/// Derives a reproducible demo site for a project identifier. The char codes
/// of the id are summed and folded into a fixed bounding box, so the same id
/// always maps to the same point across runs. This is a placeholder, not a
/// geocoder.
pub fn project_location(project_id: &str) -> GeoPoint {
    let seed: u64 = project_id.chars().map(|c| c as u64).sum();
    let latitude = SITE_HASH_LAT_ORIGIN + (seed % SITE_HASH_LAT_SPAN) as f64;
    let longitude = SITE_HASH_LON_ORIGIN + (seed % SITE_HASH_LON_SPAN) as f64;
    GeoPoint::new(latitude, longitude)
}

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::geo::point::GeoPoint;

/// A supplier with a fixed location and the set of material ids it can
/// deliver. Immutable for the session once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    id: String,
    display_name: String,
    location: GeoPoint,
    supplied_item_ids: HashSet<String>,
}

impl Supplier {
    pub fn new(
        id: String,
        display_name: String,
        location: GeoPoint,
        supplied_item_ids: HashSet<String>,
    ) -> Self {
        Self {
            id,
            display_name,
            location,
            supplied_item_ids,
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_display_name(&self) -> &str {
        &self.display_name
    }

    pub fn get_location(&self) -> &GeoPoint {
        &self.location
    }

    pub fn supplies(&self, material_id: &str) -> bool {
        self.supplied_item_ids.contains(material_id)
    }

    pub fn supplied_item_ids(&self) -> &HashSet<String> {
        &self.supplied_item_ids
    }

    /// Stable listing of the covered materials for display.
    pub fn supplied_items_sorted(&self) -> Vec<&str> {
        let mut items: Vec<&str> = self.supplied_item_ids.iter().map(|s| s.as_str()).collect();
        items.sort_unstable();
        items
    }
}

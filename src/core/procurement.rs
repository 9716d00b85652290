use serde::{Deserialize, Serialize};

use crate::models::material::Material;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcurementItem {
    pub material_id: String,
    pub qty: u32,
}

/// The cross-screen procurement list. Adding an already-listed material merges
/// quantities instead of duplicating the row.
#[derive(Debug, Clone, Default)]
pub struct ProcurementList {
    items: Vec<ProcurementItem>,
    paused: bool,
}

impl ProcurementList {
    pub fn items(&self) -> &[ProcurementItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, material_id: &str) -> bool {
        self.items.iter().any(|i| i.material_id == material_id)
    }

    pub fn add(&mut self, material_id: &str, qty: u32) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.material_id == material_id) {
            existing.qty += qty;
        } else {
            self.items.push(ProcurementItem {
                material_id: material_id.to_string(),
                qty,
            });
        }
    }

    pub fn remove(&mut self, material_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.material_id != material_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Distinct material ids in insertion order, for the recommendation
    /// screen's selection list.
    pub fn material_ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.material_id.as_str()).collect()
    }

    /// Price estimate against the catalog. Ids that no longer resolve are
    /// priced at zero rather than failing the whole sum.
    pub fn total_estimate(&self, materials: &[Material]) -> f64 {
        self.items
            .iter()
            .map(|item| {
                materials
                    .iter()
                    .find(|m| m.id == item.material_id)
                    .map(|m| m.unit_cost * item.qty as f64)
                    .unwrap_or(0.0)
            })
            .sum()
    }
}

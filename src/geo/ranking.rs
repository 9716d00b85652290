use std::cmp::Ordering;

use crate::geo::point::{GeoError, GeoPoint};
use crate::models::supplier::Supplier;

/// A supplier paired with its great-circle distance from the query origin.
/// Derived per query, never stored.
#[derive(Debug, Clone)]
pub struct RankedSupplier {
    pub supplier: Supplier,
    pub distance_km: f64,
}

/// Ranks `candidates` that can deliver `requested_item_id` by distance from
/// `origin`, nearest first. Equal distances fall back to supplier id order so
/// the output is deterministic. An empty result is a valid answer, not an
/// error; only a malformed origin fails.
pub fn rank(
    origin: &GeoPoint,
    requested_item_id: &str,
    candidates: &[Supplier],
) -> Result<Vec<RankedSupplier>, GeoError> {
    origin.validate()?;

    let mut ranked: Vec<RankedSupplier> = candidates
        .iter()
        .filter(|s| s.supplies(requested_item_id))
        .map(|s| RankedSupplier {
            distance_km: origin.distance_km(s.get_location()),
            supplier: s.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.supplier.get_id().cmp(b.supplier.get_id()))
    });

    Ok(ranked)
}

/// Owns the supplier catalog and answers ranking queries against it. State is
/// read-only after construction, so a shared reference can serve concurrent
/// callers.
#[derive(Debug, Clone)]
pub struct DistanceRanker {
    suppliers: Vec<Supplier>,
}

impl DistanceRanker {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        Self { suppliers }
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn rank(
        &self,
        origin: &GeoPoint,
        requested_item_id: &str,
    ) -> Result<Vec<RankedSupplier>, GeoError> {
        rank(origin, requested_item_id, &self.suppliers)
    }

    /// The nearest capable supplier, if any.
    pub fn recommend(
        &self,
        origin: &GeoPoint,
        requested_item_id: &str,
    ) -> Result<Option<RankedSupplier>, GeoError> {
        Ok(self.rank(origin, requested_item_id)?.into_iter().next())
    }
}

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::core::portfolio::Portfolio;
use crate::geo::location_hash::project_location;
use crate::geo::ranking::rank;
use crate::models::material::Material;
use crate::models::supplier::Supplier;
use crate::utils::logging::{self, OperationCategory, RankingType};

/// Best supplier for one material at one project site. `supplier_id` is None
/// when nobody carries the material.
#[derive(Debug, Clone)]
pub struct SupplyRow {
    pub material_id: String,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ProjectSupplyReport {
    pub project_id: String,
    pub project_name: String,
    pub rows: Vec<SupplyRow>,
}

/// Ranks the full material catalog against every project site and keeps the
/// top match per material. The per-project work fans out across threads;
/// ranking is pure, and results are collected in portfolio order, so the
/// outcome does not depend on thread count.
pub fn scan_portfolio(
    portfolio: &Portfolio,
    materials: &[Material],
    suppliers: &[Supplier],
    show_progress: bool,
) -> Vec<ProjectSupplyReport> {
    let _timing = logging::start_timing(
        "scan_portfolio",
        OperationCategory::Ranking {
            subcategory: RankingType::PortfolioScan,
        },
    );

    let bar = if show_progress {
        let bar = ProgressBar::new(portfolio.projects().len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{bar:40} {pos}/{len} projects ({elapsed})")
        {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<ProjectSupplyReport> = portfolio
        .projects()
        .par_iter()
        .map(|project| {
            let origin = project_location(&project.id);
            let rows = materials
                .iter()
                .map(|material| {
                    // hashed origins are always in range, so an empty ranking
                    // is the only no-answer case
                    let best = rank(&origin, &material.id, suppliers)
                        .ok()
                        .and_then(|ranked| ranked.into_iter().next());
                    SupplyRow {
                        material_id: material.id.clone(),
                        supplier_id: best.as_ref().map(|b| b.supplier.get_id().to_string()),
                        supplier_name: best
                            .as_ref()
                            .map(|b| b.supplier.get_display_name().to_string()),
                        distance_km: best.as_ref().map(|b| b.distance_km),
                    }
                })
                .collect();
            bar.inc(1);
            ProjectSupplyReport {
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                rows,
            }
        })
        .collect();

    bar.finish_and_clear();
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn scan_covers_every_project_and_material() {
        let portfolio = Portfolio::new(catalog::default_projects());
        let materials = catalog::default_materials();
        let suppliers = catalog::default_suppliers();

        let reports = scan_portfolio(&portfolio, &materials, &suppliers, false);

        assert_eq!(reports.len(), portfolio.projects().len());
        for (report, project) in reports.iter().zip(portfolio.projects()) {
            assert_eq!(report.project_id, project.id);
            assert_eq!(report.rows.len(), materials.len());
            // the seed catalog covers every material
            for row in &report.rows {
                assert!(row.supplier_id.is_some(), "no supplier for {}", row.material_id);
            }
        }
    }

    #[test]
    fn scan_is_deterministic() {
        let portfolio = Portfolio::new(catalog::default_projects());
        let materials = catalog::default_materials();
        let suppliers = catalog::default_suppliers();

        let a = scan_portfolio(&portfolio, &materials, &suppliers, false);
        let b = scan_portfolio(&portfolio, &materials, &suppliers, false);

        for (ra, rb) in a.iter().zip(b.iter()) {
            assert_eq!(ra.project_id, rb.project_id);
            for (x, y) in ra.rows.iter().zip(rb.rows.iter()) {
                assert_eq!(x.supplier_id, y.supplier_id);
                assert_eq!(x.distance_km, y.distance_km);
            }
        }
    }

    #[test]
    fn uncovered_material_yields_an_empty_row() {
        let portfolio = Portfolio::new(catalog::default_projects());
        let mut materials = catalog::default_materials();
        materials[0].id = "ORPHAN-1".to_string();
        let suppliers = catalog::default_suppliers();

        let reports = scan_portfolio(&portfolio, &materials, &suppliers, false);
        assert!(reports[0].rows[0].supplier_id.is_none());
        assert!(reports[0].rows[0].distance_km.is_none());
    }
}

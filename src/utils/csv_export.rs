use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::procurement::ProcurementList;
use crate::geo::ranking::RankedSupplier;
use crate::models::material::Material;
use crate::utils::logging::{self, FileIOType, OperationCategory};

fn timestamped(output_dir: &Path, stem: &str) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    output_dir.join(format!("{}_{}.csv", stem, timestamp))
}

/// Writes the procurement list with resolved names and line totals. Returns
/// the path of the file written.
pub fn export_procurement(
    list: &ProcurementList,
    materials: &[Material],
    output_dir: &str,
) -> Result<PathBuf> {
    let _timing = logging::start_timing(
        "export_procurement",
        OperationCategory::FileIO {
            subcategory: FileIOType::ResultsSave,
        },
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir))?;
    let path = timestamped(Path::new(output_dir), "procurement_list");
    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writeln!(file, "material_id,material_name,qty,unit_cost,line_total")?;
    for item in list.items() {
        let material = materials.iter().find(|m| m.id == item.material_id);
        let name = material.map(|m| m.name.as_str()).unwrap_or("(unknown)");
        let unit_cost = material.map(|m| m.unit_cost).unwrap_or(0.0);
        writeln!(
            file,
            "{},{},{},{:.2},{:.2}",
            item.material_id,
            name,
            item.qty,
            unit_cost,
            unit_cost * item.qty as f64,
        )?;
    }

    Ok(path)
}

/// Writes a supplier ranking for one material, nearest first.
pub fn export_ranking(
    project_id: &str,
    material_id: &str,
    ranked: &[RankedSupplier],
    output_dir: &str,
) -> Result<PathBuf> {
    let _timing = logging::start_timing(
        "export_ranking",
        OperationCategory::FileIO {
            subcategory: FileIOType::ResultsSave,
        },
    );

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir))?;
    let stem = format!("ranking_{}_{}", project_id, material_id);
    let path = timestamped(Path::new(output_dir), &stem);
    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writeln!(file, "rank,supplier_id,supplier_name,distance_km")?;
    for (idx, entry) in ranked.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{:.1}",
            idx + 1,
            entry.supplier.get_id(),
            entry.supplier.get_display_name(),
            entry.distance_km,
        )?;
    }

    Ok(path)
}

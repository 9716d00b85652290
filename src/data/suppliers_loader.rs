use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;

use crate::geo::point::GeoPoint;
use crate::models::supplier::Supplier;

#[derive(Debug)]
pub enum SupplierLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    MissingField(String),
    InvalidCoordinate(String),
    EmptyMaterialList(String),
}

impl From<std::io::Error> for SupplierLoadError {
    fn from(err: std::io::Error) -> Self {
        SupplierLoadError::IoError(err)
    }
}

impl From<csv::Error> for SupplierLoadError {
    fn from(err: csv::Error) -> Self {
        SupplierLoadError::CsvError(err)
    }
}

impl std::fmt::Display for SupplierLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplierLoadError::IoError(e) => write!(f, "IO error: {}", e),
            SupplierLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            SupplierLoadError::MissingField(s) => write!(f, "Missing field: {}", s),
            SupplierLoadError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
            SupplierLoadError::EmptyMaterialList(s) => {
                write!(f, "Supplier {} lists no materials", s)
            }
        }
    }
}

impl std::error::Error for SupplierLoadError {}

/// Loads the supplier catalog from CSV with columns
/// `id,name,latitude,longitude,materials`, where `materials` is a
/// semicolon-separated list of material ids. Coordinates are validated, not
/// clamped; a bad row fails the whole load.
pub fn load_suppliers(csv_path: &str) -> Result<Vec<Supplier>, SupplierLoadError> {
    let mut file = File::open(csv_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());

    let mut suppliers = Vec::new();

    for result in reader.records() {
        let record = result?;

        let id = record
            .get(0)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SupplierLoadError::MissingField("id".to_string()))?
            .to_string();

        let name = record
            .get(1)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SupplierLoadError::MissingField(format!("name for {}", id)))?
            .to_string();

        let latitude: f64 = record
            .get(2)
            .ok_or_else(|| SupplierLoadError::MissingField(format!("latitude for {}", id)))?
            .parse()
            .map_err(|_| {
                SupplierLoadError::InvalidCoordinate(format!("bad latitude for {}", id))
            })?;

        let longitude: f64 = record
            .get(3)
            .ok_or_else(|| SupplierLoadError::MissingField(format!("longitude for {}", id)))?
            .parse()
            .map_err(|_| {
                SupplierLoadError::InvalidCoordinate(format!("bad longitude for {}", id))
            })?;

        let location = GeoPoint::new(latitude, longitude);
        location.validate().map_err(|e| {
            SupplierLoadError::InvalidCoordinate(format!("{}: {}", id, e))
        })?;

        let materials: HashSet<String> = record
            .get(4)
            .unwrap_or("")
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if materials.is_empty() {
            return Err(SupplierLoadError::EmptyMaterialList(id));
        }

        suppliers.push(Supplier::new(id, name, location, materials));
    }

    Ok(suppliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        writeln!(file, "id,name,latitude,longitude,materials").unwrap();
        write!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn parses_a_supplier_row() {
        let path = write_csv(
            "gridfolio_suppliers_ok.csv",
            "V001,Bharat Steel Works,28.6448,77.2167,STL-ANG-90;FND-REB-12\n",
        );
        let suppliers = load_suppliers(path.to_str().unwrap()).unwrap();
        assert_eq!(suppliers.len(), 1);
        assert_eq!(suppliers[0].get_id(), "V001");
        assert!(suppliers[0].supplies("STL-ANG-90"));
        assert!(suppliers[0].supplies("FND-REB-12"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn out_of_range_latitude_fails_the_load() {
        let path = write_csv(
            "gridfolio_suppliers_badlat.csv",
            "V001,Bharat Steel Works,95.0,77.2167,STL-ANG-90\n",
        );
        let err = load_suppliers(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SupplierLoadError::InvalidCoordinate(_)));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn supplier_without_materials_is_rejected() {
        let path = write_csv(
            "gridfolio_suppliers_nomat.csv",
            "V001,Bharat Steel Works,28.6448,77.2167,\n",
        );
        let err = load_suppliers(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SupplierLoadError::EmptyMaterialList(_)));
        std::fs::remove_file(&path).ok();
    }
}

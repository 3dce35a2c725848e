use std::path::Path;

use serde::Deserialize;

use crate::application::ports::{DatasetError, MedicineStore};
use crate::domain::{MedicineRecord, MedicineSuggestion};

/// In-memory medicine dataset, loaded once from a flat file and read-only for
/// the rest of the process lifetime.
pub struct MedicineCatalog {
    records: Vec<MedicineRecord>,
}

#[derive(Deserialize)]
struct JsonDataset {
    medicines: Vec<MedicineRecord>,
}

impl MedicineCatalog {
    pub fn from_records(records: Vec<MedicineRecord>) -> Self {
        Self { records }
    }

    /// Loads a dataset of the form `{"medicines": [...]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DatasetError::Unavailable(format!("{}: {}", path.display(), e)))?;
        let dataset: JsonDataset = serde_json::from_str(&raw)
            .map_err(|e| DatasetError::Malformed(format!("{}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), records = dataset.medicines.len(), "Loaded JSON medicine dataset");

        Ok(Self::from_records(dataset.medicines))
    }

    /// Loads a CSV dataset with a header row; absent columns and empty cells
    /// load as empty strings.
    pub fn from_csv_file(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| DatasetError::Unavailable(format!("{}: {}", path.display(), e)))?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: MedicineRecord =
                row.map_err(|e| DatasetError::Malformed(format!("{}: {}", path.display(), e)))?;
            records.push(record);
        }

        tracing::info!(path = %path.display(), records = records.len(), "Loaded CSV medicine dataset");

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl MedicineStore for MedicineCatalog {
    fn find_by_name(&self, query: &str) -> Option<MedicineRecord> {
        let query = query.trim().to_lowercase();

        // Exact-match pass first so "aspirin" never loses to "aspirin forte".
        if let Some(record) = self.records.iter().find(|r| r.name_equals(&query)) {
            return Some(record.clone());
        }

        self.records
            .iter()
            .find(|r| r.name_contains(&query))
            .cloned()
    }

    fn find_fuzzy(&self, query: &str) -> Option<MedicineRecord> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .find(|r| r.any_name_contains(&query))
            .cloned()
    }

    fn suggest(&self, query: &str, limit: usize) -> Vec<MedicineSuggestion> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| r.any_name_contains(&query))
            .take(limit)
            .map(MedicineSuggestion::from)
            .collect()
    }
}

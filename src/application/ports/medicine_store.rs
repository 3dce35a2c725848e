use crate::domain::{MedicineRecord, MedicineSuggestion};

/// Read-only access to a loaded medicine dataset.
///
/// All lookups are case-insensitive and first-match-wins in dataset order;
/// there is deliberately no ranking or scoring.
pub trait MedicineStore: Send + Sync {
    /// Exact match on name first, then substring match on name.
    fn find_by_name(&self, query: &str) -> Option<MedicineRecord>;

    /// Substring match across name, generic name and brand name.
    fn find_fuzzy(&self, query: &str) -> Option<MedicineRecord>;

    /// Up to `limit` suggestion entries matching any of the three name fields.
    fn suggest(&self, query: &str, limit: usize) -> Vec<MedicineSuggestion>;
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset unavailable: {0}")]
    Unavailable(String),
    #[error("dataset malformed: {0}")]
    Malformed(String),
}

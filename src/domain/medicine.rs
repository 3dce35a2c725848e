use serde::{Deserialize, Serialize};

/// A single medicine entry as loaded from the flat-file datasets.
///
/// Every attribute is optional in the source data; absent fields load as empty
/// strings and are dropped when the record is serialized back out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub generic_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uses: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub side_effects: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub dosage: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub storage: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub precautions: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub interactions: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub how_to_use: String,
}

impl MedicineRecord {
    /// Case-insensitive exact match on the primary name.
    /// `query` must already be lowercased.
    pub fn name_equals(&self, query: &str) -> bool {
        self.name.to_lowercase() == query
    }

    /// Case-insensitive substring match on the primary name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }

    /// Substring match across name, generic name and brand name.
    pub fn any_name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.generic_name.to_lowercase().contains(query)
            || self.brand_name.to_lowercase().contains(query)
    }
}

/// Compact projection of a record used for type-ahead suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicineSuggestion {
    pub name: String,
    pub generic_name: String,
    pub brand_name: String,
    pub category: String,
}

impl From<&MedicineRecord> for MedicineSuggestion {
    fn from(record: &MedicineRecord) -> Self {
        Self {
            name: record.name.clone(),
            generic_name: record.generic_name.clone(),
            brand_name: record.brand_name.clone(),
            category: record.category.clone(),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a species cycles through its growth stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Lifecycle {
    Annual,
    Perennial,
    Biennial,
}

impl Lifecycle {
    /// Case-insensitive parse; anything unrecognised is not a lifecycle.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "annual" => Some(Self::Annual),
            "perennial" => Some(Self::Perennial),
            "biennial" => Some(Self::Biennial),
            _ => None,
        }
    }
}

/// One parsed reference-dataset row.
///
/// The day-count fields are kept exactly as they appear in the dataset;
/// nothing upstream validates them as numbers. `dormant_to_growth_days` is
/// only meaningful for perennials but is stored for every row as parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlantInfoRecord {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub origin_area: String,
    pub family: String,
    pub light: String,
    pub temperature: String,
    pub water: String,
    pub lifecycle: Lifecycle,
    pub seed_to_seedling_days: String,
    pub seedling_to_growth_days: String,
    pub growth_to_flower_days: String,
    pub flower_to_dormant_or_death_days: String,
    pub dormant_to_growth_days: String,
}

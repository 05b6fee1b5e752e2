use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A plant placed (or staged for placement) on a garden grid.
///
/// Every construction mints a fresh id, so two plants of the same species
/// are distinct individuals. The `info_id` joins the plant to its reference
/// record and is derived from the display name once, here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Plant {
    pub id: Uuid,
    pub name: String,
    pub info_id: String,
}

impl Plant {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let info_id = info_id_for(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            info_id,
        }
    }
}

/// Reference-dataset key for a species name: lowercased, whitespace removed.
pub fn info_id_for(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::plant::Plant;

/// Editing-mode flag plus the catalog pick awaiting placement, shared across
/// every garden in the collection. Passed explicitly into grid operations so
/// transitions stay testable without a UI harness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EditingSession {
    pub is_editing: bool,
    pub pending_plant: Option<Plant>,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }
}

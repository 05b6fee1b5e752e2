use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::models::{garden::Garden, info::PlantInfoRecord, session::EditingSession};

/// Error body carried by every 4xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Case-insensitive substring filter; absent or empty returns the whole
    /// catalog.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGardenRequest {
    /// A blank name becomes "New Garden".
    #[serde(default)]
    pub name: String,
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenameGardenRequest {
    /// Stored exactly as typed, empty included.
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChoosePendingRequest {
    /// Catalog species name, matched case-insensitively.
    pub name: String,
}

/// Snapshot returned after a tap: the tapped garden plus the shared session,
/// so the client re-renders both in one round trip.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TapResponse {
    pub garden: Garden,
    pub session: EditingSession,
}

/// Reference card for one placed plant. When the species has no dataset
/// record, `record` is absent and `message` carries the static fallback text.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoCardResponse {
    pub name: String,
    pub info_id: String,
    pub record: Option<PlantInfoRecord>,
    pub message: Option<String>,
}

use std::sync::RwLock;

use crate::models::{garden::GardenCollection, session::EditingSession};

/// Whole-service mutable state: every garden plus the shared editing
/// session. Handlers take the lock for the duration of one synchronous
/// transition, which serializes user actions exactly like the single UI
/// event loop they stand in for.
#[derive(Debug, Clone)]
pub struct AppState {
    pub gardens: GardenCollection,
    pub session: EditingSession,
}

impl AppState {
    /// Opens on a single empty 3x3 garden, the first screen of the app.
    pub fn new() -> Self {
        let mut gardens = GardenCollection::new();
        gardens.add_garden("New Garden", 3, 3);
        Self {
            gardens,
            session: EditingSession::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = RwLock<AppState>;

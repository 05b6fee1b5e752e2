use crate::models::{garden::GardenCollection, plant::Plant, session::EditingSession};

/// Flips editing mode. Leaving editing mode cancels every in-flight
/// interaction: the pending plant and each garden's moving selection,
/// collection-wide. Cell contents are untouched.
pub fn toggle_editing(session: &mut EditingSession, gardens: &mut GardenCollection) {
    session.is_editing = !session.is_editing;
    if !session.is_editing {
        session.pending_plant = None;
        gardens.clear_selections();
    }
}

/// Stages a catalog pick for placement. Choosing a plant always enters
/// editing mode.
pub fn choose_pending(session: &mut EditingSession, plant: Plant) {
    session.is_editing = true;
    session.pending_plant = Some(plant);
}

/// Drops the staged plant without leaving editing mode.
pub fn cancel_pending(session: &mut EditingSession) {
    session.pending_plant = None;
}

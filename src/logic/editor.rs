use crate::models::{garden::Garden, session::EditingSession};

/// Single dispatch point for a tap on `garden.cells[index]`.
///
/// Branches are evaluated in a fixed precedence order; the first match wins:
/// 1. tapping the selected cell deselects it
/// 2. with a selection, an empty target completes the move and an occupied
///    one absorbs the tap — a plant only ever moves onto an empty cell
/// 3. a pending plant lands in an empty cell
/// 4. an occupied cell becomes the selection and cancels any pending plant
/// 5. anything else is a no-op
///
/// Taps outside editing mode are ignored. `index` must be in bounds; an
/// out-of-range index is a caller bug and panics on the cell access.
pub fn tap_cell(garden: &mut Garden, session: &mut EditingSession, index: usize) {
    if !session.is_editing {
        return;
    }
    if garden.moving_index == Some(index) {
        garden.moving_index = None;
        return;
    }
    if let Some(selected) = garden.moving_index {
        if garden.cells[index].is_none() {
            garden.cells[index] = garden.cells[selected].take();
            garden.moving_index = None;
        }
        return;
    }
    if session.pending_plant.is_some() && garden.cells[index].is_none() {
        garden.cells[index] = session.pending_plant.take();
        return;
    }
    if garden.cells[index].is_some() {
        garden.moving_index = Some(index);
        session.pending_plant = None;
    }
}

/// Removes the plant in the currently selected cell and clears the
/// selection. Calling this without a selection is a caller bug.
pub fn delete_selected(garden: &mut Garden) {
    let index = garden
        .moving_index
        .take()
        .expect("delete_selected requires a selected cell");
    garden.cells[index] = None;
}

/// Stores the name exactly as typed. Blank-name normalization happens once,
/// when a garden is constructed, not on every edit.
pub fn rename_garden(garden: &mut Garden, name: &str) {
    garden.name = name.to_string();
}

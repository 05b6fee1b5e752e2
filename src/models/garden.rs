use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::plant::Plant;

pub const DEFAULT_GARDEN_NAME: &str = "New Garden";

/// One independently-sized grid of plant-or-empty cells, stored row-major.
///
/// `cells.len() == rows * cols` holds from construction onward; no operation
/// grows or shrinks the grid. `moving_index`, when set, points at the cell
/// currently selected for relocation and always references an occupied cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Garden {
    pub id: Uuid,
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Option<Plant>>,
    pub moving_index: Option<usize>,
    pub created_at: DateTime<Utc>,
}

impl Garden {
    /// Builds an all-empty grid. A blank name becomes "New Garden";
    /// dimensions must be positive.
    pub fn new(name: &str, rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "garden dimensions must be positive, got {rows}x{cols}"
        );
        let name = if name.trim().is_empty() {
            DEFAULT_GARDEN_NAME.to_string()
        } else {
            name.to_string()
        };
        Self {
            id: Uuid::new_v4(),
            name,
            rows,
            cols,
            cells: vec![None; rows * cols],
            moving_index: None,
            created_at: Utc::now(),
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Ordered list of gardens; insertion order is display order. Append-only —
/// gardens are never removed or reordered.
#[derive(Debug, Clone, Default)]
pub struct GardenCollection {
    gardens: Vec<Garden>,
}

impl GardenCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new all-empty garden and returns its index.
    pub fn add_garden(&mut self, name: &str, rows: usize, cols: usize) -> usize {
        self.gardens.push(Garden::new(name, rows, cols));
        self.gardens.len() - 1
    }

    pub fn gardens(&self) -> &[Garden] {
        &self.gardens
    }

    pub fn get(&self, index: usize) -> Option<&Garden> {
        self.gardens.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Garden> {
        self.gardens.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.gardens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gardens.is_empty()
    }

    /// Drops every garden's moving selection. Cell contents are untouched.
    pub fn clear_selections(&mut self) {
        for garden in &mut self.gardens {
            garden.moving_index = None;
        }
    }
}

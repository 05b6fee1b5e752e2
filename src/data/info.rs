use std::collections::HashMap;
use std::path::Path;

use crate::models::info::{Lifecycle, PlantInfoRecord};

/// Columns in the canonical dataset schema.
const COLUMN_COUNT: usize = 14;

/// Read-only index over the plant reference dataset, keyed by record id.
#[derive(Debug, Clone, Default)]
pub struct PlantInfoIndex {
    records: HashMap<String, PlantInfoRecord>,
}

impl PlantInfoIndex {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the raw dataset text. The first line is a header and is
    /// discarded. Values are split on bare commas — the format has no
    /// quoting or escaping, so a value containing a comma corrupts its row's
    /// column alignment and the row is dropped like any other malformed one.
    /// A later row with the same id overwrites an earlier one.
    pub fn from_csv(raw: &str) -> Self {
        let mut records = HashMap::new();
        for (number, line) in raw.lines().enumerate().skip(1) {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match parse_row(line) {
                Some(record) => {
                    records.insert(record.id.clone(), record);
                }
                None => log::debug!("skipping malformed reference row {}", number + 1),
            }
        }
        Self { records }
    }

    /// Loads the dataset from disk. A missing or unreadable file degrades to
    /// an empty index — reference data is display-only and must never block
    /// editing.
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let index = Self::from_csv(&raw);
                log::info!(
                    "loaded {} plant info records from {}",
                    index.len(),
                    path.display()
                );
                index
            }
            Err(err) => {
                log::warn!(
                    "plant info dataset {} unavailable ({err}); starting with an empty index",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&PlantInfoRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One data row. Short rows and rows with an unrecognised lifecycle column
/// are malformed; extra trailing columns are ignored.
fn parse_row(line: &str) -> Option<PlantInfoRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < COLUMN_COUNT {
        return None;
    }
    let lifecycle = Lifecycle::parse(fields[8])?;
    Some(PlantInfoRecord {
        id: fields[0].to_string(),
        name: fields[1].to_string(),
        scientific_name: fields[2].to_string(),
        origin_area: fields[3].to_string(),
        family: fields[4].to_string(),
        light: fields[5].to_string(),
        temperature: fields[6].to_string(),
        water: fields[7].to_string(),
        lifecycle,
        seed_to_seedling_days: fields[9].to_string(),
        seedling_to_growth_days: fields[10].to_string(),
        growth_to_flower_days: fields[11].to_string(),
        flower_to_dormant_or_death_days: fields[12].to_string(),
        dormant_to_growth_days: fields[13].to_string(),
    })
}

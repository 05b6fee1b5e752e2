/// The fixed set of species the picker offers. Not user-extensible.
pub const PLANT_OPTIONS: [&str; 7] = [
    "Wheat",
    "Barley",
    "Grape",
    "Fig",
    "Pomegranate",
    "Olive",
    "Date",
];

/// Returns the catalog entries whose name contains `filter` as a
/// case-insensitive substring, in catalog order. An empty filter returns the
/// whole catalog.
pub fn filter_options(filter: &str) -> Vec<&'static str> {
    if filter.is_empty() {
        return PLANT_OPTIONS.to_vec();
    }
    let needle = filter.to_lowercase();
    PLANT_OPTIONS
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

/// Resolves a species name to its canonical catalog casing.
pub fn find_option(name: &str) -> Option<&'static str> {
    PLANT_OPTIONS
        .iter()
        .copied()
        .find(|option| option.eq_ignore_ascii_case(name))
}

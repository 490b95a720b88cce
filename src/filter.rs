use crate::types::RawRow;
use std::collections::HashSet;

/// Drug name prefixes that identify an SSRI line. Matching is case-sensitive
/// and anchored at the start, so strength and form text after the name is
/// ignored.
pub const SSRI_PREFIXES: [&str; 5] = [
    "SERTRALINE",
    "PAROXETINE",
    "FLUOXETINE",
    "CITALOPRAM",
    "ESCITALOPRAM",
];

pub fn is_ssri(drug_description: &str) -> bool {
    SSRI_PREFIXES
        .iter()
        .any(|prefix| drug_description.starts_with(prefix))
}

/// Keep SSRI rows from the allowed regions. An empty result is fine.
pub fn filter_rows(rows: Vec<RawRow>, allowed_codes: &HashSet<String>) -> Vec<RawRow> {
    rows.into_iter()
        .filter(|r| is_ssri(&r.drug_description) && allowed_codes.contains(&r.region_code))
        .collect()
}

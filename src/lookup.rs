// Lookup tables used by the transformer.
//
// Both tables are plain immutable values. The transformer owns one of each,
// so callers (and tests) can swap them without touching any global state.
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Season bucket derived from a calendar month.
///
/// `Unknown` is the sentinel for a month the season table has no entry for.
/// Variant order is calendar order within a season year, which is also the
/// order reports list seasons in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    Unknown,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Month (1-12) to season mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTable {
    by_month: HashMap<u32, Season>,
}

impl SeasonTable {
    pub fn new(by_month: HashMap<u32, Season>) -> Self {
        Self { by_month }
    }

    /// Returns the season for `month`, or `Season::Unknown` when the table
    /// has no entry for it.
    pub fn season_for(&self, month: u32) -> Season {
        self.by_month.get(&month).copied().unwrap_or(Season::Unknown)
    }
}

impl Default for SeasonTable {
    /// Three-month buckets with winter spanning the year boundary.
    fn default() -> Self {
        let by_month = [
            (12, Season::Winter),
            (1, Season::Winter),
            (2, Season::Winter),
            (3, Season::Spring),
            (4, Season::Spring),
            (5, Season::Spring),
            (6, Season::Summer),
            (7, Season::Summer),
            (8, Season::Summer),
            (9, Season::Autumn),
            (10, Season::Autumn),
            (11, Season::Autumn),
        ]
        .into_iter()
        .collect();
        Self { by_month }
    }
}

pub const GREATER_GLASGOW_AND_CLYDE: &str = "Greater Glasgow & Clyde";
pub const LANARKSHIRE: &str = "Lanarkshire";
pub const LOTHIAN: &str = "Lothian";

/// Health board code to board name mapping. Many-to-one: boards re-coded in
/// the 2019 boundary change keep their pre-2019 code as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTable {
    by_code: BTreeMap<String, String>,
}

impl BoardTable {
    pub fn new(by_code: BTreeMap<String, String>) -> Self {
        Self { by_code }
    }

    pub fn board_for(&self, code: &str) -> Option<&str> {
        self.by_code.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }
}

impl Default for BoardTable {
    fn default() -> Self {
        let by_code = [
            ("S08000021", GREATER_GLASGOW_AND_CLYDE),
            ("S08000031", GREATER_GLASGOW_AND_CLYDE),
            ("S08000023", LANARKSHIRE),
            ("S08000032", LANARKSHIRE),
            ("S08000024", LOTHIAN),
        ]
        .into_iter()
        .map(|(code, board)| (code.to_string(), board.to_string()))
        .collect();
        Self { by_code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_season_table_is_total_over_months() {
        let table = SeasonTable::default();
        for month in 1..=12 {
            assert_ne!(table.season_for(month), Season::Unknown, "month {month}");
        }
    }

    #[test]
    fn default_season_buckets() {
        let table = SeasonTable::default();
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
            Season::Winter,
        ];
        for (idx, season) in expected.iter().enumerate() {
            assert_eq!(table.season_for(idx as u32 + 1), *season);
        }
    }

    #[test]
    fn months_outside_the_table_are_unknown() {
        let table = SeasonTable::default();
        assert_eq!(table.season_for(0), Season::Unknown);
        assert_eq!(table.season_for(13), Season::Unknown);
    }

    #[test]
    fn board_table_is_many_to_one() {
        let boards = BoardTable::default();
        assert_eq!(boards.board_for("S08000023"), Some(LANARKSHIRE));
        assert_eq!(boards.board_for("S08000032"), Some(LANARKSHIRE));
        assert_eq!(boards.board_for("S08000021"), Some(GREATER_GLASGOW_AND_CLYDE));
        assert_eq!(boards.board_for("S08000031"), Some(GREATER_GLASGOW_AND_CLYDE));
        assert_eq!(boards.board_for("S08000024"), Some(LOTHIAN));
        assert_eq!(boards.board_for("S08000015"), None);
    }
}

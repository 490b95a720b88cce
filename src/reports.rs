use crate::lookup::Season;
use crate::types::{BoardSummaryRow, PipelineReport, RunSummary, SeasonPivotRow, SeasonalTotal};
use std::collections::BTreeMap;

/// Spread seasons into columns: one row per (board, year). Seasons with no
/// aggregate row read as 0 here; `Unknown` only counts toward the total.
pub fn season_pivot(totals: &[SeasonalTotal]) -> Vec<SeasonPivotRow> {
    let mut map: BTreeMap<(&str, &str), SeasonPivotRow> = BTreeMap::new();
    for t in totals {
        let row = map
            .entry((t.board.as_str(), t.year.as_str()))
            .or_insert_with(|| SeasonPivotRow {
                board: t.board.clone(),
                year: t.year.clone(),
                winter: 0,
                spring: 0,
                summer: 0,
                autumn: 0,
                total: 0,
            });
        match t.season {
            Season::Winter => row.winter += t.total_quantity,
            Season::Spring => row.spring += t.total_quantity,
            Season::Summer => row.summer += t.total_quantity,
            Season::Autumn => row.autumn += t.total_quantity,
            Season::Unknown => {}
        }
        row.total += t.total_quantity;
    }
    map.into_values().collect()
}

/// Per-board totals and the busiest (season, year) group.
pub fn board_summary(totals: &[SeasonalTotal]) -> Vec<BoardSummaryRow> {
    let mut map: BTreeMap<&str, BoardSummaryRow> = BTreeMap::new();
    for t in totals {
        let row = map.entry(t.board.as_str()).or_insert_with(|| BoardSummaryRow {
            board: t.board.clone(),
            total_quantity: 0,
            groups: 0,
            peak_season: t.season,
            peak_year: t.year.clone(),
            peak_quantity: t.total_quantity,
        });
        row.total_quantity += t.total_quantity;
        row.groups += 1;
        // Ties keep the earliest group, since totals arrive in year/season order.
        if t.total_quantity > row.peak_quantity {
            row.peak_season = t.season;
            row.peak_year = t.year.clone();
            row.peak_quantity = t.total_quantity;
        }
    }
    map.into_values().collect()
}

pub fn run_summary(
    name: &str,
    first_year: i32,
    last_year: i32,
    pipeline: PipelineReport,
    totals: &[SeasonalTotal],
) -> RunSummary {
    RunSummary {
        run: name.to_string(),
        first_year,
        last_year,
        pipeline,
        total_quantity: totals.iter().map(|t| t.total_quantity).sum(),
    }
}

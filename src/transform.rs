use crate::error::{ReportError, Result};
use crate::lookup::{BoardTable, SeasonTable};
use crate::types::{DerivedRecord, RawRow};
use crate::util::parse_year_month;
use chrono::Datelike;

/// Derives date, year, season and board name for filtered rows.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    seasons: SeasonTable,
    boards: BoardTable,
}

impl Transformer {
    pub fn new(seasons: SeasonTable, boards: BoardTable) -> Self {
        Self { seasons, boards }
    }

    pub fn boards(&self) -> &BoardTable {
        &self.boards
    }

    pub fn derive(&self, row: RawRow) -> Result<DerivedRecord> {
        let date = parse_year_month(&row.paid_year_month).ok_or_else(|| {
            ReportError::UnparseableDate {
                value: row.paid_year_month.clone(),
            }
        })?;
        // The filter's allow-list is checked against this table up front, so
        // an unmapped code here means that invariant was broken.
        let board = self
            .boards
            .board_for(&row.region_code)
            .ok_or_else(|| ReportError::UnknownRegionCode {
                code: row.region_code.clone(),
            })?
            .to_string();

        Ok(DerivedRecord {
            board,
            drug_description: row.drug_description,
            date,
            year: date.format("%Y").to_string(),
            season: self.seasons.season_for(date.month()),
            paid_quantity: row.paid_quantity,
        })
    }

    /// One derived record per input row; the first bad row fails the batch.
    pub fn transform(&self, rows: Vec<RawRow>) -> Result<Vec<DerivedRecord>> {
        rows.into_iter().map(|r| self.derive(r)).collect()
    }
}

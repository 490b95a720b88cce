use crate::lookup::Season;
use crate::util::display_quantity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Header names of the four columns the loader keeps.
pub const COL_REGION: &str = "HBT";
pub const COL_REGION_LEGACY: &str = "HBT2014";
pub const COL_DRUG: &str = "BNFItemDescription";
pub const COL_QUANTITY: &str = "PaidQuantity";
pub const COL_YEAR_MONTH: &str = "PaidDateMonth";

/// One line of a prescribing extract, restricted to the retained columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "HBT", alias = "HBT2014")]
    pub region_code: String,
    #[serde(rename = "BNFItemDescription")]
    pub drug_description: String,
    #[serde(rename = "PaidQuantity")]
    pub paid_quantity: Option<u64>,
    #[serde(rename = "PaidDateMonth")]
    pub paid_year_month: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRecord {
    pub board: String,
    pub drug_description: String,
    pub date: NaiveDate,
    pub year: String,
    pub season: Season,
    pub paid_quantity: Option<u64>,
}

/// One aggregate row per (board, season, year).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct SeasonalTotal {
    #[serde(rename = "Board")]
    #[tabled(rename = "Board")]
    pub board: String,
    #[serde(rename = "Season")]
    #[tabled(rename = "Season")]
    pub season: Season,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: String,
    #[serde(rename = "TotalQuantity")]
    #[tabled(rename = "TotalQuantity", display_with = "display_quantity")]
    pub total_quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct SeasonPivotRow {
    #[serde(rename = "Board")]
    #[tabled(rename = "Board")]
    pub board: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: String,
    #[serde(rename = "Winter")]
    #[tabled(rename = "Winter", display_with = "display_quantity")]
    pub winter: u64,
    #[serde(rename = "Spring")]
    #[tabled(rename = "Spring", display_with = "display_quantity")]
    pub spring: u64,
    #[serde(rename = "Summer")]
    #[tabled(rename = "Summer", display_with = "display_quantity")]
    pub summer: u64,
    #[serde(rename = "Autumn")]
    #[tabled(rename = "Autumn", display_with = "display_quantity")]
    pub autumn: u64,
    #[serde(rename = "Total")]
    #[tabled(rename = "Total", display_with = "display_quantity")]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct BoardSummaryRow {
    #[serde(rename = "Board")]
    #[tabled(rename = "Board")]
    pub board: String,
    #[serde(rename = "TotalQuantity")]
    #[tabled(rename = "TotalQuantity", display_with = "display_quantity")]
    pub total_quantity: u64,
    #[serde(rename = "Groups")]
    #[tabled(rename = "Groups")]
    pub groups: usize,
    #[serde(rename = "PeakSeason")]
    #[tabled(rename = "PeakSeason")]
    pub peak_season: Season,
    #[serde(rename = "PeakYear")]
    #[tabled(rename = "PeakYear")]
    pub peak_year: String,
    #[serde(rename = "PeakQuantity")]
    #[tabled(rename = "PeakQuantity", display_with = "display_quantity")]
    pub peak_quantity: u64,
}

/// Counts collected while a run moves through the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub files_read: usize,
    pub rows_loaded: usize,
    pub rows_kept: usize,
    pub groups: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run: String,
    pub first_year: i32,
    pub last_year: i32,
    #[serde(flatten)]
    pub pipeline: PipelineReport,
    pub total_quantity: u64,
}

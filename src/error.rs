use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no input files match {pattern} for years {first_year}-{last_year}")]
    MissingInput {
        pattern: String,
        first_year: i32,
        last_year: i32,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    UnparseableFile {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column {column}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("paid year-month {value:?} is not a valid YYYYMM date")]
    UnparseableDate { value: String },

    #[error("region code {code} has no board mapping")]
    UnknownRegionCode { code: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

use crate::error::{ReportError, Result};
use crate::lookup::BoardTable;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// One analysis run: a year range and the region codes allowed through the
/// filter for it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    pub name: String,
    pub first_year: i32,
    pub last_year: i32,
    pub region_codes: Vec<String>,
}

impl RunConfig {
    pub fn allowed_codes(&self) -> HashSet<String> {
        self.region_codes.iter().cloned().collect()
    }

    /// Reject ranges that select nothing and allow-lists that name a code the
    /// board table cannot map.
    pub fn validate(&self, boards: &BoardTable) -> Result<()> {
        if self.first_year > self.last_year {
            return Err(ReportError::Config(format!(
                "run '{}': first_year {} is after last_year {}",
                self.name, self.first_year, self.last_year
            )));
        }
        if self.region_codes.is_empty() {
            return Err(ReportError::Config(format!(
                "run '{}': region_codes is empty",
                self.name
            )));
        }
        if let Some(code) = self.region_codes.iter().find(|c| !boards.contains(c)) {
            return Err(ReportError::UnknownRegionCode { code: code.clone() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    #[serde(default)]
    pub parallel: bool,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    /// Overrides the built-in board table when present.
    #[serde(default)]
    pub boards: Option<BTreeMap<String, String>>,
    #[serde(default = "default_runs")]
    pub runs: Vec<RunConfig>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_file_prefix() -> String {
    "pitc".to_string()
}

fn default_preview_rows() -> usize {
    8
}

fn run(name: &str, first_year: i32, last_year: i32, codes: &[&str]) -> RunConfig {
    RunConfig {
        name: name.to_string(),
        first_year,
        last_year,
        region_codes: codes.iter().map(|c| c.to_string()).collect(),
    }
}

/// Pre-2019 extracts use the old Glasgow and Lanarkshire codes; later ones
/// use the re-coded boards. Lothian keeps its code throughout.
fn default_runs() -> Vec<RunConfig> {
    vec![
        run("2016-2018", 2016, 2018, &["S08000021", "S08000023", "S08000024"]),
        run("2019", 2019, 2019, &["S08000031", "S08000032", "S08000024"]),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            parallel: false,
            preview_rows: default_preview_rows(),
            boards: None,
            runs: default_runs(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn board_table(&self) -> BoardTable {
        match &self.boards {
            Some(map) => BoardTable::new(map.clone()),
            None => BoardTable::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs.is_empty() {
            return Err(ReportError::Config("no runs configured".to_string()));
        }
        let boards = self.board_table();
        let mut names = HashSet::new();
        for run in &self.runs {
            if !names.insert(run.name.as_str()) {
                return Err(ReportError::Config(format!("duplicate run name '{}'", run.name)));
            }
            run.validate(&boards)?;
        }
        Ok(())
    }
}

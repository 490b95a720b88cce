// Input discovery: `<prefix><YYYY>[<mon>].csv` files under a data directory.
use crate::error::{ReportError, Result};
use glob::{glob, Pattern};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

static FILE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<prefix>.*?)(?P<year>\d{4})(?P<month>[A-Za-z]{3})?\.csv$")
        .expect("file name regex is valid")
});

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Year and optional month encoded in an extract's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExtractName {
    pub year: i32,
    pub month: Option<u32>,
}

/// Parse a file name like `pitc2019dec.csv` for the given prefix.
pub fn parse_file_name(prefix: &str, file_name: &str) -> Option<ExtractName> {
    let caps = FILE_NAME_RE.captures(file_name)?;
    if &caps["prefix"] != prefix {
        return None;
    }
    let year: i32 = caps["year"].parse().ok()?;
    let month = match caps.name("month") {
        Some(m) => {
            let abbrev = m.as_str().to_ascii_lowercase();
            let idx = MONTHS.iter().position(|name| *name == abbrev)?;
            Some(idx as u32 + 1)
        }
        None => None,
    };
    Some(ExtractName { year, month })
}

/// Find every extract for `prefix` in `dir` whose year falls in
/// `first_year..=last_year`, ordered by (year, month).
///
/// No match is a `MissingInput` error.
pub fn discover_files(
    dir: &Path,
    prefix: &str,
    first_year: i32,
    last_year: i32,
) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/{}*.csv",
        Pattern::escape(&dir.to_string_lossy()),
        Pattern::escape(prefix)
    );
    let mut found: Vec<(ExtractName, PathBuf)> = glob(&pattern)?
        .filter_map(|p| p.ok())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let parsed = parse_file_name(prefix, name)?;
            (first_year..=last_year)
                .contains(&parsed.year)
                .then_some((parsed, path))
        })
        .collect();

    if found.is_empty() {
        return Err(ReportError::MissingInput {
            pattern,
            first_year,
            last_year,
        });
    }

    found.sort();
    debug!(count = found.len(), %pattern, "discovered extracts");
    Ok(found.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_year_and_optional_month() {
        assert_eq!(
            parse_file_name("pitc", "pitc2019dec.csv"),
            Some(ExtractName { year: 2019, month: Some(12) })
        );
        assert_eq!(
            parse_file_name("pitc", "pitc2017.csv"),
            Some(ExtractName { year: 2017, month: None })
        );
        assert_eq!(
            parse_file_name("pitc", "pitc2018MAR.csv"),
            Some(ExtractName { year: 2018, month: Some(3) })
        );
    }

    #[test]
    fn rejects_other_prefixes_and_shapes() {
        assert_eq!(parse_file_name("pitc", "other2019dec.csv"), None);
        assert_eq!(parse_file_name("pitc", "pitc2019xyz.csv"), None);
        assert_eq!(parse_file_name("pitc", "pitc19.csv"), None);
        assert_eq!(parse_file_name("pitc", "pitc2019dec.txt"), None);
    }

    #[test]
    fn discovers_files_in_year_range_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in [
            "pitc2019feb.csv",
            "pitc2019jan.csv",
            "pitc2018dec.csv",
            "pitc2020jan.csv",
            "notes2019jan.csv",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = discover_files(dir.path(), "pitc", 2018, 2019).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["pitc2018dec.csv", "pitc2019jan.csv", "pitc2019feb.csv"]);
    }

    #[test]
    fn no_match_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pitc2015jan.csv"), "").unwrap();
        let err = discover_files(dir.path(), "pitc", 2016, 2018).unwrap_err();
        assert!(matches!(err, ReportError::MissingInput { first_year: 2016, .. }));
    }
}

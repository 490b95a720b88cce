use crate::error::{ReportError, Result};
use crate::types::{RawRow, COL_DRUG, COL_QUANTITY, COL_REGION, COL_REGION_LEGACY, COL_YEAR_MONTH};
use csv::{ReaderBuilder, StringRecord};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

fn unparseable(path: &Path, source: csv::Error) -> ReportError {
    ReportError::UnparseableFile {
        path: path.to_path_buf(),
        source,
    }
}

/// Each entry lists the header names accepted for one retained column.
const REQUIRED_COLUMNS: [&[&str]; 4] = [
    &[COL_REGION, COL_REGION_LEGACY],
    &[COL_DRUG],
    &[COL_QUANTITY],
    &[COL_YEAR_MONTH],
];

fn check_columns(path: &Path, headers: &StringRecord) -> Result<()> {
    for accepted in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| accepted.contains(&h)) {
            return Err(ReportError::MissingColumn {
                path: path.to_path_buf(),
                column: accepted[0].to_string(),
            });
        }
    }
    Ok(())
}

/// Read one extract. Any unreadable line fails the whole file.
pub fn load_file(path: &Path) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| unparseable(path, e))?;
    let headers = rdr.headers().map_err(|e| unparseable(path, e))?.clone();
    check_columns(path, &headers)?;

    let rows = rdr
        .deserialize::<RawRow>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| unparseable(path, e))?;
    debug!(path = %path.display(), rows = rows.len(), "loaded extract");
    Ok(rows)
}

/// Read every file and concatenate the rows. Fails on the first bad file;
/// there is no partial result.
pub fn load_files(paths: &[PathBuf], parallel: bool) -> Result<Vec<RawRow>> {
    let per_file: Vec<Vec<RawRow>> = if parallel {
        paths.par_iter().map(|p| load_file(p)).collect::<Result<_>>()?
    } else {
        paths.iter().map(|p| load_file(p)).collect::<Result<_>>()?
    };
    Ok(per_file.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "HBT,DMDCode,BNFItemCode,BNFItemDescription,NumberOfPaidItems,PaidQuantity,GrossIngredientCost,PaidDateMonth";

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn keeps_only_the_four_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "pitc2019nov.csv",
            &format!("{HEADER}\nS08000031,123,0403,SERTRALINE 50MG TABLETS,2,56,3.10,201911\n"),
        );
        let rows = load_file(&path).unwrap();
        assert_eq!(
            rows,
            vec![RawRow {
                region_code: "S08000031".into(),
                drug_description: "SERTRALINE 50MG TABLETS".into(),
                paid_quantity: Some(56),
                paid_year_month: "201911".into(),
            }]
        );
    }

    #[test]
    fn accepts_legacy_region_header_and_empty_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "pitc2016.csv",
            "HBT2014,BNFItemDescription,PaidQuantity,PaidDateMonth\nS08000021,FLUOXETINE 20MG,,201601\n",
        );
        let rows = load_file(&path).unwrap();
        assert_eq!(rows[0].region_code, "S08000021");
        assert_eq!(rows[0].paid_quantity, None);
    }

    #[test]
    fn missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "pitc2019.csv",
            "HBT,BNFItemDescription,PaidDateMonth\nS08000031,SERTRALINE,201911\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { ref column, .. } if column == COL_QUANTITY));
    }

    #[test]
    fn bad_line_or_missing_file_fails_the_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(
            dir.path(),
            "a.csv",
            "HBT,BNFItemDescription,PaidQuantity,PaidDateMonth\nS08000031,SERTRALINE,10,201911\n",
        );
        let bad = write(
            dir.path(),
            "b.csv",
            "HBT,BNFItemDescription,PaidQuantity,PaidDateMonth\nS08000031,SERTRALINE,lots,201911\n",
        );
        let err = load_files(&[good.clone(), bad], false).unwrap_err();
        assert!(matches!(err, ReportError::UnparseableFile { .. }));

        let missing = dir.path().join("missing.csv");
        let err = load_files(&[good, missing], true).unwrap_err();
        assert!(matches!(err, ReportError::UnparseableFile { .. }));
    }

    #[test]
    fn concatenates_without_deduplication() {
        let dir = tempfile::tempdir().unwrap();
        let body = "HBT,BNFItemDescription,PaidQuantity,PaidDateMonth\nS08000031,SERTRALINE,10,201911\n";
        let a = write(dir.path(), "a.csv", body);
        let b = write(dir.path(), "b.csv", body);
        assert_eq!(load_files(&[a.clone(), b.clone()], false).unwrap().len(), 2);
        assert_eq!(load_files(&[a, b], true).unwrap().len(), 2);
    }
}

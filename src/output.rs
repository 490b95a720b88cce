use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Markdown table of the first `max_rows` rows.
pub fn render_preview<T>(rows: &[T], max_rows: usize) -> String
where
    T: Tabled,
{
    if rows.is_empty() {
        return "(no rows)".to_string();
    }
    Table::new(rows.iter().take(max_rows))
        .with(Style::markdown())
        .to_string()
}

pub fn preview_table<T>(title: &str, rows: &[T], max_rows: usize)
where
    T: Tabled,
{
    println!("{}\n", title);
    println!("{}", render_preview(rows, max_rows));
    if rows.len() > max_rows {
        println!("({} of {} rows shown)", max_rows, rows.len());
    }
    println!();
}

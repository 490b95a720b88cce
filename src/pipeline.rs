// The seasonal aggregation pipeline: load → filter → transform → aggregate.
use crate::aggregate::aggregate;
use crate::config::{Config, RunConfig};
use crate::discover::discover_files;
use crate::error::Result;
use crate::filter::filter_rows;
use crate::loader::load_files;
use crate::transform::Transformer;
use crate::types::{PipelineReport, SeasonalTotal};
use crate::util::format_int;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{info, info_span};

/// Aggregate SSRI paid quantities from `paths` for the allowed region codes.
///
/// Each call is independent: the output is a pure function of the file
/// contents and the allow-list, whatever order the files are given in.
pub fn process_prescription_data(
    paths: &[PathBuf],
    allowed_codes: &HashSet<String>,
    transformer: &Transformer,
    parallel: bool,
) -> Result<(Vec<SeasonalTotal>, PipelineReport)> {
    let raw = load_files(paths, parallel)?;
    let rows_loaded = raw.len();

    let kept = filter_rows(raw, allowed_codes);
    let rows_kept = kept.len();

    let derived = transformer.transform(kept)?;
    let totals = aggregate(&derived);

    let report = PipelineReport {
        files_read: paths.len(),
        rows_loaded,
        rows_kept,
        groups: totals.len(),
    };
    info!(
        files = report.files_read,
        loaded = %format_int(rows_loaded),
        kept = %format_int(rows_kept),
        groups = report.groups,
        "aggregated prescribing data"
    );
    Ok((totals, report))
}

/// Discover the files for one configured run and aggregate them.
pub fn execute_run(
    config: &Config,
    run: &RunConfig,
    transformer: &Transformer,
) -> Result<(Vec<SeasonalTotal>, PipelineReport)> {
    let _span = info_span!("run", name = %run.name).entered();
    run.validate(transformer.boards())?;

    let paths = discover_files(
        &config.data_dir,
        &config.file_prefix,
        run.first_year,
        run.last_year,
    )?;
    info!(
        files = paths.len(),
        first_year = run.first_year,
        last_year = run.last_year,
        "processing run"
    );
    process_prescription_data(&paths, &run.allowed_codes(), transformer, config.parallel)
}

// Entry point and high-level CLI flow.
//
// For every configured run the binary discovers the extracts, aggregates
// them, prints Markdown previews and (unless `--no-export`) writes the
// report CSVs. One `summary.json` covers all runs.
use anyhow::{Context, Result};
use clap::Parser;
use ssri_report::config::Config;
use ssri_report::lookup::SeasonTable;
use ssri_report::types::RunSummary;
use ssri_report::util::format_int;
use ssri_report::{execute_run, output, reports, Transformer};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "ssri_report", about = "Seasonal SSRI prescribing totals by health board")]
struct Args {
    /// TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the prescribing extracts
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory the report files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Only execute the run with this name
    #[arg(long)]
    run: Option<String>,

    /// Read extract files in parallel
    #[arg(long)]
    parallel: bool,

    /// Rows shown in each console preview
    #[arg(long)]
    preview_rows: Option<usize>,

    /// Print previews without writing report files
    #[arg(long)]
    no_export: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(n) = args.preview_rows {
        config.preview_rows = n;
    }
    config.parallel |= args.parallel;
    if let Some(name) = &args.run {
        config.runs.retain(|r| &r.name == name);
        if config.runs.is_empty() {
            anyhow::bail!("no configured run named '{}'", name);
        }
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let transformer = Transformer::new(SeasonTable::default(), config.board_table());

    if !args.no_export {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("creating {}", config.output_dir.display()))?;
    }

    let mut summaries: Vec<RunSummary> = Vec::new();
    for run in &config.runs {
        let (totals, pipeline) = execute_run(&config, run, &transformer)
            .with_context(|| format!("run '{}' failed", run.name))?;
        let pivot = reports::season_pivot(&totals);
        let boards = reports::board_summary(&totals);
        let summary =
            reports::run_summary(&run.name, run.first_year, run.last_year, pipeline, &totals);

        println!(
            "Run {} ({}–{}): {} files, {} rows loaded, {} SSRI rows kept\n",
            run.name,
            run.first_year,
            run.last_year,
            summary.pipeline.files_read,
            format_int(summary.pipeline.rows_loaded),
            format_int(summary.pipeline.rows_kept)
        );
        output::preview_table("Seasonal totals", &totals, config.preview_rows);
        output::preview_table("Totals by season", &pivot, config.preview_rows);
        output::preview_table("Board summary", &boards, config.preview_rows);

        if !args.no_export {
            let dir = &config.output_dir;
            output::write_csv(&dir.join(format!("{}_seasonal_totals.csv", run.name)), &totals)?;
            output::write_csv(&dir.join(format!("{}_season_pivot.csv", run.name)), &pivot)?;
            output::write_csv(&dir.join(format!("{}_board_summary.csv", run.name)), &boards)?;
            info!(run = %run.name, dir = %dir.display(), "exported report tables");
        }
        summaries.push(summary);
    }

    if !args.no_export {
        let path = config.output_dir.join("summary.json");
        output::write_json(&path, &summaries)?;
        info!(path = %path.display(), runs = summaries.len(), "wrote summary");
    }
    Ok(())
}

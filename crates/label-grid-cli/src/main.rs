mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use logger::StderrLogger;

#[derive(Parser)]
#[command(name = "lgrid", about = "Label sheet layout CLI", version)]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SettingsArgs {
    /// JSON file with default print settings (built-in A4 defaults otherwise)
    #[arg(long)]
    defaults: Option<PathBuf>,

    /// Override a print setting, e.g. --set page_width=200mm (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay labels out on label sheets
    Layout {
        #[command(flatten)]
        settings: SettingsArgs,

        /// File with one pre-rendered label fragment per line
        #[arg(short, long, conflicts_with = "count")]
        labels: Option<PathBuf>,

        /// Generate this many numbered placeholder labels instead
        #[arg(long)]
        count: Option<usize>,

        /// Number of empty slots before the first label
        #[arg(long, default_value = "0")]
        blank_spaces: usize,

        /// Order in which labels fill the grid
        #[arg(long, default_value = "row", value_enum)]
        fill: FillArg,

        /// Write an HTML print preview to this file
        #[arg(long)]
        html: Option<PathBuf>,

        /// Print every slot as JSON
        #[arg(long)]
        json: bool,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,

        /// Fail when the labels do not fit on the page
        #[arg(long)]
        strict: bool,
    },

    /// Show the resolved print settings
    Config {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FillArg {
    Row,
    Column,
}

impl From<FillArg> for label_grid::FillOrder {
    fn from(arg: FillArg) -> Self {
        match arg {
            FillArg::Row => Self::ByRow,
            FillArg::Column => Self::ByColumn,
        }
    }
}

async fn resolve_config(settings: &SettingsArgs) -> Result<label_grid::PrintConfig> {
    let defaults = match &settings.defaults {
        Some(path) => label_grid::load_config_map(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => label_grid::plugin_defaults(),
    };
    let overrides = label_grid::overrides_from_pairs(settings.overrides.iter().map(String::as_str))?;
    log::debug!("{} default(s), {} override(s)", defaults.len(), overrides.len());

    Ok(label_grid::PrintConfig::new(&defaults, &overrides)?)
}

async fn read_labels(labels: Option<PathBuf>, count: Option<usize>) -> Result<Vec<String>> {
    match (labels, count) {
        (Some(path), _) => {
            let contents = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(contents
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect())
        }
        (None, Some(count)) => Ok((1..=count).map(|n| format!("Label {}", n)).collect()),
        (None, None) => bail!("either --labels or --count is required"),
    }
}

fn print_statistics(layout: &label_grid::SheetLayout, stats: &label_grid::SheetStatistics) {
    println!("Label Sheet Statistics:");
    println!("  Labels: {}", stats.labels);
    println!("  Blank spaces: {}", stats.blank_spaces);
    println!(
        "  Grid: {} columns x {} rows ({} per page)",
        layout.columns, layout.rows, stats.cells_per_page
    );
    println!("  Pages: {}", stats.pages);
    println!("  Unused cells: {}", stats.unused_cells);
    println!(
        "  Fits page: {}",
        if layout.fit.fits() { "yes" } else { "no" }
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Layout {
            settings,
            labels,
            count,
            blank_spaces,
            fill,
            html,
            json,
            stats_only,
            strict,
        } => {
            let config = resolve_config(&settings).await?;
            let labels = read_labels(labels, count).await?;

            let layout = if strict {
                label_grid::compose_sheet_strict(&config, &labels, blank_spaces, fill.into())?
            } else {
                label_grid::compose_sheet(&config, &labels, blank_spaces, fill.into())?
            };

            let stats = label_grid::calculate_statistics(&layout);
            if json && !stats_only {
                // Keep stdout parseable as JSON
                log::info!(
                    "{} label(s), {} blank, {} page(s), fits page: {}",
                    stats.labels,
                    stats.blank_spaces,
                    stats.pages,
                    layout.fit.fits()
                );
                println!("{}", serde_json::to_string_pretty(&layout.slots)?);
            } else {
                print_statistics(&layout, &stats);
                if stats_only {
                    return Ok(());
                }
            }

            if let Some(path) = html {
                tokio::fs::write(&path, label_grid::render_html(&layout))
                    .await
                    .with_context(|| format!("writing {}", path.display()))?;
                log::info!("Preview → {}", path.display());
            }
        }

        Commands::Config { settings } => {
            let config = resolve_config(&settings).await?;
            let unit = config.shared_unit()?;

            for (name, value) in config.effective_values() {
                match value {
                    Some(value) => println!("{:<20} {}", name, value),
                    None => println!("{:<20} (unset)", name),
                }
            }
            println!(
                "{:<20} {}",
                "unit",
                if unit.is_empty() { "(none)" } else { unit.as_str() }
            );
        }
    }

    Ok(())
}

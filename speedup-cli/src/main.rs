use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use speedup_estimates::{
    DEFAULT_CRITERION_DIR, RatioConfig, RatioTable, compute_ratios, load, write_table,
};
use speedup_plots::{
    BasePlotOptions, MAX_PLOT_DIMENSION, MIN_PLOT_DIMENSION, SpeedupPlotOptions,
    render_standard_charts,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod viewer;

/// Speedup - charts and tables of old/new join benchmark timings
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "speedup")]
#[command(about = "Compare old and new join implementations from Criterion results", long_about = None)]
struct Cli {
    /// What to do with the speedups
    #[arg(value_enum, value_name = "MODE")]
    mode: Mode,

    /// Criterion output directory holding the join benchmark results
    #[arg(long, value_name = "DIR", default_value = DEFAULT_CRITERION_DIR)]
    criterion_dir: PathBuf,

    /// Directory the charts are written to in save mode
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Tag of the reference implementation (numerator of the speedup)
    #[arg(long, value_name = "TAG", default_value = "old")]
    baseline: String,

    /// Tag of the implementation under test (denominator of the speedup)
    #[arg(long, value_name = "TAG", default_value = "new")]
    candidate: String,

    /// Chart width in pixels
    #[arg(long, default_value = "1000", value_parser = plot_dimension())]
    width: u32,

    /// Chart height in pixels
    #[arg(long, default_value = "600", value_parser = plot_dimension())]
    height: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Chart sides the renderer accepts
fn plot_dimension() -> clap::builder::RangedU64ValueParser<u32> {
    clap::builder::RangedU64ValueParser::new()
        .range(u64::from(MIN_PLOT_DIMENSION)..=u64::from(MAX_PLOT_DIMENSION))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Mode {
    /// Render the charts and open them in the image viewer
    Show,
    /// Render the charts into the output directory
    Save,
    /// Print the speedup table to stdout
    Print,
}

/// Everything the pipeline needs, folded from the command line
#[derive(Debug, Clone)]
struct AnalysisConfig {
    criterion_dir: PathBuf,
    output_dir: PathBuf,
    ratios: RatioConfig,
    plot: SpeedupPlotOptions,
}

impl AnalysisConfig {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let base = BasePlotOptions::new()
            .width(cli.width)
            .height(cli.height)
            .build()?;
        let plot = SpeedupPlotOptions::new().base(base).build()?;

        Ok(Self {
            criterion_dir: cli.criterion_dir.clone(),
            output_dir: cli.output_dir.clone(),
            ratios: RatioConfig {
                baseline: cli.baseline.clone(),
                candidate: cli.candidate.clone(),
            },
            plot,
        })
    }
}

/// Outcome of reading the command line
#[derive(Debug)]
enum Invocation {
    Run(Cli),
    /// `--help` / `--version`, already formatted by clap
    Exit(clap::Error),
    /// Anything unrecognised; the usage line is printed and the run ends cleanly
    Usage(String),
}

fn parse_args<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "speedup".to_string());

    match Cli::try_parse_from(&args) {
        Ok(cli) => Invocation::Run(cli),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Invocation::Exit(e)
        }
        Err(_) => Invocation::Usage(program),
    }
}

fn usage(program: &str) -> String {
    format!("usage: {program} (show | save | print)")
}

fn main() -> Result<()> {
    let cli = match parse_args(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Exit(e) => {
            e.print()?;
            return Ok(());
        }
        Invocation::Usage(program) => {
            println!("{}", usage(&program));
            return Ok(());
        }
    };

    // Logs go to stderr so the printed table stays alone on stdout
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AnalysisConfig::from_cli(&cli)?;
    run(cli.mode, &config)
}

fn run(mode: Mode, config: &AnalysisConfig) -> Result<()> {
    debug!("Configuration: {config:?}");

    let dataset = load(&config.criterion_dir).with_context(|| {
        format!(
            "failed to load benchmark results from {}",
            config.criterion_dir.display()
        )
    })?;
    let table = compute_ratios(&dataset, &config.ratios)?;

    match mode {
        Mode::Print => {
            let stdout = std::io::stdout();
            write_table(&table, &mut stdout.lock())?;
        }
        Mode::Save => {
            let paths = save_charts(&table, &config.plot, &config.output_dir)?;
            info!(
                "Saved {} chart(s) to {}",
                paths.len(),
                config.output_dir.display()
            );
        }
        Mode::Show => {
            let dir = viewer::create_show_dir()?;
            let paths = save_charts(&table, &config.plot, &dir)?;
            let opened = viewer::open_all(&dir, &paths);
            debug!("Opened {opened} of {} chart(s)", paths.len());
        }
    }

    Ok(())
}

/// Render the standard charts and write them into `dir`
fn save_charts(
    table: &RatioTable,
    options: &SpeedupPlotOptions,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    render_standard_charts(table, options)?
        .into_iter()
        .map(|chart| {
            let path = dir.join(&chart.file_name);
            std::fs::write(&path, &chart.bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("Wrote {} ({} bytes)", path.display(), chart.bytes.len());
            Ok(path)
        })
        .collect()
}

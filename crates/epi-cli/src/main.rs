//! episim — command-line front end for the epidemic simulation engine.
//!
//! Parameters come from three layers, later ones winning: built-in defaults,
//! a JSON file named with `--params`, and individual flags.  Output lands in
//! `--out` in the format chosen with `--format`.
//!
//! ```text
//! episim -n 500 --seed 7 --workforce --out runs/500 --format jsonl
//! RUST_LOG=debug episim --params base.json --day-cap 30
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;

use epi_agent::Population;
use epi_core::{Day, SimParams, WorkforceParams};
use epi_output::{CsvWriter, JsonlWriter, OutputWriter, SimOutputObserver};
use epi_sim::{DayStats, Sim, SimBuilder, SimObserver, StopReason};

// ── Arguments ─────────────────────────────────────────────────────────────────

/// Agent-based epidemic simulation on a wrapped 2-D grid.
#[derive(Parser, Debug)]
#[command(name = "episim", version, about)]
struct Args {
    /// Number of agents in the population.
    #[arg(short = 'n', long)]
    population_size: Option<u32>,

    /// World width; positions wrap at the edge.
    #[arg(long)]
    x_limit: Option<u32>,

    /// World height; positions wrap at the edge.
    #[arg(long)]
    y_limit: Option<u32>,

    /// Transmission range: contacts strictly closer than this can infect.
    #[arg(long)]
    dist_limit: Option<f64>,

    /// Fraction of the population that takes a random step each day.
    #[arg(long)]
    motion_rate: Option<f64>,

    /// Run label stamped on JSONL output; defaults to one derived from the
    /// seed.
    #[arg(long)]
    simulation_id: Option<String>,

    /// RNG seed; the same seed reproduces the run exactly.
    #[arg(long)]
    seed: Option<u64>,

    /// Hard stop after this many simulated days.
    #[arg(long)]
    day_cap: Option<u32>,

    /// Assign occupations and track the daily work-output percentage.
    #[arg(long)]
    workforce: bool,

    /// Days between agent-position snapshots; 0 disables them.
    #[arg(long)]
    snapshot_interval: Option<u32>,

    /// JSON file with base parameters; explicit flags override its fields.
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Output directory, created if missing.
    #[arg(long, default_value = "output")]
    out: PathBuf,

    /// Output backend.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Open an interactive plot after the run (not built in; warns).
    #[arg(long)]
    show_plot: bool,

    /// Keep per-day position snapshots so the run can be plotted later.
    #[arg(long)]
    save_plot: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Csv,
    Jsonl,
    #[cfg(feature = "sqlite")]
    Sqlite,
}

impl Format {
    fn as_str(self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Jsonl => "jsonl",
            #[cfg(feature = "sqlite")]
            Format::Sqlite => "sqlite",
        }
    }
}

// ── Parameter assembly ────────────────────────────────────────────────────────

/// Base parameters from `--params` (or the defaults), with any explicit
/// flags layered on top.  Validation is left to the sim builder.
fn build_params(args: &Args) -> Result<SimParams> {
    let mut params = match &args.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimParams::default(),
    };

    if let Some(n) = args.population_size {
        params.population_size = n;
    }
    if let Some(x) = args.x_limit {
        params.x_limit = x;
    }
    if let Some(y) = args.y_limit {
        params.y_limit = y;
    }
    if let Some(d) = args.dist_limit {
        params.dist_limit = d;
    }
    if let Some(m) = args.motion_rate {
        params.motion_rate = m;
    }
    if let Some(id) = &args.simulation_id {
        params.simulation_id = id.clone();
    }
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(cap) = args.day_cap {
        params.day_cap = cap;
    }
    if let Some(interval) = args.snapshot_interval {
        params.snapshot_interval_days = interval;
    }
    if args.workforce && params.workforce.is_none() {
        params.workforce = Some(WorkforceParams::default());
    }
    // Plot data is cut from the position snapshots, so saving a plot needs
    // them switched on.
    if args.save_plot && params.snapshot_interval_days == 0 {
        params.snapshot_interval_days = 1;
    }

    Ok(params)
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    stats_rows:    usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self {
            inner,
            snapshot_rows: 0,
            stats_rows: 0,
        }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_day_end(&mut self, day: Day, stats: &DayStats) {
        self.stats_rows += 1;
        self.inner.on_day_end(day, stats);
    }

    fn on_snapshot(&mut self, day: Day, population: &Population, stats: &DayStats) {
        self.snapshot_rows += population.len();
        self.inner.on_snapshot(day, population, stats);
    }

    fn on_sim_end(&mut self, final_day: Day, reason: StopReason) {
        self.inner.on_sim_end(final_day, reason);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = build_params(&args)?;
    let label = params.simulation_label();

    if args.show_plot {
        log::warn!(
            "--show-plot: interactive plotting is not built in; \
             use --save-plot and chart the snapshot files instead"
        );
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    println!("=== episim — agent epidemic simulation ===");
    println!(
        "Agents: {}  |  World: {}x{}  |  Seed: {}",
        params.population_size, params.x_limit, params.y_limit, params.seed
    );
    println!(
        "Run label: {label}  |  Output: {} ({})",
        args.out.display(),
        args.format.as_str()
    );
    println!();

    match args.format {
        Format::Csv => run_with_writer(params, CsvWriter::new(&args.out)?),
        Format::Jsonl => run_with_writer(params, JsonlWriter::new(&args.out, &label)?),
        #[cfg(feature = "sqlite")]
        Format::Sqlite => run_with_writer(params, epi_output::SqliteWriter::new(&args.out)?),
    }
}

fn run_with_writer<W: OutputWriter>(params: SimParams, writer: W) -> Result<()> {
    let mut sim = SimBuilder::new(params).build()?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    let reason = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        log::error!("output error: {e}");
    }

    print_summary(&sim, reason, elapsed.as_secs_f64(), &obs);
    Ok(())
}

fn print_summary<W: OutputWriter>(
    sim: &Sim,
    reason: StopReason,
    elapsed_secs: f64,
    obs: &CountingObserver<W>,
) {
    println!("Simulation complete in {elapsed_secs:.3} s");
    println!("  stopped on {}: {}", sim.day, reason);
    println!("  agent snapshot rows: {}", obs.snapshot_rows);
    println!("  daily stats rows:    {}", obs.stats_rows);
    println!();

    let Some(last) = sim.latest_stats() else {
        return;
    };
    println!("{:<14} {:>8}", "State", "Count");
    println!("{}", "-".repeat(23));
    println!("{:<14} {:>8}", "healthy", last.healthy);
    println!("{:<14} {:>8}", "infected", last.infected);
    println!("{:<14} {:>8}", "hospitalized", last.hospitalized);
    println!("{:<14} {:>8}", "cured", last.cured);
    println!("{:<14} {:>8}", "dead", last.dead);
    if let Some(pct) = last.work_percentage {
        println!("{:<14} {:>7.1}%", "work output", pct);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

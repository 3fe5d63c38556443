mod app;

use anyhow::Result;
use app::AgendaFilter;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use study_planner::CalendarDate;
use tracing_subscriber::EnvFilter;

/// Spaced-repetition review planner for study objects
#[derive(Parser)]
#[command(name = "study-planner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan topic reviews on a calendar with an SM-2 style interval formula")]
struct Cli {
    /// JSON file with interval constants (a, b, c, d, theta); overrides a study object's smConfig
    #[arg(long, global = true)]
    sm_config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the interval in days for a review history (grades 0-5, oldest first)
    Interval {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        scores: Vec<i32>,
    },

    /// Add days to a yyyy-MM-dd date
    Shift {
        date: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },

    /// Print the review dates of a single topic
    Schedule { date: CalendarDate, label: String },

    /// Print the merged review calendar of a study object file
    Agenda {
        /// Study object JSON file
        file: PathBuf,
        /// Only this day
        #[arg(long, conflicts_with_all = ["from", "to"])]
        on: Option<CalendarDate>,
        /// First day to print (inclusive)
        #[arg(long)]
        from: Option<CalendarDate>,
        /// Last day to print (inclusive)
        #[arg(long)]
        to: Option<CalendarDate>,
        /// Also write the whole calendar as JSON to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Create a study object file
    Init {
        /// Output file path
        file: PathBuf,
        #[arg(long)]
        name: Option<String>,
        /// First study day (defaults to today)
        #[arg(long)]
        start: Option<CalendarDate>,
        /// Text file with one topic per line
        #[arg(long)]
        toc: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let params = cli.sm_config.as_deref().map(app::load_params).transpose()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Interval { scores } => {
            app::run_interval(&scores, &params.unwrap_or_default(), &mut stdout)
        }
        Commands::Shift { date, days } => app::run_shift(&date, days, &mut stdout),
        Commands::Schedule { date, label } => {
            app::run_schedule(date, &label, &params.unwrap_or_default(), &mut stdout)
        }
        Commands::Agenda {
            file,
            on,
            from,
            to,
            export,
        } => {
            let filter = AgendaFilter { on, from, to };
            app::run_agenda(&file, &filter, params, export.as_deref(), &mut stdout)
        }
        Commands::Init {
            file,
            name,
            start,
            toc,
        } => app::run_init(&file, name, start, toc),
    }
}

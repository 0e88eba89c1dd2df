//! Command-line driver for the planner core.
//!
//! # Responsibility
//! - Verify `tripcanvas_core` linkage (`ping`).
//! - Drive a handful of planner commands against the SQLite blob store.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tripcanvas_core::db::open_db;
use tripcanvas_core::service::calendar::format_date_header;
use tripcanvas_core::{
    init_logging_from_config, ActivityDraft, CanvasBlock, Category, CommandOutcome, CoreConfig,
    PlannerCommand, PlannerService, SqliteBlobRepository, Trip,
};

#[derive(Debug, Parser)]
#[command(name = "tripcanvas", version, about = "Local itinerary planner")]
struct Cli {
    /// JSON config file; environment variables still override it.
    #[arg(long, global = true, env = "TRIPCANVAS_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite file holding the planner document.
    #[arg(long, global = true, env = "TRIPCANVAS_DB_PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core version and health probe.
    Ping,
    /// List all trips.
    List,
    /// Show one trip day by day.
    Show { trip_id: String },
    /// Create a trip spanning START..=END (YYYY-MM-DD).
    Create {
        title: String,
        start: String,
        end: String,
    },
    /// Append a day after the trip's last day.
    AddDay { trip_id: String },
    /// Add an activity to a day (0-based index).
    AddActivity {
        trip_id: String,
        day_index: usize,
        #[arg(long)]
        title: Option<String>,
        /// Time range such as "09:00 - 10:00".
        #[arg(long)]
        time: Option<String>,
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Food,
    Spot,
    Transport,
    Chill,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Food => Self::Food,
            CategoryArg::Spot => Self::Spot,
            CategoryArg::Transport => Self::Transport,
            CategoryArg::Chill => Self::Chill,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Command::Ping = cli.command {
        println!("tripcanvas_core ping={}", tripcanvas_core::ping());
        println!("tripcanvas_core version={}", tripcanvas_core::core_version());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => {
            CoreConfig::from_json_file(path)?.with_overrides(|key| std::env::var(key).ok())
        }
        None => CoreConfig::from_env(),
    };
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    init_logging_from_config(&config)?;

    let conn = open_db(&config.db_path)?;
    let mut planner = PlannerService::new(SqliteBlobRepository::new(&conn));
    info!("event=cli_start module=cli status=ok trips={}", planner.trips().len());

    match cli.command {
        Command::Ping => {}
        Command::List => {
            for trip in planner.trips() {
                println!(
                    "{}\t{}\t{}\t{} days",
                    trip.id,
                    trip.title,
                    trip.date_range_label,
                    trip.itinerary.len()
                );
            }
        }
        Command::Show { trip_id } => match planner.trip(&trip_id) {
            Some(trip) => print_trip(trip),
            None => println!("no trip `{trip_id}`"),
        },
        Command::Create { title, start, end } => {
            let outcome = planner.apply(PlannerCommand::CreateTrip {
                title,
                start_date: start,
                end_date: end,
            })?;
            if let CommandOutcome::TripCreated(trip_id) = outcome {
                println!("{trip_id}");
            }
        }
        Command::AddDay { trip_id } => {
            let outcome = planner.apply(PlannerCommand::AddDay { trip_id })?;
            report(&outcome);
        }
        Command::AddActivity {
            trip_id,
            day_index,
            title,
            time,
            category,
        } => {
            let draft = ActivityDraft {
                title,
                time_range: time,
                category: category.map(Category::from),
                ..ActivityDraft::default()
            };
            let outcome = planner.apply(PlannerCommand::AddActivity {
                trip_id,
                day_index,
                draft,
            })?;
            report(&outcome);
        }
    }
    Ok(())
}

fn report(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Unchanged => println!("unchanged"),
        CommandOutcome::Updated => println!("updated"),
        CommandOutcome::TripCreated(id)
        | CommandOutcome::ActivityCreated(id)
        | CommandOutcome::BlockCreated(id) => println!("{id}"),
    }
}

fn print_trip(trip: &Trip) {
    println!("{} ({})", trip.title, trip.date_range_label);
    for (index, day) in trip.itinerary.iter().enumerate() {
        println!("[{index}] {} · {}", day.label, format_date_header(&day.date));
        for activity in &day.activities {
            println!("    {}  {}", activity.time_range, activity.title);
            for block in &activity.blocks {
                match block {
                    CanvasBlock::Text { content, .. } => println!("        > {content}"),
                    CanvasBlock::Image { url, .. } => println!("        [image] {url}"),
                }
            }
        }
    }
}

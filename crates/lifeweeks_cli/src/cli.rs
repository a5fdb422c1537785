//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use lifeweeks_core::DayGrouping;
use std::path::PathBuf;

/// Life in weeks: see lived, current and remaining weeks of a lifespan.
#[derive(Parser, Debug)]
#[command(name = "lifeweeks", version = lifeweeks_core::core_version(), about, long_about = None)]
pub struct Cli {
    /// SQLite file holding calendar state.
    #[arg(long = "db", global = true, env = "LIFEWEEKS_DB")]
    pub db_path: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true, env = "LIFEWEEKS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "LIFEWEEKS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Age, weeks lived and life progress.
    Stats,

    /// Progress through a calendar year.
    Year {
        /// Calendar year; defaults to the current one.
        #[arg(long)]
        year: Option<i32>,
    },

    /// Text rendering of the life grid.
    Grid {
        /// Weeks per printed row.
        #[arg(long, default_value_t = 52)]
        cols: usize,
    },

    /// Set birthdate and life expectancy.
    Config {
        /// Birthdate as YYYY-MM-DD.
        #[arg(long, value_parser = parse_date)]
        birthdate: NaiveDate,

        /// Life expectancy in years.
        #[arg(long)]
        life_expectancy: u32,
    },

    /// Week notes and life events.
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },

    /// List life events in order.
    Events,

    /// Daily goals.
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },

    /// Remove all stored state.
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Set the note of one week; empty text without an event clears it.
    Set {
        /// Week index, 0 = week of birth.
        index: u32,
        text: String,
        #[arg(long)]
        category: Option<String>,
        /// Marks the week as a life event with this name.
        #[arg(long = "event")]
        event_name: Option<String>,
    },

    /// Delete the note of one week.
    Delete { index: u32 },
}

#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// Add a goal.
    Add { name: String },

    /// Remove a goal.
    Remove { id: String },

    /// Toggle completion of one day (0-based day of year).
    Toggle {
        id: String,
        day: u32,
        #[arg(long)]
        year: Option<i32>,
    },

    /// List goals and their progress.
    List {
        #[arg(long)]
        year: Option<i32>,
        /// Also print the year's days grouped this way.
        #[arg(long, value_enum)]
        view: Option<GoalView>,
    },
}

/// Grouping of the goal calendar.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalView {
    Months,
    Quarters,
    Weeks,
}

impl From<GoalView> for DayGrouping {
    fn from(view: GoalView) -> Self {
        match view {
            GoalView::Months => DayGrouping::Months,
            GoalView::Quarters => DayGrouping::Quarters,
            GoalView::Weeks => DayGrouping::Weeks,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD: {err}"))
}

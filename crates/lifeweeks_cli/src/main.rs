//! `lifeweeks` command-line front end.
//!
//! # Responsibility
//! - Own one calendar session per invocation over a SQLite store.
//! - Print computed views as plain text or JSON.

mod cli;
mod render;

use chrono::Datelike;
use clap::Parser;
use cli::{Cli, Commands, GoalCommands, NoteCommands};
use lifeweeks_core::db::open_db;
use lifeweeks_core::{
    default_log_level, group_days, init_logging, CalendarSession, Clock, DayGrouping,
    SqliteCalendarStore, SystemClock,
};
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DB_FILE_NAME: &str = "lifeweeks.sqlite3";

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(message) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let db_path = resolve_db_path(cli.db_path)?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = open_db(&db_path)?;
    let mut session = CalendarSession::open(SqliteCalendarStore::new(&conn), SystemClock);
    let json = cli.json;
    let this_year = session.clock().today().year();

    match cli.command {
        Commands::Stats => render::life_stats(&session.life_stats(), json)?,
        Commands::Year { year } => {
            render::year_stats(&session.year_stats(year.unwrap_or(this_year)), json)?
        }
        Commands::Grid { cols } => render::grid(&session.weeks(), cols, json)?,
        Commands::Config {
            birthdate,
            life_expectancy,
        } => {
            session.update_config(birthdate, life_expectancy)?;
            render::life_stats(&session.life_stats(), json)?;
        }
        Commands::Note { command } => match command {
            NoteCommands::Set {
                index,
                text,
                category,
                event_name,
            } => {
                session.set_note(index, text, category, event_name)?;
                render::note(index, session.record().notes.get(&index), json)?;
            }
            NoteCommands::Delete { index } => {
                session.delete_note(index)?;
                render::note(index, None, json)?;
            }
        },
        Commands::Events => render::events(&session.life_events(), json)?,
        Commands::Goal { command } => match command {
            GoalCommands::Add { name } => {
                let id = session.add_goal(&name)?;
                render::message(&format!("added goal {id}"), json)?;
            }
            GoalCommands::Remove { id } => {
                session.remove_goal(&id)?;
                render::message(&format!("removed goal {id}"), json)?;
            }
            GoalCommands::Toggle { id, day, year } => {
                let year = year.unwrap_or(this_year);
                let completed = session.toggle_goal_day(&id, year, day)?;
                let state = if completed { "completed" } else { "not completed" };
                render::message(&format!("goal {id} day {day} of {year}: {state}"), json)?;
            }
            GoalCommands::List { year, view } => {
                let year = year.unwrap_or(this_year);
                let mut rows = Vec::new();
                for (id, goal) in &session.record().goals {
                    rows.push((id.as_str(), goal, session.goal_progress(id, year)?));
                }
                match view {
                    None => render::goals(&rows, json)?,
                    Some(view) => {
                        let grouping = DayGrouping::from(view);
                        let days = session.goal_days(year);
                        let groups = group_days(&days, grouping);
                        render::goal_calendar(year, &rows, &groups, grouping, json)?;
                    }
                }
            }
        },
        Commands::Reset => {
            session.reset()?;
            render::message("calendar reset to defaults", json)?;
        }
    }

    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn resolve_db_path(explicit: Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    dirs::data_dir()
        .map(|dir| dir.join("lifeweeks").join(DB_FILE_NAME))
        .ok_or_else(|| "could not determine data directory; pass --db".to_string())
}

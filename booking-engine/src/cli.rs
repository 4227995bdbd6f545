//! Command-line front end
//!
//! Each subcommand reads a JSON payload, runs the matching engine
//! operation and returns pretty JSON for stdout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use shared::models::{BlockRequest, BookingInterval, CalendarDay, DayOccupancy, InvoiceRequest};

use crate::calendar::{CalendarWindow, RoomRow, daily_occupancy, layout_grid};
use crate::conflicts::evaluate_block_request;
use crate::core::EngineConfig;
use crate::pricing::compute_invoice_with;
use crate::utils::time::{parse_date, today_in};
use crate::utils::validation::{validate_block_request, validate_invoice_request, validate_window_days};

#[derive(Debug, Parser)]
#[command(name = "booking-engine", version, about = "Room booking pricing & calendar engine")]
pub struct Cli {
    /// Log level (overrides LOG_LEVEL)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Price an invoice request
    Invoice {
        /// InvoiceRequest JSON file
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the calendar window
    Calendar {
        /// First day (YYYY-MM-DD), defaults to today in the business timezone
        #[arg(long)]
        start: Option<String>,
        /// Number of days, defaults to CALENDAR_DAY_COUNT
        #[arg(long)]
        days: Option<u32>,
    },
    /// Check a bulk block request against existing intervals
    Conflicts {
        /// `{ "request": BlockRequest, "existing": [BookingInterval] }` JSON file
        #[arg(long)]
        input: PathBuf,
    },
    /// Lay out the availability grid
    Layout {
        /// `{ "room_ids": [...], "intervals": [...], "start"?, "days"? }` JSON file
        #[arg(long)]
        input: PathBuf,
    },
}

/// Payload of the `conflicts` subcommand
#[derive(Debug, Deserialize)]
pub struct ConflictsInput {
    pub request: BlockRequest,
    #[serde(default)]
    pub existing: Vec<BookingInterval>,
}

/// Payload of the `layout` subcommand
#[derive(Debug, Deserialize)]
pub struct LayoutInput {
    pub room_ids: Vec<String>,
    #[serde(default)]
    pub intervals: Vec<BookingInterval>,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct LayoutOutput {
    pub days: Vec<CalendarDay>,
    pub rows: Vec<RoomRow>,
    pub occupancy: Vec<DayOccupancy>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(value)
}

/// Run one subcommand, returning the JSON to print
pub fn run(command: &Command, config: &EngineConfig) -> anyhow::Result<String> {
    let output = match command {
        Command::Invoice { input } => {
            let request: InvoiceRequest = read_json(input)?;
            validate_invoice_request(&request)?;
            let summary =
                compute_invoice_with(&request, config.tax_spec(), config.round_off_enabled);
            serde_json::to_string_pretty(&summary)?
        }
        Command::Calendar { start, days } => {
            let tz = config.timezone();
            let today = today_in(tz);
            let start = match start {
                Some(s) => parse_date(s)?,
                None => today,
            };
            let days = validate_window_days(days.unwrap_or(config.calendar_day_count))?;
            let window = CalendarWindow::new(start, days);
            serde_json::to_string_pretty(&window.days(today))?
        }
        Command::Conflicts { input } => {
            let payload: ConflictsInput = read_json(input)?;
            validate_block_request(&payload.request)?;
            let evaluation = evaluate_block_request(&payload.request, &payload.existing);
            serde_json::to_string_pretty(&evaluation)?
        }
        Command::Layout { input } => {
            let payload: LayoutInput = read_json(input)?;
            serde_json::to_string_pretty(&layout(&payload, config)?)?
        }
    };
    Ok(output)
}

fn layout(payload: &LayoutInput, config: &EngineConfig) -> anyhow::Result<LayoutOutput> {
    let today = today_in(config.timezone());
    let start = payload.start.unwrap_or(today);
    let mut grid = config.grid_spec(start);
    if let Some(days) = payload.days {
        grid.total_days = validate_window_days(days)?;
    }
    let window = CalendarWindow::new(start, grid.total_days);
    let total_rooms = u32::try_from(payload.room_ids.len()).unwrap_or(u32::MAX);

    Ok(LayoutOutput {
        days: window.days(today),
        rows: layout_grid(payload.room_ids.as_slice(), &payload.intervals, &grid),
        occupancy: daily_occupancy(&window, &payload.intervals, total_rooms),
    })
}

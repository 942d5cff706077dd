//! Wall-clock driver for clock face widgets
//!
//! The clock face only renders the fields set on it; this is the external
//! timer that copies the current time into those fields.

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveTime, Timelike};
use time_clock_core::{WidgetError, WidgetId, WidgetTree};
use time_clock_widgets::time_clock;

/// Clock face fields `(hour, minute, second)` for a time of day.
///
/// Hours are folded onto the 12-hour dial.
pub fn clock_fields<T: Timelike>(time: &T) -> (i32, i32, i32) {
    (
        (time.hour() % 12) as i32,
        time.minute() as i32,
        time.second() as i32,
    )
}

/// Parse `HH:MM:SS` or `HH:MM`
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| anyhow!("Expected HH:MM:SS or HH:MM, got: {}", s))
}

/// Pushes the time of day into one clock face widget
#[derive(Debug, Clone, Copy)]
pub struct ClockTicker {
    id: WidgetId,
}

impl ClockTicker {
    pub fn new(id: WidgetId) -> Self {
        Self { id }
    }

    /// Set the widget's fields from `time`
    pub fn apply<T: Timelike>(&self, tree: &mut WidgetTree, time: &T) -> Result<(), WidgetError> {
        let (hour, minute, second) = clock_fields(time);
        time_clock::set_hour(tree, self.id, hour)?;
        time_clock::set_minute(tree, self.id, minute)?;
        time_clock::set_second(tree, self.id, second)?;
        Ok(())
    }

    /// Set the widget's fields from the local wall clock
    pub fn tick(&self, tree: &mut WidgetTree) -> Result<(), WidgetError> {
        self.apply(tree, &Local::now())
    }
}

//! Settings resolved once per invocation and shared by every command.

use std::path::PathBuf;

use anyhow::Result;
use cake_calendar::{CalendarDate, DateStyle};
use cake_projection::{ProjectionConfig, ReminderSchedule};
use cake_roster::BirthRecord;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::config::CakeConfig;
use crate::{clock, convert, store};

/// Config, clock and policies for one run.
pub struct Session {
    pub config: CakeConfig,
    pub today: CalendarDate,
    pub projection: ProjectionConfig,
    pub date_style: DateStyle,
    pub reminders: ReminderSchedule,
    roster_path: PathBuf,
}

impl Session {
    /// Loads config, resolves "today" and converts config names to engine types.
    pub fn open(args: &GlobalArgs) -> Result<Self> {
        let config = CakeConfig::load(args.config.as_deref())?;
        let today = clock::today(args.today.as_deref())?;
        let projection = convert::build_projection_config(&config.projection)?;
        let date_style = convert::parse_date_style(&config.display.date_style)?;
        let reminders = convert::build_reminder_schedule(&config.reminders);
        let roster_path = args
            .roster
            .clone()
            .unwrap_or_else(|| config.store.roster.clone());
        debug!(%today, roster = %roster_path.display(), "session opened");
        Ok(Self {
            config,
            today,
            projection,
            date_style,
            reminders,
            roster_path,
        })
    }

    /// Reads the roster file.
    pub fn records(&self) -> Result<Vec<BirthRecord>> {
        store::load_records(&self.roster_path)
    }
}

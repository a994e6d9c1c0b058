//! Remind command: birthdays with a reminder due today.

use anyhow::{Context, Result};
use cake_roster::Roster;
use tracing::info;

use crate::render;
use crate::session::Session;

/// Print today's reminders, soonest birthday first.
pub fn run(session: &Session) -> Result<()> {
    let records = session.records()?;
    let roster = Roster::new(&records, session.today, &session.projection)
        .context("failed to project roster")?;

    let due = roster.due_reminders(&session.reminders);
    info!(n_due = due.len(), "reminders");
    if due.is_empty() {
        println!("no reminders due today");
        return Ok(());
    }
    for (entry, reminder) in due {
        println!(
            "{} {} turns {} {} ({})",
            render::priority_tag(reminder.priority()),
            entry.name(),
            entry.projection().next_age(),
            render::reminder_label(reminder.kind()),
            entry.next_occurrence_text(session.date_style),
        );
    }
    Ok(())
}

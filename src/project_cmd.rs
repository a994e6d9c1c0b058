//! Project command: one birth date against today.

use anyhow::{Context, Result};
use cake_calendar::CalendarDate;
use cake_projection::{ZodiacSign, project_with};
use serde::Serialize;

use crate::cli::ProjectArgs;
use crate::render;
use crate::session::Session;

#[derive(Serialize)]
struct ProjectJson {
    birth_date: String,
    days_until: u32,
    current_age: u32,
    next_age: i32,
    next_occurrence: String,
    urgency: &'static str,
    sign: &'static str,
}

/// Print the projection of a single birth date.
pub fn run(session: &Session, args: ProjectArgs) -> Result<()> {
    let birth = CalendarDate::parse(&args.birth_date)
        .with_context(|| format!("invalid birth date: {:?}", args.birth_date))?;
    let p = project_with(birth, session.today, &session.projection)
        .with_context(|| format!("cannot project {birth} from {}", session.today))?;

    if args.json {
        let json = ProjectJson {
            birth_date: birth.format(session.date_style),
            days_until: p.days_until(),
            current_age: p.current_age(),
            next_age: p.next_age(),
            next_occurrence: p.next_occurrence().format(session.date_style),
            urgency: p.urgency().as_str(),
            sign: ZodiacSign::of(birth).name(),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!(
        "Next birthday:  {} ({})",
        p.next_occurrence().format(session.date_style),
        render::countdown_text(p.days_until())
    );
    println!("Age:            {}, turning {}", p.current_age(), p.next_age());
    println!("Tier:           {}", p.urgency());
    println!("Sign:           {}", ZodiacSign::of(birth));
    Ok(())
}

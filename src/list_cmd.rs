//! List command: projected birthdays filtered, searched and sorted.

use anyhow::{Context, Result};
use cake_roster::{Roster, RosterQuery};
use tracing::info;

use crate::cli::ListArgs;
use crate::convert;
use crate::render::{self, Row};
use crate::session::Session;

/// Run the listing.
pub fn run(session: &Session, args: ListArgs) -> Result<()> {
    let query = build_query(session, &args)?;
    let records = session.records()?;
    let roster = Roster::new(&records, session.today, &session.projection)
        .context("failed to project roster")?;

    let entries = roster.query(&query);
    info!(
        n_records = roster.len(),
        n_listed = entries.len(),
        "listing"
    );

    if args.json {
        let rows: Vec<Row<'_>> = entries
            .iter()
            .map(|e| Row::from_entry(e, session.date_style))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if entries.is_empty() {
        println!("no birthdays match");
    } else {
        print!("{}", render::table(&entries, session.date_style));
    }
    Ok(())
}

/// CLI flags override the configured sort; tier and search come only from flags.
fn build_query(session: &Session, args: &ListArgs) -> Result<RosterQuery> {
    let sort = args.sort.as_deref().unwrap_or(&session.config.list.sort);
    let mut query = RosterQuery::new().with_order(convert::parse_sort_order(sort)?);
    if let Some(tier) = &args.tier {
        query = query.with_tier(convert::parse_tier(tier)?);
    }
    if let Some(search) = &args.search {
        query = query.with_search(search.as_str());
    }
    Ok(query)
}

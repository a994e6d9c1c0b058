//! Stats command: dashboard figures over the whole roster.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use cake_projection::UrgencyTier;
use cake_roster::{Roster, Statistics};
use serde::Serialize;

use crate::cli::StatsArgs;
use crate::render;
use crate::session::Session;

#[derive(Serialize)]
struct StatsJson {
    total: usize,
    month_counts: [usize; 12],
    busiest_month: u8,
    busiest_month_count: usize,
    average_age: u32,
    top_sign: &'static str,
    top_sign_count: usize,
    upcoming_count: usize,
    tiers: BTreeMap<&'static str, usize>,
}

/// Run the statistics report.
pub fn run(session: &Session, args: StatsArgs) -> Result<()> {
    let records = session.records()?;
    let roster = Roster::new(&records, session.today, &session.projection)
        .context("failed to project roster")?;

    let Some(stats) = roster.statistics() else {
        if args.json {
            println!("null");
        } else {
            println!("no birthdays registered");
        }
        return Ok(());
    };
    let tiers = roster.tier_counts();

    if args.json {
        let json = StatsJson {
            total: stats.total(),
            month_counts: *stats.month_counts(),
            busiest_month: stats.busiest_month(),
            busiest_month_count: stats.busiest_month_count(),
            average_age: stats.average_age(),
            top_sign: stats.top_sign().name(),
            top_sign_count: stats.top_sign_count(),
            upcoming_count: stats.upcoming_count(),
            tiers: tiers.iter().map(|(t, n)| (t.as_str(), *n)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{}", report(&stats, &tiers));
    }
    Ok(())
}

fn report(stats: &Statistics, tiers: &[(UrgencyTier, usize)]) -> String {
    let by_tier = tiers
        .iter()
        .map(|(t, n)| format!("{t} {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Total:          {}\n\
         Busiest month:  {} ({})\n\
         Average age:    {}\n\
         Top sign:       {} ({})\n\
         Within 7 days:  {}\n\
         By tier:        {}\n",
        stats.total(),
        render::month_name(stats.busiest_month()),
        stats.busiest_month_count(),
        stats.average_age(),
        stats.top_sign(),
        stats.top_sign_count(),
        stats.upcoming_count(),
        by_tier,
    )
}

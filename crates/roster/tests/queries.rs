use cake_calendar::{CalendarDate, DateStyle};
use cake_projection::{
    FutureBirthPolicy, Priority, ProjectionConfig, ProjectionError, ReminderKind,
    ReminderSchedule, UrgencyTier,
};
use cake_roster::{
    BirthRecord, Entry, Roster, RosterError, RosterQuery, SortOrder, TierFilter, filter_by_tier,
    search, sort_by_name, sort_by_name_desc, sort_by_proximity,
};

fn today() -> CalendarDate {
    CalendarDate::new(2025, 3, 10).unwrap()
}

fn records() -> Vec<BirthRecord> {
    vec![
        BirthRecord::new("1", "Ana", "1990-03-15"),
        BirthRecord::new("2", "Bruno", "1985-03-10"),
        BirthRecord::new("3", "carla", "1992-04-01").with_description("Ana's sister"),
        BirthRecord::new("4", "Álvaro", "1970-05-20"),
        BirthRecord::new("5", "Davi", "2001-12-25"),
        BirthRecord::new("6", "Ana Beatriz", "1990-03-15"),
        BirthRecord::new("7", "Eva", "1900-01-01"),
    ]
}

fn ids(entries: &[Entry<'_>]) -> Vec<String> {
    entries.iter().map(|e| e.id().to_string()).collect()
}

#[test]
fn projections_per_record() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    let days: Vec<u32> = roster.entries().iter().map(|e| e.days_until()).collect();
    assert_eq!(days, vec![5, 0, 22, 71, 290, 5, 297]);

    let ana = roster.entries()[0];
    assert_eq!(ana.projection().current_age(), 34);
    assert_eq!(ana.projection().next_age(), 35);
    assert_eq!(ana.next_occurrence_text(DateStyle::Dmy), "15/03/2025");
    assert_eq!(ana.urgency(), UrgencyTier::Urgent);
}

#[test]
fn proximity_sort_is_stable() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    let sorted = sort_by_proximity(roster.entries());
    assert_eq!(ids(&sorted), ["2", "1", "6", "3", "4", "5", "7"]);
}

#[test]
fn proximity_ties_follow_input_order_both_ways() {
    let mut records = records();
    records.swap(0, 5);
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    let sorted = sort_by_proximity(roster.entries());
    assert_eq!(ids(&sorted)[1..3], ["6", "1"]);
}

#[test]
fn name_sort_ignores_case_and_accents() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    assert_eq!(
        ids(&sort_by_name(roster.entries())),
        ["4", "1", "6", "2", "3", "5", "7"]
    );
    assert_eq!(
        ids(&sort_by_name_desc(roster.entries())),
        ["7", "5", "3", "2", "6", "1", "4"]
    );
}

#[test]
fn name_sort_ties_keep_input_order() {
    let records = vec![
        BirthRecord::new("a", "Élia", "1990-01-01"),
        BirthRecord::new("b", "elia", "1991-01-01"),
        BirthRecord::new("c", "ELIA", "1992-01-01"),
    ];
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    assert_eq!(ids(&sort_by_name(roster.entries())), ["a", "b", "c"]);
    assert_eq!(ids(&sort_by_name_desc(roster.entries())), ["a", "b", "c"]);
}

#[test]
fn decomposed_accents_sort_with_base_letter() {
    let records = vec![
        BirthRecord::new("a", "E\u{301}lia", "1990-01-01"),
        BirthRecord::new("b", "Elisa", "1991-01-01"),
        BirthRecord::new("c", "Eduardo", "1992-01-01"),
        BirthRecord::new("d", "\u{c9}lia", "1993-01-01"),
    ];
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    assert_eq!(ids(&sort_by_name(roster.entries())), ["c", "a", "d", "b"]);
    assert_eq!(ids(&sort_by_name_desc(roster.entries())), ["b", "a", "d", "c"]);
}

#[test]
fn tier_filter_keeps_input_order() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    let entries = roster.entries();

    assert_eq!(filter_by_tier(entries, TierFilter::All), entries);
    assert_eq!(
        ids(&filter_by_tier(entries, UrgencyTier::Urgent.into())),
        ["1", "2", "6"]
    );
    assert_eq!(ids(&filter_by_tier(entries, UrgencyTier::Soon.into())), ["3"]);
    assert_eq!(
        ids(&filter_by_tier(entries, UrgencyTier::Upcoming.into())),
        ["4"]
    );
    assert_eq!(
        ids(&filter_by_tier(entries, UrgencyTier::Distant.into())),
        ["5", "7"]
    );
}

#[test]
fn search_names_and_descriptions() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    assert_eq!(ids(&search(roster.entries(), "  ANA ")), ["1", "3", "6"]);
    assert!(search(roster.entries(), "zzz").is_empty());
}

#[test]
fn blank_search_returns_everything() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    assert_eq!(search(roster.entries(), ""), roster.entries());
    assert_eq!(search(roster.entries(), "   "), roster.entries());
}

#[test]
fn composed_query() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();

    let q = RosterQuery::new()
        .with_search("ana")
        .with_tier(TierFilter::Only(UrgencyTier::Urgent))
        .with_order(SortOrder::NameDesc);
    assert_eq!(ids(&roster.query(&q)), ["6", "1"]);

    let everything = roster.query(&RosterQuery::new());
    assert_eq!(everything.len(), roster.len());
    assert_eq!(ids(&everything)[0], "2");
}

#[test]
fn tier_counts_cover_roster() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();
    assert_eq!(
        roster.tier_counts(),
        [
            (UrgencyTier::Urgent, 3),
            (UrgencyTier::Soon, 1),
            (UrgencyTier::Upcoming, 1),
            (UrgencyTier::Distant, 2),
        ]
    );
}

#[test]
fn reminders_due_today() {
    let records = records();
    let roster = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap();

    let due = roster.due_reminders(&ReminderSchedule::new());
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].0.name(), "Bruno");
    assert_eq!(due[0].1.kind(), ReminderKind::OnDay);
    assert_eq!(due[0].1.priority(), Priority::High);

    assert!(roster.due_reminders(&ReminderSchedule::none()).is_empty());
}

#[test]
fn malformed_record_names_its_id() {
    let records = vec![
        BirthRecord::new("ok", "Ana", "1990-03-15"),
        BirthRecord::new("bad", "Bo", "1990-13-01"),
    ];
    let err = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::Record { ref id, source: ProjectionError::Calendar(_) } if id == "bad"
    ));
}

#[test]
fn future_birth_policy_applies_per_record() {
    let records = vec![BirthRecord::new("kid", "Kid", "2030-01-01")];
    let err = Roster::new(&records, today(), &ProjectionConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RosterError::Record {
            source: ProjectionError::FutureBirthDate { .. },
            ..
        }
    ));

    let accept = ProjectionConfig::new().with_future_birth(FutureBirthPolicy::Accept);
    let roster = Roster::new(&records, today(), &accept).unwrap();
    assert_eq!(roster.entries()[0].projection().current_age(), 0);
}

#[test]
fn empty_roster() {
    let roster = Roster::new(&[], today(), &ProjectionConfig::default()).unwrap();
    assert!(roster.is_empty());
    assert!(roster.query(&RosterQuery::new()).is_empty());
    assert!(roster.statistics().is_none());
}

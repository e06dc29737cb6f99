//! Integration tests for the precedence resolver.

use proptest::prelude::*;

use ordo_calendar::{
    build_sanctoral_cycle, build_temporal_cycle, resolve, Category, Celebration, LiturgicalColor,
    Rank,
};
use ordo_time::Date;

const RANKS: [Rank; 6] = [
    Rank::ClassI,
    Rank::ClassII,
    Rank::ClassIII,
    Rank::FeriaPrivileged,
    Rank::ClassIV,
    Rank::Feria,
];

fn celebration(id: String, rank: Rank, precedence: u8) -> Celebration {
    Celebration::new(
        id.clone(),
        id.clone(),
        id,
        rank,
        Category::Feast,
        LiturgicalColor::White,
        precedence,
    )
}

fn arb_celebration(tag: &'static str) -> impl Strategy<Value = Celebration> {
    (0usize..6, 1u8..=11, 0u32..1000)
        .prop_map(move |(r, p, n)| celebration(format!("{tag}-{n}"), RANKS[r], p))
}

/// Resolve the real candidates of one date.
fn resolve_on(d: Date) -> (String, Vec<String>) {
    let temporal = build_temporal_cycle(d.year()).unwrap();
    let sanctoral = build_sanctoral_cycle(d.year()).unwrap();
    let t = temporal.iter().find(|t| t.date == d).unwrap();
    let candidates = sanctoral.get(&d).cloned().unwrap_or_default();
    let r = resolve(t.celebration(), &candidates);
    (
        r.winner.id().to_owned(),
        r.commemorations.iter().map(|c| c.id().to_owned()).collect(),
    )
}

#[test]
fn feast_over_lenten_feria() {
    let (winner, comm) = resolve_on(Date::from_ymd(2025, 3, 19).unwrap());
    assert_eq!(winner, "st-joseph");
    assert_eq!(comm, ["feria-lent-2-wednesday"]);
}

#[test]
fn holy_week_feria_over_annunciation() {
    let (winner, comm) = resolve_on(Date::from_ymd(2024, 3, 25).unwrap());
    assert_eq!(winner, "feria-holyWeek-1-monday");
    assert_eq!(comm, ["annunciation"]);
}

#[test]
fn sunday_over_second_class_feast() {
    let (winner, comm) = resolve_on(Date::from_ymd(2025, 9, 21).unwrap());
    assert_eq!(winner, "sunday-afterPentecost-16");
    assert_eq!(comm, ["st-matthew"]);
}

#[test]
fn corpus_christi_over_st_john() {
    let (winner, comm) = resolve_on(Date::from_ymd(2038, 6, 24).unwrap());
    assert_eq!(winner, "corpus-christi");
    assert_eq!(comm, ["nativity-of-st-john-baptist"]);
}

#[test]
fn plain_feria_gives_way_silently() {
    let (winner, comm) = resolve_on(Date::from_ymd(2025, 12, 31).unwrap());
    assert_eq!(winner, "st-sylvester");
    assert!(comm.is_empty());
}

proptest! {
    #[test]
    fn resolver_is_total_and_ordered(
        temporal in arb_celebration("t"),
        sanctoral in prop::collection::vec(arb_celebration("s"), 0..4),
    ) {
        let r = resolve(temporal.clone(), &sanctoral);

        let mut all = vec![temporal];
        all.extend(sanctoral.iter().cloned());
        let best = all.iter().map(Celebration::precedence_key).min().unwrap();
        prop_assert_eq!(r.winner.precedence_key(), best);

        prop_assert!(r.commemorations.iter().all(|c| c.rank() != Rank::Feria));
        prop_assert!(r
            .commemorations
            .windows(2)
            .all(|w| w[0].precedence_key() <= w[1].precedence_key()));
        prop_assert!(r
            .commemorations
            .iter()
            .all(|c| c.precedence_key() >= r.winner.precedence_key()));

        let dropped = all.len() - 1 - r.commemorations.len();
        let losers_of_feria_rank = all
            .iter()
            .filter(|c| c.rank() == Rank::Feria)
            .count()
            - usize::from(r.winner.rank() == Rank::Feria);
        prop_assert_eq!(dropped, losers_of_feria_rank);
    }
}

//! Precedence resolution between the temporal and sanctoral celebrations of
//! a single date.

use crate::celebration::{Celebration, Rank};

/// Outcome of [`resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The celebration whose office is said.
    pub winner: Celebration,
    /// Losing celebrations that are commemorated, highest first.
    pub commemorations: Vec<Celebration>,
}

/// Resolve the celebrations competing for one date.
///
/// The temporal celebration is placed first, then the sanctoral candidates in
/// their given order.  The combined list is stably sorted by
/// [`precedence_key`](Celebration::precedence_key); the first entry wins and
/// every other entry of non-[`Feria`](Rank::Feria) rank is commemorated.
pub fn resolve(temporal: Celebration, sanctoral: &[Celebration]) -> Resolution {
    let mut candidates = Vec::with_capacity(sanctoral.len() + 1);
    candidates.push(temporal);
    candidates.extend_from_slice(sanctoral);
    // `sort_by_key` is stable: ties keep temporal-first order.
    candidates.sort_by_key(Celebration::precedence_key);

    let commemorations = candidates
        .split_off(1)
        .into_iter()
        .filter(|c| c.rank() != Rank::Feria)
        .collect();
    let winner = candidates.remove(0);
    Resolution {
        winner,
        commemorations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::{Category, LiturgicalColor};

    fn c(id: &str, rank: Rank, precedence: u8) -> Celebration {
        Celebration::new(
            id,
            id,
            id,
            rank,
            Category::Feast,
            LiturgicalColor::White,
            precedence,
        )
    }

    fn ids(cs: &[Celebration]) -> Vec<&str> {
        cs.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn temporal_alone_wins() {
        let r = resolve(c("feria", Rank::Feria, 11), &[]);
        assert_eq!(r.winner.id(), "feria");
        assert!(r.commemorations.is_empty());
    }

    #[test]
    fn plain_feria_loser_is_dropped() {
        let r = resolve(c("feria", Rank::Feria, 11), &[c("st-luke", Rank::ClassII, 7)]);
        assert_eq!(r.winner.id(), "st-luke");
        assert!(r.commemorations.is_empty());
    }

    #[test]
    fn privileged_feria_loser_is_commemorated() {
        let r = resolve(
            c("feria-lent", Rank::FeriaPrivileged, 8),
            &[c("st-joseph", Rank::ClassI, 4)],
        );
        assert_eq!(r.winner.id(), "st-joseph");
        assert_eq!(ids(&r.commemorations), ["feria-lent"]);
    }

    #[test]
    fn rank_breaks_precedence_ties() {
        let r = resolve(
            c("sunday", Rank::ClassII, 5),
            &[c("feast", Rank::ClassI, 5)],
        );
        assert_eq!(r.winner.id(), "feast");
        assert_eq!(ids(&r.commemorations), ["sunday"]);
    }

    #[test]
    fn full_ties_keep_temporal_first() {
        let r = resolve(
            c("temporal", Rank::ClassII, 7),
            &[c("a", Rank::ClassII, 7), c("b", Rank::ClassII, 7)],
        );
        assert_eq!(r.winner.id(), "temporal");
        assert_eq!(ids(&r.commemorations), ["a", "b"]);
    }

    #[test]
    fn commemorations_follow_sorted_order() {
        let r = resolve(
            c("sunday", Rank::ClassII, 6),
            &[c("low", Rank::ClassIII, 9), c("high", Rank::ClassI, 4)],
        );
        assert_eq!(r.winner.id(), "high");
        assert_eq!(ids(&r.commemorations), ["sunday", "low"]);
    }
}

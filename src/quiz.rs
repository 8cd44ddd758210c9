//! Picking the next quiz question.

use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

/// Category id the quiz client sends for "all categories".
pub const ALL_CATEGORIES: i64 = 0;

/// Questions eligible for the next round, before previously served ones are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePool {
    All,
    Category(i64),
}

impl CandidatePool {
    pub fn for_category(id: i64) -> Self {
        if id == ALL_CATEGORIES {
            CandidatePool::All
        } else {
            CandidatePool::Category(id)
        }
    }

    /// Label used for metrics.
    pub fn label(&self) -> String {
        match self {
            CandidatePool::All => "all".to_owned(),
            CandidatePool::Category(id) => id.to_string(),
        }
    }
}

/// Chooses uniformly among `candidates` that are not in `previous`.
///
/// `None` means every candidate has been served and the game is over.
pub fn select_next<R: Rng + ?Sized>(
    candidates: &[i64],
    previous: &[i64],
    rng: &mut R,
) -> Option<i64> {
    let served: HashSet<i64> = previous.iter().copied().collect();
    candidates
        .iter()
        .copied()
        .filter(|id| !served.contains(id))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_means_all_categories() {
        assert_eq!(CandidatePool::for_category(0), CandidatePool::All);
        assert_eq!(CandidatePool::for_category(3), CandidatePool::Category(3));
        assert_eq!(CandidatePool::for_category(3).label(), "3");
        assert_eq!(CandidatePool::All.label(), "all");
    }

    #[test]
    fn exhausted_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_next(&[20, 21, 22], &[22, 20, 21], &mut rng), None);
        assert_eq!(select_next(&[], &[], &mut rng), None);
    }

    #[test]
    fn selection_skips_previous_questions() {
        let candidates = [20, 21, 22, 23];
        let previous = [21, 23];
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let id = select_next(&candidates, &previous, &mut rng).unwrap();
            assert!(candidates.contains(&id));
            assert!(!previous.contains(&id));
        }
    }

    #[test]
    fn unrelated_exclusions_are_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_next(&[5], &[1, 2, 3], &mut rng), Some(5));
    }

    #[test]
    fn every_remaining_candidate_can_be_chosen() {
        let candidates = [1, 2, 3, 4];
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            seen.insert(select_next(&candidates, &[4], &mut rng).unwrap());
        }
        assert_eq!(seen, HashSet::from([1, 2, 3]));
    }
}

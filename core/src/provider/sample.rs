use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::prelude::*;

use crate::CategoryId;

/// Picks `amount` items uniformly at random without replacement, `None` when there are not enough.
///
/// This is a partial Fisher-Yates shuffle, the picks come out in shuffled order.
pub(crate) fn sample_without_replacement<T>(
    mut items: Vec<T>,
    amount: usize,
    rng: &mut SmallRng,
) -> Option<Vec<T>> {
    let len = items.len();
    if len < amount {
        return None;
    }
    for i in 0..amount {
        let j = rng.random_range(i..len);
        items.swap(i, j);
    }
    items.truncate(amount);
    Some(items)
}

/// Drops repeated ids, keeping the first occurrence of each.
pub(crate) fn distinct_ids(ids: impl IntoIterator<Item = CategoryId>) -> Vec<CategoryId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn sample_takes_exact_amount_of_distinct_items() {
        let mut rng = SmallRng::seed_from_u64(0);
        let items: Vec<u32> = (0..100).collect();

        let mut picked = sample_without_replacement(items, 10, &mut rng).unwrap();

        assert_eq!(picked.len(), 10);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 10);
    }

    #[test]
    fn sample_whole_set_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(5);

        let mut picked = sample_without_replacement(vec![3, 1, 2], 3, &mut rng).unwrap();

        picked.sort_unstable();
        assert_eq!(picked, [1, 2, 3]);
    }

    #[test]
    fn sample_more_than_available_is_none() {
        let mut rng = SmallRng::seed_from_u64(0);

        assert_eq!(sample_without_replacement(vec![1, 2], 3, &mut rng), None);
        assert_eq!(
            sample_without_replacement(Vec::<u8>::new(), 0, &mut rng),
            Some(Vec::new())
        );
    }

    #[test]
    fn distinct_ids_keeps_first_seen_order() {
        assert_eq!(distinct_ids([5, 3, 5, 1, 3, 3]), [5, 3, 1]);
    }
}

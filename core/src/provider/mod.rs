use alloc::format;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;
pub(crate) use sample::*;

mod sample;

/// Transport to the trivia provider's two endpoints.
///
/// Implementations only do network I/O and decoding, any transport failure is reported as
/// [`ProviderError::Unavailable`].
#[allow(async_fn_in_trait)]
pub trait TriviaApi {
    /// `GET <random-endpoint>?count=N`
    async fn random_clues(&self, count: usize) -> ProviderResult<Vec<RandomClue>>;

    /// `GET <category-endpoint>?id=<id>`
    async fn category(&self, id: CategoryId) -> ProviderResult<CategoryRecord>;
}

/// Fetches categories and clues and samples them down to the shape of a game.
///
/// Samples come out in the order of a seeded partial shuffle, so the same seed against the same
/// provider data always yields the same picks.
#[derive(Debug)]
pub struct ClueProvider<A> {
    api: A,
    config: GameConfig,
    rng: SmallRng,
}

impl<A: TriviaApi> ClueProvider<A> {
    pub fn new(api: A, config: GameConfig, seed: u64) -> Self {
        Self {
            api,
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn fetch_random_category_ids(
        &mut self,
        sample_size: usize,
    ) -> ProviderResult<Vec<CategoryId>> {
        let pool = self.api.random_clues(self.config.random_pool_size).await?;
        let ids = distinct_ids(pool.into_iter().map(|clue| clue.category_id));
        let available = ids.len();
        log::debug!(
            "random pool has {} distinct categories, sampling {}",
            available,
            sample_size
        );

        sample_without_replacement(ids, sample_size, &mut self.rng).ok_or(
            ProviderError::InsufficientPool {
                requested: sample_size,
                available,
            },
        )
    }

    pub async fn fetch_category(&mut self, id: CategoryId) -> ProviderResult<Category> {
        let record = self.api.category(id).await?;
        if let Some(record_id) = record.id {
            if record_id != id {
                return Err(ProviderError::InvalidContent(format!(
                    "requested category {id} but got {record_id}"
                )));
            }
        }
        let title = record.display_title()?;

        let clues: Vec<Clue> = record
            .clues
            .into_iter()
            .filter_map(ClueRecord::into_clue)
            .collect();
        let available = clues.len();
        let requested = self.config.clues_per_category;
        log::trace!("category {} ({:?}) has {} usable clues", id, title, available);

        let clues = sample_without_replacement(clues, requested, &mut self.rng).ok_or(
            ProviderError::InsufficientClues {
                category: id,
                requested,
                available,
            },
        )?;
        Ok(Category::new(id, title, clues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::*;
    use alloc::vec;
    use futures::executor::block_on;

    #[test]
    fn random_ids_are_sampled_without_replacement() {
        let api = MockApi::with_categories(20, 5);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 7);

        let ids = block_on(provider.fetch_random_category_ids(6)).unwrap();

        assert_eq!(ids.len(), 6);
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
        assert!(ids.iter().all(|id| (1..=20).contains(id)));
    }

    #[test]
    fn random_ids_request_the_configured_pool() {
        let api = MockApi::with_categories(10, 5);
        let mut provider = ClueProvider::new(api, GameConfig::new_unchecked(6, 5, 100), 1);

        block_on(provider.fetch_random_category_ids(6)).unwrap();

        assert_eq!(provider.api().pool_requests(), vec![100]);
    }

    #[test]
    fn small_pool_is_insufficient() {
        let api = MockApi::with_categories(3, 5);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 7);

        let result = block_on(provider.fetch_random_category_ids(6));

        assert_eq!(
            result,
            Err(ProviderError::InsufficientPool {
                requested: 6,
                available: 3
            })
        );
    }

    #[test]
    fn duplicate_pool_entries_count_once() {
        let api = MockApi::with_categories(3, 5).with_pool(vec![1, 1, 2, 2, 2, 3, 3]);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 7);

        let result = block_on(provider.fetch_random_category_ids(4));

        assert_eq!(
            result,
            Err(ProviderError::InsufficientPool {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn pool_transport_failure_is_unavailable() {
        let api = MockApi::with_categories(10, 5).fail_pool();
        let mut provider = ClueProvider::new(api, GameConfig::default(), 7);

        let result = block_on(provider.fetch_random_category_ids(6));

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[test]
    fn category_clues_are_sampled_and_hidden() {
        let api = MockApi::with_categories(1, 12);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 3);

        let category = block_on(provider.fetch_category(1)).unwrap();

        assert_eq!(category.id(), 1);
        assert_eq!(category.title(), "Category 1");
        assert_eq!(category.clues().len(), 5);
        assert!(category.clues().iter().all(|c| c.state().is_hidden()));
        let mut questions: Vec<_> = category.clues().iter().map(Clue::question).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), 5);
    }

    #[test]
    fn short_category_is_insufficient() {
        let api = MockApi::with_categories(1, 4);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 3);

        let result = block_on(provider.fetch_category(1));

        assert_eq!(
            result,
            Err(ProviderError::InsufficientClues {
                category: 1,
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn blank_clues_do_not_count() {
        let api = MockApi::with_categories(1, 5).with_blank_clue(1);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 3);

        let result = block_on(provider.fetch_category(1));

        assert_eq!(
            result,
            Err(ProviderError::InsufficientClues {
                category: 1,
                requested: 5,
                available: 4
            })
        );
    }

    #[test]
    fn blank_clues_are_never_picked() {
        let api = MockApi::with_categories(1, 6).with_blank_clue(1);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 3);

        let category = block_on(provider.fetch_category(1)).unwrap();

        assert_eq!(category.clues().len(), 5);
        assert!(
            category
                .clues()
                .iter()
                .all(|c| !c.question().trim().is_empty() && c.question() != PLACEHOLDER)
        );
    }

    #[test]
    fn missing_category_is_unavailable() {
        let api = MockApi::with_categories(2, 5);
        let mut provider = ClueProvider::new(api, GameConfig::default(), 3);

        let result = block_on(provider.fetch_category(99));

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[test]
    fn same_seed_same_picks() {
        let pick = |seed| {
            let mut provider =
                ClueProvider::new(MockApi::with_categories(30, 8), GameConfig::default(), seed);
            let ids = block_on(provider.fetch_random_category_ids(6)).unwrap();
            let category = block_on(provider.fetch_category(ids[0])).unwrap();
            (ids, category)
        };

        assert_eq!(pick(11), pick(11));
    }
}

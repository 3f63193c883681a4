//! In-memory trivia provider for tests.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::*;

#[derive(Debug, Default)]
pub(crate) struct MockApi {
    pool: Vec<CategoryId>,
    categories: BTreeMap<CategoryId, CategoryRecord>,
    failing: Vec<CategoryId>,
    fail_pool: bool,
    pool_requests: RefCell<Vec<usize>>,
    category_requests: RefCell<Vec<CategoryId>>,
}

impl MockApi {
    /// Categories `1..=count`, each with `clues` distinct clues, all of them in the random pool.
    pub(crate) fn with_categories(count: CategoryId, clues: usize) -> Self {
        let categories = (1..=count)
            .map(|id| {
                let record = CategoryRecord {
                    id: Some(id),
                    title: format!("Category {id}"),
                    clues: (0..clues)
                        .map(|n| ClueRecord {
                            question: Some(format!("Question {id}.{n}")),
                            answer: Some(format!("Answer {id}.{n}")),
                        })
                        .collect(),
                };
                (id, record)
            })
            .collect();
        Self {
            pool: (1..=count).collect(),
            categories,
            ..Default::default()
        }
    }

    pub(crate) fn with_pool(mut self, pool: Vec<CategoryId>) -> Self {
        self.pool = pool;
        self
    }

    pub(crate) fn with_blank_clue(mut self, id: CategoryId) -> Self {
        if let Some(record) = self.categories.get_mut(&id) {
            if let Some(clue) = record.clues.first_mut() {
                clue.question = Some(String::from("  "));
            }
        }
        self
    }

    pub(crate) fn fail_category(mut self, id: CategoryId) -> Self {
        self.failing.push(id);
        self
    }

    pub(crate) fn fail_pool(mut self) -> Self {
        self.fail_pool = true;
        self
    }

    pub(crate) fn pool_requests(&self) -> Vec<usize> {
        self.pool_requests.borrow().clone()
    }

    pub(crate) fn category_requests(&self) -> Vec<CategoryId> {
        self.category_requests.borrow().clone()
    }
}

impl TriviaApi for MockApi {
    async fn random_clues(&self, count: usize) -> ProviderResult<Vec<RandomClue>> {
        self.pool_requests.borrow_mut().push(count);
        if self.fail_pool {
            return Err(ProviderError::Unavailable(String::from("connection refused")));
        }
        Ok(self
            .pool
            .iter()
            .take(count)
            .map(|&category_id| RandomClue { category_id })
            .collect())
    }

    async fn category(&self, id: CategoryId) -> ProviderResult<CategoryRecord> {
        self.category_requests.borrow_mut().push(id);
        if self.failing.contains(&id) {
            return Err(ProviderError::Unavailable(format!("category {id}: HTTP 500")));
        }
        self.categories
            .get(&id)
            .cloned()
            .ok_or_else(|| ProviderError::Unavailable(format!("category {id}: HTTP 404")))
    }
}

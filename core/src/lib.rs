#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use controller::*;
pub use error::*;
pub use provider::*;
pub use render::*;
pub use setup::*;
pub use types::*;
pub use wire::*;

mod board;
mod clue;
mod controller;
mod error;
mod provider;
mod render;
mod setup;
mod types;
mod wire;

#[cfg(test)]
mod mock;

pub const CATEGORIES_PER_GAME: usize = 6;
pub const QUESTIONS_PER_CATEGORY: usize = 5;
pub const RANDOM_POOL_SIZE: usize = 100;

/// Shape of a game and of the random pool its categories are drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories_per_game: usize,
    pub clues_per_category: usize,
    pub random_pool_size: usize,
}

impl GameConfig {
    pub const fn new_unchecked(
        categories_per_game: usize,
        clues_per_category: usize,
        random_pool_size: usize,
    ) -> Self {
        Self {
            categories_per_game,
            clues_per_category,
            random_pool_size,
        }
    }

    pub fn new(
        categories_per_game: usize,
        clues_per_category: usize,
        random_pool_size: usize,
    ) -> Result<Self> {
        if categories_per_game == 0
            || clues_per_category == 0
            || random_pool_size < categories_per_game
        {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(
            categories_per_game,
            clues_per_category,
            random_pool_size,
        ))
    }

    pub const fn total_cells(&self) -> usize {
        self.categories_per_game * self.clues_per_category
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(CATEGORIES_PER_GAME, QUESTIONS_PER_CATEGORY, RANDOM_POOL_SIZE)
    }
}

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Categories and clues of one game, column `col` holds category `col`.
///
/// A `Board` always has exactly the shape of the [`GameConfig`] it was built with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>, config: &GameConfig) -> Result<Self> {
        if categories.len() != config.categories_per_game
            || categories
                .iter()
                .any(|category| category.clues.len() != config.clues_per_category)
        {
            log::warn!(
                "Board shape mismatch, expected {}x{}",
                config.categories_per_game,
                config.clues_per_category
            );
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of columns, one per category.
    pub fn cols(&self) -> usize {
        self.categories.len()
    }

    /// Number of body rows, one per clue of a category.
    pub fn rows(&self) -> usize {
        self.categories.first().map_or(0, |c| c.clues.len())
    }

    pub fn clue_at(&self, pos: CellPos) -> Option<&Clue> {
        self.categories.get(pos.col)?.clues.get(pos.row)
    }

    pub(crate) fn clue_at_mut(&mut self, pos: CellPos) -> Option<&mut Clue> {
        self.categories.get_mut(pos.col)?.clues.get_mut(pos.row)
    }

    /// All cell positions, row by row.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> + use<> {
        let (rows, cols) = (self.rows(), self.cols());
        (0..rows).flat_map(move |row| (0..cols).map(move |col| CellPos::new(row, col)))
    }
}

impl Index<usize> for Board {
    type Output = Category;

    fn index(&self, col: usize) -> &Self::Output {
        &self.categories[col]
    }
}

impl Index<CellPos> for Board {
    type Output = Clue;

    fn index(&self, pos: CellPos) -> &Self::Output {
        &self.categories[pos.col].clues[pos.row]
    }
}

use serde::{Deserialize, Serialize};

/// Identifier the trivia provider assigns to a category.
pub type CategoryId = u64;

/// Text shown in place of a clue that was not revealed yet.
///
/// No category title or clue text is ever equal to it, see [`ClueRecord::into_clue`].
///
/// [`ClueRecord::into_clue`]: crate::ClueRecord::into_clue
pub const PLACEHOLDER: &str = "?";

/// Position of a clue cell on the board.
///
/// `row` indexes the clue within its category, `col` indexes the category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for CellPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for CellPos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row, self.col]
    }
}

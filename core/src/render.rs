use alloc::string::{String, ToString};
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Presentation layer the controller paints into.
///
/// Cells are addressed by [`CellPos`], so a single cell can be repainted without touching the
/// rest of the grid.
pub trait BoardRenderer {
    /// One header cell per category, left to right in board order.
    fn render_header(&mut self, board: &Board);

    /// `rows x cols` body cells, each showing what its clue currently shows.
    fn render_body(&mut self, board: &Board);

    fn render_cell(&mut self, pos: CellPos, clue: &Clue);

    fn clear_board(&mut self);

    fn show_loading(&mut self);

    fn hide_loading(&mut self);

    fn show_error(&mut self, message: &str);
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub text: String,
    pub state: RevealState,
}

impl Default for CellView {
    fn default() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            state: RevealState::Hidden,
        }
    }
}

impl From<&Clue> for CellView {
    fn from(clue: &Clue) -> Self {
        Self {
            text: clue.text().to_string(),
            state: clue.state(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// In-memory grid of header and body cells, the state a view layer paints from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView {
    header: Vec<String>,
    body: Array2<CellView>,
    status: ViewStatus,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            header: Vec::new(),
            body: Array2::default((0, 0)),
            status: ViewStatus::Idle,
        }
    }
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> usize {
        self.body.nrows()
    }

    pub fn cols(&self) -> usize {
        self.body.ncols()
    }

    pub fn cell(&self, pos: CellPos) -> Option<&CellView> {
        self.body.get(pos.to_nd_index())
    }

    pub fn cell_text(&self, pos: CellPos) -> Option<&str> {
        self.cell(pos).map(|cell| cell.text.as_str())
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, ViewStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ViewStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty()
    }
}

impl BoardRenderer for GridView {
    fn render_header(&mut self, board: &Board) {
        self.header = board
            .categories()
            .iter()
            .map(|category| category.title().to_string())
            .collect();
    }

    fn render_body(&mut self, board: &Board) {
        self.body = Array2::from_shape_fn((board.rows(), board.cols()), |(row, col)| {
            CellView::from(&board[CellPos::new(row, col)])
        });
    }

    fn render_cell(&mut self, pos: CellPos, clue: &Clue) {
        match self.body.get_mut(pos.to_nd_index()) {
            Some(cell) => *cell = CellView::from(clue),
            None => log::warn!("render_cell out of grid: {:?}", pos),
        }
    }

    fn clear_board(&mut self) {
        self.header.clear();
        self.body = Array2::default((0, 0));
    }

    fn show_loading(&mut self) {
        self.status = ViewStatus::Loading;
    }

    fn hide_loading(&mut self) {
        if self.is_loading() {
            self.status = ViewStatus::Idle;
        }
    }

    fn show_error(&mut self, message: &str) {
        self.status = ViewStatus::Failed(message.to_string());
    }
}

use alloc::string::ToString;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Idle,
    Loading,
    Playing,
    Failed,
}

/// State of one game session: the board in play, if any, and where the session is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSession {
    board: Option<Board>,
    phase: SessionPhase,
    games_started: u32,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Loading)
    }

    /// Number of boards that were successfully set up in this session.
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    pub fn start_label(&self) -> &'static str {
        if self.games_started == 0 {
            "Start"
        } else {
            "Restart"
        }
    }
}

/// Drives a [`GameSession`] from user input and keeps a [`BoardRenderer`] in sync with it.
///
/// Starting a new game while a setup is still in flight is ignored.
#[derive(Debug, Default)]
pub struct InteractionController<R> {
    session: GameSession,
    renderer: R,
}

impl<R: BoardRenderer> InteractionController<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            session: GameSession::new(),
            renderer,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Advances the clue under `pos` one reveal step and repaints that cell.
    ///
    /// Clicks without a board, or outside of it, do nothing.
    pub fn on_cell_click(&mut self, pos: CellPos) -> RevealOutcome {
        let Some(board) = self.session.board.as_mut() else {
            log::trace!("click on {:?} without a board", pos);
            return RevealOutcome::NoChange;
        };
        let Some(clue) = board.clue_at_mut(pos) else {
            log::warn!("click outside of board: {:?}", pos);
            return RevealOutcome::NoChange;
        };

        let outcome = clue.reveal();
        if outcome.has_update() {
            log::debug!("cell {:?}: {:?}", pos, outcome);
            self.renderer.render_cell(pos, clue);
        }
        outcome
    }

    /// Discards the current board and shows the loading indicator.
    ///
    /// Returns `false` without touching anything when a setup is already in flight, in that case
    /// the caller must not start another one.
    pub fn begin_reset(&mut self) -> bool {
        if self.session.is_loading() {
            log::debug!("setup already in flight, ignoring start");
            return false;
        }
        self.session.board = None;
        self.session.phase = SessionPhase::Loading;
        self.renderer.clear_board();
        self.renderer.show_loading();
        true
    }

    /// Publishes the result of a setup started with [`begin_reset`](Self::begin_reset).
    ///
    /// On failure the board stays cleared and the renderer shows the error instead of the
    /// loading indicator. Returns `false` when no setup was in flight.
    pub fn complete_reset(&mut self, result: core::result::Result<Board, SetupFailed>) -> bool {
        if !self.session.is_loading() {
            log::warn!("setup result without a setup in flight, dropped");
            return false;
        }
        match result {
            Ok(board) => {
                self.renderer.render_header(&board);
                self.renderer.render_body(&board);
                self.renderer.hide_loading();
                self.session.board = Some(board);
                self.session.phase = SessionPhase::Playing;
                self.session.games_started = self.session.games_started.saturating_add(1);
                log::debug!("game {} ready", self.session.games_started);
            }
            Err(err) => {
                log::error!("{}", err);
                self.renderer.hide_loading();
                self.renderer.show_error(&err.to_string());
                self.session.phase = SessionPhase::Failed;
            }
        }
        true
    }

    /// Runs a whole reset: clear, set up a new board through `provider`, paint it.
    pub async fn on_start_or_reset<A: TriviaApi>(
        &mut self,
        provider: &mut ClueProvider<A>,
    ) -> bool {
        if !self.begin_reset() {
            return false;
        }
        let result = setup_game(provider).await;
        self.complete_reset(result)
    }
}

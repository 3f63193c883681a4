use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER;

/// What a clue cell currently shows, it only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question => Answer,
            Answer => Answer,
        }
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowQuestion => true,
            ShowAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Text a cell showing this clue displays in its current state.
    pub fn text(&self) -> &str {
        use RevealState::*;
        match self.state {
            Hidden => PLACEHOLDER,
            Question => &self.question,
            Answer => &self.answer,
        }
    }

    /// Advances the reveal state by one step, a clue showing its answer stays there.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;
        let next = self.state.next();
        if next == self.state {
            return RevealOutcome::NoChange;
        }
        self.state = next;
        match next {
            Question => RevealOutcome::ShowQuestion,
            Answer => RevealOutcome::ShowAnswer,
            Hidden => RevealOutcome::NoChange,
        }
    }
}

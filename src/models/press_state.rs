use serde::{Deserialize, Serialize};

/// The states of the key input automaton.
///
/// A composed command is typed as operator, optional count, then motion.
/// The automaton starts in `Operator` and returns to it after each
/// completed triple.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    Operator,
    Count,
    Motion,
}

impl PressState {
    #[must_use]
    pub fn as_index(self) -> u32 {
        match self {
            PressState::Operator => 0,
            PressState::Count => 1,
            PressState::Motion => 2,
        }
    }
}

impl Default for PressState {
    fn default() -> Self {
        PressState::Operator
    }
}

/// What an operator acts on, selected by the motion key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Client,
    Workspace,
}

/// An action that is performed on the next `count` clients or workspaces.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Kill,
    MoveUp,
    MoveDown,
    FocusUp,
    FocusDown,
    ShrinkGaps,
    GrowGaps,
    Cut,
}

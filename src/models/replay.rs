use crate::command::Command;
use crate::models::{Motion, Operator};
use serde::{Deserialize, Serialize};

/// The saved last user action, re-executable by the replay command.
///
/// Exactly one of the two shapes is live at a time: saving a command
/// replaces a saved triple and vice versa.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Replay {
    Command(Command),
    Triple {
        op: Operator,
        motion: Motion,
        count: i32,
    },
}

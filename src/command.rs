use crate::models::{Motion, Operator};
use serde::{Deserialize, Serialize};

/// A named command, dispatchable from a keybind or the control socket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Command {
    ResizeMaster(i32),
    ChangeLayout(i32),
    NextLayout,
    PreviousLayout,
    LastLayout,
    ChangeMode(i32),
    ToggleFloat,
    ToggleFullscreen,
    ToggleBar,
    Quit(i32),
    Replay,
    Paste,
    SendToScratchpad,
    GetFromScratchpad,
    ResizeFloatWidth(i32),
    ResizeFloatHeight(i32),
    MoveFloatX(i32),
    MoveFloatY(i32),
    TeleportClient(i32),
    FocusUrgent,
    FocusNextClient,
    FocusPrevClient,
    MoveCurrentUp,
    MoveCurrentDown,
    FocusLastWs,
    FocusNextWs,
    FocusPrevWs,
    MakeMaster,
    ChangeWs(i32),
    CurrentToWs(i32),
    Spawn(Vec<String>),
    RunOperator {
        op: Operator,
        motion: Motion,
        count: i32,
    },
}

/// Screen anchors a floating client can be teleported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeleportLocation {
    TopLeft,
    TopCenter,
    TopRight,
    Center,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TeleportLocation {
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopCenter),
            2 => Some(Self::TopRight),
            3 => Some(Self::Center),
            4 => Some(Self::BottomLeft),
            5 => Some(Self::BottomCenter),
            6 => Some(Self::BottomRight),
            _ => None,
        }
    }
}

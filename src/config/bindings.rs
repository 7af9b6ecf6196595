//! Key rows and rule rows, as they appear in the config file.
use crate::command::Command;
use crate::models::{Mode, Motion, Operator};
use serde::{Deserialize, Serialize};

/// A non-operator command bound to a single key.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Keybind {
    pub modifier: Vec<String>,
    pub key: String,
    #[serde(default)]
    pub mode: Mode,
    pub command: Command,
}

/// An operator row: matched only while the automaton waits for one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OperatorBind {
    pub modifier: Vec<String>,
    pub key: String,
    #[serde(default)]
    pub mode: Mode,
    pub op: Operator,
}

/// A motion row, completing an operator/count/motion triple.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MotionBind {
    pub modifier: Vec<String>,
    pub key: String,
    pub motion: Motion,
}

/// A spawn rule applied when a new client's `WM_CLASS` contains `class`.
/// A workspace of 0 stands for the current workspace.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Rule {
    pub class: String,
    #[serde(default)]
    pub workspace: usize,
    #[serde(default)]
    pub follow: bool,
    #[serde(default)]
    pub floating: bool,
    #[serde(default)]
    pub fullscreen: bool,
}

fn binding(modifier: &[&str], key: &str, mode: Mode, command: Command) -> Keybind {
    Keybind {
        modifier: modifier.iter().map(ToString::to_string).collect(),
        key: key.to_owned(),
        mode,
        command,
    }
}

pub(super) fn default_keybinds() -> Vec<Keybind> {
    use Command::*;
    let mut binds = vec![
        binding(&["Mod4"], "Return", Mode::Normal, Spawn(vec!["xterm".to_owned()])),
        binding(&["Mod4"], "b", Mode::Normal, ToggleBar),
        binding(&["Mod4"], "space", Mode::Normal, NextLayout),
        binding(&["Mod4", "Shift"], "space", Mode::Normal, PreviousLayout),
        binding(&["Mod4"], "t", Mode::Normal, ToggleFloat),
        binding(&["Mod4"], "f", Mode::Normal, ToggleFullscreen),
        binding(&["Mod4"], "m", Mode::Normal, MakeMaster),
        binding(&["Mod4"], "v", Mode::Normal, Paste),
        binding(&["Mod4"], "period", Mode::Normal, Replay),
        binding(&["Mod4"], "s", Mode::Normal, SendToScratchpad),
        binding(&["Mod4"], "u", Mode::Normal, GetFromScratchpad),
        binding(&["Mod4"], "BackSpace", Mode::Normal, FocusUrgent),
        binding(&["Mod4"], "grave", Mode::Normal, FocusLastWs),
        binding(&["Mod4"], "bracketright", Mode::Normal, FocusNextWs),
        binding(&["Mod4"], "bracketleft", Mode::Normal, FocusPrevWs),
        binding(&["Mod4"], "h", Mode::Normal, ResizeMaster(-5)),
        binding(&["Mod4"], "l", Mode::Normal, ResizeMaster(5)),
        binding(&["Mod4", "Shift"], "e", Mode::Normal, Quit(0)),
        binding(&["Mod4"], "g", Mode::Normal, ChangeMode(1)),
        binding(&["Mod4", "Shift"], "g", Mode::Normal, ChangeMode(2)),
        // Focus mode drives focus with bare keys, vi style.
        binding(&[], "j", Mode::Focus, FocusNextClient),
        binding(&[], "k", Mode::Focus, FocusPrevClient),
        binding(&["Shift"], "j", Mode::Focus, MoveCurrentDown),
        binding(&["Shift"], "k", Mode::Focus, MoveCurrentUp),
        binding(&[], "Escape", Mode::Focus, ChangeMode(0)),
        // Floating mode nudges and resizes the focused float.
        binding(&[], "h", Mode::Floating, MoveFloatX(-20)),
        binding(&[], "l", Mode::Floating, MoveFloatX(20)),
        binding(&[], "k", Mode::Floating, MoveFloatY(-20)),
        binding(&[], "j", Mode::Floating, MoveFloatY(20)),
        binding(&["Shift"], "h", Mode::Floating, ResizeFloatWidth(-20)),
        binding(&["Shift"], "l", Mode::Floating, ResizeFloatWidth(20)),
        binding(&["Shift"], "k", Mode::Floating, ResizeFloatHeight(-20)),
        binding(&["Shift"], "j", Mode::Floating, ResizeFloatHeight(20)),
        binding(&[], "c", Mode::Floating, TeleportClient(3)),
        binding(&[], "Escape", Mode::Floating, ChangeMode(0)),
    ];
    for i in 1..=5 {
        binds.push(binding(
            &["Mod4"],
            &i.to_string(),
            Mode::Normal,
            ChangeWs(i),
        ));
        binds.push(binding(
            &["Mod4", "Shift"],
            &i.to_string(),
            Mode::Normal,
            CurrentToWs(i),
        ));
    }
    binds
}

fn operator(modifier: &[&str], key: &str, mode: Mode, op: Operator) -> OperatorBind {
    OperatorBind {
        modifier: modifier.iter().map(ToString::to_string).collect(),
        key: key.to_owned(),
        mode,
        op,
    }
}

pub(super) fn default_operators() -> Vec<OperatorBind> {
    vec![
        operator(&["Mod4"], "q", Mode::Normal, Operator::Kill),
        operator(&["Mod4"], "k", Mode::Normal, Operator::FocusUp),
        operator(&["Mod4"], "j", Mode::Normal, Operator::FocusDown),
        operator(&["Mod4", "Shift"], "k", Mode::Normal, Operator::MoveUp),
        operator(&["Mod4", "Shift"], "j", Mode::Normal, Operator::MoveDown),
        operator(&["Mod4"], "minus", Mode::Normal, Operator::ShrinkGaps),
        operator(&["Mod4"], "equal", Mode::Normal, Operator::GrowGaps),
        operator(&["Mod4"], "x", Mode::Normal, Operator::Cut),
    ]
}

fn motion(modifier: &[&str], key: &str, motion: Motion) -> MotionBind {
    MotionBind {
        modifier: modifier.iter().map(ToString::to_string).collect(),
        key: key.to_owned(),
        motion,
    }
}

pub(super) fn default_motions() -> Vec<MotionBind> {
    vec![
        motion(&["Mod4"], "c", Motion::Client),
        motion(&["Mod4"], "w", Motion::Workspace),
    ]
}

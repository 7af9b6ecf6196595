use serde::{Deserialize, Serialize};

/// Modes work the same way as they do in vi: the same key can mean
/// different things in different modes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Focus,
    Floating,
}

impl Mode {
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Mode::Normal),
            1 => Some(Mode::Focus),
            2 => Some(Mode::Floating),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_index(self) -> u32 {
        match self {
            Mode::Normal => 0,
            Mode::Focus => 1,
            Mode::Floating => 2,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

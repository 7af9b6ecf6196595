use crate::command::Command;
use crate::models::{Client, WindowHandle};
use crate::utils::xkeysym_lookup::{ModMask, XKeysym};

/// Events translated from the display server, dispatched by the manager.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone)]
pub enum DisplayEvent {
    /// A window asked to be mapped; the client carries everything read
    /// from the server (type, transient hint, class, initial geometry).
    WindowCreate(Client),
    /// The window is gone and must be unlinked.
    WindowDestroy(WindowHandle),
    /// The pointer entered the window.
    WindowEnter(WindowHandle),
    /// The window asked for focus unconditionally.
    WindowTakeFocus(WindowHandle),
    /// A mouse button went down on the window.
    MouseCombo(ModMask, u32, WindowHandle),
    /// A grabbed key combination was pressed.
    KeyCombo(ModMask, XKeysym),
    /// The window asked for a new configuration.
    ConfigureRequest(ConfigureRequestEvent),
    /// A `_NET_WM_STATE` client message.
    WindowStateChange(WindowHandle, WmStateAction, [Option<StateHint>; 2]),
    /// A command arriving through the display server, e.g. a pager
    /// setting `_NET_CURRENT_DESKTOP`.
    SendCommand(Command),
}

/// The add/remove/toggle selector of a `_NET_WM_STATE` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmStateAction {
    Remove,
    Add,
    Toggle,
}

impl WmStateAction {
    #[must_use]
    pub fn from_raw(raw: u64) -> Option<Self> {
        match raw {
            0 => Some(Self::Remove),
            1 => Some(Self::Add),
            2 => Some(Self::Toggle),
            _ => None,
        }
    }
}

/// The window states the manager reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateHint {
    Fullscreen,
    DemandsAttention,
}

/// Every field a window may ask to change, one per value-mask bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigureRequestEvent {
    pub handle: WindowHandle,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub border_width: Option<u32>,
    pub sibling: Option<WindowHandle>,
    pub stack_mode: Option<u32>,
}

use crate::display_event::ConfigureRequestEvent;
use crate::models::{Geometry, WindowHandle};
use serde::{Deserialize, Serialize};

/// The border colour roles a window can be drawn with. The display
/// server resolves them to allocated pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderRole {
    Focused,
    PrevFocused,
    Unfocused,
    Urgent,
}

/// Responses from the manager; the display server acts on these.
#[derive(Debug, Clone)]
pub enum DisplayAction {
    MapWindow(WindowHandle),
    UnmapWindow(WindowHandle),
    /// Position, size and border width from the draw pass.
    MoveResizeWindow(WindowHandle, Geometry, u32),
    SetBorderColour(WindowHandle, BorderRole),
    /// Restack the given windows bottom to top.
    RestackWindows(Vec<WindowHandle>),
    /// Give the window the input focus.
    FocusWindow(WindowHandle),
    /// Nicely ask a window to close via `WM_DELETE_WINDOW`.
    DeleteWindow(WindowHandle),
    /// Forcibly disconnect the window's client.
    KillWindow(WindowHandle),
    GrabButtons(WindowHandle),
    /// Release the frozen pointer grab after a click was handled.
    ReplayPointer,
    SetFrameExtents(WindowHandle, u32),
    /// Set or clear `_NET_WM_STATE_FULLSCREEN` on the window.
    SetFullscreenState(WindowHandle, bool),
    SetActiveWindow(Option<WindowHandle>),
    /// Zero-based desktop index for `_NET_CURRENT_DESKTOP`.
    SetCurrentDesktop(usize),
    SetWorkarea(Geometry),
    /// Forward a configure request, honouring every value-mask bit.
    ConfigureWindowRequest(ConfigureRequestEvent),
}

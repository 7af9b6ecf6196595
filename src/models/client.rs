//! Client information.
use crate::layouts::Layout;
use crate::models::Geometry;
use serde::{Deserialize, Serialize};
use x11_dl::xlib;

type MockHandle = u32;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowHandle {
    MockHandle(MockHandle),
    XlibHandle(xlib::Window),
}

impl Default for WindowHandle {
    fn default() -> Self {
        WindowHandle::MockHandle(0)
    }
}

impl WindowHandle {
    #[must_use]
    pub const fn xlib_handle(self) -> Option<xlib::Window> {
        match self {
            WindowHandle::XlibHandle(h) => Some(h),
            WindowHandle::MockHandle(_) => None,
        }
    }
}

/// The EWMH window type, read from `_NET_WM_WINDOW_TYPE` when the window
/// first asks to be mapped.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    Normal,
    Dialog,
    Splash,
    Dock,
    Toolbar,
    Notification,
    DropdownMenu,
    PopupMenu,
    Tooltip,
}

impl WindowType {
    /// Dock and toolbar windows are never managed.
    #[must_use]
    pub fn is_unmanaged(self) -> bool {
        matches!(self, WindowType::Dock | WindowType::Toolbar)
    }

    /// Window types that spawn in a floating state.
    #[must_use]
    pub fn must_float(self) -> bool {
        matches!(
            self,
            WindowType::Notification
                | WindowType::DropdownMenu
                | WindowType::Splash
                | WindowType::PopupMenu
                | WindowType::Tooltip
                | WindowType::Dialog
        )
    }
}

impl Default for WindowType {
    fn default() -> Self {
        WindowType::Normal
    }
}

/// One managed top-level window.
///
/// A client is owned by exactly one of: a workspace's client list, the
/// scratchpad slot, or a segment in the delete register.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Client {
    pub handle: WindowHandle,
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    /// The useless gap between this client and its neighbours.
    pub gap: u32,
    pub is_floating: bool,
    pub is_fullscreen: bool,
    pub is_transient: bool,
    pub is_urgent: bool,
    pub window_type: WindowType,
    /// `WM_CLASS` as (instance, class).
    pub class: (String, String),
    /// Whether the window advertises `WM_DELETE_WINDOW` in `WM_PROTOCOLS`.
    pub accepts_delete: bool,
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Client {
    #[must_use]
    pub fn new(handle: WindowHandle) -> Self {
        Self {
            handle,
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            gap: 0,
            is_floating: false,
            is_fullscreen: false,
            is_transient: false,
            is_urgent: false,
            window_type: WindowType::Normal,
            class: (String::new(), String::new()),
            accepts_delete: false,
        }
    }

    /// Floating, fullscreen and transient clients own their own geometry
    /// and are skipped by every tiling layout.
    #[must_use]
    pub fn is_fft(&self) -> bool {
        self.is_floating || self.is_fullscreen || self.is_transient
    }

    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        Geometry {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    pub fn set_geometry(&mut self, geom: Geometry) {
        self.x = geom.x;
        self.y = geom.y;
        self.w = geom.w;
        self.h = geom.h;
    }

    /// The rectangle and border width this client is actually drawn with.
    ///
    /// Fullscreen clients and the zoom layout take the stored rectangle
    /// with no border; floating clients keep their own rectangle behind a
    /// border; tiled clients are inset by their gap on each side and by
    /// the border width twice, so the gap sits around the border.
    #[must_use]
    pub fn display_geometry(&self, layout: Layout, zoom_gap: bool, border_px: u32) -> (Geometry, u32) {
        if layout == Layout::Zoom && zoom_gap && !self.is_floating {
            (self.geometry().inset(self.gap), 0)
        } else if self.is_floating {
            (self.geometry(), border_px)
        } else if self.is_fullscreen || layout == Layout::Zoom {
            (self.geometry(), 0)
        } else {
            let geom = Geometry {
                x: self.x + self.gap as i32,
                y: self.y + self.gap as i32,
                w: self.w.saturating_sub(2 * (self.gap + border_px)),
                h: self.h.saturating_sub(2 * (self.gap + border_px)),
            };
            (geom, border_px)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiled(gap: u32) -> Client {
        let mut c = Client::new(WindowHandle::MockHandle(1));
        c.set_geometry(Geometry::new(0, 20, 1920, 1060));
        c.gap = gap;
        c
    }

    #[test]
    fn tiled_client_is_inset_by_gap_and_border() {
        let c = tiled(10);
        let (geom, border) = c.display_geometry(Layout::VStack, false, 2);
        assert_eq!(border, 2);
        assert_eq!(geom, Geometry::new(10, 30, 1920 - 2 * 12, 1060 - 2 * 12));
    }

    #[test]
    fn fullscreen_client_keeps_its_rectangle_without_border() {
        let mut c = tiled(10);
        c.is_fullscreen = true;
        c.set_geometry(Geometry::new(0, 0, 1920, 1080));
        let (geom, border) = c.display_geometry(Layout::VStack, false, 2);
        assert_eq!(border, 0);
        assert_eq!(geom, Geometry::new(0, 0, 1920, 1080));
    }

    #[test]
    fn zoom_with_gap_disabled_draws_full_rectangle() {
        let c = tiled(10);
        let (geom, border) = c.display_geometry(Layout::Zoom, false, 2);
        assert_eq!(border, 0);
        assert_eq!(geom, Geometry::new(0, 20, 1920, 1060));
    }

    #[test]
    fn zoom_with_gap_enabled_insets_by_gap_only() {
        let c = tiled(10);
        let (geom, border) = c.display_geometry(Layout::Zoom, true, 2);
        assert_eq!(border, 0);
        assert_eq!(geom, Geometry::new(10, 30, 1900, 1040));
    }

    #[test]
    fn floating_client_keeps_stored_geometry_behind_border() {
        let mut c = tiled(10);
        c.is_floating = true;
        c.set_geometry(Geometry::new(100, 100, 400, 300));
        let (geom, border) = c.display_geometry(Layout::Grid, false, 2);
        assert_eq!(border, 2);
        assert_eq!(geom, Geometry::new(100, 100, 400, 300));
    }
}

//! `XWrap` setters.
use super::XWrap;
use crate::models::Geometry;
use std::ffi::CString;
use std::os::raw::c_long;
use x11_dl::xlib;

impl XWrap {
    /// Replaces a long-format window property.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn replace_property_long(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        type_: xlib::Atom,
        data: &[c_long],
    ) {
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                type_,
                32,
                xlib::PropModeReplace,
                data.as_ptr().cast::<u8>(),
                data.len() as i32,
            );
        }
    }

    pub fn set_utf8_property(&self, window: xlib::Window, property: xlib::Atom, value: &str) {
        if let Ok(cstring) = CString::new(value) {
            unsafe {
                (self.xlib.XChangeProperty)(
                    self.display,
                    window,
                    property,
                    self.atoms.UTF8String,
                    8,
                    xlib::PropModeReplace,
                    cstring.as_ptr().cast::<u8>(),
                    value.len() as i32,
                );
            }
        }
    }

    /// Publishes the zero-based `_NET_CURRENT_DESKTOP`.
    pub fn set_current_desktop(&self, index: usize) {
        self.replace_property_long(
            self.root,
            self.atoms.NetCurrentDesktop,
            xlib::XA_CARDINAL,
            &[index as c_long],
        );
    }

    pub fn set_workarea(&self, area: Geometry) {
        self.replace_property_long(
            self.root,
            self.atoms.NetWorkarea,
            xlib::XA_CARDINAL,
            &[
                c_long::from(area.x),
                c_long::from(area.y),
                c_long::from(area.w),
                c_long::from(area.h),
            ],
        );
    }

    pub fn set_active_window(&self, window: Option<xlib::Window>) {
        self.replace_property_long(
            self.root,
            self.atoms.NetActiveWindow,
            xlib::XA_WINDOW,
            &[window.unwrap_or(0) as c_long],
        );
    }

    /// Adds or removes `_NET_WM_STATE_FULLSCREEN` on the window.
    pub fn set_fullscreen_state(&self, window: xlib::Window, fullscreen: bool) {
        let atom = self.atoms.NetWMStateFullscreen;
        let mut states = self.get_window_states_atoms(window);
        if fullscreen {
            if states.contains(&atom) {
                return;
            }
            states.push(atom);
        } else {
            match states.iter().position(|s| s == &atom) {
                Some(index) => {
                    states.remove(index);
                }
                None => return,
            }
        }
        let data: Vec<c_long> = states.iter().map(|&s| s as c_long).collect();
        self.replace_property_long(window, self.atoms.NetWMState, xlib::XA_ATOM, &data);
    }

    /// `_NET_FRAME_EXTENTS`: the same space on every side, as the gap
    /// wraps around the border.
    pub fn set_frame_extents(&self, window: xlib::Window, space: u32) {
        let space = c_long::from(space);
        self.replace_property_long(
            window,
            self.atoms.NetFrameExtents,
            xlib::XA_CARDINAL,
            &[space, space, space, space],
        );
    }
}

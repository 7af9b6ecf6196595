//! `XWrap` getters.
use super::XWrap;
use crate::models::{Geometry, WindowType};
use std::ffi::CStr;
use std::os::raw::{c_int, c_long, c_uchar, c_uint, c_ulong};
use std::ptr;
use std::slice;
use x11_dl::xlib;

const MAX_PROPERTY_VALUE_LEN: c_long = 4096;

impl XWrap {
    /// The window's attributes, used for the override-redirect check.
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(&self, window: xlib::Window) -> Option<xlib::XWindowAttributes> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return None;
        }
        Some(attrs)
    }

    // `XGetGeometry`: https://tronche.com/gui/x/xlib/window-information/XGetGeometry.html
    pub fn get_geometry(&self, window: xlib::Window) -> Option<Geometry> {
        let mut root: xlib::Window = 0;
        let mut x: c_int = 0;
        let mut y: c_int = 0;
        let mut w: c_uint = 0;
        let mut h: c_uint = 0;
        let mut border: c_uint = 0;
        let mut depth: c_uint = 0;
        let status = unsafe {
            (self.xlib.XGetGeometry)(
                self.display,
                window,
                &mut root,
                &mut x,
                &mut y,
                &mut w,
                &mut h,
                &mut border,
                &mut depth,
            )
        };
        if status == 0 {
            return None;
        }
        Some(Geometry::new(x, y, w, h))
    }

    /// `WM_CLASS` as (instance, class).
    // `XGetClassHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetClassHint.html
    pub fn get_wm_class(&self, window: xlib::Window) -> (String, String) {
        let mut hint: xlib::XClassHint = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetClassHint)(self.display, window, &mut hint) };
        if status == 0 {
            return (String::new(), String::new());
        }
        let take = |raw: *mut std::os::raw::c_char| -> String {
            if raw.is_null() {
                return String::new();
            }
            let value = unsafe { CStr::from_ptr(raw) }
                .to_string_lossy()
                .into_owned();
            unsafe {
                (self.xlib.XFree)(raw.cast());
            }
            value
        };
        (take(hint.res_name), take(hint.res_class))
    }

    // `XGetTransientForHint`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTransientForHint.html
    pub fn get_transient_for(&self, window: xlib::Window) -> Option<xlib::Window> {
        let mut parent: xlib::Window = 0;
        let status =
            unsafe { (self.xlib.XGetTransientForHint)(self.display, window, &mut parent) };
        if status == 0 || parent == 0 {
            return None;
        }
        Some(parent)
    }

    /// The first recognised `_NET_WM_WINDOW_TYPE` atom.
    pub fn get_window_type(&self, window: xlib::Window) -> WindowType {
        for atom in self.get_property_atoms(window, self.atoms.NetWMWindowType) {
            let known = match atom {
                a if a == self.atoms.NetWMWindowTypeDock => Some(WindowType::Dock),
                a if a == self.atoms.NetWMWindowTypeToolbar => Some(WindowType::Toolbar),
                a if a == self.atoms.NetWMWindowTypeNotification => {
                    Some(WindowType::Notification)
                }
                a if a == self.atoms.NetWMWindowTypeDropdownMenu => {
                    Some(WindowType::DropdownMenu)
                }
                a if a == self.atoms.NetWMWindowTypeSplash => Some(WindowType::Splash),
                a if a == self.atoms.NetWMWindowTypePopupMenu => Some(WindowType::PopupMenu),
                a if a == self.atoms.NetWMWindowTypeTooltip => Some(WindowType::Tooltip),
                a if a == self.atoms.NetWMWindowTypeDialog => Some(WindowType::Dialog),
                _ => None,
            };
            if let Some(window_type) = known {
                return window_type;
            }
        }
        WindowType::Normal
    }

    /// Whether the window advertises `WM_DELETE_WINDOW`.
    // `XGetWMProtocols`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMProtocols.html
    pub fn accepts_delete(&self, window: xlib::Window) -> bool {
        let mut atoms: *mut xlib::Atom = ptr::null_mut();
        let mut count: c_int = 0;
        let status =
            unsafe { (self.xlib.XGetWMProtocols)(self.display, window, &mut atoms, &mut count) };
        if status == 0 || atoms.is_null() {
            return false;
        }
        let found = unsafe { slice::from_raw_parts(atoms, count as usize) }
            .contains(&self.atoms.WMDelete);
        unsafe {
            (self.xlib.XFree)(atoms.cast());
        }
        found
    }

    /// The atoms currently in the window's `_NET_WM_STATE`.
    pub fn get_window_states_atoms(&self, window: xlib::Window) -> Vec<xlib::Atom> {
        self.get_property_atoms(window, self.atoms.NetWMState)
    }

    /// Every direct child of the root window.
    // `XQueryTree`: https://tronche.com/gui/x/xlib/window-information/XQueryTree.html
    pub fn get_all_windows(&self) -> Vec<xlib::Window> {
        let mut root_return: xlib::Window = 0;
        let mut parent_return: xlib::Window = 0;
        let mut children: *mut xlib::Window = ptr::null_mut();
        let mut count: c_uint = 0;
        let status = unsafe {
            (self.xlib.XQueryTree)(
                self.display,
                self.root,
                &mut root_return,
                &mut parent_return,
                &mut children,
                &mut count,
            )
        };
        if status == 0 || children.is_null() {
            return Vec::new();
        }
        let windows = unsafe { slice::from_raw_parts(children, count as usize) }.to_vec();
        unsafe {
            (self.xlib.XFree)(children.cast());
        }
        windows
    }

    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_property_atoms(&self, window: xlib::Window, property: xlib::Atom) -> Vec<xlib::Atom> {
        let mut type_return: xlib::Atom = 0;
        let mut format_return: c_int = 0;
        let mut nitems_return: c_ulong = 0;
        let mut bytes_remaining: c_ulong = 0;
        let mut prop_return: *mut c_uchar = ptr::null_mut();
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                xlib::XA_ATOM,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_remaining,
                &mut prop_return,
            );
            if status != xlib::Success as c_int || prop_return.is_null() {
                return Vec::new();
            }
            #[allow(clippy::cast_ptr_alignment)]
            let atoms =
                slice::from_raw_parts(prop_return.cast::<xlib::Atom>(), nitems_return as usize)
                    .to_vec();
            (self.xlib.XFree)(prop_return.cast());
            atoms
        }
    }
}

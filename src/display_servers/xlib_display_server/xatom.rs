use std::ffi::CString;
use x11_dl::xlib;

// Specifications can be found here:
// https://specifications.freedesktop.org/wm-spec/1.3/ar01s03.html

#[derive(Clone, Debug)]
#[allow(non_snake_case)]
pub struct XAtom {
    pub WMProtocols: xlib::Atom,
    pub WMDelete: xlib::Atom,
    pub WMState: xlib::Atom,

    pub NetSupported: xlib::Atom,
    pub NetSupportingWmCheck: xlib::Atom,
    pub NetWMName: xlib::Atom,
    pub NetWMState: xlib::Atom,
    pub NetWMStateFullscreen: xlib::Atom,
    pub NetWMStateDemandsAttention: xlib::Atom,
    pub NetCloseWindow: xlib::Atom,
    pub NetActiveWindow: xlib::Atom,
    pub NetCurrentDesktop: xlib::Atom,
    pub NetNumberOfDesktops: xlib::Atom,
    pub NetDesktopViewport: xlib::Atom,
    pub NetDesktopGeometry: xlib::Atom,
    pub NetWorkarea: xlib::Atom,
    pub NetFrameExtents: xlib::Atom,

    pub NetWMWindowType: xlib::Atom,
    pub NetWMWindowTypeDock: xlib::Atom,
    pub NetWMWindowTypeToolbar: xlib::Atom,
    pub NetWMWindowTypeNotification: xlib::Atom,
    pub NetWMWindowTypeDropdownMenu: xlib::Atom,
    pub NetWMWindowTypeSplash: xlib::Atom,
    pub NetWMWindowTypePopupMenu: xlib::Atom,
    pub NetWMWindowTypeTooltip: xlib::Atom,
    pub NetWMWindowTypeDialog: xlib::Atom,

    pub UTF8String: xlib::Atom,
}

impl XAtom {
    pub fn net_supported(&self) -> Vec<xlib::Atom> {
        vec![
            self.NetSupported,
            self.NetSupportingWmCheck,
            self.NetWMName,
            self.NetWMState,
            self.NetWMStateFullscreen,
            self.NetWMStateDemandsAttention,
            self.NetCloseWindow,
            self.NetActiveWindow,
            self.NetCurrentDesktop,
            self.NetNumberOfDesktops,
            self.NetDesktopViewport,
            self.NetDesktopGeometry,
            self.NetWorkarea,
            self.NetFrameExtents,
            self.NetWMWindowType,
        ]
    }

    pub const fn get_name(&self, atom: xlib::Atom) -> &str {
        match atom {
            a if a == self.WMProtocols => "WM_PROTOCOLS",
            a if a == self.WMDelete => "WM_DELETE_WINDOW",
            a if a == self.WMState => "WM_STATE",
            a if a == self.NetSupported => "_NET_SUPPORTED",
            a if a == self.NetSupportingWmCheck => "_NET_SUPPORTING_WM_CHECK",
            a if a == self.NetWMName => "_NET_WM_NAME",
            a if a == self.NetWMState => "_NET_WM_STATE",
            a if a == self.NetWMStateFullscreen => "_NET_WM_STATE_FULLSCREEN",
            a if a == self.NetWMStateDemandsAttention => "_NET_WM_STATE_DEMANDS_ATTENTION",
            a if a == self.NetCloseWindow => "_NET_CLOSE_WINDOW",
            a if a == self.NetActiveWindow => "_NET_ACTIVE_WINDOW",
            a if a == self.NetCurrentDesktop => "_NET_CURRENT_DESKTOP",
            a if a == self.NetNumberOfDesktops => "_NET_NUMBER_OF_DESKTOPS",
            a if a == self.NetDesktopViewport => "_NET_DESKTOP_VIEWPORT",
            a if a == self.NetDesktopGeometry => "_NET_DESKTOP_GEOMETRY",
            a if a == self.NetWorkarea => "_NET_WORKAREA",
            a if a == self.NetFrameExtents => "_NET_FRAME_EXTENTS",
            a if a == self.NetWMWindowType => "_NET_WM_WINDOW_TYPE",
            a if a == self.NetWMWindowTypeDock => "_NET_WM_WINDOW_TYPE_DOCK",
            a if a == self.NetWMWindowTypeToolbar => "_NET_WM_WINDOW_TYPE_TOOLBAR",
            a if a == self.NetWMWindowTypeNotification => "_NET_WM_WINDOW_TYPE_NOTIFICATION",
            a if a == self.NetWMWindowTypeDropdownMenu => "_NET_WM_WINDOW_TYPE_DROPDOWN_MENU",
            a if a == self.NetWMWindowTypeSplash => "_NET_WM_WINDOW_TYPE_SPLASH",
            a if a == self.NetWMWindowTypePopupMenu => "_NET_WM_WINDOW_TYPE_POPUP_MENU",
            a if a == self.NetWMWindowTypeTooltip => "_NET_WM_WINDOW_TYPE_TOOLTIP",
            a if a == self.NetWMWindowTypeDialog => "_NET_WM_WINDOW_TYPE_DIALOG",
            a if a == self.UTF8String => "UTF8_STRING",
            _ => "(UNKNOWN)",
        }
    }

    pub fn new(xlib: &xlib::Xlib, dpy: *mut xlib::Display) -> Self {
        Self {
            WMProtocols: from(xlib, dpy, "WM_PROTOCOLS"),
            WMDelete: from(xlib, dpy, "WM_DELETE_WINDOW"),
            WMState: from(xlib, dpy, "WM_STATE"),

            NetSupported: from(xlib, dpy, "_NET_SUPPORTED"),
            NetSupportingWmCheck: from(xlib, dpy, "_NET_SUPPORTING_WM_CHECK"),
            NetWMName: from(xlib, dpy, "_NET_WM_NAME"),
            NetWMState: from(xlib, dpy, "_NET_WM_STATE"),
            NetWMStateFullscreen: from(xlib, dpy, "_NET_WM_STATE_FULLSCREEN"),
            NetWMStateDemandsAttention: from(xlib, dpy, "_NET_WM_STATE_DEMANDS_ATTENTION"),
            NetCloseWindow: from(xlib, dpy, "_NET_CLOSE_WINDOW"),
            NetActiveWindow: from(xlib, dpy, "_NET_ACTIVE_WINDOW"),
            NetCurrentDesktop: from(xlib, dpy, "_NET_CURRENT_DESKTOP"),
            NetNumberOfDesktops: from(xlib, dpy, "_NET_NUMBER_OF_DESKTOPS"),
            NetDesktopViewport: from(xlib, dpy, "_NET_DESKTOP_VIEWPORT"),
            NetDesktopGeometry: from(xlib, dpy, "_NET_DESKTOP_GEOMETRY"),
            NetWorkarea: from(xlib, dpy, "_NET_WORKAREA"),
            NetFrameExtents: from(xlib, dpy, "_NET_FRAME_EXTENTS"),

            NetWMWindowType: from(xlib, dpy, "_NET_WM_WINDOW_TYPE"),
            NetWMWindowTypeDock: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DOCK"),
            NetWMWindowTypeToolbar: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_TOOLBAR"),
            NetWMWindowTypeNotification: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_NOTIFICATION"),
            NetWMWindowTypeDropdownMenu: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DROPDOWN_MENU"),
            NetWMWindowTypeSplash: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_SPLASH"),
            NetWMWindowTypePopupMenu: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_POPUP_MENU"),
            NetWMWindowTypeTooltip: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_TOOLTIP"),
            NetWMWindowTypeDialog: from(xlib, dpy, "_NET_WM_WINDOW_TYPE_DIALOG"),

            UTF8String: from(xlib, dpy, "UTF8_STRING"),
        }
    }
}

fn from(xlib: &xlib::Xlib, dpy: *mut xlib::Display, s: &str) -> xlib::Atom {
    unsafe {
        (xlib.XInternAtom)(
            dpy,
            CString::new(s).unwrap_or_default().into_raw(),
            xlib::False,
        )
    }
}

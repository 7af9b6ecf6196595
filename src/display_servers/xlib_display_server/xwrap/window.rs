//! Xlib calls that act on a single window.
use super::XWrap;
use crate::display_event::ConfigureRequestEvent;
use crate::models::Geometry;
use std::os::raw::{c_int, c_long, c_uint};
use x11_dl::xlib;

impl XWrap {
    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn map_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XMapWindow)(self.display, window);
        }
    }

    // `XUnmapWindow`: https://tronche.com/gui/x/xlib/window/XUnmapWindow.html
    pub fn unmap_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XUnmapWindow)(self.display, window);
        }
    }

    /// Applies a rectangle and border width from the draw pass.
    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, geom: Geometry, border: u32) {
        unsafe {
            (self.xlib.XSetWindowBorderWidth)(self.display, window, border);
            (self.xlib.XMoveResizeWindow)(
                self.display,
                window,
                geom.x,
                geom.y,
                geom.w.max(1),
                geom.h.max(1),
            );
        }
    }

    pub fn set_window_border_color(&self, window: xlib::Window, pixel: std::os::raw::c_ulong) {
        unsafe {
            (self.xlib.XSetWindowBorder)(self.display, window, pixel);
        }
    }

    /// Raises the windows in order, leaving the last one on top.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn restack(&self, windows: &[xlib::Window]) {
        for window in windows {
            unsafe {
                (self.xlib.XRaiseWindow)(self.display, *window);
            }
        }
    }

    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn focus_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                window,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
        }
    }

    /// Sends `WM_DELETE_WINDOW` so the client can close itself.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_delete(&self, window: xlib::Window) {
        log::info!("sending WM_DELETE_WINDOW to window {:#x}", window);
        let mut msg: xlib::XClientMessageEvent = unsafe { std::mem::zeroed() };
        msg.type_ = xlib::ClientMessage;
        msg.window = window;
        msg.message_type = self.atoms.WMProtocols;
        msg.format = 32;
        msg.data.set_long(0, self.atoms.WMDelete as c_long);
        msg.data.set_long(1, xlib::CurrentTime as c_long);
        let mut event: xlib::XEvent = msg.into();
        unsafe {
            (self.xlib.XSendEvent)(
                self.display,
                window,
                xlib::False,
                xlib::NoEventMask,
                &mut event,
            );
        }
    }

    /// Disconnects the window's client outright.
    // `XKillClient`: https://tronche.com/gui/x/xlib/window-and-session-manager/XKillClient.html
    pub fn kill_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XKillClient)(self.display, window);
        }
    }

    /// Listens for button presses on the window, synchronously so the
    /// click can be replayed to the client afterwards.
    // `XGrabButton`: https://tronche.com/gui/x/xlib/input/XGrabButton.html
    pub fn grab_buttons(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XUngrabButton)(self.display, xlib::AnyButton as u32, xlib::AnyModifier, window);
            (self.xlib.XGrabButton)(
                self.display,
                xlib::AnyButton as u32,
                xlib::AnyModifier,
                window,
                xlib::True,
                xlib::ButtonPressMask as c_uint,
                xlib::GrabModeSync,
                xlib::GrabModeAsync,
                0,
                0,
            );
        }
    }

    /// Lets the frozen pointer event continue to the client.
    // `XAllowEvents`: https://tronche.com/gui/x/xlib/input/XAllowEvents.html
    pub fn allow_replay_pointer(&self) {
        unsafe {
            (self.xlib.XAllowEvents)(self.display, xlib::ReplayPointer, xlib::CurrentTime);
        }
    }

    /// Subscribes to the per-client events the manager needs.
    pub fn subscribe_to_client_events(&self, window: xlib::Window) {
        let mut mask = xlib::PropertyChangeMask;
        if self.focus_mouse {
            mask |= xlib::EnterWindowMask;
        }
        unsafe {
            (self.xlib.XSelectInput)(self.display, window, mask);
        }
    }

    /// Forwards a configure request, honouring exactly the bits the
    /// window asked for.
    // `XConfigureWindow`: https://tronche.com/gui/x/xlib/window/XConfigureWindow.html
    pub fn configure_window_request(&self, change: &ConfigureRequestEvent) {
        let Some(window) = change.handle.xlib_handle() else {
            return;
        };
        let mut mask: c_uint = 0;
        let mut changes = xlib::XWindowChanges {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            border_width: 0,
            sibling: 0,
            stack_mode: 0,
        };
        if let Some(x) = change.x {
            mask |= c_uint::from(xlib::CWX);
            changes.x = x;
        }
        if let Some(y) = change.y {
            mask |= c_uint::from(xlib::CWY);
            changes.y = y;
        }
        if let Some(w) = change.width {
            mask |= c_uint::from(xlib::CWWidth);
            changes.width = w as c_int;
        }
        if let Some(h) = change.height {
            mask |= c_uint::from(xlib::CWHeight);
            changes.height = h as c_int;
        }
        if let Some(border) = change.border_width {
            mask |= c_uint::from(xlib::CWBorderWidth);
            changes.border_width = border as c_int;
        }
        if let Some(sibling) = change.sibling.and_then(|s| s.xlib_handle()) {
            mask |= c_uint::from(xlib::CWSibling);
            changes.sibling = sibling;
        }
        if let Some(stack_mode) = change.stack_mode {
            mask |= c_uint::from(xlib::CWStackMode);
            changes.stack_mode = stack_mode as c_int;
        }
        if mask == 0 {
            return;
        }
        unsafe {
            (self.xlib.XConfigureWindow)(self.display, window, mask, &mut changes);
        }
    }
}

use crate::config::Config;
use crate::display_action::{BorderRole, DisplayAction};
use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::models::{Screen, WindowHandle};
use futures::prelude::*;
use std::pin::Pin;

mod event_translate;
mod xatom;
mod xwrap;
pub use xwrap::XWrap;

pub struct XlibDisplayServer {
    xw: XWrap,
}

impl DisplayServer for XlibDisplayServer {
    fn new(config: &Config) -> Result<Self> {
        let mut xw = XWrap::new()?;
        xw.init(config);
        Ok(Self { xw })
    }

    fn screen(&self) -> Screen {
        self.xw.screen()
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        let mut events = vec![];
        for _ in 0..self.xw.queue_len() {
            let raw_event = self.xw.get_next_event();
            if let Some(event) = event_translate::from_xevent(&self.xw, raw_event) {
                log::trace!("DisplayEvent: {:?}", event);
                events.push(event);
            }
        }
        events
    }

    fn execute_action(&mut self, act: DisplayAction) {
        log::trace!("DisplayAction: {:?}", act);
        let xw = &self.xw;
        match act {
            DisplayAction::MapWindow(handle) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.map_window(window);
                }
            }
            DisplayAction::UnmapWindow(handle) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.unmap_window(window);
                }
            }
            DisplayAction::MoveResizeWindow(handle, geom, border) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.move_resize_window(window, geom, border);
                }
            }
            DisplayAction::SetBorderColour(handle, role) => {
                if let Some(window) = handle.xlib_handle() {
                    let pixel = match role {
                        BorderRole::Focused => xw.colors.focused,
                        BorderRole::PrevFocused => xw.colors.prev_focused,
                        BorderRole::Unfocused => xw.colors.unfocused,
                        BorderRole::Urgent => xw.colors.urgent,
                    };
                    xw.set_window_border_color(window, pixel);
                }
            }
            DisplayAction::RestackWindows(handles) => {
                let windows: Vec<_> = handles
                    .into_iter()
                    .filter_map(WindowHandle::xlib_handle)
                    .collect();
                xw.restack(&windows);
            }
            DisplayAction::FocusWindow(handle) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.focus_window(window);
                }
            }
            DisplayAction::DeleteWindow(handle) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.send_delete(window);
                }
            }
            DisplayAction::KillWindow(handle) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.kill_window(window);
                }
            }
            DisplayAction::GrabButtons(handle) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.grab_buttons(window);
                }
            }
            DisplayAction::ReplayPointer => xw.allow_replay_pointer(),
            DisplayAction::SetFrameExtents(handle, space) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.set_frame_extents(window, space);
                }
            }
            DisplayAction::SetFullscreenState(handle, fullscreen) => {
                if let Some(window) = handle.xlib_handle() {
                    xw.set_fullscreen_state(window, fullscreen);
                }
            }
            DisplayAction::SetActiveWindow(handle) => {
                xw.set_active_window(handle.and_then(WindowHandle::xlib_handle));
            }
            DisplayAction::SetCurrentDesktop(index) => xw.set_current_desktop(index),
            DisplayAction::SetWorkarea(area) => xw.set_workarea(area),
            DisplayAction::ConfigureWindowRequest(change) => {
                xw.configure_window_request(&change);
            }
        }
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>> {
        let task_notify = self.xw.task_notify.clone();
        Box::pin(async move {
            task_notify.notified().await;
        })
    }

    fn flush(&self) {
        self.xw.flush();
    }

    fn connection_ok(&self) -> bool {
        self.xw.connection_ok()
    }

    fn cleanup(&mut self) {
        self.xw.cleanup();
    }
}

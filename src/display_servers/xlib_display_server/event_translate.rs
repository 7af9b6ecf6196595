//! Translates raw xlib events into display events.
use super::XWrap;
use crate::command::Command;
use crate::display_event::{ConfigureRequestEvent, DisplayEvent, StateHint, WmStateAction};
use crate::models::{Client, WindowHandle};
use std::os::raw::c_long;
use x11_dl::xlib;

pub fn from_xevent(xw: &XWrap, raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    match raw_event.get_type() {
        // A new window asks to be displayed.
        xlib::MapRequest => from_map_request(xw, raw_event),
        // A window was unmapped.
        xlib::UnmapNotify => from_unmap_event(xw, raw_event),
        // A window is gone.
        xlib::DestroyNotify => from_destroy_notify(raw_event),
        xlib::ClientMessage => from_client_message(xw, raw_event),
        xlib::ConfigureRequest => from_configure_request(raw_event),
        xlib::EnterNotify => from_enter_notify(xw, raw_event),
        xlib::ButtonPress => Some(from_button_press(raw_event)),
        xlib::KeyPress => Some(from_key_press(xw, raw_event)),
        _ => None,
    }
}

fn from_map_request(xw: &XWrap, raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    let event = xlib::XMapRequestEvent::from(raw_event);
    let attrs = xw.get_window_attrs(event.window)?;
    if attrs.override_redirect != 0 {
        return None;
    }
    xw.subscribe_to_client_events(event.window);
    let mut client = Client::new(WindowHandle::XlibHandle(event.window));
    client.window_type = xw.get_window_type(event.window);
    client.is_transient = xw.get_transient_for(event.window).is_some();
    if let Some(geom) = xw.get_geometry(event.window) {
        client.set_geometry(geom);
    }
    client.class = xw.get_wm_class(event.window);
    client.accepts_delete = xw.accepts_delete(event.window);
    Some(DisplayEvent::WindowCreate(client))
}

fn from_unmap_event(xw: &XWrap, raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    let event = xlib::XUnmapEvent::from(raw_event);
    // Unmaps reported to the root are synthetic; the client is managed
    // through its own notification.
    if event.event == xw.root() {
        return None;
    }
    Some(DisplayEvent::WindowDestroy(WindowHandle::XlibHandle(
        event.window,
    )))
}

fn from_destroy_notify(raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    let event = xlib::XDestroyWindowEvent::from(raw_event);
    Some(DisplayEvent::WindowDestroy(WindowHandle::XlibHandle(
        event.window,
    )))
}

fn from_client_message(xw: &XWrap, raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    let event = xlib::XClientMessageEvent::from(raw_event);
    log::trace!(
        "client message: {} : {:?}",
        event.window,
        xw.atoms.get_name(event.message_type)
    );
    let handle = WindowHandle::XlibHandle(event.window);

    if event.message_type == xw.atoms.NetWMState {
        let action = WmStateAction::from_raw(event.data.get_long(0) as u64)?;
        let to_hint = |raw: c_long| -> Option<StateHint> {
            match raw as xlib::Atom {
                a if a == xw.atoms.NetWMStateFullscreen => Some(StateHint::Fullscreen),
                a if a == xw.atoms.NetWMStateDemandsAttention => {
                    Some(StateHint::DemandsAttention)
                }
                _ => None,
            }
        };
        let states = [to_hint(event.data.get_long(1)), to_hint(event.data.get_long(2))];
        return Some(DisplayEvent::WindowStateChange(handle, action, states));
    }
    if event.message_type == xw.atoms.NetCloseWindow {
        return Some(DisplayEvent::WindowDestroy(handle));
    }
    if event.message_type == xw.atoms.NetActiveWindow {
        return Some(DisplayEvent::WindowTakeFocus(handle));
    }
    if event.message_type == xw.atoms.NetCurrentDesktop {
        let index = event.data.get_long(0);
        return Some(DisplayEvent::SendCommand(Command::ChangeWs(
            index as i32 + 1,
        )));
    }
    None
}

fn from_configure_request(raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    let event = xlib::XConfigureRequestEvent::from(raw_event);
    let mask = event.value_mask as u16;
    let masked = |bit: u16| mask & bit != 0;
    let change = ConfigureRequestEvent {
        handle: WindowHandle::XlibHandle(event.window),
        x: masked(xlib::CWX).then_some(event.x),
        y: masked(xlib::CWY).then_some(event.y),
        width: masked(xlib::CWWidth).then_some(event.width as u32),
        height: masked(xlib::CWHeight).then_some(event.height as u32),
        border_width: masked(xlib::CWBorderWidth).then_some(event.border_width as u32),
        sibling: masked(xlib::CWSibling)
            .then_some(WindowHandle::XlibHandle(event.above)),
        stack_mode: masked(xlib::CWStackMode).then_some(event.detail as u32),
    };
    Some(DisplayEvent::ConfigureRequest(change))
}

fn from_enter_notify(xw: &XWrap, raw_event: xlib::XEvent) -> Option<DisplayEvent> {
    let event = xlib::XCrossingEvent::from(raw_event);
    if event.mode != xlib::NotifyNormal || event.detail == xlib::NotifyInferior {
        return None;
    }
    if event.window == xw.root() {
        return None;
    }
    Some(DisplayEvent::WindowEnter(WindowHandle::XlibHandle(
        event.window,
    )))
}

fn from_button_press(raw_event: xlib::XEvent) -> DisplayEvent {
    let event = xlib::XButtonPressedEvent::from(raw_event);
    DisplayEvent::MouseCombo(
        event.state,
        event.button,
        WindowHandle::XlibHandle(event.window),
    )
}

fn from_key_press(xw: &XWrap, raw_event: xlib::XEvent) -> DisplayEvent {
    let event = xlib::XKeyEvent::from(raw_event);
    let sym = xw.keycode_to_keysym(event.keycode);
    DisplayEvent::KeyCombo(event.state, sym)
}

use crate::display_action::DisplayAction;
use crate::display_event::{ConfigureRequestEvent, StateHint, WmStateAction};
use crate::display_servers::DisplayServer;
use crate::manager::Manager;
use crate::models::{Client, WindowHandle};

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// A window asked to be mapped: adopt it as a client.
    /// Returns true if the changes need to be rendered.
    pub fn window_created_handler(&mut self, mut client: Client) -> bool {
        // Don't add the window if the manager already knows about it.
        if self.state.find_client(client.handle).is_some() {
            return false;
        }
        if client.window_type.is_unmanaged() {
            return false;
        }
        log::info!("mapping request for window {:?}", client.handle);

        if client.window_type.must_float() || client.is_transient {
            client.is_floating = true;
        }
        if client.is_floating {
            if client.w <= 1 {
                client.w = self.config.float_spawn_width;
            }
            if client.h <= 1 {
                client.h = self.config.float_spawn_height;
            }
            if self.config.center_floating {
                let bar = self.state.current_ws().bar_height;
                client.x = (i64::from(self.state.screen.width) / 2
                    - i64::from(client.w) / 2) as i32;
                client.y = ((i64::from(self.state.screen.height)
                    - i64::from(bar)
                    - i64::from(client.h))
                    / 2)
                .max(0) as i32;
            }
        }
        client.gap = self.state.current_ws().gap;
        let handle = client.handle;
        self.state.actions.push_back(DisplayAction::SetFrameExtents(
            handle,
            client.gap + self.config.border_px,
        ));
        self.state.current_ws_mut().append(client);
        self.apply_rules(handle);

        // A rule may have sent the client to another workspace already.
        if self.state.current_ws().contains(handle) {
            self.state.actions.push_back(DisplayAction::MapWindow(handle));
            self.state.update_focused_client(Some(handle));
            self.state
                .actions
                .push_back(DisplayAction::GrabButtons(handle));
        }
        true
    }

    /// The window is gone, or asked to be closed via `_NET_CLOSE_WINDOW`.
    pub fn window_destroyed_handler(&mut self, handle: WindowHandle) -> bool {
        if self.state.find_client(handle).is_none() {
            return false;
        }
        self.state.remove_client(handle, true);
        true
    }

    /// The pointer entered a window; focus follows it outside zoom.
    pub fn window_enter_handler(&mut self, handle: WindowHandle) -> bool {
        if !self.config.focus_mouse || self.state.current_ws().layout == crate::layouts::Layout::Zoom
        {
            return false;
        }
        self.focus_window(handle);
        true
    }

    /// A mouse button went down on a window.
    pub fn mouse_combo_handler(&mut self, _mask: u32, button: u32, handle: WindowHandle) -> bool {
        if !self.config.focus_mouse_click {
            return false;
        }
        if button == 1 {
            self.focus_window(handle);
        }
        // The pointer grab froze the click; let the client have it back.
        self.state.actions.push_back(DisplayAction::ReplayPointer);
        button == 1
    }

    /// Focuses the window, so long as a client owns it.
    pub fn focus_window(&mut self, handle: WindowHandle) {
        match self.state.find_client(handle) {
            Some(ws) if ws == self.state.cw => {
                if self.state.current_ws().current != Some(handle) {
                    self.state.update_focused_client(Some(handle));
                }
            }
            Some(_) => {}
            None => log::warn!("no client owns the window {:?}", handle),
        }
    }

    /// Honours every value-mask bit of a configure request, clamping the
    /// size to the screen and keeping the window clear of a top bar.
    pub fn configure_request_handler(&mut self, mut change: ConfigureRequestEvent) -> bool {
        log::info!("configure request for window {:?}", change.handle);
        if let Some(y) = change.y.as_mut() {
            if !self.state.bar_bottom {
                *y += self.state.current_ws().bar_height as i32;
            }
        }
        if let Some(w) = change.width.as_mut() {
            let max = self.state.screen.width.saturating_sub(self.config.border_px);
            *w = (*w).min(max);
        }
        if let Some(h) = change.height.as_mut() {
            let max = self
                .state
                .screen
                .height
                .saturating_sub(self.config.border_px);
            *h = (*h).min(max);
        }
        self.state
            .actions
            .push_back(DisplayAction::ConfigureWindowRequest(change));
        true
    }

    /// `_NET_WM_STATE`: up to two state atoms per message.
    pub fn window_state_handler(
        &mut self,
        handle: WindowHandle,
        action: WmStateAction,
        states: [Option<StateHint>; 2],
    ) -> bool {
        if self.state.find_client(handle).is_none() {
            return false;
        }
        for state in states.into_iter().flatten() {
            match state {
                StateHint::Fullscreen => {
                    let set = self.resolve_toggle(action, |c| c.is_fullscreen, handle);
                    self.state.set_fullscreen(handle, set);
                }
                StateHint::DemandsAttention => {
                    let set = self.resolve_toggle(action, |c| c.is_urgent, handle);
                    self.state.set_urgent(handle, set);
                }
            }
        }
        true
    }

    fn resolve_toggle(
        &self,
        action: WmStateAction,
        flag: impl Fn(&Client) -> bool,
        handle: WindowHandle,
    ) -> bool {
        match action {
            WmStateAction::Add => true,
            WmStateAction::Remove => false,
            WmStateAction::Toggle => {
                let current = self
                    .state
                    .find_client(handle)
                    .and_then(|ws| self.state.ws(ws).client(handle))
                    .map_or(false, flag);
                !current
            }
        }
    }

    /// Politely closes the focused client of `ws`, or disconnects it
    /// when it does not speak `WM_DELETE_WINDOW`.
    pub fn kill_client(&mut self, ws: usize, refocus: bool) {
        let Some(current) = self.state.ws(ws).current else {
            return;
        };
        let polite = self
            .state
            .ws(ws)
            .client(current)
            .map_or(false, |c| c.accepts_delete);
        if polite {
            log::info!("politely closing client {:?}", current);
            self.state
                .actions
                .push_back(DisplayAction::DeleteWindow(current));
        } else {
            log::info!("forcibly killing client {:?}", current);
            self.state
                .actions
                .push_back(DisplayAction::KillWindow(current));
        }
        self.state.remove_client(current, refocus);
    }

    pub fn kill_ws(&mut self, ws: usize) {
        log::info!("killing off workspace <{}>", ws);
        while !self.state.ws(ws).is_empty() {
            let last = self.state.ws(ws).len() == 1 && self.state.cw == ws;
            self.kill_client(ws, last);
        }
    }

    /// Applies the first spawn rule whose class fragment occurs in the
    /// client's instance or class name.
    fn apply_rules(&mut self, handle: WindowHandle) {
        let Some(ws) = self.state.find_client(handle) else {
            return;
        };
        let Some(client) = self.state.ws(ws).client(handle) else {
            return;
        };
        let (instance, class) = client.class.clone();
        let Some(rule) = self
            .config
            .rules
            .iter()
            .find(|r| instance.contains(&r.class) || class.contains(&r.class))
            .cloned()
        else {
            return;
        };
        log::debug!("applying rule for class fragment {:?}", rule.class);
        if let Some(client) = self.state.ws_mut(ws).client_mut(handle) {
            client.is_floating = rule.floating;
            client.is_fullscreen = rule.fullscreen;
        }
        if rule.workspace != 0 {
            self.client_to_ws(handle, rule.workspace, rule.follow);
        }
    }
}

//! The single source of truth for everything the manager tracks.
use crate::config::Config;
use crate::display_action::{BorderRole, DisplayAction};
use crate::layouts::{self, Layout};
use crate::models::{
    Client, DeleteRegister, Geometry, Mode, Operator, PressState, Replay, Screen, WindowHandle,
    Workspace,
};
use std::collections::VecDeque;
use std::io::Write;

pub struct State {
    /// The workspaces, referred to by 1-based index everywhere.
    pub workspaces: Vec<Workspace>,
    pub cw: usize,
    pub last_ws: usize,
    pub prev_layout: Layout,
    pub mode: Mode,
    pub press_state: PressState,
    pub pending_op: Option<Operator>,
    pub count: i32,
    pub scratchpad: Option<Client>,
    pub delete_register: DeleteRegister,
    pub replay: Option<Replay>,
    pub screen: Screen,
    pub bar_bottom: bool,
    pub actions: VecDeque<DisplayAction>,
    pub running: bool,
    pub exit_code: i32,
}

impl State {
    pub(crate) fn new(config: &Config) -> Self {
        let workspaces = (0..config.workspaces)
            .map(|_| {
                Workspace::new(
                    config.default_layout,
                    config.gap,
                    config.master_ratio,
                    config.bar_height,
                )
            })
            .collect();
        Self {
            workspaces,
            cw: config.default_workspace,
            last_ws: config.default_workspace,
            prev_layout: config.default_layout,
            mode: Mode::Normal,
            press_state: PressState::Operator,
            pending_op: None,
            count: 1,
            scratchpad: None,
            delete_register: DeleteRegister::new(config.delete_register_size),
            replay: None,
            screen: Screen::default(),
            bar_bottom: config.bar_bottom,
            actions: VecDeque::new(),
            running: true,
            exit_code: 0,
        }
    }

    #[must_use]
    pub fn ws(&self, index: usize) -> &Workspace {
        &self.workspaces[index - 1]
    }

    pub fn ws_mut(&mut self, index: usize) -> &mut Workspace {
        &mut self.workspaces[index - 1]
    }

    #[must_use]
    pub fn current_ws(&self) -> &Workspace {
        self.ws(self.cw)
    }

    pub fn current_ws_mut(&mut self) -> &mut Workspace {
        let cw = self.cw;
        self.ws_mut(cw)
    }

    /// Wraps a workspace number into `[1, N]`.
    #[must_use]
    pub fn correct_ws(&self, ws: i32) -> usize {
        let n = self.workspaces.len() as i32;
        let ws = if ws > n {
            ws - n
        } else if ws < 1 {
            ws + n
        } else {
            ws
        };
        ws.clamp(1, n) as usize
    }

    /// The 1-based workspace holding `handle`, searching every list.
    #[must_use]
    pub fn find_client(&self, handle: WindowHandle) -> Option<usize> {
        self.workspaces
            .iter()
            .position(|ws| ws.contains(handle))
            .map(|i| i + 1)
    }

    /// The drawable area of the current workspace, for `_NET_WORKAREA`.
    #[must_use]
    pub fn workarea(&self) -> Geometry {
        self.screen
            .drawable(self.current_ws().bar_height, self.bar_bottom)
    }

    /// Recomputes the layout of the current workspace.
    pub fn arrange(&mut self) {
        let cw = self.cw;
        let screen = self.screen;
        let bar_bottom = self.bar_bottom;
        layouts::arrange(self.ws_mut(cw), &screen, bar_bottom);
    }

    /// Makes `handle` the focused client of the current workspace and
    /// sorts out borders, stacking and the EWMH active window.
    pub fn update_focused_client(&mut self, handle: Option<WindowHandle>) {
        let Some(handle) = handle else {
            return;
        };
        if self.current_ws().is_empty() {
            let ws = self.current_ws_mut();
            ws.current = None;
            ws.prev_foc = None;
            self.actions
                .push_back(DisplayAction::SetActiveWindow(None));
            return;
        }
        if !self.current_ws().contains(handle) {
            log::warn!("tried to focus a client not on the current workspace");
            return;
        }

        {
            let ws = self.current_ws_mut();
            if Some(handle) == ws.prev_foc {
                ws.current = ws.prev_foc;
                ws.prev_foc = ws.predecessor_of(handle);
            } else if Some(handle) != ws.current {
                ws.prev_foc = ws.current;
                ws.current = Some(handle);
            }
        }

        log::info!("focusing client {:?}", handle);

        let ws = self.current_ws();
        let current = ws.current;
        let prev = ws.prev_foc;
        let mut colours = Vec::with_capacity(ws.len());
        for client in &ws.clients {
            let role = if Some(client.handle) == current {
                BorderRole::Focused
            } else if Some(client.handle) == prev {
                BorderRole::PrevFocused
            } else {
                BorderRole::Unfocused
            };
            colours.push((client.handle, role));
        }
        // Stack bottom to top: tiled, then floating and transient, then
        // fullscreen. The focused client tops its own layer only, so a
        // float is never buried under a tiled focus.
        let mut order: Vec<WindowHandle> = Vec::with_capacity(ws.len());
        let not_current = |c: &&Client| Some(c.handle) != current;
        let mut layer = |keep: &dyn Fn(&Client) -> bool| {
            order.extend(
                ws.clients
                    .iter()
                    .filter(|c| keep(c))
                    .filter(not_current)
                    .map(|c| c.handle),
            );
            if ws.client(handle).map_or(false, |c| keep(c)) {
                order.push(handle);
            }
        };
        layer(&|c| !c.is_fft());
        layer(&|c| c.is_fft() && !c.is_fullscreen);
        layer(&|c| c.is_fullscreen);

        for (h, role) in colours {
            self.actions
                .push_back(DisplayAction::SetBorderColour(h, role));
        }
        self.actions.push_back(DisplayAction::RestackWindows(order));
        self.actions
            .push_back(DisplayAction::SetActiveWindow(Some(handle)));
        self.actions.push_back(DisplayAction::FocusWindow(handle));
        self.arrange();
    }

    /// Unlinks a client from whichever workspace holds it and repairs
    /// that workspace's focus pointers. The client itself is handed back.
    pub fn detach_client(&mut self, handle: WindowHandle) -> Option<Client> {
        let wsi = self.find_client(handle)?;
        let ws = self.ws_mut(wsi);
        let client = ws.remove(handle)?;
        if ws.prev_foc == Some(handle) {
            ws.prev_foc = ws.current.and_then(|cur| ws.predecessor_of(cur));
        }
        if ws.current == Some(handle) || ws.len() <= 1 {
            ws.current = ws.prev_foc.or_else(|| ws.head());
        }
        if ws.is_empty() {
            ws.current = None;
            ws.prev_foc = None;
        }
        Some(client)
    }

    /// Removes a client entirely, refocusing when it lived on the
    /// current workspace.
    pub fn remove_client(&mut self, handle: WindowHandle, refocus: bool) {
        let Some(wsi) = self.find_client(handle) else {
            return;
        };
        log::info!("removing client {:?}", handle);
        self.detach_client(handle);
        if refocus && wsi == self.cw {
            let current = self.current_ws().current;
            self.update_focused_client(current);
        }
    }

    /// Changes a client's fullscreen state, geometry and EWMH property.
    pub fn set_fullscreen(&mut self, handle: WindowHandle, fullscreen: bool) {
        let Some(wsi) = self.find_client(handle) else {
            return;
        };
        let screen = self.screen;
        let Some(client) = self.ws_mut(wsi).client_mut(handle) else {
            return;
        };
        if client.is_fullscreen == fullscreen {
            return;
        }
        log::info!("setting fullscreen state of {:?} to {}", handle, fullscreen);
        client.is_fullscreen = fullscreen;
        if fullscreen {
            client.set_geometry(Geometry::new(0, 0, screen.width, screen.height));
        }
        self.actions
            .push_back(DisplayAction::SetFullscreenState(handle, fullscreen));
        if !fullscreen && wsi == self.cw {
            self.arrange();
        }
    }

    /// Changes a client's urgency hint and border colour.
    pub fn set_urgent(&mut self, handle: WindowHandle, urgent: bool) {
        let Some(wsi) = self.find_client(handle) else {
            return;
        };
        let is_current = self.ws(wsi).current == Some(handle);
        let Some(client) = self.ws_mut(wsi).client_mut(handle) else {
            return;
        };
        if client.is_urgent == urgent {
            return;
        }
        client.is_urgent = urgent;
        let role = if urgent {
            BorderRole::Urgent
        } else if is_current {
            BorderRole::Focused
        } else {
            BorderRole::Unfocused
        };
        self.actions
            .push_back(DisplayAction::SetBorderColour(handle, role));
    }

    /// One status line per workspace in debug builds, one line for the
    /// current workspace otherwise: `mode:layout:workspace:state:count`.
    pub fn emit_status(&self) {
        let mut stdout = std::io::stdout();
        #[cfg(debug_assertions)]
        for (i, ws) in self.workspaces.iter().enumerate() {
            writeln!(
                stdout,
                "{}:{}:{}:{}:{}",
                self.mode.as_index(),
                ws.layout.as_index(),
                i + 1,
                self.press_state.as_index(),
                ws.len()
            )
            .ok();
        }
        #[cfg(not(debug_assertions))]
        {
            let ws = self.current_ws();
            writeln!(
                stdout,
                "{}:{}:{}:{}:{}",
                self.mode.as_index(),
                ws.layout.as_index(),
                self.cw,
                self.press_state.as_index(),
                ws.len()
            )
            .ok();
        }
        stdout.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowHandle::MockHandle;

    fn state_with_clients(per_ws: &[u32]) -> State {
        let config = Config {
            workspaces: per_ws.len(),
            ..Config::default()
        };
        let mut state = State::new(&config);
        let mut id = 0;
        for (i, &n) in per_ws.iter().enumerate() {
            for _ in 0..n {
                id += 1;
                state.ws_mut(i + 1).append(Client::new(MockHandle(id)));
            }
            state.ws_mut(i + 1).current = state.ws(i + 1).head();
        }
        state
    }

    #[test]
    fn correct_ws_wraps_both_ways() {
        let state = state_with_clients(&[0, 0, 0]);
        assert_eq!(state.correct_ws(4), 1);
        assert_eq!(state.correct_ws(0), 3);
        assert_eq!(state.correct_ws(2), 2);
    }

    #[test]
    fn find_client_searches_all_workspaces() {
        let state = state_with_clients(&[2, 3]);
        assert_eq!(state.find_client(MockHandle(1)), Some(1));
        assert_eq!(state.find_client(MockHandle(5)), Some(2));
        assert_eq!(state.find_client(MockHandle(9)), None);
    }

    #[test]
    fn focusing_a_client_updates_the_focus_history() {
        let mut state = state_with_clients(&[3]);
        state.update_focused_client(Some(MockHandle(2)));
        assert_eq!(state.current_ws().current, Some(MockHandle(2)));
        assert_eq!(state.current_ws().prev_foc, Some(MockHandle(1)));
        state.update_focused_client(Some(MockHandle(3)));
        assert_eq!(state.current_ws().current, Some(MockHandle(3)));
        assert_eq!(state.current_ws().prev_foc, Some(MockHandle(2)));
    }

    #[test]
    fn refocusing_the_previous_client_steps_back_through_history() {
        let mut state = state_with_clients(&[3]);
        state.update_focused_client(Some(MockHandle(2)));
        state.update_focused_client(Some(MockHandle(3)));
        // Focusing prev_foc promotes it and looks up its predecessor.
        state.update_focused_client(Some(MockHandle(2)));
        assert_eq!(state.current_ws().current, Some(MockHandle(2)));
        assert_eq!(state.current_ws().prev_foc, Some(MockHandle(1)));
    }

    #[test]
    fn removing_the_current_client_falls_back_to_its_neighbour() {
        let mut state = state_with_clients(&[3]);
        state.update_focused_client(Some(MockHandle(2)));
        state.remove_client(MockHandle(2), true);
        assert_eq!(state.current_ws().len(), 2);
        let current = state.current_ws().current;
        assert!(current.is_some(), "no client took over the focus");
        assert!(state.current_ws().contains(current.unwrap()));
    }

    #[test]
    fn removing_the_last_client_clears_the_focus_pointers() {
        let mut state = state_with_clients(&[1]);
        state.remove_client(MockHandle(1), true);
        assert!(state.current_ws().is_empty());
        assert_eq!(state.current_ws().current, None);
        assert_eq!(state.current_ws().prev_foc, None);
    }

    #[test]
    fn focus_pointers_always_reference_list_members() {
        let mut state = state_with_clients(&[4]);
        state.update_focused_client(Some(MockHandle(3)));
        state.update_focused_client(Some(MockHandle(1)));
        for handle in [MockHandle(3), MockHandle(1), MockHandle(4)] {
            state.remove_client(handle, true);
            let ws = state.current_ws();
            if let Some(cur) = ws.current {
                assert!(ws.contains(cur), "current points outside the list");
            }
            if let Some(prev) = ws.prev_foc {
                assert!(ws.contains(prev), "prev_foc points outside the list");
            }
        }
    }

    #[test]
    fn fullscreen_takes_the_whole_screen_and_restores_on_unset() {
        let mut state = state_with_clients(&[2]);
        state.screen = Screen::new(1920, 1080);
        state.set_fullscreen(MockHandle(1), true);
        let c = state.current_ws().client(MockHandle(1)).unwrap();
        assert!(c.is_fullscreen);
        assert_eq!(c.geometry(), Geometry::new(0, 0, 1920, 1080));
        state.set_fullscreen(MockHandle(1), false);
        let c = state.current_ws().client(MockHandle(1)).unwrap();
        assert!(!c.is_fullscreen);
    }
}

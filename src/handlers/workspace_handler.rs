use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::manager::Manager;
use crate::models::WindowHandle;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Switches to workspace `ws`, mapping its clients and unmapping the
    /// old ones. Out-of-range and current indices are ignored.
    pub fn change_ws(&mut self, ws: i32) -> bool {
        let count = self.state.workspaces.len() as i32;
        if ws > count || ws <= 0 || ws as usize == self.state.cw {
            return false;
        }
        let ws = ws as usize;
        log::info!("changing from workspace <{}> to <{}>", self.state.cw, ws);

        let mapped: Vec<WindowHandle> =
            self.state.ws(ws).clients.iter().map(|c| c.handle).collect();
        let unmapped: Vec<WindowHandle> = self
            .state
            .current_ws()
            .clients
            .iter()
            .map(|c| c.handle)
            .collect();
        for handle in mapped {
            self.state.actions.push_back(DisplayAction::MapWindow(handle));
        }
        for handle in unmapped {
            self.state
                .actions
                .push_back(DisplayAction::UnmapWindow(handle));
        }

        self.state.last_ws = self.state.cw;
        self.state.cw = ws;
        let current = self.state.current_ws().current;
        self.state.update_focused_client(current);

        self.state
            .actions
            .push_back(DisplayAction::SetCurrentDesktop(ws - 1));
        let workarea = self.state.workarea();
        self.state
            .actions
            .push_back(DisplayAction::SetWorkarea(workarea));
        true
    }

    /// Moves a client from the current workspace to the tail of `ws`.
    pub fn client_to_ws(&mut self, handle: WindowHandle, ws: usize, follow: bool) {
        if ws == 0 || ws > self.state.workspaces.len() || ws == self.state.cw {
            return;
        }
        if !self.state.current_ws().contains(handle) {
            return;
        }
        let prev = self.state.current_ws().predecessor_of(handle);
        let Some(client) = self.state.current_ws_mut().remove(handle) else {
            return;
        };
        {
            let source = self.state.current_ws_mut();
            source.current = prev;
            if source.prev_foc == Some(handle) {
                source.prev_foc = None;
            }
        }
        let target = self.state.ws_mut(ws);
        target.append(client);
        target.current = Some(handle);

        self.state
            .actions
            .push_back(DisplayAction::UnmapWindow(handle));
        log::info!(
            "moved client {:?} from <{}> to <{}>",
            handle,
            self.state.cw,
            ws
        );
        if follow {
            self.change_ws(ws as i32);
        } else {
            self.state.update_focused_client(prev);
        }
    }

    pub fn current_to_ws(&mut self, ws: i32) -> bool {
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        if ws <= 0 {
            return false;
        }
        self.client_to_ws(current, ws as usize, self.config.follow_move);
        true
    }

    pub fn focus_next_ws(&mut self) -> bool {
        log::info!("focusing next workspace");
        let next = self.state.correct_ws(self.state.cw as i32 + 1);
        self.change_ws(next as i32)
    }

    pub fn focus_prev_ws(&mut self) -> bool {
        log::info!("focusing previous workspace");
        let prev = self.state.correct_ws(self.state.cw as i32 - 1);
        self.change_ws(prev as i32)
    }

    pub fn focus_last_ws(&mut self) -> bool {
        log::info!("focusing last workspace");
        self.change_ws(self.state.last_ws as i32)
    }

    /// Jumps to the first client with an urgency hint, anywhere.
    pub fn focus_urgent(&mut self) -> bool {
        let found = self.state.workspaces.iter().enumerate().find_map(|(i, ws)| {
            ws.clients
                .iter()
                .find(|c| c.is_urgent)
                .map(|c| (i + 1, c.handle))
        });
        let Some((ws, handle)) = found else {
            return false;
        };
        log::info!("focusing urgent client {:?} on workspace <{}>", handle, ws);
        self.change_ws(ws as i32);
        self.state.update_focused_client(Some(handle));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::Manager;

    #[test]
    fn switching_to_the_current_workspace_is_a_no_op() {
        let mut manager = Manager::new_test();
        manager.add_client(1, 1);
        assert!(!manager.change_ws(1));
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.state.cw, 1);
    }

    #[test]
    fn switching_out_of_range_is_ignored() {
        let mut manager = Manager::new_test();
        assert!(!manager.change_ws(0));
        assert!(!manager.change_ws(99));
        assert_eq!(manager.state.cw, 1);
    }

    #[test]
    fn scenario_switch_history_tracks_the_last_workspace() {
        let mut manager = Manager::new_test();
        manager.add_client(1, 1);
        manager.add_client(1, 2);
        manager.add_client(2, 3);
        manager.add_client(2, 4);
        manager.change_ws(2);
        manager.change_ws(1);
        manager.focus_last_ws();
        assert_eq!(manager.state.cw, 2);
        assert_eq!(manager.state.last_ws, 1);
    }

    #[test]
    fn switching_maps_the_new_clients_and_unmaps_the_old() {
        let mut manager = Manager::new_test();
        let a = manager.add_client(1, 1);
        let b = manager.add_client(2, 2);
        manager.change_ws(2);
        let actions: Vec<_> = manager.state.actions.iter().collect();
        assert!(actions
            .iter()
            .any(|a2| matches!(a2, DisplayAction::MapWindow(h) if *h == b)));
        assert!(actions
            .iter()
            .any(|a2| matches!(a2, DisplayAction::UnmapWindow(h) if *h == a)));
        assert!(actions
            .iter()
            .any(|a2| matches!(a2, DisplayAction::SetCurrentDesktop(1))));
    }

    #[test]
    fn moving_a_client_appends_it_to_the_target_tail() {
        let mut manager = Manager::new_test();
        let a = manager.add_client(1, 1);
        let b = manager.add_client(1, 2);
        manager.add_client(2, 3);
        manager.client_to_ws(b, 2, false);
        assert_eq!(manager.state.ws(1).len(), 1);
        assert_eq!(manager.state.ws(2).len(), 2);
        assert_eq!(manager.state.ws(2).tail(), Some(b));
        assert_eq!(manager.state.ws(2).current, Some(b));
        assert_eq!(manager.state.cw, 1);
        assert_eq!(manager.state.current_ws().current, Some(a));
    }

    #[test]
    fn moving_with_follow_switches_workspaces() {
        let mut manager = Manager::new_test();
        let a = manager.add_client(1, 1);
        manager.client_to_ws(a, 3, true);
        assert_eq!(manager.state.cw, 3);
        assert_eq!(manager.state.current_ws().current, Some(a));
    }

    #[test]
    fn moving_to_the_current_workspace_is_a_no_op() {
        let mut manager = Manager::new_test();
        let a = manager.add_client(1, 1);
        manager.client_to_ws(a, 1, false);
        assert_eq!(manager.state.ws(1).len(), 1);
    }

    #[test]
    fn next_and_prev_wrap_around_the_workspace_array() {
        let mut manager = Manager::new_test();
        manager.focus_prev_ws();
        assert_eq!(manager.state.cw, manager.state.workspaces.len());
        manager.focus_next_ws();
        assert_eq!(manager.state.cw, 1);
    }

    #[test]
    fn focus_urgent_switches_to_the_marked_client() {
        let mut manager = Manager::new_test();
        manager.add_client(1, 1);
        let b = manager.add_client(3, 2);
        manager
            .state
            .ws_mut(3)
            .client_mut(b)
            .unwrap()
            .is_urgent = true;
        assert!(manager.focus_urgent());
        assert_eq!(manager.state.cw, 3);
        assert_eq!(manager.state.current_ws().current, Some(b));
    }
}

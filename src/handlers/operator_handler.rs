use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::manager::Manager;
use crate::models::{Client, Motion, Operator, WindowHandle};

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Runs an operator against the next `count` clients or workspaces.
    /// Returns true if the changes need to be rendered.
    pub fn run_operator(&mut self, op: Operator, motion: Motion, count: i32) -> bool {
        if count <= 0 {
            return false;
        }
        match op {
            Operator::Kill => self.op_kill(motion, count),
            Operator::MoveUp => self.op_move(motion, count, true),
            Operator::MoveDown => self.op_move(motion, count, false),
            Operator::FocusUp => self.op_focus(motion, count, true),
            Operator::FocusDown => self.op_focus(motion, count, false),
            Operator::ShrinkGaps => {
                self.change_gaps(motion, count, -(self.config.op_gap_size as i32))
            }
            Operator::GrowGaps => self.change_gaps(motion, count, self.config.op_gap_size as i32),
            Operator::Cut => self.op_cut(motion, count),
        }
        true
    }

    fn op_kill(&mut self, motion: Motion, count: i32) {
        match motion {
            Motion::Workspace => {
                log::info!("killing {} workspaces", count);
                for i in (1..=count).rev() {
                    let ws = self.state.correct_ws(self.state.cw as i32 + i - 1);
                    self.kill_ws(ws);
                }
            }
            Motion::Client => {
                log::info!("killing {} clients", count);
                for i in 1..=count {
                    self.kill_client(self.state.cw, i == count);
                }
            }
        }
    }

    fn op_move(&mut self, motion: Motion, count: i32, up: bool) {
        if motion == Motion::Workspace {
            return;
        }
        self.move_client(count, up);
    }

    /// Moves the focused client past its neighbours.
    fn move_client(&mut self, count: i32, up: bool) {
        let ws = self.state.current_ws();
        let Some(current) = ws.current else {
            return;
        };
        if up {
            if ws.head() == Some(current) {
                return;
            }
            let Some(target) = ws.predecessor_of(current) else {
                return;
            };
            for _ in 0..count {
                self.state.current_ws_mut().move_down(target);
            }
        } else {
            if ws.tail() == Some(current) {
                return;
            }
            let mut target = current;
            for _ in 0..count {
                target = ws.next_with_wrap(target).unwrap_or(target);
            }
            for _ in 0..count {
                self.state.current_ws_mut().move_up(target);
            }
        }
    }

    fn op_focus(&mut self, motion: Motion, count: i32, up: bool) {
        for _ in 0..count {
            match (motion, up) {
                (Motion::Client, true) => {
                    self.focus_next_client();
                }
                (Motion::Client, false) => {
                    self.focus_prev_client();
                }
                (Motion::Workspace, true) => {
                    self.focus_next_ws();
                }
                (Motion::Workspace, false) => {
                    self.focus_prev_ws();
                }
            }
        }
    }

    pub fn focus_next_client(&mut self) -> bool {
        let ws = self.state.current_ws();
        let Some(current) = ws.current else {
            return false;
        };
        if ws.len() < 2 {
            return false;
        }
        log::info!("focusing next client");
        let next = ws.next_with_wrap(current);
        self.state.update_focused_client(next);
        true
    }

    pub fn focus_prev_client(&mut self) -> bool {
        let ws = self.state.current_ws();
        let Some(current) = ws.current else {
            return false;
        };
        if ws.len() < 2 {
            return false;
        }
        log::info!("focusing previous client");
        let prev = ws.predecessor_of(current).or_else(|| ws.tail());
        self.state.update_focused_client(prev);
        true
    }

    /// Changes gap sizes. A workspace motion also changes the gap that
    /// new clients inherit on the touched workspaces.
    fn change_gaps(&mut self, motion: Motion, count: i32, size: i32) {
        match motion {
            Motion::Workspace => {
                for offset in 0..count {
                    let wsi = self.state.correct_ws(self.state.cw as i32 + offset);
                    log::info!("changing gaps of workspace <{}> by {}px", wsi, size);
                    let ws = self.state.ws_mut(wsi);
                    ws.gap = (ws.gap as i32 + size).max(0) as u32;
                    let handles: Vec<WindowHandle> =
                        ws.clients.iter().map(|c| c.handle).collect();
                    for handle in handles {
                        self.change_client_gap(wsi, handle, size);
                    }
                }
            }
            Motion::Client => {
                let Some(mut handle) = self.state.current_ws().current else {
                    return;
                };
                for _ in 0..count {
                    log::info!("changing gaps of client {:?} by {}px", handle, size);
                    self.change_client_gap(self.state.cw, handle, size);
                    handle = self
                        .state
                        .current_ws()
                        .next_with_wrap(handle)
                        .unwrap_or(handle);
                }
            }
        }
    }

    fn change_client_gap(&mut self, ws: usize, handle: WindowHandle, size: i32) {
        let border_px = self.config.border_px;
        let Some(client) = self.state.ws_mut(ws).client_mut(handle) else {
            return;
        };
        if client.is_fullscreen {
            return;
        }
        client.gap = (client.gap as i32 + size).max(0) as u32;
        let space = client.gap + border_px;
        self.state
            .actions
            .push_back(DisplayAction::SetFrameExtents(handle, space));
    }

    /// Cuts clients or workspaces onto the delete register.
    ///
    /// A client motion whose count reaches the whole list degenerates to
    /// cutting the current workspace alone.
    fn op_cut(&mut self, motion: Motion, count: i32) {
        if self.state.current_ws().current.is_none() {
            return;
        }
        if self.state.delete_register.is_full() {
            log::warn!("no more register space");
            return;
        }
        let count = count as usize;
        let client_cnt = self.state.current_ws().len();

        if motion == Motion::Workspace {
            self.cut_workspaces(count);
        } else if count >= client_cnt {
            self.cut_workspaces(1);
        } else {
            self.cut_clients(count);
        }
    }

    fn cut_workspaces(&mut self, count: usize) {
        // Refuse outright if every segment cannot fit.
        let free = self.state.delete_register.capacity_left();
        if count > free {
            log::warn!("delete register cannot hold {} workspaces", count);
            return;
        }
        // Push the furthest workspace first, so pasting starts with the
        // current one.
        for i in (0..count).rev() {
            let wsi = self.state.correct_ws(self.state.cw as i32 + i as i32);
            let ws = self.state.ws_mut(wsi);
            let segment = std::mem::take(&mut ws.clients);
            ws.current = None;
            ws.prev_foc = None;
            for client in &segment {
                self.state
                    .actions
                    .push_back(DisplayAction::UnmapWindow(client.handle));
            }
            if let Err(returned) = self.state.delete_register.push(segment) {
                // Cannot happen after the capacity check; restore anyway.
                self.state.ws_mut(wsi).clients = returned;
            }
        }
    }

    fn cut_clients(&mut self, count: usize) {
        let cw = self.state.cw;
        let ws = self.state.ws_mut(cw);
        let Some(current) = ws.current else {
            return;
        };
        let Some(idx) = ws.index_of(current) else {
            return;
        };
        let len = ws.len();
        let new_current = ws.predecessor_of(current);

        // Walk forward `count` clients from the focus, wrapping through
        // the head, and detach them as one segment in walk order.
        let segment: Vec<Client> = if idx + count <= len {
            ws.clients.drain(idx..idx + count).collect()
        } else {
            let mut tail_part: Vec<Client> = ws.clients.drain(idx..).collect();
            let wrapped = count - tail_part.len();
            let head_part: Vec<Client> = ws.clients.drain(0..wrapped).collect();
            tail_part.extend(head_part);
            tail_part
        };

        if let Some(prev) = ws.prev_foc {
            if segment.iter().any(|c| c.handle == prev) {
                ws.prev_foc = None;
            }
        }
        ws.current = new_current;

        for client in &segment {
            self.state
                .actions
                .push_back(DisplayAction::UnmapWindow(client.handle));
        }
        self.state.update_focused_client(new_current);
        if let Err(returned) = self.state.delete_register.push(segment) {
            // The register was checked before cutting; put things back
            // rather than lose clients.
            let ws = self.state.ws_mut(cw);
            let at = ws.len().min(idx);
            ws.clients.splice(at..at, returned);
        }
    }

    /// Pops the last cut segment and splices it in after the focus.
    pub fn paste(&mut self) -> bool {
        let Some(segment) = self.state.delete_register.pop() else {
            log::warn!("no clients on the delete register");
            return false;
        };
        let handles: Vec<WindowHandle> = segment.iter().map(|c| c.handle).collect();
        let last = *handles.last().expect("register segments are never empty");

        let ws = self.state.current_ws_mut();
        let insert_at = ws
            .current
            .and_then(|c| ws.index_of(c))
            .map_or(0, |idx| idx + 1);
        ws.clients.splice(insert_at..insert_at, segment);
        ws.current = Some(last);

        for handle in handles {
            self.state.actions.push_back(DisplayAction::MapWindow(handle));
        }
        self.state.update_focused_client(Some(last));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowHandle::MockHandle;

    fn handles(manager: &Manager<crate::display_servers::MockDisplayServer>) -> Vec<WindowHandle> {
        manager
            .state
            .current_ws()
            .clients
            .iter()
            .map(|c| c.handle)
            .collect()
    }

    #[test]
    fn kill_operator_empties_the_workspace() {
        let mut manager = Manager::new_test();
        for i in 1..=3 {
            manager.add_client(1, i);
        }
        manager.run_operator(Operator::Kill, Motion::Client, 3);
        assert_eq!(manager.state.current_ws().len(), 0);
        assert!(manager.state.current_ws().head().is_none());
    }

    #[test]
    fn kill_operator_with_negative_count_does_nothing() {
        let mut manager = Manager::new_test();
        manager.add_client(1, 1);
        assert!(!manager.run_operator(Operator::Kill, Motion::Client, -2));
        assert_eq!(manager.state.current_ws().len(), 1);
    }

    #[test]
    fn focus_operator_cycles_with_wrap() {
        let mut manager = Manager::new_test();
        for i in 1..=3 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(1));
        manager.run_operator(Operator::FocusUp, Motion::Client, 2);
        assert_eq!(manager.state.current_ws().current, Some(MockHandle(3)));
        manager.run_operator(Operator::FocusUp, Motion::Client, 1);
        assert_eq!(manager.state.current_ws().current, Some(MockHandle(1)));
    }

    #[test]
    fn focus_prev_wraps_to_the_tail() {
        let mut manager = Manager::new_test();
        for i in 1..=3 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(1));
        manager.run_operator(Operator::FocusDown, Motion::Client, 1);
        assert_eq!(manager.state.current_ws().current, Some(MockHandle(3)));
    }

    #[test]
    fn grow_gaps_saturates_at_zero_when_shrinking() {
        let mut manager = Manager::new_test();
        let a = manager.add_client(1, 1);
        manager.run_operator(Operator::ShrinkGaps, Motion::Client, 1);
        assert_eq!(manager.state.current_ws().client(a).unwrap().gap, 0);
        manager.run_operator(Operator::GrowGaps, Motion::Client, 1);
        assert_eq!(
            manager.state.current_ws().client(a).unwrap().gap,
            manager.config.op_gap_size
        );
    }

    #[test]
    fn workspace_gap_motion_updates_the_baseline() {
        let mut manager = Manager::new_test();
        manager.add_client(1, 1);
        manager.run_operator(Operator::GrowGaps, Motion::Workspace, 1);
        assert_eq!(
            manager.state.current_ws().gap,
            manager.config.op_gap_size
        );
    }

    #[test]
    fn fullscreen_clients_keep_a_zero_gap() {
        let mut manager = Manager::new_test();
        let a = manager.add_client(1, 1);
        manager.state.set_fullscreen(a, true);
        manager.run_operator(Operator::GrowGaps, Motion::Client, 1);
        assert_eq!(manager.state.current_ws().client(a).unwrap().gap, 0);
    }

    #[test]
    fn cut_detaches_a_segment_and_refocuses_the_predecessor() {
        let mut manager = Manager::new_test();
        for i in 1..=3 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(2));
        manager.run_operator(Operator::Cut, Motion::Client, 1);
        assert_eq!(handles(&manager), [MockHandle(1), MockHandle(3)]);
        assert_eq!(manager.state.current_ws().current, Some(MockHandle(1)));
        assert_eq!(manager.state.delete_register.len(), 1);
    }

    #[test]
    fn scenario_cut_then_paste_on_another_workspace() {
        let mut manager = Manager::new_test();
        for i in 1..=3 {
            manager.add_client(1, i);
        }
        manager.add_client(2, 4);
        manager.state.current_ws_mut().current = Some(MockHandle(3));
        manager.run_operator(Operator::Cut, Motion::Client, 1);
        assert_eq!(manager.state.ws(1).len(), 2);

        manager.change_ws(2);
        assert!(manager.paste());
        assert_eq!(manager.state.ws(2).len(), 2);
        assert_eq!(manager.state.ws(1).len(), 2);
        assert_eq!(manager.state.current_ws().current, Some(MockHandle(3)));
        // The pasted window was mapped again.
        assert!(manager
            .state
            .actions
            .iter()
            .any(|a| matches!(a, DisplayAction::MapWindow(h) if *h == MockHandle(3))));
    }

    #[test]
    fn cut_wraps_through_the_head_of_the_list() {
        let mut manager = Manager::new_test();
        for i in 1..=4 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(3));
        manager.run_operator(Operator::Cut, Motion::Client, 3);
        // 3, 4 and 1 are cut; 2 remains.
        assert_eq!(handles(&manager), [MockHandle(2)]);
        let segment = manager.state.delete_register.pop().unwrap();
        let cut: Vec<_> = segment.iter().map(|c| c.handle).collect();
        assert_eq!(cut, [MockHandle(3), MockHandle(4), MockHandle(1)]);
    }

    #[test]
    fn cut_of_the_whole_list_degenerates_to_a_workspace_cut() {
        let mut manager = Manager::new_test();
        for i in 1..=2 {
            manager.add_client(1, i);
        }
        manager.run_operator(Operator::Cut, Motion::Client, 9);
        assert!(manager.state.current_ws().is_empty());
        assert_eq!(manager.state.current_ws().current, None);
        assert_eq!(manager.state.delete_register.len(), 1);
        assert_eq!(manager.state.delete_register.pop().unwrap().len(), 2);
    }

    #[test]
    fn workspace_cut_takes_whole_lists_in_paste_order() {
        let mut manager = Manager::new_test();
        manager.add_client(1, 1);
        manager.add_client(2, 2);
        manager.run_operator(Operator::Cut, Motion::Workspace, 2);
        assert!(manager.state.ws(1).is_empty());
        assert!(manager.state.ws(2).is_empty());
        // The current workspace's segment pops first.
        let first = manager.state.delete_register.pop().unwrap();
        assert_eq!(first[0].handle, MockHandle(1));
        let second = manager.state.delete_register.pop().unwrap();
        assert_eq!(second[0].handle, MockHandle(2));
    }

    #[test]
    fn cut_is_refused_when_the_register_is_full() {
        let mut manager = Manager::new_test();
        let capacity = manager.config.delete_register_size;
        for i in 0..capacity as u32 {
            manager.add_client(1, i + 1);
            manager.run_operator(Operator::Cut, Motion::Workspace, 1);
        }
        assert!(manager.state.delete_register.is_full());
        let a = manager.add_client(1, 99);
        manager.run_operator(Operator::Cut, Motion::Client, 1);
        assert!(
            manager.state.current_ws().contains(a),
            "cut should leave the state unchanged when refused"
        );
    }

    #[test]
    fn cut_and_paste_preserve_the_set_of_clients() {
        let mut manager = Manager::new_test();
        for i in 1..=5 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(2));
        manager.run_operator(Operator::Cut, Motion::Client, 2);
        manager.run_operator(Operator::Cut, Motion::Client, 1);
        manager.paste();
        manager.paste();
        let mut present = handles(&manager);
        present.sort_by_key(|h| match h {
            MockHandle(i) => *i,
            WindowHandle::XlibHandle(_) => u32::MAX,
        });
        assert_eq!(
            present,
            [
                MockHandle(1),
                MockHandle(2),
                MockHandle(3),
                MockHandle(4),
                MockHandle(5)
            ]
        );
        assert_eq!(manager.state.delete_register.len(), 0);
    }

    #[test]
    fn no_client_ever_lives_in_two_places() {
        let mut manager = Manager::new_test();
        for i in 1..=6 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(2));
        manager.run_operator(Operator::Cut, Motion::Client, 2);
        manager.send_to_scratchpad();
        manager.change_ws(3);
        manager.paste();

        let mut seen = std::collections::HashSet::new();
        for ws in &manager.state.workspaces {
            for c in &ws.clients {
                assert!(seen.insert(c.handle), "{:?} owned twice", c.handle);
            }
        }
        for c in manager.state.delete_register.iter_clients() {
            assert!(seen.insert(c.handle), "{:?} owned twice", c.handle);
        }
        if let Some(c) = &manager.state.scratchpad {
            assert!(seen.insert(c.handle), "{:?} owned twice", c.handle);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn move_down_walks_the_focused_client_through_the_list() {
        let mut manager = Manager::new_test();
        for i in 1..=4 {
            manager.add_client(1, i);
        }
        manager.state.current_ws_mut().current = Some(MockHandle(1));
        manager.run_operator(Operator::MoveDown, Motion::Client, 2);
        // The client two steps ahead is walked up past the focus.
        assert_eq!(
            handles(&manager),
            [MockHandle(3), MockHandle(1), MockHandle(2), MockHandle(4)]
        );
    }

    #[test]
    fn move_operators_ignore_the_workspace_motion() {
        let mut manager = Manager::new_test();
        for i in 1..=3 {
            manager.add_client(1, i);
        }
        let before = handles(&manager);
        manager.run_operator(Operator::MoveUp, Motion::Workspace, 2);
        assert_eq!(handles(&manager), before);
    }
}

//! A workspace and the ordered client list it owns.
use crate::layouts::Layout;
use crate::models::{Client, WindowHandle};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Workspace {
    pub layout: Layout,
    /// The gap inherited by clients spawned on this workspace.
    pub gap: u32,
    pub master_ratio: f32,
    pub bar_height: u32,
    pub clients: Vec<Client>,
    pub current: Option<WindowHandle>,
    pub prev_foc: Option<WindowHandle>,
}

impl Workspace {
    #[must_use]
    pub fn new(layout: Layout, gap: u32, master_ratio: f32, bar_height: u32) -> Self {
        Self {
            layout,
            gap,
            master_ratio,
            bar_height,
            clients: Vec::new(),
            current: None,
            prev_foc: None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, handle: WindowHandle) -> Option<usize> {
        self.clients.iter().position(|c| c.handle == handle)
    }

    #[must_use]
    pub fn contains(&self, handle: WindowHandle) -> bool {
        self.index_of(handle).is_some()
    }

    #[must_use]
    pub fn client(&self, handle: WindowHandle) -> Option<&Client> {
        self.clients.iter().find(|c| c.handle == handle)
    }

    pub fn client_mut(&mut self, handle: WindowHandle) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.handle == handle)
    }

    #[must_use]
    pub fn head(&self) -> Option<WindowHandle> {
        self.clients.first().map(|c| c.handle)
    }

    /// Appends a client at the tail of the list.
    pub fn append(&mut self, client: Client) {
        self.clients.push(client);
    }

    pub fn remove(&mut self, handle: WindowHandle) -> Option<Client> {
        let idx = self.index_of(handle)?;
        Some(self.clients.remove(idx))
    }

    /// The client before `handle` in list order.
    ///
    /// Returns `None` when `handle` is the head or is not in this list.
    #[must_use]
    pub fn predecessor_of(&self, handle: WindowHandle) -> Option<WindowHandle> {
        match self.index_of(handle)? {
            0 => None,
            idx => Some(self.clients[idx - 1].handle),
        }
    }

    /// The client after `handle`, wrapping back to the head past the tail.
    ///
    /// Returns `None` when `handle` is absent or it is the only client.
    #[must_use]
    pub fn next_with_wrap(&self, handle: WindowHandle) -> Option<WindowHandle> {
        if self.clients.len() < 2 {
            return None;
        }
        let idx = self.index_of(handle)?;
        Some(self.clients[(idx + 1) % self.clients.len()].handle)
    }

    /// The last client in list order.
    #[must_use]
    pub fn tail(&self) -> Option<WindowHandle> {
        self.clients.last().map(|c| c.handle)
    }

    /// Swaps a client with its successor; the tail rotates to the head.
    pub fn move_down(&mut self, handle: WindowHandle) {
        let Some(idx) = self.index_of(handle) else {
            return;
        };
        if self.clients.len() < 2 {
            return;
        }
        if idx == self.clients.len() - 1 {
            self.clients.rotate_right(1);
        } else {
            self.clients.swap(idx, idx + 1);
        }
    }

    /// Swaps a client with its predecessor; the head rotates to the tail.
    pub fn move_up(&mut self, handle: WindowHandle) {
        let Some(idx) = self.index_of(handle) else {
            return;
        };
        if self.clients.len() < 2 {
            return;
        }
        if idx == 0 {
            self.clients.rotate_left(1);
        } else {
            self.clients.swap(idx - 1, idx);
        }
    }

    /// How many clients take part in the current layout.
    #[must_use]
    pub fn tilable_count(&self) -> usize {
        self.clients.iter().filter(|c| !c.is_fft()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowHandle::MockHandle;

    fn workspace_with(n: u32) -> Workspace {
        let mut ws = Workspace::new(Layout::VStack, 0, 0.5, 0);
        for i in 1..=n {
            ws.append(Client::new(MockHandle(i)));
        }
        ws
    }

    #[test]
    fn predecessor_of_head_is_none() {
        let ws = workspace_with(3);
        assert_eq!(ws.predecessor_of(MockHandle(1)), None);
        assert_eq!(ws.predecessor_of(MockHandle(3)), Some(MockHandle(2)));
    }

    #[test]
    fn predecessor_of_absent_client_is_none() {
        let ws = workspace_with(2);
        assert_eq!(ws.predecessor_of(MockHandle(9)), None);
    }

    #[test]
    fn next_with_wrap_returns_head_past_the_tail() {
        let ws = workspace_with(3);
        assert_eq!(ws.next_with_wrap(MockHandle(3)), Some(MockHandle(1)));
        assert_eq!(ws.next_with_wrap(MockHandle(1)), Some(MockHandle(2)));
    }

    #[test]
    fn next_with_wrap_on_single_client_is_none() {
        let ws = workspace_with(1);
        assert_eq!(ws.next_with_wrap(MockHandle(1)), None);
    }

    #[test]
    fn move_down_from_tail_rotates_to_head() {
        let mut ws = workspace_with(3);
        ws.move_down(MockHandle(3));
        let order: Vec<_> = ws.clients.iter().map(|c| c.handle).collect();
        assert_eq!(order, [MockHandle(3), MockHandle(1), MockHandle(2)]);
    }

    #[test]
    fn move_up_from_head_rotates_to_tail() {
        let mut ws = workspace_with(3);
        ws.move_up(MockHandle(1));
        let order: Vec<_> = ws.clients.iter().map(|c| c.handle).collect();
        assert_eq!(order, [MockHandle(2), MockHandle(3), MockHandle(1)]);
    }

    #[test]
    fn move_down_swaps_with_successor() {
        let mut ws = workspace_with(3);
        ws.move_down(MockHandle(1));
        let order: Vec<_> = ws.clients.iter().map(|c| c.handle).collect();
        assert_eq!(order, [MockHandle(2), MockHandle(1), MockHandle(3)]);
    }
}

//! The delete register: a bounded stack of cut client-list segments.
use crate::models::Client;
use serde::{Deserialize, Serialize};

/// Each element is an entire detached segment of a client list, kept in
/// list order. `paste` pops the most recently pushed segment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeleteRegister {
    capacity: usize,
    segments: Vec<Vec<Client>>,
}

impl DeleteRegister {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            segments: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.segments.len() >= self.capacity
    }

    /// How many more segments the register can take.
    #[must_use]
    pub fn capacity_left(&self) -> usize {
        self.capacity.saturating_sub(self.segments.len())
    }

    /// Pushes a segment, refusing when the register is full.
    ///
    /// On refusal the segment is handed back so the caller can restore it.
    pub fn push(&mut self, segment: Vec<Client>) -> Result<(), Vec<Client>> {
        if segment.is_empty() {
            return Ok(());
        }
        if self.is_full() {
            log::warn!("delete register is full, refusing to push");
            return Err(segment);
        }
        self.segments.push(segment);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Vec<Client>> {
        self.segments.pop()
    }

    /// All clients currently held, in no particular order. Used by the
    /// ownership checks in tests.
    pub fn iter_clients(&self) -> impl Iterator<Item = &Client> {
        self.segments.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindowHandle::MockHandle;

    fn segment(ids: &[u32]) -> Vec<Client> {
        ids.iter().map(|&i| Client::new(MockHandle(i))).collect()
    }

    #[test]
    fn pop_returns_segments_in_lifo_order() {
        let mut reg = DeleteRegister::new(4);
        reg.push(segment(&[1, 2])).unwrap();
        reg.push(segment(&[3])).unwrap();
        assert_eq!(reg.pop().unwrap().len(), 1);
        assert_eq!(reg.pop().unwrap().len(), 2);
        assert!(reg.pop().is_none());
    }

    #[test]
    fn push_refuses_when_full_and_returns_the_segment() {
        let mut reg = DeleteRegister::new(1);
        reg.push(segment(&[1])).unwrap();
        let refused = reg.push(segment(&[2, 3])).unwrap_err();
        assert_eq!(refused.len(), 2);
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn empty_segments_are_not_stored() {
        let mut reg = DeleteRegister::new(1);
        reg.push(Vec::new()).unwrap();
        assert!(reg.is_empty());
    }
}

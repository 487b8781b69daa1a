//! binary min-heap over vertex ids with a position index for decrease-key

use thiserror::Error;

use crate::graph::{VertexId, Weight};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("extract_min on an empty heap")]
    Empty,
    #[error("vertex {0} has already been extracted from the heap")]
    Extracted(VertexId),
    #[error("vertex {0} was never inserted into the heap")]
    Absent(VertexId),
}

/// Where a vertex currently is relative to the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Absent,
    InHeap(usize),
    Extracted,
}

/// Min-heap of vertices keyed by an external weight table.
///
/// The heap never stores keys. Every comparison reads `weights[v]` from the
/// table passed to the call, so a caller that lowers a weight must follow up
/// with [`decrease_key`](Self::decrease_key) before the next extraction.
/// Ties between equal weights come out in no particular order.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    slots: Vec<VertexId>,
    states: Vec<SlotState>,
}

impl IndexedMinHeap {
    /// Heapifies `vertices` in O(n).
    ///
    /// `weights` must have an entry for every vertex listed, and no vertex may
    /// be listed twice.
    pub fn build<I>(vertices: I, weights: &[Weight]) -> IndexedMinHeap
    where
        I: IntoIterator<Item = VertexId>,
    {
        let slots: Vec<VertexId> = vertices.into_iter().collect();
        let mut states = vec![SlotState::Absent; weights.len()];
        for (pos, &v) in slots.iter().enumerate() {
            assert!((v as usize) < weights.len(), "vertex {v} has no weight");
            assert_eq!(states[v as usize], SlotState::Absent, "vertex {v} listed twice");
            states[v as usize] = SlotState::InHeap(pos);
        }

        let mut heap = IndexedMinHeap { slots, states };
        for pos in (0..heap.slots.len() / 2).rev() {
            heap.sift_down(pos, weights);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn state(&self, v: VertexId) -> SlotState {
        self.states
            .get(v as usize)
            .copied()
            .unwrap_or(SlotState::Absent)
    }

    /// current array position of `v`, if it is still in the heap
    pub fn index_of(&self, v: VertexId) -> Option<usize> {
        match self.state(v) {
            SlotState::InHeap(pos) => Some(pos),
            SlotState::Absent | SlotState::Extracted => None,
        }
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.index_of(v).is_some()
    }

    pub fn peek_min(&self) -> Option<VertexId> {
        self.slots.first().copied()
    }

    /// removes and returns the vertex with the smallest weight
    pub fn extract_min(&mut self, weights: &[Weight]) -> Result<VertexId, HeapError> {
        let last = self.slots.len().checked_sub(1).ok_or(HeapError::Empty)?;
        self.swap(0, last);
        let min = self.slots.pop().ok_or(HeapError::Empty)?;
        self.states[min as usize] = SlotState::Extracted;
        if !self.slots.is_empty() {
            self.sift_down(0, weights);
        }
        Ok(min)
    }

    /// restores heap order after `weights[v]` was lowered
    pub fn decrease_key(&mut self, v: VertexId, weights: &[Weight]) -> Result<(), HeapError> {
        match self.state(v) {
            SlotState::InHeap(pos) => {
                self.sift_up(pos, weights);
                Ok(())
            }
            SlotState::Extracted => Err(HeapError::Extracted(v)),
            SlotState::Absent => Err(HeapError::Absent(v)),
        }
    }

    fn key(&self, pos: usize, weights: &[Weight]) -> Weight {
        weights[self.slots[pos] as usize]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.states[self.slots[a] as usize] = SlotState::InHeap(a);
        self.states[self.slots[b] as usize] = SlotState::InHeap(b);
    }

    fn sift_up(&mut self, mut pos: usize, weights: &[Weight]) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.key(pos, weights) >= self.key(parent, weights) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize, weights: &[Weight]) {
        let n = self.slots.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < n && self.key(left, weights) < self.key(smallest, weights) {
                smallest = left;
            }
            if right < n && self.key(right, weights) < self.key(smallest, weights) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap_ordered(&self, weights: &[Weight]) -> bool {
        (1..self.slots.len()).all(|pos| self.key((pos - 1) / 2, weights) <= self.key(pos, weights))
            && self
                .slots
                .iter()
                .enumerate()
                .all(|(pos, &v)| self.index_of(v) == Some(pos))
    }
}

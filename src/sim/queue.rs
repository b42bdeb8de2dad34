/// Fixed-capacity circular queue of process indices, used by the round
/// robin policy as its ready queue.
///
/// `front`/`rear`/`size` bookkeeping; `rear` points at the last occupied
/// slot. Invariant: `0 <= size <= capacity`.
#[derive(Debug)]
pub struct RingQueue {
    slots: Box<[usize]>,
    front: usize,
    rear: usize,
    size: usize,
}

impl RingQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            front: 0,
            rear: capacity.saturating_sub(1),
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    pub fn enqueue(&mut self, index: usize) {
        debug_assert!(!self.is_full(), "RingQueue over capacity");
        if self.is_full() {
            return;
        }
        self.rear = (self.rear + 1) % self.capacity();
        self.slots[self.rear] = index;
        self.size += 1;
    }

    pub fn dequeue(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front];
        self.front = (self.front + 1) % self.capacity();
        self.size -= 1;
        Some(item)
    }

    /// Linear scan over the occupied slots. The round robin policy calls
    /// this once per process per dispatch, so the queue stays duplicate-free
    /// without a separate membership set.
    pub fn contains(&self, index: usize) -> bool {
        (0..self.size).any(|k| self.slots[(self.front + k) % self.capacity()] == index)
    }
}

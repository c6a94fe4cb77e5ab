/// Circular order over a fixed pool of slots.
///
/// Recycling only ever moves the head node to the tail or the tail node to the head, so the
/// cyclic order of slots never changes; only the head pointer moves. Slot `k` from the head is
/// `(head + k) % len`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Ring {
    head: usize,
    len: usize,
}

impl Ring {
    pub(crate) fn new(len: usize) -> Self {
        Self { head: 0, len }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn head(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(self.head)
    }

    pub(crate) fn tail(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some((self.head + self.len - 1) % self.len)
    }

    /// The `k`-th slot counting from the head.
    pub(crate) fn slot(&self, k: usize) -> Option<usize> {
        if k >= self.len {
            return None;
        }
        Some((self.head + k) % self.len)
    }

    /// Moves the head slot to the tail.
    pub(crate) fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.head = (self.head + 1) % self.len;
    }

    /// Moves the tail slot to the head.
    pub(crate) fn retreat(&mut self) {
        if self.is_empty() {
            return;
        }
        self.head = (self.head + self.len - 1) % self.len;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |k| (self.head + k) % self.len)
    }
}

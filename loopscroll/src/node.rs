use crate::Vec2;

/// One physical node of the pool.
///
/// `slot` is fixed for the node's lifetime; `position`, `index` and `name` change as the node
/// is recycled.
#[derive(Clone, Debug)]
pub struct Node<N> {
    pub(crate) slot: usize,
    pub(crate) position: Vec2,
    pub(crate) index: usize,
    pub(crate) name: String,
    pub(crate) content: N,
}

impl<N> Node<N> {
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Logical index this node currently displays.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &N {
        &self.content
    }
}

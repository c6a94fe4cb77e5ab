/// Fills a physical node with the content of a logical item.
///
/// Called once per node when content is set and once per recycle event, synchronously and in
/// order. The renderer only sees the node's content: geometry and ordering belong to the engine.
pub trait RenderNode<N> {
    fn render(&mut self, index: usize, node: &mut N);
}

impl<N, F> RenderNode<N> for F
where
    F: FnMut(usize, &mut N),
{
    fn render(&mut self, index: usize, node: &mut N) {
        self(index, node);
    }
}

/// Creates and destroys the caller's node handles.
///
/// The engine creates exactly one handle per pool slot in `set_content` and destroys the whole
/// pool before rebuilding it; it never creates nodes while scrolling.
pub trait NodeFactory<N> {
    fn create(&mut self, slot: usize, name: &str) -> N;

    fn destroy(&mut self, node: N) {
        drop(node);
    }
}

impl<N, F> NodeFactory<N> for F
where
    F: FnMut(usize, &str) -> N,
{
    fn create(&mut self, slot: usize, name: &str) -> N {
        self(slot, name)
    }
}

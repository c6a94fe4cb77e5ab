use std::fmt::{self, Write as _};

use crate::layout::Layout;
use crate::node::Node;
use crate::ring::Ring;
use crate::{LoopError, LoopOptions, LoopState, MoveDirection, NodeFactory, RenderNode, Vec2};

/// A headless recycling scroll view.
///
/// A fixed pool of `min(item_count, max_count)` physical nodes windows an arbitrarily long list
/// of uniform items. As the view moves, nodes that leave one edge of the viewport are relocated
/// to the opposite edge, relabeled with the logical index they now represent, and handed to the
/// renderer.
///
/// The engine holds no UI objects: node handles are an opaque `N` produced by the
/// [`NodeFactory`]. It is driven by calling [`LoopScroll::on_move`] with main/cross deltas; for
/// animated moves, flings and gesture handling see the `loopscroll-adapter` crate.
pub struct LoopScroll<N> {
    options: LoopOptions,
    layout: Layout,
    nodes: Vec<Node<N>>,
    ring: Ring,
    item_count: usize,
    cur_index: usize,
    move_delta: f64,
    node_name_prefix: String,
    renderer: Option<Box<dyn RenderNode<N>>>,
    factory: Box<dyn NodeFactory<N>>,
}

impl<N> LoopScroll<N> {
    /// Creates an empty view.
    ///
    /// Fails if the configured geometry can't produce a layout. No nodes exist until
    /// [`LoopScroll::set_content`] is called.
    pub fn new(
        options: LoopOptions,
        factory: impl NodeFactory<N> + 'static,
    ) -> Result<Self, LoopError> {
        let layout = Layout::compute(&options)?;
        ldebug!(
            max_count = layout.max_count,
            show_count = layout.show_count,
            unit_delta = layout.unit_delta,
            "LoopScroll::new"
        );
        Ok(Self {
            node_name_prefix: options.node_name_prefix.clone(),
            options,
            layout,
            nodes: Vec::new(),
            ring: Ring::default(),
            item_count: 0,
            cur_index: 0,
            move_delta: 0.0,
            renderer: None,
            factory: Box::new(factory),
        })
    }

    pub fn options(&self) -> &LoopOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Geometry changes take effect on the next `set_content`; the current pool keeps the
    /// layout it was built with.
    pub fn set_options(&mut self, options: LoopOptions) {
        self.node_name_prefix = options.node_name_prefix.clone();
        self.options = options;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of physical nodes in the pool.
    pub fn unit_count(&self) -> usize {
        self.nodes.len()
    }

    /// Logical index shown by the ring head.
    pub fn cur_index(&self) -> usize {
        self.cur_index
    }

    pub fn move_delta(&self) -> f64 {
        self.move_delta
    }

    pub fn state(&self) -> LoopState {
        LoopState {
            cur_index: self.cur_index,
            move_delta: self.move_delta,
            item_count: self.item_count,
        }
    }

    pub fn node_name_prefix(&self) -> &str {
        &self.node_name_prefix
    }

    /// Whether `on_move` does anything. Lists that fit in the viewport are static.
    pub fn is_scrollable(&self) -> bool {
        self.item_count > self.layout.show_count && !self.nodes.is_empty()
    }

    /// Builds (or rebuilds) the node pool for `count` items.
    ///
    /// Destroys any previous pool through the factory, recomputes the layout from the current
    /// options, resets the logical counters, and creates `min(count, max_count)` nodes at
    /// consecutive slots labeled `0..unit_count`. Each node is rendered once, in order, before
    /// this returns.
    ///
    /// `prefix` replaces the node name prefix; `None` keeps the current one. On a geometry error
    /// the previous pool is left untouched.
    pub fn set_content(
        &mut self,
        count: usize,
        renderer: impl RenderNode<N> + 'static,
        prefix: Option<&str>,
    ) -> Result<(), LoopError> {
        let layout = Layout::compute(&self.options)?;

        self.destroy_nodes();
        self.layout = layout;
        self.clear_data();
        if let Some(prefix) = prefix {
            self.node_name_prefix = String::from(prefix);
        }
        self.item_count = count;

        let unit_count = layout.unit_count(count);
        self.nodes.reserve_exact(unit_count);
        for slot in 0..unit_count {
            let mut name = String::new();
            let _ = write!(name, "{}{}", self.node_name_prefix, slot);
            let content = self.factory.create(slot, &name);
            self.nodes.push(Node {
                slot,
                position: layout.slot_position(slot),
                index: slot,
                name,
                content,
            });
        }
        self.ring = Ring::new(unit_count);

        ldebug!(
            count,
            unit_count,
            show_count = layout.show_count,
            "LoopScroll::set_content"
        );

        let renderer = self.renderer.insert(Box::new(renderer));
        for node in &mut self.nodes {
            renderer.render(node.index, &mut node.content);
        }
        Ok(())
    }

    /// Renders every node again with its current label, in ring order.
    pub fn refresh(&mut self) -> Result<(), LoopError> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Err(LoopError::NoContent);
        };
        for slot in self.ring.iter() {
            let node = &mut self.nodes[slot];
            renderer.render(node.index, &mut node.content);
        }
        Ok(())
    }

    fn clear_data(&mut self) {
        self.cur_index = 0;
        self.move_delta = 0.0;
    }

    fn destroy_nodes(&mut self) {
        for node in self.nodes.drain(..) {
            self.factory.destroy(node.content);
        }
        self.ring = Ring::default();
    }

    /// Moves the view by `delta` and recycles every node that crossed a boundary.
    ///
    /// Returns the number of recycle events. Each event renders the recycled node once before
    /// this returns. A positive `delta.main` recycles from head to tail (later indices come
    /// into view); a negative one recycles from tail to head. A zero `delta.main` translates
    /// the cross axis only.
    ///
    /// No-op when the list fits in the viewport.
    pub fn on_move(&mut self, delta: Vec2) -> usize {
        if !self.is_scrollable() {
            ltrace!(
                item_count = self.item_count,
                show_count = self.layout.show_count,
                "on_move: not scrollable"
            );
            return 0;
        }
        if !delta.main.is_finite() || !delta.cross.is_finite() {
            lwarn!(main = delta.main, cross = delta.cross, "on_move: non-finite delta");
            return 0;
        }

        let cycle = self.layout.cycle_len(self.item_count);
        self.move_delta = wrap_offset(self.move_delta + delta.main, cycle);

        let shift = if self.options.translate_cross_axis {
            delta
        } else {
            Vec2::main(delta.main)
        };
        for node in &mut self.nodes {
            node.position += shift;
        }

        let Some(direction) = MoveDirection::of(delta.main) else {
            return 0;
        };

        let mut recycled = 0usize;
        loop {
            let moved = match direction {
                MoveDirection::Forward => self.recycle_head_to_tail(),
                MoveDirection::Backward => self.recycle_tail_to_head(),
            };
            if !moved {
                break;
            }
            recycled += 1;
        }
        recycled
    }

    /// Like [`LoopScroll::on_move`], then sets `move_delta` to `target` wrapped into the cycle.
    ///
    /// Animated moves end with this so the offset lands exactly on its destination instead of
    /// on the rounded sum of their frames.
    pub fn on_move_to(&mut self, delta: Vec2, target: f64) -> usize {
        let recycled = self.on_move(delta);
        if self.is_scrollable() && target.is_finite() {
            let cycle = self.layout.cycle_len(self.item_count);
            ltrace!(from = self.move_delta, target, "on_move_to: pin offset");
            self.move_delta = wrap_offset(target, cycle);
        }
        recycled
    }

    fn recycle_head_to_tail(&mut self) -> bool {
        let (Some(head), Some(tail)) = (self.ring.head(), self.ring.tail()) else {
            return false;
        };
        if self.nodes[head].position.main < self.layout.top_limit {
            return false;
        }

        let mut position = self.nodes[tail].position;
        position.main -= self.layout.unit_delta;
        self.ring.advance();
        self.cur_index = (self.cur_index + 1) % self.item_count;
        let index = (self.cur_index + self.ring.len() - 1) % self.item_count;
        ltrace!(slot = head, index, "recycle head -> tail");
        self.relabel(head, position, index);
        true
    }

    fn recycle_tail_to_head(&mut self) -> bool {
        let (Some(head), Some(tail)) = (self.ring.head(), self.ring.tail()) else {
            return false;
        };
        if self.nodes[tail].position.main > self.layout.down_limit {
            return false;
        }

        let mut position = self.nodes[head].position;
        position.main += self.layout.unit_delta;
        self.ring.retreat();
        self.cur_index = match self.cur_index {
            0 => self.item_count - 1,
            i => i - 1,
        };
        let index = self.cur_index;
        ltrace!(slot = tail, index, "recycle tail -> head");
        self.relabel(tail, position, index);
        true
    }

    fn relabel(&mut self, slot: usize, position: Vec2, index: usize) {
        let node = &mut self.nodes[slot];
        node.position = position;
        node.index = index;
        node.name.clear();
        let _ = write!(node.name, "{}{}", self.node_name_prefix, index);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(index, &mut node.content);
        }
    }

    /// Offset at which logical item `index` sits in the head slot.
    pub fn jump_index_target(&self, index: usize) -> f64 {
        index as f64 * self.layout.unit_delta
    }

    /// Main-axis distance that brings logical item `index` to the head slot.
    pub fn jump_index_distance(&self, index: usize) -> f64 {
        self.jump_index_target(index) - self.move_delta
    }

    /// Main-axis distance back to the start-of-content position.
    pub fn reset_distance(&self) -> f64 {
        -self.move_delta
    }

    /// Offset of the slot boundary nearest to the current one.
    pub fn settle_target(&self) -> f64 {
        let unit = self.layout.unit_delta;
        (self.move_delta / unit).round() * unit
    }

    /// Main-axis distance to the nearest slot boundary.
    pub fn settle_distance(&self) -> f64 {
        self.settle_target() - self.move_delta
    }

    /// Nodes in ring order, head first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> + '_ {
        self.ring.iter().map(move |slot| &self.nodes[slot])
    }

    /// The node in pool slot `slot` (slots are fixed; ring order is not).
    pub fn node(&self, slot: usize) -> Option<&Node<N>> {
        self.nodes.get(slot)
    }

    /// Mutable access to a node's content. Geometry stays owned by the engine.
    pub fn node_content_mut(&mut self, slot: usize) -> Option<&mut N> {
        self.nodes.get_mut(slot).map(|node| &mut node.content)
    }

    pub fn head(&self) -> Option<&Node<N>> {
        self.ring.head().map(|slot| &self.nodes[slot])
    }

    pub fn tail(&self) -> Option<&Node<N>> {
        self.ring.tail().map(|slot| &self.nodes[slot])
    }

    /// Logical indices in ring order, head first.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.nodes().map(Node::index).collect()
    }

    /// Pool slot at ring position `k` (0 is the head).
    pub fn slot_at(&self, k: usize) -> Option<usize> {
        self.ring.slot(k)
    }
}

impl<N> fmt::Debug for LoopScroll<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoopScroll")
            .field("options", &self.options)
            .field("layout", &self.layout)
            .field("item_count", &self.item_count)
            .field("unit_count", &self.nodes.len())
            .field("cur_index", &self.cur_index)
            .field("move_delta", &self.move_delta)
            .field("has_renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

/// Reduces `value` into `[0, cycle)`.
fn wrap_offset(value: f64, cycle: f64) -> f64 {
    let wrapped = value.rem_euclid(cycle);
    // rem_euclid can round up to `cycle` for tiny negative inputs.
    if wrapped >= cycle { 0.0 } else { wrapped }
}

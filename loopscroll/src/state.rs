/// A lightweight, copyable snapshot of the logical scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopState {
    /// Logical index shown by the ring head.
    pub cur_index: usize,
    /// Cumulative offset since the last content build, in `[0, item_count * unit_delta)`.
    pub move_delta: f64,
    pub item_count: usize,
}

use crate::{Size, Spacing};

/// Default display-name prefix for physical nodes.
pub const DEFAULT_NODE_NAME_PREFIX: &str = "Node";

/// Configuration for [`crate::LoopScroll`].
///
/// Geometry fields are read when content is (re)built, so changing them via
/// `LoopScroll::set_options` takes effect on the next `set_content`. Motion fields are read by
/// the adapter crate each time a motion starts.
///
/// With `feature = "serde"`, missing fields fall back to [`LoopOptions::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoopOptions {
    /// Size of the visible area. `main` is the scroll axis.
    pub viewport: Size,
    /// Uniform footprint of one item.
    pub template: Size,
    pub spacing: Spacing,

    /// Multiplier applied to wheel deltas. Negative values behave as `0`.
    pub scroll_sensitivity: f64,
    /// Duration (seconds) of distance-based moves (`jump_*`, `reset`, `settle`).
    pub move_time: f64,
    /// Duration (seconds) of speed-based coasting after a fling.
    pub coast_time: f64,
    /// Centers nodes on the cross axis.
    pub is_center: bool,
    /// Scale applied to the release speed of a drag before coasting.
    pub elasticity: f64,
    /// Prefix for node display names (`"{prefix}{index}"`).
    pub node_name_prefix: String,
    /// Whether the cross component of a move delta is applied to node positions.
    pub translate_cross_axis: bool,
    /// Whether a finished coast is followed by a move to the nearest slot boundary.
    pub settle_on_release: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            viewport: Size::default(),
            template: Size::default(),
            spacing: Spacing::default(),
            scroll_sensitivity: 10.0,
            move_time: 0.2,
            coast_time: 0.2,
            is_center: false,
            elasticity: 0.1,
            node_name_prefix: String::from(DEFAULT_NODE_NAME_PREFIX),
            translate_cross_axis: true,
            settle_on_release: false,
        }
    }
}

impl LoopOptions {
    /// Creates options for a viewport and item template; everything else uses defaults.
    pub fn new(viewport: Size, template: Size) -> Self {
        Self {
            viewport,
            template,
            ..Self::default()
        }
    }

    /// Wheel sensitivity with negative values clamped to `0`.
    pub fn scroll_sensitivity(&self) -> f64 {
        if self.scroll_sensitivity < 0.0 {
            0.0
        } else {
            self.scroll_sensitivity
        }
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_scroll_sensitivity(mut self, scroll_sensitivity: f64) -> Self {
        self.scroll_sensitivity = scroll_sensitivity;
        self
    }

    pub fn with_move_time(mut self, move_time: f64) -> Self {
        self.move_time = move_time;
        self
    }

    pub fn with_coast_time(mut self, coast_time: f64) -> Self {
        self.coast_time = coast_time;
        self
    }

    pub fn with_center(mut self, is_center: bool) -> Self {
        self.is_center = is_center;
        self
    }

    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_node_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.node_name_prefix = prefix.into();
        self
    }

    pub fn with_translate_cross_axis(mut self, translate_cross_axis: bool) -> Self {
        self.translate_cross_axis = translate_cross_axis;
        self
    }

    pub fn with_settle_on_release(mut self, settle_on_release: bool) -> Self {
        self.settle_on_release = settle_on_release;
        self
    }
}

use crate::{LoopError, LoopOptions, Vec2};

/// Upper bound on the node pool a layout may ask for.
pub const MAX_POOL_SIZE: usize = 1 << 16;

/// Geometry derived from the viewport, template and spacing.
///
/// Computed once per content-set and immutable until the next `set_content`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Nodes needed to cover the viewport at any offset, plus one overscan node.
    pub max_count: usize,
    /// Main-axis distance between consecutive slots (`template.main + spacing.main`).
    pub unit_delta: f64,
    /// A head node at or above this main position is recycled to the tail.
    pub top_limit: f64,
    /// A tail node at or below this main position is recycled to the head.
    pub down_limit: f64,
    /// Whole slots that fit in the viewport. Lists with at most this many items don't scroll.
    pub show_count: usize,
    /// Cross-axis offset that centers a template in the viewport (0 unless centering).
    pub center_offset: f64,
    /// Cross-axis offset subtracted from every node.
    pub cross_spacing: f64,
}

impl Layout {
    pub fn compute(options: &LoopOptions) -> Result<Self, LoopError> {
        let viewport = options.viewport;
        let template = options.template;

        if !template.main.is_finite() || template.main <= 0.0 {
            lwarn!(main = template.main, "Layout::compute: invalid template size");
            return Err(LoopError::InvalidTemplateSize {
                main: template.main,
            });
        }
        if !viewport.main.is_finite() || viewport.main < 0.0 {
            lwarn!(main = viewport.main, "Layout::compute: invalid viewport size");
            return Err(LoopError::InvalidViewportSize {
                main: viewport.main,
            });
        }
        let unit_delta = template.main + options.spacing.main;
        if !unit_delta.is_finite() || unit_delta <= 0.0 {
            lwarn!(unit_delta, "Layout::compute: invalid unit delta");
            return Err(LoopError::InvalidUnitDelta { unit_delta });
        }

        let per_viewport = viewport.main / template.main;
        if !per_viewport.is_finite() || per_viewport >= MAX_POOL_SIZE as f64 {
            lwarn!(per_viewport, "Layout::compute: pool too large");
            return Err(LoopError::PoolTooLarge {
                per_viewport,
                max: MAX_POOL_SIZE,
            });
        }

        // Both quotients are non-negative, so truncation is floor. `as` saturates.
        let max_count = (per_viewport as usize).saturating_add(1);
        let show_count = (viewport.main / unit_delta) as usize;
        let center_offset = if options.is_center {
            (viewport.cross - template.cross) / 2.0
        } else {
            0.0
        };

        Ok(Self {
            max_count,
            unit_delta,
            top_limit: template.main,
            down_limit: -viewport.main,
            show_count,
            center_offset,
            cross_spacing: options.spacing.cross,
        })
    }

    /// Pool size for `count` items.
    pub fn unit_count(&self, count: usize) -> usize {
        count.min(self.max_count)
    }

    /// Initial position of the `slot`-th node of a fresh pool.
    pub fn slot_position(&self, slot: usize) -> Vec2 {
        Vec2::new(
            -(slot as f64) * self.unit_delta,
            self.center_offset - self.cross_spacing,
        )
    }

    /// Length of one full cycle through `count` items.
    pub fn cycle_len(&self, count: usize) -> f64 {
        count as f64 * self.unit_delta
    }
}

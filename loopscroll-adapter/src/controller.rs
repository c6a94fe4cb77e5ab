use loopscroll::{LoopError, LoopScroll, RenderNode, Vec2};

use crate::{CoastTween, DragSample, DragTracker, MotionKind, MotionSlot, MotionToken, MoveTween};

/// A framework-neutral controller that wraps a [`LoopScroll`] and drives it over time.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_begin_drag` / `on_drag` / `on_end_drag` / `on_scroll` when input events occur
/// - `jump_index` / `jump_delta` / `reset` for programmatic moves
/// - `tick(dt)` once per frame, with the frame time in seconds
///
/// At most one motion is active. Starting a motion, dragging or scrolling replaces whatever
/// motion was running; the view stays wherever the replaced motion left it.
#[derive(Debug)]
pub struct Controller<N> {
    view: LoopScroll<N>,
    motion: MotionSlot,
    /// Offset the active move ends on. `None` while coasting or idle.
    move_target: Option<f64>,
    drag: DragTracker,
}

impl<N> Controller<N> {
    pub fn new(view: LoopScroll<N>) -> Self {
        Self {
            view,
            motion: MotionSlot::new(),
            move_target: None,
            drag: DragTracker::default(),
        }
    }

    pub fn view(&self) -> &LoopScroll<N> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut LoopScroll<N> {
        &mut self.view
    }

    pub fn into_view(self) -> LoopScroll<N> {
        self.view
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_active()
    }

    /// Whether the motion identified by `token` is still running.
    pub fn is_current(&self, token: MotionToken) -> bool {
        self.motion.is_current(token)
    }

    pub fn cancel_motion(&mut self) {
        self.move_target = None;
        if self.motion.cancel().is_some() {
            atrace!("motion cancelled");
        }
    }

    /// Rebuilds the view's content. Any running motion is cancelled first.
    pub fn set_content(
        &mut self,
        count: usize,
        renderer: impl RenderNode<N> + 'static,
        prefix: Option<&str>,
    ) -> Result<(), LoopError> {
        self.cancel_motion();
        self.drag.clear();
        self.view.set_content(count, renderer, prefix)
    }

    /// Records the start of a drag. Cancels any running motion.
    pub fn on_begin_drag(&mut self, position: Vec2, now: f64) {
        self.cancel_motion();
        self.drag.begin(DragSample::new(now, position));
    }

    /// Applies a drag delta directly. Cancels any running motion.
    ///
    /// Returns the number of recycled nodes.
    pub fn on_drag(&mut self, delta: Vec2) -> usize {
        self.cancel_motion();
        self.view.on_move(delta)
    }

    /// Records the end of a drag and coasts with the release speed scaled by `elasticity`.
    ///
    /// When there's nothing to coast, `settle_on_release` falls back to settling on the nearest
    /// slot. Returns the token of the started motion, if any.
    pub fn on_end_drag(&mut self, position: Vec2, now: f64) -> Option<MotionToken> {
        self.drag.end(DragSample::new(now, position));
        let elasticity = self.view.options().elasticity;
        match self.drag.fling_speed(elasticity) {
            Some(speed) if speed != 0.0 => Some(self.fling(speed)),
            _ if self.view.options().settle_on_release => Some(self.settle()),
            _ => None,
        }
    }

    /// Applies a wheel delta scaled by the (non-negative) scroll sensitivity.
    ///
    /// Returns the number of recycled nodes.
    pub fn on_scroll(&mut self, scroll_delta: Vec2) -> usize {
        self.cancel_motion();
        let sensitivity = self.view.options().scroll_sensitivity();
        self.view.on_move(scroll_delta * sensitivity)
    }

    /// Animates until logical item `index` sits in the head slot.
    pub fn jump_index(&mut self, index: usize) -> MotionToken {
        let target = self.view.jump_index_target(index);
        self.start_move_to(target)
    }

    /// Animates a move by `delta` along the main axis.
    pub fn jump_delta(&mut self, delta: f64) -> MotionToken {
        let target = self.view.move_delta() + delta;
        self.start_move(delta, target)
    }

    /// Animates back to the start-of-content position.
    pub fn reset(&mut self) -> MotionToken {
        self.start_move_to(0.0)
    }

    /// Animates to the nearest slot boundary.
    pub fn settle(&mut self) -> MotionToken {
        let target = self.view.settle_target();
        self.start_move_to(target)
    }

    /// Coasts at `speed` per frame for the configured coast time.
    pub fn fling(&mut self, speed: f64) -> MotionToken {
        let duration = self.view.options().coast_time;
        adebug!(speed, duration, "start coast");
        self.move_target = None;
        self.motion.start(CoastTween::new(speed, duration))
    }

    fn start_move_to(&mut self, target: f64) -> MotionToken {
        let distance = target - self.view.move_delta();
        self.start_move(distance, target)
    }

    /// Starts a move over `distance` that ends with `move_delta` exactly at `target`.
    fn start_move(&mut self, distance: f64, target: f64) -> MotionToken {
        let duration = self.view.options().move_time;
        adebug!(distance, target, duration, "start move");
        self.move_target = Some(target);
        self.motion.start(MoveTween::new(distance, duration))
    }

    /// Advances the active motion by one frame of `dt` seconds.
    ///
    /// Returns this frame's main-axis delta, or `None` when nothing is animating. The delta is
    /// handed to [`LoopScroll::on_move`], which ignores it while the list isn't scrollable; the
    /// motion still runs to completion in that case. The last frame of a move also pins
    /// `move_delta` to the move's target.
    pub fn tick(&mut self, dt: f64) -> Option<f64> {
        if !dt.is_finite() {
            awarn!(dt, "tick: non-finite frame time");
            return None;
        }
        let frame = self.motion.step(dt)?;
        let delta = Vec2::main(frame.delta);
        match self.move_target {
            Some(target) if frame.finished && frame.kind == MotionKind::Move => {
                self.move_target = None;
                self.view.on_move_to(delta, target);
            }
            _ => {
                self.view.on_move(delta);
            }
        }
        if frame.finished && frame.kind == MotionKind::Coast && self.view.options().settle_on_release
        {
            self.settle();
        }
        Some(frame.delta)
    }
}

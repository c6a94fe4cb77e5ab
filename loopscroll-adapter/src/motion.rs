use crate::{Motion, MotionKind};

/// Identifies one started motion. Stale once another motion starts or the slot is cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionToken(u64);

/// The delta produced by one tick of the active motion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionFrame {
    pub delta: f64,
    pub kind: MotionKind,
    /// Whether this was the motion's last frame.
    pub finished: bool,
}

/// A single slot holding at most one active motion.
///
/// Starting a motion replaces whatever was running. The replaced motion is dropped where it
/// stopped; nothing is merged or queued.
#[derive(Clone, Debug, Default)]
pub struct MotionSlot {
    current: Option<Motion>,
    generation: u64,
}

impl MotionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, motion: impl Into<Motion>) -> MotionToken {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(motion.into());
        MotionToken(self.generation)
    }

    /// Stops the active motion and invalidates its token.
    pub fn cancel(&mut self) -> Option<Motion> {
        let prev = self.current.take();
        if prev.is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
        prev
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Whether `token` belongs to the motion that is still running.
    pub fn is_current(&self, token: MotionToken) -> bool {
        self.current.is_some() && token.0 == self.generation
    }

    pub fn current(&self) -> Option<&Motion> {
        self.current.as_ref()
    }

    pub fn step(&mut self, dt: f64) -> Option<MotionFrame> {
        let motion = self.current.as_mut()?;
        let kind = motion.kind();
        let Some(delta) = motion.step(dt) else {
            self.current = None;
            return None;
        };
        let finished = motion.is_done();
        if finished {
            self.current = None;
        }
        Some(MotionFrame {
            delta,
            kind,
            finished,
        })
    }
}

/// A fixed-duration move over a known distance.
///
/// Each frame contributes `distance * dt / duration`. The frame that reaches the duration
/// contributes whatever is left instead, so the contributions always add up to `distance`
/// no matter how the frame times jitter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveTween {
    pub distance: f64,
    pub duration: f64,
    elapsed: f64,
    sum: f64,
    done: bool,
}

impl MoveTween {
    /// A non-positive or non-finite `duration` completes in a single frame.
    pub fn new(distance: f64, duration: f64) -> Self {
        Self {
            distance,
            duration: sanitize_duration(duration),
            elapsed: 0.0,
            sum: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Distance not yet contributed.
    pub fn remaining(&self) -> f64 {
        self.distance - self.sum
    }

    /// Advances by `dt` seconds and returns this frame's contribution.
    pub fn step(&mut self, dt: f64) -> Option<f64> {
        if self.done {
            return None;
        }
        let dt = dt.max(0.0);
        self.elapsed += dt;
        let delta = if self.elapsed >= self.duration {
            self.done = true;
            self.distance - self.sum
        } else {
            self.distance * dt / self.duration
        };
        self.sum += delta;
        Some(delta)
    }
}

/// A fixed-duration coast at constant per-frame speed.
///
/// Each frame contributes `speed` unscaled by frame time. Frames are produced while the elapsed
/// time before the frame is within `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoastTween {
    pub speed: f64,
    pub duration: f64,
    elapsed: f64,
}

impl CoastTween {
    pub fn new(speed: f64, duration: f64) -> Self {
        Self {
            speed,
            duration: sanitize_duration(duration),
            elapsed: 0.0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed > self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn step(&mut self, dt: f64) -> Option<f64> {
        if self.is_done() {
            return None;
        }
        self.elapsed += dt.max(0.0);
        Some(self.speed)
    }
}

fn sanitize_duration(duration: f64) -> f64 {
    if duration.is_finite() {
        duration.max(0.0)
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionKind {
    Move,
    Coast,
}

/// One of the two motion strategies.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    Move(MoveTween),
    Coast(CoastTween),
}

impl Motion {
    pub fn kind(&self) -> MotionKind {
        match self {
            Self::Move(_) => MotionKind::Move,
            Self::Coast(_) => MotionKind::Coast,
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Self::Move(t) => t.is_done(),
            Self::Coast(t) => t.is_done(),
        }
    }

    pub fn step(&mut self, dt: f64) -> Option<f64> {
        match self {
            Self::Move(t) => t.step(dt),
            Self::Coast(t) => t.step(dt),
        }
    }
}

impl From<MoveTween> for Motion {
    fn from(t: MoveTween) -> Self {
        Self::Move(t)
    }
}

impl From<CoastTween> for Motion {
    fn from(t: CoastTween) -> Self {
        Self::Coast(t)
    }
}

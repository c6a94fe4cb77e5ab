use loopscroll::Vec2;

/// A pointer position at a point in time (seconds).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSample {
    pub time: f64,
    pub position: Vec2,
}

impl DragSample {
    pub fn new(time: f64, position: Vec2) -> Self {
        Self { time, position }
    }
}

/// Records where and when a drag began and ended.
///
/// The release speed is estimated from these two samples alone, not from a smoothed velocity,
/// so fast or uneven gestures are approximated.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    begin: Option<DragSample>,
    end: Option<DragSample>,
}

impl DragTracker {
    pub fn begin(&mut self, sample: DragSample) {
        self.begin = Some(sample);
        self.end = None;
    }

    pub fn end(&mut self, sample: DragSample) {
        self.end = Some(sample);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn begin_sample(&self) -> Option<DragSample> {
        self.begin
    }

    pub fn end_sample(&self) -> Option<DragSample> {
        self.end
    }

    /// Main-axis distance per second between the begin and end samples.
    pub fn release_speed(&self) -> Option<f64> {
        let (begin, end) = (self.begin?, self.end?);
        let span = end.time - begin.time;
        if !span.is_finite() || span <= 0.0 {
            return None;
        }
        let speed = (end.position.main - begin.position.main) / span;
        speed.is_finite().then_some(speed)
    }

    /// Release speed scaled by `elasticity`.
    pub fn fling_speed(&self, elasticity: f64) -> Option<f64> {
        self.release_speed().map(|speed| speed * elasticity)
    }
}

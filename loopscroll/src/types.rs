use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A vector in main/cross axis terms.
///
/// `main` is the scroll axis. Positive `main` points toward the start of the list: the first
/// slot sits at `main = 0` and later slots sit at increasingly negative positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub main: f64,
    pub cross: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self {
        main: 0.0,
        cross: 0.0,
    };

    pub const fn new(main: f64, cross: f64) -> Self {
        Self { main, cross }
    }

    /// A vector with only a main-axis component.
    pub const fn main(main: f64) -> Self {
        Self { main, cross: 0.0 }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.main + rhs.main, self.cross + rhs.cross)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.main += rhs.main;
        self.cross += rhs.cross;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.main - rhs.main, self.cross - rhs.cross)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.main, -self.cross)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.main * rhs, self.cross * rhs)
    }
}

/// Viewport or template extent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub main: f64,
    pub cross: f64,
}

impl Size {
    pub const fn new(main: f64, cross: f64) -> Self {
        Self { main, cross }
    }
}

/// Per-axis spacing between items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    /// Gap between consecutive items in the scroll axis.
    pub main: f64,
    /// Offset subtracted from every node's cross-axis position.
    pub cross: f64,
}

impl Spacing {
    pub const fn new(main: f64, cross: f64) -> Self {
        Self { main, cross }
    }
}

/// Direction of a single `on_move` call, as seen by the recycler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveDirection {
    /// `delta.main > 0`: the head leaves through the top and reappears after the tail.
    Forward,
    /// `delta.main < 0`: the tail leaves through the bottom and reappears before the head.
    Backward,
}

impl MoveDirection {
    /// Returns `None` for a zero main-axis delta, which never recycles.
    pub fn of(delta_main: f64) -> Option<Self> {
        if delta_main > 0.0 {
            Some(Self::Forward)
        } else if delta_main < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

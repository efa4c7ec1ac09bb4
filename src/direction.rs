//! Slide directions and axis helpers.
//!
//! The slider maps its domain onto one axis of the host tree's anchor space.
//! Anchor space is normalized: `0.0` is the container's minimum edge on an
//! axis and `1.0` its maximum edge, with the vertical axis growing upward.

use glam::Vec2;

/// The direction a slider's values grow in, within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Values grow from the left edge to the right edge (default).
    #[default]
    LeftToRight,
    /// Values grow from the right edge to the left edge.
    RightToLeft,
    /// Values grow from the bottom edge to the top edge.
    BottomToTop,
    /// Values grow from the top edge to the bottom edge.
    TopToBottom,
}

impl SlideDirection {
    /// The container axis this direction slides along.
    pub fn axis(self) -> Axis {
        match self {
            Self::LeftToRight | Self::RightToLeft => Axis::Horizontal,
            Self::BottomToTop | Self::TopToBottom => Axis::Vertical,
        }
    }

    /// Whether the value mapping is mirrored on the active axis.
    ///
    /// A reversed direction places the domain minimum at anchor `1.0`
    /// instead of anchor `0.0`.
    pub fn reversed(self) -> bool {
        matches!(self, Self::RightToLeft | Self::TopToBottom)
    }
}

/// One of the two container axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Reads this axis' component of a vector.
    pub fn component(self, value: Vec2) -> f32 {
        match self {
            Self::Horizontal => value.x,
            Self::Vertical => value.y,
        }
    }

    /// Writes this axis' component of a vector, leaving the other untouched.
    pub fn set_component(self, target: &mut Vec2, value: f32) {
        match self {
            Self::Horizontal => target.x = value,
            Self::Vertical => target.y = value,
        }
    }

    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A directional input, e.g. from keyboard arrows or a gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Toward negative x.
    Left,
    /// Toward positive x.
    Right,
    /// Toward positive y.
    Up,
    /// Toward negative y.
    Down,
}

impl MoveDirection {
    /// The axis this input moves along.
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Whether this input points toward the positive end of its axis.
    pub fn toward_positive(self) -> bool {
        matches!(self, Self::Right | Self::Up)
    }

    /// Stable index for neighbor tables.
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }
}

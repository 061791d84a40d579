// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key stepping for one-dimensional resizes.
//!
//! Every resize in Trellis is one-dimensional: a value grows toward one edge
//! of its element. [`GrowDirection`] names that edge and thereby fixes both
//! the axis a pointer delta is measured along and the sign convention
//! ("pointer moving right grows a right-growing value and shrinks a
//! left-growing one"). [`keyboard_step`] applies the same convention to
//! arrow keys, so keyboard and pointer resizes agree about direction.

use kurbo::Vec2;

/// Size of one arrow-key resize step, in logical pixels.
pub const KEYBOARD_STEP: f64 = 20.0;

/// Step scale applied while a precision modifier (Shift) is held.
pub const PRECISION_FACTOR: f64 = 0.25;

/// The axis a resize operates along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// The edge a resized value grows toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowDirection {
    /// Larger values extend the element rightward.
    Right,
    /// Larger values extend the element leftward.
    Left,
    /// Larger values extend the element upward.
    Top,
    /// Larger values extend the element downward.
    Bottom,
}

impl GrowDirection {
    /// The axis this direction resizes along.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Projects a pointer delta onto this direction's axis with its sign.
    ///
    /// The result is positive when the pointer moved toward the growing
    /// edge: `+dx` for [`Right`](Self::Right), `-dx` for [`Left`](Self::Left),
    /// `-dy` for [`Top`](Self::Top) (screen y grows downward), `+dy` for
    /// [`Bottom`](Self::Bottom).
    #[must_use]
    pub fn signed_delta(self, delta: Vec2) -> f64 {
        match self {
            Self::Right => delta.x,
            Self::Left => -delta.x,
            Self::Top => -delta.y,
            Self::Bottom => delta.y,
        }
    }
}

/// An arrow key, the only keys that drive keyboard resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
}

/// Returns the signed step `key` applies to a value growing in `direction`.
///
/// Arrow keys on the cross axis return `None` and must leave the value
/// untouched, so vertical arrows keep their meaning (e.g. caret movement)
/// next to a horizontal handle.
#[must_use]
pub fn keyboard_step(direction: GrowDirection, key: ArrowKey) -> Option<f64> {
    use GrowDirection::*;
    match (direction, key) {
        (Right, ArrowKey::Right) | (Left, ArrowKey::Left) => Some(KEYBOARD_STEP),
        (Right, ArrowKey::Left) | (Left, ArrowKey::Right) => Some(-KEYBOARD_STEP),
        (Top, ArrowKey::Up) | (Bottom, ArrowKey::Down) => Some(KEYBOARD_STEP),
        (Top, ArrowKey::Down) | (Bottom, ArrowKey::Up) => Some(-KEYBOARD_STEP),
        _ => None,
    }
}

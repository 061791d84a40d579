// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event classification and coordinate extraction.
//!
//! Hosts build one [`PointerInput`] per raw event. The type answers three
//! questions the resize engines care about:
//!
//! - where the pointer is, in client coordinates ([`PointerInput::client_coords`]),
//! - whether this event is allowed to start a drag session
//!   ([`PointerInput::starts_drag`]),
//! - which listener pair the host must register for the rest of the session
//!   ([`PointerSource::session_listeners`]).

use kurbo::Point;

/// Which button initiated a mouse interaction.
///
/// Host adapters map their platform's button numbering onto this; DOM-style
/// hosts map button `0` to [`Primary`](Self::Primary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary button (usually left).
    Primary,
    /// The auxiliary button (usually middle/wheel).
    Auxiliary,
    /// The secondary button (usually right).
    Secondary,
    /// Any other button, carrying the host's raw button number.
    Other(u8),
}

/// The source category of a pointer event.
///
/// Mouse and touch sessions are terminated by different host events, so the
/// category chosen at pointer-down decides which listener pair the host
/// registers and later removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// A mouse event, with the button that was involved.
    Mouse {
        /// The button associated with the event.
        button: PointerButton,
    },
    /// A touch event. Coordinates come from the first active touch point.
    Touch,
}

/// The end/move listener names a host must register for one session.
///
/// Returned by [`PointerSource::session_listeners`]. The names follow DOM
/// conventions; non-DOM hosts treat them as opaque tags for their own
/// mouse/touch event pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionListeners {
    /// The event that continues the session (`mousemove` / `touchmove`).
    pub move_event: &'static str,
    /// The event that ends the session (`mouseup` / `touchend`).
    pub end_event: &'static str,
}

impl PointerSource {
    /// Returns the listener pair that drives a session started by this source.
    ///
    /// A session started by a mouse-down must only be advanced by mouse moves
    /// and ended by a mouse-up; the touch pair is disjoint. Registering the
    /// wrong pair lets an unrelated input stream hijack or leak the session.
    #[must_use]
    pub fn session_listeners(self) -> SessionListeners {
        match self {
            Self::Mouse { .. } => SessionListeners {
                move_event: "mousemove",
                end_event: "mouseup",
            },
            Self::Touch => SessionListeners {
                move_event: "touchmove",
                end_event: "touchend",
            },
        }
    }
}

/// One normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    /// Mouse or touch, with button information for mouse events.
    pub source: PointerSource,
    /// Client-space position, when the host could extract one from the raw
    /// event. `None` models an unrecognized or degenerate event shape (for
    /// example a touch event with an empty touch list).
    pub position: Option<Point>,
    /// Whether the event's hit target is exactly the element the handler is
    /// attached to. Events bubbling up from child elements carry `false` and
    /// never start a drag, so interactive children keep their own gestures.
    pub hit_is_current_target: bool,
}

impl PointerInput {
    /// Returns the client coordinates, if the raw event carried any.
    #[must_use]
    pub fn client_coords(&self) -> Option<Point> {
        self.position
    }

    /// Returns the client coordinates, falling back to the origin.
    ///
    /// A missing position is a programmer error in the host adapter, not a
    /// user-facing condition: development builds assert so the integration
    /// bug surfaces early, release builds return `Point::ORIGIN` rather than
    /// crash mid-gesture.
    #[must_use]
    pub fn client_coords_or_origin(&self) -> Point {
        debug_assert!(
            self.position.is_some(),
            "pointer input carries no client coordinates"
        );
        self.position.unwrap_or(Point::ORIGIN)
    }

    /// Returns `true` if this event may start a drag session.
    ///
    /// Mouse events qualify only for the primary button and only when the
    /// event targets the handler's own element. Touch starts are accepted
    /// as-is, matching platform convention where touch has no buttons.
    #[must_use]
    pub fn starts_drag(&self) -> bool {
        match self.source {
            PointerSource::Mouse { button } => {
                button == PointerButton::Primary && self.hit_is_current_target
            }
            PointerSource::Touch => true,
        }
    }
}

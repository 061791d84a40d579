// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session tracking: deltas and offsets across one down → move× → up run.
//!
//! A [`DragSession`] answers the two questions the Trellis resize engines
//! ask during a drag:
//!
//! - "how far since the last move?" ([`DragSession::move_to`]) — used by the
//!   column resize controller, which feeds incremental deltas into the width
//!   model so each move builds on the previous one;
//! - "how far since the start?" ([`DragSession::offset_from_start`]) — used
//!   by the panel split model, which recomputes its split from the captured
//!   session-start geometry on every move to avoid accumulated drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use trellis_pointer::DragSession;
//!
//! let mut session = DragSession::default();
//! session.begin(Point::new(10.0, 20.0));
//!
//! let delta = session.move_to(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//!
//! let total = session.offset_from_start(Point::new(18.0, 25.0)).unwrap();
//! assert_eq!((total.x, total.y), (8.0, 5.0));
//!
//! session.finish();
//! assert!(!session.is_active());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one continuous drag session.
///
/// The session is inert until [`begin`](Self::begin); moves observed while
/// inert return `None` so stray move events between sessions are harmless.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSession {
    start: Option<Point>,
    last: Option<Point>,
}

impl DragSession {
    /// Starts a session at `pos`, replacing any session already in progress.
    pub fn begin(&mut self, pos: Point) {
        self.start = Some(pos);
        self.last = Some(pos);
    }

    /// Advances the session to `pos`, returning the delta since the previous
    /// move (or since [`begin`](Self::begin) for the first move).
    ///
    /// Returns `None` when no session is active.
    pub fn move_to(&mut self, pos: Point) -> Option<Vec2> {
        self.start?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Returns the cumulative offset of `pos` from the session start.
    ///
    /// Returns `None` when no session is active.
    #[must_use]
    pub fn offset_from_start(&self, pos: Point) -> Option<Vec2> {
        self.start.map(|start| pos - start)
    }

    /// Ends the session. Safe to call when no session is active.
    pub fn finish(&mut self) {
        self.start = None;
        self.last = None;
    }

    /// Returns `true` while a session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Returns the position the session started at, if one is active.
    #[must_use]
    pub fn start_position(&self) -> Option<Point> {
        self.start
    }
}

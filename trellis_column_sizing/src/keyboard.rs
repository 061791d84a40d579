// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard-driven column resizing.
//!
//! [`InteractiveResize`] is a small mode machine: a host enters it for one
//! column (typically from a context menu or a keyboard shortcut on the
//! header), feeds it key presses while it is active, and leaves it on
//! Enter, Space, or Escape. Each arrow press is an atomic committed change
//! routed through the same mutation path as a pointer drag.

use alloc::vec::Vec;

use trellis_pointer::{ArrowKey, GrowDirection, PRECISION_FACTOR};

use crate::SizingEvent;
use crate::controller::ColumnResizeController;

/// A key press delivered to the interactive resize mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractiveKey {
    /// An arrow key.
    Arrow(ArrowKey),
    /// Confirms the current width and leaves the mode.
    Enter,
    /// Confirms the current width and leaves the mode.
    Space,
    /// Leaves the mode. Widths already applied are kept; arrow presses
    /// commit immediately, so there is nothing to roll back.
    Escape,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome<Id> {
    /// The key is not part of the interactive protocol (or the mode is
    /// inactive); the host should let it propagate.
    Ignored,
    /// The active column was resized. Carries any structural events the
    /// refit produced.
    Resized(Vec<SizingEvent<Id>>),
    /// The mode was left.
    Exited,
}

/// Keyboard interactive-resize mode for one table.
///
/// At most one column is interactively resizable at a time. Columns grow
/// rightward, so ArrowRight widens and ArrowLeft narrows; vertical arrows
/// are ignored and left for the host's focus handling.
#[derive(Debug, Default)]
pub struct InteractiveResize<Id> {
    active: Option<Id>,
}

impl<Id: Clone + PartialEq> InteractiveResize<Id> {
    /// Creates an inactive mode machine.
    #[must_use]
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Enters the mode for `column_id`, replacing any previous column.
    pub fn enter(&mut self, column_id: Id) {
        self.active = Some(column_id);
    }

    /// Leaves the mode.
    pub fn exit(&mut self) {
        self.active = None;
    }

    /// The column currently in interactive resize, if any.
    #[must_use]
    pub fn active_column(&self) -> Option<&Id> {
        self.active.as_ref()
    }

    /// Whether the mode is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Applies one key press to `controller`.
    ///
    /// `precision` is the state of the precision modifier (Shift); it scales
    /// arrow steps by [`PRECISION_FACTOR`].
    pub fn handle_key(
        &mut self,
        controller: &mut ColumnResizeController<Id>,
        key: InteractiveKey,
        precision: bool,
    ) -> KeyOutcome<Id> {
        let Some(column_id) = self.active.clone() else {
            return KeyOutcome::Ignored;
        };

        match key {
            InteractiveKey::Arrow(arrow) => {
                let Some(step) = trellis_pointer::keyboard_step(GrowDirection::Right, arrow) else {
                    return KeyOutcome::Ignored;
                };
                let step = if precision {
                    step * PRECISION_FACTOR
                } else {
                    step
                };
                let current = controller.column_width(&column_id);
                KeyOutcome::Resized(controller.set_column_width(&column_id, current + step))
            }
            InteractiveKey::Enter | InteractiveKey::Space | InteractiveKey::Escape => {
                self.active = None;
                KeyOutcome::Exited
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnOptions, ColumnSizingOptions};
    use alloc::vec;

    fn controller() -> ColumnResizeController<&'static str> {
        let options = ColumnSizingOptions {
            per_column: vec![
                ("a", padless()),
                ("b", padless()),
                ("c", padless()),
            ],
        };
        let mut controller = ColumnResizeController::new(&["a", "b", "c"], options);
        controller.init(450.0);
        controller
    }

    fn padless() -> ColumnOptions {
        ColumnOptions {
            min_width: 100.0,
            ideal_width: 150.0,
            padding: 0.0,
        }
    }

    #[test]
    fn keys_are_ignored_while_inactive() {
        let mut mode = InteractiveResize::new();
        let mut c = controller();
        let outcome = mode.handle_key(&mut c, InteractiveKey::Arrow(ArrowKey::Right), false);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(c.column_width(&"a"), 150.0);
    }

    #[test]
    fn arrow_right_widens_by_a_step() {
        let mut mode = InteractiveResize::new();
        let mut c = controller();
        mode.enter("a");

        let outcome = mode.handle_key(&mut c, InteractiveKey::Arrow(ArrowKey::Right), false);
        assert_eq!(outcome, KeyOutcome::Resized(vec![]));
        assert_eq!(c.column_width(&"a"), 170.0);
        assert_eq!(c.column_width(&"c"), 130.0);
        assert_eq!(c.total_width(), 450.0);
    }

    #[test]
    fn arrow_left_narrows_by_a_step() {
        let mut mode = InteractiveResize::new();
        let mut c = controller();
        mode.enter("a");

        mode.handle_key(&mut c, InteractiveKey::Arrow(ArrowKey::Left), false);
        assert_eq!(c.column_width(&"a"), 130.0);
        // The freed 20px flows to the last column.
        assert_eq!(c.column_width(&"c"), 170.0);
    }

    #[test]
    fn precision_modifier_quarters_the_step() {
        let mut mode = InteractiveResize::new();
        let mut c = controller();
        mode.enter("a");

        mode.handle_key(&mut c, InteractiveKey::Arrow(ArrowKey::Right), true);
        assert_eq!(c.column_width(&"a"), 155.0);
    }

    #[test]
    fn vertical_arrows_are_ignored() {
        let mut mode = InteractiveResize::new();
        let mut c = controller();
        mode.enter("a");

        let outcome = mode.handle_key(&mut c, InteractiveKey::Arrow(ArrowKey::Up), false);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(mode.is_active());
        assert_eq!(c.column_width(&"a"), 150.0);
    }

    #[test]
    fn enter_space_and_escape_leave_the_mode() {
        for key in [
            InteractiveKey::Enter,
            InteractiveKey::Space,
            InteractiveKey::Escape,
        ] {
            let mut mode = InteractiveResize::new();
            let mut c = controller();
            mode.enter("b");
            assert_eq!(mode.handle_key(&mut c, key, false), KeyOutcome::Exited);
            assert!(!mode.is_active());
        }
    }

    #[test]
    fn steps_below_min_are_rejected_atomically() {
        let mut mode = InteractiveResize::new();
        let mut c = controller();
        c.container_resized(300.0);
        mode.enter("a");
        assert_eq!(c.column_width(&"a"), 100.0);

        // 100 - 20 < min 100: the press does nothing.
        let outcome = mode.handle_key(&mut c, InteractiveKey::Arrow(ArrowKey::Left), false);
        assert_eq!(outcome, KeyOutcome::Resized(vec![]));
        assert_eq!(c.column_width(&"a"), 100.0);
    }

    #[test]
    fn entering_another_column_replaces_the_first() {
        let mut mode = InteractiveResize::new();
        mode.enter("a");
        mode.enter("b");
        assert_eq!(mode.active_column(), Some(&"b"));
    }
}

// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mutable adapter between the pure width model and a live container.
//!
//! [`ColumnResizeController`] is the only stateful type in the crate. It
//! owns the current column state, the last observed container width, and the
//! active drag session, and it routes every change through the pure
//! functions in [`state`](crate::state). Hosts wire it up by:
//!
//! 1. calling [`ColumnResizeController::init`] with the measured container
//!    width once the container exists,
//! 2. pushing size-observer readings into
//!    [`ColumnResizeController::container_resized`],
//! 3. forwarding pointer events on a column's resize affordance into
//!    [`begin_drag`](ColumnResizeController::begin_drag) /
//!    [`drag_to`](ColumnResizeController::drag_to) /
//!    [`end_drag`](ColumnResizeController::end_drag),
//! 4. reading [`column_props`](ColumnResizeController::column_props) when
//!    rendering cells.
//!
//! A drag session and a size-observer push must not both reshape the state:
//! while a drag is active, observer pushes record the new width but skip
//! redistribution, which resumes on the next drag move (using the fresh
//! width) or at session end.

use alloc::vec::Vec;

use trellis_pointer::{DragSession, PointerInput};

use crate::state::{
    self, ColumnSizingOptions, ColumnWidthState, SizingEvent, adjust_to_fit,
    columns_from_definitions, reset_layout, set_column_ideal_width, set_column_width, total_width,
};

/// A ready-to-apply sizing style fragment for one rendered cell.
///
/// All three fields carry the same value: fixed table layouts use `width`,
/// flex layouts need the min/max pair to stop the cell from flexing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizingStyle {
    /// The column width in logical pixels.
    pub width: f64,
    /// Lower flex bound, equal to `width`.
    pub min_width: f64,
    /// Upper flex bound, equal to `width`.
    pub max_width: f64,
}

impl SizingStyle {
    /// A style that fixes a cell at `width`.
    #[must_use]
    pub fn fixed(width: f64) -> Self {
        Self {
            width,
            min_width: width,
            max_width: width,
        }
    }

    /// This style with every field rounded to a whole pixel.
    ///
    /// Internal widths stay fractional; rounding is only for the boundary
    /// where a value becomes a concrete style length.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::fixed(round_px(self.width))
    }
}

// Widths are non-negative, so round-half-up via truncation is exact and
// avoids needing a float `round` in no_std builds.
fn round_px(value: f64) -> f64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "widths are far below i64 range; truncation implements the rounding"
    )]
    {
        (value + 0.5) as i64 as f64
    }
}

/// Sizing props for one cell: the style plus the id to key it by.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProps<Id> {
    /// The column the props belong to.
    pub column_id: Id,
    /// Fixed sizing style for the cell.
    pub style: SizingStyle,
}

/// Stateful column resize engine for one table.
///
/// See the [module docs](self) for the wiring protocol.
#[derive(Debug)]
pub struct ColumnResizeController<Id> {
    columns: Vec<ColumnWidthState<Id>>,
    options: ColumnSizingOptions<Id>,
    container_width: f64,
    session: DragSession,
    dragged: Option<Id>,
    /// Net signed pointer travel along x since the drag began. Used to tell
    /// whether dragging the last column has freed container space.
    total_distance: f64,
}

impl<Id: Clone + PartialEq> ColumnResizeController<Id> {
    /// Creates a controller for the given ordered column definitions.
    ///
    /// The controller is inert until [`init`](Self::init) provides a
    /// container width.
    #[must_use]
    pub fn new(definitions: &[Id], options: ColumnSizingOptions<Id>) -> Self {
        let columns = columns_from_definitions(definitions, &[], &options).unwrap_or_default();
        Self {
            columns,
            options,
            container_width: 0.0,
            session: DragSession::default(),
            dragged: None,
            total_distance: 0.0,
        }
    }

    /// Binds the controller to a measured container: records the width and
    /// lays every column out from scratch.
    pub fn init(&mut self, container_width: f64) {
        self.container_width = container_width;
        reset_layout(&mut self.columns, container_width);
    }

    /// Reacts to an observed container size change.
    ///
    /// Runs the fit-to-container adjustment only — not a full relayout — so
    /// proportions the user has established survive window resizes. While a
    /// drag is active the new width is recorded but redistribution is
    /// skipped; the drag owns the state until it ends.
    pub fn container_resized(&mut self, container_width: f64) -> Vec<SizingEvent<Id>> {
        self.container_width = container_width;
        let mut events = Vec::new();
        if !self.is_resizing() {
            adjust_to_fit(&mut self.columns, container_width, &mut events);
        }
        events
    }

    /// Reconciles a new ordered definition list.
    ///
    /// When the column set actually changed, the layout is recomputed from
    /// scratch (structural changes invalidate fit-derived proportions, but
    /// ideal widths — including past deliberate resizes — survive for the
    /// columns that remain).
    pub fn set_columns(&mut self, definitions: &[Id]) {
        if let Some(next) = columns_from_definitions(definitions, &self.columns, &self.options) {
            self.columns = next;
            reset_layout(&mut self.columns, self.container_width);
        }
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.session.is_active()
    }

    /// Starts a drag session on `column_id`'s resize affordance.
    ///
    /// Returns `false` (and starts nothing) for non-primary buttons, events
    /// targeting child elements, and unknown columns.
    pub fn begin_drag(&mut self, column_id: Id, input: &PointerInput) -> bool {
        if !input.starts_drag() || state::column_by_id(&self.columns, &column_id).is_none() {
            return false;
        }
        self.session.begin(input.client_coords_or_origin());
        self.dragged = Some(column_id);
        self.total_distance = 0.0;
        true
    }

    /// Advances the active drag with a pointer move.
    ///
    /// Each move applies the delta since the *previous* move on top of the
    /// column's current width, so redistribution from earlier moves is kept
    /// rather than recomputed. Dragging the last column leftward cannot hand
    /// width to a column on its right; once the net travel is a shrink, the
    /// freed pixels are reported as [`SizingEvent::SpaceAvailable`] so the
    /// host can bring back a column it previously hid.
    pub fn drag_to(&mut self, input: &PointerInput) -> Vec<SizingEvent<Id>> {
        let mut events = Vec::new();
        let Some(column_id) = self.dragged.clone() else {
            return events;
        };
        let Some(delta) = self.session.move_to(input.client_coords_or_origin()) else {
            return events;
        };

        self.total_distance += delta.x;
        let current = state::column_width(&self.columns, &column_id);
        set_column_width(
            &mut self.columns,
            &column_id,
            current + delta.x,
            self.container_width,
            &mut events,
        );

        let is_last = self
            .columns
            .last()
            .is_some_and(|last| last.column_id == column_id);
        if is_last && self.total_distance < 0.0 {
            events.push(SizingEvent::SpaceAvailable(-self.total_distance));
        }

        events
    }

    /// Ends the drag session and resets the travel accumulator.
    pub fn end_drag(&mut self) {
        self.session.finish();
        self.dragged = None;
        self.total_distance = 0.0;
    }

    /// The width of `column_id`, or `0.0` for an unknown id.
    #[must_use]
    pub fn column_width(&self, column_id: &Id) -> f64 {
        state::column_width(&self.columns, column_id)
    }

    /// Total occupied width of all columns including padding.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        total_width(&self.columns)
    }

    /// The ordered column records.
    #[must_use]
    pub fn column_widths(&self) -> &[ColumnWidthState<Id>] {
        &self.columns
    }

    /// Looks up one column record.
    #[must_use]
    pub fn column(&self, column_id: &Id) -> Option<&ColumnWidthState<Id>> {
        state::column_by_id(&self.columns, column_id)
    }

    /// The last container width pushed into the controller.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Sizing props for rendering `column_id`'s cells.
    ///
    /// Unknown ids return a zeroed style rather than failing: a column
    /// removed between state updates may still be queried by an in-flight
    /// render pass.
    #[must_use]
    pub fn column_props(&self, column_id: &Id) -> ColumnProps<Id> {
        let style = self
            .column(column_id)
            .map_or_else(SizingStyle::default, |column| {
                SizingStyle::fixed(column.width)
            });
        ColumnProps {
            column_id: column_id.clone(),
            style,
        }
    }

    /// Deliberately resizes one column (see [`state::set_column_width`]).
    pub fn set_column_width(&mut self, column_id: &Id, width: f64) -> Vec<SizingEvent<Id>> {
        let mut events = Vec::new();
        set_column_width(
            &mut self.columns,
            column_id,
            width,
            self.container_width,
            &mut events,
        );
        events
    }

    /// Updates one column's ideal width (see [`state::set_column_ideal_width`]).
    pub fn set_column_ideal_width(&mut self, column_id: &Id, width: f64) {
        set_column_ideal_width(&mut self.columns, column_id, width);
    }

    /// Recomputes the layout from scratch against `available_width`.
    pub fn reset_layout(&mut self, available_width: f64) {
        self.container_width = available_width;
        reset_layout(&mut self.columns, available_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;
    use trellis_pointer::{PointerButton, PointerSource};

    fn controller() -> ColumnResizeController<&'static str> {
        let options = ColumnSizingOptions {
            per_column: vec![
                ("a", no_padding()),
                ("b", no_padding()),
                ("c", no_padding()),
            ],
        };
        let mut controller = ColumnResizeController::new(&["a", "b", "c"], options);
        controller.init(450.0);
        controller
    }

    fn no_padding() -> crate::ColumnOptions {
        crate::ColumnOptions {
            min_width: 100.0,
            ideal_width: 150.0,
            padding: 0.0,
        }
    }

    fn primary_down_at(x: f64) -> PointerInput {
        PointerInput {
            source: PointerSource::Mouse {
                button: PointerButton::Primary,
            },
            position: Some(Point::new(x, 0.0)),
            hit_is_current_target: true,
        }
    }

    fn move_to(x: f64) -> PointerInput {
        PointerInput {
            source: PointerSource::Mouse {
                button: PointerButton::Primary,
            },
            position: Some(Point::new(x, 0.0)),
            hit_is_current_target: false,
        }
    }

    #[test]
    fn init_lays_out_to_container() {
        let c = controller();
        assert_eq!(c.column_width(&"a"), 150.0);
        assert_eq!(c.column_width(&"b"), 150.0);
        assert_eq!(c.column_width(&"c"), 150.0);
        assert_eq!(c.total_width(), 450.0);
    }

    #[test]
    fn drag_grows_column_and_squeezes_right_neighbours() {
        let mut c = controller();
        assert!(c.begin_drag("a", &primary_down_at(150.0)));

        c.drag_to(&move_to(180.0));
        assert_eq!(c.column_width(&"a"), 180.0);
        assert_eq!(c.column_width(&"c"), 120.0);
        assert_eq!(c.total_width(), 450.0);

        // Second move builds on the first: deltas are per-move.
        c.drag_to(&move_to(200.0));
        assert_eq!(c.column_width(&"a"), 200.0);
        assert_eq!(c.column_width(&"c"), 100.0);

        c.end_drag();
        assert!(!c.is_resizing());
    }

    #[test]
    fn drag_below_min_is_clamped_silently() {
        let mut c = controller();
        assert!(c.begin_drag("a", &primary_down_at(150.0)));

        // 150 -> 40 would violate min 100; the request is a no-op.
        let events = c.drag_to(&move_to(40.0));
        assert_eq!(c.column_width(&"a"), 150.0);
        assert_eq!(events, vec![]);
    }

    #[test]
    fn non_primary_button_is_rejected() {
        let mut c = controller();
        let down = PointerInput {
            source: PointerSource::Mouse {
                button: PointerButton::Secondary,
            },
            position: Some(Point::ORIGIN),
            hit_is_current_target: true,
        };
        assert!(!c.begin_drag("a", &down));
        assert!(!c.is_resizing());
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut c = controller();
        assert!(!c.begin_drag("zz", &primary_down_at(0.0)));
    }

    #[test]
    fn moves_without_session_do_nothing() {
        let mut c = controller();
        let events = c.drag_to(&move_to(300.0));
        assert_eq!(events, vec![]);
        assert_eq!(c.total_width(), 450.0);
    }

    #[test]
    fn observer_push_refits_when_idle() {
        let mut c = controller();
        let events = c.container_resized(350.0);
        assert_eq!(c.column_width(&"a"), 150.0);
        assert_eq!(c.column_width(&"b"), 100.0);
        assert_eq!(c.column_width(&"c"), 100.0);
        assert_eq!(events, vec![]);
    }

    #[test]
    fn observer_push_is_skipped_during_drag() {
        let mut c = controller();
        c.begin_drag("a", &primary_down_at(150.0));
        c.drag_to(&move_to(180.0));

        let widths_before = [
            c.column_width(&"a"),
            c.column_width(&"b"),
            c.column_width(&"c"),
        ];
        c.container_resized(350.0);
        let widths_after = [
            c.column_width(&"a"),
            c.column_width(&"b"),
            c.column_width(&"c"),
        ];
        assert_eq!(widths_before, widths_after);

        // The recorded width still updated: the next move fits against it.
        assert_eq!(c.container_width(), 350.0);
    }

    #[test]
    fn shrinking_last_column_reports_space_available() {
        let mut c = controller();
        assert!(c.begin_drag("c", &primary_down_at(450.0)));

        let events = c.drag_to(&move_to(420.0));
        assert!(
            events.contains(&SizingEvent::SpaceAvailable(30.0)),
            "net shrink of the last column must report freed space"
        );
    }

    #[test]
    fn growing_last_column_reports_nothing() {
        let mut c = controller();
        c.begin_drag("c", &primary_down_at(450.0));
        let events = c.drag_to(&move_to(480.0));
        assert!(!events
            .iter()
            .any(|event| matches!(event, SizingEvent::SpaceAvailable(_))));
    }

    #[test]
    fn set_columns_preserves_survivors() {
        let mut c = controller();
        c.set_column_width(&"a", 200.0);
        assert_eq!(c.column_width(&"a"), 200.0);

        c.set_columns(&["a", "b"]);
        // a's deliberate width survives reconciliation and relayout.
        assert_eq!(c.column_width(&"a"), 200.0);
        assert_eq!(c.column(&"c"), None);
        assert_eq!(c.total_width(), 450.0);
    }

    #[test]
    fn set_columns_with_same_ids_keeps_state_untouched() {
        let mut c = controller();
        c.set_column_width(&"b", 180.0);
        let widths: Vec<f64> = c.column_widths().iter().map(|col| col.width).collect();

        c.set_columns(&["a", "b", "c"]);
        let after: Vec<f64> = c.column_widths().iter().map(|col| col.width).collect();
        assert_eq!(widths, after, "unchanged definitions must not relayout");
    }

    #[test]
    fn column_props_fix_the_rendered_width() {
        let c = controller();
        let props = c.column_props(&"b");
        assert_eq!(props.column_id, "b");
        assert_eq!(props.style, SizingStyle::fixed(150.0));
    }

    #[test]
    fn column_props_fall_back_for_unknown_ids() {
        let c = controller();
        let props = c.column_props(&"gone");
        assert_eq!(props.style, SizingStyle::default());
    }

    #[test]
    fn rounding_is_a_boundary_concern() {
        let style = SizingStyle::fixed(150.4).rounded();
        assert_eq!(style.width, 150.0);
        assert_eq!(SizingStyle::fixed(150.5).rounded().width, 151.0);
    }
}

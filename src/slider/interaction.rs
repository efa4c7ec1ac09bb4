//! Pointer and directional-move handling for [`IntervalSlider`].
//!
//! The widget only consumes events the host forwards to it; it performs no
//! event capture of its own. A drag session starts on pointer-down, tracks
//! through [`IntervalSlider::on_drag`], and ends on pointer-up or when the
//! widget stops being interactable.

use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::{
    direction::MoveDirection,
    event::{PointerButton, PointerEvent},
    host::{ElementId, ElementTree},
};

use super::{Interactive, IntervalSlider};

/// Which part of the slider a drag session is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraggedElement {
    /// The lower-bound handle.
    LowerHandle,
    /// The upper-bound handle.
    UpperHandle,
    /// The fill span between the handles; dragging it shifts both bounds
    /// rigidly.
    Fill,
}

/// State carried across a single press-drag-release gesture.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    pub(crate) element: DraggedElement,
    /// Grab offset in the dragged handle's local space, so the grabbed point
    /// stays under the pointer instead of snapping to the handle center.
    pointer_offset: Vec2,
    /// Domain-space distance from the grab value down to the lower bound.
    lower_offset: f32,
    /// Domain-space distance from the grab value up to the upper bound.
    upper_offset: f32,
}

/// Outcome of a directional move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The selection was stepped along the slide axis.
    Stepped,
    /// Focus should move to the returned neighbor instead.
    Navigate(ElementId),
    /// The move applies to neither the selection nor navigation.
    Ignored,
}

impl IntervalSlider {
    /// Whether the widget would accept `event` as the start of a drag.
    pub fn may_drag(&self, event: &PointerEvent) -> bool {
        self.is_active() && self.is_interactable() && event.button == PointerButton::Primary
    }

    /// Starts a drag session from a pointer press.
    ///
    /// Hit priority is lower handle, upper handle, then fill. A press that
    /// lands on none of them jumps a bound to the pointer immediately and
    /// keeps dragging it: the lower bound when the pointer sits before it,
    /// the upper bound otherwise.
    pub fn on_pointer_down(&mut self, tree: &mut impl ElementTree, event: &PointerEvent) {
        if !self.may_drag(event) {
            return;
        }

        for (handle, element) in [
            (self.lower_handle, DraggedElement::LowerHandle),
            (self.upper_handle, DraggedElement::UpperHandle),
        ] {
            if let Some(handle) = handle
                && tree.rect_contains_screen_point(handle, event.screen_position, event.camera)
            {
                let pointer_offset = tree
                    .screen_point_to_local(handle, event.screen_position, event.camera)
                    .unwrap_or(Vec2::ZERO);
                trace!(?element, ?pointer_offset, "drag started on handle");
                self.drag = Some(DragSession {
                    element,
                    pointer_offset,
                    lower_offset: 0.0,
                    upper_offset: 0.0,
                });
                return;
            }
        }

        if let Some(fill) = self.fill
            && tree.rect_contains_screen_point(fill, event.screen_position, event.camera)
            && let Some(grab_value) = self.mouse_value(tree, event)
        {
            trace!(grab_value, "drag started on fill");
            self.drag = Some(DragSession {
                element: DraggedElement::Fill,
                pointer_offset: Vec2::ZERO,
                lower_offset: grab_value - self.lower_value(),
                upper_offset: self.upper_value() - grab_value,
            });
            return;
        }

        // Off-visual press: a pointer before the lower bound grabs the lower
        // handle, anything else grabs the upper one, and the grabbed bound
        // jumps to the pointer.
        let Some(grab_value) = self.mouse_value(tree, event) else {
            warn!("pointer press ignored: no bound container to resolve against");
            return;
        };
        let element = if grab_value < self.lower_value() {
            DraggedElement::LowerHandle
        } else {
            DraggedElement::UpperHandle
        };
        trace!(?element, grab_value, "drag started by jump");
        self.drag = Some(DragSession {
            element,
            pointer_offset: Vec2::ZERO,
            lower_offset: 0.0,
            upper_offset: 0.0,
        });
        self.update_drag(tree, event);
    }

    /// Continues an active drag session.
    ///
    /// If the widget stopped accepting input mid-gesture the session is
    /// dropped without committing further changes.
    pub fn on_drag(&mut self, tree: &mut impl ElementTree, event: &PointerEvent) {
        if self.drag.is_none() {
            return;
        }
        if !self.may_drag(event) {
            debug!("drag dropped: widget no longer accepts input");
            self.drag = None;
            return;
        }
        self.update_drag(tree, event);
    }

    /// Ends the active drag session, if the released button started it.
    pub fn on_pointer_up(&mut self, event: &PointerEvent) {
        if event.button != PointerButton::Primary {
            return;
        }
        if self.drag.take().is_some() {
            debug!("drag finished");
        }
    }

    /// Marks the pointer as over the widget.
    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Marks the pointer as off the widget.
    pub fn on_pointer_exit(&mut self) {
        self.hovered = false;
    }

    /// Opts out of the host's drag threshold so handle grabs track the
    /// pointer from the first press.
    pub fn on_initialize_potential_drag(&self, event: &mut PointerEvent) {
        event.use_drag_threshold = false;
    }

    /// Handles a directional move request, usually from keyboard or gamepad.
    ///
    /// A focusable neighbor in the requested direction always wins: the
    /// widget yields the input to focus navigation. Only absent one do moves
    /// along the slide axis step both bounds by [`step_size`] (respecting
    /// direction reversal); everything else is ignored.
    ///
    /// [`step_size`]: Self::step_size
    pub fn on_move(&mut self, tree: &mut impl ElementTree, direction: MoveDirection) -> MoveResult {
        if let Some(neighbor) = tree.adjacent_focusable(self.element, direction) {
            return MoveResult::Navigate(neighbor);
        }
        if !self.is_active() || !self.is_interactable() || direction.axis() != self.axis() {
            return MoveResult::Ignored;
        }

        let mut delta = self.step_size();
        if !direction.toward_positive() {
            delta = -delta;
        }
        if self.reversed() {
            delta = -delta;
        }
        let (lower, upper) = (self.lower_value(), self.upper_value());
        self.set_lower_value(tree, lower + delta);
        self.set_upper_value(tree, upper + delta);
        MoveResult::Stepped
    }

    fn update_drag(&mut self, tree: &mut impl ElementTree, event: &PointerEvent) {
        let Some(session) = self.drag else {
            return;
        };
        match session.element {
            DraggedElement::Fill => {
                let Some(grab_value) = self.mouse_value(tree, event) else {
                    return;
                };
                // Lower first so the pair shifts rigidly instead of the
                // push rule collapsing it.
                self.set_lower_value(tree, grab_value - session.lower_offset);
                self.set_upper_value(tree, grab_value + session.upper_offset);
            }
            handle => {
                let Some(normalized) = self.pointer_normalized(tree, event, session.pointer_offset)
                else {
                    return;
                };
                if handle == DraggedElement::LowerHandle {
                    self.set_normalized_lower(tree, normalized);
                } else {
                    self.set_normalized_upper(tree, normalized);
                }
            }
        }
    }

    /// The pointer position mapped through the reference container to a
    /// normalized `[0, 1]` position on the slide axis.
    fn pointer_normalized(
        &self,
        tree: &impl ElementTree,
        event: &PointerEvent,
        pointer_offset: Vec2,
    ) -> Option<f32> {
        let container = self.handle_container.or(self.fill_container)?;
        let rect = tree.local_rect(container)?;
        let local = tree.screen_point_to_local(container, event.screen_position, event.camera)?;
        let axis = self.axis();
        let size = axis.component(rect.size());
        if size.abs() <= f32::EPSILON {
            return None;
        }
        let along = axis.component(local - rect.min - pointer_offset);
        let mut normalized = (along / size).clamp(0.0, 1.0);
        if self.reversed() {
            normalized = 1.0 - normalized;
        }
        Some(normalized)
    }

    /// The pointer position mapped all the way to a domain value.
    fn mouse_value(&self, tree: &impl ElementTree, event: &PointerEvent) -> Option<f32> {
        self.pointer_normalized(tree, event, Vec2::ZERO)
            .map(|normalized| self.denormalize(normalized))
    }
}

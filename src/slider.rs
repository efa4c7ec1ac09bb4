//! The interval slider widget.
//!
//! ## Usage
//!
//! Construct an [`IntervalSlider`] with the host element it lives on, bind
//! the fill and handle rectangles the scene provides, then forward pointer
//! and move events from the host dispatcher to the widget's `on_*` methods.

use derive_setters::Setters;
use tracing::debug;

use crate::{
    direction::{Axis, SlideDirection},
    driven::DrivenTracker,
    host::{ElementId, ElementTree},
    notify::ValueChanged,
};

use interaction::DragSession;

pub use interaction::{DraggedElement, MoveResult};

mod interaction;
mod projection;
mod value;

/// Capability check the drag controller runs before accepting input.
///
/// Hosts with their own enable/interaction flags can mirror them into the
/// widget through [`IntervalSlider::set_active`] and
/// [`IntervalSlider::set_interactable`].
pub trait Interactive {
    /// Whether the widget participates in the scene at all.
    fn is_active(&self) -> bool;

    /// Whether the widget currently accepts user input.
    fn is_interactable(&self) -> bool;
}

/// Initial configuration for an [`IntervalSlider`].
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SliderConfig {
    /// The direction values grow in.
    pub direction: SlideDirection,
    /// The domain's lower bound.
    pub min_value: f32,
    /// The domain's upper bound.
    pub max_value: f32,
    /// Round values to whole numbers on read and on write.
    pub whole_numbers: bool,
    /// The selection's lower bound.
    pub lower_value: f32,
    /// The selection's upper bound.
    pub upper_value: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            direction: SlideDirection::LeftToRight,
            min_value: 0.0,
            max_value: 1.0,
            whole_numbers: false,
            lower_value: 0.0,
            upper_value: 0.0,
        }
    }
}

/// A dual-handle slider selecting a contiguous `[lower, upper]` sub-range of
/// a fixed `[min, max]` domain.
///
/// The widget owns no visuals. It drives up to three externally owned
/// rectangles (a fill span and two handle thumbs) through anchor writes, and
/// reports committed value changes through a multi-subscriber event.
pub struct IntervalSlider {
    element: ElementId,

    direction: SlideDirection,
    min_value: f32,
    max_value: f32,
    whole_numbers: bool,
    // Stored bounds keep float precision even with whole_numbers set; reads
    // round. They can transiently violate lower <= upper inside a setter,
    // never across a public call.
    lower: f32,
    upper: f32,

    fill: Option<ElementId>,
    lower_handle: Option<ElementId>,
    upper_handle: Option<ElementId>,
    fill_container: Option<ElementId>,
    handle_container: Option<ElementId>,
    fill_is_amount: bool,

    tracker: DrivenTracker,
    drag: Option<DragSession>,
    hovered: bool,
    active: bool,
    interactable: bool,

    on_value_changed: ValueChanged,
}

impl IntervalSlider {
    /// Creates a slider living on `element` with the given configuration.
    ///
    /// Configured values are sanitized the same way runtime writes are:
    /// rounded when `whole_numbers` is set, clamped to the domain, and the
    /// upper bound pushed up to keep `lower <= upper`.
    pub fn new(element: ElementId, config: SliderConfig) -> Self {
        let mut slider = Self {
            element,
            direction: config.direction,
            min_value: config.min_value,
            max_value: config.max_value,
            whole_numbers: config.whole_numbers,
            lower: 0.0,
            upper: 0.0,
            fill: None,
            lower_handle: None,
            upper_handle: None,
            fill_container: None,
            handle_container: None,
            fill_is_amount: false,
            tracker: DrivenTracker::new(),
            drag: None,
            hovered: false,
            active: true,
            interactable: true,
            on_value_changed: ValueChanged::new(),
        };
        if slider.whole_numbers {
            slider.min_value = slider.min_value.round();
            slider.max_value = slider.max_value.round();
        }
        slider.lower = slider.sanitize(config.lower_value);
        slider.upper = slider.sanitize(config.upper_value).max(slider.lower);
        slider
    }

    /// The host element this widget lives on.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// The direction values grow in.
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Changes the slide direction.
    ///
    /// With `include_layout_flip` set, an axis change asks the host to swap
    /// the widget's own layout axes, and a reversal change asks it to mirror
    /// the layout on the active axis. Both are one-shot corrections, not
    /// persisted flags.
    pub fn set_direction(
        &mut self,
        tree: &mut impl ElementTree,
        direction: SlideDirection,
        include_layout_flip: bool,
    ) {
        if direction == self.direction {
            return;
        }
        let previous = self.direction;
        self.direction = direction;

        if include_layout_flip {
            if direction.axis() != previous.axis() {
                tree.flip_layout_axes(self.element);
            } else if direction.reversed() != previous.reversed() {
                tree.flip_layout_on_axis(self.element, direction.axis());
            }
        }
        self.update_visuals(tree);
    }

    /// The domain's lower bound.
    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    /// Changes the domain's lower bound and re-clamps the selection.
    pub fn set_min_value(&mut self, tree: &mut impl ElementTree, value: f32) {
        let value = self.round_if_whole(value);
        if value == self.min_value {
            return;
        }
        self.min_value = value;
        self.reapply_values(tree, true);
    }

    /// The domain's upper bound.
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Changes the domain's upper bound and re-clamps the selection.
    pub fn set_max_value(&mut self, tree: &mut impl ElementTree, value: f32) {
        let value = self.round_if_whole(value);
        if value == self.max_value {
            return;
        }
        self.max_value = value;
        self.reapply_values(tree, true);
    }

    /// Whether values round to whole numbers.
    pub fn whole_numbers(&self) -> bool {
        self.whole_numbers
    }

    /// Toggles whole-number rounding. Enabling it rounds the domain bounds
    /// and re-clamps the selection.
    pub fn set_whole_numbers(&mut self, tree: &mut impl ElementTree, whole_numbers: bool) {
        if whole_numbers == self.whole_numbers {
            return;
        }
        self.whole_numbers = whole_numbers;
        if whole_numbers {
            self.min_value = self.min_value.round();
            self.max_value = self.max_value.round();
        }
        self.reapply_values(tree, true);
    }

    /// The bound fill element, if any.
    pub fn fill(&self) -> Option<ElementId> {
        self.fill
    }

    /// Binds or unbinds the fill rectangle and refreshes derived caches.
    pub fn bind_fill(&mut self, tree: &mut impl ElementTree, fill: Option<ElementId>) {
        if fill == self.fill {
            return;
        }
        self.fill = fill;
        self.rebuild_binding_cache(tree);
        self.update_visuals(tree);
    }

    /// The bound lower-handle element, if any.
    pub fn lower_handle(&self) -> Option<ElementId> {
        self.lower_handle
    }

    /// Binds or unbinds the lower handle and refreshes derived caches.
    pub fn bind_lower_handle(&mut self, tree: &mut impl ElementTree, handle: Option<ElementId>) {
        if handle == self.lower_handle {
            return;
        }
        self.lower_handle = handle;
        self.rebuild_binding_cache(tree);
        self.update_visuals(tree);
    }

    /// The bound upper-handle element, if any.
    pub fn upper_handle(&self) -> Option<ElementId> {
        self.upper_handle
    }

    /// Binds or unbinds the upper handle and refreshes derived caches.
    pub fn bind_upper_handle(&mut self, tree: &mut impl ElementTree, handle: Option<ElementId>) {
        if handle == self.upper_handle {
            return;
        }
        self.upper_handle = handle;
        self.rebuild_binding_cache(tree);
        self.update_visuals(tree);
    }

    /// The change notification, fired with `(lower, upper)` whenever a
    /// committed value actually changes.
    ///
    /// Clone the returned handle to subscribe from application code while
    /// the host owns the widget.
    pub fn on_value_changed(&self) -> &ValueChanged {
        &self.on_value_changed
    }

    /// The driven-property claims currently held by this widget.
    pub fn driven_tracker(&self) -> &DrivenTracker {
        &self.tracker
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// What is being dragged, while a session is in progress.
    pub fn dragged_element(&self) -> Option<DraggedElement> {
        self.drag.as_ref().map(|session| session.element)
    }

    /// Whether the pointer is currently over the widget.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Mirrors the host's active state into the widget.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Mirrors the host's interactable state into the widget.
    pub fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }

    /// Host hook: the widget was (re-)enabled.
    ///
    /// Re-caches binding-derived references, re-clamps the selection without
    /// notifying, and re-projects geometry.
    pub fn on_enable(&mut self, tree: &mut impl ElementTree) {
        self.active = true;
        self.rebuild_binding_cache(tree);
        self.reapply_values(tree, false);
    }

    /// Host hook: the widget was disabled.
    ///
    /// Releases all driven-property claims and abandons any drag session.
    pub fn on_disable(&mut self) {
        self.active = false;
        self.tracker.clear();
        if self.drag.take().is_some() {
            debug!("drag abandoned by disable");
        }
        self.hovered = false;
    }

    /// Host hook: about to lay out.
    ///
    /// Re-emits the change notification so subscribers registered after the
    /// last change still observe the current value.
    pub fn pre_layout_refresh(&self) {
        self.on_value_changed
            .emit(self.lower_value(), self.upper_value());
    }

    /// Host hook: animated properties were written to the fill visual.
    ///
    /// With an amount-mode fill bound, reads the normalized selection back
    /// out of the fill geometry and adopts it without notifying; animation
    /// writes are not user commits.
    ///
    /// # Panics
    ///
    /// Panics when an amount-mode fill is bound but its container is gone;
    /// that is a broken binding the caller must fix.
    pub fn on_animation_properties_applied(&mut self, tree: &mut impl ElementTree) {
        if self.fill.is_some() && self.fill_is_amount {
            let (lower, upper) = self
                .fill_normalized_span(tree)
                .expect("animation applied through a broken fill binding");
            self.set_normalized_lower_internal(tree, lower, false);
            self.set_normalized_upper_internal(tree, upper, false);
        }
        self.update_visuals(tree);
    }

    pub(crate) fn reversed(&self) -> bool {
        self.direction.reversed()
    }

    pub(crate) fn axis(&self) -> Axis {
        self.direction.axis()
    }

    fn reapply_values(&mut self, tree: &mut impl ElementTree, notify: bool) {
        let (lower, upper) = (self.lower, self.upper);
        self.set_lower_internal(tree, lower, notify);
        self.set_upper_internal(tree, upper, notify);
        self.update_visuals(tree);
    }

    fn rebuild_binding_cache(&mut self, tree: &impl ElementTree) {
        self.fill_is_amount = self
            .fill
            .is_some_and(|fill| tree.fill_amount(fill).is_some());
        self.fill_container = self.fill.and_then(|fill| tree.parent(fill));
        self.handle_container = self
            .lower_handle
            .or(self.upper_handle)
            .and_then(|handle| tree.parent(handle));
    }
}

impl Interactive for IntervalSlider {
    fn is_active(&self) -> bool {
        self.active
    }

    fn is_interactable(&self) -> bool {
        self.interactable
    }
}

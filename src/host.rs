//! The collaborator contract with the host UI tree.
//!
//! The slider never owns its visuals: the host tree owns every rectangle and
//! hands the widget weak [`ElementId`] handles. All geometry reads and
//! writes go through [`ElementTree`], and a stale handle simply resolves to
//! `None`, never to dangling access.

use glam::Vec2;
use slotmap::new_key_type;
use thiserror::Error;

use crate::{
    direction::{Axis, MoveDirection},
    geometry::{Anchors, Rect},
};

pub mod screen_space;

new_key_type! {
    /// Weak handle to a rectangle owned by the host tree.
    pub struct ElementId;

    /// Weak handle to a camera owned by the host tree.
    pub struct CameraId;
}

/// A broken visual binding detected by a fill-geometry operation.
///
/// These are programming errors on the caller's side, not runtime
/// conditions: the lifecycle paths that hit them fail loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BindingError {
    /// No fill element is bound.
    #[error("no fill element is bound")]
    MissingFill,
    /// The bound fill element carries no amount-fill capability.
    #[error("the bound fill element has no fill amount")]
    MissingFillAmount,
    /// The bound fill element has no parent container to measure against.
    #[error("the bound fill element has no parent container")]
    MissingFillContainer,
}

/// Geometry and navigation services the slider consumes from its host tree.
///
/// Every lookup tolerates stale or unset handles by returning `None`; the
/// widget treats the affected geometry write as a no-op in that case.
pub trait ElementTree {
    /// The parent of an element, used as its coordinate container.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// The element's final pixel rect, as computed by the host's layout.
    fn resolved_rect(&self, element: ElementId) -> Option<Rect>;

    /// The element's rect expressed in its own local space (relative to its
    /// pivot), so `local_rect().min` is the rect origin local points are
    /// measured against.
    fn local_rect(&self, element: ElementId) -> Option<Rect>;

    /// The element's anchor fractions.
    fn anchors(&self, element: ElementId) -> Option<Anchors>;

    /// Overwrites the element's anchor fractions.
    fn set_anchors(&mut self, element: ElementId, anchors: Anchors);

    /// The element's local translation relative to its anchor points.
    fn local_position(&self, element: ElementId) -> Option<Vec2>;

    /// Overwrites the element's local translation.
    fn set_local_position(&mut self, element: ElementId, position: Vec2);

    /// The element's image fill amount, when it renders as an amount fill.
    ///
    /// `Some` marks the amount-fill capability the projector keys off.
    fn fill_amount(&self, element: ElementId) -> Option<f32>;

    /// Overwrites the element's image fill amount.
    fn set_fill_amount(&mut self, element: ElementId, amount: f32);

    /// Projects a screen point into an element's local space through the
    /// given camera. `None` when the point cannot be projected or the
    /// element is gone.
    fn screen_point_to_local(
        &self,
        element: ElementId,
        screen_point: Vec2,
        camera: Option<CameraId>,
    ) -> Option<Vec2>;

    /// Whether a screen point lies inside an element's rect as seen through
    /// the given camera.
    fn rect_contains_screen_point(
        &self,
        element: ElementId,
        screen_point: Vec2,
        camera: Option<CameraId>,
    ) -> bool;

    /// The focusable element adjacent to `element` in a direction, if the
    /// focus graph defines one. The widget delegates directional input to
    /// the host's focus navigation when this returns `Some`.
    fn adjacent_focusable(&self, element: ElementId, direction: MoveDirection)
    -> Option<ElementId>;

    /// One-shot request to swap an element's layout between the two axes.
    fn flip_layout_axes(&mut self, element: ElementId);

    /// One-shot request to mirror an element's layout on one axis.
    fn flip_layout_on_axis(&mut self, element: ElementId, axis: Axis);
}

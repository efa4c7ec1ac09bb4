//! A minimal in-memory host tree with an identity screen transform.
//!
//! [`ScreenSpaceTree`] resolves rects the way an anchor-driven layout system
//! would: a child's pixel rect is its anchor fractions applied to the parent
//! rect, plus authored offsets and a local translation. Cameras are plain
//! screen-space offsets. It exists so the widget can run headlessly — in
//! tests, tools, or hosts without a full UI stack.

use glam::Vec2;
use slotmap::SlotMap;

use crate::{
    direction::{Axis, MoveDirection},
    geometry::{Anchors, Rect},
    host::{CameraId, ElementId, ElementTree},
};

#[derive(Debug, Clone)]
struct ElementData {
    parent: Option<ElementId>,
    anchors: Anchors,
    offset_min: Vec2,
    offset_max: Vec2,
    position: Vec2,
    pivot: Vec2,
    fill_amount: Option<f32>,
    focusable: bool,
    neighbors: [Option<ElementId>; 4],
}

impl ElementData {
    fn new(parent: Option<ElementId>) -> Self {
        Self {
            parent,
            anchors: Anchors::FULL,
            offset_min: Vec2::ZERO,
            offset_max: Vec2::ZERO,
            position: Vec2::ZERO,
            pivot: Vec2::splat(0.5),
            fill_amount: None,
            focusable: false,
            neighbors: [None; 4],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Camera {
    screen_offset: Vec2,
}

/// An in-memory [`ElementTree`] in plain screen space.
#[derive(Default)]
pub struct ScreenSpaceTree {
    elements: SlotMap<ElementId, ElementData>,
    cameras: SlotMap<CameraId, Camera>,
}

impl ScreenSpaceTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parentless element with an absolute pixel rect.
    pub fn insert_root(&mut self, rect: Rect) -> ElementId {
        let mut data = ElementData::new(None);
        data.offset_min = rect.min;
        data.offset_max = rect.max;
        self.elements.insert(data)
    }

    /// Inserts a child spanning its parent's full rect.
    pub fn insert_child(&mut self, parent: ElementId) -> ElementId {
        self.elements.insert(ElementData::new(Some(parent)))
    }

    /// Removes an element. Handles pointing at it become stale and resolve
    /// to `None` from then on.
    pub fn remove(&mut self, element: ElementId) {
        self.elements.remove(element);
    }

    /// Sets the pixel offsets applied to an element's anchored corners.
    pub fn set_offsets(&mut self, element: ElementId, offset_min: Vec2, offset_max: Vec2) {
        if let Some(data) = self.elements.get_mut(element) {
            data.offset_min = offset_min;
            data.offset_max = offset_max;
        }
    }

    /// Sets an element's pivot as a fraction of its own rect.
    pub fn set_pivot(&mut self, element: ElementId, pivot: Vec2) {
        if let Some(data) = self.elements.get_mut(element) {
            data.pivot = pivot;
        }
    }

    /// Gives an element the amount-fill rendering capability.
    pub fn enable_fill(&mut self, element: ElementId) {
        if let Some(data) = self.elements.get_mut(element) {
            data.fill_amount = Some(0.0);
        }
    }

    /// Marks an element as focusable for directional navigation.
    pub fn set_focusable(&mut self, element: ElementId, focusable: bool) {
        if let Some(data) = self.elements.get_mut(element) {
            data.focusable = focusable;
        }
    }

    /// Declares `neighbor` as the focus target in `direction` from `element`.
    pub fn link_neighbor(
        &mut self,
        element: ElementId,
        direction: MoveDirection,
        neighbor: ElementId,
    ) {
        if let Some(data) = self.elements.get_mut(element) {
            data.neighbors[direction.index()] = Some(neighbor);
        }
    }

    /// Registers a camera whose screen origin is shifted by `screen_offset`.
    pub fn add_camera(&mut self, screen_offset: Vec2) -> CameraId {
        self.cameras.insert(Camera { screen_offset })
    }

    /// Whether an element handle is still live.
    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(element)
    }

    fn world_point(&self, screen_point: Vec2, camera: Option<CameraId>) -> Vec2 {
        let offset = camera
            .and_then(|id| self.cameras.get(id))
            .map(|camera| camera.screen_offset)
            .unwrap_or(Vec2::ZERO);
        screen_point - offset
    }

    fn pivot_point(&self, element: ElementId) -> Option<Vec2> {
        let data = self.elements.get(element)?;
        let rect = self.resolved_rect(element)?;
        Some(rect.min + data.pivot * rect.size())
    }
}

impl ElementTree for ScreenSpaceTree {
    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.elements.get(element)?.parent
    }

    fn resolved_rect(&self, element: ElementId) -> Option<Rect> {
        let data = self.elements.get(element)?;
        let Some(parent) = data.parent else {
            return Some(Rect::new(
                data.offset_min + data.position,
                data.offset_max + data.position,
            ));
        };
        let parent_rect = self.resolved_rect(parent)?;
        let size = parent_rect.size();
        Some(Rect::new(
            parent_rect.min + data.anchors.min * size + data.offset_min + data.position,
            parent_rect.min + data.anchors.max * size + data.offset_max + data.position,
        ))
    }

    fn local_rect(&self, element: ElementId) -> Option<Rect> {
        let data = self.elements.get(element)?;
        let size = self.resolved_rect(element)?.size();
        Some(Rect::new(-data.pivot * size, (Vec2::ONE - data.pivot) * size))
    }

    fn anchors(&self, element: ElementId) -> Option<Anchors> {
        Some(self.elements.get(element)?.anchors)
    }

    fn set_anchors(&mut self, element: ElementId, anchors: Anchors) {
        if let Some(data) = self.elements.get_mut(element) {
            data.anchors = anchors;
        }
    }

    fn local_position(&self, element: ElementId) -> Option<Vec2> {
        Some(self.elements.get(element)?.position)
    }

    fn set_local_position(&mut self, element: ElementId, position: Vec2) {
        if let Some(data) = self.elements.get_mut(element) {
            data.position = position;
        }
    }

    fn fill_amount(&self, element: ElementId) -> Option<f32> {
        self.elements.get(element)?.fill_amount
    }

    fn set_fill_amount(&mut self, element: ElementId, amount: f32) {
        if let Some(data) = self.elements.get_mut(element)
            && data.fill_amount.is_some()
        {
            data.fill_amount = Some(amount);
        }
    }

    fn screen_point_to_local(
        &self,
        element: ElementId,
        screen_point: Vec2,
        camera: Option<CameraId>,
    ) -> Option<Vec2> {
        let pivot_point = self.pivot_point(element)?;
        Some(self.world_point(screen_point, camera) - pivot_point)
    }

    fn rect_contains_screen_point(
        &self,
        element: ElementId,
        screen_point: Vec2,
        camera: Option<CameraId>,
    ) -> bool {
        let Some(rect) = self.resolved_rect(element) else {
            return false;
        };
        rect.contains(self.world_point(screen_point, camera))
    }

    fn adjacent_focusable(
        &self,
        element: ElementId,
        direction: MoveDirection,
    ) -> Option<ElementId> {
        let neighbor = self.elements.get(element)?.neighbors[direction.index()]?;
        self.elements
            .get(neighbor)
            .filter(|data| data.focusable)
            .map(|_| neighbor)
    }

    fn flip_layout_axes(&mut self, element: ElementId) {
        fn swapped(v: Vec2) -> Vec2 {
            Vec2::new(v.y, v.x)
        }
        if let Some(data) = self.elements.get_mut(element) {
            data.anchors.min = swapped(data.anchors.min);
            data.anchors.max = swapped(data.anchors.max);
            data.offset_min = swapped(data.offset_min);
            data.offset_max = swapped(data.offset_max);
            data.position = swapped(data.position);
            data.pivot = swapped(data.pivot);
        }
    }

    fn flip_layout_on_axis(&mut self, element: ElementId, axis: Axis) {
        if let Some(data) = self.elements.get_mut(element) {
            let (anchor_min, anchor_max) = {
                let (lo, hi) = (
                    axis.component(data.anchors.min),
                    axis.component(data.anchors.max),
                );
                (1.0 - hi, 1.0 - lo)
            };
            axis.set_component(&mut data.anchors.min, anchor_min);
            axis.set_component(&mut data.anchors.max, anchor_max);

            let (offset_min, offset_max) = (
                -axis.component(data.offset_max),
                -axis.component(data.offset_min),
            );
            axis.set_component(&mut data.offset_min, offset_min);
            axis.set_component(&mut data.offset_max, offset_max);

            let position = -axis.component(data.position);
            axis.set_component(&mut data.position, position);

            let pivot = 1.0 - axis.component(data.pivot);
            axis.set_component(&mut data.pivot, pivot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-4,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_resolved_rect_follows_anchors() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
        let child = tree.insert_child(root);
        tree.set_anchors(
            child,
            Anchors::new(Vec2::new(0.25, 0.0), Vec2::new(0.75, 1.0)),
        );

        let rect = tree.resolved_rect(child).expect("child rect");
        assert_close(rect.min, Vec2::new(50.0, 0.0));
        assert_close(rect.max, Vec2::new(150.0, 20.0));
    }

    #[test]
    fn test_offsets_and_position_shift_rect() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(100.0, 100.0)));
        let child = tree.insert_child(root);
        tree.set_offsets(child, Vec2::new(5.0, 5.0), Vec2::new(-5.0, -5.0));
        tree.set_local_position(child, Vec2::new(10.0, 0.0));

        let rect = tree.resolved_rect(child).expect("child rect");
        assert_close(rect.min, Vec2::new(15.0, 5.0));
        assert_close(rect.max, Vec2::new(105.0, 95.0));
    }

    #[test]
    fn test_screen_point_to_local_respects_pivot_and_camera() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));

        // Pivot at the center: local origin is (100, 10).
        let local = tree
            .screen_point_to_local(root, Vec2::new(150.0, 10.0), None)
            .expect("projection");
        assert_close(local, Vec2::new(50.0, 0.0));

        let camera = tree.add_camera(Vec2::new(30.0, 0.0));
        let local = tree
            .screen_point_to_local(root, Vec2::new(150.0, 10.0), Some(camera))
            .expect("projection");
        assert_close(local, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn test_local_rect_offsets_by_pivot() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
        let local = tree.local_rect(root).expect("local rect");
        assert_close(local.min, Vec2::new(-100.0, -10.0));
        assert_close(local.max, Vec2::new(100.0, 10.0));

        tree.set_pivot(root, Vec2::ZERO);
        let local = tree.local_rect(root).expect("local rect");
        assert_close(local.min, Vec2::ZERO);
        assert_close(local.max, Vec2::new(200.0, 20.0));
    }

    #[test]
    fn test_stale_handles_resolve_to_none() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::ZERO);
        let child = tree.insert_child(root);
        tree.remove(child);

        assert!(!tree.contains(child));
        assert_eq!(tree.resolved_rect(child), None);
        assert_eq!(tree.parent(child), None);
        assert!(!tree.rect_contains_screen_point(child, Vec2::ZERO, None));
    }

    #[test]
    fn test_adjacent_focusable_requires_focus_flag() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::ZERO);
        let left = tree.insert_root(Rect::ZERO);
        tree.link_neighbor(root, MoveDirection::Left, left);

        assert_eq!(tree.adjacent_focusable(root, MoveDirection::Left), None);
        tree.set_focusable(left, true);
        assert_eq!(
            tree.adjacent_focusable(root, MoveDirection::Left),
            Some(left)
        );
        assert_eq!(tree.adjacent_focusable(root, MoveDirection::Right), None);
    }

    #[test]
    fn test_flip_layout_axes_swaps_components() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
        tree.flip_layout_axes(root);

        let rect = tree.resolved_rect(root).expect("rect");
        assert_close(rect.max, Vec2::new(20.0, 200.0));
    }

    #[test]
    fn test_flip_layout_on_axis_mirrors_anchors() {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(100.0, 100.0)));
        let child = tree.insert_child(root);
        tree.set_anchors(
            child,
            Anchors::new(Vec2::new(0.1, 0.0), Vec2::new(0.4, 1.0)),
        );
        tree.flip_layout_on_axis(child, Axis::Horizontal);

        let anchors = tree.anchors(child).expect("anchors");
        assert!((anchors.min.x - 0.6).abs() < 1e-6);
        assert!((anchors.max.x - 0.9).abs() < 1e-6);
    }
}

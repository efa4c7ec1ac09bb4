//! Geometry projection: pushing the normalized selection into the bound
//! fill and handle rectangles, and reading it back out of an amount-mode
//! fill.

use glam::Vec2;

use crate::{
    driven::DrivenProperties,
    geometry::Anchors,
    host::{BindingError, ElementTree},
};

use super::IntervalSlider;

impl IntervalSlider {
    /// Re-projects the current selection into every bound visual.
    ///
    /// Claims are rebuilt from scratch on each call, so unbinding a visual
    /// also releases its driven properties on the next update.
    pub(crate) fn update_visuals(&mut self, tree: &mut impl ElementTree) {
        self.tracker.clear();

        let normalized_lower = self.normalized_lower();
        let normalized_upper = self.normalized_upper();

        if let Some(fill) = self.fill {
            if self.fill_is_amount {
                self.tracker
                    .add(fill, DrivenProperties::POSITION | DrivenProperties::FILL);
                self.write_amount_fill(tree, fill, normalized_lower, normalized_upper);
            } else {
                self.tracker.add(fill, DrivenProperties::ANCHORS);
                let anchors = self.anchor_span(normalized_lower, normalized_upper);
                tree.set_anchors(fill, anchors);
            }
        }

        if let Some(handle) = self.lower_handle {
            self.tracker.add(handle, DrivenProperties::ANCHORS);
            tree.set_anchors(handle, self.pin_position(normalized_lower));
        }
        if let Some(handle) = self.upper_handle {
            self.tracker.add(handle, DrivenProperties::ANCHORS);
            tree.set_anchors(handle, self.pin_position(normalized_upper));
        }
    }

    /// Reads the normalized selection back out of an amount-mode fill.
    ///
    /// The inverse of the amount-mode write: the fill's local position on
    /// the slide axis over the container size gives the lower edge, plus
    /// the fill amount gives the upper edge. Fails with a [`BindingError`]
    /// when no amount-mode fill is fully bound.
    pub fn fill_normalized_span(
        &self,
        tree: &impl ElementTree,
    ) -> Result<(f32, f32), BindingError> {
        let fill = self.fill.ok_or(BindingError::MissingFill)?;
        let amount = tree.fill_amount(fill).ok_or(BindingError::MissingFillAmount)?;
        let container = self.fill_container.ok_or(BindingError::MissingFillContainer)?;
        let container_rect = tree
            .resolved_rect(container)
            .ok_or(BindingError::MissingFillContainer)?;

        let axis = self.axis();
        let size = axis.component(container_rect.size());
        let position = tree.local_position(fill).unwrap_or(Vec2::ZERO);
        let lower = if size.abs() <= f32::EPSILON {
            0.0
        } else {
            (axis.component(position) / size).clamp(0.0, 1.0)
        };
        Ok((lower, (lower + amount).clamp(0.0, 1.0)))
    }

    fn write_amount_fill(
        &self,
        tree: &mut impl ElementTree,
        fill: crate::host::ElementId,
        normalized_lower: f32,
        normalized_upper: f32,
    ) {
        let container = self
            .fill_container
            .expect("amount-mode fill requires the fill element to have a parent container");
        let Some(container_rect) = tree.resolved_rect(container) else {
            return;
        };

        let axis = self.axis();
        let mut position = tree.local_position(fill).unwrap_or(Vec2::ZERO);
        axis.set_component(
            &mut position,
            normalized_lower * axis.component(container_rect.size()),
        );
        tree.set_local_position(fill, position);
        tree.set_fill_amount(fill, (normalized_upper - normalized_lower).clamp(0.0, 1.0));
    }

    fn anchor_span(&self, normalized_lower: f32, normalized_upper: f32) -> Anchors {
        let (low, high) = if self.reversed() {
            (1.0 - normalized_upper, 1.0 - normalized_lower)
        } else {
            (normalized_lower, normalized_upper)
        };
        let mut anchors = Anchors::FULL;
        anchors.set_span(self.axis(), low, high);
        anchors
    }

    fn pin_position(&self, normalized: f32) -> Anchors {
        let pin = if self.reversed() { 1.0 - normalized } else { normalized };
        let mut anchors = Anchors::FULL;
        anchors.set_span(self.axis(), pin, pin);
        anchors
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::{
        direction::SlideDirection,
        driven::DrivenProperties,
        geometry::Rect,
        host::{ElementTree, screen_space::ScreenSpaceTree},
        slider::{IntervalSlider, SliderConfig},
    };

    fn scene() -> (ScreenSpaceTree, IntervalSlider, crate::host::ElementId) {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
        let fill = tree.insert_child(root);
        let slider = IntervalSlider::new(root, SliderConfig::default().max_value(10.0));
        (tree, slider, fill)
    }

    #[test]
    fn test_anchor_fill_spans_selection() {
        let (mut tree, mut slider, fill) = scene();
        slider.bind_fill(&mut tree, Some(fill));
        slider.set_lower_value(&mut tree, 2.0);
        slider.set_upper_value(&mut tree, 5.0);

        let anchors = tree.anchors(fill).expect("anchors");
        assert!((anchors.min.x - 0.2).abs() < 1e-6);
        assert!((anchors.max.x - 0.5).abs() < 1e-6);
        assert_eq!(anchors.min.y, 0.0);
        assert_eq!(anchors.max.y, 1.0);
    }

    #[test]
    fn test_reversed_direction_mirrors_anchors() {
        let (mut tree, mut slider, fill) = scene();
        slider.set_direction(&mut tree, SlideDirection::RightToLeft, false);
        slider.bind_fill(&mut tree, Some(fill));
        slider.set_lower_value(&mut tree, 2.0);
        slider.set_upper_value(&mut tree, 5.0);

        let anchors = tree.anchors(fill).expect("anchors");
        assert!((anchors.min.x - 0.5).abs() < 1e-6);
        assert!((anchors.max.x - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_axis_uses_y_span() {
        let (mut tree, mut slider, fill) = scene();
        slider.set_direction(&mut tree, SlideDirection::BottomToTop, false);
        slider.bind_fill(&mut tree, Some(fill));
        slider.set_upper_value(&mut tree, 4.0);

        let anchors = tree.anchors(fill).expect("anchors");
        assert_eq!(anchors.min.x, 0.0);
        assert_eq!(anchors.max.x, 1.0);
        assert!((anchors.max.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_handles_pin_to_bound_positions() {
        let (mut tree, mut slider, _) = scene();
        let root = slider.element();
        let lower = tree.insert_child(root);
        let upper = tree.insert_child(root);
        slider.bind_lower_handle(&mut tree, Some(lower));
        slider.bind_upper_handle(&mut tree, Some(upper));
        slider.set_lower_value(&mut tree, 3.0);
        slider.set_upper_value(&mut tree, 9.0);

        let a = tree.anchors(lower).expect("anchors");
        assert!((a.min.x - 0.3).abs() < 1e-6);
        assert!((a.max.x - 0.3).abs() < 1e-6);
        let a = tree.anchors(upper).expect("anchors");
        assert!((a.min.x - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_amount_fill_round_trips() {
        let (mut tree, mut slider, fill) = scene();
        tree.enable_fill(fill);
        slider.bind_fill(&mut tree, Some(fill));
        slider.set_lower_value(&mut tree, 2.0);
        slider.set_upper_value(&mut tree, 7.0);

        let position = tree.local_position(fill).expect("position");
        assert!((position.x - 40.0).abs() < 1e-4);
        let amount = tree.fill_amount(fill).expect("amount");
        assert!((amount - 0.5).abs() < 1e-6);

        let (lower, upper) = slider.fill_normalized_span(&tree).expect("span");
        assert!((lower - 0.2).abs() < 1e-6);
        assert!((upper - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_tracker_reclaims_after_unbind() {
        let (mut tree, mut slider, fill) = scene();
        slider.bind_fill(&mut tree, Some(fill));
        assert!(slider.driven_tracker().is_driving(fill, DrivenProperties::ANCHORS));

        slider.bind_fill(&mut tree, None);
        assert!(!slider.driven_tracker().is_driving(fill, DrivenProperties::ANCHORS));
    }

    #[test]
    #[should_panic(expected = "parent container")]
    fn test_amount_fill_without_parent_panics() {
        let mut tree = ScreenSpaceTree::new();
        let orphan = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(50.0, 10.0)));
        tree.enable_fill(orphan);
        let widget = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
        let mut slider = IntervalSlider::new(widget, SliderConfig::default());
        slider.bind_fill(&mut tree, Some(orphan));
    }
}

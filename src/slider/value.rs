//! Value model: sanitization, ordering, normalization and change
//! notification for the selected `[lower, upper]` range.

use crate::host::ElementTree;

use super::IntervalSlider;

impl IntervalSlider {
    /// The selection's lower bound, rounded when whole-number mode is on.
    pub fn lower_value(&self) -> f32 {
        self.round_if_whole(self.lower)
    }

    /// The selection's upper bound, rounded when whole-number mode is on.
    pub fn upper_value(&self) -> f32 {
        self.round_if_whole(self.upper)
    }

    /// Sets the lower bound, pushing the upper bound up if needed.
    pub fn set_lower_value(&mut self, tree: &mut impl ElementTree, value: f32) {
        self.set_lower_internal(tree, value, true);
    }

    /// Like [`set_lower_value`](Self::set_lower_value) but without firing
    /// the change notification.
    pub fn set_lower_value_without_notify(&mut self, tree: &mut impl ElementTree, value: f32) {
        self.set_lower_internal(tree, value, false);
    }

    /// Sets the upper bound, pushing the lower bound down if needed.
    pub fn set_upper_value(&mut self, tree: &mut impl ElementTree, value: f32) {
        self.set_upper_internal(tree, value, true);
    }

    /// Like [`set_upper_value`](Self::set_upper_value) but without firing
    /// the change notification.
    pub fn set_upper_value_without_notify(&mut self, tree: &mut impl ElementTree, value: f32) {
        self.set_upper_internal(tree, value, false);
    }

    /// The lower bound mapped to `[0, 1]` over the domain.
    ///
    /// A degenerate domain (`min == max`) maps everything to `0`.
    pub fn normalized_lower(&self) -> f32 {
        self.normalize(self.lower_value())
    }

    /// The upper bound mapped to `[0, 1]` over the domain.
    pub fn normalized_upper(&self) -> f32 {
        self.normalize(self.upper_value())
    }

    /// Sets the lower bound from a normalized `[0, 1]` position.
    pub fn set_normalized_lower(&mut self, tree: &mut impl ElementTree, normalized: f32) {
        self.set_normalized_lower_internal(tree, normalized, true);
    }

    /// Sets the upper bound from a normalized `[0, 1]` position.
    pub fn set_normalized_upper(&mut self, tree: &mut impl ElementTree, normalized: f32) {
        self.set_normalized_upper_internal(tree, normalized, true);
    }

    /// The increment one directional move step applies: `1` in whole-number
    /// mode, a tenth of the domain otherwise.
    pub fn step_size(&self) -> f32 {
        if self.whole_numbers {
            1.0
        } else {
            (self.max_value - self.min_value) * 0.1
        }
    }

    pub(super) fn set_lower_internal(
        &mut self,
        tree: &mut impl ElementTree,
        value: f32,
        notify: bool,
    ) {
        let value = self.sanitize(value);
        if value.to_bits() == self.lower.to_bits() {
            return;
        }
        self.lower = value;
        // The lower bound wins ties by pushing the upper bound up.
        if self.upper < value {
            self.upper = value;
        }
        self.update_visuals(tree);
        if notify {
            self.on_value_changed
                .emit(self.lower_value(), self.upper_value());
        }
    }

    pub(super) fn set_upper_internal(
        &mut self,
        tree: &mut impl ElementTree,
        value: f32,
        notify: bool,
    ) {
        let value = self.sanitize(value);
        if value.to_bits() == self.upper.to_bits() {
            return;
        }
        self.upper = value;
        if self.lower > value {
            self.lower = value;
        }
        self.update_visuals(tree);
        if notify {
            self.on_value_changed
                .emit(self.lower_value(), self.upper_value());
        }
    }

    pub(super) fn set_normalized_lower_internal(
        &mut self,
        tree: &mut impl ElementTree,
        normalized: f32,
        notify: bool,
    ) {
        let value = self.denormalize(normalized);
        self.set_lower_internal(tree, value, notify);
    }

    pub(super) fn set_normalized_upper_internal(
        &mut self,
        tree: &mut impl ElementTree,
        normalized: f32,
        notify: bool,
    ) {
        let value = self.denormalize(normalized);
        self.set_upper_internal(tree, value, notify);
    }

    pub(super) fn denormalize(&self, normalized: f32) -> f32 {
        self.min_value + normalized.clamp(0.0, 1.0) * (self.max_value - self.min_value)
    }

    pub(super) fn sanitize(&self, value: f32) -> f32 {
        let value = self.round_if_whole(value);
        // Not `f32::clamp`: the domain may be configured inverted and clamp
        // panics when min > max.
        value.max(self.min_value).min(self.max_value)
    }

    pub(super) fn round_if_whole(&self, value: f32) -> f32 {
        if self.whole_numbers { value.round() } else { value }
    }

    fn normalize(&self, value: f32) -> f32 {
        let span = self.max_value - self.min_value;
        if span.abs() <= f32::EPSILON {
            return 0.0;
        }
        ((value - self.min_value) / span).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec2;
    use parking_lot::Mutex;

    use crate::{
        geometry::Rect,
        host::screen_space::ScreenSpaceTree,
        slider::{IntervalSlider, SliderConfig},
    };

    fn slider(config: SliderConfig) -> (ScreenSpaceTree, IntervalSlider) {
        let mut tree = ScreenSpaceTree::new();
        let root = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
        let slider = IntervalSlider::new(root, config);
        (tree, slider)
    }

    fn ten_wide() -> SliderConfig {
        SliderConfig::default().max_value(10.0)
    }

    #[test]
    fn test_values_clamp_to_domain() {
        let (mut tree, mut s) = slider(ten_wide());
        s.set_lower_value(&mut tree, -3.0);
        assert_eq!(s.lower_value(), 0.0);
        s.set_upper_value(&mut tree, 42.0);
        assert_eq!(s.upper_value(), 10.0);
    }

    #[test]
    fn test_lower_pushes_upper_up() {
        let (mut tree, mut s) = slider(ten_wide());
        s.set_upper_value(&mut tree, 4.0);
        s.set_lower_value(&mut tree, 7.0);
        assert_eq!(s.lower_value(), 7.0);
        assert_eq!(s.upper_value(), 7.0);
    }

    #[test]
    fn test_upper_pushes_lower_down() {
        let (mut tree, mut s) = slider(ten_wide());
        s.set_lower_value(&mut tree, 6.0);
        s.set_upper_value(&mut tree, 2.0);
        assert_eq!(s.lower_value(), 2.0);
        assert_eq!(s.upper_value(), 2.0);
    }

    #[test]
    fn test_whole_numbers_round_on_write() {
        let (mut tree, mut s) = slider(ten_wide().whole_numbers(true));
        s.set_lower_value(&mut tree, 3.4);
        assert_eq!(s.lower_value(), 3.0);
        s.set_upper_value(&mut tree, 3.6);
        assert_eq!(s.upper_value(), 4.0);
    }

    #[test]
    fn test_normalized_round_trip() {
        let (mut tree, mut s) = slider(ten_wide());
        s.set_normalized_lower(&mut tree, 0.4);
        assert!((s.lower_value() - 4.0).abs() < 1e-6);
        assert!((s.normalized_lower() - 0.4).abs() < 1e-6);
        s.set_normalized_upper(&mut tree, 1.5);
        assert_eq!(s.upper_value(), 10.0);
    }

    #[test]
    fn test_degenerate_domain_normalizes_to_zero() {
        let (mut tree, mut s) = slider(SliderConfig::default().min_value(5.0).max_value(5.0));
        s.set_lower_value(&mut tree, 5.0);
        assert_eq!(s.normalized_lower(), 0.0);
        assert_eq!(s.normalized_upper(), 0.0);
    }

    #[test]
    fn test_noop_writes_do_not_notify() {
        let (mut tree, mut s) = slider(ten_wide());
        s.set_lower_value(&mut tree, 3.0);

        let count = Arc::new(Mutex::new(0_usize));
        let sink = Arc::clone(&count);
        s.on_value_changed().subscribe(move |_, _| *sink.lock() += 1);

        s.set_lower_value(&mut tree, 3.0);
        assert_eq!(*count.lock(), 0);
        s.set_lower_value(&mut tree, 4.0);
        assert_eq!(*count.lock(), 1);
    }

    #[test]
    fn test_without_notify_variant_is_silent() {
        let (mut tree, mut s) = slider(ten_wide());
        let count = Arc::new(Mutex::new(0_usize));
        let sink = Arc::clone(&count);
        s.on_value_changed().subscribe(move |_, _| *sink.lock() += 1);

        s.set_lower_value_without_notify(&mut tree, 2.0);
        s.set_upper_value_without_notify(&mut tree, 8.0);
        assert_eq!(*count.lock(), 0);
        assert_eq!(s.lower_value(), 2.0);
        assert_eq!(s.upper_value(), 8.0);
    }

    #[test]
    fn test_step_size() {
        let (_tree, s) = slider(ten_wide());
        assert!((s.step_size() - 1.0).abs() < 1e-6);
        let (_tree, s) = slider(ten_wide().whole_numbers(true));
        assert_eq!(s.step_size(), 1.0);
        let (_tree, s) = slider(SliderConfig::default());
        assert!((s.step_size() - 0.1).abs() < 1e-6);
    }
}

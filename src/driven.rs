//! Driven-property ownership records.
//!
//! Layout properties the slider writes each refresh are *driven*: external
//! authoring must not stick to them. The widget keeps an explicit record of
//! every claim and fully clears it before re-claiming on each visual update,
//! so no stale claim survives a rebind.

use smallvec::SmallVec;

use crate::host::ElementId;

/// A set of layout properties claimed on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrivenProperties(u8);

impl DrivenProperties {
    /// No properties.
    pub const NONE: Self = Self(0);
    /// The minimum anchor fractions.
    pub const ANCHOR_MIN: Self = Self(1);
    /// The maximum anchor fractions.
    pub const ANCHOR_MAX: Self = Self(1 << 1);
    /// The local position.
    pub const POSITION: Self = Self(1 << 2);
    /// The image fill amount.
    pub const FILL: Self = Self(1 << 3);
    /// Both anchor fraction pairs.
    pub const ANCHORS: Self = Self(Self::ANCHOR_MIN.0 | Self::ANCHOR_MAX.0);

    /// Whether every property in `other` is present in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no property is set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for DrivenProperties {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for DrivenProperties {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The set of `(element, properties)` claims held by one widget.
#[derive(Debug, Default)]
pub struct DrivenTracker {
    records: SmallVec<[(ElementId, DrivenProperties); 3]>,
}

impl DrivenTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases every claim.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Claims properties on an element, merging with an existing record.
    pub fn add(&mut self, element: ElementId, properties: DrivenProperties) {
        if let Some((_, existing)) = self
            .records
            .iter_mut()
            .find(|(recorded, _)| *recorded == element)
        {
            *existing |= properties;
        } else {
            self.records.push((element, properties));
        }
    }

    /// The properties currently claimed on an element.
    pub fn driven(&self, element: ElementId) -> DrivenProperties {
        self.records
            .iter()
            .find(|(recorded, _)| *recorded == element)
            .map(|(_, properties)| *properties)
            .unwrap_or(DrivenProperties::NONE)
    }

    /// Whether the given properties are claimed on an element.
    pub fn is_driving(&self, element: ElementId, properties: DrivenProperties) -> bool {
        self.driven(element).contains(properties)
    }

    /// Whether no claim is held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;

    fn element_ids(count: usize) -> Vec<ElementId> {
        let mut map: SlotMap<ElementId, ()> = SlotMap::with_key();
        (0..count).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_property_set_ops() {
        let set = DrivenProperties::ANCHOR_MIN | DrivenProperties::FILL;
        assert!(set.contains(DrivenProperties::ANCHOR_MIN));
        assert!(set.contains(DrivenProperties::FILL));
        assert!(!set.contains(DrivenProperties::ANCHORS));
        assert!(DrivenProperties::NONE.is_empty());
        assert!(!set.is_empty());
    }

    #[test]
    fn test_tracker_claims_merge() {
        let ids = element_ids(2);
        let mut tracker = DrivenTracker::new();
        tracker.add(ids[0], DrivenProperties::ANCHOR_MIN);
        tracker.add(ids[0], DrivenProperties::ANCHOR_MAX);
        tracker.add(ids[1], DrivenProperties::FILL);

        assert!(tracker.is_driving(ids[0], DrivenProperties::ANCHORS));
        assert!(tracker.is_driving(ids[1], DrivenProperties::FILL));
        assert!(!tracker.is_driving(ids[1], DrivenProperties::POSITION));
    }

    #[test]
    fn test_tracker_clear_releases_all() {
        let ids = element_ids(1);
        let mut tracker = DrivenTracker::new();
        tracker.add(ids[0], DrivenProperties::ANCHORS);
        assert!(!tracker.is_empty());

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.driven(ids[0]), DrivenProperties::NONE);
    }
}

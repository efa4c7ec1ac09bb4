//! Pointer event payloads delivered by the host's input dispatcher.

use derive_setters::Setters;
use glam::Vec2;

use crate::host::CameraId;

/// The pointer button that triggered an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// The primary button (usually left); the only one that starts a drag.
    #[default]
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The middle button.
    Middle,
}

/// A pointer-down or pointer-drag event in screen space.
///
/// The host dispatcher fills one of these per input callback and hands it to
/// the widget's `on_pointer_down` / `on_drag` / `on_pointer_up` methods.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct PointerEvent {
    /// The pointer position in screen space.
    pub screen_position: Vec2,
    /// The button involved in the event.
    pub button: PointerButton,
    /// The camera the press was observed through, if any.
    #[setters(strip_option)]
    pub camera: Option<CameraId>,
    /// Whether the dispatcher should apply its minimum-distance drag
    /// threshold before promoting this press to a drag.
    pub use_drag_threshold: bool,
}

impl PointerEvent {
    /// Creates a primary-button event at a screen position, with no camera
    /// and the dispatcher's drag threshold enabled.
    pub fn new(screen_position: Vec2) -> Self {
        Self {
            screen_position,
            button: PointerButton::Primary,
            camera: None,
            use_drag_threshold: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_defaults() {
        let event = PointerEvent::new(Vec2::new(4.0, 2.0));
        assert_eq!(event.button, PointerButton::Primary);
        assert_eq!(event.camera, None);
        assert!(event.use_drag_threshold);
    }

    #[test]
    fn test_event_setters() {
        let event = PointerEvent::new(Vec2::ZERO).button(PointerButton::Secondary);
        assert_eq!(event.button, PointerButton::Secondary);
    }
}

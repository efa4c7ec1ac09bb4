//! A dual-handle range slider for retained-mode UI trees.
//!
//! [`IntervalSlider`] selects a contiguous `[lower, upper]` sub-range of a
//! configurable `[min, max]` domain. The widget owns its value model and
//! interaction state machine but no visuals: it drives externally owned
//! rectangles (a fill span and two handle thumbs) through the [`ElementTree`]
//! trait, and any host tree that implements that trait can embed it.
//! [`ScreenSpaceTree`] is a small self-contained host suitable for headless
//! use and tests.
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use interval_slider::{ElementTree, IntervalSlider, Rect, ScreenSpaceTree, SliderConfig};
//!
//! let mut tree = ScreenSpaceTree::new();
//! let track = tree.insert_root(Rect::new(Vec2::ZERO, Vec2::new(200.0, 20.0)));
//! let fill = tree.insert_child(track);
//!
//! let mut slider = IntervalSlider::new(track, SliderConfig::default().max_value(100.0));
//! slider.bind_fill(&mut tree, Some(fill));
//! slider.on_value_changed().subscribe(|lower, upper| {
//!     println!("range is now {lower}..{upper}");
//! });
//!
//! slider.set_lower_value(&mut tree, 20.0);
//! slider.set_upper_value(&mut tree, 60.0);
//! assert_eq!(slider.lower_value(), 20.0);
//!
//! // The fill anchors now span the selected fraction of the track.
//! let anchors = tree.anchors(fill).unwrap();
//! assert!((anchors.min.x - 0.2).abs() < 1e-6);
//! assert!((anchors.max.x - 0.6).abs() < 1e-6);
//! ```
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod direction;
pub mod driven;
pub mod event;
pub mod geometry;
pub mod host;
pub mod notify;
pub mod slider;

pub use glam::Vec2;

pub use direction::{Axis, MoveDirection, SlideDirection};
pub use driven::{DrivenProperties, DrivenTracker};
pub use event::{PointerButton, PointerEvent};
pub use geometry::{Anchors, Rect};
pub use host::{BindingError, CameraId, ElementId, ElementTree, screen_space::ScreenSpaceTree};
pub use notify::{Subscription, ValueChanged};
pub use slider::{DraggedElement, Interactive, IntervalSlider, MoveResult, SliderConfig};

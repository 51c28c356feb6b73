//! Scene navigation with slide transitions.
//!
//! The [`Navigator`] owns the navigation state machine. Presentation layers
//! implement [`SceneDriver`] to play tweens and activate scenes, and report
//! back through [`Navigator::on_slide_complete`] once a tween finishes.

mod layout;
mod navigator;
mod scene;

pub use layout::{LayoutConfig, SlideDirection, SlideTween};
pub use navigator::{
    IgnoreReason, NavigationError, Navigator, SceneDriver, SlideEvent, SwitchOutcome,
};
pub use scene::SceneKey;

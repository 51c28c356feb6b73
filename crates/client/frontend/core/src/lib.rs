//! Cross-frontend primitives for presenting the supermarket.
//!
//! Houses scene navigation, the message log and the [`Session`] context that
//! both the headless driver and future graphical clients build on.
pub mod config;
pub mod message;
pub mod navigation;
pub mod session;

pub use config::{FrontendConfig, MessageConfig};
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use navigation::{
    IgnoreReason, LayoutConfig, NavigationError, Navigator, SceneDriver, SceneKey, SlideDirection,
    SlideEvent, SlideTween, SwitchOutcome,
};
pub use session::Session;

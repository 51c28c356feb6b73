use market_core::{ErrorSeverity, GameError};

use super::layout::{LayoutConfig, SlideTween};
use super::scene::SceneKey;

/// Presentation seam the navigator drives.
///
/// Implementations play tweens asynchronously (or instantly) and call
/// [`Navigator::on_slide_complete`] when each one finishes.
pub trait SceneDriver {
    fn play_slide(&mut self, tween: SlideTween);

    /// Activates `target`. Returns `false` when no such scene is registered.
    fn switch_to(&mut self, target: SceneKey) -> bool;
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("navigator not initialized")]
    NotInitialized,
}

impl GameError for NavigationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            NavigationError::NotInitialized => "NAVIGATION_NOT_INITIALIZED",
        }
    }
}

/// Result of a [`Navigator::switch_scene`] request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The slide-out tween is playing.
    Started,
    Ignored(IgnoreReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum IgnoreReason {
    Transitioning,
    AlreadyCurrent,
}

/// What a completed tween led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideEvent {
    /// The target scene is active and its slide-in tween is playing.
    Switched(SceneKey),
    /// The target scene was not registered; no scene is current anymore.
    SceneMissing(SceneKey),
    /// The slide-in finished and the transition is over.
    Finished(SceneKey),
    /// No transition was in progress.
    Idle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    SlidingOut { target: SceneKey },
    SlidingIn,
}

/// Tracks the active scene and sequences slide transitions between scenes.
///
/// At most one transition runs at a time. Requests arriving mid-transition
/// are ignored rather than queued.
#[derive(Clone, Debug)]
pub struct Navigator {
    layout: LayoutConfig,
    current: Option<SceneKey>,
    phase: Phase,
}

impl Navigator {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            current: None,
            phase: Phase::Idle,
        }
    }

    pub fn initialize(&mut self, scene: SceneKey) {
        self.current = Some(scene);
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn current_scene(&self) -> Option<SceneKey> {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Starts a slide transition to `target`.
    pub fn switch_scene(
        &mut self,
        driver: &mut impl SceneDriver,
        target: SceneKey,
    ) -> Result<SwitchOutcome, NavigationError> {
        let current = self.current.ok_or(NavigationError::NotInitialized)?;

        if self.is_transitioning() {
            tracing::debug!(%target, "scene switch ignored: transition in progress");
            return Ok(SwitchOutcome::Ignored(IgnoreReason::Transitioning));
        }
        if current == target {
            return Ok(SwitchOutcome::Ignored(IgnoreReason::AlreadyCurrent));
        }

        tracing::debug!(from = %current, to = %target, "sliding out");
        self.phase = Phase::SlidingOut { target };
        driver.play_slide(self.layout.slide_out_tween());
        Ok(SwitchOutcome::Started)
    }

    /// Advances the transition after the driver finished a tween.
    pub fn on_slide_complete(&mut self, driver: &mut impl SceneDriver) -> SlideEvent {
        match self.phase {
            Phase::Idle => SlideEvent::Idle,
            Phase::SlidingOut { target } => {
                if driver.switch_to(target) {
                    self.current = Some(target);
                    self.phase = Phase::SlidingIn;
                    driver.play_slide(self.layout.slide_in_tween());
                    SlideEvent::Switched(target)
                } else {
                    tracing::warn!(%target, "scene not found, navigator has no current scene");
                    self.current = None;
                    self.phase = Phase::Idle;
                    SlideEvent::SceneMissing(target)
                }
            }
            Phase::SlidingIn => {
                self.phase = Phase::Idle;
                match self.current {
                    Some(scene) => SlideEvent::Finished(scene),
                    None => SlideEvent::Idle,
                }
            }
        }
    }

    pub fn go_to_sales_floor(
        &mut self,
        driver: &mut impl SceneDriver,
    ) -> Result<SwitchOutcome, NavigationError> {
        self.switch_scene(driver, SceneKey::SalesFloor)
    }

    pub fn go_to_stockroom(
        &mut self,
        driver: &mut impl SceneDriver,
    ) -> Result<SwitchOutcome, NavigationError> {
        self.switch_scene(driver, SceneKey::Stockroom)
    }

    /// Forgets the current scene and any transition in flight.
    pub fn reset(&mut self) {
        self.current = None;
        self.phase = Phase::Idle;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SlideDirection;

    /// Records tweens and switches; tweens never complete on their own.
    #[derive(Default)]
    struct RecordingDriver {
        tweens: Vec<SlideTween>,
        switches: Vec<SceneKey>,
        missing: Vec<SceneKey>,
    }

    impl SceneDriver for RecordingDriver {
        fn play_slide(&mut self, tween: SlideTween) {
            self.tweens.push(tween);
        }

        fn switch_to(&mut self, target: SceneKey) -> bool {
            self.switches.push(target);
            !self.missing.contains(&target)
        }
    }

    fn navigator_on(scene: SceneKey) -> Navigator {
        let mut navigator = Navigator::default();
        navigator.initialize(scene);
        navigator
    }

    #[test]
    fn starts_uninitialized() {
        let navigator = Navigator::default();

        assert_eq!(navigator.current_scene(), None);
        assert!(!navigator.is_transitioning());
    }

    #[test]
    fn switching_before_initialize_fails() {
        let mut navigator = Navigator::default();
        let mut driver = RecordingDriver::default();

        let err = navigator
            .switch_scene(&mut driver, SceneKey::Stockroom)
            .unwrap_err();

        assert_eq!(err, NavigationError::NotInitialized);
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(driver.tweens.is_empty());
    }

    #[test]
    fn full_transition_sequence() {
        let mut navigator = navigator_on(SceneKey::SalesFloor);
        let mut driver = RecordingDriver::default();

        let outcome = navigator.go_to_stockroom(&mut driver).unwrap();
        assert_eq!(outcome, SwitchOutcome::Started);
        assert!(navigator.is_transitioning());
        assert!(driver.switches.is_empty());
        assert_eq!(driver.tweens[0].direction, SlideDirection::Out);
        assert_eq!(driver.tweens[0].to_scroll_x, -1024.0);

        assert_eq!(
            navigator.on_slide_complete(&mut driver),
            SlideEvent::Switched(SceneKey::Stockroom)
        );
        assert_eq!(driver.switches, vec![SceneKey::Stockroom]);
        assert_eq!(navigator.current_scene(), Some(SceneKey::Stockroom));
        assert!(navigator.is_transitioning());
        assert_eq!(driver.tweens[1].direction, SlideDirection::In);
        assert_eq!(driver.tweens[1].from_scroll_x, 1024.0);

        assert_eq!(
            navigator.on_slide_complete(&mut driver),
            SlideEvent::Finished(SceneKey::Stockroom)
        );
        assert!(!navigator.is_transitioning());
        assert_eq!(navigator.on_slide_complete(&mut driver), SlideEvent::Idle);
    }

    #[test]
    fn ignores_requests_while_transitioning() {
        let mut navigator = navigator_on(SceneKey::SalesFloor);
        let mut driver = RecordingDriver::default();
        navigator.go_to_stockroom(&mut driver).unwrap();

        let outcome = navigator
            .switch_scene(&mut driver, SceneKey::MainMenu)
            .unwrap();

        assert_eq!(outcome, SwitchOutcome::Ignored(IgnoreReason::Transitioning));
        assert_eq!(driver.tweens.len(), 1);
        assert!(driver.switches.is_empty());
    }

    #[test]
    fn ignores_switch_to_current_scene() {
        let mut navigator = navigator_on(SceneKey::SalesFloor);
        let mut driver = RecordingDriver::default();

        let outcome = navigator.go_to_sales_floor(&mut driver).unwrap();

        assert_eq!(outcome, SwitchOutcome::Ignored(IgnoreReason::AlreadyCurrent));
        assert!(!navigator.is_transitioning());
        assert!(driver.tweens.is_empty());
    }

    #[test]
    fn missing_scene_clears_current_and_ends_transition() {
        let mut navigator = navigator_on(SceneKey::SalesFloor);
        let mut driver = RecordingDriver {
            missing: vec![SceneKey::GameOver],
            ..RecordingDriver::default()
        };
        navigator
            .switch_scene(&mut driver, SceneKey::GameOver)
            .unwrap();

        assert_eq!(
            navigator.on_slide_complete(&mut driver),
            SlideEvent::SceneMissing(SceneKey::GameOver)
        );
        assert_eq!(navigator.current_scene(), None);
        assert!(!navigator.is_transitioning());
        assert_eq!(
            navigator.switch_scene(&mut driver, SceneKey::SalesFloor),
            Err(NavigationError::NotInitialized)
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut navigator = navigator_on(SceneKey::SalesFloor);
        let mut driver = RecordingDriver::default();
        navigator.go_to_stockroom(&mut driver).unwrap();

        navigator.reset();

        assert_eq!(navigator.current_scene(), None);
        assert!(!navigator.is_transitioning());
    }
}

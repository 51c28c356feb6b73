//! Scene driver for terminals: no rendering, tweens finish instantly.

use client_frontend_core::{SceneDriver, SceneKey, SlideTween};
use strum::IntoEnumIterator;

#[derive(Clone, Debug)]
pub struct HeadlessDriver {
    registered: Vec<SceneKey>,
    pending: Vec<SlideTween>,
    active: Option<SceneKey>,
}

impl HeadlessDriver {
    /// Driver with every known scene registered.
    pub fn new() -> Self {
        Self::with_scenes(SceneKey::iter())
    }

    pub fn with_scenes(scenes: impl IntoIterator<Item = SceneKey>) -> Self {
        Self {
            registered: scenes.into_iter().collect(),
            pending: Vec::new(),
            active: None,
        }
    }

    /// Pops the next tween that has "finished".
    pub fn finish_next(&mut self) -> Option<SlideTween> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn active(&self) -> Option<SceneKey> {
        self.active
    }
}

impl Default for HeadlessDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneDriver for HeadlessDriver {
    fn play_slide(&mut self, tween: SlideTween) {
        tracing::trace!(
            direction = %tween.direction,
            from = tween.from_scroll_x,
            to = tween.to_scroll_x,
            duration_ms = tween.duration.as_millis() as u64,
            "slide"
        );
        self.pending.push(tween);
    }

    fn switch_to(&mut self, target: SceneKey) -> bool {
        if self.registered.contains(&target) {
            self.active = Some(target);
            true
        } else {
            false
        }
    }
}

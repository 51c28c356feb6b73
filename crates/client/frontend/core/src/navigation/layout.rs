use std::time::Duration;

/// Canvas size and transition timings shared by every scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub width: u32,
    pub height: u32,
    pub slide_out: Duration,
    pub slide_in: Duration,
    pub ease: &'static str,
}

impl LayoutConfig {
    pub const GAME_WIDTH: u32 = 1024;
    pub const GAME_HEIGHT: u32 = 768;
    pub const SLIDE_DURATION: Duration = Duration::from_millis(400);
    pub const SLIDE_EASE: &'static str = "Power2.inOut";

    /// Tween that scrolls the outgoing scene off to the left.
    pub fn slide_out_tween(&self) -> SlideTween {
        SlideTween {
            direction: SlideDirection::Out,
            from_scroll_x: 0.0,
            to_scroll_x: -(self.width as f32),
            duration: self.slide_out,
            ease: self.ease,
        }
    }

    /// Tween that brings the incoming scene in from the right.
    pub fn slide_in_tween(&self) -> SlideTween {
        SlideTween {
            direction: SlideDirection::In,
            from_scroll_x: self.width as f32,
            to_scroll_x: 0.0,
            duration: self.slide_in,
            ease: self.ease,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: Self::GAME_WIDTH,
            height: Self::GAME_HEIGHT,
            slide_out: Self::SLIDE_DURATION,
            slide_in: Self::SLIDE_DURATION,
            ease: Self::SLIDE_EASE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SlideDirection {
    Out,
    In,
}

/// Camera scroll animation the driver should play.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTween {
    pub direction: SlideDirection,
    pub from_scroll_x: f32,
    pub to_scroll_x: f32,
    pub duration: Duration,
    pub ease: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let layout = LayoutConfig::default();

        assert_eq!((layout.width, layout.height), (1024, 768));
        assert_eq!(layout.slide_out, Duration::from_millis(400));
        assert_eq!(layout.slide_in, Duration::from_millis(400));
        assert_eq!(layout.ease, "Power2.inOut");
    }

    #[test]
    fn tweens_cross_one_canvas_width() {
        let layout = LayoutConfig::default();

        let out = layout.slide_out_tween();
        assert_eq!(out.direction, SlideDirection::Out);
        assert_eq!((out.from_scroll_x, out.to_scroll_x), (0.0, -1024.0));

        let incoming = layout.slide_in_tween();
        assert_eq!(incoming.direction, SlideDirection::In);
        assert_eq!((incoming.from_scroll_x, incoming.to_scroll_x), (1024.0, 0.0));
    }
}

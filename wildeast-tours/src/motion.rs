//! Animation parameters as data.
//!
//! Controller logic never waits on these; the renderer feeds them into its
//! own "animate between two visual states" primitive.
use crate::constants::{
    BACKDROP_FADE_MS, BACKDROP_OPACITY, PAN_PERIOD_MS, PAN_SCALE_FROM, PAN_SCALE_TO,
    PAN_TRANSLATE_PCT, PANEL_EASING, PANEL_ENTER_MS, PANEL_EXIT_MS, PANEL_SLIDE_OFFSET_PX,
    PANEL_START_OPACITY, SHEET_SPRING_DAMPING, SHEET_SPRING_STIFFNESS,
};
use crate::navigation::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Horizontal slide used when the active panel changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub offset_px: f32,
    pub start_opacity: f32,
    pub enter_ms: u32,
    pub exit_ms: u32,
    pub easing: CubicBezier,
}

impl SlideTransition {
    /// Where the incoming panel starts: from the right when moving forward,
    /// from the left when moving back, in place on first render.
    #[must_use]
    pub fn enter_offset(&self, direction: Direction) -> f32 {
        self.offset_px * f32::from(direction.sign())
    }

    /// Where the outgoing panel ends, mirrored from the entry side.
    #[must_use]
    pub fn exit_offset(&self, direction: Direction) -> f32 {
        -self.enter_offset(direction)
    }
}

impl Default for SlideTransition {
    fn default() -> Self {
        let [x1, y1, x2, y2] = PANEL_EASING;
        Self {
            offset_px: PANEL_SLIDE_OFFSET_PX,
            start_opacity: PANEL_START_OPACITY,
            enter_ms: PANEL_ENTER_MS,
            exit_ms: PANEL_EXIT_MS,
            easing: CubicBezier { x1, y1, x2, y2 },
        }
    }
}

/// Spring driving the itinerary sheet up from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSpring {
    pub stiffness: f32,
    pub damping: f32,
}

impl SheetSpring {
    /// Approximate settle time in milliseconds for a unit-mass spring.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn settle_ms(&self) -> u32 {
        if self.damping <= 0.0 {
            return 0;
        }
        // Envelope decays as e^(-damping/2 * t); settled at ~2 %.
        let seconds = 2.0 * 4.0 / self.damping;
        let ms = (seconds * 1000.0).round();
        if !(ms.is_finite() && ms > 0.0) {
            return 0;
        }
        // Positive and bounded above by 8000 / damping.
        ms.min(u32::MAX as f32) as u32
    }
}

impl Default for SheetSpring {
    fn default() -> Self {
        Self {
            stiffness: SHEET_SPRING_STIFFNESS,
            damping: SHEET_SPRING_DAMPING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropFade {
    pub duration_ms: u32,
    pub opacity: f32,
}

impl Default for BackdropFade {
    fn default() -> Self {
        Self {
            duration_ms: BACKDROP_FADE_MS,
            opacity: BACKDROP_OPACITY,
        }
    }
}

/// Continuous oscillation for `animated_pan` panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanLoop {
    pub period_ms: u32,
    pub scale_from: f32,
    pub scale_to: f32,
    pub translate_pct: f32,
}

impl Default for PanLoop {
    fn default() -> Self {
        Self {
            period_ms: PAN_PERIOD_MS,
            scale_from: PAN_SCALE_FROM,
            scale_to: PAN_SCALE_TO,
            translate_pct: PAN_TRANSLATE_PCT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionConfig {
    pub panel: SlideTransition,
    pub sheet: SheetSpring,
    pub backdrop: BackdropFade,
    pub pan: PanLoop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_offsets_follow_direction_sign() {
        let slide = SlideTransition::default();
        assert!((slide.enter_offset(Direction::Forward) - 30.0).abs() < f32::EPSILON);
        assert!((slide.enter_offset(Direction::Backward) + 30.0).abs() < f32::EPSILON);
        assert!(slide.enter_offset(Direction::Still).abs() < f32::EPSILON);
    }

    #[test]
    fn exit_offsets_mirror_entry() {
        let slide = SlideTransition::default();
        for direction in [Direction::Forward, Direction::Backward] {
            let sum = slide.enter_offset(direction) + slide.exit_offset(direction);
            assert!(sum.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn default_easing_renders_as_css() {
        assert_eq!(
            SlideTransition::default().easing.css(),
            "cubic-bezier(0.22, 1, 0.36, 1)"
        );
    }

    #[test]
    fn sheet_spring_settles_in_reasonable_time() {
        let spring = SheetSpring::default();
        assert_eq!(spring.settle_ms(), 533);
        let undamped = SheetSpring {
            stiffness: 80.0,
            damping: 0.0,
        };
        assert_eq!(undamped.settle_ms(), 0);
    }

    #[test]
    fn defaults_match_landing_page_values() {
        let motion = MotionConfig::default();
        assert_eq!(motion.panel.enter_ms, 600);
        assert_eq!(motion.panel.exit_ms, 500);
        assert_eq!(motion.backdrop.duration_ms, 200);
        assert!(motion.pan.scale_to > motion.pan.scale_from);
    }
}

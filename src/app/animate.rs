//! Animation timing tables for the landing page.
//!
//! Two distinct categories with different replay semantics: [`Entrance`]
//! runs once on mount and holds its end state (`animation-fill-mode: both`),
//! while [`Loop`] repeats forever and never settles. The keyframes these
//! specs name are defined in `input.css`; the numbers live here so they can
//! be asserted on.

/// Delay step between consecutive staggered siblings, in seconds.
pub const STAGGER_STEP_S: f32 = 0.2;

/// One-shot mount animation. Plays exactly once, then the `both` fill mode
/// keeps every animated property at its rest value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub keyframes: &'static str,
    pub duration_s: f32,
    pub easing: &'static str,
}

impl Entrance {
    pub fn style(&self) -> String {
        self.style_at(0)
    }

    /// Inline style for the `step`-th sibling in a staggered reveal.
    pub fn style_at(&self, step: usize) -> String {
        let delay = step as f32 * STAGGER_STEP_S;
        format!(
            "animation:{} {}s {} {}s both",
            self.keyframes, self.duration_s, self.easing, delay
        )
    }
}

/// Infinite decorative loop. Re-entrant by nature, no terminal state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    pub keyframes: &'static str,
    pub period_s: f32,
    pub easing: &'static str,
    pub reverse: bool,
}

impl Loop {
    pub fn style(&self) -> String {
        let direction = if self.reverse { " reverse" } else { "" };
        format!(
            "animation:{} {}s {} infinite{}",
            self.keyframes, self.period_s, self.easing, direction
        )
    }
}

/// Text children slide in from -50px while fading, eased out.
pub const TEXT_ENTRANCE: Entrance = Entrance {
    keyframes: "rise-in",
    duration_s: 0.6,
    easing: "ease-out",
};

/// Profile image scales from 0.8 while fading, eased out.
pub const IMAGE_ENTRANCE: Entrance = Entrance {
    keyframes: "scale-in",
    duration_s: 0.8,
    easing: "ease-out",
};

/// Outer decorative ring, full clockwise turn every 20s.
pub const OUTER_RING: Loop = Loop {
    keyframes: "ring-spin",
    period_s: 20.0,
    easing: "linear",
    reverse: false,
};

/// Inner decorative ring, counter-clockwise, slower than the outer ring.
pub const INNER_RING: Loop = Loop {
    keyframes: "ring-spin",
    period_s: 30.0,
    easing: "linear",
    reverse: true,
};

/// Vertical bob for the code-glyph badge.
pub const BADGE_FLOAT_FAST: Loop = Loop {
    keyframes: "bob",
    period_s: 3.0,
    easing: "ease-in-out",
    reverse: false,
};

/// Vertical bob for the label badge. Different period from the fast badge
/// so the two never synchronize.
pub const BADGE_FLOAT_SLOW: Loop = Loop {
    keyframes: "bob",
    period_s: 4.0,
    easing: "ease-in-out",
    reverse: false,
};

/// Inline style for a bobbing element. The amplitude feeds the `--bob`
/// custom property the `bob` keyframes read; sign picks the direction.
pub fn bob_style(spec: Loop, amplitude_px: i32) -> String {
    format!("--bob:{}px;{}", amplitude_px, spec.style())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_never_share_direction_or_period() {
        assert_ne!(OUTER_RING.period_s, INNER_RING.period_s);
        assert_ne!(OUTER_RING.reverse, INNER_RING.reverse);
        assert_eq!(OUTER_RING.period_s, 20.0);
        assert_eq!(INNER_RING.period_s, 30.0);
        assert!(INNER_RING.reverse);
    }

    #[test]
    fn test_badge_floats_have_distinct_periods() {
        assert_eq!(BADGE_FLOAT_FAST.period_s, 3.0);
        assert_eq!(BADGE_FLOAT_SLOW.period_s, 4.0);
    }

    #[test]
    fn test_entrance_holds_end_state() {
        // `both` fill keeps children at opacity 1 / offset 0 once done
        assert!(TEXT_ENTRANCE.style().ends_with("both"));
        assert!(IMAGE_ENTRANCE.style().ends_with("both"));
    }

    #[test]
    fn test_entrance_stagger_offsets() {
        assert_eq!(TEXT_ENTRANCE.style_at(0), "animation:rise-in 0.6s ease-out 0s both");
        assert_eq!(TEXT_ENTRANCE.style_at(1), "animation:rise-in 0.6s ease-out 0.2s both");
        assert_eq!(TEXT_ENTRANCE.style_at(3), "animation:rise-in 0.6s ease-out 0.6s both");
    }

    #[test]
    fn test_loop_styles_repeat_forever() {
        assert_eq!(OUTER_RING.style(), "animation:ring-spin 20s linear infinite");
        assert_eq!(INNER_RING.style(), "animation:ring-spin 30s linear infinite reverse");
        assert_eq!(
            bob_style(BADGE_FLOAT_FAST, -10),
            "--bob:-10px;animation:bob 3s ease-in-out infinite"
        );
    }
}

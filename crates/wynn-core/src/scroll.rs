//! Inertia model for smooth page scrolling.
//!
//! Wheel input moves a target; each animation frame eases the rendered
//! position toward it with exponential damping. Damping is expressed per
//! second so the feel does not depend on the display refresh rate.

/// `WheelEvent.deltaMode` values.
pub const DELTA_PIXEL: u32 = 0;
pub const DELTA_LINE: u32 = 1;
pub const DELTA_PAGE: u32 = 2;

/// Pixels per line for line-mode wheels (Firefox on some platforms).
const LINE_HEIGHT: f64 = 100.0 / 6.0;

/// Distance below which the animation snaps to its target.
const SETTLE_EPSILON: f64 = 0.5;

/// Default per-frame interpolation factor at 60 fps.
pub const DEFAULT_LERP: f64 = 0.1;

/// Convert a wheel delta to pixels.
pub fn normalize_wheel_delta(delta: f64, mode: u32, viewport_height: f64) -> f64 {
    match mode {
        DELTA_LINE => delta * LINE_HEIGHT,
        DELTA_PAGE => delta * viewport_height,
        _ => delta,
    }
}

#[derive(Debug, Clone)]
pub struct ScrollPhysics {
    current: f64,
    target: f64,
    limit: f64,
    lerp: f64,
    last_frame: Option<f64>,
    animating: bool,
}

impl ScrollPhysics {
    pub fn new(lerp: f64) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            limit: 0.0,
            lerp,
            last_frame: None,
            animating: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Maximum scroll offset (document height minus viewport).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.min(self.limit);
    }

    /// Adopt a position set outside the animation (anchor jump, keyboard).
    ///
    /// Ignored while animating; the animation owns the position then.
    pub fn sync(&mut self, position: f64) {
        if !self.animating {
            self.current = position;
            self.target = position;
        }
    }

    /// Push the target by `delta` pixels.
    pub fn scroll_by(&mut self, delta: f64) {
        self.target = (self.target + delta).clamp(0.0, self.limit);
        self.animating = self.target != self.current;
    }

    /// Advance to frame time `now_ms`.
    ///
    /// Returns the position to render, or `None` when idle.
    pub fn advance(&mut self, now_ms: f64) -> Option<f64> {
        let dt = self
            .last_frame
            .map(|last| ((now_ms - last) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_frame = Some(now_ms);

        if !self.animating {
            return None;
        }

        let lambda = self.lerp * 60.0;
        let t = 1.0 - (-lambda * dt).exp();
        self.current += (self.target - self.current) * t;

        if (self.target - self.current).abs() < SETTLE_EPSILON {
            self.current = self.target;
            self.animating = false;
        }

        Some(self.current)
    }
}

impl Default for ScrollPhysics {
    fn default() -> Self {
        Self::new(DEFAULT_LERP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1000.0 / 60.0;

    fn physics(limit: f64) -> ScrollPhysics {
        let mut p = ScrollPhysics::default();
        p.set_limit(limit);
        p
    }

    #[test]
    fn test_idle_returns_none() {
        let mut p = physics(1000.0);
        assert_eq!(p.advance(0.0), None);
        assert_eq!(p.advance(FRAME), None);
    }

    #[test]
    fn test_target_clamped() {
        let mut p = physics(300.0);
        p.scroll_by(1000.0);
        assert_eq!(p.target(), 300.0);
        p.scroll_by(-5000.0);
        assert_eq!(p.target(), 0.0);
    }

    #[test]
    fn test_eases_toward_target_and_settles() {
        let mut p = physics(1000.0);
        p.advance(0.0);
        p.scroll_by(100.0);

        let mut previous = 0.0;
        let mut t = 0.0;
        let mut frames = 0;
        while p.is_animating() {
            t += FRAME;
            let pos = p.advance(t).unwrap();
            assert!(pos > previous);
            assert!(pos <= 100.0);
            previous = pos;
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(p.position(), 100.0);
        assert!(frames > 1);
    }

    #[test]
    fn test_first_frame_after_lerp_at_60fps() {
        let mut p = physics(1000.0);
        p.advance(0.0);
        p.scroll_by(100.0);
        let pos = p.advance(FRAME).unwrap();
        // 1 - e^-0.1 of the distance
        assert!((pos - 100.0 * (1.0 - (-0.1f64).exp())).abs() < 1e-9);
    }

    #[test]
    fn test_sync_ignored_while_animating() {
        let mut p = physics(1000.0);
        p.scroll_by(200.0);
        p.sync(50.0);
        assert_eq!(p.target(), 200.0);
    }

    #[test]
    fn test_sync_when_idle() {
        let mut p = physics(1000.0);
        p.sync(640.0);
        assert_eq!(p.position(), 640.0);
        p.scroll_by(10.0);
        assert_eq!(p.target(), 650.0);
    }

    #[test]
    fn test_shrinking_limit_pulls_target() {
        let mut p = physics(1000.0);
        p.scroll_by(900.0);
        p.set_limit(400.0);
        assert_eq!(p.target(), 400.0);
    }

    #[test]
    fn test_normalize_wheel_delta() {
        assert_eq!(normalize_wheel_delta(120.0, DELTA_PIXEL, 800.0), 120.0);
        assert!((normalize_wheel_delta(3.0, DELTA_LINE, 800.0) - 50.0).abs() < 1e-9);
        assert_eq!(normalize_wheel_delta(1.0, DELTA_PAGE, 800.0), 800.0);
    }
}

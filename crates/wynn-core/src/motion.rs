//! Scroll-linked parallax.

/// Clamped linear map from a scroll range to a translate range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    from: (f64, f64),
    to: (f64, f64),
}

impl Parallax {
    pub const fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    /// Translate offset in pixels for a scroll position.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        let (a, b) = self.from;
        let (c, d) = self.to;
        if b == a {
            return c;
        }
        let progress = ((scroll_y - a) / (b - a)).clamp(0.0, 1.0);
        c + (d - c) * progress
    }

    /// CSS `transform` value for a scroll position.
    pub fn transform(&self, scroll_y: f64) -> String {
        format!("translateY({:.1}px)", self.offset(scroll_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Parallax = Parallax::new((0.0, 500.0), (0.0, 200.0));
    const ABOUT: Parallax = Parallax::new((0.0, 500.0), (0.0, -150.0));

    #[test]
    fn test_interpolates() {
        assert_eq!(HERO.offset(0.0), 0.0);
        assert_eq!(HERO.offset(250.0), 100.0);
        assert_eq!(ABOUT.offset(250.0), -75.0);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(HERO.offset(-40.0), 0.0);
        assert_eq!(HERO.offset(2000.0), 200.0);
        assert_eq!(ABOUT.offset(2000.0), -150.0);
    }

    #[test]
    fn test_degenerate_range() {
        let p = Parallax::new((10.0, 10.0), (5.0, 9.0));
        assert_eq!(p.offset(100.0), 5.0);
    }

    #[test]
    fn test_transform() {
        assert_eq!(HERO.transform(500.0), "translateY(200.0px)");
        assert_eq!(ABOUT.transform(100.0), "translateY(-30.0px)");
    }
}

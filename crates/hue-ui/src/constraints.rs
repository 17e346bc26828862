use hue_engine::coords::Vec2;

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// The largest size allowed, or `min` on an unbounded axis.
    ///
    /// This is what "fill max size" widgets report.
    #[inline]
    pub fn fill(self) -> Vec2 {
        let pick = |max: f32, min: f32| if max.is_finite() { max } else { min };
        Vec2::new(pick(self.max.x, self.min.x), pick(self.max.y, self.min.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn fill_takes_max_when_bounded() {
        let c = Constraints::loose(Vec2::new(640.0, 480.0));
        assert_eq!(c.fill(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn fill_falls_back_to_min_when_unbounded() {
        let c = Constraints { min: Vec2::new(4.0, 0.0), max: Vec2::new(f32::INFINITY, 8.0) };
        assert_eq!(c.fill(), Vec2::new(4.0, 8.0));
    }

    #[test]
    fn tight_fill_is_exact() {
        assert_eq!(Constraints::tight(Vec2::new(3.0, 7.0)).fill(), Vec2::new(3.0, 7.0));
    }
}

use hue_engine::paint::Color;
use rand::Rng;

/// The color shown by a [`ColorBox`](crate::widgets::color_box::ColorBox).
///
/// Always fully opaque; channels are straight (not premultiplied) and lie in
/// `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    red:   f32,
    green: f32,
    blue:  f32,
}

impl ColorState {
    /// Opacity of every `ColorState`.
    pub const OPACITY: f32 = 1.0;

    /// Named yellow: full red and green, no blue.
    pub const YELLOW: ColorState = ColorState { red: 1.0, green: 1.0, blue: 0.0 };

    /// Builds a state, clamping channels into `[0, 1]` and mapping NaN / infinities to 0.
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red: channel(red), green: channel(green), blue: channel(blue) }
    }

    /// Draws red, green and blue independently and uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let red = rng.random::<f32>();
        let green = rng.random::<f32>();
        let blue = rng.random::<f32>();
        Self { red, green, blue }
    }

    #[inline]
    pub fn red(self) -> f32 {
        self.red
    }

    #[inline]
    pub fn green(self) -> f32 {
        self.green
    }

    #[inline]
    pub fn blue(self) -> f32 {
        self.blue
    }

    #[inline]
    pub fn alpha(self) -> f32 {
        Self::OPACITY
    }

    /// Engine paint color. Opaque, so premultiplied equals straight.
    pub fn to_color(self) -> Color {
        Color::opaque(self.red, self.green, self.blue)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::YELLOW
    }
}

impl From<ColorState> for Color {
    fn from(s: ColorState) -> Self {
        s.to_color()
    }
}

fn channel(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn yellow_is_default_and_matches_paint_yellow() {
        assert_eq!(ColorState::default(), ColorState::YELLOW);
        assert_eq!(ColorState::YELLOW.to_color(), Color::YELLOW);
        assert_eq!(ColorState::YELLOW.alpha(), 1.0);
    }

    #[test]
    fn new_clamps_and_sanitizes() {
        let s = ColorState::new(1.5, -0.25, f32::NAN);
        assert_eq!((s.red(), s.green(), s.blue()), (1.0, 0.0, 0.0));

        let s = ColorState::new(f32::INFINITY, 0.5, f32::NEG_INFINITY);
        assert_eq!((s.red(), s.green(), s.blue()), (0.0, 0.5, 0.0));
    }

    #[test]
    fn random_states_are_opaque_and_in_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1_000 {
            let s = ColorState::random(&mut rng);
            assert_eq!(s.alpha(), 1.0);
            for c in [s.red(), s.green(), s.blue()] {
                assert!((0.0..1.0).contains(&c), "channel {c} out of range");
            }
            assert!(s.to_color().is_opaque());
        }
    }

    #[test]
    fn random_is_deterministic_for_a_seed() {
        let a = ColorState::random(&mut StdRng::seed_from_u64(42));
        let b = ColorState::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn to_color_keeps_channels() {
        let c = ColorState::new(0.2, 0.4, 0.6).to_color();
        assert_eq!(c.to_straight(), (0.2, 0.4, 0.6, 1.0));
    }
}

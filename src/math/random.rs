//! Deterministic pseudo-random source for construction-point perturbation.
//!
//! Patterns that jitter their construction points take one of these as an
//! explicit value, so the same seed always yields the same geometry.

/// Largest seed produced by [`ParkMiller::seed_from_angle`] minus one.
const SEED_SPAN: f64 = 2_147_483_646.0;

/// Multiplicative congruential generator (Park-Miller multiplier 48271,
/// wrapping modulo 2³²).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkMiller {
    state: u32,
}

impl ParkMiller {
    /// Creates a generator with the given seed.
    ///
    /// A zero seed would stay at zero forever, so it is replaced by 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Derives the default seed for a normalized pattern angle in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn seed_from_angle(angle: f64) -> u32 {
        1 + (angle.clamp(0.0, 1.0) * SEED_SPAN).floor() as u32
    }

    /// Returns the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(48_271);
        f64::from(self.state & 0x7fff_ffff) / 2_147_483_648.0
    }

    /// Returns the next value mapped linearly into `[start, end)`.
    pub fn next_range(&mut self, start: f64, end: f64) -> f64 {
        map_unit(self.next_f64(), start, end)
    }
}

/// Maps `value` in `[0, 1]` linearly onto `[start, end]`.
#[must_use]
pub fn map_unit(value: f64, start: f64, end: f64) -> f64 {
    start + value * (end - start)
}

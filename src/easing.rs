/// Easing curves for animation interpolation.
///
/// Maps normalized time in [0, 1] to an interpolation factor in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in/ease-out (slow start, fast middle, slow end).
    QuadraticInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let omt = -2.0 * t + 2.0;
                    1.0 - omt * omt / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::QuadraticInOut
    }
}

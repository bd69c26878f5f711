use crate::easing::EasingFunction;

/// Repeat behavior for a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Play the given number of legs, then hold the final value.
    Count(u32),
    /// Loop forever.
    Infinite,
}

/// Time-driven interpolation of a single scalar.
///
/// Animates from `from` to `to` over `duration` seconds through an easing
/// curve. With yoyo enabled, every other leg runs in reverse so the value
/// oscillates instead of snapping back to the start.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    easing: EasingFunction,
    yoyo: bool,
    repeat: Repeat,
    elapsed: f32,
}

impl Tween {
    /// Create a linear one-shot tween. `duration` must be positive.
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        debug_assert!(duration > 0.0, "tween duration must be positive");
        Self {
            from,
            to,
            duration,
            easing: EasingFunction::Linear,
            yoyo: false,
            repeat: Repeat::Count(1),
            elapsed: 0.0,
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Advance internal time by `delta` seconds and return the new value.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed += delta.max(0.0);
        self.value_at(self.elapsed)
    }

    /// Current value at the internal clock.
    pub fn value(&self) -> f32 {
        self.value_at(self.elapsed)
    }

    /// Total time the tween has been advanced, in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether the tween has played out all of its legs.
    pub fn finished(&self) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            Repeat::Count(n) => self.elapsed >= self.duration * n as f32,
        }
    }

    /// Value at an absolute time in seconds, independent of the internal
    /// clock. Negative times clamp to the start.
    pub fn value_at(&self, time: f32) -> f32 {
        let t = time.max(0.0) / self.duration;

        let (leg, frac) = match self.repeat {
            Repeat::Infinite => (t.floor(), t.fract()),
            Repeat::Count(n) => {
                let total = n as f32;
                if t >= total {
                    // Hold the end of the final leg.
                    ((total - 1.0).max(0.0), 1.0)
                } else {
                    (t.floor(), t.fract())
                }
            }
        };

        let reversed = self.yoyo && (leg as u64) % 2 == 1;
        let progress = if reversed { 1.0 - frac } else { frac };

        self.from + (self.to - self.from) * self.easing.evaluate(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_reaches_target() {
        let mut tween = Tween::new(0.0, 2.0, 2.0);

        assert_eq!(tween.advance(1.0), 1.0);
        assert_eq!(tween.advance(1.0), 2.0);
        assert!(tween.finished());

        // Holds the target once done
        assert_eq!(tween.advance(5.0), 2.0);
    }

    #[test]
    fn yoyo_returns_to_start() {
        let mut tween = Tween::new(0.0, 2.0, 2.0)
            .with_yoyo(true)
            .with_repeat(Repeat::Infinite);

        assert_eq!(tween.advance(2.0), 2.0); // end of forward leg
        assert_eq!(tween.advance(2.0), 0.0); // end of return leg
        assert_eq!(tween.advance(2.0), 2.0); // forward again
    }

    #[test]
    fn infinite_never_finishes() {
        let mut tween = Tween::new(0.0, 1.0, 0.5).with_repeat(Repeat::Infinite);

        for _ in 0..1000 {
            let _ = tween.advance(0.1);
        }
        assert!(!tween.finished());
    }

    #[test]
    fn value_stays_in_range() {
        let tween = Tween::new(0.0, 2.0, 2.0)
            .with_easing(EasingFunction::QuadraticInOut)
            .with_yoyo(true)
            .with_repeat(Repeat::Infinite);

        for i in 0..2000 {
            let time = i as f32 * 0.01;
            let value = tween.value_at(time);
            assert!(
                (0.0..=2.0).contains(&value),
                "value {} escaped [0, 2] at time {}",
                value,
                time
            );
        }
    }

    #[test]
    fn eased_midpoint_matches_curve() {
        let tween = Tween::new(0.0, 2.0, 2.0).with_easing(EasingFunction::QuadraticInOut);

        // QuadraticInOut at t=0.25 is 2·0.25² = 0.125, scaled by the 2.0 span
        assert!((tween.value_at(0.5) - 0.25).abs() < 1e-6);
        // Symmetric curve crosses the middle exactly halfway through
        assert!((tween.value_at(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut tween = Tween::new(0.0, 1.0, 1.0);

        let _ = tween.advance(0.5);
        let value = tween.advance(-0.25);
        assert_eq!(value, 0.5);
        assert_eq!(tween.elapsed(), 0.5);
    }

    #[test]
    fn finite_repeat_with_yoyo_holds_final_leg() {
        let mut tween = Tween::new(0.0, 1.0, 1.0)
            .with_yoyo(true)
            .with_repeat(Repeat::Count(2));

        assert_eq!(tween.advance(1.0), 1.0); // forward leg done
        assert_eq!(tween.advance(1.0), 0.0); // return leg done
        assert!(tween.finished());
        assert_eq!(tween.advance(3.0), 0.0); // holds the return leg's end
    }

    #[test]
    fn non_zero_start_value() {
        let tween = Tween::new(-1.0, 3.0, 4.0);

        assert_eq!(tween.value_at(0.0), -1.0);
        assert_eq!(tween.value_at(2.0), 1.0);
        assert_eq!(tween.value_at(4.0), 3.0);
    }
}

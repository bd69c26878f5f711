use std::time::Instant;

/// Timing for one animation frame: its index, seconds since the loop
/// started, and seconds since the previous frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub elapsed: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, elapsed: f32, delta: f32) -> Self {
        Self {
            number,
            elapsed,
            delta,
        }
    }
}

/// Endless frame clock driven by the wall clock. Each `next()` stamps a
/// frame with real elapsed time, so delta follows however fast the display
/// actually presents.
pub struct WallClockFrames {
    next: u64,
    origin: Instant,
    previous: Instant,
}

impl WallClockFrames {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            next: 0,
            origin: now,
            previous: now,
        }
    }
}

impl Default for WallClockFrames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for WallClockFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let info = FrameInfo::new(
            self.next,
            now.duration_since(self.origin).as_secs_f32(),
            now.duration_since(self.previous).as_secs_f32(),
        );

        self.next += 1;
        self.previous = now;

        Some(info)
    }
}

/// Finite frame clock ticking at a fixed rate.
///
/// Stands in for the display's vsync signal when there is no display:
/// headless runs and property tests can simulate N ticks deterministically.
pub struct FixedFrames {
    timestep: f32,
    next: u64,
    remaining: u64,
}

impl FixedFrames {
    /// Create an iterator over `count` frames ticking at `hz`.
    pub fn new(count: u64, hz: f32) -> Self {
        Self {
            timestep: 1.0 / hz,
            next: 0,
            remaining: count,
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }
}

impl Iterator for FixedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.remaining == 0 {
            return None;
        }

        let number = self.next;
        let elapsed = (number + 1) as f32 * self.timestep;
        let info = FrameInfo::new(number, elapsed, self.timestep);

        self.next += 1;
        self.remaining -= 1;

        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_frames_count_up() {
        let mut frames = WallClockFrames::new();

        let a = frames.next().unwrap();
        let b = frames.next().unwrap();

        assert_eq!(a.number, 0);
        assert_eq!(b.number, 1);
        assert!(b.elapsed >= a.elapsed);
    }

    #[test]
    fn fixed_frames_yields_exact_count() {
        let frames = FixedFrames::new(10, 60.0);
        assert_eq!(frames.count(), 10);
    }

    #[test]
    fn fixed_frames_has_constant_delta() {
        let timestep = 1.0 / 60.0;

        for frame in FixedFrames::new(100, 60.0) {
            assert_eq!(frame.delta, timestep);
        }
    }

    #[test]
    fn fixed_frames_elapsed_accumulates_deltas() {
        let frames: Vec<FrameInfo> = FixedFrames::new(5, 10.0).collect();

        assert_eq!(frames.len(), 5);
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(frame.number, i as u64);
            let expected = (i + 1) as f32 * 0.1;
            assert!(
                (frame.elapsed - expected).abs() < 1e-6,
                "frame {} elapsed {} != {}",
                i,
                frame.elapsed,
                expected
            );
        }
    }
}

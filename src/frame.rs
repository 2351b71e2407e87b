use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock was created. Animations are functions of
    /// this value, never of the wall clock.
    pub time: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

/// Monotonic frame clock. Ticked exactly once per redraw by the binary.
#[derive(Debug)]
pub struct FrameClock {
    frame_number: u64,
    start: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            frame_number: 0,
            start: now,
            last_tick: now,
        }
    }

    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame_number,
            time: now.duration_since(self.start).as_secs_f32(),
            delta: now.duration_since(self.last_tick).as_secs_f32(),
        };
        self.frame_number += 1;
        self.last_tick = now;
        info
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn frame_numbers_increment() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().number, 0);
        assert_eq!(clock.tick().number, 1);
        assert_eq!(clock.tick().number, 2);
    }

    #[test]
    fn clock_measures_delta() {
        let mut clock = FrameClock::new();

        thread::sleep(Duration::from_millis(10));
        let frame = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(frame.delta >= 0.009 && frame.delta <= 0.050);
        assert!(frame.time >= frame.delta);
    }

    #[test]
    fn time_is_cumulative() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(5));
        let first = clock.tick();
        thread::sleep(Duration::from_millis(5));
        let second = clock.tick();
        assert!(second.time > first.time);
    }
}

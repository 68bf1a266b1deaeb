use std::thread;
use std::time::{Duration, Instant};

/// Keeps a frame on the strip for its hold time.
pub trait Pacer {
    fn hold(&mut self, duration: Duration);
}

/// Sleeps against a running deadline so time spent in `show` is not added
/// on top of each frame's hold.
pub struct FramePacer {
    deadline: Option<Instant>,
    late_frames: u32,
}

impl FramePacer {
    pub fn new() -> FramePacer {
        FramePacer {
            deadline: None,
            late_frames: 0,
        }
    }

    pub fn late_frames(&self) -> u32 {
        self.late_frames
    }
}

impl Pacer for FramePacer {
    fn hold(&mut self, duration: Duration) {
        let now = Instant::now();
        let start = self.deadline.unwrap_or(now);

        let next_tick = if start + duration > now {
            start + duration
        } else {
            self.late_frames += 1;
            log::debug!("Frame overran its {:?} hold", duration);
            now + duration
        };

        thread::sleep(next_tick - now);
        self.deadline = Some(next_tick);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records requested holds instead of sleeping.
    #[derive(Default)]
    pub struct RecordingPacer {
        pub holds: Vec<Duration>,
    }

    impl Pacer for RecordingPacer {
        fn hold(&mut self, duration: Duration) {
            self.holds.push(duration);
        }
    }
}

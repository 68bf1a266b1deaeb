use std::f64::consts::PI;

use crate::color::{scale, Color};
use crate::effects::{Frame, LightingEffect};

const STEPS: usize = 100;
const HOLD_MS: u64 = 10;

/// Half a sine period: rises from black to the target and back down.
pub struct Pulse;

impl LightingEffect for Pulse {
    fn frames(&self, color: Color, intensity: f64) -> Vec<Frame> {
        (0..STEPS)
            .map(|i| {
                let factor = (i as f64 / STEPS as f64 * PI).sin();
                Frame::new(scale(color, intensity * factor), HOLD_MS)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use std::time::Duration;

    fn channel_distance(a: Color, b: Color) -> u8 {
        let d = |x: u8, y: u8| x.abs_diff(y);
        d(a.red, b.red).max(d(a.green, b.green)).max(d(a.blue, b.blue))
    }

    #[test]
    fn starts_and_ends_near_black() {
        let color = Color::new(255, 87, 51);
        let frames = Pulse.frames(color, 1.0);

        assert_eq!(frames[0].color, BLACK);
        // sin(99/100 * pi) is about 0.031
        assert!(channel_distance(frames[STEPS - 1].color, BLACK) <= 8);
    }

    #[test]
    fn peaks_at_midpoint() {
        let color = Color::new(200, 100, 50);
        let frames = Pulse.frames(color, 0.8);

        let target = scale(color, 0.8);
        assert!(channel_distance(frames[STEPS / 2].color, target) <= 1);
        for frame in &frames {
            assert!(frame.color.red <= target.red);
        }
    }

    #[test]
    fn every_frame_held_ten_ms() {
        let frames = Pulse.frames(Color::new(1, 2, 3), 1.0);
        assert!(frames.iter().all(|f| f.hold == Duration::from_millis(10)));
    }
}

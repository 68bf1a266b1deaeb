use crate::color::{scale, Color, BLACK};
use crate::effects::{Frame, LightingEffect};

const FLASHES: usize = 4;
const ON_MS: u64 = 50;
const OFF_MS: u64 = 80;

pub struct Strobe;

impl LightingEffect for Strobe {
    fn frames(&self, color: Color, intensity: f64) -> Vec<Frame> {
        let on = scale(color, intensity);
        (0..FLASHES)
            .flat_map(|_| [Frame::new(on, ON_MS), Frame::new(BLACK, OFF_MS)])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn alternates_color_and_black() {
        let color = Color::new(255, 87, 51);
        let frames = Strobe.frames(color, 1.0);

        assert_eq!(frames.len(), 8);
        for pair in frames.chunks(2) {
            assert_eq!(pair[0].color, color);
            assert_eq!(pair[0].hold, Duration::from_millis(50));
            assert_eq!(pair[1].color, BLACK);
            assert_eq!(pair[1].hold, Duration::from_millis(80));
        }
    }

    #[test]
    fn flashes_use_scaled_color() {
        let frames = Strobe.frames(Color::new(10, 20, 30), 0.5);
        assert_eq!(frames[0].color, Color::new(5, 10, 15));
    }
}

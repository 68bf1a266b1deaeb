use crate::color::{scale, Color};
use crate::effects::{Frame, LightingEffect};

const STEPS: usize = 50;
const HOLD_MS: u64 = 20;

/// Linear ramp from black up to the target color.
pub struct Fade;

impl LightingEffect for Fade {
    fn frames(&self, color: Color, intensity: f64) -> Vec<Frame> {
        let last = (STEPS - 1) as f64;
        (0..STEPS)
            .map(|i| Frame::new(scale(color, intensity * (i as f64 / last)), HOLD_MS))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use std::time::Duration;

    #[test]
    fn ramps_from_black_to_target() {
        let color = Color::new(255, 87, 51);
        let frames = Fade.frames(color, 0.5);

        assert_eq!(frames.first().map(|f| f.color), Some(BLACK));
        assert_eq!(frames.last().map(|f| f.color), Some(scale(color, 0.5)));
        assert!(frames.iter().all(|f| f.hold == Duration::from_millis(20)));
    }

    #[test]
    fn never_gets_darker() {
        let frames = Fade.frames(Color::new(200, 150, 100), 1.0);
        for pair in frames.windows(2) {
            assert!(pair[1].color.red >= pair[0].color.red);
            assert!(pair[1].color.green >= pair[0].color.green);
            assert!(pair[1].color.blue >= pair[0].color.blue);
        }
    }
}

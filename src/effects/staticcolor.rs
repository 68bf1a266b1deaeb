use crate::color::{scale, Color};
use crate::effects::{Frame, LightingEffect};

/// Time the strip stays lit before the process moves on.
const HOLD_MS: u64 = 100;

pub struct StaticColor;

impl LightingEffect for StaticColor {
    fn frames(&self, color: Color, intensity: f64) -> Vec<Frame> {
        vec![Frame::new(scale(color, intensity), HOLD_MS)]
    }
}

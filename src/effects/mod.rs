pub(crate) mod fade;
pub(crate) mod pulse;
pub(crate) mod staticcolor;
pub(crate) mod strobe;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::color::Color;

/// One step of an animation: the color shown and how long it stays up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub color: Color,
    pub hold: Duration,
}

impl Frame {
    pub fn new(color: Color, hold_ms: u64) -> Frame {
        Frame {
            color,
            hold: Duration::from_millis(hold_ms),
        }
    }
}

pub trait LightingEffect {
    fn frames(&self, color: Color, intensity: f64) -> Vec<Frame>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Static,
    Pulse,
    Strobe,
    Fade,
}

impl Effect {
    pub const ALL: [Effect; 4] = [Effect::Static, Effect::Pulse, Effect::Strobe, Effect::Fade];

    pub fn name(&self) -> &'static str {
        match self {
            Effect::Static => "static",
            Effect::Pulse => "pulse",
            Effect::Strobe => "strobe",
            Effect::Fade => "fade",
        }
    }

    /// Whether the effect ends somewhere other than its target color.
    pub fn is_animated(&self) -> bool {
        !matches!(self, Effect::Static)
    }

    fn lighting_effect(&self) -> &'static dyn LightingEffect {
        match self {
            Effect::Static => &staticcolor::StaticColor,
            Effect::Pulse => &pulse::Pulse,
            Effect::Strobe => &strobe::Strobe,
            Effect::Fade => &fade::Fade,
        }
    }

    pub fn frames(&self, color: Color, intensity: f64) -> Vec<Frame> {
        self.lighting_effect().frames(color, intensity)
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Effect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Effect::ALL
            .into_iter()
            .find(|effect| effect.name() == wanted)
            .ok_or_else(|| s.to_string())
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::color::{scale, Color};
use crate::effects::Effect;
use crate::error::LightError;
use crate::output::PixelSink;
use crate::pacer::Pacer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    Interrupted,
}

/// Plays an effect's frames into a sink, one `fill` + `show` per frame.
pub struct Renderer {
    persist_after_effect: bool,
    interrupted: Arc<AtomicBool>,
}

impl Renderer {
    pub fn new(persist_after_effect: bool, interrupted: Arc<AtomicBool>) -> Renderer {
        Renderer {
            persist_after_effect,
            interrupted,
        }
    }

    pub fn render(
        &self,
        sink: &mut dyn PixelSink,
        pacer: &mut dyn Pacer,
        effect: Effect,
        color: Color,
        intensity: f64,
    ) -> Result<RenderOutcome, LightError> {
        let frames = effect.frames(color, intensity);
        log::debug!("Rendering {} frames of {}", frames.len(), effect);

        for frame in frames {
            if self.interrupted.load(Ordering::SeqCst) {
                return Ok(RenderOutcome::Interrupted);
            }

            sink.fill(frame.color);
            sink.show()?;
            pacer.hold(frame.hold);
        }

        // Animated effects end dark or mid-ramp; settle on the target so the
        // strip keeps showing it after we exit.
        if self.persist_after_effect && effect.is_animated() {
            sink.fill(scale(color, intensity));
            sink.show()?;
        }

        Ok(RenderOutcome::Completed)
    }
}

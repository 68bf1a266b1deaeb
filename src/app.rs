use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::color::parse_hex_color;
use crate::config::{LightConfig, UnknownEffectPolicy};
use crate::effects::Effect;
use crate::error::LightError;
use crate::output::{PixelSink, SinkGuard};
use crate::pacer::Pacer;
use crate::renderer::{RenderOutcome, Renderer};

/// One invocation's worth of user input, as typed.
#[derive(Debug, Clone)]
pub struct Request {
    pub color: String,
    pub intensity: f64,
    pub effect: String,
}

fn resolve_effect(name: &str, policy: UnknownEffectPolicy) -> Result<Effect, LightError> {
    match name.parse::<Effect>() {
        Ok(effect) => Ok(effect),
        Err(name) => match policy {
            UnknownEffectPolicy::Reject => Err(LightError::UnknownEffect(name)),
            UnknownEffectPolicy::Fallback => {
                log::warn!("Unknown effect '{}', showing static color instead", name);
                Ok(Effect::Static)
            }
        },
    }
}

/// Validates the request, acquires the output through `open` and plays the
/// effect. Input is checked before the output is touched, so a rejected
/// request never writes to the strip.
pub fn run<F>(
    request: &Request,
    config: &LightConfig,
    open: F,
    pacer: &mut dyn Pacer,
    interrupted: Arc<AtomicBool>,
) -> Result<RenderOutcome, LightError>
where
    F: FnOnce(&LightConfig) -> Result<Box<dyn PixelSink>, LightError>,
{
    let color = parse_hex_color(&request.color)?;
    let effect = resolve_effect(&request.effect, config.unknown_effect)?;

    let intensity = request.intensity;
    if !(0.0..=1.0).contains(&intensity) {
        log::warn!("Intensity {} is outside 0.0-1.0 and will be clamped", intensity);
    }

    let sink = open(config)?;
    let mut guard = SinkGuard::new(sink, !config.persist_after_effect);

    log::info!(
        "Applying effect '{}' with color '{}' at intensity {}",
        effect,
        request.color,
        intensity
    );

    let renderer = Renderer::new(config.persist_after_effect, interrupted);
    renderer.render(&mut *guard, pacer, effect, color, intensity)
}
